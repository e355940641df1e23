use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::Route;

#[component]
fn NavBarInner() -> Element {
    rsx! {
        header { class: "app-header",
            div { class: "nav-container",
                div { class: "logo",
                    Link {
                        to: Route::MovieSearch {},
                        style: "display: flex; align-items: center;",
                        span { style: "font-weight: 600; font-size: 1.25rem;", "MovieGrid" }
                    }
                }

                nav { class: "nav-links",
                    a {
                        href: "https://www.themoviedb.org/",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "Powered by TMDB"
                    }
                }
            }
        }
    }
}

#[component]
pub fn NavBar() -> Element {
    rsx! {
        NavBarInner {}
        Outlet::<Route> {}
    }
}
