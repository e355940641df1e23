use std::rc::Rc;

use dioxus::prelude::*;

use crate::common::scroll::ScrollLock;
use crate::movies::selection::Selection;
use api::movie::Movie;

// MovieModal
//
// detail overlay for the selected movie.  escape and a click on the
// backdrop both close it; the scroll lock is held in a hook so it releases
// when the overlay unmounts, however that happens.
#[derive(Clone, PartialEq, Props)]
pub struct MovieModalProps {
    pub selection_signal: Signal<Selection>,
    pub movie: Movie,
}

#[component]
pub fn MovieModal(props: MovieModalProps) -> Element {
    let mut selection_signal = props.selection_signal;
    let movie = props.movie;

    use_hook(|| Rc::new(ScrollLock::acquire()));

    let image = movie.backdrop_link();
    let overview = if movie.overview.is_empty() {
        "No description"
    } else {
        movie.overview.as_str()
    };
    let released = if movie.release_date.is_empty() {
        "Unknown"
    } else {
        movie.release_date.as_str()
    };
    let rating = match movie.rating() {
        Some(value) => format!("{value}/10"),
        None => String::from("N/A"),
    };

    rsx! {
        div {
            class: "modal-backdrop",
            role: "dialog",
            aria_modal: "true",
            tabindex: "0",
            autofocus: true,
            onkeydown: move |event| {
                if event.key() == Key::Escape {
                    selection_signal.write().close();
                }
            },
            onclick: move |_| { selection_signal.write().close() },

            div {
                class: "modal-surface",
                // keep clicks inside the surface from reaching the backdrop
                onclick: move |event| event.stop_propagation(),

                button {
                    class: "modal-close",
                    aria_label: "Close",
                    onclick: move |_| { selection_signal.write().close() },
                    "×"
                }
                img { src: image, alt: "{movie.title}" }
                div { class: "modal-content",
                    h2 { "{movie.title}" }
                    p { "{overview}" }
                    p {
                        strong { "Release Date: " }
                        "{released}"
                    }
                    p {
                        strong { "Rating: " }
                        "{rating}"
                    }
                }
            }
        }
    }
}
