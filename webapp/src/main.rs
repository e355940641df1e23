#![allow(non_snake_case)]
use dioxus::prelude::*;
use dioxus_router::prelude::*;

use tracing::Level;

mod common;

mod components;
use components::navigation::NavBar;

mod movies;
use movies::MovieSearch;

fn main() {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    launch(App);
}

#[derive(Clone, PartialEq, Routable)]
#[rustfmt::skip]
enum Route {
    #[layout(NavBar)]
        #[route("/")]
        MovieSearch {},
}

#[component]
pub fn App() -> Element {
    rsx! {
        style { "{common::style::MODERN_STYLES}" }
        Router::<Route> { config: RouterConfig::default }
    }
}
