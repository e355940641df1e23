use dioxus::prelude::*;
use tracing::error;

use crate::{
    common::toast::{push_toast, ToastTray},
    components::{pagination::Pagination, search_bar::SearchBar},
};
use api::search::{search_movies, SearchMoviesReq};

pub mod controller;
use controller::{ResultState, SearchState};

pub mod selection;
use selection::Selection;

mod grid;
use grid::MovieGrid;

mod detail;
use detail::MovieModal;

// kick off the fetch for the controller's current key; the outcome is
// applied only if the key is still current when the response lands
fn issue_fetch(mut state: Signal<SearchState>) {
    let Some(key) = state.write().begin_fetch() else {
        return;
    };

    spawn(async move {
        let req = SearchMoviesReq {
            query: key.0.clone(),
            page: key.1,
        };

        let result = search_movies(&req).await;
        if let Err(err) = &result {
            error!("search_movies failed: {err}");
        }

        let notifications = state.write().apply_outcome(&key, result);
        for notification in notifications {
            push_toast(notification);
        }
    });
}

//
// ROUTE TARGET
//
#[component]
pub fn MovieSearch() -> Element {
    let mut state = use_signal(SearchState::default);
    let selection_signal = use_signal(Selection::default);

    let result = state.read().result_state();
    let page = state.read().page();
    let total_pages = state.read().total_pages();

    let status = match &result {
        ResultState::Idle => String::new(),
        ResultState::Loading { .. } => String::from("Loading..."),
        ResultState::Success { movies, .. } => format!("Found {} results", movies.len()),
        ResultState::Empty => String::from("Found 0 results"),
        ResultState::Error { .. } => String::from("Error from search_movies"),
    };

    // results to keep on screen while a new key settles
    let previous_movies = match &result {
        ResultState::Loading { previous } => previous
            .as_ref()
            .map(|resp| resp.results.clone())
            .unwrap_or_default(),
        _ => Vec::new(),
    };

    let selected = selection_signal.read().current().cloned();

    rsx! {
        div { class: "container",
            ToastTray {}

            div { class: "page-header",
                h1 { class: "section-title", "Movie Search" }
                p { "Search the shared movie catalog" }
            }

            SearchBar {
                status,
                on_search: move |text: String| {
                    if state.write().change_query(&text) {
                        issue_fetch(state);
                    }
                },
                on_submit: move |text: String| {
                    let submitted = state.write().submit(&text);
                    match submitted {
                        Ok(true) => issue_fetch(state),
                        Ok(false) => {}
                        Err(notification) => push_toast(notification),
                    }
                },
            }

            if total_pages > 1 && !matches!(&result, ResultState::Idle | ResultState::Error { .. }) {
                Pagination {
                    page,
                    total_pages,
                    on_change: move |n| {
                        if state.write().change_page(n) {
                            issue_fetch(state);
                        }
                    },
                }
            }

            match &result {
                ResultState::Idle => rsx! {
                    div { class: "empty-state",
                        p { "Type to search for movies." }
                    }
                },
                ResultState::Loading { .. } => rsx! {
                    div { class: "loader", span { class: "spinner" } }
                    if !previous_movies.is_empty() {
                        MovieGrid { selection_signal, movies: previous_movies.clone() }
                    }
                },
                ResultState::Success { movies, .. } => rsx! {
                    MovieGrid { selection_signal, movies: movies.clone() }
                },
                ResultState::Empty => rsx! {
                    div { class: "empty-state",
                        p { "No movies found matching your search." }
                    }
                },
                ResultState::Error { message } => rsx! {
                    div { class: "error-state",
                        p { "Error: {message}" }
                    }
                },
            }

            match selected {
                Some(movie) => rsx! {
                    MovieModal { selection_signal, movie }
                },
                None => rsx! {},
            }
        }
    }
}
