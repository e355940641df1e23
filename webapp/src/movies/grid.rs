use dioxus::prelude::*;

use crate::common::release_year;
use crate::movies::selection::Selection;
use api::movie::Movie;

#[derive(Clone, PartialEq, Props)]
struct MovieTileProps {
    selection_signal: Signal<Selection>,
    movie: Movie,
}

#[component]
fn MovieTile(props: MovieTileProps) -> Element {
    let mut selection_signal = props.selection_signal;
    let movie = props.movie;

    let title = movie.title.clone();
    let poster = movie.poster_link();
    let year = release_year(&movie.release_date);
    let rating = match movie.rating() {
        Some(value) => format!("{value:.1}"),
        None => String::from("N/A"),
    };

    rsx! {
        div {
            class: "movie-tile",
            onclick: move |_| { selection_signal.write().select(movie.clone()) },

            img { src: poster, alt: "{title}", loading: "lazy" }
            div { class: "movie-tile-caption",
                span { class: "movie-title", "{title}" }
                div { class: "movie-tile-meta",
                    span { "{year}" }
                    span { class: "movie-rating", "★ {rating}" }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct MovieGridProps {
    pub selection_signal: Signal<Selection>,
    pub movies: Vec<Movie>,
}

#[component]
pub fn MovieGrid(props: MovieGridProps) -> Element {
    rsx! {
        div { class: "movie-grid",
            for movie in props.movies.iter() {
                MovieTile {
                    key: "{movie.id}",
                    selection_signal: props.selection_signal,
                    movie: movie.clone(),
                }
            }
        }
    }
}
