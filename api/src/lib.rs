pub mod movie;
pub mod search;

// endpoint and image bases for the movie catalog service
pub const URL_SEARCH_MOVIES: &str = "https://api.themoviedb.org/3/search/movie";
pub const URL_IMAGE_BASE: &str = "https://image.tmdb.org/t/p";

// the catalog logo, shown whenever a movie has no artwork of its own
pub const URL_IMAGE_FALLBACK: &str = "https://www.themoviedb.org/assets/2/v4/logos/v2/blue_square_2-d537fb228cf3ded904ef09b136fe3fec72548ebc1fea3fbbd1ad9e36364db38b.svg";

// read access token, baked in at compile time so the wasm bundle needs no
// runtime configuration; a missing token surfaces as a 401 from the service
pub const TMDB_API_TOKEN: &str = match option_env!("TMDB_API_TOKEN") {
    Some(token) => token,
    None => "",
};
