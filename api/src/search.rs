use std::cell::RefCell;
use std::collections::HashMap;

use futures::future::{FutureExt, LocalBoxFuture, Shared};
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

use crate::movie::Movie;
use crate::{TMDB_API_TOKEN, URL_SEARCH_MOVIES};

// structs and types

// one request/response cycle is identified by this pair; the webapp relies on
// it both for de-duplication here and for discarding stale outcomes upstream
pub type SearchKey = (String, u32);

#[derive(Clone, Debug, thiserror::Error)]
pub enum SearchError {
    #[error("network error: {0}")]
    Network(String),
    #[error("movie service returned {status}: {message}")]
    Service { status: u16, message: String },
}

// messages

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SearchMoviesReq {
    pub query: String,
    pub page: u32,
}

impl SearchMoviesReq {
    pub fn key(&self) -> SearchKey {
        (self.query.clone(), self.page)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchMoviesResp {
    #[serde(default)]
    pub results: Vec<Movie>,
    #[serde(default)]
    pub total_pages: u32,
}

// error payload sent by the service alongside non-2xx statuses
#[derive(Clone, Debug, Deserialize)]
struct ServiceErrorBody {
    status_message: String,
}

type PendingSearch = Shared<LocalBoxFuture<'static, Result<SearchMoviesResp, SearchError>>>;

// the wasm event loop is single threaded, so plain RefCell maps are enough
// to share state between concurrent callers
thread_local! {
    static PENDING: RefCell<HashMap<SearchKey, PendingSearch>> = RefCell::new(HashMap::new());
    static COMPLETED: RefCell<HashMap<SearchKey, SearchMoviesResp>> = RefCell::new(HashMap::new());
}

// search the movie catalog for a (query, page) pair
//
// calls are de-duplicated by key: while a request is outstanding, further
// calls for the same key await the same shared future instead of issuing
// another round trip.  successful responses are kept for the rest of the
// session and served from the map on repeat lookups, which is what lets the
// webapp show the previous page's results while a new page loads.  errors
// are never cached, so a fresh user action retries the request.
pub async fn search_movies(req: &SearchMoviesReq) -> Result<SearchMoviesResp, SearchError> {
    let key = req.key();

    if let Some(hit) = COMPLETED.with(|cache| cache.borrow().get(&key).cloned()) {
        return Ok(hit);
    }

    let pending = PENDING.with(|pending| {
        let mut pending = pending.borrow_mut();

        match pending.get(&key).cloned() {
            Some(fut) => fut,
            None => {
                let fut = fetch_movies(req.clone()).boxed_local().shared();
                pending.insert(key.clone(), fut.clone());
                fut
            }
        }
    });

    let result = pending.await;

    PENDING.with(|pending| pending.borrow_mut().remove(&key));

    if let Ok(resp) = &result {
        COMPLETED.with(|cache| cache.borrow_mut().insert(key, resp.clone()));
    }

    result
}

async fn fetch_movies(req: SearchMoviesReq) -> Result<SearchMoviesResp, SearchError> {
    let page = req.page.to_string();

    let response = Request::get(URL_SEARCH_MOVIES)
        .query([
            ("query", req.query.as_str()),
            ("page", page.as_str()),
            ("include_adult", "false"),
            ("language", "en-US"),
        ])
        .header("Authorization", &format!("Bearer {TMDB_API_TOKEN}"))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|err| SearchError::Network(err.to_string()))?;

    if !response.ok() {
        let status = response.status();
        let status_text = response.status_text();

        // the service sends a structured message most of the time, but fall
        // back to the bare status text when the body does not parse
        let message = match response.json::<ServiceErrorBody>().await {
            Ok(body) => body.status_message,
            Err(_) => status_text,
        };

        return Err(SearchError::Service { status, message });
    }

    response
        .json::<SearchMoviesResp>()
        .await
        .map_err(|err| SearchError::Network(err.to_string()))
}
