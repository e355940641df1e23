use serde::{Deserialize, Serialize};

use crate::{URL_IMAGE_BASE, URL_IMAGE_FALLBACK};

// structs and types

pub type MovieUuid = u64;

// one catalog record, immutable once received; identity is the uuid
//
// the optional fields really are absent or null for a fair fraction of the
// catalog, so everything except id and title gets a serde default
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieUuid,
    pub title: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
}

impl Movie {
    // grid tiles use the smaller poster rendition
    pub fn poster_link(&self) -> String {
        match &self.poster_path {
            Some(path) => format!("{URL_IMAGE_BASE}/w500{path}"),
            None => String::from(URL_IMAGE_FALLBACK),
        }
    }

    // the detail overlay prefers the backdrop and falls back to the poster
    pub fn backdrop_link(&self) -> String {
        match (&self.backdrop_path, &self.poster_path) {
            (Some(path), _) => format!("{URL_IMAGE_BASE}/original{path}"),
            (None, Some(path)) => format!("{URL_IMAGE_BASE}/original{path}"),
            (None, None) => String::from(URL_IMAGE_FALLBACK),
        }
    }

    // 0.0 doubles as "not rated" on the wire
    pub fn rating(&self) -> Option<f64> {
        if self.vote_average > 0.0 {
            Some(self.vote_average)
        } else {
            None
        }
    }
}
