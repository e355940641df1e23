use tracing::debug;

use crate::common::toast::Notification;
use api::movie::Movie;
use api::search::{SearchError, SearchKey, SearchMoviesResp};

// SearchState
//
// the pure controller behind the search page: it owns the active query and
// page, the outcome of the fetch for that key, and the bookkeeping for the
// empty-result notice.  no framework types appear here, so the whole
// contract runs under plain cargo test on the host.
//
// the empty string is the "no active search" sentinel; it never reaches the
// gateway and renders as the idle state.

#[derive(Clone, Debug, PartialEq)]
pub enum FetchOutcome {
    Pending,
    Success(SearchMoviesResp),
    Failure(String),
}

// view model derived from (query, page, outcome); recomputed on every read
#[derive(Clone, Debug, PartialEq)]
pub enum ResultState {
    Idle,
    Loading { previous: Option<SearchMoviesResp> },
    Success { movies: Vec<Movie>, total_pages: u32 },
    Empty,
    Error { message: String },
}

#[derive(Clone, Debug)]
pub struct SearchState {
    query: String,
    page: u32,
    outcome: Option<(SearchKey, FetchOutcome)>,
    // kept across key changes so the grid can show the previous results
    // while the next fetch settles
    last_success: Option<SearchMoviesResp>,
    // the one query we have already told the user came back empty
    notified_empty: Option<String>,
}

impl Default for SearchState {
    fn default() -> Self {
        SearchState {
            query: String::new(),
            page: 1,
            outcome: None,
            last_success: None,
            notified_empty: None,
        }
    }
}

impl SearchState {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    // total pages of the last successful fetch, preferring the one for the
    // current key when it has resolved
    pub fn total_pages(&self) -> u32 {
        match &self.outcome {
            Some((key, FetchOutcome::Success(resp))) if Some(key) == self.current_key().as_ref() => {
                resp.total_pages
            }
            _ => self
                .last_success
                .as_ref()
                .map(|resp| resp.total_pages)
                .unwrap_or(0),
        }
    }

    fn current_key(&self) -> Option<SearchKey> {
        if self.query.is_empty() {
            None
        } else {
            Some((self.query.clone(), self.page))
        }
    }

    // explicit form submission; blank input is rejected with a notification
    // and no state change.  returns whether a fetch should be issued.
    pub fn submit(&mut self, raw: &str) -> Result<bool, Notification> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(Notification::validation());
        }

        if trimmed == self.query {
            // resubmitting after a failed fetch is the retry path; any other
            // resubmission of identical text is a no-op
            let failed = matches!(
                &self.outcome,
                Some((key, FetchOutcome::Failure(_))) if Some(key) == self.current_key().as_ref()
            );

            if failed {
                self.outcome = None;
                return Ok(true);
            }
            return Ok(false);
        }

        Ok(self.change_query(trimmed))
    }

    // switch to a new query: page resets to 1, the empty-notice record and
    // any in-flight outcome for the old key are dropped.  a blank argument
    // returns to the sentinel.  returns whether a fetch should be issued.
    pub fn change_query(&mut self, raw: &str) -> bool {
        let trimmed = raw.trim();

        if trimmed == self.query {
            return false;
        }

        self.query = trimmed.to_string();
        self.page = 1;
        self.notified_empty = None;
        self.outcome = None;

        !self.query.is_empty()
    }

    // out-of-range pages clamp into [1, total_pages] rather than being
    // rejected, so the paginator can stay dumb; no-op without an active
    // query or a known successful fetch.  never touches the query or the
    // empty-notice record.
    pub fn change_page(&mut self, n: u32) -> bool {
        if self.query.is_empty() {
            return false;
        }

        let total = self.total_pages();
        if total == 0 {
            return false;
        }

        let clamped = n.clamp(1, total);
        if clamped == self.page {
            return false;
        }

        self.page = clamped;
        true
    }

    // mark the current key pending and hand it to the caller; None when the
    // query is the sentinel or an outcome for this key is already in place
    pub fn begin_fetch(&mut self) -> Option<SearchKey> {
        let key = self.current_key()?;

        if let Some((active, _)) = &self.outcome {
            if *active == key {
                return None;
            }
        }

        self.outcome = Some((key.clone(), FetchOutcome::Pending));
        Some(key)
    }

    // record a resolved fetch; outcomes for keys that are no longer current
    // are dropped outright.  returns the notifications to surface.
    pub fn apply_outcome(
        &mut self,
        key: &SearchKey,
        result: Result<SearchMoviesResp, SearchError>,
    ) -> Vec<Notification> {
        if self.current_key().as_ref() != Some(key) {
            debug!("dropping stale search outcome for {:?}", key);
            return Vec::new();
        }

        match result {
            Ok(resp) if resp.results.is_empty() => {
                self.outcome = Some((key.clone(), FetchOutcome::Success(resp)));

                if self.notified_empty.as_deref() == Some(key.0.as_str()) {
                    Vec::new()
                } else {
                    self.notified_empty = Some(key.0.clone());
                    vec![Notification::empty_result()]
                }
            }
            Ok(resp) => {
                if self.notified_empty.as_deref() == Some(key.0.as_str()) {
                    self.notified_empty = None;
                }

                self.last_success = Some(resp.clone());
                self.outcome = Some((key.clone(), FetchOutcome::Success(resp)));
                Vec::new()
            }
            Err(err) => {
                self.outcome = Some((key.clone(), FetchOutcome::Failure(err.to_string())));
                vec![Notification::fetch_error(&err)]
            }
        }
    }

    pub fn result_state(&self) -> ResultState {
        let Some(key) = self.current_key() else {
            return ResultState::Idle;
        };

        match &self.outcome {
            Some((active, outcome)) if *active == key => match outcome {
                FetchOutcome::Pending => ResultState::Loading {
                    previous: self.last_success.clone(),
                },
                FetchOutcome::Success(resp) if resp.results.is_empty() => ResultState::Empty,
                FetchOutcome::Success(resp) => ResultState::Success {
                    movies: resp.results.clone(),
                    total_pages: resp.total_pages,
                },
                FetchOutcome::Failure(message) => ResultState::Error {
                    message: message.clone(),
                },
            },
            // the fetch for this key has not been issued yet
            _ => ResultState::Loading {
                previous: self.last_success.clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::toast::ToastCategory;

    fn page_of(count: u64, total_pages: u32) -> SearchMoviesResp {
        SearchMoviesResp {
            results: (0..count)
                .map(|n| Movie {
                    id: n,
                    title: format!("Movie {n}"),
                    ..Default::default()
                })
                .collect(),
            total_pages,
        }
    }

    fn empty_page() -> SearchMoviesResp {
        SearchMoviesResp::default()
    }

    #[test]
    fn blank_submit_rejected_without_state_change() {
        let mut state = SearchState::default();

        for raw in ["", "   ", "\t\n"] {
            let err = state.submit(raw).unwrap_err();
            assert_eq!(err.category, ToastCategory::ValidationError);
            assert_eq!(state.query(), "");
            assert_eq!(state.page(), 1);
            assert_eq!(state.result_state(), ResultState::Idle);
        }
    }

    #[test]
    fn submit_trims_and_starts_at_page_one() {
        let mut state = SearchState::default();

        assert_eq!(state.submit("  batman  "), Ok(true));
        assert_eq!(state.query(), "batman");
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn repeat_submit_of_same_query_is_noop() {
        let mut state = SearchState::default();
        state.submit("batman").unwrap();

        let key = state.begin_fetch().unwrap();
        state.apply_outcome(&key, Ok(page_of(20, 3)));

        assert_eq!(state.submit("batman"), Ok(false));
        assert_eq!(state.submit(" batman "), Ok(false));
        assert_eq!(state.begin_fetch(), None);
    }

    #[test]
    fn resubmit_after_failure_retries() {
        let mut state = SearchState::default();
        state.submit("batman").unwrap();

        let key = state.begin_fetch().unwrap();
        state.apply_outcome(&key, Err(SearchError::Network(String::from("timed out"))));
        assert!(matches!(state.result_state(), ResultState::Error { .. }));

        // identical text, but the failed outcome means one more fetch
        assert_eq!(state.submit("batman"), Ok(true));
        assert_eq!(state.begin_fetch(), Some((String::from("batman"), 1)));

        // a second resubmission while that retry is pending stays a no-op
        assert_eq!(state.submit("batman"), Ok(false));
    }

    #[test]
    fn query_change_resets_page() {
        let mut state = SearchState::default();
        state.change_query("dune");

        let key = state.begin_fetch().unwrap();
        state.apply_outcome(&key, Ok(page_of(20, 5)));
        state.change_page(3);

        assert!(state.change_query("arrival"));
        assert_eq!(state.page(), 1);

        // identical text does not reset anything
        let key = state.begin_fetch().unwrap();
        state.apply_outcome(&key, Ok(page_of(20, 5)));
        state.change_page(2);
        assert!(!state.change_query("arrival"));
        assert_eq!(state.page(), 2);
    }

    #[test]
    fn stale_outcome_never_rendered() {
        let mut state = SearchState::default();

        state.change_query("dune");
        let dune_key = state.begin_fetch().unwrap();

        // the user moves on before the first response lands
        state.change_query("arrival");
        let arrival_key = state.begin_fetch().unwrap();

        let notes = state.apply_outcome(&dune_key, Ok(page_of(7, 1)));
        assert!(notes.is_empty());
        assert!(matches!(
            state.result_state(),
            ResultState::Loading { previous: None }
        ));

        state.apply_outcome(&arrival_key, Ok(page_of(3, 1)));
        match state.result_state() {
            ResultState::Success { movies, .. } => assert_eq!(movies.len(), 3),
            other => panic!("expected success, got {other:?}"),
        }
    }

    #[test]
    fn empty_result_notifies_exactly_once() {
        let mut state = SearchState::default();
        state.change_query("xyzzy");

        let key = state.begin_fetch().unwrap();
        let notes = state.apply_outcome(&key, Ok(empty_page()));
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].category, ToastCategory::EmptyResult);
        assert_eq!(state.result_state(), ResultState::Empty);

        // the same empty outcome settling again must stay silent
        let notes = state.apply_outcome(&key, Ok(empty_page()));
        assert!(notes.is_empty());
    }

    #[test]
    fn query_change_rearms_empty_notice() {
        let mut state = SearchState::default();

        state.change_query("xyzzy");
        let key = state.begin_fetch().unwrap();
        assert_eq!(state.apply_outcome(&key, Ok(empty_page())).len(), 1);

        state.change_query("batman");
        state.change_query("xyzzy");

        let key = state.begin_fetch().unwrap();
        assert_eq!(state.apply_outcome(&key, Ok(empty_page())).len(), 1);
    }

    #[test]
    fn nonempty_result_rearms_empty_notice() {
        let mut state = SearchState::default();
        state.change_query("xyzzy");

        let key = state.begin_fetch().unwrap();
        assert_eq!(state.apply_outcome(&key, Ok(empty_page())).len(), 1);

        // the catalog caught up; the next empty result may notify again
        state.apply_outcome(&key, Ok(page_of(1, 1)));
        assert_eq!(state.apply_outcome(&key, Ok(empty_page())).len(), 1);
    }

    #[test]
    fn fetch_failures_notify_every_time() {
        let mut state = SearchState::default();
        state.change_query("batman");

        let key = state.begin_fetch().unwrap();
        let notes = state.apply_outcome(
            &key,
            Err(SearchError::Service {
                status: 500,
                message: String::from("Internal error"),
            }),
        );
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].category, ToastCategory::FetchError);
        assert!(notes[0].message.contains("500"));

        let notes = state.apply_outcome(&key, Err(SearchError::Network(String::from("down"))));
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].category, ToastCategory::FetchError);
    }

    #[test]
    fn sentinel_never_fetches() {
        let mut state = SearchState::default();

        assert!(!state.change_query("   "));
        assert_eq!(state.begin_fetch(), None);
        assert_eq!(state.result_state(), ResultState::Idle);
        assert!(!state.change_page(2));

        // clearing an active query returns to the sentinel
        state.change_query("batman");
        let key = state.begin_fetch().unwrap();
        state.apply_outcome(&key, Ok(page_of(20, 3)));

        assert!(!state.change_query(""));
        assert_eq!(state.page(), 1);
        assert_eq!(state.begin_fetch(), None);
        assert_eq!(state.result_state(), ResultState::Idle);
        assert!(!state.change_page(2));
    }

    #[test]
    fn page_change_clamps_out_of_range_requests() {
        let mut state = SearchState::default();
        state.change_query("batman");

        // nothing fetched yet, so there is nothing to page through
        assert!(!state.change_page(2));

        let key = state.begin_fetch().unwrap();
        state.apply_outcome(&key, Ok(page_of(20, 3)));

        assert!(state.change_page(9));
        assert_eq!(state.page(), 3);

        assert!(state.change_page(0));
        assert_eq!(state.page(), 1);

        // clamping onto the current page is a no-op
        assert!(!state.change_page(0));
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn page_change_keeps_query_and_empty_notice() {
        let mut state = SearchState::default();
        state.change_query("batman");

        let key = state.begin_fetch().unwrap();
        state.apply_outcome(&key, Ok(page_of(20, 3)));

        assert!(state.change_page(2));
        assert_eq!(state.query(), "batman");
        assert_eq!(state.begin_fetch(), Some((String::from("batman"), 2)));
    }

    #[test]
    fn loading_serves_previous_results_until_new_key_settles() {
        let mut state = SearchState::default();

        state.change_query("dune");
        let key = state.begin_fetch().unwrap();
        state.apply_outcome(&key, Ok(page_of(20, 3)));

        state.change_query("arrival");
        let key = state.begin_fetch().unwrap();

        match state.result_state() {
            ResultState::Loading { previous: Some(resp) } => assert_eq!(resp.results.len(), 20),
            other => panic!("expected loading with previous results, got {other:?}"),
        }

        state.apply_outcome(&key, Ok(page_of(5, 1)));
        match state.result_state() {
            ResultState::Success { movies, total_pages } => {
                assert_eq!(movies.len(), 5);
                assert_eq!(total_pages, 1);
            }
            other => panic!("expected success, got {other:?}"),
        }
    }

    #[test]
    fn begin_fetch_deduplicates_current_key() {
        let mut state = SearchState::default();
        state.change_query("batman");

        assert!(state.begin_fetch().is_some());
        assert_eq!(state.begin_fetch(), None);
        assert!(matches!(state.result_state(), ResultState::Loading { .. }));
    }

    #[test]
    fn search_then_page_change_end_to_end() {
        let mut state = SearchState::default();

        // debounced input settles on "batman"
        assert!(state.change_query("batman"));
        let key = state.begin_fetch().unwrap();
        assert_eq!(key, (String::from("batman"), 1));

        let notes = state.apply_outcome(&key, Ok(page_of(20, 3)));
        assert!(notes.is_empty());
        assert!(matches!(state.result_state(), ResultState::Success { .. }));
        assert_eq!(state.total_pages(), 3);

        assert!(state.change_page(2));
        let key = state.begin_fetch().unwrap();
        assert_eq!(key, (String::from("batman"), 2));
        assert_eq!(state.query(), "batman");

        state.apply_outcome(&key, Ok(page_of(20, 3)));
        assert_eq!(state.page(), 2);
    }
}
