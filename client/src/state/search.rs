//! Search interaction state for the search page.
//!
//! DESIGN
//! ======
//! All mutation goes through `set_query`, `begin_search` and
//! `finish_search`. The page holds one `RwSignal<SearchState>` and renders
//! from `status()`, so the display rules are testable without a browser.
//!
//! Concurrent submissions are not sequenced: whichever response calls
//! `finish_search` last determines the final state.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use crate::net::error::{NO_RESULTS_MESSAGE, SearchError};
use crate::net::types::BookRecord;

/// What the results area should show, in display-priority order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchStatus {
    /// Nothing submitted yet.
    Idle,
    /// A request is in flight.
    Loading,
    /// The last submission failed; holds the user-facing message.
    Failed(String),
    /// The last submission matched nothing; holds the submitted query.
    NoResults(String),
    /// Records are available for the grid.
    Results,
}

/// Query text, results and request lifecycle for one search view.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchState {
    /// Input text exactly as typed.
    pub query: String,
    /// Records from the last successful search, in catalog order.
    pub results: Vec<BookRecord>,
    pub loading: bool,
    pub error: Option<SearchError>,
    /// Query text sent with the most recent submission.
    pub submitted_query: Option<String>,
}

impl SearchState {
    /// Replace the input text verbatim.
    pub fn set_query(&mut self, text: String) {
        self.query = text;
    }

    /// Whether the submit action is enabled.
    pub fn can_submit(&self) -> bool {
        !self.query.trim().is_empty()
    }

    /// Start a submission and return the query to send.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::EmptyQuery`], leaving state untouched, when the
    /// trimmed query is empty. Callers ignore it silently.
    pub fn begin_search(&mut self) -> Result<String, SearchError> {
        if !self.can_submit() {
            return Err(SearchError::EmptyQuery);
        }
        self.error = None;
        self.results.clear();
        self.loading = true;
        self.submitted_query = Some(self.query.clone());
        Ok(self.query.clone())
    }

    /// Apply the outcome of a submission. Always clears `loading`.
    pub fn finish_search(&mut self, outcome: Result<Vec<BookRecord>, SearchError>) {
        match outcome {
            Ok(records) => {
                self.error = None;
                self.results = records;
            }
            Err(err) => self.error = Some(err),
        }
        self.loading = false;
    }

    /// Message for the current error, if any.
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(SearchError::user_message)
    }

    /// Resolve which of the mutually exclusive displays is active.
    pub fn status(&self) -> SearchStatus {
        if self.loading {
            return SearchStatus::Loading;
        }
        match &self.error {
            Some(SearchError::NoResults) => {
                return SearchStatus::NoResults(self.submitted_query.clone().unwrap_or_default());
            }
            Some(err) => return SearchStatus::Failed(err.user_message()),
            None => {}
        }
        if !self.results.is_empty() {
            return SearchStatus::Results;
        }
        match &self.submitted_query {
            Some(query) if !query.trim().is_empty() => SearchStatus::NoResults(query.clone()),
            _ => SearchStatus::Idle,
        }
    }
}

/// Empty-state text shown when a search matched nothing.
pub fn no_results_message(query: &str) -> String {
    format!("{NO_RESULTS_MESSAGE} for \"{query}\". Try a different title.")
}
