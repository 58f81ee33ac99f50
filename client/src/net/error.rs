//! Failure taxonomy for a single search submission.
//!
//! Every variant is terminal for its submission and recovered locally: the
//! view shows [`SearchError::user_message`] and returns to idle.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

pub const FETCH_ERROR_MESSAGE: &str = "Unable to fetch data";
pub const NO_RESULTS_MESSAGE: &str = "No results found";
pub const UNEXPECTED_ERROR_MESSAGE: &str = "Unexpected error";

/// Errors produced while running a catalog search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// Submit attempted with blank or whitespace-only text. Never shown.
    #[error("empty query")]
    EmptyQuery,
    /// The catalog answered with a non-success HTTP status.
    #[error("catalog responded with status {status}")]
    Fetch { status: u16 },
    /// Well-formed response with no matching docs.
    #[error("no results")]
    NoResults,
    /// Transport, decoding, or any other failure.
    #[error("{0}")]
    Unexpected(String),
}

impl SearchError {
    /// Text displayed in the view for this failure.
    pub fn user_message(&self) -> String {
        match self {
            Self::EmptyQuery => String::new(),
            Self::Fetch { .. } => FETCH_ERROR_MESSAGE.to_owned(),
            Self::NoResults => NO_RESULTS_MESSAGE.to_owned(),
            Self::Unexpected(message) if message.trim().is_empty() => UNEXPECTED_ERROR_MESSAGE.to_owned(),
            Self::Unexpected(message) => message.clone(),
        }
    }
}

impl From<serde_json::Error> for SearchError {
    fn from(err: serde_json::Error) -> Self {
        Self::Unexpected(err.to_string())
    }
}
