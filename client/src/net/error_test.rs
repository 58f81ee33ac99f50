use super::*;

#[test]
fn fetch_error_shows_fixed_message_regardless_of_status() {
    assert_eq!(SearchError::Fetch { status: 500 }.user_message(), "Unable to fetch data");
    assert_eq!(SearchError::Fetch { status: 404 }.user_message(), "Unable to fetch data");
}

#[test]
fn no_results_shows_fixed_message() {
    assert_eq!(SearchError::NoResults.user_message(), "No results found");
}

#[test]
fn unexpected_error_uses_its_own_message() {
    let err = SearchError::Unexpected("Failed to fetch".to_owned());
    assert_eq!(err.user_message(), "Failed to fetch");
}

#[test]
fn unexpected_error_without_message_falls_back() {
    assert_eq!(SearchError::Unexpected(String::new()).user_message(), "Unexpected error");
    assert_eq!(SearchError::Unexpected("  ".to_owned()).user_message(), "Unexpected error");
}

#[test]
fn display_includes_status_for_logging() {
    assert_eq!(SearchError::Fetch { status: 503 }.to_string(), "catalog responded with status 503");
}

#[test]
fn json_errors_convert_to_unexpected() {
    let err: SearchError = serde_json::from_str::<serde_json::Value>("{").unwrap_err().into();
    assert!(matches!(err, SearchError::Unexpected(ref msg) if !msg.is_empty()));
}
