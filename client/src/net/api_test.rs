use super::*;

// =============================================================
// search_url
// =============================================================

#[test]
fn search_url_puts_query_in_title_parameter() {
    assert_eq!(search_url("dune"), "https://openlibrary.org/search.json?title=dune");
}

#[test]
fn search_url_percent_encodes_spaces_and_reserved_characters() {
    assert_eq!(
        search_url("war & peace?"),
        "https://openlibrary.org/search.json?title=war%20%26%20peace%3F"
    );
}

#[test]
fn search_url_encodes_non_ascii_as_utf8() {
    assert_eq!(search_url("é"), "https://openlibrary.org/search.json?title=%C3%A9");
}

#[test]
fn search_url_does_not_trim_query() {
    assert_eq!(search_url(" dune "), "https://openlibrary.org/search.json?title=%20dune%20");
}

// =============================================================
// check_status
// =============================================================

#[test]
fn check_status_accepts_2xx() {
    assert_eq!(check_status(200), Ok(()));
    assert_eq!(check_status(204), Ok(()));
    assert_eq!(check_status(299), Ok(()));
}

#[test]
fn check_status_rejects_server_error() {
    assert_eq!(check_status(500), Err(SearchError::Fetch { status: 500 }));
}

#[test]
fn check_status_rejects_redirect_and_client_error() {
    assert_eq!(check_status(304), Err(SearchError::Fetch { status: 304 }));
    assert_eq!(check_status(404), Err(SearchError::Fetch { status: 404 }));
}

// =============================================================
// parse_search_body
// =============================================================

#[test]
fn parse_search_body_returns_all_docs_in_order() {
    let body = r#"{"numFound":3,"docs":[{"title":"A"},{"title":"B"},{"title":"C"}]}"#;
    let titles: Vec<_> = parse_search_body(body)
        .unwrap()
        .into_iter()
        .map(|record| record.title)
        .collect();
    assert_eq!(titles, vec!["A", "B", "C"]);
}

#[test]
fn parse_search_body_empty_docs_is_no_results() {
    assert_eq!(parse_search_body(r#"{"docs":[]}"#), Err(SearchError::NoResults));
}

#[test]
fn parse_search_body_missing_docs_is_no_results() {
    assert_eq!(parse_search_body(r#"{"numFound":0}"#), Err(SearchError::NoResults));
}

#[test]
fn parse_search_body_malformed_json_is_unexpected() {
    let err = parse_search_body("<html>oops</html>").unwrap_err();
    assert!(matches!(err, SearchError::Unexpected(ref msg) if !msg.is_empty()));
}

// =============================================================
// search_books (non-hydrate stub)
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn search_books_is_unavailable_outside_browser() {
    let result = futures::executor::block_on(search_books("dune"));
    assert_eq!(result, Err(SearchError::Unexpected("not available on server".to_owned())));
}
