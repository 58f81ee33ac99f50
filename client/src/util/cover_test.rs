use super::*;

#[test]
fn cover_url_uses_medium_size_on_cdn() {
    assert_eq!(cover_url(Some(12345)), "https://covers.openlibrary.org/b/id/12345-M.jpg");
}

#[test]
fn cover_url_without_id_is_placeholder() {
    assert_eq!(cover_url(None), "https://via.placeholder.com/128x192?text=No+Cover");
}
