use super::*;
use crate::config::PLACEHOLDER_COVER_URL;

fn record(title: &str, authors: &[&str], cover_id: Option<i64>) -> BookRecord {
    BookRecord {
        title: title.to_owned(),
        authors: authors.iter().map(|a| (*a).to_owned()).collect(),
        cover_id,
    }
}

#[test]
fn card_shows_title_author_and_cover() {
    let card = BookCardView::from(&record("Dune", &["Frank Herbert"], Some(12345)));
    assert_eq!(card.title, "Dune");
    assert_eq!(card.authors, "Frank Herbert");
    assert!(card.cover_src.contains("12345"));
}

#[test]
fn card_without_authors_is_unknown_author() {
    let card = BookCardView::from(&record("Beowulf", &[], Some(1)));
    assert_eq!(card.authors, "Unknown Author");
}

#[test]
fn card_with_missing_author_field_from_wire_is_unknown_author() {
    let parsed: BookRecord = serde_json::from_str(r#"{"title":"Beowulf"}"#).unwrap();
    assert_eq!(BookCardView::from(&parsed).authors, "Unknown Author");
}

#[test]
fn card_joins_multiple_authors_with_comma() {
    let card = BookCardView::from(&record("Good Omens", &["Terry Pratchett", "Neil Gaiman"], None));
    assert_eq!(card.authors, "Terry Pratchett, Neil Gaiman");
}

#[test]
fn card_without_cover_uses_placeholder() {
    let card = BookCardView::from(&record("Untitled", &["Anon"], None));
    assert_eq!(card.cover_src, PLACEHOLDER_COVER_URL);
}

#[test]
fn card_title_is_verbatim() {
    let card = BookCardView::from(&record("  <b>Odd</b> Title ", &[], None));
    assert_eq!(card.title, "  <b>Odd</b> Title ");
}

#[test]
fn card_views_preserve_order() {
    let records = vec![record("A", &[], None), record("B", &[], None), record("C", &[], None)];
    let titles: Vec<_> = card_views(&records).into_iter().map(|c| c.title).collect();
    assert_eq!(titles, vec!["A", "B", "C"]);
}

#[test]
fn card_views_of_empty_results_is_empty() {
    let before = card_views(&[record("Dune", &["Frank Herbert"], Some(12345))]);
    assert_eq!(before.len(), 1);
    assert!(card_views(&[]).is_empty());
}
