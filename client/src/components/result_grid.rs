//! Responsive grid of book cards.
//!
//! DESIGN
//! ======
//! Stateless: each card is a pure projection of one `BookRecord`. Cards are
//! positioned by index because catalog docs carry no stable identity.

#[cfg(test)]
#[path = "result_grid_test.rs"]
mod result_grid_test;

use leptos::prelude::*;

use crate::net::types::BookRecord;
use crate::util::cover::cover_url;

pub const UNKNOWN_AUTHOR: &str = "Unknown Author";

/// Display values for one card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookCardView {
    pub cover_src: String,
    pub title: String,
    pub authors: String,
}

impl From<&BookRecord> for BookCardView {
    fn from(record: &BookRecord) -> Self {
        let authors = if record.authors.is_empty() {
            UNKNOWN_AUTHOR.to_owned()
        } else {
            record.authors.join(", ")
        };
        Self {
            cover_src: cover_url(record.cover_id),
            title: record.title.clone(),
            authors,
        }
    }
}

/// Project records to card views, preserving order.
pub fn card_views(records: &[BookRecord]) -> Vec<BookCardView> {
    records.iter().map(BookCardView::from).collect()
}

/// One card per record, in input order.
#[component]
pub fn ResultGrid(#[prop(into)] books: Signal<Vec<BookRecord>>) -> impl IntoView {
    view! {
        <div class="result-grid">
            {move || {
                card_views(&books.get())
                    .into_iter()
                    .map(|card| view! { <BookCard card=card/> })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}

#[component]
fn BookCard(card: BookCardView) -> impl IntoView {
    let BookCardView { cover_src, title, authors } = card;
    let alt = title.clone();
    view! {
        <div class="book-card">
            <img class="book-card__cover" src=cover_src alt=alt/>
            <h2 class="book-card__title">{title}</h2>
            <p class="book-card__authors">{authors}</p>
        </div>
    }
}
