//! Book search page: query form plus loading / error / results display.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only route. The page owns a `SearchState` signal, issues the
//! catalog request from the browser on submit, and hands records to
//! `ResultGrid`. The grid never calls back into the page.

use leptos::prelude::*;

use crate::components::result_grid::ResultGrid;
use crate::state::search::{SearchState, SearchStatus, no_results_message};

/// Search form and result area.
#[component]
pub fn SearchView() -> impl IntoView {
    let search = RwSignal::new(SearchState::default());
    let status = Memo::new(move |_| search.with(SearchState::status));
    let results = Memo::new(move |_| search.with(|s| s.results.clone()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !search.with_untracked(SearchState::can_submit) {
            return;
        }
        let Some(Ok(query)) = search.try_update(SearchState::begin_search) else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            log::info!("searching catalog for {query:?}");
            let outcome = crate::net::api::search_books(&query).await;
            match &outcome {
                Ok(records) => log::info!("search for {query:?} returned {} records", records.len()),
                Err(e) => log::warn!("search for {query:?} failed: {e}"),
            }
            search.update(|s| s.finish_search(outcome));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = query;
    };

    view! {
        <div class="search-page">
            <h1 class="search-page__title">"Book Finder"</h1>

            <form class="search-form" on:submit=on_submit>
                <input
                    class="search-form__input"
                    type="text"
                    aria-label="Search for a book title"
                    placeholder="Search for a book title..."
                    prop:value=move || search.with(|s| s.query.clone())
                    on:input=move |ev| search.update(|s| s.set_query(event_target_value(&ev)))
                />
                <button
                    class="search-form__button"
                    class:search-form__button--disabled=move || !search.with(SearchState::can_submit)
                    type="submit"
                    disabled=move || !search.with(SearchState::can_submit)
                >
                    "Search"
                </button>
            </form>

            {move || match status.get() {
                SearchStatus::Idle => ().into_any(),
                SearchStatus::Loading => view! { <LoadingIndicator/> }.into_any(),
                SearchStatus::Failed(message) => {
                    view! { <p class="search-page__error">{message}</p> }.into_any()
                }
                SearchStatus::NoResults(query) => {
                    view! { <p class="search-page__empty">{no_results_message(&query)}</p> }.into_any()
                }
                SearchStatus::Results => view! { <ResultGrid books=results/> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn LoadingIndicator() -> impl IntoView {
    view! {
        <div class="search-page__loading" role="status">
            <svg class="spinner" viewBox="0 0 24 24" fill="none" aria-hidden="true">
                <circle class="spinner__track" cx="12" cy="12" r="10" stroke="currentColor" stroke-width="4"></circle>
                <path class="spinner__head" fill="currentColor" d="M4 12a8 8 0 018-8v4a4 4 0 00-4 4H4z"></path>
            </svg>
            <span class="sr-only">"Loading..."</span>
        </div>
    }
}
