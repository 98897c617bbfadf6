//! Result containers — default card display and search results.

mod card_grid;
mod pagination;

use dioxus::prelude::*;

use card_grid::CardGrid;
use pagination::Pagination;

use crate::state::*;

/// Shows the default display until the first successful user-driven
/// search, then the results container.
#[component]
pub fn ResultsArea() -> Element {
    match *ACTIVE_VIEW.read() {
        View::Default => rsx! { DefaultDisplay {} },
        View::Results => rsx! { SearchResults {} },
    }
}

/// Startup display: the unfiltered first page of the collection.
#[component]
fn DefaultDisplay() -> Element {
    let page = DEFAULT_PAGE.read();

    match page.as_ref() {
        None => rsx! {
            div {
                class: "results-empty",
                span { "Loading cards..." }
            }
        },
        Some(p) => rsx! {
            div {
                class: "card-display",
                CardGrid { cards: p.result.cards.clone() }
            }
        },
    }
}

/// Search results: card grid plus pagination links.
#[component]
fn SearchResults() -> Element {
    let page = RESULT_PAGE.read();

    match page.as_ref() {
        None => rsx! {
            div {
                class: "results-empty",
                span { "Type to search..." }
            }
        },
        Some(p) if p.result.cards.is_empty() => rsx! {
            div {
                class: "results-empty",
                span { "No cards match" }
            }
            Pagination { links: p.result.page_links(), current: p.page }
        },
        Some(p) => rsx! {
            div {
                class: "search-results",
                CardGrid { cards: p.result.cards.clone() }
                Pagination { links: p.result.page_links(), current: p.page }
            }
        },
    }
}
