//! Pagination links.
//!
//! One link per page when there is more than one page; nothing at all for
//! a single page. Following a link refetches with the same query and
//! filters — only the page number changes.

use dioxus::prelude::*;

use crate::state::{current_params, run_search};

#[component]
pub fn Pagination(links: Vec<u32>, current: u32) -> Element {
    if links.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "pagination",
            for page in links.iter().copied() {
                a {
                    class: if page == current { "page-link active" } else { "page-link" },
                    href: "#",
                    onclick: move |e: Event<MouseData>| {
                        e.prevent_default();
                        run_search(current_params(), page);
                    },
                    "{page}"
                }
            }
        }
    }
}
