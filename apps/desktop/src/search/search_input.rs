//! Search input component.
//!
//! Every keystroke issues a page-1 request built from the latest text and
//! the last-applied filters. There is no debounce; out-of-order responses
//! are dropped by the fetch driver's sequence gate instead.

use dioxus::prelude::*;

use crate::state::*;

#[component]
pub fn SearchInput() -> Element {
    let query = QUERY.read();
    let has_query = !query.is_empty();

    rsx! {
        div {
            class: if has_query { "search-field has-query" } else { "search-field" },

            span { class: "search-label", "SEARCH" }

            div {
                class: "search-input-row",

                input {
                    class: "search-input",
                    r#type: "text",
                    placeholder: "Search cards by name...",
                    value: "{query}",
                    autofocus: true,
                    oninput: move |e: Event<FormData>| {
                        let value = e.value();
                        *QUERY.write() = value;
                        run_search(current_params(), 1);
                    },
                }

                if has_query {
                    button {
                        class: "search-clear",
                        onclick: move |_| {
                            cancel_searches();
                            *QUERY.write() = String::new();
                            *RESULT_PAGE.write() = None;
                            *ERROR.write() = None;
                            *ACTIVE_VIEW.write() = View::Default;
                        },
                        "\u{00D7}"
                    }
                }
            }
        }
    }
}
