//! Search panel — input field plus filter button and popup.

mod filter_popup;
mod search_input;

use dioxus::prelude::*;
use filter_popup::{FilterButton, FilterPopup};
use search_input::SearchInput;

use crate::state::FILTER_OPEN;

/// Search panel spanning the full width of the content area.
#[component]
pub fn SearchPanel() -> Element {
    let popup_open = *FILTER_OPEN.read();

    rsx! {
        div {
            class: "search-panel",
            SearchInput {}
            FilterButton {}
            if popup_open {
                FilterPopup {}
            }
        }
    }
}
