//! Global widget state using Dioxus signals, plus the fetch driver.
//!
//! Signals hold what the user can see and touch: the typed query, pending
//! and applied filter selections, the last decoded page, and the active
//! view. Request parameters are never stored — each fetch builds a fresh
//! [`SearchParams`] from the signals and passes it along explicitly.

use std::sync::OnceLock;

use carddex_client::{LatestOnly, SearchClient};
use carddex_core::{PageResult, SearchParams};
use dioxus::prelude::*;
use tracing::{debug, warn};

/// Which result container is visible.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Startup card display, populated by an unfiltered page-1 fetch.
    Default,
    /// Search results, shown after the first successful user-driven fetch.
    Results,
}

/// Checkbox values offered for the cost dimension.
pub const COST_OPTIONS: &[&str] = &["0", "1", "2", "3", "4", "5", "6"];

/// Checkbox values offered for the power dimension.
pub const POWER_OPTIONS: &[&str] =
    &["0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "10"];

/// One decoded page plus the page number it was requested with.
#[derive(Clone, PartialEq)]
pub struct PageView {
    pub result: PageResult,
    pub page: u32,
}

// ---------------------------------------------------------------------------
// Pre-runtime storage — built in main() before Dioxus launches
// ---------------------------------------------------------------------------

/// Shared HTTP client, configured once at startup.
pub static CLIENT: OnceLock<SearchClient> = OnceLock::new();

/// Sequence gate for user-driven searches; stale responses are dropped.
static SEARCH_GATE: LatestOnly = LatestOnly::new();

/// Separate gate for the default display. Its fetch targets a different
/// container, so user searches must not discard it.
static DEFAULT_GATE: LatestOnly = LatestOnly::new();

// ---------------------------------------------------------------------------
// Global signals
// ---------------------------------------------------------------------------

/// Current search query text.
pub static QUERY: GlobalSignal<String> = Signal::global(String::new);

/// Filter values checked in the popup but not yet applied.
pub static PENDING_COST: GlobalSignal<Vec<String>> = Signal::global(Vec::new);
pub static PENDING_POWER: GlobalSignal<Vec<String>> = Signal::global(Vec::new);

/// Filter values in effect for searches (snapshot taken on Apply).
pub static APPLIED_COST: GlobalSignal<Vec<String>> = Signal::global(Vec::new);
pub static APPLIED_POWER: GlobalSignal<Vec<String>> = Signal::global(Vec::new);

/// Whether the filter popup is visible.
pub static FILTER_OPEN: GlobalSignal<bool> = Signal::global(|| false);

/// Startup card display (unfiltered page 1).
pub static DEFAULT_PAGE: GlobalSignal<Option<PageView>> = Signal::global(|| None);

/// Latest successfully decoded search results.
pub static RESULT_PAGE: GlobalSignal<Option<PageView>> = Signal::global(|| None);

/// Non-blocking error banner text; prior results stay on screen beneath it.
pub static ERROR: GlobalSignal<Option<String>> = Signal::global(|| None);

/// Active result container.
pub static ACTIVE_VIEW: GlobalSignal<View> = Signal::global(|| View::Default);

// ---------------------------------------------------------------------------
// Selection and parameter helpers
// ---------------------------------------------------------------------------

/// Add or remove a checkbox value, preserving the order values were checked.
pub fn toggle_value(selected: &mut Vec<String>, value: &str, checked: bool) {
    if checked {
        if !selected.iter().any(|v| v == value) {
            selected.push(value.to_string());
        }
    } else {
        selected.retain(|v| v != value);
    }
}

/// Build the request parameters from the current query and applied filters.
pub fn current_params() -> SearchParams {
    SearchParams::new(
        QUERY.read().clone(),
        APPLIED_COST.read().clone(),
        APPLIED_POWER.read().clone(),
    )
}

// ---------------------------------------------------------------------------
// Fetch driver
// ---------------------------------------------------------------------------

/// Fetch one page of search results and, if the response is still the
/// newest, show it in the results view. Errors surface as a banner and
/// leave whatever was on screen intact.
pub fn run_search(params: SearchParams, page: u32) {
    fetch_into(params, page, View::Results);
}

/// Populate the default card display with an unfiltered first page.
pub fn load_default_display() {
    fetch_into(SearchParams::default(), 1, View::Default);
}

/// Invalidate in-flight searches. Called when the user dismisses results
/// so a response issued before the dismissal cannot resurface them.
pub fn cancel_searches() {
    SEARCH_GATE.invalidate();
}

fn fetch_into(params: SearchParams, page: u32, target: View) {
    let Some(client) = CLIENT.get() else {
        warn!("Search client not initialized");
        return;
    };
    let client = client.clone();
    let gate = match target {
        View::Default => &DEFAULT_GATE,
        View::Results => &SEARCH_GATE,
    };
    let ticket = gate.begin();

    spawn(async move {
        match client.fetch_page(&params, page).await {
            Ok(result) => {
                if !gate.is_current(ticket) {
                    debug!(ticket, "Dropping stale search response");
                    return;
                }
                *ERROR.write() = None;
                match target {
                    View::Default => {
                        *DEFAULT_PAGE.write() = Some(PageView { result, page });
                    }
                    View::Results => {
                        *RESULT_PAGE.write() = Some(PageView { result, page });
                        *ACTIVE_VIEW.write() = View::Results;
                    }
                }
            }
            Err(e) => {
                if !gate.is_current(ticket) {
                    return;
                }
                warn!(error = %e, "Search fetch failed");
                *ERROR.write() = Some(e.user_message());
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_in_check_order() {
        let mut selected = Vec::new();
        toggle_value(&mut selected, "2", true);
        toggle_value(&mut selected, "1", true);
        assert_eq!(selected, ["2", "1"]);
    }

    #[test]
    fn toggle_is_idempotent_on_recheck() {
        let mut selected = vec!["3".to_string()];
        toggle_value(&mut selected, "3", true);
        assert_eq!(selected, ["3"]);
    }

    #[test]
    fn unchecking_removes_only_that_value() {
        let mut selected = vec!["1".to_string(), "2".to_string(), "3".to_string()];
        toggle_value(&mut selected, "2", false);
        assert_eq!(selected, ["1", "3"]);
    }

    #[test]
    fn unchecking_absent_value_is_a_no_op() {
        let mut selected = vec!["1".to_string()];
        toggle_value(&mut selected, "9", false);
        assert_eq!(selected, ["1"]);
    }
}
