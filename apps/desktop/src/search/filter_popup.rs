//! Filter popup — cost and power checkboxes with an apply button.
//!
//! Checking boxes mutates only the pending selections. Apply snapshots
//! them as the applied filters, fetches page 1 with the current query, and
//! closes the popup. Empty selections are valid and mean "no filter on
//! that dimension".

use dioxus::prelude::*;

use crate::state::*;

/// A filter dimension: a named axis with a discrete set of values.
#[derive(Clone, Copy, PartialEq)]
enum Dimension {
    Cost,
    Power,
}

impl Dimension {
    fn label(self) -> &'static str {
        match self {
            Dimension::Cost => "Cost",
            Dimension::Power => "Power",
        }
    }

    fn options(self) -> &'static [&'static str] {
        match self {
            Dimension::Cost => COST_OPTIONS,
            Dimension::Power => POWER_OPTIONS,
        }
    }

    fn pending(self) -> &'static GlobalSignal<Vec<String>> {
        match self {
            Dimension::Cost => &PENDING_COST,
            Dimension::Power => &PENDING_POWER,
        }
    }
}

/// Opens the filter popup. Side effect only.
#[component]
pub fn FilterButton() -> Element {
    rsx! {
        button {
            class: "filter-button",
            onclick: move |_| {
                *FILTER_OPEN.write() = true;
            },
            "Filters"
        }
    }
}

#[component]
pub fn FilterPopup() -> Element {
    rsx! {
        div {
            class: "filter-popup",

            FilterGroup { dimension: Dimension::Cost }
            FilterGroup { dimension: Dimension::Power }

            button {
                class: "filter-apply",
                onclick: move |_| {
                    *APPLIED_COST.write() = PENDING_COST.read().clone();
                    *APPLIED_POWER.write() = PENDING_POWER.read().clone();
                    run_search(current_params(), 1);
                    *FILTER_OPEN.write() = false;
                },
                "Apply"
            }
        }
    }
}

/// One filter dimension as a row of labeled checkboxes.
#[component]
fn FilterGroup(dimension: Dimension) -> Element {
    let pending = dimension.pending();

    rsx! {
        div {
            class: "filter-group",
            span { class: "filter-group-label", {dimension.label()} }
            div {
                class: "filter-options",
                for option in dimension.options().iter().copied() {
                    label {
                        class: "filter-option",
                        input {
                            r#type: "checkbox",
                            checked: pending.read().iter().any(|v| v == option),
                            onchange: move |e: Event<FormData>| {
                                toggle_value(&mut pending.write(), option, e.checked());
                            },
                        }
                        "{option}"
                    }
                }
            }
        }
    }
}
