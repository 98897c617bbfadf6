//! Root application component — search bar over a card grid.

use dioxus::prelude::*;

use crate::results::ResultsArea;
use crate::search::SearchPanel;
use crate::state::*;

static VARIABLES_CSS: Asset = asset!("/assets/styles/variables.css");
static APP_CSS: Asset = asset!("/assets/styles/app.css");

#[component]
pub fn App() -> Element {
    // Populate the default display once at startup.
    use_hook(load_default_display);

    rsx! {
        document::Stylesheet { href: VARIABLES_CSS }
        document::Stylesheet { href: APP_CSS }

        div {
            class: "app-shell",

            div {
                class: "titlebar",
                span { class: "titlebar-title", "Carddex" }
            }

            div {
                class: "content-area",

                SearchPanel {}

                ErrorBanner {}

                ResultsArea {}
            }

            StatusBar {}
        }
    }
}

/// Non-blocking failure notice. Whatever was on screen before the failing
/// fetch stays rendered beneath it.
#[component]
fn ErrorBanner() -> Element {
    let error = ERROR.read();

    match error.as_deref() {
        None => rsx! {},
        Some(message) => rsx! {
            div {
                class: "error-banner",
                span { class: "error-message", "{message}" }
                button {
                    class: "error-dismiss",
                    onclick: move |_| {
                        *ERROR.write() = None;
                    },
                    "\u{00D7}"
                }
            }
        },
    }
}

/// Status bar at the bottom of the app
#[component]
fn StatusBar() -> Element {
    let view = *ACTIVE_VIEW.read();
    let page = match view {
        View::Default => DEFAULT_PAGE.read().clone(),
        View::Results => RESULT_PAGE.read().clone(),
    };

    match page {
        Some(p) => rsx! {
            div {
                class: "statusbar",
                span { class: "statusbar-cards", "{p.result.cards.len()} cards" }
                span { class: "statusbar-sep", "|" }
                span { class: "statusbar-page", "page {p.page} of {p.result.total_pages}" }
            }
        },
        None => rsx! {
            div {
                class: "statusbar",
                span { class: "statusbar-cards", "loading..." }
            }
        },
    }
}
