//! Card grid — one block per card, in response order.

use carddex_core::Card;
use dioxus::prelude::*;

#[component]
pub fn CardGrid(cards: Vec<Card>) -> Element {
    rsx! {
        div {
            class: "card-grid",
            for card in cards.iter() {
                div {
                    class: "card",
                    h2 { class: "card-name", "{card.name}" }
                    img {
                        class: "card-art",
                        src: "{card.art}",
                        alt: "{card.name}",
                    }
                    p { class: "card-cost", "Cost: {card.cost}" }
                    p { class: "card-power", "Power: {card.power}" }
                }
            }
        }
    }
}
