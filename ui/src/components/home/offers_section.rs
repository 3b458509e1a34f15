//! Current offers strip.

use dioxus::prelude::*;

use crate::t;

#[component]
pub fn OffersSection() -> Element {
    let offers = [
        (t!("offer-weekend"), t!("offer-weekend-note")),
        (t!("offer-family"), t!("offer-family-note")),
        (t!("offer-business"), t!("offer-business-note")),
    ];

    rsx! {
        section { class: "offers",
            div { class: "offers__inner",
                div { class: "offers__header",
                    span { class: "offers__eyebrow", {t!("offers-eyebrow")} }
                    h2 { class: "offers__title", {t!("offers-title")} }
                    p { class: "offers__lead", {t!("offers-lead")} }
                }
                div { class: "offers__grid",
                    for (name, note) in offers.iter() {
                        div { key: "{name}", class: "offers__card",
                            h3 { class: "offers__card-title", "{name}" }
                            p { class: "offers__card-note", "{note}" }
                        }
                    }
                }
            }
        }
    }
}
