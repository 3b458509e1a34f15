//! Closing call-to-action band.

use dioxus::prelude::*;

use crate::components::site_links;
use crate::t;

#[component]
pub fn CtaSection() -> Element {
    rsx! {
        section { class: "cta-band",
            div { class: "cta-band__inner",
                h2 { class: "cta-band__title", {t!("cta-title")} }
                p { class: "cta-band__lead", {t!("cta-lead")} }
                {site_links::booking("button button--accent", &t!("cta-button"))}
            }
        }
    }
}
