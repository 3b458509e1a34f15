//! Page title band with breadcrumb, shared by every inner page.

use dioxus::prelude::*;

use crate::components::site_links;
use crate::t;

#[component]
pub fn PageBanner(eyebrow: String, title: String) -> Element {
    rsx! {
        section { class: "page-banner",
            div { class: "page-banner__inner",
                div {
                    p { class: "page-banner__eyebrow", "{eyebrow}" }
                    h1 { class: "page-banner__title", "{title}" }
                }
                nav { class: "page-banner__trail",
                    {site_links::home("page-banner__trail-link", &t!("breadcrumb-home"))}
                    span { class: "page-banner__trail-sep", "/" }
                    span { class: "page-banner__trail-current", "{title}" }
                }
            }
        }
    }
}
