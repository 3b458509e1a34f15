//! Catch-all 404 page.

use dioxus::prelude::*;

use crate::components::site_links;
use crate::t;

#[component]
pub fn NotFound() -> Element {
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    rsx! {
        div { class: "page page-not-found",
            div { style: "display:none", "{_lang_marker}" }
            section { class: "not-found",
                h1 { class: "not-found__code", "404" }
                h2 { class: "not-found__title", {t!("not-found-title")} }
                p { class: "not-found__lead", {t!("not-found-lead")} }
                {site_links::home("button button--primary", &t!("back-home"))}
            }
        }
    }
}
