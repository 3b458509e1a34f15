//! Loading / error panels shared by every remote-backed view.
//!
//! Empty results render through [`ErrorPanel`] too: the site shows the
//! same retryable panel whether the backend failed or simply had nothing
//! to say.

use dioxus::prelude::*;

#[component]
pub fn LoadingPanel(message: String) -> Element {
    rsx! {
        div { class: "status-panel status-panel--loading",
            span { class: "status-panel__spinner", aria_hidden: "true" }
            span { class: "status-panel__message", "{message}" }
        }
    }
}

#[component]
pub fn ErrorPanel(message: String, on_retry: EventHandler<()>) -> Element {
    rsx! {
        div { class: "status-panel status-panel--error",
            p { class: "status-panel__title", {crate::t!("error")} }
            p { class: "status-panel__message", "{message}" }
            button {
                r#type: "button",
                class: "button button--outline",
                onclick: move |_| on_retry.call(()),
                {crate::t!("retry")}
            }
        }
    }
}
