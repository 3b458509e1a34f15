//! Floating WhatsApp button with canned, localized conversation openers.

use dioxus::prelude::*;

use crate::t;

/// Hotel reception WhatsApp line (international format, no `+`).
pub const WHATSAPP_NUMBER: &str = "25769671060";

/// `wa.me` deep link with the message percent-encoded.
pub fn whatsapp_url(message: &str) -> String {
    format!(
        "https://wa.me/{WHATSAPP_NUMBER}?text={}",
        percent_encode(message)
    )
}

// Minimal RFC 3986 query encoding; unreserved bytes pass through, the
// rest (UTF-8 accents included) become %XX triplets.
fn percent_encode(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 3);
    for byte in text.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

#[component]
pub fn WhatsAppButton() -> Element {
    let mut open = use_signal(|| false);

    let options = [
        (t!("whatsapp-option-booking"), whatsapp_url(&t!("whatsapp-message-booking"))),
        (t!("whatsapp-option-rooms"), whatsapp_url(&t!("whatsapp-message-rooms"))),
        (t!("whatsapp-option-rates"), whatsapp_url(&t!("whatsapp-message-rates"))),
        (t!("whatsapp-option-tour"), whatsapp_url(&t!("whatsapp-message-tour"))),
    ];
    let default_href = whatsapp_url(&t!("whatsapp-greeting"));
    let toggle_label = t!("whatsapp-open-label");

    rsx! {
        div { class: "whatsapp",
            if open() {
                div { class: "whatsapp__panel",
                    div { class: "whatsapp__panel-header",
                        p { class: "whatsapp__panel-title", {t!("whatsapp-title")} }
                        p { class: "whatsapp__panel-lead", {t!("whatsapp-lead")} }
                    }
                    ul { class: "whatsapp__options",
                        for (label, href) in options.iter() {
                            li { key: "{label}",
                                a {
                                    class: "whatsapp__option",
                                    href: "{href}",
                                    target: "_blank",
                                    rel: "noopener",
                                    onclick: move |_| open.set(false),
                                    "{label}"
                                }
                            }
                        }
                    }
                    a {
                        class: "whatsapp__default",
                        href: "{default_href}",
                        target: "_blank",
                        rel: "noopener",
                        onclick: move |_| open.set(false),
                        {t!("whatsapp-open-label")}
                    }
                }
            }
            button {
                r#type: "button",
                class: "whatsapp__toggle",
                aria_label: "{toggle_label}",
                onclick: move |_| open.toggle(),
                if open() { "×" } else { "💬" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_spaces_and_accents() {
        let url = whatsapp_url("Bonjour Hôtel Ruvubu !");
        assert!(url.starts_with("https://wa.me/25769671060?text="));
        assert!(!url.contains(' '));
        assert!(url.contains("Bonjour%20H%C3%B4tel%20Ruvubu%20%21"));
    }

    #[test]
    fn unreserved_characters_pass_through() {
        assert_eq!(percent_encode("abc-XYZ_0.9~"), "abc-XYZ_0.9~");
    }
}
