//! Contact page: info cards, FAQ accordion, message compose handed off to
//! WhatsApp.

use dioxus::prelude::*;

use crate::components::whatsapp_button::whatsapp_url;
use crate::components::PageBanner;
use crate::t;

#[component]
pub fn Contact() -> Element {
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let mut open_faq = use_signal(|| Some(0usize));
    let mut message = use_signal(String::new);

    let info_cards = [
        (
            t!("contact-location-title"),
            vec![t!("contact-location-line1"), t!("contact-location-line2")],
            t!("contact-location-note"),
        ),
        (
            t!("contact-phone-title"),
            vec!["+257 66 307 160".to_string(), "+257 69 671 060".to_string()],
            t!("contact-phone-note"),
        ),
        (
            t!("contact-email-title"),
            vec!["ruvubuhotel@gmail.com".to_string()],
            t!("contact-email-note"),
        ),
    ];

    let faq = [
        (t!("faq-q-transport"), t!("faq-a-transport")),
        (t!("faq-q-payment"), t!("faq-a-payment")),
        (t!("faq-q-tours"), t!("faq-a-tours")),
        (t!("faq-q-business"), t!("faq-a-business")),
        (t!("faq-q-diet"), t!("faq-a-diet")),
    ];

    let compose_href = {
        let body = message();
        let text = if body.trim().is_empty() {
            t!("whatsapp-greeting")
        } else {
            body
        };
        whatsapp_url(&text)
    };
    let placeholder = t!("contact-message-placeholder");

    rsx! {
        div { class: "page page-contact",
            div { style: "display:none", "{_lang_marker}" }
            PageBanner {
                eyebrow: t!("contact-page-eyebrow"),
                title: t!("contact-page-title"),
            }

            section { class: "contact-cards",
                div { class: "contact-cards__inner",
                    for (title, lines, note) in info_cards.iter() {
                        div { key: "{title}", class: "contact-cards__card",
                            h3 { class: "contact-cards__title", "{title}" }
                            for line in lines.iter() {
                                p { key: "{line}", class: "contact-cards__line", "{line}" }
                            }
                            p { class: "contact-cards__note", "{note}" }
                        }
                    }
                }
            }

            section { class: "contact-compose",
                div { class: "contact-compose__inner",
                    h2 { class: "contact-compose__title", {t!("contact-message-title")} }
                    textarea {
                        class: "contact-compose__input",
                        placeholder: "{placeholder}",
                        value: "{message()}",
                        oninput: move |evt| message.set(evt.value()),
                    }
                    a {
                        class: "button button--primary",
                        href: "{compose_href}",
                        target: "_blank",
                        rel: "noopener",
                        {t!("contact-message-send")}
                    }
                }
            }

            section { class: "faq",
                div { class: "faq__inner",
                    h2 { class: "faq__title", {t!("faq-title")} }
                    p { class: "faq__lead", {t!("faq-lead")} }
                    ul { class: "faq__items",
                        for (index, (question, answer)) in faq.iter().enumerate() {
                            li { key: "{question}", class: "faq__item",
                                button {
                                    r#type: "button",
                                    class: "faq__question",
                                    onclick: move |_| {
                                        let next = if open_faq() == Some(index) {
                                            None
                                        } else {
                                            Some(index)
                                        };
                                        open_faq.set(next);
                                    },
                                    "{question}"
                                }
                                if open_faq() == Some(index) {
                                    p { class: "faq__answer", "{answer}" }
                                }
                            }
                        }
                    }
                }
            }

            section { class: "contact-socials",
                div { class: "contact-socials__inner",
                    h2 { class: "contact-socials__title", {t!("contact-follow-title")} }
                    div { class: "contact-socials__links",
                        a {
                            class: "contact-socials__link",
                            href: "https://facebook.com/ruvubuhotel",
                            target: "_blank",
                            rel: "noopener",
                            "Facebook · @ruvubuhotel"
                        }
                        a {
                            class: "contact-socials__link",
                            href: "https://instagram.com/ruvubuhotel",
                            target: "_blank",
                            rel: "noopener",
                            "Instagram · @ruvubuhotel"
                        }
                        a {
                            class: "contact-socials__link",
                            href: "https://twitter.com/ruvubuhotel",
                            target: "_blank",
                            rel: "noopener",
                            "Twitter · @ruvubuhotel"
                        }
                    }
                }
            }
        }
    }
}
