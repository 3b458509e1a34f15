//! Localized site header: contact top bar, brand, navigation, locale
//! switcher.
//!
//! Navigation links come from the platform-registered [`LinkBuilder`]
//! (see `site_links`), so this component never needs a `Route` enum.
//!
//! The language selector triggers a re-render via a local signal; every
//! render pulls fresh localized strings via `fl!`. If the platform
//! provided a global `Signal<String>` language context, the new code is
//! propagated there so sibling views re-render too.

use dioxus::prelude::*;

use crate::components::site_links;
use crate::{i18n, t};

// Shared site stylesheet (and inline in release native builds).
const SITE_CSS: Asset = asset!("/assets/styling/site.css");
const SITE_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/site.css"
));

#[component]
pub fn SiteHeader() -> Element {
    i18n::init();

    let mut current_lang = use_signal(i18n::current_language);
    let mut menu_open = use_signal(|| false);
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;

    // Obtain the global language code signal if the platform provided it.
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    // Establish a reactive dependency on the global language code.
    let _lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();

    #[cfg(debug_assertions)]
    {
        println!("[i18n] SiteHeader render lang={}", current_lang());
    }

    let on_change = move |evt: dioxus::events::FormEvent| {
        let val = evt.value();
        if i18n::set_language(&val).is_ok() {
            current_lang.set(val.clone());
            if let Some(mut code) = lang_code_ctx {
                code.set(val);
            }
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: SITE_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{SITE_CSS_INLINE}" }
        }

        header { class: "site-header",
            // Hidden marker ensures a re-render when the language changes.
            div { style: "display:none", "{_lang_marker}" }

            div { class: "site-header__topbar",
                div { class: "site-header__topbar-inner",
                    div { class: "site-header__topbar-contacts",
                        a { class: "site-header__topbar-link", href: "tel:+25779123456",
                            "+257 79 123 456"
                        }
                        a {
                            class: "site-header__topbar-link",
                            href: "mailto:info@hotelruvubu.com",
                            "info@hotelruvubu.com"
                        }
                    }
                    p { class: "site-header__topbar-welcome", {t!("topbar-welcome")} }
                }
            }

            div { class: "site-header__inner",
                div { class: "site-header__brand",
                    span { class: "site-header__brand-mark", aria_hidden: "true", "HR" }
                    div {
                        {site_links::home("site-header__brand-link", &t!("brand-name"))}
                        p { class: "site-header__brand-subtitle", {t!("brand-location")} }
                    }
                }

                nav {
                    class: if menu_open() { "site-header__nav site-header__nav--open" } else { "site-header__nav" },
                    {site_links::home("site-header__link", &t!("nav-home"))}
                    {site_links::rooms("site-header__link", &t!("nav-rooms"))}
                    {site_links::restaurant("site-header__link", &t!("nav-dining"))}
                    {site_links::about("site-header__link", &t!("nav-about"))}
                    {site_links::gallery("site-header__link", &t!("nav-gallery"))}
                    {site_links::contact("site-header__link", &t!("nav-contact"))}
                    {site_links::booking("site-header__link", &t!("nav-booking"))}
                    if menu_open() {
                        {site_links::contact("button button--accent", &t!("book-now-mobile"))}
                    }
                }

                div { class: "site-header__actions",
                    if show_switcher {
                        div { class: "site-header__locale",
                            label {
                                class: "visually-hidden",
                                r#for: "locale-select",
                                {t!("nav-language-label")}
                            }
                            select {
                                id: "locale-select",
                                value: "{current_lang()}",
                                oninput: on_change,
                                { langs().iter().map(|code| {
                                    let c = code.clone();
                                    rsx!{
                                        option { key: "{c}", value: "{c}", "{c}" }
                                    }
                                })}
                            }
                        }
                    }

                    {site_links::contact("button button--accent site-header__cta", &t!("book-now"))}

                    button {
                        r#type: "button",
                        class: "site-header__menu-toggle",
                        onclick: move |_| menu_open.toggle(),
                        if menu_open() { "✕" } else { "☰" }
                    }
                }
            }
        }
    }
}
