//! Site footer: about blurb, quick links, services, contact details.

use dioxus::prelude::*;
use time::OffsetDateTime;

use crate::components::site_links;
use crate::t;

#[component]
pub fn SiteFooter() -> Element {
    // Re-render with the rest of the tree when the language changes.
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();

    // Passed as a string so Fluent does not apply digit grouping to it.
    let year = OffsetDateTime::now_utc().year().to_string();
    let services = [
        t!("footer-service-rooms"),
        t!("footer-service-restaurant"),
        t!("footer-service-bar"),
        t!("footer-service-events"),
        t!("footer-service-tours"),
        t!("footer-service-wifi"),
    ];

    rsx! {
        footer { class: "site-footer",
            div { style: "display:none", "{_lang_marker}" }
            div { class: "site-footer__inner",
                div { class: "site-footer__column",
                    div { class: "site-footer__brand",
                        span { class: "site-footer__brand-mark", aria_hidden: "true", "HR" }
                        div {
                            h3 { class: "site-footer__brand-name", {t!("brand-name")} }
                            p { class: "site-footer__brand-subtitle", {t!("brand-location")} }
                        }
                    }
                    p { class: "site-footer__about", {t!("footer-about")} }
                }

                div { class: "site-footer__column",
                    h4 { class: "site-footer__heading", {t!("footer-quick-links")} }
                    ul { class: "site-footer__links",
                        li { {site_links::home("site-footer__link", &t!("nav-home"))} }
                        li { {site_links::rooms("site-footer__link", &t!("footer-link-rooms"))} }
                        li { {site_links::about("site-footer__link", &t!("nav-about"))} }
                        li { {site_links::gallery("site-footer__link", &t!("footer-link-gallery"))} }
                        li { {site_links::contact("site-footer__link", &t!("footer-link-contact"))} }
                    }
                }

                div { class: "site-footer__column",
                    h4 { class: "site-footer__heading", {t!("footer-services")} }
                    ul { class: "site-footer__services",
                        for service in services.iter() {
                            li { key: "{service}", class: "site-footer__service", "{service}" }
                        }
                    }
                }

                div { class: "site-footer__column",
                    h4 { class: "site-footer__heading", {t!("footer-contact-title")} }
                    ul { class: "site-footer__contacts",
                        li { class: "site-footer__contact",
                            {t!("contact-location-line1")}
                            br {}
                            {t!("contact-location-line2")}
                        }
                        li {
                            a { class: "site-footer__link", href: "tel:+25779123456",
                                "+257 79 123 456"
                            }
                        }
                        li {
                            a {
                                class: "site-footer__link",
                                href: "mailto:info@hotelruvubu.com",
                                "info@hotelruvubu.com"
                            }
                        }
                    }
                    div { class: "site-footer__socials",
                        a {
                            class: "site-footer__social",
                            href: "https://facebook.com/ruvubuhotel",
                            target: "_blank",
                            rel: "noopener",
                            "Facebook"
                        }
                        a {
                            class: "site-footer__social",
                            href: "https://instagram.com/ruvubuhotel",
                            target: "_blank",
                            rel: "noopener",
                            "Instagram"
                        }
                        a {
                            class: "site-footer__social",
                            href: "https://twitter.com/ruvubuhotel",
                            target: "_blank",
                            rel: "noopener",
                            "Twitter"
                        }
                    }
                }
            }

            div { class: "site-footer__bottom",
                p { {t!("footer-rights", year = year)} }
                p { class: "site-footer__made-in", {t!("footer-made-in")} }
            }
        }
    }
}
