//! About page: story, values, heritage sites around the hotel.

use dioxus::prelude::*;

use crate::components::PageBanner;
use crate::t;

#[component]
pub fn About() -> Element {
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let values = [
        (t!("value-hospitality"), t!("value-hospitality-note")),
        (t!("value-authenticity"), t!("value-authenticity-note")),
        (t!("value-nature"), t!("value-nature-note")),
    ];
    let heritage = [
        (t!("heritage-ruvubu"), t!("heritage-ruvubu-note")),
        (t!("heritage-mishiha"), t!("heritage-mishiha-note")),
        (t!("heritage-muyaga"), t!("heritage-muyaga-note")),
    ];

    rsx! {
        div { class: "page page-about",
            div { style: "display:none", "{_lang_marker}" }
            PageBanner {
                eyebrow: t!("about-page-eyebrow"),
                title: t!("about-page-title"),
            }

            section { class: "about-story",
                div { class: "about-story__inner",
                    p { class: "about-story__paragraph", {t!("about-story-1")} }
                    p { class: "about-story__paragraph", {t!("about-story-2")} }
                }
            }

            section { class: "about-values",
                div { class: "about-values__inner",
                    h2 { class: "about-values__title", {t!("about-values-title")} }
                    div { class: "about-values__grid",
                        for (name, note) in values.iter() {
                            div { key: "{name}", class: "about-values__card",
                                h3 { class: "about-values__card-title", "{name}" }
                                p { class: "about-values__card-note", "{note}" }
                            }
                        }
                    }
                }
            }

            section { class: "about-heritage",
                div { class: "about-heritage__inner",
                    h2 { class: "about-heritage__title", {t!("heritage-title")} }
                    p { class: "about-heritage__lead", {t!("heritage-lead")} }
                    div { class: "about-heritage__grid",
                        for (name, note) in heritage.iter() {
                            div { key: "{name}", class: "about-heritage__card",
                                h3 { class: "about-heritage__card-title", "{name}" }
                                p { class: "about-heritage__card-note", "{note}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
