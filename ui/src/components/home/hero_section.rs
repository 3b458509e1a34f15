//! Home hero: headline, feature chips, booking CTAs.

use dioxus::prelude::*;

use crate::components::site_links;
use crate::t;

const HERO_IMAGE: &str =
    "https://images.unsplash.com/photo-1566073771259-6a8506099945?w=1200&h=800&fit=crop";

#[component]
pub fn HeroSection() -> Element {
    let features = [
        t!("hero-feature-wifi"),
        t!("hero-feature-restaurant"),
        t!("hero-feature-gardens"),
    ];

    rsx! {
        section { class: "hero",
            div { class: "hero__inner",
                div { class: "hero__content",
                    h2 { class: "hero__title", {t!("hero-title")} }
                    p { class: "hero__lead", {t!("hero-lead")} }
                    div { class: "hero__features",
                        for feature in features.iter() {
                            span { key: "{feature}", class: "hero__feature", "{feature}" }
                        }
                    }
                    div { class: "hero__actions",
                        {site_links::booking("button button--primary", &t!("hero-cta-book"))}
                        {site_links::rooms("button button--outline", &t!("hero-cta-rooms"))}
                    }
                }
                div { class: "hero__media",
                    img {
                        class: "hero__image",
                        src: "{HERO_IMAGE}",
                        alt: "Hôtel Ruvubu",
                    }
                }
            }
        }
    }
}
