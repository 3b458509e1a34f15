//! Home about strip.

use dioxus::prelude::*;

use crate::components::site_links;
use crate::t;

#[component]
pub fn AboutSection() -> Element {
    let points = [
        t!("about-point-rooms"),
        t!("about-point-dining"),
        t!("about-point-events"),
    ];

    rsx! {
        section { class: "home-about",
            div { class: "home-about__inner",
                span { class: "home-about__eyebrow", {t!("about-eyebrow")} }
                h2 { class: "home-about__title", {t!("about-title")} }
                p { class: "home-about__lead", {t!("about-lead")} }
                ul { class: "home-about__points",
                    for point in points.iter() {
                        li { key: "{point}", class: "home-about__point", "{point}" }
                    }
                }
                {site_links::about("home-about__more", &t!("about-more"))}
            }
        }
    }
}
