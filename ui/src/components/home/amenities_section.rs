//! Amenities grid on the home page.

use dioxus::prelude::*;

use crate::t;

#[component]
pub fn AmenitiesSection() -> Element {
    let amenities = [
        (t!("amenity-wifi"), t!("amenity-wifi-note")),
        (t!("amenity-restaurant"), t!("amenity-restaurant-note")),
        (t!("amenity-gardens"), t!("amenity-gardens-note")),
        (t!("amenity-events"), t!("amenity-events-note")),
        (t!("amenity-tours"), t!("amenity-tours-note")),
        (t!("amenity-reception"), t!("amenity-reception-note")),
    ];

    rsx! {
        section { class: "amenities",
            div { class: "amenities__inner",
                div { class: "amenities__header",
                    span { class: "amenities__eyebrow", {t!("amenities-eyebrow")} }
                    h2 { class: "amenities__title", {t!("amenities-title")} }
                    p { class: "amenities__lead", {t!("amenities-lead")} }
                }
                div { class: "amenities__grid",
                    for (name, note) in amenities.iter() {
                        div { key: "{name}", class: "amenities__card",
                            h3 { class: "amenities__card-title", "{name}" }
                            p { class: "amenities__card-note", "{note}" }
                        }
                    }
                }
            }
        }
    }
}
