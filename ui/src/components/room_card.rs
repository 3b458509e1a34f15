//! Room card shared by the home strip, the rooms page and the booking page.

use api::{images, Room};
use dioxus::prelude::*;

use crate::components::site_links;
use crate::core::format;
use crate::{i18n, t};

#[component]
pub fn RoomCard(room: Room) -> Element {
    // Swap to the fallback photo if the resolved image 404s.
    let mut image_failed = use_signal(|| false);

    let src = if image_failed() {
        images::ROOM_FALLBACK.to_string()
    } else {
        images::resolve_or(room.primary_image.as_deref(), images::ROOM_FALLBACK)
    };

    let price_badge = room
        .formatted_price
        .clone()
        .unwrap_or_else(|| format::format_fbu(room.price));
    let type_label = i18n::label(&format!("room-type-{}", room.room_type));
    let description = room
        .description
        .clone()
        .unwrap_or_else(|| t!("default-room-description"));
    let size = room.size;

    rsx! {
        article { class: "room-card",
            div { class: "room-card__media",
                img {
                    class: "room-card__image",
                    src: "{src}",
                    alt: "{room.name}",
                    loading: "lazy",
                    onerror: move |_| image_failed.set(true),
                }
                span { class: "room-card__price",
                    "{price_badge}"
                    {t!("per-night")}
                }
            }
            div { class: "room-card__body",
                div { class: "room-card__facts",
                    span { class: "room-card__fact", "{room.max_guests} " {t!("people")} }
                    span { class: "room-card__fact", "{type_label}" }
                    span { class: "room-card__fact", "{size} " {t!("sqm")} }
                }
                h3 { class: "room-card__title", "{room.name}" }
                p { class: "room-card__description", "{description}" }
                if room.rating > 0.0 {
                    div { class: "room-card__rating",
                        span { class: "room-card__rating-value",
                            {format::format_rating(room.rating)}
                        }
                        span { class: "room-card__rating-scale", "/5" }
                        if room.review_count > 0 {
                            span { class: "room-card__rating-count",
                                "({room.review_count} " {t!("reviews")} ")"
                            }
                        }
                    }
                } else {
                    div { class: "room-card__rating room-card__rating--empty",
                        {t!("no-reviews-yet")}
                    }
                }
                div { class: "room-card__actions",
                    {site_links::contact("button button--outline", &t!("book"))}
                    {site_links::room(&room.slug, "button button--secondary", &t!("view-details"))}
                }
            }
        }
    }
}
