//! Room detail page: resolves a slug against the fetched rooms collection.

use api::{images, ApiClient, Room};
use dioxus::prelude::*;

use crate::components::{site_links, ErrorPanel, LoadingPanel, PageBanner};
use crate::core::format;
use crate::core::remote::{use_remote, RemoteState};
use crate::{i18n, t};

#[component]
pub fn RoomDetails(slug: String) -> Element {
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let client = use_hook(ApiClient::new);
    let mut remote = use_remote(move || {
        let client = client.clone();
        async move { client.rooms().await.map(|listing| listing.items) }
    });

    rsx! {
        div { class: "page page-room-details",
            div { style: "display:none", "{_lang_marker}" }
            PageBanner {
                eyebrow: t!("rooms-page-eyebrow"),
                title: t!("rooms-page-title"),
            }

            section { class: "room-details",
                div { class: "room-details__inner",
                    {match remote.state() {
                        RemoteState::Loading => rsx! {
                            LoadingPanel { message: t!("loading-rooms") }
                        },
                        RemoteState::Failed(_) => rsx! {
                            ErrorPanel {
                                message: t!("fetch-error"),
                                on_retry: move |_| remote.retry(),
                            }
                        },
                        RemoteState::Ready(rooms) => {
                            match rooms.iter().find(|room| room.slug == slug) {
                                Some(room) => room_detail(room),
                                None => rsx! {
                                    div { class: "room-details__missing",
                                        h2 { class: "room-details__missing-title",
                                            {t!("room-not-found-title")}
                                        }
                                        p { class: "room-details__missing-lead",
                                            {t!("room-not-found-lead")}
                                        }
                                        {site_links::rooms("button button--primary", &t!("back-to-rooms"))}
                                    }
                                },
                            }
                        }
                    }}
                }
            }
        }
    }
}

fn room_detail(room: &Room) -> Element {
    let src = images::resolve_or(room.primary_image.as_deref(), images::ROOM_FALLBACK);
    let price = room
        .formatted_price
        .clone()
        .unwrap_or_else(|| format::format_fbu(room.price));
    let type_label = i18n::label(&format!("room-type-{}", room.room_type));
    let view_label = room
        .view_type
        .as_deref()
        .map(|view| i18n::label(&format!("view-{view}")));
    let description = room
        .description
        .clone()
        .unwrap_or_else(|| t!("default-room-description"));
    let size = room.size;

    rsx! {
        article { class: "room-details__card",
            div { class: "room-details__media",
                img {
                    class: "room-details__image",
                    src: "{src}",
                    alt: "{room.name}",
                }
                if room.is_featured {
                    span { class: "room-details__badge", "★" }
                }
            }

            div { class: "room-details__body",
                h2 { class: "room-details__title", "{room.name}" }

                div { class: "room-details__facts",
                    span { class: "room-details__fact", "{room.max_guests} " {t!("people")} }
                    span { class: "room-details__fact", "{type_label}" }
                    span { class: "room-details__fact", "{size} " {t!("sqm")} }
                    if let Some(view) = view_label {
                        span { class: "room-details__fact", "{view}" }
                    }
                }

                p { class: "room-details__description", "{description}" }

                if room.rating > 0.0 {
                    div { class: "room-details__rating",
                        span { class: "room-details__rating-value",
                            {format::format_rating(room.rating)}
                        }
                        span { "/5 · {room.review_count} " {t!("reviews")} }
                    }
                }

                if !room.tags.is_empty() {
                    div { class: "room-details__features",
                        h3 { class: "room-details__features-title", {t!("room-details-features")} }
                        ul { class: "room-details__tags",
                            for tag in room.tags.iter() {
                                li { key: "{tag.name}", class: "room-details__tag", "{tag.name}" }
                            }
                        }
                    }
                }

                div { class: "room-details__booking",
                    div {
                        h3 { class: "room-details__booking-title", {t!("room-details-book-title")} }
                        p { class: "room-details__booking-lead", {t!("room-details-book-lead")} }
                    }
                    div { class: "room-details__booking-price",
                        "{price}"
                        {t!("per-night")}
                    }
                    div { class: "room-details__booking-actions",
                        {site_links::booking("button button--primary", &t!("book-now"))}
                        {site_links::contact("button button--outline", &t!("nav-contact"))}
                    }
                }
            }
        }
    }
}
