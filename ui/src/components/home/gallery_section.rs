//! Remote gallery preview on the home page.

use api::{images, ApiClient, GalleryItem};
use dioxus::prelude::*;

use crate::components::site_links;
use crate::components::{ErrorPanel, LoadingPanel};
use crate::core::remote::{use_remote, RemoteState};
use crate::t;

/// Thumbnails shown in the preview strip.
const PREVIEW_ITEMS: usize = 6;

#[component]
pub fn GallerySection() -> Element {
    let client = use_hook(ApiClient::new);
    let mut remote = use_remote(move || {
        let client = client.clone();
        async move { client.gallery_items().await.map(|listing| listing.items) }
    });

    rsx! {
        section { class: "home-gallery",
            div { class: "home-gallery__inner",
                div { class: "home-gallery__header",
                    span { class: "home-gallery__eyebrow", {t!("home-gallery-eyebrow")} }
                    h2 { class: "home-gallery__title", {t!("home-gallery-title")} }
                    p { class: "home-gallery__lead", {t!("home-gallery-lead")} }
                }

                {match remote.state() {
                    RemoteState::Loading => rsx! {
                        LoadingPanel { message: t!("loading-gallery") }
                    },
                    RemoteState::Failed(_) => rsx! {
                        ErrorPanel {
                            message: t!("fetch-error"),
                            on_retry: move |_| remote.retry(),
                        }
                    },
                    RemoteState::Ready(items) if items.is_empty() => rsx! {
                        ErrorPanel {
                            message: t!("gallery-empty"),
                            on_retry: move |_| remote.retry(),
                        }
                    },
                    RemoteState::Ready(items) => rsx! {
                        div { class: "home-gallery__grid",
                            for item in items.into_iter().take(PREVIEW_ITEMS) {
                                {preview_tile(item)}
                            }
                        }
                    },
                }}

                div { class: "home-gallery__more",
                    {site_links::gallery("home-gallery__more-link", &t!("nav-gallery"))}
                }
            }
        }
    }
}

fn preview_tile(item: GalleryItem) -> Element {
    let src = images::resolve_or(item.image.as_deref(), images::GALLERY_FALLBACK);
    rsx! {
        figure { key: "{item.id}-{item.title}", class: "home-gallery__tile",
            img {
                class: "home-gallery__thumb",
                src: "{src}",
                alt: "{item.title}",
                loading: "lazy",
            }
        }
    }
}
