//! Gallery page: remote items and categories, pill filter, lightbox-lite.

use api::{images, ApiClient, Category, GalleryItem};
use dioxus::prelude::*;

use crate::components::{ErrorPanel, LoadingPanel, PageBanner};
use crate::core::listing::filter_by_category;
use crate::core::remote::{use_remote, RemoteState};
use crate::{i18n, t};

#[component]
pub fn Gallery() -> Element {
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let client = use_hook(ApiClient::new);
    let mut items_remote = use_remote({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move { client.gallery_items().await.map(|listing| listing.items) }
        }
    });
    let categories_remote = use_remote({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move { client.gallery_categories().await.map(|listing| listing.items) }
        }
    });

    let mut category = use_signal(|| Option::<String>::None);
    let mut selected = use_signal(|| Option::<GalleryItem>::None);

    // The category list is decorative when it fails: fall back to the
    // all-pill only rather than blocking the photos.
    let categories: Vec<Category> = match categories_remote.state() {
        RemoteState::Ready(list) => list,
        _ => Vec::new(),
    };
    let active = category();

    rsx! {
        div { class: "page page-gallery",
            div { style: "display:none", "{_lang_marker}" }
            PageBanner {
                eyebrow: t!("gallery-page-eyebrow"),
                title: t!("gallery-page-title"),
            }

            section { class: "gallery",
                div { class: "gallery__inner",
                    p { class: "gallery__lead", {t!("gallery-lead")} }

                    div { class: "gallery__pills",
                        button {
                            r#type: "button",
                            class: if active.is_none() { "gallery__pill gallery__pill--active" } else { "gallery__pill" },
                            onclick: move |_| category.set(None),
                            {t!("gallery-filter-all")}
                        }
                        for cat in categories.iter() {
                            {category_pill(cat.clone(), category, active.as_deref())}
                        }
                    }

                    {match items_remote.state() {
                        RemoteState::Loading => rsx! {
                            LoadingPanel { message: t!("loading-gallery") }
                        },
                        RemoteState::Failed(_) => rsx! {
                            ErrorPanel {
                                message: t!("fetch-error"),
                                on_retry: move |_| items_remote.retry(),
                            }
                        },
                        RemoteState::Ready(items) if items.is_empty() => rsx! {
                            ErrorPanel {
                                message: t!("gallery-empty"),
                                on_retry: move |_| items_remote.retry(),
                            }
                        },
                        RemoteState::Ready(items) => {
                            let visible = filter_by_category(
                                &items,
                                active.as_deref(),
                                |item: &GalleryItem| item.category.as_str(),
                            );

                            if visible.is_empty() {
                                rsx! {
                                    p { class: "gallery__empty", {t!("gallery-empty")} }
                                }
                            } else {
                                rsx! {
                                    div { class: "gallery__grid",
                                        for item in visible.into_iter() {
                                            {gallery_tile(item, selected)}
                                        }
                                    }
                                }
                            }
                        }
                    }}
                }
            }

            if let Some(item) = selected() {
                {lightbox(item, selected)}
            }
        }
    }
}

fn category_pill(
    cat: Category,
    mut category: Signal<Option<String>>,
    active: Option<&str>,
) -> Element {
    let slug = if cat.slug.is_empty() {
        cat.name.clone()
    } else {
        cat.slug.clone()
    };
    let is_active = active == Some(slug.as_str());
    // Known slugs localize; anything else keeps the backend's name.
    let label = {
        let localized = i18n::label(&format!("gallery-filter-{slug}"));
        if localized.starts_with("gallery-filter-") {
            cat.name.clone()
        } else {
            localized
        }
    };
    let picked = slug.clone();

    rsx! {
        button {
            key: "{slug}",
            r#type: "button",
            class: if is_active { "gallery__pill gallery__pill--active" } else { "gallery__pill" },
            onclick: move |_| category.set(Some(picked.clone())),
            "{label}"
        }
    }
}

fn gallery_tile(item: GalleryItem, mut selected: Signal<Option<GalleryItem>>) -> Element {
    let src = images::resolve_or(item.image.as_deref(), images::GALLERY_FALLBACK);
    let caption = item.caption.clone().unwrap_or_default();
    let open_item = item.clone();

    rsx! {
        figure { key: "{item.id}-{item.title}", class: "gallery__tile",
            button {
                r#type: "button",
                class: "gallery__tile-button",
                onclick: move |_| selected.set(Some(open_item.clone())),
                img {
                    class: "gallery__thumb",
                    src: "{src}",
                    alt: "{item.title}",
                    loading: "lazy",
                }
            }
            figcaption { class: "gallery__caption",
                span { class: "gallery__caption-title", "{item.title}" }
                if !caption.is_empty() {
                    span { class: "gallery__caption-subtitle", "{caption}" }
                }
            }
        }
    }
}

fn lightbox(item: GalleryItem, mut selected: Signal<Option<GalleryItem>>) -> Element {
    let src = images::resolve_or(item.image.as_deref(), images::GALLERY_FALLBACK);
    let caption = item.caption.clone().unwrap_or_default();

    rsx! {
        div {
            class: "lightbox",
            onclick: move |_| selected.set(None),
            figure { class: "lightbox__figure",
                img { class: "lightbox__image", src: "{src}", alt: "{item.title}" }
                figcaption { class: "lightbox__caption",
                    span { class: "lightbox__title", "{item.title}" }
                    if !caption.is_empty() {
                        span { class: "lightbox__subtitle", "{caption}" }
                    }
                }
            }
            button {
                r#type: "button",
                class: "lightbox__close",
                onclick: move |_| selected.set(None),
                {t!("gallery-close")}
            }
        }
    }
}
