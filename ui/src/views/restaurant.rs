//! Restaurant page: intro, remote menu with category pills and
//! server-side pagination, bar CTA.

use api::{images, ApiClient, Category, MenuItem, PageInfo};
use dioxus::prelude::*;

use crate::components::{site_links, ErrorPanel, LoadingPanel, PageBanner};
use crate::core::format;
use crate::core::remote::{use_remote, RemoteState};
use crate::{i18n, t};

#[component]
pub fn Restaurant() -> Element {
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let client = use_hook(ApiClient::new);

    let mut page = use_signal(|| 1u32);
    let mut category = use_signal(|| Option::<String>::None);

    // Reading `page` and `category` inside the fetch closure makes them
    // reactive dependencies: updating either re-issues the request.
    let mut menu_remote = use_remote({
        let client = client.clone();
        move || {
            let client = client.clone();
            let page = page();
            let category = category();
            async move { client.menu_items(page, category.as_deref()).await }
        }
    });
    let categories_remote = use_remote({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move { client.menu_categories().await.map(|listing| listing.items) }
        }
    });

    let categories: Vec<Category> = match categories_remote.state() {
        RemoteState::Ready(list) => list,
        _ => Vec::new(),
    };
    let active = category();

    let highlights = [
        t!("local-international-cuisine"),
        t!("lounge-bar-lemonades"),
        t!("picnic-baskets"),
    ];

    rsx! {
        div { class: "page page-restaurant",
            div { style: "display:none", "{_lang_marker}" }
            PageBanner {
                eyebrow: t!("restaurant-bar"),
                title: t!("restaurant-bar"),
            }

            section { class: "restaurant-intro",
                div { class: "restaurant-intro__inner",
                    div { class: "restaurant-intro__content",
                        h2 { class: "restaurant-intro__title", {t!("dining-at-buhumuza")} }
                        p { class: "restaurant-intro__lead", {t!("dining-description")} }
                        ul { class: "restaurant-intro__highlights",
                            for highlight in highlights.iter() {
                                li { key: "{highlight}", class: "restaurant-intro__highlight",
                                    "{highlight}"
                                }
                            }
                        }
                        blockquote { class: "restaurant-intro__quote", {t!("cuisine-quote")} }
                    }
                    img {
                        class: "restaurant-intro__image",
                        src: "https://images.unsplash.com/photo-1414235077428-338989a2e8c0?w=900&h=400&fit=crop",
                        alt: "Restaurant",
                        loading: "lazy",
                    }
                }
            }

            section { class: "menu",
                div { class: "menu__inner",
                    div { class: "menu__header",
                        h2 { class: "menu__title", {t!("our-menu")} }
                        p { class: "menu__lead", {t!("select-category")} }
                    }

                    div { class: "menu__pills",
                        button {
                            r#type: "button",
                            class: if active.is_none() { "menu__pill menu__pill--active" } else { "menu__pill" },
                            onclick: move |_| {
                                category.set(None);
                                page.set(1);
                            },
                            {t!("menu-cat-all")}
                        }
                        for cat in categories.iter() {
                            {menu_pill(cat.clone(), category, page, active.as_deref())}
                        }
                    }

                    {match menu_remote.state() {
                        RemoteState::Loading => rsx! {
                            LoadingPanel { message: t!("loading-menu") }
                        },
                        RemoteState::Failed(_) => rsx! {
                            ErrorPanel {
                                message: t!("fetch-error"),
                                on_retry: move |_| menu_remote.retry(),
                            }
                        },
                        RemoteState::Ready(listing) if listing.items.is_empty() => rsx! {
                            ErrorPanel {
                                message: t!("no-menu-items"),
                                on_retry: move |_| menu_remote.retry(),
                            }
                        },
                        RemoteState::Ready(listing) => {
                            let pagination = listing.page;
                            rsx! {
                                div { class: "menu__grid",
                                    for item in listing.items.into_iter() {
                                        {menu_card(item)}
                                    }
                                }
                                if let Some(info) = pagination {
                                    {pager(info, page)}
                                }
                            }
                        }
                    }}
                }
            }

            section { class: "bar-cta",
                div { class: "bar-cta__inner",
                    h2 { class: "bar-cta__title", {t!("thirsty-after-visits")} }
                    p { class: "bar-cta__lead", {t!("bar-description")} }
                    div { class: "bar-cta__actions",
                        {site_links::contact("button button--primary", &t!("book-table"))}
                        {site_links::gallery("button button--outline", &t!("view-bar"))}
                    }
                }
            }
        }
    }
}

fn menu_pill(
    cat: Category,
    mut category: Signal<Option<String>>,
    mut page: Signal<u32>,
    active: Option<&str>,
) -> Element {
    let slug = if cat.slug.is_empty() {
        cat.name.clone()
    } else {
        cat.slug.clone()
    };
    let is_active = active == Some(slug.as_str());
    let label = {
        let localized = i18n::label(&format!("menu-cat-{slug}"));
        if localized.starts_with("menu-cat-") {
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
            class: if is_active { "menu__pill menu__pill--active" } else { "menu__pill" },
            onclick: move |_| {
                category.set(Some(picked.clone()));
                page.set(1);
            },
            "{label}"
        }
    }
}

fn menu_card(item: MenuItem) -> Element {
    let src = images::resolve_or(item.image.as_deref(), images::MENU_FALLBACK);
    let price = item
        .formatted_price
        .clone()
        .unwrap_or_else(|| format::format_fbu(item.price));
    let description = item.description.clone().unwrap_or_default();

    rsx! {
        article { key: "{item.id}-{item.name}", class: "menu-card",
            img {
                class: "menu-card__image",
                src: "{src}",
                alt: "{item.name}",
                loading: "lazy",
            }
            div { class: "menu-card__body",
                div { class: "menu-card__header",
                    h3 { class: "menu-card__name", "{item.name}" }
                    span { class: "menu-card__price", "{price}" }
                }
                if !description.is_empty() {
                    p { class: "menu-card__description", "{description}" }
                }
            }
        }
    }
}

fn pager(info: PageInfo, mut page: Signal<u32>) -> Element {
    let current = info.current_page;
    let last = info.last_page.max(1);
    let at_first = current <= 1;
    let at_last = current >= last;

    rsx! {
        nav { class: "menu__pager",
            button {
                r#type: "button",
                class: "button button--outline",
                disabled: at_first,
                onclick: move |_| page.set(current.saturating_sub(1).max(1)),
                {t!("previous")}
            }
            span { class: "menu__pager-status",
                {t!("page-of", current = current, total = last)}
            }
            button {
                r#type: "button",
                class: "button button--outline",
                disabled: at_last,
                onclick: move |_| page.set((current + 1).min(last)),
                {t!("next")}
            }
        }
    }
}
