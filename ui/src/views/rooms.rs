//! Rooms listing page: remote collection, filter selects, sort, and
//! visible-count pagination.

use api::{ApiClient, RoomKind};
use dioxus::prelude::*;

use crate::components::{ErrorPanel, LoadingPanel, PageBanner, RoomCard};
use crate::core::listing::{
    GuestBand, PriceBand, RoomQuery, SortKey, INITIAL_VISIBLE, VISIBLE_STEP,
};
use crate::core::remote::{use_remote, RemoteState};
use crate::{i18n, t};

#[component]
pub fn Rooms() -> Element {
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let client = use_hook(ApiClient::new);
    let mut remote = use_remote(move || {
        let client = client.clone();
        async move { client.rooms().await.map(|listing| listing.items) }
    });

    let mut price = use_signal(PriceBand::default);
    let mut guests = use_signal(GuestBand::default);
    let mut kind = use_signal(|| Option::<RoomKind>::None);
    let mut sort = use_signal(SortKey::default);
    let mut visible = use_signal(|| INITIAL_VISIBLE);

    let reset = move |_| {
        price.set(PriceBand::All);
        guests.set(GuestBand::Any);
        kind.set(None);
        sort.set(SortKey::Popular);
        visible.set(INITIAL_VISIBLE);
    };

    let price_value = price().value();
    let guests_value = guests().value();
    let kind_value = kind().map_or("all", RoomKind::slug);
    let sort_value = sort().value();

    rsx! {
        div { class: "page page-rooms",
            div { style: "display:none", "{_lang_marker}" }
            PageBanner {
                eyebrow: t!("rooms-page-eyebrow"),
                title: t!("rooms-page-title"),
            }

            section { class: "rooms",
                div { class: "rooms__inner",
                    div { class: "rooms__filters",
                        div { class: "rooms__filter",
                            label { class: "rooms__filter-label", r#for: "filter-price",
                                {t!("filter-price-label")}
                            }
                            select {
                                id: "filter-price",
                                value: "{price_value}",
                                onchange: move |evt| price.set(PriceBand::from_value(&evt.value())),
                                for band in PriceBand::ALL {
                                    option { key: "{band.value()}", value: "{band.value()}",
                                        {i18n::label(band.label_key())}
                                    }
                                }
                            }
                        }
                        div { class: "rooms__filter",
                            label { class: "rooms__filter-label", r#for: "filter-guests",
                                {t!("filter-guests-label")}
                            }
                            select {
                                id: "filter-guests",
                                value: "{guests_value}",
                                onchange: move |evt| guests.set(GuestBand::from_value(&evt.value())),
                                for band in GuestBand::ALL {
                                    option { key: "{band.value()}", value: "{band.value()}",
                                        {i18n::label(band.label_key())}
                                    }
                                }
                            }
                        }
                        div { class: "rooms__filter",
                            label { class: "rooms__filter-label", r#for: "filter-type",
                                {t!("filter-type-label")}
                            }
                            select {
                                id: "filter-type",
                                value: "{kind_value}",
                                onchange: move |evt| {
                                    let raw = evt.value();
                                    kind.set(match raw.as_str() {
                                        "all" => None,
                                        slug => Some(RoomKind::from_slug(slug)),
                                    });
                                },
                                option { key: "all", value: "all", {t!("filter-type-all")} }
                                for room_kind in RoomKind::FILTERABLE {
                                    option {
                                        key: "{room_kind.slug()}",
                                        value: "{room_kind.slug()}",
                                        {i18n::label(&format!("room-type-{}", room_kind.slug()))}
                                    }
                                }
                            }
                        }
                        div { class: "rooms__filter",
                            label { class: "rooms__filter-label", r#for: "filter-sort",
                                {t!("sort-label")}
                            }
                            select {
                                id: "filter-sort",
                                value: "{sort_value}",
                                onchange: move |evt| sort.set(SortKey::from_value(&evt.value())),
                                for key in SortKey::ALL {
                                    option { key: "{key.value()}", value: "{key.value()}",
                                        {i18n::label(key.label_key())}
                                    }
                                }
                            }
                        }
                    }

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
                        RemoteState::Ready(rooms) if rooms.is_empty() => rsx! {
                            ErrorPanel {
                                message: t!("no-rooms-match"),
                                on_retry: move |_| remote.retry(),
                            }
                        },
                        RemoteState::Ready(rooms) => {
                            let query = RoomQuery {
                                price: price(),
                                guests: guests(),
                                kind: kind(),
                                sort: sort(),
                            };
                            let filtered = query.apply(&rooms);
                            let shown = visible().min(filtered.len());
                            let has_more = filtered.len() > shown;

                            rsx! {
                                if filtered.is_empty() {
                                    div { class: "rooms__empty",
                                        h4 { class: "rooms__empty-title", {t!("rooms-empty-title")} }
                                        p { class: "rooms__empty-lead", {t!("rooms-empty-lead")} }
                                        button {
                                            r#type: "button",
                                            class: "button button--primary",
                                            onclick: reset,
                                            {t!("reset-filters")}
                                        }
                                    }
                                } else {
                                    div { class: "rooms__grid",
                                        for room in filtered.into_iter().take(shown) {
                                            RoomCard { key: "{room.id}", room }
                                        }
                                    }
                                }
                                if has_more {
                                    div { class: "rooms__more",
                                        button {
                                            r#type: "button",
                                            class: "button button--outline",
                                            onclick: move |_| visible += VISIBLE_STEP,
                                            {t!("load-more-rooms")}
                                        }
                                    }
                                }
                            }
                        }
                    }}
                }
            }
        }
    }
}
