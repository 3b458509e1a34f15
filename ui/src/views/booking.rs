//! Booking page: remote rooms, three-step flow (room → dates & guests →
//! summary), request handed off to WhatsApp.

use api::{ApiClient, Room};
use dioxus::prelude::*;
use time::{macros::format_description, Date};

use crate::components::whatsapp_button::whatsapp_url;
use crate::components::{ErrorPanel, LoadingPanel, PageBanner, RoomCard};
use crate::core::format;
use crate::core::remote::{use_remote, RemoteState};
use crate::t;

/// Parses a `<input type="date">` value (`2026-08-07`).
fn parse_date(raw: &str) -> Option<Date> {
    Date::parse(raw.trim(), format_description!("[year]-[month]-[day]")).ok()
}

/// Whole nights between the two dates; `None` until both parse and the
/// range is positive.
fn nights_between(check_in: &str, check_out: &str) -> Option<i64> {
    let from = parse_date(check_in)?;
    let to = parse_date(check_out)?;
    let nights = (to - from).whole_days();
    (nights > 0).then_some(nights)
}

#[component]
pub fn Booking() -> Element {
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let client = use_hook(ApiClient::new);
    let mut remote = use_remote(move || {
        let client = client.clone();
        async move { client.rooms().await.map(|listing| listing.items) }
    });

    let mut step = use_signal(|| 1u8);
    let mut selected = use_signal(|| Option::<Room>::None);
    let mut check_in = use_signal(String::new);
    let mut check_out = use_signal(String::new);
    let mut adults = use_signal(|| 2u32);
    let mut children = use_signal(|| 0u32);

    let steps = [
        t!("booking-step-room"),
        t!("booking-step-details"),
        t!("booking-step-summary"),
    ];

    let nights = nights_between(&check_in(), &check_out());

    rsx! {
        div { class: "page page-booking",
            div { style: "display:none", "{_lang_marker}" }
            PageBanner {
                eyebrow: t!("booking-page-eyebrow"),
                title: t!("booking-page-title"),
            }

            section { class: "booking",
                div { class: "booking__inner",
                    ol { class: "booking__steps",
                        for (index, label) in steps.iter().enumerate() {
                            li {
                                key: "{label}",
                                class: if step() as usize == index + 1 { "booking__step booking__step--active" } else { "booking__step" },
                                "{label}"
                            }
                        }
                    }

                    {match step() {
                        1 => rsx! { {choose_room(remote, selected, step)} },
                        2 => rsx! { {details_step(selected, check_in, check_out, adults, children, nights, step)} },
                        _ => rsx! { {summary_step(selected, check_in, check_out, adults, children, nights, step)} },
                    }}
                }
            }
        }
    }
}

fn choose_room(
    mut remote: crate::core::remote::Remote<Vec<Room>>,
    mut selected: Signal<Option<Room>>,
    mut step: Signal<u8>,
) -> Element {
    rsx! {
        h2 { class: "booking__title", {t!("booking-choose-room")} }

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
            RemoteState::Ready(rooms) => rsx! {
                div { class: "booking__rooms",
                    for room in rooms.into_iter() {
                        {room_choice(room, selected)}
                    }
                }
            },
        }}

        div { class: "booking__nav",
            if selected().is_some() {
                button {
                    r#type: "button",
                    class: "button button--primary",
                    onclick: move |_| step.set(2),
                    {t!("booking-continue")}
                }
            } else {
                p { class: "booking__hint", {t!("booking-no-room")} }
            }
        }
    }
}

fn room_choice(room: Room, mut selected: Signal<Option<Room>>) -> Element {
    let id = room.id;
    let is_selected = selected()
        .map(|current| current.id == id)
        .unwrap_or(false);
    let pick = room.clone();

    rsx! {
        div {
            key: "{id}",
            class: if is_selected { "booking__room booking__room--selected" } else { "booking__room" },
            RoomCard { room }
            button {
                r#type: "button",
                class: if is_selected { "button button--secondary" } else { "button button--primary" },
                onclick: move |_| selected.set(Some(pick.clone())),
                if is_selected {
                    {t!("booking-selected")}
                } else {
                    {t!("booking-select")}
                }
            }
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn details_step(
    selected: Signal<Option<Room>>,
    mut check_in: Signal<String>,
    mut check_out: Signal<String>,
    mut adults: Signal<u32>,
    mut children: Signal<u32>,
    nights: Option<i64>,
    mut step: Signal<u8>,
) -> Element {
    let total = selected().zip(nights).map(|(room, nights)| {
        format::format_fbu(room.price * nights as f64)
    });

    rsx! {
        h2 { class: "booking__title", {t!("booking-dates-title")} }

        div { class: "booking__form",
            div { class: "booking__field",
                label { class: "booking__label", r#for: "check-in", {t!("booking-check-in")} }
                input {
                    id: "check-in",
                    r#type: "date",
                    value: "{check_in()}",
                    oninput: move |evt| check_in.set(evt.value()),
                }
            }
            div { class: "booking__field",
                label { class: "booking__label", r#for: "check-out", {t!("booking-check-out")} }
                input {
                    id: "check-out",
                    r#type: "date",
                    value: "{check_out()}",
                    oninput: move |evt| check_out.set(evt.value()),
                }
            }
            div { class: "booking__field",
                label { class: "booking__label", r#for: "adults", {t!("booking-adults")} }
                input {
                    id: "adults",
                    r#type: "number",
                    min: "1",
                    max: "10",
                    value: "{adults()}",
                    oninput: move |evt| {
                        if let Ok(value) = evt.value().parse::<u32>() {
                            adults.set(value.clamp(1, 10));
                        }
                    },
                }
            }
            div { class: "booking__field",
                label { class: "booking__label", r#for: "children", {t!("booking-children")} }
                input {
                    id: "children",
                    r#type: "number",
                    min: "0",
                    max: "10",
                    value: "{children()}",
                    oninput: move |evt| {
                        if let Ok(value) = evt.value().parse::<u32>() {
                            children.set(value.min(10));
                        }
                    },
                }
            }
        }

        if let Some(nights) = nights {
            div { class: "booking__estimate",
                span { {t!("booking-nights", count = nights)} }
                if let Some(total) = total {
                    span { class: "booking__estimate-total",
                        {t!("booking-total")}
                        ": {total}"
                    }
                }
            }
        }

        div { class: "booking__nav",
            button {
                r#type: "button",
                class: "button button--outline",
                onclick: move |_| step.set(1),
                {t!("booking-back")}
            }
            button {
                r#type: "button",
                class: "button button--primary",
                disabled: nights.is_none(),
                onclick: move |_| step.set(3),
                {t!("booking-continue")}
            }
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn summary_step(
    selected: Signal<Option<Room>>,
    check_in: Signal<String>,
    check_out: Signal<String>,
    adults: Signal<u32>,
    children: Signal<u32>,
    nights: Option<i64>,
    mut step: Signal<u8>,
) -> Element {
    let Some(room) = selected() else {
        // Deep links can land here without a selection; send them back.
        return rsx! {
            p { class: "booking__hint", {t!("booking-no-room")} }
            button {
                r#type: "button",
                class: "button button--primary",
                onclick: move |_| step.set(1),
                {t!("booking-back")}
            }
        };
    };

    let nights_count = nights.unwrap_or(0);
    let total = format::format_fbu(room.price * nights_count as f64);
    let request = format!(
        "{greeting} {room} | {check_in} -> {check_out} | {adults}+{children} | {total}",
        greeting = t!("whatsapp-message-booking"),
        room = room.name,
        check_in = check_in(),
        check_out = check_out(),
        adults = adults(),
        children = children(),
        total = total,
    );
    let send_href = whatsapp_url(&request);

    rsx! {
        h2 { class: "booking__title", {t!("booking-confirm-title")} }
        p { class: "booking__lead", {t!("booking-confirm-lead")} }

        dl { class: "booking__summary",
            div { class: "booking__summary-row",
                dt { {t!("booking-step-room")} }
                dd { "{room.name}" }
            }
            div { class: "booking__summary-row",
                dt { {t!("booking-check-in")} }
                dd { "{check_in()}" }
            }
            div { class: "booking__summary-row",
                dt { {t!("booking-check-out")} }
                dd { "{check_out()}" }
            }
            div { class: "booking__summary-row",
                dt { {t!("booking-adults")} }
                dd { "{adults()}" }
            }
            div { class: "booking__summary-row",
                dt { {t!("booking-children")} }
                dd { "{children()}" }
            }
            div { class: "booking__summary-row",
                dt { {t!("booking-nights", count = nights_count)} }
                dd { class: "booking__summary-total",
                    {t!("booking-total")}
                    ": {total}"
                }
            }
        }

        div { class: "booking__nav",
            button {
                r#type: "button",
                class: "button button--outline",
                onclick: move |_| step.set(2),
                {t!("booking-back")}
            }
            a {
                class: "button button--accent",
                href: "{send_href}",
                target: "_blank",
                rel: "noopener",
                {t!("booking-send-whatsapp")}
            }
        }
    }
}
