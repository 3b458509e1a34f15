//! Platform-injected navigation links.
//!
//! The shared crate never sees a platform's `Route` enum. Launchers
//! register a [`LinkBuilder`] whose closures construct fully routed
//! `Link` elements; components ask for links by destination through the
//! helpers below and fall back to plain anchors when nothing is
//! registered (isolated component tests, previews).
//!
//! Migration steps for a platform crate (desktop/web):
//! 1. Define one `fn(class, label) -> Element` per destination, each
//!    constructing a `Link { to: Route::..., class, {label} }`.
//! 2. Call `ui::components::register_links(builder)` before rendering the
//!    root (e.g. at the top of `App()`).

use dioxus::prelude::*;
use once_cell::sync::OnceCell;

pub struct LinkBuilder {
    pub home: fn(&str, &str) -> Element,
    pub rooms: fn(&str, &str) -> Element,
    /// (slug, class, label)
    pub room: fn(&str, &str, &str) -> Element,
    pub gallery: fn(&str, &str) -> Element,
    pub restaurant: fn(&str, &str) -> Element,
    pub about: fn(&str, &str) -> Element,
    pub contact: fn(&str, &str) -> Element,
    pub booking: fn(&str, &str) -> Element,
}

static LINKS: OnceCell<LinkBuilder> = OnceCell::new();

pub fn register_links(builder: LinkBuilder) {
    let _ = LINKS.set(builder);
}

fn anchor(href: String, class: &str, label: &str) -> Element {
    rsx! {
        a { class: "{class}", href: "{href}", "{label}" }
    }
}

pub fn home(class: &str, label: &str) -> Element {
    match LINKS.get() {
        Some(builder) => (builder.home)(class, label),
        None => anchor("/".into(), class, label),
    }
}

pub fn rooms(class: &str, label: &str) -> Element {
    match LINKS.get() {
        Some(builder) => (builder.rooms)(class, label),
        None => anchor("/chambres".into(), class, label),
    }
}

pub fn room(slug: &str, class: &str, label: &str) -> Element {
    match LINKS.get() {
        Some(builder) => (builder.room)(slug, class, label),
        None => anchor(format!("/chambres/{slug}"), class, label),
    }
}

pub fn gallery(class: &str, label: &str) -> Element {
    match LINKS.get() {
        Some(builder) => (builder.gallery)(class, label),
        None => anchor("/galerie".into(), class, label),
    }
}

pub fn restaurant(class: &str, label: &str) -> Element {
    match LINKS.get() {
        Some(builder) => (builder.restaurant)(class, label),
        None => anchor("/restaurant".into(), class, label),
    }
}

pub fn about(class: &str, label: &str) -> Element {
    match LINKS.get() {
        Some(builder) => (builder.about)(class, label),
        None => anchor("/a-propos".into(), class, label),
    }
}

pub fn contact(class: &str, label: &str) -> Element {
    match LINKS.get() {
        Some(builder) => (builder.contact)(class, label),
        None => anchor("/contact".into(), class, label),
    }
}

pub fn booking(class: &str, label: &str) -> Element {
    match LINKS.get() {
        Some(builder) => (builder.booking)(class, label),
        None => anchor("/reservation".into(), class, label),
    }
}
