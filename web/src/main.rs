use dioxus::prelude::*;

use ui::components::{register_links, LinkBuilder, SiteFooter, SiteHeader, WhatsAppButton};
use ui::i18n;
use ui::views::{About, Booking, Contact, Gallery, Home, Restaurant, RoomDetails, Rooms};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebShell)]
    #[route("/")]
    Home {},
    #[route("/chambres")]
    Rooms {},
    #[route("/chambres/:slug")]
    RoomDetails { slug: String },
    #[route("/a-propos")]
    About {},
    #[route("/galerie")]
    Gallery {},
    #[route("/restaurant")]
    Restaurant {},
    #[route("/contact")]
    Contact {},
    #[route("/reservation")]
    Booking {},
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn link_home(class: &str, label: &str) -> Element {
    rsx!(Link { class: "{class}", to: Route::Home {}, "{label}" })
}
fn link_rooms(class: &str, label: &str) -> Element {
    rsx!(Link { class: "{class}", to: Route::Rooms {}, "{label}" })
}
fn link_room(slug: &str, class: &str, label: &str) -> Element {
    rsx!(Link {
        class: "{class}",
        to: Route::RoomDetails { slug: slug.to_string() },
        "{label}"
    })
}
fn link_gallery(class: &str, label: &str) -> Element {
    rsx!(Link { class: "{class}", to: Route::Gallery {}, "{label}" })
}
fn link_restaurant(class: &str, label: &str) -> Element {
    rsx!(Link { class: "{class}", to: Route::Restaurant {}, "{label}" })
}
fn link_about(class: &str, label: &str) -> Element {
    rsx!(Link { class: "{class}", to: Route::About {}, "{label}" })
}
fn link_contact(class: &str, label: &str) -> Element {
    rsx!(Link { class: "{class}", to: Route::Contact {}, "{label}" })
}
fn link_booking(class: &str, label: &str) -> Element {
    rsx!(Link { class: "{class}", to: Route::Booking {}, "{label}" })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    {
        ui::i18n::init();
        // Register localized navigation builders so the shared crate can
        // emit routed links without knowing this crate's Route enum.
        register_links(LinkBuilder {
            home: link_home,
            rooms: link_rooms,
            room: link_room,
            gallery: link_gallery,
            restaurant: link_restaurant,
            about: link_about,
            contact: link_contact,
            booking: link_booking,
        });
    }

    // Global language code signal: the header writes it, views subscribe.
    use_context_provider(|| Signal::new(i18n::current_language()));

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

/// Shared page chrome around the routed views.
#[component]
fn WebShell() -> Element {
    rsx! {
        SiteHeader {}
        Outlet::<Route> {}
        SiteFooter {}
        WhatsAppButton {}
    }
}

/// Catch-all wrapper: the router needs the `segments` prop, the shared
/// view does not care about it.
#[component]
fn PageNotFound(segments: Vec<String>) -> Element {
    let _ = segments;
    rsx! {
        ui::views::NotFound {}
    }
}
