//! Landing page: hero, about strip, amenities, remote rooms and gallery
//! previews, offers, CTA band.

use dioxus::prelude::*;

use crate::components::home::about_section::AboutSection;
use crate::components::home::amenities_section::AmenitiesSection;
use crate::components::home::cta_section::CtaSection;
use crate::components::home::gallery_section::GallerySection;
use crate::components::home::hero_section::HeroSection;
use crate::components::home::offers_section::OffersSection;
use crate::components::home::rooms_section::RoomsSection;

#[component]
pub fn Home() -> Element {
    // Subscribe to the global language code (if provided) so the whole
    // page re-renders on change.
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    rsx! {
        div { class: "page page-home",
            div { style: "display:none", "{_lang_marker}" }
            HeroSection {}
            AboutSection {}
            AmenitiesSection {}
            RoomsSection {}
            GallerySection {}
            OffersSection {}
            CtaSection {}
        }
    }
}
