//! Shared UI crate for the Ruvubu hotel site. Cross-platform views,
//! components, and localization live here; the launcher crates only own
//! routing and platform glue.

pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    // Platform-injected navigation links (components/site_links.rs)
    pub mod site_links;
    pub use site_links::register_links;
    pub use site_links::LinkBuilder;

    pub mod page_banner;
    pub mod room_card;
    pub mod site_footer;
    pub mod site_header;
    pub mod status_panel;
    pub mod whatsapp_button;

    pub mod home {
        pub mod about_section;
        pub mod amenities_section;
        pub mod cta_section;
        pub mod gallery_section;
        pub mod hero_section;
        pub mod offers_section;
        pub mod rooms_section;
    }

    pub use page_banner::PageBanner;
    pub use room_card::RoomCard;
    pub use site_footer::SiteFooter;
    pub use site_header::SiteHeader;
    pub use status_panel::{ErrorPanel, LoadingPanel};
    pub use whatsapp_button::WhatsAppButton;
}
