//! Page views. Each page is declarative composition of the shared
//! components; the remote-backed ones own their fetch through
//! `core::remote::use_remote`.

mod about;
mod booking;
mod contact;
mod gallery;
mod home;
mod not_found;
mod restaurant;
mod room_details;
mod rooms;

pub use about::About;
pub use booking::Booking;
pub use contact::Contact;
pub use gallery::Gallery;
pub use home::Home;
pub use not_found::NotFound;
pub use restaurant::Restaurant;
pub use room_details::RoomDetails;
pub use rooms::Rooms;
