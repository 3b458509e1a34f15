//! Typed client for the Ruvubu hotel REST backend.
//!
//! The backend owns all listing content (rooms, gallery, menu); this crate
//! owns the defensive boundary in front of it:
//! - one [`ApiClient`] with fixed collection endpoints
//! - the `{success, data|rooms, pagination?}` envelope
//! - normalization of loosely typed fields (string numerics, `"undefined"`
//!   placeholders) into a canonical shape, done once at decode time
//! - image path resolution against the backend's asset host
//!
//! All calls are read-only GETs. There is no retry or backoff here; retrying
//! is a user action owned by the views.

mod client;
mod de;
mod envelope;
mod error;
pub mod images;
mod models;

pub use client::{ApiClient, DEFAULT_BASE_URL};
pub use envelope::{ListEnvelope, Listing, PageInfo};
pub use error::{ApiError, ApiResult};
pub use models::{Category, GalleryItem, MenuItem, Room, RoomKind, RoomTag};
