//! Cross-cutting helpers shared by the views.

pub mod format;
pub mod listing;
pub mod prefs;
pub mod remote;
