//! Canonical shapes for backend-owned records.
//!
//! All normalization happens in the serde attributes (see [`crate::de`]);
//! once a record exists it carries clean numerics and `Option`al text.

use serde::Deserialize;

use crate::de;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Room {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default, deserialize_with = "de::text_or_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "de::lenient_f64")]
    pub price: f64,
    #[serde(default, deserialize_with = "de::text_or_none")]
    pub formatted_price: Option<String>,
    #[serde(default, deserialize_with = "de::lenient_u32")]
    pub max_guests: u32,
    #[serde(default, deserialize_with = "de::lenient_f64")]
    pub size: f64,
    #[serde(default, deserialize_with = "de::text_or_none")]
    pub view_type: Option<String>,
    /// Raw backend slug; use [`Room::kind`] for typed comparisons.
    #[serde(default)]
    pub room_type: String,
    #[serde(default, deserialize_with = "de::lenient_f64")]
    pub rating: f64,
    #[serde(default, deserialize_with = "de::lenient_u32")]
    pub review_count: u32,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default, deserialize_with = "de::text_or_none")]
    pub primary_image: Option<String>,
    #[serde(default)]
    pub tags: Vec<RoomTag>,
}

impl Room {
    pub fn kind(&self) -> RoomKind {
        RoomKind::from_slug(&self.room_type)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RoomTag {
    pub name: String,
    #[serde(default, rename = "type")]
    pub kind: String,
}

/// Closed vocabulary of room types the site knows how to present.
///
/// The backend field stays a free-form slug; unknown slugs map to `Other`
/// and the raw slug remains available on the record for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoomKind {
    Suite,
    #[default]
    Standard,
    Double,
    Family,
    Twin,
    Bungalow,
    Other,
}

impl RoomKind {
    /// Types offered by the rooms-page filter, in display order.
    pub const FILTERABLE: [RoomKind; 6] = [
        RoomKind::Suite,
        RoomKind::Standard,
        RoomKind::Double,
        RoomKind::Family,
        RoomKind::Twin,
        RoomKind::Bungalow,
    ];

    pub fn from_slug(slug: &str) -> Self {
        match slug.trim().to_ascii_lowercase().as_str() {
            "suite" => RoomKind::Suite,
            "standard" => RoomKind::Standard,
            "double" => RoomKind::Double,
            "family" => RoomKind::Family,
            "twin" => RoomKind::Twin,
            "bungalow" => RoomKind::Bungalow,
            _ => RoomKind::Other,
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            RoomKind::Suite => "suite",
            RoomKind::Standard => "standard",
            RoomKind::Double => "double",
            RoomKind::Family => "family",
            RoomKind::Twin => "twin",
            RoomKind::Bungalow => "bungalow",
            RoomKind::Other => "other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GalleryItem {
    #[serde(default)]
    pub id: u64,
    pub title: String,
    #[serde(default, alias = "subtitle", deserialize_with = "de::text_or_none")]
    pub caption: Option<String>,
    #[serde(default, alias = "src", deserialize_with = "de::text_or_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MenuItem {
    #[serde(default)]
    pub id: u64,
    pub name: String,
    #[serde(default, deserialize_with = "de::text_or_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "de::lenient_f64")]
    pub price: f64,
    #[serde(default, deserialize_with = "de::text_or_none")]
    pub formatted_price: Option<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default, deserialize_with = "de::text_or_none")]
    pub image: Option<String>,
}

/// Gallery / menu category as served by the `categories` endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Category {
    #[serde(default)]
    pub slug: String,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    // Payload shape captured from the live rooms endpoint.
    const SAMPLE_ROOM: &str = r#"{
        "id": 11,
        "name": "Chambre standard",
        "slug": "chambre-standard-xile43",
        "description": "undefined",
        "formatted_price": "FBu 40,000",
        "price": "40000.00",
        "max_guests": 2,
        "size": "12.00",
        "view_type": "garden",
        "room_type": "standard",
        "rating": "0.00",
        "review_count": 0,
        "is_featured": false,
        "primary_image": "/storage/room_images/MNk8ceaDRpHOIV4Q0jL7QXPJPhv3soUfCF2HWYAD.jpg",
        "tags": [
            { "name": "Garden View", "type": "garden" },
            { "name": "Best Value", "type": "value" }
        ]
    }"#;

    #[test]
    fn live_room_payload_normalizes() {
        let room: Room = serde_json::from_str(SAMPLE_ROOM).unwrap();
        assert_eq!(room.price, 40000.0);
        assert_eq!(room.size, 12.0);
        assert_eq!(room.rating, 0.0);
        assert_eq!(room.max_guests, 2);
        assert_eq!(room.description, None);
        assert_eq!(room.kind(), RoomKind::Standard);
        assert_eq!(room.tags.len(), 2);
        assert_eq!(room.tags[0].kind, "garden");
    }

    #[test]
    fn sparse_room_payload_still_decodes() {
        let room: Room = serde_json::from_str(r#"{"id": 1, "name": "Suite"}"#).unwrap();
        assert_eq!(room.price, 0.0);
        assert_eq!(room.rating, 0.0);
        assert!(room.tags.is_empty());
        assert_eq!(room.kind(), RoomKind::Standard);
    }

    #[test]
    fn unknown_room_type_maps_to_other() {
        assert_eq!(RoomKind::from_slug("penthouse"), RoomKind::Other);
        assert_eq!(RoomKind::from_slug(" Suite "), RoomKind::Suite);
    }

    #[test]
    fn gallery_item_accepts_legacy_field_names() {
        let item: GalleryItem = serde_json::from_str(
            r#"{"title": "Hall", "subtitle": "Accueil", "src": "/storage/g/1.jpg", "category": "amenities"}"#,
        )
        .unwrap();
        assert_eq!(item.caption.as_deref(), Some("Accueil"));
        assert_eq!(item.image.as_deref(), Some("/storage/g/1.jpg"));
    }
}
