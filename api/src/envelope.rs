//! The JSON envelope wrapping every collection response.

use serde::Deserialize;

use crate::error::{ApiError, ApiResult};

/// `{success: bool, data|rooms: [...], current_page?, last_page?, ...}`
///
/// The rooms endpoint predates the generic `data` field and still ships its
/// collection under `rooms`; both spellings decode into `data`. Page
/// metadata, when the endpoint paginates, sits flattened next to the
/// collection.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ListEnvelope<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default, alias = "rooms")]
    pub data: Vec<T>,
    #[serde(flatten)]
    pub page: Option<PageInfo>,
}

/// Server-side pagination metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PageInfo {
    pub current_page: u32,
    pub last_page: u32,
    pub total: u64,
    #[serde(default)]
    pub has_more: bool,
}

/// A successfully decoded collection plus its page metadata, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing<T> {
    pub items: Vec<T>,
    pub page: Option<PageInfo>,
}

impl<T> ListEnvelope<T> {
    /// A `success: false` payload (or one missing the flag entirely) counts
    /// as a backend failure even when the HTTP exchange succeeded.
    pub fn into_listing(self) -> ApiResult<Listing<T>> {
        if !self.success {
            return Err(ApiError::Backend);
        }
        Ok(Listing {
            items: self.data,
            page: self.page,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rooms_alias_and_flattened_pagination() {
        let raw = r#"{
            "success": true,
            "rooms": [1, 2, 3],
            "current_page": 1,
            "last_page": 4,
            "total": 11,
            "has_more": true
        }"#;
        let envelope: ListEnvelope<u32> = serde_json::from_str(raw).unwrap();
        let listing = envelope.into_listing().unwrap();
        assert_eq!(listing.items, vec![1, 2, 3]);
        let page = listing.page.unwrap();
        assert_eq!(page.current_page, 1);
        assert_eq!(page.last_page, 4);
        assert_eq!(page.total, 11);
        assert!(page.has_more);
    }

    #[test]
    fn data_field_without_pagination() {
        let raw = r#"{"success": true, "data": ["a", "b"]}"#;
        let envelope: ListEnvelope<String> = serde_json::from_str(raw).unwrap();
        let listing = envelope.into_listing().unwrap();
        assert_eq!(listing.items.len(), 2);
        assert!(listing.page.is_none());
    }

    #[test]
    fn unsuccessful_payload_is_an_error() {
        let raw = r#"{"success": false, "data": []}"#;
        let envelope: ListEnvelope<u32> = serde_json::from_str(raw).unwrap();
        assert!(matches!(envelope.into_listing(), Err(ApiError::Backend)));
    }

    #[test]
    fn missing_success_flag_is_an_error() {
        let raw = r#"{"data": [1]}"#;
        let envelope: ListEnvelope<u32> = serde_json::from_str(raw).unwrap();
        assert!(matches!(envelope.into_listing(), Err(ApiError::Backend)));
    }
}
