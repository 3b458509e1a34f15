//! HTTP client for the hotel backend's collection endpoints.

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::envelope::{ListEnvelope, Listing};
use crate::error::{ApiError, ApiResult};
use crate::models::{Category, GalleryItem, MenuItem, Room};

pub const DEFAULT_BASE_URL: &str = "https://ruvubu-hotel.com";

/// Read-only client; cheap to clone, one per app is plenty.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Point the client at a different host (staging, tests).
    pub fn with_base_url(base: impl Into<String>) -> Self {
        let http = Client::builder()
            .user_agent(concat!("ruvubu-site/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("failed to build HTTP client");
        let mut base = base.into();
        while base.ends_with('/') {
            base.pop();
        }
        Self { http, base }
    }

    pub async fn rooms(&self) -> ApiResult<Listing<Room>> {
        self.fetch(format!("{}/api/rooms/", self.base)).await
    }

    pub async fn gallery_items(&self) -> ApiResult<Listing<GalleryItem>> {
        self.fetch(format!("{}/api/gallery/", self.base)).await
    }

    pub async fn gallery_categories(&self) -> ApiResult<Listing<Category>> {
        self.fetch(format!("{}/api/gallery/categories/", self.base))
            .await
    }

    /// Menu items are paginated server-side; `category` narrows by slug.
    pub async fn menu_items(
        &self,
        page: u32,
        category: Option<&str>,
    ) -> ApiResult<Listing<MenuItem>> {
        let mut url = format!("{}/api/menu/?page={page}", self.base);
        if let Some(slug) = category {
            url.push_str("&category=");
            url.push_str(slug);
        }
        self.fetch(url).await
    }

    pub async fn menu_categories(&self) -> ApiResult<Listing<Category>> {
        self.fetch(format!("{}/api/menu/categories/", self.base))
            .await
    }

    async fn fetch<T: DeserializeOwned>(&self, url: String) -> ApiResult<Listing<T>> {
        debug!(%url, "fetching collection");
        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(%url, %status, "collection request rejected");
            return Err(ApiError::Status(status.as_u16()));
        }
        let envelope: ListEnvelope<T> = response.json().await?;
        envelope.into_listing()
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_trimmed() {
        let client = ApiClient::with_base_url("http://localhost:8080///");
        assert_eq!(client.base, "http://localhost:8080");
    }
}
