//! Image URL resolution for backend-provided paths.
//!
//! The backend mixes absolute URLs, `/storage/...` asset paths, and bare
//! relative paths in the same fields. Everything funnels through
//! [`resolve`]; callers pick a content-appropriate fallback for records
//! with no usable image at all.

pub const ASSET_HOST: &str = "https://ruvubu-hotel.com";

/// Stand-in photos for records whose image is missing or fails to load.
pub const ROOM_FALLBACK: &str =
    "https://images.unsplash.com/photo-1631049307264-da0ec9d70304?w=800&h=600&fit=crop";
pub const GALLERY_FALLBACK: &str =
    "https://images.unsplash.com/photo-1522708323590-d24dbb6b0267?w=800&h=600&fit=crop";
pub const MENU_FALLBACK: &str =
    "https://images.unsplash.com/photo-1504674900247-0877df9cc836?w=600&h=400&fit=crop";

/// Normalizes a possibly-relative image path to an absolute URL.
pub fn resolve(path: Option<&str>) -> Option<String> {
    let path = path?.trim();
    if path.is_empty() {
        return None;
    }
    if path.starts_with("http") {
        return Some(path.to_string());
    }
    if let Some(rest) = path.strip_prefix("/storage/") {
        return Some(format!("{ASSET_HOST}/storage/{rest}"));
    }
    if path.starts_with('/') {
        Some(format!("{ASSET_HOST}{path}"))
    } else {
        Some(format!("{ASSET_HOST}/{path}"))
    }
}

/// [`resolve`] with a fallback for absent paths.
pub fn resolve_or(path: Option<&str>, fallback: &str) -> String {
    resolve(path).unwrap_or_else(|| fallback.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_urls_pass_through() {
        let url = "https://images.unsplash.com/photo-1?w=800";
        assert_eq!(resolve(Some(url)).as_deref(), Some(url));
    }

    #[test]
    fn storage_paths_get_the_asset_host() {
        assert_eq!(
            resolve(Some("/storage/room_images/a.jpg")).as_deref(),
            Some("https://ruvubu-hotel.com/storage/room_images/a.jpg")
        );
    }

    #[test]
    fn bare_paths_get_the_base_url() {
        assert_eq!(
            resolve(Some("/images/hero.jpg")).as_deref(),
            Some("https://ruvubu-hotel.com/images/hero.jpg")
        );
        assert_eq!(
            resolve(Some("images/hero.jpg")).as_deref(),
            Some("https://ruvubu-hotel.com/images/hero.jpg")
        );
    }

    #[test]
    fn empty_paths_resolve_to_none() {
        assert_eq!(resolve(None), None);
        assert_eq!(resolve(Some("")), None);
        assert_eq!(resolve(Some("   ")), None);
        assert_eq!(resolve_or(None, ROOM_FALLBACK), ROOM_FALLBACK);
    }
}
