//! Locale preference persistence.
//!
//! Web builds keep the preference in `localStorage`; native builds keep a
//! one-line file in the platform config directory. Both sides are
//! best-effort: a missing, unreadable or corrupt value simply means the
//! default locale, and write failures are swallowed.

/// Storage key / file name for the active locale code.
pub const STORAGE_KEY: &str = "preferredLanguage";

#[cfg(target_arch = "wasm32")]
pub fn load_locale() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    let raw = storage.get_item(STORAGE_KEY).ok()??;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
pub fn save_locale(code: &str) {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(STORAGE_KEY, code);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn prefs_path() -> Option<std::path::PathBuf> {
    let dirs = directories::ProjectDirs::from("com", "ruvubu", "ruvubu-site")?;
    Some(dirs.config_dir().join(STORAGE_KEY))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_locale() -> Option<String> {
    read_locale_file(&prefs_path()?)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn save_locale(code: &str) {
    if let Some(path) = prefs_path() {
        write_locale_file(&path, code);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn read_locale_file(path: &std::path::Path) -> Option<String> {
    let raw = std::fs::read_to_string(path).ok()?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_locale_file(path: &std::path::Path, code: &str) {
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let _ = std::fs::write(path, code);
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn locale_round_trips_through_the_file() {
        let path = std::env::temp_dir()
            .join(format!("ruvubu-prefs-test-{}", std::process::id()))
            .join(STORAGE_KEY);

        assert_eq!(read_locale_file(&path), None);

        write_locale_file(&path, "en");
        assert_eq!(read_locale_file(&path), Some("en".to_string()));

        write_locale_file(&path, "fr");
        assert_eq!(read_locale_file(&path), Some("fr".to_string()));

        write_locale_file(&path, "   ");
        assert_eq!(read_locale_file(&path), None);

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }
}
