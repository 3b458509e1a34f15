//! Internationalization (i18n) support for `ruvubu-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (language selection + asset loading)
//! - `fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n/
//!   fr/ruvubu-ui.ftl   (fallback/reference)
//!   en/ruvubu-ui.ftl   (additional locale)
//! ```
//!
//! The site boots in French unless a visitor previously picked another
//! locale; the stored preference (localStorage on web, a config file on
//! native) wins over everything, and a corrupt or unknown stored value
//! silently falls back to French.
//!
//! Two lookup paths exist on purpose:
//! - `t!("key")` routes through `fl!` and is checked against the fallback
//!   FTL at compile time — a typo in a static UI string fails the build.
//! - [`label`] is a runtime lookup for keys derived from backend data
//!   (room types, category slugs); an unknown key comes back unchanged so
//!   the raw value stays visible instead of an error.
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::LanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

use crate::core::prefs;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Ergonomic translation macro.
/// Examples:
///     t!("nav-home")
///     t!("page-of", current = 2, total = 5)
///
/// This expands to `fl!(&*LOADER, ...)` keeping callsites short while
/// ensuring all lookups route through the shared loader.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain" (matches the crate / the fallback FTL filename).
///
/// Fallback file path must be: `i18n/fr/{DOMAIN}.ftl`
const DOMAIN: &str = "ruvubu-ui";

/// Locale the site boots into when nothing usable is stored.
pub const DEFAULT_LANGUAGE: &str = "fr";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = DEFAULT_LANGUAGE
        .parse()
        .expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Initialize i18n (idempotent). Selects the stored locale preference if
/// one exists and is embedded, otherwise the default.
pub fn init() {
    INIT.call_once(|| {
        let requested = startup_language();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &[requested]) {
            eprintln!("[i18n] Failed selecting languages ({err}); continuing with fallback");
        }
    });
}

fn startup_language() -> LanguageIdentifier {
    prefs::load_locale()
        .and_then(|code| code.parse::<LanguageIdentifier>().ok())
        .filter(|lang| {
            let tag = lang.to_string();
            available_languages().iter().any(|embedded| embedded == &tag)
        })
        .unwrap_or_else(|| {
            DEFAULT_LANGUAGE
                .parse()
                .expect("valid fallback language identifier")
        })
}

/// Switch language at runtime and persist the choice. If `tag` cannot be
/// parsed it is ignored (Ok returned).
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let lang: LanguageIdentifier = match tag.parse() {
        Ok(l) => l,
        Err(_) => return Ok(()), // Silently ignore invalid tags.
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang])?;
    // Persist only after the in-memory switch took.
    prefs::save_locale(tag);
    Ok(())
}

/// Active locale code, e.g. `"fr"`.
pub fn current_language() -> String {
    LOADER.current_language().to_string()
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

/// Runtime lookup for keys that arrive as data (room types, category
/// slugs). Unknown keys come back unchanged.
pub fn label(key: &str) -> String {
    init();
    if LOADER.has(key) {
        LOADER.get(key)
    } else {
        key.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fl;

    #[test]
    fn fallback_language_is_present() {
        assert!(available_languages().iter().any(|l| l == "fr"));
        assert!(available_languages().iter().any(|l| l == "en"));
    }

    #[test]
    fn basic_lookup_works() {
        init();
        let s = fl!(&*LOADER, "nav-home");
        assert_eq!(s, "Accueil");
    }

    #[test]
    fn parameterized_lookup_substitutes_args() {
        init();
        let s = t!("page-of", current = 2, total = 5);
        assert!(s.contains('2'), "missing current in {s:?}");
        assert!(s.contains('5'), "missing total in {s:?}");
        assert!(!s.contains("$current"), "unsubstituted placeholder in {s:?}");
    }

    #[test]
    fn dynamic_label_degrades_to_key() {
        init();
        assert_eq!(label("room-type-suite"), "Suite Vue Safari");
        assert_eq!(label("room-type-zeppelin"), "room-type-zeppelin");
    }

    #[test]
    fn dynamic_language_switch_reverts_on_failure() {
        init();
        let before = fl!(&*LOADER, "nav-home");
        let _ = set_language("zz !! not a tag");
        let after = fl!(&*LOADER, "nav-home");
        assert_eq!(before, after);
    }
}
