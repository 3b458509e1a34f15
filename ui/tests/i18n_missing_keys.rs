use std::collections::{BTreeSet, HashSet};

/// Translation completeness test.
/// Every key used by a page must exist in *both* locale maps, so this
/// checks coverage in both directions between `fr` (fallback) and `en`.
///
/// This is a lightweight parser:
/// - Ignores comment lines starting with `#`
/// - Treats any line of the form `key =` or `key=` as a message definition
/// - Skips blank / attribute / continuation lines
/// - Does not attempt to parse multi-line pattern bodies (only keys)
///
/// If you add a new locale:
/// 1. Create `ui/i18n/<locale>/ruvubu-ui.ftl`
/// 2. Copy all keys from `fr/ruvubu-ui.ftl`
/// 3. Run `cargo test -p ruvubu-ui` to confirm completeness.
#[test]
fn all_locales_cover_the_same_keys() {
    // Embed the FTL sources at compile time.
    // (If you add a new locale, register it here.)
    const FR: &str = include_str!("../i18n/fr/ruvubu-ui.ftl");
    const EN: &str = include_str!("../i18n/en/ruvubu-ui.ftl");

    let fr_keys = extract_keys(FR);
    let en_keys = extract_keys(EN);

    assert!(!fr_keys.is_empty(), "Fallback (fr) contains no keys.");
    assert_no_dup_keys(FR, "fr");
    assert_no_dup_keys(EN, "en");

    let mut failures = Vec::new();

    let missing_in_en: BTreeSet<&String> = fr_keys.difference(&en_keys).collect();
    if !missing_in_en.is_empty() {
        failures.push(format!(
            "Locale en is missing {} key(s):\n  {}",
            missing_in_en.len(),
            missing_in_en
                .iter()
                .map(|k| k.as_str())
                .collect::<Vec<_>>()
                .join("\n  ")
        ));
    }

    let missing_in_fr: BTreeSet<&String> = en_keys.difference(&fr_keys).collect();
    if !missing_in_fr.is_empty() {
        failures.push(format!(
            "Locale fr is missing {} key(s):\n  {}",
            missing_in_fr.len(),
            missing_in_fr
                .iter()
                .map(|k| k.as_str())
                .collect::<Vec<_>>()
                .join("\n  ")
        ));
    }

    if !failures.is_empty() {
        panic!(
            "Translation completeness check failed:\n\n{}\n\nHint: copy the missing keys from the other locale, then translate.",
            failures.join("\n\n")
        );
    }
}

/// Extract message keys from a Fluent file (simple heuristic).
fn extract_keys(src: &str) -> HashSet<String> {
    let mut keys = HashSet::new();

    for line in src.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        // Skip attribute or continuation lines (start with '.' or indent).
        if line.starts_with('.') {
            continue;
        }
        // Basic pattern: key [space]* '='
        if let Some(eq_pos) = line.find('=') {
            let (left, _right) = line.split_at(eq_pos);
            let key = left.trim();
            if !key.is_empty()
                && !key.contains(' ')
                && !key.contains('\t')
                && !key.starts_with('[')
                && !key.starts_with('@')
            {
                keys.insert(key.to_string());
            }
        }
    }

    keys
}

/// Assert no duplicate key definitions in a single FTL file (rudimentary).
fn assert_no_dup_keys(src: &str, locale: &str) {
    let mut seen = HashSet::new();
    let mut dups = BTreeSet::new();

    for line in src.lines() {
        let raw = line;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('.') {
            continue;
        }
        if let Some(eq_pos) = line.find('=') {
            let key = line[..eq_pos].trim();
            if !key.is_empty()
                && !key.contains(' ')
                && !key.contains('\t')
                && !key.starts_with('[')
                && !key.starts_with('@')
            {
                if !seen.insert(key.to_string()) {
                    dups.insert(format!("{key}  (line: \"{raw}\")"));
                }
            }
        }
    }

    if !dups.is_empty() {
        panic!(
            "Duplicate key definitions in {locale}:\n  {}",
            dups.into_iter().collect::<Vec<_>>().join("\n  ")
        );
    }
}
