#![cfg(test)]
//! Ensures the embedded component stylesheet remains present & non‑trivial.
//!
//! Release native builds inline `ui/assets/styling/site.css` via
//! `include_str!` (see `SiteHeader`); an accidental truncation or path
//! break would silently degrade styling only at *runtime*. This test
//! fails the build early instead.
//!
//! If you intentionally rename or relocate the stylesheet, update both
//! this test and the `include_str!` constant in the header component.

const EMBEDDED_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/styling/site.css"
));

#[test]
fn embedded_css_file_exists_and_is_not_empty() {
    assert!(
        !EMBEDDED_CSS.trim().is_empty(),
        "Embedded CSS file appears to be empty. If this is intentional, remove the test."
    );
}

#[test]
fn embedded_css_contains_expected_selectors() {
    // Selectors the Rust components rely on structurally.
    let required = [
        ":root",
        ".button--primary",
        ".site-header",
        ".site-footer",
        ".room-card",
        ".status-panel",
        ".page-banner",
        ".whatsapp__toggle",
        ".lightbox",
    ];
    for token in required {
        assert!(
            EMBEDDED_CSS.contains(token),
            "Expected selector `{token}` missing from embedded CSS"
        );
    }
}
