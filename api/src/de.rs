//! Lenient deserializers for the backend's loosely typed fields.
//!
//! Numeric fields arrive as JSON numbers or as strings (`"40000.00"`), and
//! text fields occasionally carry the literal string `"undefined"`. Both
//! quirks are normalized here, once, so the rest of the workspace only ever
//! sees canonical values.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumOrText {
    Num(f64),
    Text(String),
}

/// Accepts a number, a numeric string, or nothing; anything unparseable
/// collapses to `0.0`.
pub fn lenient_f64<'de, D>(de: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<NumOrText>::deserialize(de)? {
        Some(NumOrText::Num(n)) => n,
        Some(NumOrText::Text(s)) => s.trim().parse().unwrap_or(0.0),
        None => 0.0,
    })
}

/// Same policy for integer counts (guest capacity, review counts).
pub fn lenient_u32<'de, D>(de: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<NumOrText>::deserialize(de)? {
        Some(NumOrText::Num(n)) if n >= 0.0 => n as u32,
        Some(NumOrText::Text(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    })
}

/// Treats `null`, `""`, and the literal `"undefined"` as absent text.
pub fn text_or_none<'de, D>(de: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(de)?;
    Ok(raw.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed == "undefined" {
            None
        } else {
            Some(trimmed.to_string())
        }
    }))
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "super::lenient_f64")]
        price: f64,
        #[serde(default, deserialize_with = "super::lenient_u32")]
        guests: u32,
        #[serde(default, deserialize_with = "super::text_or_none")]
        description: Option<String>,
    }

    #[test]
    fn numeric_strings_parse() {
        let probe: Probe =
            serde_json::from_str(r#"{"price": "40000.00", "guests": "2"}"#).unwrap();
        assert_eq!(probe.price, 40000.0);
        assert_eq!(probe.guests, 2);
    }

    #[test]
    fn plain_numbers_pass_through() {
        let probe: Probe = serde_json::from_str(r#"{"price": 85000, "guests": 4}"#).unwrap();
        assert_eq!(probe.price, 85000.0);
        assert_eq!(probe.guests, 4);
    }

    #[test]
    fn garbage_collapses_to_zero() {
        let probe: Probe =
            serde_json::from_str(r#"{"price": "n/a", "guests": null}"#).unwrap();
        assert_eq!(probe.price, 0.0);
        assert_eq!(probe.guests, 0);
    }

    #[test]
    fn undefined_text_becomes_none() {
        let probe: Probe = serde_json::from_str(r#"{"description": "undefined"}"#).unwrap();
        assert_eq!(probe.description, None);

        let probe: Probe = serde_json::from_str(r#"{"description": "  "}"#).unwrap();
        assert_eq!(probe.description, None);

        let probe: Probe = serde_json::from_str(r#"{"description": "Vue panoramique"}"#).unwrap();
        assert_eq!(probe.description.as_deref(), Some("Vue panoramique"));
    }
}
