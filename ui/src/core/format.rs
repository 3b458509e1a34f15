//! Formatting helpers for prices and ratings.

/// `40000` → `"40 000 FBu"` (Burundian francs, space-grouped thousands).
pub fn format_fbu(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 4);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }
    if rounded < 0 {
        format!("-{grouped} FBu")
    } else {
        format!("{grouped} FBu")
    }
}

/// One-decimal rating display, `4.8` style.
pub fn format_rating(rating: f64) -> String {
    format!("{rating:.1}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands_with_spaces() {
        assert_eq!(format_fbu(40_000.0), "40 000 FBu");
        assert_eq!(format_fbu(150_000.0), "150 000 FBu");
        assert_eq!(format_fbu(1_250_000.0), "1 250 000 FBu");
        assert_eq!(format_fbu(900.0), "900 FBu");
        assert_eq!(format_fbu(0.0), "0 FBu");
    }

    #[test]
    fn rounds_fractional_amounts() {
        assert_eq!(format_fbu(39_999.6), "40 000 FBu");
    }

    #[test]
    fn ratings_keep_one_decimal() {
        assert_eq!(format_rating(4.75), "4.8");
        assert_eq!(format_rating(0.0), "0.0");
    }
}
