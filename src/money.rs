//! Money Formatting
//!
//! Amounts travel as integer cents; display strings exist only at the UI edge.
//! `parse_cents` accepts what `format_cents` produces so editable fields can
//! round-trip.

/// Format integer cents as a dollar string: 500 -> "$5.00", -150 -> "-$1.50"
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{}${}.{:02}", sign, abs / 100, abs % 100)
}

/// Parse a user-entered amount back into cents.
///
/// Accepts an optional leading `$`, commas as thousands separators, and at
/// most two decimal places. Returns None for anything else.
pub fn parse_cents(input: &str) -> Option<i64> {
    let trimmed = input.trim();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(r) => (true, r),
        None => (false, trimmed),
    };
    let rest = rest.strip_prefix('$').unwrap_or(rest);
    let cleaned: String = rest.chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return None;
    }

    let (whole, frac) = match cleaned.split_once('.') {
        Some((w, f)) => (w, f),
        None => (cleaned.as_str(), ""),
    };
    if frac.len() > 2 || !whole.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    if !frac.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let whole: i64 = if whole.is_empty() { 0 } else { whole.parse().ok()? };
    let frac_cents: i64 = match frac.len() {
        0 => 0,
        1 => frac.parse::<i64>().ok()? * 10,
        _ => frac.parse().ok()?,
    };
    let cents = whole.checked_mul(100)?.checked_add(frac_cents)?;
    Some(if negative { -cents } else { cents })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_cents() {
        assert_eq!(format_cents(500), "$5.00");
        assert_eq!(format_cents(0), "$0.00");
        assert_eq!(format_cents(199_99), "$199.99");
        assert_eq!(format_cents(-150), "-$1.50");
        assert_eq!(format_cents(5), "$0.05");
    }

    #[test]
    fn test_parse_cents() {
        assert_eq!(parse_cents("5.00"), Some(500));
        assert_eq!(parse_cents("$5.00"), Some(500));
        assert_eq!(parse_cents("5"), Some(500));
        assert_eq!(parse_cents("5.5"), Some(550));
        assert_eq!(parse_cents("1,234.56"), Some(123_456));
        assert_eq!(parse_cents("-$1.50"), Some(-150));
        assert_eq!(parse_cents(".75"), Some(75));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_cents(""), None);
        assert_eq!(parse_cents("$"), None);
        assert_eq!(parse_cents("abc"), None);
        assert_eq!(parse_cents("5.001"), None);
        assert_eq!(parse_cents("5..0"), None);
    }

    #[test]
    fn test_display_round_trip() {
        for cents in [0, 5, 99, 500, 123_456, 999_999_99] {
            assert_eq!(parse_cents(&format_cents(cents)), Some(cents));
        }
    }
}
