//! Monetary and text formatting helpers
//!
//! Monetary values render as a sign token kept separate from the magnitude
//! so that positive and negative values align on the digit position in
//! tabular layouts: the magnitude is always two decimals with thousands
//! separators, and the sign (`-` or empty) travels with the currency
//! symbol.

use chrono::{Local, TimeZone};

/// Split a value into its sign token and formatted absolute magnitude
///
/// `-1234.5` becomes `("-", "1,234.50")`; `1234.5` becomes `("", "1,234.50")`.
pub fn signed_parts(value: f64) -> (&'static str, String) {
    let sign = if value < 0.0 { "-" } else { "" };
    (sign, magnitude(value))
}

/// Format the absolute magnitude with two decimals and thousands separators
pub fn magnitude(value: f64) -> String {
    let plain = format!("{:.2}", value.abs());
    let (int_part, frac_part) = match plain.split_once('.') {
        Some((i, f)) => (i, f),
        None => (plain.as_str(), "00"),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3 + 3);
    let digits = int_part.len();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}.{}", grouped, frac_part)
}

/// Format a value with the sign attached to the currency symbol
///
/// `-1234.5` becomes `-$1,234.50`.
pub fn currency(value: f64) -> String {
    let (sign, magnitude) = signed_parts(value);
    format!("{}${}", sign, magnitude)
}

/// Render a posted timestamp as a local calendar date/time string
pub fn local_datetime(posted: i64, fmt: &str) -> String {
    match Local.timestamp_opt(posted, 0).earliest() {
        Some(dt) => dt.format(fmt).to_string(),
        None => "unknown".to_string(),
    }
}

/// Escape a feed-controlled string for HTML interpolation
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magnitude_grouping() {
        assert_eq!(magnitude(0.0), "0.00");
        assert_eq!(magnitude(5.0), "5.00");
        assert_eq!(magnitude(1234.5), "1,234.50");
        assert_eq!(magnitude(-1234.5), "1,234.50");
        assert_eq!(magnitude(1000000.0), "1,000,000.00");
        assert_eq!(magnitude(999.999), "1,000.00");
    }

    #[test]
    fn test_signed_parts() {
        assert_eq!(signed_parts(1234.5), ("", "1,234.50".to_string()));
        assert_eq!(signed_parts(-1234.5), ("-", "1,234.50".to_string()));
        assert_eq!(signed_parts(0.0), ("", "0.00".to_string()));
    }

    #[test]
    fn test_currency() {
        assert_eq!(currency(800.0), "$800.00");
        assert_eq!(currency(-75.5), "-$75.50");
        assert_eq!(currency(1234567.891), "$1,234,567.89");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"AT&T's"</b>"#),
            "&lt;b&gt;&quot;AT&amp;T&#39;s&quot;&lt;/b&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_local_datetime_invalid() {
        assert_eq!(local_datetime(i64::MAX, "%Y-%m-%d"), "unknown");
    }
}
