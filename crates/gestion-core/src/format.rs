//! Localized formatting helpers (es-AR).
//!
//! The panel renders amounts and dates the Argentine way: `$ 12.345,67` for
//! currency and `D/M/YYYY` (no zero padding) for dates. The exact output
//! shape is this module's contract; both helpers are pure.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

/// Format a numeric value as ARS currency text.
///
/// Thousands are grouped with `.`, decimals use `,` with two digits, and the
/// sign precedes the symbol: `-$ 1.500,25`.
pub fn format_currency(value: f64) -> String {
    // round to cents first so -0.004 does not come out signed
    let cents = (value.abs() * 100.0).round() as u64;
    let negative = value < 0.0 && cents > 0;
    let whole = group_thousands(cents / 100);
    let frac = cents % 100;
    if negative {
        format!("-$ {},{:02}", whole, frac)
    } else {
        format!("$ {},{:02}", whole, frac)
    }
}

/// Format a date-like string as an es-AR short date (`21/3/2026`).
///
/// Accepts RFC 3339 timestamps, `YYYY-MM-DD` and `YYYY-MM-DD HH:MM:SS`.
/// Unparseable input is returned unchanged.
pub fn format_date(input: &str) -> String {
    match parse_date(input) {
        Some(date) => format!("{}/{}/{}", date.day(), date.month(), date.year()),
        None => input.to_string(),
    }
}

fn parse_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.date_naive());
    }
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.date());
    }
    None
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let bytes = digits.as_bytes();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 && (bytes.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(*b as char);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_groups_thousands_with_dots() {
        assert_eq!(format_currency(0.0), "$ 0,00");
        assert_eq!(format_currency(5.0), "$ 5,00");
        assert_eq!(format_currency(1234.5), "$ 1.234,50");
        assert_eq!(format_currency(1_234_567.89), "$ 1.234.567,89");
    }

    #[test]
    fn currency_sign_precedes_symbol() {
        assert_eq!(format_currency(-1500.25), "-$ 1.500,25");
        // rounds to zero cents, so no sign survives
        assert_eq!(format_currency(-0.004), "$ 0,00");
    }

    #[test]
    fn currency_rounds_to_cents() {
        assert_eq!(format_currency(2.678), "$ 2,68");
        assert_eq!(format_currency(0.999), "$ 1,00");
    }

    #[test]
    fn date_renders_without_zero_padding() {
        assert_eq!(format_date("2026-03-05"), "5/3/2026");
        assert_eq!(format_date("2026-12-21"), "21/12/2026");
    }

    #[test]
    fn date_accepts_timestamps() {
        assert_eq!(format_date("2026-03-05 14:30:00"), "5/3/2026");
        assert_eq!(format_date("2026-03-05T14:30:00-03:00"), "5/3/2026");
    }

    #[test]
    fn unparseable_date_passes_through() {
        assert_eq!(format_date("sin fecha"), "sin fecha");
        assert_eq!(format_date(""), "");
    }
}
