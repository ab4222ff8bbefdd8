//! Price × quantity totals for the sale form.
//!
//! Inputs arrive as raw field text. The price field is read as a decimal and
//! the quantity field as an integer; in both cases the longest leading
//! numeric prefix counts and anything unparseable coerces to zero. The total
//! is recomputed from scratch on every input, never accumulated.

/// Parse the longest leading decimal prefix, or 0 when there is none.
pub fn parse_price(raw: &str) -> f64 {
    decimal_prefix(raw).unwrap_or(0.0)
}

/// Parse the longest leading integer prefix, or 0 when there is none.
pub fn parse_quantity(raw: &str) -> i64 {
    integer_prefix(raw).unwrap_or(0)
}

/// Total for one sale line.
pub fn line_total(price_raw: &str, quantity_raw: &str) -> f64 {
    parse_price(price_raw) * parse_quantity(quantity_raw) as f64
}

/// Render a total with exactly two decimal places.
pub fn format_total(total: f64) -> String {
    format!("{:.2}", total)
}

fn decimal_prefix(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }
    let mut seen_digit = false;
    let mut seen_dot = false;
    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => {
                seen_digit = true;
                end += 1;
            }
            b'.' if !seen_dot => {
                seen_dot = true;
                end += 1;
            }
            _ => break,
        }
    }
    if !seen_digit {
        return None;
    }
    s[..end].parse().ok()
}

fn integer_prefix(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == digits_start {
        return None;
    }
    s[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_numeric_coerces_to_zero() {
        assert_eq!(parse_price(""), 0.0);
        assert_eq!(parse_price("abc"), 0.0);
        assert_eq!(parse_quantity(""), 0);
        assert_eq!(parse_quantity("muchos"), 0);
        assert_eq!(line_total("precio", "3"), 0.0);
    }

    #[test]
    fn leading_prefix_is_enough() {
        assert_eq!(parse_price("12.50 pesos"), 12.5);
        assert_eq!(parse_price(" .5"), 0.5);
        assert_eq!(parse_price("1.2.3"), 1.2);
        // an integer read stops at the decimal point
        assert_eq!(parse_quantity("3.7"), 3);
        assert_eq!(parse_quantity("-2 unidades"), -2);
    }

    #[test]
    fn total_is_price_times_quantity() {
        assert_eq!(line_total("150.50", "3"), 451.5);
        assert_eq!(format_total(line_total("150.50", "3")), "451.50");
    }

    #[test]
    fn total_always_carries_two_decimals() {
        assert_eq!(format_total(0.0), "0.00");
        assert_eq!(format_total(10.0), "10.00");
        assert_eq!(format_total(0.125), "0.13");
    }
}
