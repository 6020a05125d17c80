//! Numeric normalization utilities.

use bridge_ingest::RawValue;

use super::text::fold_width;

/// Longest leading `-?digits[.digits]` prefix, requiring at least one digit.
fn leading_decimal(cleaned: &str) -> Option<f64> {
    let bytes = cleaned.as_bytes();
    let mut end = 0;
    if bytes.first() == Some(&b'-') {
        end = 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        end = frac_end;
    }
    if digits == 0 {
        return None;
    }
    cleaned[..end].trim_end_matches('.').parse::<f64>().ok()
}

/// Parses a number from a raw field, tolerating stray formatting.
///
/// Text is width-folded, then every character other than an ASCII digit,
/// `.` or `-` is dropped (`"1,234 m"` reads as 1234) and the leading decimal
/// prefix is parsed. Typed numbers pass through. Anything empty or
/// non-finite is `None`.
pub fn parse_number(value: &RawValue) -> Option<f64> {
    let parsed = match value {
        RawValue::Number(number) => Some(*number),
        RawValue::Text(text) => {
            let cleaned: String = fold_width(text)
                .chars()
                .filter(|ch| ch.is_ascii_digit() || *ch == '.' || *ch == '-')
                .collect();
            if cleaned.is_empty() {
                None
            } else {
                leading_decimal(&cleaned)
            }
        }
        RawValue::Missing => None,
    };
    parsed.filter(|number| number.is_finite())
}

/// Parses a whole number, truncating toward zero.
///
/// Values outside the `i32` range are `None`.
pub fn parse_integer(value: &RawValue) -> Option<i32> {
    let number = parse_number(value)?.trunc();
    if number < f64::from(i32::MIN) || number > f64::from(i32::MAX) {
        return None;
    }
    Some(number as i32)
}

/// Formats a floating-point number as a string without trailing zeros.
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

/// Rounds to a fixed number of decimal places for presentation series.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: &str) -> RawValue {
        RawValue::from(value)
    }

    #[test]
    fn strips_stray_formatting() {
        assert_eq!(parse_number(&text("1,234")), Some(1234.0));
        assert_eq!(parse_number(&text(" 12.5 m")), Some(12.5));
        assert_eq!(parse_number(&text("約３５．２")), Some(35.2));
        assert_eq!(parse_number(&text("-3")), Some(-3.0));
    }

    #[test]
    fn parses_leading_decimal_prefix() {
        assert_eq!(parse_number(&text("12.5.3")), Some(12.5));
        assert_eq!(parse_number(&text("1965-1970")), Some(1965.0));
        assert_eq!(parse_number(&text("5.")), Some(5.0));
        assert_eq!(parse_number(&text(".5")), Some(0.5));
    }

    #[test]
    fn rejects_empty_and_non_numeric() {
        assert_eq!(parse_number(&text("")), None);
        assert_eq!(parse_number(&text("不明")), None);
        assert_eq!(parse_number(&text("-")), None);
        assert_eq!(parse_number(&text(".")), None);
        assert_eq!(parse_number(&text("--5")), None);
        assert_eq!(parse_number(&RawValue::Missing), None);
    }

    #[test]
    fn typed_numbers_pass_through_unless_non_finite() {
        assert_eq!(parse_number(&RawValue::Number(7.25)), Some(7.25));
        assert_eq!(parse_number(&RawValue::Number(f64::NAN)), None);
        assert_eq!(parse_number(&RawValue::Number(f64::INFINITY)), None);
    }

    #[test]
    fn integers_truncate_and_stay_in_range() {
        assert_eq!(parse_integer(&text("1972年")), Some(1972));
        assert_eq!(parse_integer(&RawValue::Number(3.9)), Some(3));
        assert_eq!(parse_integer(&text("99999999999")), None);
    }

    #[test]
    fn formats_without_trailing_zeros() {
        assert_eq!(format_numeric(10.0), "10");
        assert_eq!(format_numeric(12.50), "12.5");
        assert_eq!(format_numeric(100.0), "100");
    }

    #[test]
    fn rounds_to_places() {
        assert_eq!(round_to(33.333_333, 1), 33.3);
        assert_eq!(round_to(1.23456, 3), 1.235);
    }
}
