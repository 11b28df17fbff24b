//! Input boundary: raw form text to typed values, and the domain checks the
//! calculations apply before computing.
//!
//! Parsing is strict. `"70kg"`, `"NaN"` and `"inf"` are rejected rather than
//! coerced, so a calculation never sees a value it cannot use.

use std::str::FromStr;

use onco_model::{InputError, Result};
use tracing::debug;

/// Parse a required numeric field.
pub fn parse_number(field: &'static str, raw: &str) -> Result<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InputError::Missing { field });
    }
    let value: f64 = trimmed.parse().map_err(|_| InputError::NotNumeric {
        field,
        value: raw.to_string(),
    })?;
    if !value.is_finite() {
        return Err(InputError::NotFinite { field });
    }
    Ok(value)
}

/// Parse a field that must be strictly greater than zero.
pub fn parse_positive(field: &'static str, raw: &str) -> Result<f64> {
    let value = parse_number(field, raw)?;
    if value <= 0.0 {
        return Err(InputError::NotPositive { field, value });
    }
    Ok(value)
}

/// Parse a field that must be zero or greater.
pub fn parse_non_negative(field: &'static str, raw: &str) -> Result<f64> {
    let value = parse_number(field, raw)?;
    if value < 0.0 {
        return Err(InputError::Negative { field, value });
    }
    Ok(value)
}

/// Parse an optional non-negative field; absent or blank input yields `default`.
pub fn parse_non_negative_or(field: &'static str, raw: Option<&str>, default: f64) -> Result<f64> {
    match raw {
        Some(text) if !text.trim().is_empty() => parse_non_negative(field, text),
        _ => Ok(default),
    }
}

/// Parse an integer selection within an inclusive range.
pub fn parse_level(field: &'static str, raw: &str, min: u8, max: u8) -> Result<u8> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InputError::Missing { field });
    }
    let value: i64 = trimmed.parse().map_err(|_| InputError::NotNumeric {
        field,
        value: raw.to_string(),
    })?;
    if value < i64::from(min) || value > i64::from(max) {
        return Err(InputError::OutOfRange {
            field,
            value,
            min: i64::from(min),
            max: i64::from(max),
        });
    }
    // Range-checked above.
    Ok(value as u8)
}

/// Parse a required categorical field.
pub fn parse_choice<T>(field: &'static str, raw: &str) -> Result<T>
where
    T: FromStr<Err = InputError>,
{
    if raw.trim().is_empty() {
        return Err(InputError::Missing { field });
    }
    raw.parse()
}

/// Parse an optional categorical field; blank input is an unset selection.
pub fn parse_optional_choice<T>(raw: Option<&str>) -> Result<Option<T>>
where
    T: FromStr<Err = InputError>,
{
    match raw {
        Some(text) if !text.trim().is_empty() => text.parse().map(Some),
        _ => Ok(None),
    }
}

/// Domain check used inside calculations. Logs and yields `None` when the
/// value is not a finite number above zero.
pub(crate) fn positive(calculator: &'static str, field: &'static str, value: f64) -> Option<f64> {
    if value.is_finite() && value > 0.0 {
        Some(value)
    } else {
        debug!(calculator, field, "rejected non-positive input");
        None
    }
}

/// Domain check for fields that may be zero.
pub(crate) fn non_negative(
    calculator: &'static str,
    field: &'static str,
    value: f64,
) -> Option<f64> {
    if value.is_finite() && value >= 0.0 {
        Some(value)
    } else {
        debug!(calculator, field, "rejected negative input");
        None
    }
}

/// Final guard on a computed value so a non-finite or non-positive number is
/// never reported.
pub(crate) fn positive_result(calculator: &'static str, value: f64) -> Option<f64> {
    if value.is_finite() && value > 0.0 {
        Some(value)
    } else {
        debug!(calculator, "computed value outside the valid range");
        None
    }
}

/// Final guard for counts that may legitimately be zero.
pub(crate) fn non_negative_result(calculator: &'static str, value: f64) -> Option<f64> {
    if value.is_finite() && value >= 0.0 {
        Some(value)
    } else {
        debug!(calculator, "computed value outside the valid range");
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positive_rejects_zero_and_text() {
        assert_eq!(parse_positive("weight_kg", " 70 ").unwrap(), 70.0);
        assert_eq!(
            parse_positive("weight_kg", "0"),
            Err(InputError::NotPositive {
                field: "weight_kg",
                value: 0.0
            })
        );
        assert!(matches!(
            parse_positive("weight_kg", "70kg"),
            Err(InputError::NotNumeric { .. })
        ));
        assert_eq!(
            parse_positive("weight_kg", ""),
            Err(InputError::Missing { field: "weight_kg" })
        );
    }

    #[test]
    fn test_parse_number_rejects_non_finite() {
        assert_eq!(
            parse_number("qt_ms", "NaN"),
            Err(InputError::NotFinite { field: "qt_ms" })
        );
        assert_eq!(
            parse_number("qt_ms", "inf"),
            Err(InputError::NotFinite { field: "qt_ms" })
        );
    }

    #[test]
    fn test_optional_default() {
        assert_eq!(parse_non_negative_or("band_percent", None, 0.0).unwrap(), 0.0);
        assert_eq!(
            parse_non_negative_or("band_percent", Some("  "), 0.0).unwrap(),
            0.0
        );
        assert_eq!(
            parse_non_negative_or("band_percent", Some("5"), 0.0).unwrap(),
            5.0
        );
        assert!(parse_non_negative_or("band_percent", Some("-1"), 0.0).is_err());
    }

    #[test]
    fn test_parse_level_bounds() {
        assert_eq!(parse_level("grade", "3", 1, 5).unwrap(), 3);
        assert!(matches!(
            parse_level("grade", "0", 1, 5),
            Err(InputError::OutOfRange { value: 0, .. })
        ));
        assert!(parse_level("grade", "2.5", 1, 5).is_err());
    }

    #[test]
    fn test_domain_checks() {
        assert_eq!(positive("bsa", "height_cm", 175.0), Some(175.0));
        assert_eq!(positive("bsa", "height_cm", 0.0), None);
        assert_eq!(positive("bsa", "height_cm", f64::NAN), None);
        assert_eq!(non_negative("anc", "band_percent", 0.0), Some(0.0));
        assert_eq!(non_negative("anc", "band_percent", -0.5), None);
        assert_eq!(positive_result("qtc", 0.0), None);
        assert_eq!(positive_result("bsa", f64::INFINITY), None);
        assert_eq!(non_negative_result("anc", 0.0), Some(0.0));
        assert_eq!(non_negative_result("anc", f64::INFINITY), None);
    }
}
