//! Fixed-point value and key validation

use crate::contract::{NumberFormat, SettingValue, SettingsError, ValueError, MAX_KEY_LEN, VALUE_SCALE};
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Largest value the (10,2) column can hold
pub const MAX_VALUE: Decimal = Decimal::from_parts(1_410_065_407, 2, 0, false, 2); // 99999999.99

/// Validate a raw value and normalize it to scale 2
///
/// Text is parsed with `format` first and with the locale-invariant convention
/// second. The parsed number is rounded half away from zero before the range check.
pub fn validate_value(raw: &SettingValue, format: NumberFormat) -> Result<Decimal, ValueError> {
    let parsed = match raw {
        SettingValue::Fixed(value) => *value,
        SettingValue::Text(text) => parse_decimal(text, format)?,
    };
    normalize(parsed)
}

/// Parse a decimal numeral, trying `format` before the invariant convention
pub fn parse_decimal(text: &str, format: NumberFormat) -> Result<Decimal, ValueError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ValueError::Empty);
    }

    let canonical = canonicalize(trimmed, format)
        .or_else(|| canonicalize(trimmed, NumberFormat::INVARIANT))
        .ok_or_else(|| ValueError::NotNumeric {
            input: text.to_string(),
        })?;

    // well-formed but wider than 96 bits
    Decimal::from_str(&canonical).map_err(|_| ValueError::OutOfRange {
        value: trimmed.to_string(),
    })
}

/// Round to scale 2 and check `[0.00, 99999999.99]`
pub fn normalize(value: Decimal) -> Result<Decimal, ValueError> {
    let mut rounded = value.round_dp_with_strategy(VALUE_SCALE, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        rounded = Decimal::ZERO;
    }
    if rounded.is_sign_negative() || rounded > MAX_VALUE {
        return Err(ValueError::OutOfRange {
            value: rounded.to_string(),
        });
    }
    rounded.rescale(VALUE_SCALE);
    Ok(rounded)
}

/// Validate a setting key: 1 to 50 characters
pub fn validate_key(key: &str) -> Result<(), SettingsError> {
    if key.is_empty() {
        return Err(SettingsError::InvalidKey {
            key: key.to_string(),
            reason: "key cannot be empty".to_string(),
        });
    }

    let len = key.chars().count();
    if len > MAX_KEY_LEN {
        return Err(SettingsError::InvalidKey {
            key: key.to_string(),
            reason: format!("key is {} characters, maximum is {}", len, MAX_KEY_LEN),
        });
    }

    Ok(())
}

/// Rewrite a numeral in `format` as `[-]digits.digits`, or `None` if it is malformed
fn canonicalize(text: &str, format: NumberFormat) -> Option<String> {
    let (negative, body) = match text.chars().next() {
        Some('-') => (true, &text[1..]),
        Some('+') => (false, &text[1..]),
        _ => (false, text),
    };

    let (int_part, frac_part) = match body.split_once(format.decimal_separator) {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (body, ""),
    };

    let int_digits = ungroup(int_part, format.group_separator)?;
    if !frac_part.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    if int_digits.is_empty() && frac_part.is_empty() {
        return None;
    }

    Some(format!(
        "{}{}.{}",
        if negative { "-" } else { "" },
        if int_digits.is_empty() { "0" } else { &int_digits },
        if frac_part.is_empty() { "0" } else { frac_part },
    ))
}

/// Strip group separators, accepting them only between well-formed groups
fn ungroup(int_part: &str, separator: char) -> Option<String> {
    if !int_part.contains(separator) {
        return int_part
            .chars()
            .all(|c| c.is_ascii_digit())
            .then(|| int_part.to_string());
    }

    let mut digits = String::with_capacity(int_part.len());
    for (i, group) in int_part.split(separator).enumerate() {
        let well_formed = if i == 0 {
            (1..=3).contains(&group.len())
        } else {
            group.len() == 3
        };
        if !well_formed || !group.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        digits.push_str(group);
    }
    Some(digits)
}
