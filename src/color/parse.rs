//! String descriptor parsing
//!
//! Two textual forms are understood:
//! * `#` followed by hex digits, read singly when fewer than six remain and in
//!   pairs otherwise (`#abc` is read as `#aabbcc`)
//! * `rgb(...)` / `rgba(...)` anywhere in the string, with comma separated
//!   integer or fractional components
//!
//! Both produce raw channel values; padding and range handling happen in
//! [`CanonicalColor::from_partial`](super::CanonicalColor::from_partial).

use regex::Regex;
use std::sync::LazyLock;

use crate::constants::parsing::{
    FRACTION_MAX, FRACTION_SCALE, FUNCTIONAL_PATTERN, HEX_PREFIX, PAIRED_HEX_MIN_LEN,
};
use crate::{ColorError, Result};

static FUNCTIONAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(FUNCTIONAL_PATTERN).expect("rgb() pattern is valid"));

/// Parse a string descriptor into raw channel values
///
/// # Errors
///
/// `UnmatchedString` when the string is neither form, otherwise the error of
/// the form-specific parser.
pub fn parse_channels(input: &str) -> Result<Vec<f64>> {
    if input.starts_with(HEX_PREFIX) {
        parse_hex(input)
    } else {
        parse_functional(input)
    }
}

/// Parse a `#`-prefixed hex string.
///
/// Only the first non-decimal character is dropped before chunking, which for
/// these inputs is the leading `#`.
pub fn parse_hex(input: &str) -> Result<Vec<f64>> {
    let mut cleaned = input.to_string();
    if let Some((index, _)) = cleaned.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
        cleaned.remove(index);
    }

    let digits: Vec<char> = cleaned.chars().collect();
    let width = if digits.len() >= PAIRED_HEX_MIN_LEN { 2 } else { 1 };

    digits
        .chunks(width)
        .map(|chunk| {
            let mut chunk: String = chunk.iter().collect();
            if chunk.len() == 1 {
                chunk = chunk.repeat(2);
            }
            if !chunk.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(ColorError::InvalidHexDigits {
                    input: input.to_string(),
                    chunk,
                });
            }
            u8::from_str_radix(&chunk, 16)
                .map(f64::from)
                .map_err(|_| ColorError::InvalidHexDigits {
                    input: input.to_string(),
                    chunk,
                })
        })
        .collect()
}

/// Parse an `rgb(...)` or `rgba(...)` string.
///
/// Components with a `.` are fractions on a 0-1 scale, mapped by
/// `min(255, 256 * value)`. All others are base-10 integers.
pub fn parse_functional(input: &str) -> Result<Vec<f64>> {
    let captures = FUNCTIONAL_RE
        .captures(input)
        .ok_or_else(|| ColorError::UnmatchedString {
            input: input.to_string(),
        })?;
    let args = captures.get(1).map_or("", |m| m.as_str());

    args.split(',')
        .map(|component| parse_component(input, component))
        .collect()
}

fn parse_component(input: &str, component: &str) -> Result<f64> {
    let invalid = || ColorError::InvalidComponent {
        input: input.to_string(),
        component: component.to_string(),
    };
    let trimmed = component.trim();

    if trimmed.contains('.') {
        let fraction: f64 = trimmed.parse().map_err(|_| invalid())?;
        Ok((FRACTION_SCALE * fraction).min(FRACTION_MAX))
    } else {
        let integer: i64 = trimmed.parse().map_err(|_| invalid())?;
        Ok(integer as f64)
    }
}
