//! Conversion between card value strings and engine numbers.

extern crate alloc;

use alloc::format;
use alloc::string::{String, ToString};

use crate::error::ConversionError;

/// Parses a decimal literal into the engine's single-precision number.
///
/// # Errors
///
/// Returns a [`ConversionError`] carrying the input when it is not a valid
/// decimal literal.
///
/// # Example
///
/// ```
/// use hilo::parse_number;
///
/// assert_eq!(parse_number("2.50"), Ok(2.5));
/// assert!(parse_number("two").is_err());
/// ```
pub fn parse_number(s: &str) -> Result<f32, ConversionError> {
    s.parse::<f32>().map_err(|source| ConversionError {
        value: s.to_string(),
        source,
    })
}

/// Formats a number as a fixed-point literal with two fractional digits.
///
/// This is lossy: anything past the second decimal place is rounded away.
///
/// # Example
///
/// ```
/// use hilo::format_number;
///
/// assert_eq!(format_number(3.0), "3.00");
/// assert_eq!(format_number(1.0 / 3.0), "0.33");
/// ```
#[must_use]
pub fn format_number(n: f32) -> String {
    format!("{n:.2}")
}
