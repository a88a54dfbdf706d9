//! Parsing raw serial lines into readings.

use thiserror::Error;

/// Divisor applied to every parsed value before broadcast.
pub const SCALE: f64 = 10.0;

/// Why a raw line was rejected.
#[derive(Debug, Error)]
pub enum ParseReadingError {
    /// The line is not a JSON numeric literal.
    #[error("not a JSON number: {0}")]
    NotANumber(#[from] serde_json::Error),

    /// The parsed value is not finite.
    #[error("value is not finite")]
    NotFinite,
}

/// A single scaled sensor reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    /// Parsed value divided by [`SCALE`].
    pub value: f64,
}

impl Reading {
    /// Parse one raw line into a reading.
    ///
    /// Only a plain JSON number is accepted. Objects, arrays, strings,
    /// booleans and null are rejected rather than coerced, so nothing
    /// non-numeric ever reaches the broadcast.
    pub fn parse(line: &str) -> Result<Self, ParseReadingError> {
        let raw: f64 = serde_json::from_str(line.trim())?;
        if !raw.is_finite() {
            return Err(ParseReadingError::NotFinite);
        }
        Ok(Self { value: raw / SCALE })
    }
}
