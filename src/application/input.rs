//! Boundary validation of the requested card size
//!
//! The domain functions assume `2 <= symbols_per_card <= 15` and never
//! re-check it. Everything entering from the outside goes through here.

use tracing::debug;

use crate::application::InputError;

pub const MIN_SYMBOLS_PER_CARD: usize = 2;
pub const MAX_SYMBOLS_PER_CARD: usize = 15;

/// Parse user text into a card size.
///
/// Surrounding whitespace is ignored. Checks, in order: empty input,
/// non-numeric input, value below 2, value above 15.
pub fn parse_symbols_per_card(input: &str) -> Result<usize, InputError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(InputError::Missing);
    }

    let value: i64 = trimmed
        .parse()
        .map_err(|_| InputError::InvalidNumber(trimmed.to_string()))?;
    debug!("parse_symbols_per_card: {:?} -> {}", input, value);

    check_symbols_per_card(value)
}

/// Range check for an already numeric card size.
pub fn check_symbols_per_card(value: i64) -> Result<usize, InputError> {
    if value < MIN_SYMBOLS_PER_CARD as i64 {
        return Err(InputError::TooSmall(value));
    }
    if value > MAX_SYMBOLS_PER_CARD as i64 {
        return Err(InputError::ExceedsLimit {
            value,
            max: MAX_SYMBOLS_PER_CARD,
        });
    }
    Ok(value as usize)
}
