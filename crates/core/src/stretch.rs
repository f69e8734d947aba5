//! Password stretching
//!
//! Expands a short, memorable base password to an exact length by repeating
//! it end to end and cutting the last repetition short:
//!
//! ```text
//! base      = "abc"
//! length    = 8
//! repeats   = ceil(8 / 3) = 3  ->  "abcabcabc"
//! stretched = "abcabcab"
//! ```
//!
//! Lengths are counted in `char`s, so a multi-byte character is never split.

use crate::error::{Error, Result};
use crate::params::DEFAULT_LENGTH;

/// Stretch `base` to exactly `length` characters.
///
/// Fails with [`Error::InvalidInput`] if `base` is empty, whatever the length.
pub fn stretch(base: &str, length: usize) -> Result<String> {
    let chars = base.chars().count();
    if chars == 0 {
        return Err(Error::InvalidInput);
    }

    // Ceiling division: the repeated string is never shorter than `length`
    let repeats = length.div_ceil(chars);

    Ok(base.repeat(repeats).chars().take(length).collect())
}

/// Stretch `base` to [`DEFAULT_LENGTH`] characters
pub fn stretch_default(base: &str) -> Result<String> {
    stretch(base, DEFAULT_LENGTH)
}
