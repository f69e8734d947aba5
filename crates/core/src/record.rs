//! Encoded bcrypt hash records
//!
//! A record is the standard modular-crypt string understood by every bcrypt
//! verifier:
//!
//! ```text
//! $2b$12$R9h/cIPz0gi.URNNX3kh2OPST9/PgBkqquzi.Ss7KIUgO2t0jWMUW
//!  ^^ ^^ ^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^
//!  |  |  salt (22 chars)      digest (31 chars)
//!  |  cost
//!  algorithm
//! ```

use core::fmt;
use core::str::FromStr;

use crate::error::Error;
use crate::params::*;

/// Validated, encoded bcrypt hash
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HashRecord {
    encoded: String,
    cost: u32,
}

impl HashRecord {
    /// Wrap a string produced by the bcrypt backend
    pub(crate) fn from_backend(encoded: String, cost: u32) -> Self {
        Self { encoded, cost }
    }

    /// Algorithm tag, e.g. `2b`
    pub fn algorithm(&self) -> &str {
        &self.encoded[1..3]
    }

    /// Cost factor the record was computed with
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Encoded salt (22 bcrypt-base64 characters)
    pub fn salt(&self) -> &str {
        &self.encoded[7..7 + ENCODED_SALT_LEN]
    }

    /// Encoded digest (31 bcrypt-base64 characters)
    pub fn digest(&self) -> &str {
        &self.encoded[7 + ENCODED_SALT_LEN..]
    }

    pub fn as_str(&self) -> &str {
        &self.encoded
    }
}

impl FromStr for HashRecord {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != ENCODED_LEN {
            return Err(Error::InvalidRecord(format!(
                "expected {} characters, got {}",
                ENCODED_LEN,
                s.len()
            )));
        }

        let mut fields = s.split('$');
        let (Some(""), Some(algorithm), Some(cost), Some(payload), None) = (
            fields.next(),
            fields.next(),
            fields.next(),
            fields.next(),
            fields.next(),
        ) else {
            return Err(Error::InvalidRecord(
                "expected $<algorithm>$<cost>$<salt><digest>".to_string(),
            ));
        };

        if !ACCEPTED_ALGORITHMS.contains(&algorithm) {
            return Err(Error::InvalidRecord(format!(
                "unknown algorithm tag {algorithm:?}"
            )));
        }

        if cost.len() != 2 || !cost.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidRecord(format!("malformed cost {cost:?}")));
        }
        let cost: u32 = cost
            .parse()
            .map_err(|_| Error::InvalidRecord(format!("malformed cost {cost:?}")))?;
        if !(MIN_COST..=MAX_COST).contains(&cost) {
            return Err(Error::InvalidRecord(format!(
                "cost {cost} outside {MIN_COST}..={MAX_COST}"
            )));
        }

        if payload.len() != ENCODED_SALT_LEN + ENCODED_DIGEST_LEN {
            return Err(Error::InvalidRecord(
                "salt and digest have the wrong length".to_string(),
            ));
        }
        if let Some(bad) = payload.chars().find(|&c| bcrypt_base64_index(c).is_none()) {
            return Err(Error::InvalidRecord(format!(
                "character {bad:?} is outside the bcrypt alphabet"
            )));
        }

        // 22 chars carry 128 salt bits and 31 chars carry 184 digest bits;
        // the unused low bits of each final character must be zero
        let (salt, digest) = payload.split_at(ENCODED_SALT_LEN);
        if !has_clean_tail(salt, 0b1111) {
            return Err(Error::InvalidRecord(
                "salt has non-zero trailing bits".to_string(),
            ));
        }
        if !has_clean_tail(digest, 0b11) {
            return Err(Error::InvalidRecord(
                "digest has non-zero trailing bits".to_string(),
            ));
        }

        Ok(Self {
            encoded: s.to_string(),
            cost,
        })
    }
}

impl fmt::Display for HashRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encoded)
    }
}

impl AsRef<str> for HashRecord {
    fn as_ref(&self) -> &str {
        &self.encoded
    }
}

const BCRYPT_ALPHABET: &[u8; 64] =
    b"./ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

fn bcrypt_base64_index(c: char) -> Option<u8> {
    BCRYPT_ALPHABET
        .iter()
        .position(|&b| char::from(b) == c)
        .map(|i| i as u8)
}

fn has_clean_tail(field: &str, unused_bits: u8) -> bool {
    field
        .chars()
        .last()
        .and_then(bcrypt_base64_index)
        .is_some_and(|i| i & unused_bits == 0)
}
