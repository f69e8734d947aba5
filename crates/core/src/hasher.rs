//! bcrypt hashing with fresh salts
//!
//! Every call draws a new salt from the operating system's CSPRNG, so hashing
//! the same password twice yields two different records that both verify.

use bcrypt::{BcryptError, Version};

use crate::error::{Error, Result};
use crate::params::*;
use crate::record::HashRecord;

/// bcrypt hasher
///
/// Holds no mutable state and can be shared freely between threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hasher {
    cost: u32,
}

impl Hasher {
    /// Create a hasher at [`DEFAULT_COST`]
    pub fn new() -> Self {
        Self { cost: DEFAULT_COST }
    }

    /// Cheap hasher for tests; bcrypt's minimum cost keeps them fast
    #[cfg(test)]
    pub(crate) fn with_cost(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a password with a freshly generated salt
    pub fn hash(&self, password: &str) -> Result<HashRecord> {
        if password.len() > MAX_PASSWORD_BYTES {
            tracing::debug!(
                bytes = password.len(),
                "password longer than {} bytes, bcrypt ignores the rest",
                MAX_PASSWORD_BYTES
            );
        }

        let salt = generate_salt()?;
        let parts = bcrypt::hash_with_salt(password, self.cost, salt)
            .map_err(|e| Error::HashingUnavailable(e.to_string()))?;

        // Version::TwoB writes the ALGORITHM tag
        Ok(HashRecord::from_backend(
            parts.format_for_version(Version::TwoB),
            self.cost,
        ))
    }

    /// Hash a password given as raw bytes, which must be UTF-8
    pub fn hash_bytes(&self, password: &[u8]) -> Result<HashRecord> {
        let password = std::str::from_utf8(password)?;
        self.hash(password)
    }
}

impl Default for Hasher {
    fn default() -> Self {
        Self::new()
    }
}

/// Hash a password at the default cost
pub fn hash_password(password: &str) -> Result<HashRecord> {
    Hasher::new().hash(password)
}

/// Check `password` against an encoded record
///
/// Accepts either a [`HashRecord`] or its encoded string. Returns `Ok(false)`
/// on mismatch; malformed records are an error.
pub fn verify(password: &str, record: impl AsRef<str>) -> Result<bool> {
    let record: HashRecord = record.as_ref().parse()?;
    bcrypt::verify(password, record.as_str()).map_err(|e| match e {
        BcryptError::InvalidHash(_)
        | BcryptError::InvalidPrefix(_)
        | BcryptError::InvalidCost(_)
        | BcryptError::InvalidBase64(_) => Error::InvalidRecord(e.to_string()),
        _ => Error::HashingUnavailable(e.to_string()),
    })
}

fn generate_salt() -> Result<[u8; SALT_LEN]> {
    let mut salt = [0u8; SALT_LEN];
    getrandom::getrandom(&mut salt).map_err(|e| Error::HashingUnavailable(e.to_string()))?;
    Ok(salt)
}
