//! Password stretching and hashing parameters

/// Default stretch length in characters
pub const DEFAULT_LENGTH: usize = 64;

/// bcrypt cost factor (log2 of the key expansion rounds)
pub const DEFAULT_COST: u32 = bcrypt::DEFAULT_COST;

/// Raw salt size in bytes
pub const SALT_LEN: usize = 16;

/// Algorithm tag written into every record
pub const ALGORITHM: &str = "2b";

/// Algorithm tags accepted when parsing foreign records
pub const ACCEPTED_ALGORITHMS: [&str; 4] = ["2a", ALGORITHM, "2x", "2y"];

/// Smallest cost bcrypt accepts
pub const MIN_COST: u32 = 4;

/// Largest cost bcrypt accepts
pub const MAX_COST: u32 = 31;

/// Encoded salt length (bcrypt base64)
pub const ENCODED_SALT_LEN: usize = 22;

/// Encoded digest length (bcrypt base64)
pub const ENCODED_DIGEST_LEN: usize = 31;

/// Total length of an encoded record: `$2b$12$` + salt + digest
pub const ENCODED_LEN: usize = 7 + ENCODED_SALT_LEN + ENCODED_DIGEST_LEN;

/// bcrypt ignores password bytes past this point
pub const MAX_PASSWORD_BYTES: usize = 72;
