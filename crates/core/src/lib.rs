//! # pwstretch core
//!
//! Turns short, human-memorable base passwords into fixed-length passwords
//! and hashes them with bcrypt.
//!
//! ## Stages
//!
//! - **Stretch**: repeat the base end to end and truncate to an exact length
//!   (64 characters by default)
//! - **Hash**: bcrypt with a fresh 16-byte salt per call at cost 12
//!
//! ## Record Format
//!
//! Hashes are standard bcrypt strings, so any bcrypt verifier accepts them:
//!
//! ```text
//! $2b$12$<22-char salt><31-char digest>
//! ```
//!
//! ## Example
//!
//! ```rust
//! use pwstretch_core::{hash_password, stretch, verify};
//!
//! let stretched = stretch("flower123", 64).unwrap();
//! assert_eq!(stretched.chars().count(), 64);
//!
//! let record = hash_password(&stretched).unwrap();
//! assert!(verify(&stretched, record.as_str()).unwrap());
//! ```

mod error;
mod hasher;
mod params;
mod record;
mod stretch;

pub use error::{Error, Result};
pub use hasher::{Hasher, hash_password, verify};
pub use params::*;
pub use record::HashRecord;
pub use stretch::{stretch, stretch_default};
