//! pwstretch
//!
//! Turns short, memorable base passwords into fixed-length passwords and
//! hashes them with bcrypt.
//!
//! # Overview
//!
//! Each base password is repeated end to end and cut to an exact length
//! (64 characters by default), then hashed with a fresh random salt. The
//! resulting records are standard `$2b$` bcrypt strings.
//!
//! # Example
//!
//! ```rust,no_run
//! use pwstretch::pipeline::Pipeline;
//! use pwstretch::report::{render_text, Row};
//!
//! let entries = Pipeline::default().run(["flower123", "Alice2025"]).unwrap();
//! let rows: Vec<Row> = entries.iter().map(Row::from).collect();
//! print!("{}", render_text(&rows));
//! ```

// Re-export the core algorithm
pub use pwstretch_core as algorithm;

pub mod config;
pub mod pipeline;
pub mod report;

// Convenience re-exports
pub use algorithm::{hash_password, stretch, verify, Error, HashRecord, Hasher};
