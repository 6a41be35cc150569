// locat-core/src/errors.rs
//! Custom error types for the locat-core library.
//!
//! License: MIT OR Apache-2.0

use thiserror::Error;

/// This enum represents all possible error types in the `locat-core` library.
///
/// `#[non_exhaustive]` signals to consumers that new variants may be added in
/// future versions without a breaking change.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum LocatError {
    #[error("invalid value for --{option}: {value} ({reason})")]
    InvalidOption {
        option: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("An unexpected I/O error occurred: {0}")]
    Io(#[from] std::io::Error),
}
