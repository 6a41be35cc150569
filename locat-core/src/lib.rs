// locat-core/src/lib.rs
//! # Locat Core Library
//!
//! `locat-core` provides the fundamental, terminal-independent logic for rainbow
//! colorization. It defines the color function that maps a continuous position
//! to a 24-bit RGB value, the truecolor escape-sequence formatting, and the
//! line-streaming colorizer that threads a seed counter across input sources.
//!
//! The library is designed to be pure where possible: the only I/O it performs
//! is reading lines from a caller-supplied reader and writing colorized bytes
//! to a caller-supplied writer. Terminal detection, file opening, and
//! output-mode selection live in the `locat` CLI crate.
//!
//! ## Modules
//!
//! * `color`: The `Rgb` triple, the `rainbow` function, and `Sgr` escape codes.
//! * `config`: `ColorConfig` validation and seed resolution.
//! * `colorizer`: The `Colorizer` — per-line colorization and the `cat` stream loop.
//! * `errors`: The `LocatError` type.
//!
//! ## Usage Example
//!
//! ```rust
//! use locat_core::{ColorConfig, Colorizer};
//! use std::io::Cursor;
//!
//! fn main() -> Result<(), locat_core::LocatError> {
//!     let config = ColorConfig::new(0.1, 3.0, false, true)?;
//!     let colorizer = Colorizer::new(config);
//!
//!     let mut out = Vec::new();
//!     let seed = colorizer.cat(&mut Cursor::new("hello\nworld\n"), &mut out, 0.0)?;
//!
//!     // The seed advances once per emitted line, so a subsequent source
//!     // can continue the rotation exactly where this one left off.
//!     assert_eq!(seed, 2.0);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return [`LocatError`]; configuration problems are
//! rejected at construction time, before any output is produced.
//!
//! License: MIT OR Apache-2.0

pub mod color;
pub mod colorizer;
pub mod config;
pub mod errors;

/// Re-exports the color primitives: the RGB triple, the rainbow function,
/// and the SGR escape-code formatter.
pub use color::{rainbow, Rgb, Sgr};

/// Re-exports the colorizer engine.
pub use colorizer::Colorizer;

/// Re-exports configuration types and seed resolution.
pub use config::{resolve_seed, ColorConfig};

/// Re-exports the custom error type for clear error reporting.
pub use errors::LocatError;
