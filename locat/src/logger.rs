// locat/src/logger.rs
//! Logging bootstrap for the CLI.
//!
//! locat is a pipe filter, so stderr chatter is off by default; `RUST_LOG`
//! re-enables it for debugging without changing the output stream.

use env_logger::Env;
use log::LevelFilter;

/// Initializes `env_logger` once for the process.
///
/// An explicit `level` overrides `RUST_LOG`; `None` defaults to off but lets
/// the environment opt in. Safe to call more than once (later calls no-op),
/// which keeps tests that share a process happy.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("off"));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.format_timestamp(None);
    let _ = builder.try_init();
}
