// locat/src/lib.rs
//! # Locat CLI Application
//!
//! This crate provides the command-line interface around the `locat-core`
//! colorizing engine: argument parsing, output-mode routing, and process
//! exit-status plumbing.

pub mod cli;
pub mod commands;
pub mod logger;
