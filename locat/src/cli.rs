// locat/src/cli.rs
//! This file defines the command-line interface (CLI) for the locat
//! application, including all flags the argument parser feeds into the core
//! as validated configuration.

use clap::{ArgAction, Parser};

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "locat",
    version = env!("CARGO_PKG_VERSION"),
    // The version short is -v, not clap's default -V; see the explicit flag.
    disable_version_flag = true,
    about = "Concatenate FILE(s) to standard output, in rainbow colors",
    long_about = "Concatenate FILE(s) to standard output.\n\
                  With no FILE, or when FILE is -, read standard input.\n\n\
                  When standard output is an interactive terminal (or --force is given), every\n\
                  character is tinted with a smoothly rotating 24-bit hue. Otherwise locat is a\n\
                  byte-transparent pass-through, so it stays safe in pipelines."
)]
pub struct Cli {
    /// Files to read; with no FILE, or when FILE is -, read standard input.
    #[arg(value_name = "FILE")]
    pub files: Vec<String>,

    /// Rainbow seed, -1 for random.
    #[arg(long, short = 's', value_name = "K", default_value_t = -1, allow_negative_numbers = true, help = "Rainbow seed, -1 for random.")]
    pub seed: i64,

    /// Rainbow frequency (hue rotation speed per line).
    #[arg(long, short = 'f', value_name = "X", default_value_t = 0.1, allow_negative_numbers = true, help = "Rainbow frequency (hue rotation speed per line).")]
    pub freq: f64,

    /// Rainbow spread (horizontal hue change rate within a line).
    #[arg(long, short = 'S', value_name = "X", default_value_t = 3.0, allow_negative_numbers = true, help = "Rainbow spread (horizontal hue change rate within a line).")]
    pub spread: f64,

    /// Invert foreground and background.
    #[arg(long, short = 'i', help = "Color the background instead of the foreground.")]
    pub inverse: bool,

    /// Force color even when stdout is not a tty.
    #[arg(long, short = 'F', help = "Force color even when stdout is not a tty.")]
    pub force: bool,

    /// Print the version number and exit.
    #[arg(long, short = 'v', action = ArgAction::Version, help = "Print the version number and exit.")]
    pub version: Option<bool>,
}
