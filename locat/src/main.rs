// locat/src/main.rs
//! Locat entry point.
//!
//! Parses the CLI, builds the validated color configuration, and hands the
//! sources to the stream router. Exit status is non-zero if any source
//! failed to open, after all remaining sources have been processed.

use anyhow::{Context, Result};
use clap::Parser;
use clap::error::ErrorKind;
use is_terminal::IsTerminal;
use std::env;
use std::io::{self, Cursor};
use std::process::ExitCode;

use locat::cli::Cli;
use locat::commands::locat::{LocatOptions, STDIN_MARKER, run_locat};
use locat::logger;
use locat_core::{ColorConfig, Colorizer, resolve_seed};

fn main() -> ExitCode {
    let args = match Cli::try_parse() {
        Ok(args) => args,
        Err(err) if err.kind() == ErrorKind::DisplayHelp => {
            // clap raises DisplayHelp before parsed args exist, so the force
            // flag has to be sniffed from the raw argument list.
            let force = env::args().any(|a| a == "--force" || a == "-F");
            return match print_help(&err.to_string(), force) {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    eprintln!("locat: {e:#}");
                    ExitCode::FAILURE
                }
            };
        }
        // Version display and argument errors keep clap's stream and status
        // conventions (stdout/0 and stderr/2 respectively).
        Err(err) => err.exit(),
    };

    logger::init_logger(None);

    match run(args) {
        Ok(had_errors) => {
            if had_errors {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            eprintln!("locat: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Cli) -> Result<bool> {
    let config = ColorConfig::new(args.freq, args.spread, args.inverse, args.force)
        .context("invalid configuration")?;
    let colorizer = Colorizer::new(config);
    let seed = resolve_seed(args.seed);

    let mut files = args.files;
    if files.is_empty() {
        files.push(STDIN_MARKER.to_string());
    }

    run_locat(&colorizer, LocatOptions { files, seed })
}

/// Prints the usage screen, which doubles as a demo: when stdout is a
/// terminal or color is forced, it is itself rainbowized, with a punchier
/// frequency and a wider spread than the defaults. Piped help stays plain
/// text.
fn print_help(help: &str, force: bool) -> Result<()> {
    let stdout = io::stdout();
    if stdout.is_terminal() || force {
        let colorizer = Colorizer::new(ColorConfig::new(0.3, 8.0, false, force)?);
        let mut out = stdout.lock();
        colorizer.cat(&mut Cursor::new(help), &mut out, resolve_seed(-1))?;
    } else {
        print!("{help}");
    }
    Ok(())
}
