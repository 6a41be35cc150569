// locat-core/src/colorizer.rs
//! The line-streaming colorizer.
//!
//! `colorize_line` maps one line of text to its escape-coded form;
//! `cat` drives it over a whole stream, advancing the seed once per line and
//! returning the final value so the caller can thread it into the next source.
//!
//! License: MIT OR Apache-2.0

use std::fmt::Write as _;
use std::io::{BufRead, Write};

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::color::{rainbow, Sgr};
use crate::config::ColorConfig;
use crate::errors::LocatError;

/// Pre-existing color/erase escape sequences embedded in the input. Only the
/// "set graphics" (`m`) and "erase" (`K`) terminators are stripped; any other
/// control sequence passes through untouched.
static STRIP_ANSI: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\x1b\[[0-9;]*[mK]").expect("strip pattern must compile"));

/// Tabs render at a terminal-dependent width, which would desynchronize the
/// character-index-based hue progression. Expand them to a fixed 8 spaces.
const TAB_EXPANSION: &str = "        ";

/// The rainbow colorizer engine.
///
/// Holds the validated [`ColorConfig`]; the seed counter is deliberately not
/// stored here but passed into and returned from each streaming call, so that
/// rotation continuity across multiple sources is explicit in the call chain.
#[derive(Debug, Clone)]
pub struct Colorizer {
    config: ColorConfig,
}

impl Colorizer {
    pub fn new(config: ColorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ColorConfig {
        &self.config
    }

    /// Colorizes one line (without its terminator) into an escape-coded string.
    ///
    /// Pre-existing color/erase codes are stripped first so they cannot nest
    /// inside the freshly emitted ones, tabs are expanded, and then every
    /// character is prefixed with a truecolor sequence for
    /// `rainbow(seed + i / spread)`. The line is closed with a reset code and
    /// a newline; an empty line still gets the reset and newline.
    pub fn colorize_line(&self, text: &str, seed: f64) -> String {
        let stripped = STRIP_ANSI.replace_all(text, "");
        let expanded = stripped.replace('\t', TAB_EXPANSION);

        // Each colored character costs ~20 bytes of escape sequence.
        let mut line = String::with_capacity(expanded.len() * 20 + 8);
        for (i, ch) in expanded.chars().enumerate() {
            let color = rainbow(self.config.freq, seed + i as f64 / self.config.spread);
            let code = if self.config.inverse {
                Sgr::Background(color)
            } else {
                Sgr::Foreground(color)
            };
            // Writing into a String cannot fail.
            let _ = write!(line, "{code}{ch}");
        }
        let _ = write!(line, "{}", Sgr::Reset);
        line.push('\n');
        line
    }

    /// Consumes `reader` line by line, colorizing each into `writer`.
    ///
    /// The seed is incremented by exactly 1 before each line is colorized and
    /// the final value is returned, preserving rotation continuity into the
    /// next source. A partial final line with no terminator is still
    /// colorized and emitted. Lines are read as raw bytes and decoded
    /// lossily, so invalid UTF-8 never aborts the stream.
    pub fn cat<R, W>(&self, reader: &mut R, writer: &mut W, mut seed: f64) -> Result<f64, LocatError>
    where
        R: BufRead + ?Sized,
        W: Write + ?Sized,
    {
        let mut lines = 0u64;
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let text = String::from_utf8_lossy(&buf);
            let text = text.strip_suffix('\n').unwrap_or(&text);
            let text = text.strip_suffix('\r').unwrap_or(text);

            seed += 1.0;
            writer.write_all(self.colorize_line(text, seed).as_bytes())?;
            lines += 1;
        }
        debug!("colorized {lines} lines, final seed {seed}");
        Ok(seed)
    }
}
