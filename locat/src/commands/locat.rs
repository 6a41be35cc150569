// locat/src/commands/locat.rs
//! The stream router: consumes each input source in order and decides,
//! per source, whether to colorize, copy lines verbatim, or copy raw bytes.

use anyhow::Result;
use log::{debug, info};
use std::fs;
use std::io::{self, BufRead, BufReader, Read, Write};

use is_terminal::IsTerminal;
use locat_core::Colorizer;

/// Marker positional meaning "read from standard input".
pub const STDIN_MARKER: &str = "-";

/// Chunk size for the binary pass-through copy.
const CHUNK_SIZE: usize = 8192;

/// Options for one router run.
pub struct LocatOptions {
    /// Input sources in order; `-` means standard input.
    pub files: Vec<String>,
    /// Starting value of the rotation counter.
    pub seed: f64,
}

/// How a single source is relayed to the output.
///
/// Decided once per source from two terminal facts plus the force flag; an
/// explicit enum rather than re-checking the terminal state mid-stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Output is a terminal (or color is forced): rainbow every line.
    Colorize,
    /// Output is not a terminal but the input is one: relay lines verbatim.
    LinePassthrough,
    /// Neither side is interactive: relay opaque bytes in fixed-size chunks.
    BinaryPassthrough,
}

/// Selects the output mode for one source. Colorization wins whenever it
/// would actually be seen (tty output or forced); otherwise escape codes
/// would pollute files and pipes.
pub fn select_mode(stdout_is_tty: bool, input_is_tty: bool, force: bool) -> OutputMode {
    if stdout_is_tty || force {
        OutputMode::Colorize
    } else if input_is_tty {
        OutputMode::LinePassthrough
    } else {
        OutputMode::BinaryPassthrough
    }
}

/// The main operation runner for the locat CLI.
///
/// Consumes every source in `opts.files` in order, threading the seed through
/// successive colorize calls so the rotation continues seamlessly across file
/// boundaries. A source that cannot be opened is reported on stderr and
/// skipped; the run continues. Returns `true` if any source failed to open,
/// which the caller maps to a non-zero exit status.
pub fn run_locat(colorizer: &Colorizer, opts: LocatOptions) -> Result<bool> {
    info!("starting locat run over {} source(s)", opts.files.len());

    let stdout = io::stdout();
    let stdout_is_tty = stdout.is_terminal();
    let mut out = stdout.lock();

    let mut seed = opts.seed;
    let mut had_errors = false;

    for file in &opts.files {
        // Each file is opened immediately before use and dropped as soon as
        // the source is exhausted; stdin is locked, never closed.
        let (mut reader, input_is_tty): (Box<dyn BufRead>, bool) = if file == STDIN_MARKER {
            let stdin = io::stdin();
            let input_is_tty = stdin.is_terminal();
            (Box::new(stdin.lock()), input_is_tty)
        } else {
            match fs::File::open(file) {
                Ok(f) => (Box::new(BufReader::new(f)), false),
                Err(e) => {
                    eprintln!("locat: {file}: {e}");
                    had_errors = true;
                    continue;
                }
            }
        };

        let mode = select_mode(stdout_is_tty, input_is_tty, colorizer.config().force);
        debug!("source {file}: {mode:?}");

        match mode {
            OutputMode::Colorize => {
                seed = colorizer.cat(&mut *reader, &mut out, seed)?;
            }
            OutputMode::LinePassthrough => copy_lines(&mut *reader, &mut out)?,
            OutputMode::BinaryPassthrough => copy_chunks(&mut *reader, &mut out)?,
        }
        out.flush()?;
    }

    info!("locat run finished, had_errors={had_errors}");
    Ok(had_errors)
}

/// Relays the stream line by line without modification, terminators included.
fn copy_lines<R, W>(reader: &mut R, writer: &mut W) -> io::Result<()>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(());
        }
        writer.write_all(&buf)?;
    }
}

/// Relays the stream as opaque bytes in fixed-size chunks, byte-transparent
/// for non-text data.
fn copy_chunks<R, W>(reader: &mut R, writer: &mut W) -> io::Result<()>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let mut buf = [0u8; CHUNK_SIZE];
    loop {
        let n = reader.read(&mut buf)?;
        if n == 0 {
            return Ok(());
        }
        writer.write_all(&buf[..n])?;
    }
}
