// count-files/src/main.rs
//! Counts the files in a directory recursively, grouped by its immediate
//! subdirectories. Files sitting directly in the base directory group under
//! ".". A distinct utility: it shares no logic with locat.

use anyhow::{Result, anyhow};
use clap::Parser;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use walkdir::WalkDir;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "count-files",
    version = env!("CARGO_PKG_VERSION"),
    about = "Count the files in DIR recursively, grouped by its subdirectories"
)]
struct Cli {
    /// Directory to scan; defaults to the current directory.
    #[arg(value_name = "DIR", default_value = ".")]
    dir: PathBuf,

    /// Include directories in the counts as well. By default only files are
    /// counted, so a subdirectory tree contributes its files but not itself.
    #[arg(short = 'd', help = "Include directories in the counts as well.")]
    count_dirs: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli.dir, cli.count_dirs) {
        Ok(report) => {
            print!("{report}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("count-files: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(base: &Path, count_dirs: bool) -> Result<String> {
    let counts = gather_counts(base, count_dirs)?;
    Ok(render(&counts))
}

/// Walks `base` and counts entries per group, returning the groups sorted by
/// ascending count. An unreadable directory anywhere in the walk is fatal.
fn gather_counts(base: &Path, count_dirs: bool) -> Result<Vec<(String, u64)>> {
    let mut counts: HashMap<String, u64> = HashMap::new();
    counts.insert(".".to_string(), 0);

    for entry in WalkDir::new(base) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(base).display().to_string();
            match e.io_error() {
                Some(io) => anyhow!("{path}: {io}"),
                None => anyhow!("{path}: {e}"),
            }
        })?;
        if entry.depth() == 0 {
            continue;
        }

        if entry.file_type().is_dir() {
            // Every immediate subdirectory gets a group, even an empty one.
            if entry.depth() == 1 {
                counts
                    .entry(entry.file_name().to_string_lossy().into_owned())
                    .or_insert(0);
            }
            if !count_dirs {
                continue;
            }
        }

        *counts.entry(group_for(base, entry.path())).or_insert(0) += 1;
    }

    let mut counts: Vec<(String, u64)> = counts.into_iter().collect();
    counts.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
    Ok(counts)
}

/// The group of an entry is the top-level subdirectory of the directory that
/// contains it; entries sitting directly in `base` map to ".".
fn group_for(base: &Path, path: &Path) -> String {
    path.parent()
        .and_then(|parent| parent.strip_prefix(base).ok())
        .and_then(|rel| rel.components().next())
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .unwrap_or_else(|| ".".to_string())
}

/// Renders one line per group, counts right-aligned to the widest value.
fn render(counts: &[(String, u64)]) -> String {
    let width = counts
        .iter()
        .map(|(_, c)| c.to_string().len())
        .max()
        .unwrap_or(1);
    let mut out = String::new();
    for (name, count) in counts {
        out.push_str(&format!(" {count:>width$} {name}\n"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::{TempDir, tempdir};

    fn sample_tree() -> TempDir {
        let dir = tempdir().unwrap();
        let base = dir.path();
        fs::write(base.join("file1"), "").unwrap();
        fs::write(base.join("file2"), "").unwrap();
        fs::create_dir_all(base.join("dir1").join("dir2")).unwrap();
        fs::write(base.join("dir1").join("file3"), "").unwrap();
        fs::write(base.join("dir1").join("dir2").join("file4"), "").unwrap();
        dir
    }

    #[test]
    fn test_counts_files_only() {
        let dir = sample_tree();
        let counts = gather_counts(dir.path(), false).unwrap();
        assert_eq!(counts, vec![(".".to_string(), 2), ("dir1".to_string(), 2)]);
    }

    #[test]
    fn test_counts_including_directories() {
        let dir = sample_tree();
        let counts = gather_counts(dir.path(), true).unwrap();
        assert_eq!(counts, vec![(".".to_string(), 3), ("dir1".to_string(), 3)]);
    }

    #[test]
    fn test_empty_subdirectory_still_listed() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("empty")).unwrap();
        let counts = gather_counts(dir.path(), false).unwrap();
        assert_eq!(counts, vec![(".".to_string(), 0), ("empty".to_string(), 0)]);
    }

    #[test]
    fn test_missing_directory_is_fatal() {
        let err = gather_counts(Path::new("/nonexistent-count-files-base"), false).unwrap_err();
        assert!(err.to_string().contains("/nonexistent-count-files-base"));
    }

    #[test]
    fn test_render_right_aligns_counts() {
        let counts = vec![("a".to_string(), 3), ("base".to_string(), 12)];
        assert_eq!(render(&counts), "  3 a\n 12 base\n");
    }
}
