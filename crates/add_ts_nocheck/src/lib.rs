// crates/add_ts_nocheck/src/lib.rs

//! Walks the configured roots and makes sure every TypeScript source file
//! starts with the `// @ts-nocheck` marker.
//!
//! Files are handled one at a time: read, decide, write only when the marker
//! is missing. A file that cannot be read or written is reported and
//! skipped; it never stops the run.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use find_source_files::find_source_files;
use ts_nocheck_marker::ensure_marker;

pub mod config;
pub mod report;

pub use config::ApplyConfig;
pub use report::{ConsoleReporter, Reporter, SilentReporter};

/// A file that could not be processed, with the reason.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileFailure {
    pub path: PathBuf,
    pub message: String,
}

/// Counts collected over one run.
///
/// `total_files_scanned == modified_files + already_ok_files + failures.len()`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub total_files_scanned: usize,
    pub modified_files: usize,
    pub already_ok_files: usize,
    pub failures: Vec<FileFailure>,
}

impl Summary {
    pub fn failed_files(&self) -> usize {
        self.failures.len()
    }
}

/// What happened to a single qualifying file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileOutcome {
    Modified,
    AlreadyOk,
}

/// Applies the default marker and suffix rules under `root_dirs`, printing
/// progress to the console.
pub fn apply_markers<P: AsRef<Path>>(root_dirs: &[P]) -> Result<Summary> {
    let config = ApplyConfig::with_roots(root_dirs.iter().map(|p| p.as_ref().to_path_buf()));
    apply_markers_with(&config, &mut ConsoleReporter)
}

/// Runs one pass over `config.roots`, roots in order.
///
/// Fails only when `config` is invalid, before any file is touched. A file
/// reachable from several roots is processed once.
pub fn apply_markers_with(config: &ApplyConfig, reporter: &mut dyn Reporter) -> Result<Summary> {
    config.validate()?;

    let mut summary = Summary::default();
    let mut seen: HashSet<PathBuf> = HashSet::new();

    for root in &config.roots {
        let discovery = find_source_files(std::slice::from_ref(root), &config.filter);
        for missing in &discovery.missing_roots {
            reporter.missing_root(missing);
        }
        for error in &discovery.walk_errors {
            reporter.walk_error(error);
        }

        for path in discovery.files {
            let key = fs::canonicalize(&path).unwrap_or_else(|_| path.clone());
            if !seen.insert(key) {
                log::debug!("Already visited {}", path.display());
                continue;
            }

            summary.total_files_scanned += 1;
            match process_file(&path, &config.marker, config.dry_run) {
                Ok(FileOutcome::Modified) => {
                    summary.modified_files += 1;
                    reporter.modified(&path, config.dry_run);
                }
                Ok(FileOutcome::AlreadyOk) => {
                    log::debug!("Marker already present in {}", path.display());
                    summary.already_ok_files += 1;
                }
                Err(err) => {
                    let failure = FileFailure {
                        path,
                        message: format!("{:#}", err),
                    };
                    reporter.failed(&failure);
                    summary.failures.push(failure);
                }
            }
        }
    }

    log::info!(
        "Scanned {} file(s): {} modified, {} already OK, {} failed",
        summary.total_files_scanned,
        summary.modified_files,
        summary.already_ok_files,
        summary.failed_files()
    );
    Ok(summary)
}

/// Ensures a single file starts with `marker`.
///
/// With `dry_run` the decision is made but nothing is written.
pub fn process_file(path: &Path, marker: &str, dry_run: bool) -> Result<FileOutcome> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let new_content = match ensure_marker(&content, marker) {
        Some(new_content) => new_content,
        None => return Ok(FileOutcome::AlreadyOk),
    };

    if !dry_run {
        fs::write(path, new_content)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }
    Ok(FileOutcome::Modified)
}
