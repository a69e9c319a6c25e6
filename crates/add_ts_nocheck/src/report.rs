// crates/add_ts_nocheck/src/report.rs

use std::path::Path;

use find_source_files::WalkError;

use crate::{FileFailure, Summary};

pub const SEPARATOR: &str = "--------------------------------------------------";

/// Receives progress events while markers are applied.
pub trait Reporter {
    fn modified(&mut self, path: &Path, dry_run: bool);
    fn missing_root(&mut self, root: &Path);
    fn walk_error(&mut self, error: &WalkError);
    fn failed(&mut self, failure: &FileFailure);
}

/// Prints progress to stdout and diagnostics to stderr.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn modified(&mut self, path: &Path, dry_run: bool) {
        if dry_run {
            println!("Would modify: {}", path.display());
        } else {
            println!("Modified: {}", path.display());
        }
    }

    fn missing_root(&mut self, root: &Path) {
        eprintln!("Warning: directory '{}' does not exist", root.display());
    }

    fn walk_error(&mut self, error: &WalkError) {
        match &error.path {
            Some(path) => eprintln!("Warning: cannot traverse {}: {}", path.display(), error.message),
            None => eprintln!("Warning: {}", error.message),
        }
    }

    fn failed(&mut self, failure: &FileFailure) {
        eprintln!("Error: {}: {}", failure.path.display(), failure.message);
    }
}

/// Discards every event.
#[derive(Debug, Default)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn modified(&mut self, _path: &Path, _dry_run: bool) {}
    fn missing_root(&mut self, _root: &Path) {}
    fn walk_error(&mut self, _error: &WalkError) {}
    fn failed(&mut self, _failure: &FileFailure) {}
}

/// Formats the closing summary block.
pub fn render_summary(summary: &Summary, dry_run: bool) -> String {
    let mut lines = vec![
        SEPARATOR.to_string(),
        if dry_run {
            "Done (dry run, nothing written).".to_string()
        } else {
            "Done.".to_string()
        },
        format!("Files scanned: {}", summary.total_files_scanned),
        format!(
            "Files {}: {}",
            if dry_run { "to modify" } else { "modified" },
            summary.modified_files
        ),
        format!("Files already OK: {}", summary.already_ok_files),
    ];
    if !summary.failures.is_empty() {
        lines.push(format!("Files failed: {}", summary.failed_files()));
    }
    lines.join("\n")
}
