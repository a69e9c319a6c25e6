// crates/find_source_files/src/lib.rs

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Suffixes recognized by default.
pub const DEFAULT_INCLUDE_SUFFIXES: &[&str] = &[".ts", ".tsx"];

/// Declaration-only files are left alone by default.
pub const DEFAULT_EXCLUDE_SUFFIXES: &[&str] = &[".d.ts"];

/// Decides which file names qualify for processing.
///
/// A file qualifies when its basename ends with one of `include` and with
/// none of `exclude`. Matching is case sensitive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SuffixFilter {
    pub include: Vec<String>,
    pub exclude: Vec<String>,
}

impl Default for SuffixFilter {
    fn default() -> Self {
        Self::new(
            DEFAULT_INCLUDE_SUFFIXES.iter().map(|s| s.to_string()).collect(),
            DEFAULT_EXCLUDE_SUFFIXES.iter().map(|s| s.to_string()).collect(),
        )
    }
}

impl SuffixFilter {
    pub fn new(include: Vec<String>, exclude: Vec<String>) -> Self {
        Self { include, exclude }
    }

    /// Checks a bare file name.
    pub fn matches_name(&self, file_name: &str) -> bool {
        self.matches_bytes(file_name.as_bytes())
    }

    /// Checks the basename of `path`. Names that are not valid UTF-8 are
    /// compared on their raw bytes.
    pub fn matches(&self, path: &Path) -> bool {
        path.file_name()
            .map_or(false, |name| self.matches_bytes(name.as_encoded_bytes()))
    }

    fn matches_bytes(&self, name: &[u8]) -> bool {
        self.include.iter().any(|suffix| name.ends_with(suffix.as_bytes()))
            && !self.exclude.iter().any(|suffix| name.ends_with(suffix.as_bytes()))
    }
}

/// A traversal problem below an existing root, e.g. an unreadable subdirectory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WalkError {
    pub path: Option<PathBuf>,
    pub message: String,
}

/// Everything a scan of the configured roots turned up.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Discovery {
    /// Qualifying files, roots in the given order, entries sorted by name.
    pub files: Vec<PathBuf>,
    /// Roots that do not exist or are not directories.
    pub missing_roots: Vec<PathBuf>,
    pub walk_errors: Vec<WalkError>,
}

/// Walks every root and collects the files accepted by `filter`.
///
/// Missing roots and traversal errors are recorded instead of aborting, so
/// one bad directory never hides the files under the others. Symlinks are
/// not followed.
pub fn find_source_files<P: AsRef<Path>>(roots: &[P], filter: &SuffixFilter) -> Discovery {
    let mut discovery = Discovery::default();

    for root in roots {
        let root = root.as_ref();
        if !root.is_dir() {
            log::debug!("Skipping missing root {}", root.display());
            discovery.missing_roots.push(root.to_path_buf());
            continue;
        }

        let mut matched = 0usize;
        for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    discovery.walk_errors.push(WalkError {
                        path: err.path().map(Path::to_path_buf),
                        message: err.to_string(),
                    });
                    continue;
                }
            };
            if entry.file_type().is_file() && filter.matches(entry.path()) {
                matched += 1;
                discovery.files.push(entry.into_path());
            }
        }
        log::debug!("{} qualifying file(s) under {}", matched, root.display());
    }

    discovery
}
