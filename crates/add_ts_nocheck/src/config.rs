// crates/add_ts_nocheck/src/config.rs

use std::path::PathBuf;

use anyhow::{bail, Result};
use find_source_files::SuffixFilter;
use ts_nocheck_marker::TS_NOCHECK_MARKER;

/// Root scanned when nothing else is configured.
pub const DEFAULT_ROOT: &str = "src";

/// Centralized runtime configuration composed from CLI + environment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApplyConfig {
    pub roots: Vec<PathBuf>,
    pub marker: String,
    pub filter: SuffixFilter,
    /// Decide and report, but never write.
    pub dry_run: bool,
    pub verbose: bool,
}

impl Default for ApplyConfig {
    fn default() -> Self {
        Self {
            roots: vec![PathBuf::from(DEFAULT_ROOT)],
            marker: TS_NOCHECK_MARKER.to_string(),
            filter: SuffixFilter::default(),
            dry_run: false,
            verbose: false,
        }
    }
}

impl ApplyConfig {
    /// Default configuration scanning `roots` instead of `src`.
    pub fn with_roots<I, P>(roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            roots: roots.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Rejects settings that would corrupt files or match nothing.
    pub fn validate(&self) -> Result<()> {
        if self.marker.trim().is_empty() {
            bail!("marker must not be empty");
        }
        if self.marker.contains('\n') || self.marker.contains('\r') {
            bail!("marker must be a single line, got {:?}", self.marker);
        }
        if self.filter.include.is_empty() {
            bail!("at least one file suffix must be recognized");
        }
        if self.filter.include.iter().any(|s| s.is_empty()) {
            bail!("recognized file suffixes must not be empty");
        }
        Ok(())
    }
}
