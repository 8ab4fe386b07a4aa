//! Scan configuration.
//!
//! All pipeline stages receive an explicit [`ScanOptions`] value; there is no
//! ambient or global configuration, so concurrent analyses of different
//! directories never interfere.

use std::path::{Path, PathBuf};

/// Default extensions considered source files.
pub const DEFAULT_EXTENSIONS: [&str; 4] = ["ts", "tsx", "js", "jsx"];

/// Default directory names skipped during traversal.
pub const DEFAULT_EXCLUDES: [&str; 3] = ["node_modules", "dist", "build"];

/// Ceiling on the number of files a single scan will analyze.
pub const DEFAULT_MAX_FILES: usize = 10_000;

/// Configuration for a single analysis run.
///
/// Immutable once constructed; the pipeline never mutates it. Exclusions are
/// exact path-segment names, not glob patterns: a directory named
/// `node_modules` is skipped, a directory named `node_modules-backup` is not.
///
/// # Example
///
/// ```rust
/// use cyclescope::options::ScanOptions;
///
/// let options = ScanOptions::new("./src")
///     .with_exclude_segments(["node_modules", "vendor"])
///     .with_max_files(500);
///
/// assert_eq!(options.max_files, 500);
/// assert!(options.is_excluded_segment("vendor"));
/// assert!(!options.is_excluded_segment("vendor2"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    /// Root directory to scan.
    pub root: PathBuf,
    /// File extensions (without the dot) to include.
    pub extensions: Vec<String>,
    /// Directory segment names to skip, matched exactly.
    pub exclude_segments: Vec<String>,
    /// Maximum number of files analyzed in one run.
    pub max_files: usize,
}

impl ScanOptions {
    /// Creates options for the given root with default filters.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            exclude_segments: DEFAULT_EXCLUDES.iter().map(|s| s.to_string()).collect(),
            max_files: DEFAULT_MAX_FILES,
        }
    }

    /// Replaces the extension filter.
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the excluded directory segments.
    pub fn with_exclude_segments<I, S>(mut self, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_segments = segments.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the file-count ceiling.
    pub fn with_max_files(mut self, max_files: usize) -> Self {
        self.max_files = max_files;
        self
    }

    /// Returns true if `ext` (without the dot) is in the extension filter.
    pub fn matches_extension(&self, ext: &str) -> bool {
        self.extensions.iter().any(|e| e == ext)
    }

    /// Returns true if a directory named exactly `segment` should be skipped.
    pub fn is_excluded_segment(&self, segment: &str) -> bool {
        self.exclude_segments.iter().any(|s| s == segment)
    }

    /// Returns true if `path` has an extension in the filter.
    pub fn matches_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| self.matches_extension(e))
    }
}
