//! File discovery.
//!
//! Walks a directory tree, applies the extension filter and exact-segment
//! directory exclusions from [`ScanOptions`], and returns the candidate
//! source files for analysis. Traversal is read-only and bounded by the
//! configured file ceiling.

use std::path::PathBuf;

use thiserror::Error;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::options::ScanOptions;

/// Errors that can occur during file discovery.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// The scan root does not exist or is not a directory.
    #[error("Directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    /// The scan root exists but could not be read.
    #[error("Failed to read scan root: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for discovery operations.
pub type DiscoveryResult<T> = Result<T, DiscoveryError>;

/// Discovers source files under the configured root.
///
/// Directories whose name exactly equals an excluded segment are pruned along
/// with their entire subtree. Unreadable entries are skipped and the walk
/// continues. Once `max_files` entries have been collected the remaining
/// files are silently skipped; this is a documented bound on analysis cost,
/// not a failure.
///
/// Returned paths are absolute and normalized (the root is canonicalized
/// before walking), sorted by file name within each directory so repeated
/// scans of an unchanged tree yield the same order.
pub fn discover_files(options: &ScanOptions) -> DiscoveryResult<Vec<PathBuf>> {
    let root = options.root.canonicalize().map_err(|err| {
        // A missing root is "not found"; an existing but unreadable one is IO.
        if err.kind() == std::io::ErrorKind::NotFound {
            DiscoveryError::DirectoryNotFound(options.root.clone())
        } else {
            DiscoveryError::Io(err)
        }
    })?;

    if !root.is_dir() {
        return Err(DiscoveryError::DirectoryNotFound(options.root.clone()));
    }

    let mut files = Vec::new();
    let walker = WalkDir::new(&root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            // Never prune the root itself; its name is not a path segment
            // relative to the scan.
            if entry.depth() == 0 || !entry.file_type().is_dir() {
                return true;
            }
            let name = entry.file_name().to_string_lossy();
            !options.is_excluded_segment(&name)
        });

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                // Permission problems on individual entries are recoverable.
                debug!(error = %err, "skipping unreadable entry");
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }
        if !options.matches_file(entry.path()) {
            continue;
        }
        if files.len() >= options.max_files {
            warn!(
                max_files = options.max_files,
                "file ceiling reached, remaining files skipped"
            );
            break;
        }

        files.push(entry.into_path());
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "export {};\n").unwrap();
    }

    #[test]
    fn test_missing_root_fails() {
        let options = ScanOptions::new("/definitely/not/a/real/path");
        let err = discover_files(&options).unwrap_err();
        assert!(matches!(err, DiscoveryError::DirectoryNotFound(_)));
    }

    #[test]
    fn test_root_must_be_directory() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("a.ts");
        touch(&file);

        let err = discover_files(&ScanOptions::new(&file)).unwrap_err();
        assert!(matches!(err, DiscoveryError::DirectoryNotFound(_)));
    }

    #[test]
    fn test_extension_filter() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("a.ts"));
        touch(&dir.path().join("b.tsx"));
        touch(&dir.path().join("c.js"));
        touch(&dir.path().join("d.jsx"));
        touch(&dir.path().join("readme.md"));
        touch(&dir.path().join("data.json"));

        let files = discover_files(&ScanOptions::new(dir.path())).unwrap();
        assert_eq!(files.len(), 4);
        assert!(files.iter().all(|f| {
            let ext = f.extension().unwrap().to_str().unwrap();
            matches!(ext, "ts" | "tsx" | "js" | "jsx")
        }));
    }

    #[test]
    fn test_excluded_segment_is_exact() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("src/a.ts"));
        touch(&dir.path().join("node_modules/pkg/index.js"));
        touch(&dir.path().join("node_modules2/b.ts"));

        let files = discover_files(&ScanOptions::new(dir.path())).unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|f| f.file_name().unwrap().to_string_lossy().into_owned())
            .collect();

        // node_modules is pruned, node_modules2 is not a match and survives
        assert!(names.contains(&"a.ts".to_string()));
        assert!(names.contains(&"b.ts".to_string()));
        assert!(!names.contains(&"index.js".to_string()));
    }

    #[test]
    fn test_nested_exclusion_prunes_subtree() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("a.ts"));
        touch(&dir.path().join("dist/deep/nested/bundle.js"));

        let files = discover_files(&ScanOptions::new(dir.path())).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("a.ts"));
    }

    #[test]
    fn test_max_files_ceiling() {
        let dir = TempDir::new().unwrap();
        for i in 0..10 {
            touch(&dir.path().join(format!("file{i}.ts")));
        }

        let options = ScanOptions::new(dir.path()).with_max_files(3);
        let files = discover_files(&options).unwrap();
        assert_eq!(files.len(), 3);
    }

    #[test]
    fn test_deterministic_order() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("zebra.ts"));
        touch(&dir.path().join("apple.ts"));
        touch(&dir.path().join("mango.ts"));

        let first = discover_files(&ScanOptions::new(dir.path())).unwrap();
        let second = discover_files(&ScanOptions::new(dir.path())).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_paths_are_absolute() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("a.ts"));

        let files = discover_files(&ScanOptions::new(dir.path())).unwrap();
        assert!(files.iter().all(|f| f.is_absolute()));
    }
}
