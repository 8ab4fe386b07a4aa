//! Relative import specifier resolution.
//!
//! Maps a specifier such as `../lib/utils` to a concrete file on disk by
//! trying the candidate suffixes a TypeScript/JavaScript module loader would:
//! the exact path, then source extensions, then `index.*` inside a directory.
//! Package specifiers (anything not starting with `.`) are never resolved.

use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};

/// Extensions tried when a specifier omits its extension, in resolution
/// order. The same order applies to `index.*` directory candidates.
const EXTENSION_CANDIDATES: [&str; 4] = ["ts", "tsx", "js", "jsx"];

/// Resolves a relative specifier against the importing file's directory.
///
/// Returns `None` for non-relative (package) specifiers. For relative
/// specifiers the result is always `Some`: if no candidate exists on disk,
/// the lexically normalized joined path is returned as-is — the graph builder
/// drops edges whose target is not a scanned file, so an unresolvable
/// specifier simply produces no edge.
pub fn resolve(specifier: &str, importer: &Path) -> Option<PathBuf> {
    if !specifier.starts_with('.') {
        return None;
    }

    let dir = importer.parent().unwrap_or_else(|| Path::new(""));
    let joined = normalize(&dir.join(specifier));

    if joined.is_file() {
        return Some(joined);
    }

    for ext in EXTENSION_CANDIDATES {
        let candidate = with_suffix(&joined, ext);
        if candidate.is_file() {
            return Some(candidate);
        }
    }

    for ext in EXTENSION_CANDIDATES {
        let candidate = joined.join(format!("index.{ext}"));
        if candidate.is_file() {
            return Some(candidate);
        }
    }

    Some(joined)
}

/// Appends `.ext` to the final path segment without replacing an existing
/// extension, so `./v1.api` tries `v1.api.ts`, not `v1.ts`.
fn with_suffix(path: &Path, ext: &str) -> PathBuf {
    let mut os: OsString = path.as_os_str().to_os_string();
    os.push(format!(".{ext}"));
    PathBuf::from(os)
}

/// Lexically folds `.` and `..` components so resolved paths compare equal
/// to the discoverer's output. Does not touch the filesystem.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "export {};\n").unwrap();
    }

    #[test]
    fn test_package_specifier_not_resolved() {
        assert_eq!(resolve("react", Path::new("/p/a.ts")), None);
        assert_eq!(resolve("@scope/pkg", Path::new("/p/a.ts")), None);
        assert_eq!(resolve("lodash/debounce", Path::new("/p/a.ts")), None);
    }

    #[test]
    fn test_exact_path_wins() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().canonicalize().unwrap();
        touch(&root.join("b.css"));

        let resolved = resolve("./b.css", &root.join("a.ts")).unwrap();
        assert_eq!(resolved, root.join("b.css"));
    }

    #[test]
    fn test_extension_candidates_in_order() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().canonicalize().unwrap();
        // Both b.ts and b.js exist; .ts is tried first.
        touch(&root.join("b.ts"));
        touch(&root.join("b.js"));

        let resolved = resolve("./b", &root.join("a.ts")).unwrap();
        assert_eq!(resolved, root.join("b.ts"));
    }

    #[test]
    fn test_index_fallback() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().canonicalize().unwrap();
        touch(&root.join("widgets/index.tsx"));

        let resolved = resolve("./widgets", &root.join("a.ts")).unwrap();
        assert_eq!(resolved, root.join("widgets/index.tsx"));
    }

    #[test]
    fn test_file_beats_index_directory() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().canonicalize().unwrap();
        touch(&root.join("api.ts"));
        touch(&root.join("api/index.ts"));

        let resolved = resolve("./api", &root.join("a.ts")).unwrap();
        assert_eq!(resolved, root.join("api.ts"));
    }

    #[test]
    fn test_parent_traversal() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().canonicalize().unwrap();
        touch(&root.join("shared/utils.ts"));

        let importer = root.join("features/auth/login.ts");
        let resolved = resolve("../../shared/utils", &importer).unwrap();
        assert_eq!(resolved, root.join("shared/utils.ts"));
    }

    #[test]
    fn test_unresolved_falls_back_to_joined_path() {
        let resolved = resolve("./missing", Path::new("/p/src/a.ts")).unwrap();
        assert_eq!(resolved, PathBuf::from("/p/src/missing"));
    }

    #[test]
    fn test_suffix_does_not_replace_existing_dot_segment() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().canonicalize().unwrap();
        touch(&root.join("v1.api.ts"));

        let resolved = resolve("./v1.api", &root.join("a.ts")).unwrap();
        assert_eq!(resolved, root.join("v1.api.ts"));
    }

    #[test]
    fn test_normalize_folds_dots() {
        assert_eq!(
            normalize(Path::new("/p/src/./sub/../lib/x.ts")),
            PathBuf::from("/p/src/lib/x.ts")
        );
        assert_eq!(normalize(Path::new("/p/./a")), PathBuf::from("/p/a"));
    }
}
