//! Graph module: import graph storage and construction.
//!
//! [`build`] turns a discovered file list into an [`ImportGraph`]. Per-file
//! import extraction is a pure function of file content and runs in parallel;
//! the results are merged into the graph by a single sequential writer, so
//! the backing map never sees concurrent mutation.

mod import_graph;

pub use import_graph::ImportGraph;

use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::debug;

use crate::parser::{resolve, ImportParser};

/// Builds the import graph for the given files.
///
/// Every file becomes a node, even with no outgoing edges, so cycle detection
/// treats "no dependencies" uniformly. Edges are confined to the scanned set:
/// an import resolving to a file outside `files` is dropped. A file that
/// cannot be read or parsed contributes zero edges and the build continues.
pub fn build(files: &[PathBuf]) -> ImportGraph {
    let file_set: HashSet<&Path> = files.iter().map(PathBuf::as_path).collect();

    // Parallel extraction: each file's edge set depends only on its own
    // content, so this fans out freely. The collect preserves input order.
    let extracted: Vec<BTreeSet<PathBuf>> = files
        .par_iter()
        .map_init(
            || ImportParser::new().ok(),
            |parser, file| extract_targets(parser.as_mut(), file),
        )
        .collect();

    // Sequential merge: single writer for the shared map.
    let mut graph = ImportGraph::with_capacity(files.len(), files.len());
    for file in files {
        graph.add_file(file);
    }
    for (file, targets) in files.iter().zip(&extracted) {
        for target in targets {
            if file_set.contains(target.as_path()) {
                graph.add_dependency(file, target);
            } else {
                debug!(
                    from = %file.display(),
                    to = %target.display(),
                    "import resolves outside scanned set, edge dropped"
                );
            }
        }
    }

    graph
}

/// Resolved local import targets of one file, deduplicated.
fn extract_targets(parser: Option<&mut ImportParser>, file: &Path) -> BTreeSet<PathBuf> {
    let Some(parser) = parser else {
        debug!(file = %file.display(), "parser unavailable, file contributes no edges");
        return BTreeSet::new();
    };

    let source = match fs::read_to_string(file) {
        Ok(source) => source,
        Err(err) => {
            debug!(file = %file.display(), error = %err, "unreadable file skipped");
            return BTreeSet::new();
        }
    };

    let imports = match parser.extract(file, &source) {
        Ok(imports) => imports,
        Err(err) => {
            debug!(file = %file.display(), error = %err, "unparseable file skipped");
            return BTreeSet::new();
        }
    };

    imports
        .iter()
        .filter_map(|import| resolve(&import.specifier, file))
        .collect()
}
