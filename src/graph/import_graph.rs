//! File-level import graph backed by petgraph.
//!
//! Nodes are absolute, normalized file paths; a directed edge `a -> b` means
//! file `a` contains an import resolving to file `b`. Edges are deduplicated
//! per (from, to) pair, and node iteration follows insertion order, which
//! makes downstream cycle detection deterministic for a fixed scan.

use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// A directed graph of file-to-file import relationships.
///
/// Built fresh per analysis run and handed to the cycle detector and
/// exporters as an effectively-immutable value; none of the consumers
/// mutate it.
///
/// # Example
///
/// ```rust
/// use std::path::Path;
/// use cyclescope::graph::ImportGraph;
///
/// let mut graph = ImportGraph::new();
/// graph.add_file(Path::new("/p/a.ts"));
/// graph.add_file(Path::new("/p/b.ts"));
/// graph.add_dependency(Path::new("/p/a.ts"), Path::new("/p/b.ts"));
///
/// assert_eq!(graph.file_count(), 2);
/// assert_eq!(graph.dependency_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImportGraph {
    /// The underlying directed graph
    graph: DiGraph<PathBuf, ()>,
    /// Maps file paths to their node indices for O(1) lookup
    indices: HashMap<PathBuf, NodeIndex>,
}

impl ImportGraph {
    /// Creates a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph with pre-allocated capacity.
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            graph: DiGraph::with_capacity(nodes, edges),
            indices: HashMap::with_capacity(nodes),
        }
    }

    /// Adds a file node, returning its index. Adding an existing file
    /// returns the existing index without modification.
    pub fn add_file(&mut self, path: &Path) -> NodeIndex {
        if let Some(&idx) = self.indices.get(path) {
            return idx;
        }
        let idx = self.graph.add_node(path.to_path_buf());
        self.indices.insert(path.to_path_buf(), idx);
        idx
    }

    /// Adds a dependency edge from `from` to `to`.
    ///
    /// Both files must already be nodes; returns `false` otherwise. Repeated
    /// insertion of the same (from, to) pair keeps a single edge.
    pub fn add_dependency(&mut self, from: &Path, to: &Path) -> bool {
        let Some(&from_idx) = self.indices.get(from) else {
            return false;
        };
        let Some(&to_idx) = self.indices.get(to) else {
            return false;
        };
        self.graph.update_edge(from_idx, to_idx, ());
        true
    }

    /// Checks if a file is a node in the graph.
    pub fn contains(&self, path: &Path) -> bool {
        self.indices.contains_key(path)
    }

    /// Number of file nodes.
    pub fn file_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of deduplicated dependency edges.
    pub fn dependency_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Checks if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// All file paths in insertion order.
    pub fn files(&self) -> impl Iterator<Item = &Path> {
        self.graph.node_indices().map(|idx| self.graph[idx].as_path())
    }

    /// Direct dependencies of a file, sorted lexicographically.
    ///
    /// Returns an empty list for files not in the graph.
    pub fn dependencies_of(&self, path: &Path) -> Vec<&Path> {
        let Some(&idx) = self.indices.get(path) else {
            return Vec::new();
        };
        let mut deps: Vec<&Path> = self
            .graph
            .neighbors(idx)
            .map(|n| self.graph[n].as_path())
            .collect();
        deps.sort_unstable();
        deps
    }

    /// Node indices in insertion order.
    pub(crate) fn node_ids(&self) -> impl Iterator<Item = NodeIndex> {
        self.graph.node_indices()
    }

    /// Path stored at a node.
    pub(crate) fn path_at(&self, idx: NodeIndex) -> &Path {
        self.graph[idx].as_path()
    }

    /// Neighbor indices of a node, sorted ascending (insertion order of the
    /// target files). Petgraph yields neighbors in reverse edge-insertion
    /// order; sorting keeps DFS traversal independent of insertion history.
    pub(crate) fn sorted_neighbors(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        let mut neighbors: Vec<NodeIndex> = self.graph.neighbors(idx).collect();
        neighbors.sort_unstable();
        neighbors
    }
}
