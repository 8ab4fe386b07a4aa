//! Cycle detection over the import graph.
//!
//! Depth-first search with three-coloring: an unvisited node is white, a node
//! on the current DFS path is gray (tracked by `on_stack`), and a fully
//! explored node is black (tracked by `visited`). A back-edge into a gray
//! node closes a cycle; the cycle is the path slice from that node's first
//! occurrence through the current node.
//!
//! The walk uses an explicit work stack rather than recursion, so deep import
//! chains in large real-world trees cannot overflow the call stack. Cycles
//! that are rotations of one another (the same ring entered at a different
//! file) are deduplicated through a canonical rotation key.

use std::collections::HashSet;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::graph::ImportGraph;

/// Shape of a detected cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CycleKind {
    /// Two files importing each other (a self-import is the degenerate case).
    Direct,
    /// A chain of three or more files closing on itself.
    Indirect,
}

impl std::fmt::Display for CycleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Direct => write!(f, "direct"),
            Self::Indirect => write!(f, "indirect"),
        }
    }
}

/// A circular dependency: the distinct files in path order, with the last
/// file importing the first again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cycle {
    /// Files in the cycle, in import order.
    pub files: Vec<PathBuf>,
    /// Direct or indirect, by distinct file count.
    pub kind: CycleKind,
}

impl Cycle {
    /// Builds a cycle from a DFS path slice, classifying it by length.
    fn from_path(files: Vec<PathBuf>) -> Self {
        let kind = if files.len() <= 2 {
            CycleKind::Direct
        } else {
            CycleKind::Indirect
        };
        Self { files, kind }
    }

    /// Arrow-joined rendering of the cycle, closing back on the first file.
    ///
    /// This is a derived view; consumers that need structure use `files`.
    pub fn describe(&self) -> String {
        let mut parts: Vec<String> = self.files.iter().map(|f| f.display().to_string()).collect();
        if let Some(first) = parts.first().cloned() {
            parts.push(first);
        }
        parts.join(" -> ")
    }

    /// Number of distinct files in the cycle.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// True if the cycle has no files.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Finds all cycles in the graph.
///
/// The graph is read-only; the result is an independent list. Cycles are
/// reported in DFS visitation order over node insertion order, which is
/// deterministic for a fixed graph.
pub fn find_cycles(graph: &ImportGraph) -> Vec<Cycle> {
    let node_count = graph.file_count();
    // Adjacency computed once; DFS frames revisit a node once per neighbor.
    let adjacency: Vec<_> = graph.node_ids().map(|n| graph.sorted_neighbors(n)).collect();
    let mut visited = vec![false; node_count];
    let mut on_stack = vec![false; node_count];
    let mut cycles = Vec::new();
    let mut seen = HashSet::new();

    for root in graph.node_ids() {
        if visited[root.index()] {
            continue;
        }

        // Explicit DFS: each frame is (node, next neighbor position).
        let mut work = vec![(root, 0usize)];
        let mut path = vec![root];
        visited[root.index()] = true;
        on_stack[root.index()] = true;

        while let Some((node, pos)) = work.pop() {
            let neighbors = &adjacency[node.index()];
            if pos < neighbors.len() {
                work.push((node, pos + 1));
                let next = neighbors[pos];

                if !visited[next.index()] {
                    visited[next.index()] = true;
                    on_stack[next.index()] = true;
                    path.push(next);
                    work.push((next, 0));
                } else if on_stack[next.index()] {
                    // Back-edge into the gray path: the cycle runs from the
                    // first occurrence of `next` through the current node.
                    if let Some(start) = path.iter().position(|&n| n == next) {
                        let files: Vec<PathBuf> = path[start..]
                            .iter()
                            .map(|&n| graph.path_at(n).to_path_buf())
                            .collect();
                        if seen.insert(canonical_rotation(&files)) {
                            cycles.push(Cycle::from_path(files));
                        }
                    }
                }
            } else {
                on_stack[node.index()] = false;
                path.pop();
            }
        }
    }

    cycles
}

/// Rotates a cycle so its lexicographically smallest file comes first,
/// giving rotationally-equivalent sightings of the same ring one key.
fn canonical_rotation(files: &[PathBuf]) -> Vec<PathBuf> {
    let Some(min_pos) = files
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| a.cmp(b))
        .map(|(i, _)| i)
    else {
        return Vec::new();
    };

    let mut rotated = Vec::with_capacity(files.len());
    rotated.extend_from_slice(&files[min_pos..]);
    rotated.extend_from_slice(&files[..min_pos]);
    rotated
}
