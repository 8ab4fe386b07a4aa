//! Export functionality for the import graph.
//!
//! Flattens the internal graph into serializable forms: a JSON adjacency
//! mapping, DOT markup for diagramming tools, and a flat CSV edge list.
//! All exporters are pure serializations with no analysis logic.

pub mod dot;
pub mod edges;
pub mod json;

use std::collections::BTreeMap;
use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::graph::ImportGraph;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// JSON adjacency mapping - machine-readable, full data
    Json,
    /// DOT digraph markup - for graphviz-style diagramming tools
    Dot,
    /// CSV edge list - spreadsheet-friendly
    Edges,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "dot" => Ok(ExportFormat::Dot),
            "edges" | "csv" => Ok(ExportFormat::Edges),
            _ => Err(format!(
                "Unknown export format: '{}'. Valid formats: json, dot, edges",
                s
            )),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Dot => write!(f, "dot"),
            ExportFormat::Edges => write!(f, "edges"),
        }
    }
}

/// Graph size statistics included with every export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSummary {
    pub total_files: usize,
    pub total_dependencies: usize,
}

/// The import graph flattened to a plain adjacency mapping.
///
/// Keys and dependency lists are sorted lexicographically so repeated exports
/// of the same graph are byte-identical, independent of traversal order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphExport {
    pub summary: GraphSummary,
    pub graph: BTreeMap<String, Vec<String>>,
}

impl GraphExport {
    /// Flattens a graph into export form.
    pub fn from_graph(graph: &ImportGraph) -> Self {
        let mut mapping = BTreeMap::new();
        for file in graph.files() {
            let deps: Vec<String> = graph
                .dependencies_of(file)
                .iter()
                .map(|d| d.display().to_string())
                .collect();
            mapping.insert(file.display().to_string(), deps);
        }

        Self {
            summary: GraphSummary {
                total_files: graph.file_count(),
                total_dependencies: graph.dependency_count(),
            },
            graph: mapping,
        }
    }

    /// Iterates all (from, to) edges in sorted order.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.graph.iter().flat_map(|(from, deps)| {
            deps.iter().map(move |to| (from.as_str(), to.as_str()))
        })
    }
}

/// Trait for exporters.
pub trait Exporter {
    /// Export the data to the given writer.
    fn export<W: Write>(&self, data: &GraphExport, writer: &mut W) -> io::Result<()>;
}

/// Export data in the specified format.
pub fn export<W: Write>(
    format: ExportFormat,
    data: &GraphExport,
    writer: &mut W,
) -> io::Result<()> {
    match format {
        ExportFormat::Json => json::JsonExporter.export(data, writer),
        ExportFormat::Dot => dot::DotExporter.export(data, writer),
        ExportFormat::Edges => edges::EdgeListExporter.export(data, writer),
    }
}

/// Export data to a string.
pub fn export_to_string(format: ExportFormat, data: &GraphExport) -> io::Result<String> {
    let mut buffer = Vec::new();
    export(format, data, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
