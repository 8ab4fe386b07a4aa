//! Analysis pipeline for cyclescope.
//!
//! Wires the stages together: discover files, build the import graph, detect
//! cycles, and shape the results into serializable reports. One call is one
//! analysis run over one snapshot of the tree; no state survives between
//! calls.
//!
//! # Example
//!
//! ```ignore
//! use cyclescope::analysis::detect;
//! use cyclescope::options::ScanOptions;
//!
//! let report = detect(&ScanOptions::new("./src")).unwrap();
//! println!("{} cycles ({} direct)", report.summary.total, report.summary.direct);
//! ```

pub mod advice;
pub mod cycles;

pub use cycles::{find_cycles, Cycle, CycleKind};

use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::discovery::{self, DiscoveryError};
use crate::export::GraphExport;
use crate::graph::{self, ImportGraph};
use crate::options::ScanOptions;

/// Errors from the analysis pipeline.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    /// Required input missing or invalid; raised before any graph work.
    #[error("Invalid scan options: {0}")]
    InvalidOptions(String),

    /// Root directory problems, surfaced from discovery.
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),
}

/// Result type for pipeline operations.
pub type AnalyzeResult<T> = Result<T, AnalyzeError>;

/// Counts of detected cycles by shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CycleSummary {
    pub total: usize,
    pub direct: usize,
    pub indirect: usize,
}

/// One cycle as reported to callers.
#[derive(Debug, Clone, Serialize)]
pub struct CycleRecord {
    #[serde(rename = "type")]
    pub kind: CycleKind,
    pub description: String,
    pub files: Vec<PathBuf>,
}

/// Structured result of a detection run.
#[derive(Debug, Clone, Serialize)]
pub struct CycleReport {
    pub summary: CycleSummary,
    pub cycles: Vec<CycleRecord>,
}

impl CycleReport {
    /// Shapes raw cycles into the report form.
    pub fn new(cycles: Vec<Cycle>) -> Self {
        let direct = cycles.iter().filter(|c| c.kind == CycleKind::Direct).count();
        let indirect = cycles.len() - direct;
        let records = cycles
            .into_iter()
            .map(|cycle| CycleRecord {
                kind: cycle.kind,
                description: cycle.describe(),
                files: cycle.files,
            })
            .collect();

        Self {
            summary: CycleSummary {
                total: direct + indirect,
                direct,
                indirect,
            },
            cycles: records,
        }
    }
}

/// Detects circular dependencies under `options.root`.
///
/// An empty cycle list is success, not an error.
pub fn detect(options: &ScanOptions) -> AnalyzeResult<CycleReport> {
    let graph = build_graph(options)?;
    let cycles = find_cycles(&graph);
    info!(cycles = cycles.len(), "cycle detection finished");
    Ok(CycleReport::new(cycles))
}

/// Detects cycles and returns remediation advice for each.
pub fn suggest_fixes(options: &ScanOptions) -> AnalyzeResult<Vec<String>> {
    let graph = build_graph(options)?;
    let cycles = find_cycles(&graph);
    Ok(advice::suggest_fixes(&cycles))
}

/// Builds and exports the import graph without running cycle detection.
pub fn export_graph(options: &ScanOptions) -> AnalyzeResult<GraphExport> {
    let graph = build_graph(options)?;
    Ok(GraphExport::from_graph(&graph))
}

/// Shared front half of the pipeline: validate, discover, build.
fn build_graph(options: &ScanOptions) -> AnalyzeResult<ImportGraph> {
    validate(options)?;
    let files = discovery::discover_files(options)?;
    info!(files = files.len(), root = %options.root.display(), "scan started");
    Ok(graph::build(&files))
}

fn validate(options: &ScanOptions) -> AnalyzeResult<()> {
    if options.root.as_os_str().is_empty() {
        return Err(AnalyzeError::InvalidOptions(
            "no directory specified".to_string(),
        ));
    }
    if options.extensions.is_empty() {
        return Err(AnalyzeError::InvalidOptions(
            "extension filter is empty".to_string(),
        ));
    }
    Ok(())
}
