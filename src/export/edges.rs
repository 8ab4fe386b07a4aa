//! CSV edge-list export implementation.
//!
//! Exports the import graph as flat `from,to` rows for spreadsheet use.

use super::{Exporter, GraphExport};
use std::io::{self, Write};

/// Edge-list exporter implementation.
pub struct EdgeListExporter;

impl EdgeListExporter {
    /// Escape a field value for CSV format.
    ///
    /// Wraps the value in quotes if it contains commas, quotes, or newlines.
    fn escape_field(value: &str) -> String {
        if value.contains(',') || value.contains('"') || value.contains('\n') {
            format!("\"{}\"", value.replace('"', "\"\""))
        } else {
            value.to_string()
        }
    }
}

impl Exporter for EdgeListExporter {
    fn export<W: Write>(&self, data: &GraphExport, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "from,to")?;
        for (from, to) in data.edges() {
            writeln!(
                writer,
                "{},{}",
                Self::escape_field(from),
                Self::escape_field(to)
            )?;
        }
        Ok(())
    }
}
