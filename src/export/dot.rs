//! DOT export implementation.
//!
//! Renders the import graph as a `digraph` for graphviz-style diagramming
//! tools. Node identifiers are quoted file paths.

use super::{Exporter, GraphExport};
use std::io::{self, Write};

/// DOT exporter implementation.
pub struct DotExporter;

impl DotExporter {
    /// Escape a path for use inside a quoted DOT identifier.
    fn escape(value: &str) -> String {
        value.replace('\\', "\\\\").replace('"', "\\\"")
    }
}

impl Exporter for DotExporter {
    fn export<W: Write>(&self, data: &GraphExport, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "digraph imports {{")?;

        // Declare every node so files without edges still appear.
        for file in data.graph.keys() {
            writeln!(writer, "    \"{}\";", Self::escape(file))?;
        }
        for (from, to) in data.edges() {
            writeln!(
                writer,
                "    \"{}\" -> \"{}\";",
                Self::escape(from),
                Self::escape(to)
            )?;
        }

        writeln!(writer, "}}")
    }
}
