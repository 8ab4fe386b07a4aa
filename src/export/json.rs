//! JSON export implementation.
//!
//! Exports the import graph as a pretty-printed JSON adjacency mapping for
//! machine-readable output.

use super::{Exporter, GraphExport};
use std::io::{self, Write};

/// JSON exporter implementation.
pub struct JsonExporter;

impl Exporter for JsonExporter {
    fn export<W: Write>(&self, data: &GraphExport, writer: &mut W) -> io::Result<()> {
        let json = serde_json::to_string_pretty(data)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        writeln!(writer, "{}", json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::tests::sample_graph;

    #[test]
    fn test_json_export_shape() {
        let data = GraphExport::from_graph(&sample_graph());
        let mut output = Vec::new();

        JsonExporter.export(&data, &mut output).unwrap();

        let json_str = String::from_utf8(output).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json_str).unwrap();

        assert_eq!(parsed["summary"]["total_files"], 3);
        assert_eq!(parsed["summary"]["total_dependencies"], 2);
        assert_eq!(parsed["graph"]["/p/a.ts"][0], "/p/b.ts");
        assert_eq!(parsed["graph"]["/p/c.ts"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_json_round_trip() {
        let data = GraphExport::from_graph(&sample_graph());
        let mut output = Vec::new();

        JsonExporter.export(&data, &mut output).unwrap();

        let json_str = String::from_utf8(output).unwrap();
        let parsed: GraphExport = serde_json::from_str(&json_str).unwrap();
        assert_eq!(parsed, data);
    }
}
