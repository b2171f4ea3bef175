//! [`Visualizer`] implementations: full-screen charts and JSON export.

use std::io::{self, Write};

use tracing::debug;

use inflammation_core::graph::{GraphData, Visualizer};
use inflammation_core::{InflammationError, Result};

use crate::app::App;

/// Draws every graph as a full-screen chart, one at a time.
pub struct TerminalVisualizer {
    app: App,
}

impl TerminalVisualizer {
    pub fn new(theme_name: &str) -> Self {
        Self {
            app: App::new(theme_name),
        }
    }
}

impl Visualizer for TerminalVisualizer {
    fn visualize(&mut self, graph: &GraphData) -> Result<()> {
        self.app
            .run_chart(graph)
            .map_err(|e| InflammationError::Terminal(e.to_string()))
    }
}

/// Writes every graph as a pretty-printed JSON object followed by a newline.
///
/// Non-finite values are written as `null`.
pub struct JsonVisualizer<W: Write> {
    writer: W,
}

impl JsonVisualizer<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> JsonVisualizer<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Visualizer for JsonVisualizer<W> {
    fn visualize(&mut self, graph: &GraphData) -> Result<()> {
        debug!(title = %graph.title, "writing graph as JSON");
        serde_json::to_writer_pretty(&mut self.writer, graph)
            .map_err(|e| InflammationError::Io(e.into()))?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use inflammation_core::graph::{AVERAGE, MAX, STD_DEV_BY_DAY};
    use serde_json::Value;

    fn parse_all(bytes: &[u8]) -> Vec<Value> {
        serde_json::Deserializer::from_slice(bytes)
            .into_iter::<Value>()
            .collect::<std::result::Result<_, _>>()
            .unwrap()
    }

    #[test]
    fn test_json_visualizer_writes_title_and_series() {
        let mut vis = JsonVisualizer::new(Vec::new());
        let graph = GraphData::new("Daily means across 2 datasets")
            .with_series(STD_DEV_BY_DAY, [0.0, 0.5]);
        vis.visualize(&graph).unwrap();

        let docs = parse_all(&vis.into_inner());
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0]["title"], "Daily means across 2 datasets");
        assert_eq!(docs[0]["series"][0]["name"], "standard deviation by day");
        assert_eq!(docs[0]["series"][0]["values"][1], 0.5);
    }

    #[test]
    fn test_json_visualizer_appends_one_document_per_graph() {
        let mut vis = JsonVisualizer::new(Vec::new());
        vis.visualize(&GraphData::new("a.csv").with_series(AVERAGE, [1.0]))
            .unwrap();
        vis.visualize(&GraphData::new("b.csv").with_series(MAX, [2.0]))
            .unwrap();

        let docs = parse_all(&vis.into_inner());
        let titles: Vec<&str> = docs.iter().filter_map(|d| d["title"].as_str()).collect();
        assert_eq!(titles, vec!["a.csv", "b.csv"]);
    }

    #[test]
    fn test_json_visualizer_preserves_series_order() {
        let mut vis = JsonVisualizer::new(Vec::new());
        let graph = GraphData::new("t")
            .with_series("average", [1.0])
            .with_series("max", [1.0])
            .with_series("min", [1.0]);
        vis.visualize(&graph).unwrap();

        let docs = parse_all(&vis.into_inner());
        let names: Vec<&str> = docs[0]["series"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|s| s["name"].as_str())
            .collect();
        assert_eq!(names, vec!["average", "max", "min"]);
    }

    #[test]
    fn test_json_visualizer_nan_becomes_null() {
        let mut vis = JsonVisualizer::new(Vec::new());
        vis.visualize(&GraphData::new("t").with_series("s", [f64::NAN, 1.0]))
            .unwrap();

        let docs = parse_all(&vis.into_inner());
        assert!(docs[0]["series"][0]["values"][0].is_null());
    }

    struct BrokenWriter;

    impl Write for BrokenWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_json_visualizer_propagates_write_errors() {
        let mut vis = JsonVisualizer::new(BrokenWriter);
        let err = vis
            .visualize(&GraphData::new("t").with_series("s", [1.0]))
            .unwrap_err();
        assert!(matches!(err, InflammationError::Io(_)));
    }

    #[test]
    fn test_terminal_visualizer_uses_theme() {
        let vis = TerminalVisualizer::new("classic");
        assert!(!vis.app.should_quit);
    }
}
