//! Route report written to an explicit output sink.

use crate::graph::RoadGraph;
use crate::path::PathOutcome;
use roadpath_core::Weight;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};

/// The answer to one source/destination query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub vertex_count: usize,
    pub source: String,
    pub destination: String,
    pub outcome: PathOutcome,
}

impl Report {
    /// Collects the report from a graph that has already been solved
    /// from `source`.
    pub fn build(graph: &RoadGraph, source: &str, destination: &str) -> Self {
        Self {
            vertex_count: graph.vertex_count(),
            source: source.to_string(),
            destination: destination.to_string(),
            outcome: graph.reconstruct_path(destination),
        }
    }

    /// Total path cost, `None` when there is no path.
    pub fn cost(&self) -> Option<Weight> {
        self.outcome.path().map(|path| path.cost)
    }

    /// Writes the plain-text report, one path vertex per line.
    pub fn write_text<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "There are: {} vertices", self.vertex_count)?;
        writeln!(
            out,
            "The shortest path from {} to {}",
            self.source, self.destination
        )?;

        match &self.outcome {
            PathOutcome::Found(path) => {
                writeln!(out, "It takes: {}", path.cost)?;
                writeln!(out, "Path:")?;
                for name in &path.vertices {
                    writeln!(out, "{}", name)?;
                }
            }
            PathOutcome::Unreachable => {
                writeln!(out, "It takes: unreachable")?;
                writeln!(out, "Path:")?;
                writeln!(out, "(no path)")?;
            }
            PathOutcome::UnknownVertex => {
                writeln!(out, "It takes: unreachable")?;
                writeln!(out, "Path:")?;
                writeln!(out, "(no such vertex: {})", self.destination)?;
            }
        }

        out.flush()
    }

    /// Writes the report as pretty-printed JSON.
    pub fn write_json<W: Write>(&self, out: &mut W) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut *out, self)?;
        writeln!(out)?;
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::GraphBuilder;

    fn solved(source: &str) -> RoadGraph {
        let mut builder = GraphBuilder::new();
        builder
            .add_edge("A", "B", 1)
            .add_edge("B", "C", 2)
            .add_edge("A", "C", 5)
            .add_edge("D", "A", 1);
        let mut graph = builder.build();
        graph.compute_shortest_paths(source).unwrap();
        graph
    }

    fn render(report: &Report) -> String {
        let mut out = Vec::new();
        report.write_text(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_text_report_found() {
        let graph = solved("A");
        let report = Report::build(&graph, "A", "C");
        assert_eq!(report.cost(), Some(3));

        assert_eq!(
            render(&report),
            "There are: 4 vertices\n\
             The shortest path from A to C\n\
             It takes: 3\n\
             Path:\n\
             A\n\
             B\n\
             C\n"
        );
    }

    #[test]
    fn test_text_report_unreachable() {
        let graph = solved("A");
        let report = Report::build(&graph, "A", "D");
        assert_eq!(report.cost(), None);

        let text = render(&report);
        assert!(text.contains("It takes: unreachable\n"));
        assert!(text.ends_with("Path:\n(no path)\n"));
    }

    #[test]
    fn test_text_report_unknown_destination() {
        let graph = solved("A");
        let report = Report::build(&graph, "A", "Q");
        assert_eq!(report.outcome, PathOutcome::UnknownVertex);
        assert!(render(&report).ends_with("(no such vertex: Q)\n"));
    }

    #[test]
    fn test_json_report() {
        let graph = solved("A");
        let report = Report::build(&graph, "A", "C");

        let mut out = Vec::new();
        report.write_json(&mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(value["vertex_count"], 4);
        assert_eq!(value["source"], "A");
        assert_eq!(value["outcome"]["status"], "found");
        assert_eq!(value["outcome"]["cost"], 3);

        let parsed: Report = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed, report);
    }
}
