//! Graph builder for constructing the road graph from edge records.

use crate::graph::RoadGraph;
use roadpath_core::{EdgeRecord, Weight};
use tracing::debug;

/// Builds a RoadGraph from loaded edge records.
///
/// Records are applied in order; endpoints are created on first sight.
pub struct GraphBuilder {
    graph: RoadGraph,
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self {
            graph: RoadGraph::new(),
        }
    }

    /// Adds a single edge.
    pub fn add_edge(&mut self, source: &str, destination: &str, weight: Weight) -> &mut Self {
        self.graph.add_edge(source, destination, weight);
        self
    }

    /// Adds every record from a load.
    pub fn add_records<I>(&mut self, records: I) -> &mut Self
    where
        I: IntoIterator<Item = EdgeRecord>,
    {
        for record in records {
            self.graph
                .add_edge(&record.source, &record.destination, record.weight);
        }
        self
    }

    /// Finishes building and returns the graph.
    pub fn build(self) -> RoadGraph {
        debug!(
            "Built graph with {} vertices and {} edges",
            self.graph.vertex_count(),
            self.graph.edge_count()
        );
        self.graph
    }
}
