//! Core graph data structure.
//!
//! The RoadGraph wraps petgraph and adds a name index so vertices can be
//! addressed by the identifiers used in the input.

use crate::edge::Edge;
use petgraph::graph::{DiGraph, NodeIndex};
use roadpath_core::Weight;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Unique identifier for a vertex in the graph.
pub type VertexId = NodeIndex;

/// Distance sentinel for vertices the current run has not reached.
pub(crate) const INFINITY: Weight = Weight::MAX;

/// A named vertex plus its state from the latest shortest-path run.
#[derive(Debug, Clone)]
pub struct Vertex {
    name: String,
    pub(crate) distance: Weight,
    pub(crate) predecessor: Option<VertexId>,
    pub(crate) finalized: bool,
}

impl Vertex {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            distance: INFINITY,
            predecessor: None,
            finalized: false,
        }
    }

    pub(crate) fn reset(&mut self) {
        self.distance = INFINITY;
        self.predecessor = None;
        self.finalized = false;
    }

    /// The vertex identifier from the input.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Best known distance from the last run's source, `None` if unreached.
    pub fn distance(&self) -> Option<Weight> {
        (self.distance != INFINITY).then_some(self.distance)
    }

    /// The previous vertex on the shortest path, if any.
    pub fn predecessor(&self) -> Option<VertexId> {
        self.predecessor
    }

    /// Whether the last run committed this vertex's distance.
    pub fn is_finalized(&self) -> bool {
        self.finalized
    }
}

/// The road graph.
///
/// Owns every vertex. Vertices are created on first reference and never
/// removed; parallel edges are kept as-is.
#[derive(Debug)]
pub struct RoadGraph {
    /// The underlying petgraph graph.
    pub(crate) graph: DiGraph<Vertex, Edge>,

    /// Maps vertex names to graph node indexes.
    name_index: HashMap<String, VertexId>,

    /// Start vertex of the latest run.
    pub(crate) source: Option<VertexId>,
}

impl Default for RoadGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl RoadGraph {
    /// Creates a new empty graph.
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            name_index: HashMap::new(),
            source: None,
        }
    }

    /// Returns the vertex with this name, creating it if needed.
    pub fn get_or_create_vertex(&mut self, name: &str) -> VertexId {
        if let Some(&index) = self.name_index.get(name) {
            return index;
        }

        let index = self.graph.add_node(Vertex::new(name));
        self.name_index.insert(name.to_string(), index);
        index
    }

    /// Adds a directed edge, creating either endpoint if needed.
    pub fn add_edge(&mut self, source: &str, destination: &str, weight: Weight) {
        let from = self.get_or_create_vertex(source);
        let to = self.get_or_create_vertex(destination);
        self.graph.add_edge(from, to, Edge::new(weight));
    }

    /// Clears per-run state on every vertex.
    pub fn reset_all(&mut self) {
        for vertex in self.graph.node_weights_mut() {
            vertex.reset();
        }
        self.source = None;
    }

    /// Returns the number of distinct vertices.
    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of edges, duplicates included.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Gets the index for a vertex name.
    pub fn index_of(&self, name: &str) -> Option<VertexId> {
        self.name_index.get(name).copied()
    }

    /// Gets a vertex by name.
    pub fn vertex(&self, name: &str) -> Option<&Vertex> {
        let index = self.name_index.get(name)?;
        self.graph.node_weight(*index)
    }

    /// Gets a vertex by its graph index.
    pub fn get(&self, index: VertexId) -> Option<&Vertex> {
        self.graph.node_weight(index)
    }

    /// Iterates over all vertices.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.graph.node_weights()
    }

    /// Outgoing edges of a vertex as `(target, weight)` pairs.
    #[cfg(test)]
    pub(crate) fn neighbors(&self, index: VertexId) -> impl Iterator<Item = (VertexId, Weight)> + '_ {
        use petgraph::visit::EdgeRef;

        self.graph
            .edges(index)
            .map(|edge_ref| (edge_ref.target(), edge_ref.weight().weight))
    }

    /// The start vertex of the latest run, if one has completed.
    #[cfg(test)]
    pub(crate) fn source(&self) -> Option<&Vertex> {
        self.source.and_then(|index| self.get(index))
    }
}

/// Graph statistics for the stats command.
#[derive(Debug, Serialize, Deserialize)]
pub struct GraphStats {
    pub vertex_count: usize,
    pub edge_count: usize,
    pub total_weight: Weight,
}

impl RoadGraph {
    /// Returns graph statistics.
    pub fn stats(&self) -> GraphStats {
        GraphStats {
            vertex_count: self.vertex_count(),
            edge_count: self.edge_count(),
            total_weight: self
                .graph
                .edge_weights()
                .fold(0, |sum: Weight, edge| sum.saturating_add(edge.weight)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_or_create_is_idempotent() {
        let mut graph = RoadGraph::new();
        let a = graph.get_or_create_vertex("A");
        let again = graph.get_or_create_vertex("A");
        let b = graph.get_or_create_vertex("B");

        assert_eq!(a, again);
        assert_ne!(a, b);
        assert_eq!(graph.vertex_count(), 2);
    }

    #[test]
    fn test_new_vertex_has_default_state() {
        let mut graph = RoadGraph::new();
        graph.get_or_create_vertex("lonely");

        let vertex = graph.vertex("lonely").unwrap();
        assert_eq!(vertex.name(), "lonely");
        assert_eq!(vertex.distance(), None);
        assert_eq!(vertex.predecessor(), None);
        assert!(!vertex.is_finalized());
    }

    #[test]
    fn test_add_edge_creates_endpoints() {
        let mut graph = RoadGraph::new();
        graph.add_edge("A", "B", 4);

        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_count(), 1);

        let a = graph.index_of("A").unwrap();
        let b = graph.index_of("B").unwrap();
        let edges: Vec<_> = graph.neighbors(a).collect();
        assert_eq!(edges, vec![(b, 4)]);
        assert_eq!(graph.neighbors(b).count(), 0);
    }

    #[test]
    fn test_duplicate_edges_are_retained() {
        let mut graph = RoadGraph::new();
        graph.add_edge("A", "B", 4);
        graph.add_edge("A", "B", 4);
        graph.add_edge("A", "B", 9);

        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_count(), 3);

        let a = graph.index_of("A").unwrap();
        let mut weights: Vec<Weight> = graph.neighbors(a).map(|(_, w)| w).collect();
        weights.sort();
        assert_eq!(weights, vec![4, 4, 9]);
    }

    #[test]
    fn test_reset_all_clears_run_state() {
        let mut graph = RoadGraph::new();
        graph.add_edge("A", "B", 1);
        let a = graph.index_of("A").unwrap();
        graph.graph[a].distance = 0;
        graph.graph[a].finalized = true;
        graph.graph[a].predecessor = Some(a);
        graph.source = Some(a);

        graph.reset_all();

        let vertex = graph.vertex("A").unwrap();
        assert_eq!(vertex.distance(), None);
        assert_eq!(vertex.predecessor(), None);
        assert!(!vertex.is_finalized());
        assert!(graph.source().is_none());
    }

    #[test]
    fn test_stats() {
        let mut graph = RoadGraph::new();
        graph.add_edge("A", "B", 1);
        graph.add_edge("B", "C", 2);
        graph.add_edge("B", "C", 2);

        let stats = graph.stats();
        assert_eq!(stats.vertex_count, 3);
        assert_eq!(stats.edge_count, 3);
        assert_eq!(stats.total_weight, 5);
    }
}
