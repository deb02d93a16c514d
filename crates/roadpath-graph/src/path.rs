//! Path reconstruction from the predecessor links of the latest run.

use crate::graph::RoadGraph;
use roadpath_core::Weight;
use serde::{Deserialize, Serialize};

/// A shortest path, source first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortestPath {
    /// Vertex names from source to destination inclusive.
    pub vertices: Vec<String>,
    /// Sum of edge weights along the path.
    pub cost: Weight,
}

impl ShortestPath {
    /// Number of edges on the path.
    pub fn hops(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }
}

/// Result of asking for the path to a destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PathOutcome {
    Found(ShortestPath),
    /// The destination exists but the last run never reached it.
    Unreachable,
    /// No vertex with that name was ever referenced.
    UnknownVertex,
}

impl PathOutcome {
    /// Returns the path when one was found.
    pub fn path(&self) -> Option<&ShortestPath> {
        match self {
            PathOutcome::Found(path) => Some(path),
            _ => None,
        }
    }
}

impl RoadGraph {
    /// Rebuilds the shortest path to `destination` from the latest run.
    ///
    /// Walks predecessor links back to the source, then reverses. Before
    /// any run every vertex is unreachable.
    pub fn reconstruct_path(&self, destination: &str) -> PathOutcome {
        let Some(index) = self.index_of(destination) else {
            return PathOutcome::UnknownVertex;
        };
        let Some(cost) = self.graph[index].distance() else {
            return PathOutcome::Unreachable;
        };

        let mut vertices = Vec::new();
        let mut current = Some(index);
        while let Some(index) = current {
            let vertex = &self.graph[index];
            vertices.push(vertex.name().to_string());
            current = vertex.predecessor();
        }
        vertices.reverse();

        PathOutcome::Found(ShortestPath { vertices, cost })
    }
}
