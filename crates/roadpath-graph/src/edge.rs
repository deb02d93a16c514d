//! Edge type for the road graph.

use roadpath_core::Weight;
use serde::{Deserialize, Serialize};

/// A directed, weighted edge. The endpoints live in the graph structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// Cost of traversing the edge.
    pub weight: Weight,
}

impl Edge {
    /// Creates a new edge.
    pub fn new(weight: Weight) -> Self {
        Self { weight }
    }
}
