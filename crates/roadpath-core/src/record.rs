//! The edge record handed from the loader to the graph.

use serde::{Deserialize, Serialize};

/// Edge weight and path cost unit.
///
/// Unsigned so a negative weight can never reach the graph.
pub type Weight = u64;

/// One directed, weighted edge as read from the input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeRecord {
    /// Name of the vertex the edge leaves.
    pub source: String,

    /// Name of the vertex the edge enters.
    pub destination: String,

    /// Cost of traversing the edge.
    pub weight: Weight,
}

impl EdgeRecord {
    /// Creates a new edge record.
    pub fn new(source: impl Into<String>, destination: impl Into<String>, weight: Weight) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            weight,
        }
    }
}

impl std::fmt::Display for EdgeRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {} ({})", self.source, self.destination, self.weight)
    }
}
