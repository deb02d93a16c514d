//! Single-source shortest paths.
//!
//! Classic Dijkstra over a binary heap without decrease-key: an improved
//! distance pushes a fresh candidate, and candidates for vertices that
//! are already finalized are dropped when popped.

use crate::error::GraphError;
use crate::graph::{RoadGraph, VertexId};
use petgraph::Direction;
use roadpath_core::Weight;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::Instant;
use tracing::debug;

/// A tentative distance queued for a vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Candidate {
    distance: Weight,
    vertex: VertexId,
}

// BinaryHeap is a max-heap; reverse so the smallest distance pops first.
impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .cmp(&self.distance)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Counters from one shortest-path run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    /// Vertices whose distance was committed.
    pub finalized: usize,
    /// Candidates pushed onto the queue.
    pub pushes: usize,
    /// Candidates discarded because their vertex was already finalized.
    pub stale_pops: usize,
    /// Successful edge relaxations.
    pub relaxations: usize,
    /// Time taken in milliseconds.
    pub duration_ms: u64,
}

impl RoadGraph {
    /// Computes shortest distances from `start` to every reachable vertex.
    ///
    /// Results are left on the vertices: distance, predecessor and the
    /// finalized flag. Any previous run's state is cleared first.
    ///
    /// # Errors
    /// `GraphError::VertexNotFound` if `start` is not in the graph. The
    /// graph is left untouched in that case.
    pub fn compute_shortest_paths(&mut self, start: &str) -> Result<RunStats, GraphError> {
        let source = self
            .index_of(start)
            .ok_or_else(|| GraphError::VertexNotFound(start.to_string()))?;

        let timer = Instant::now();
        self.reset_all();
        self.source = Some(source);

        let total = self.vertex_count();
        let mut stats = RunStats::default();
        let mut queue = BinaryHeap::new();

        self.graph[source].distance = 0;
        queue.push(Candidate {
            distance: 0,
            vertex: source,
        });
        stats.pushes += 1;

        while stats.finalized < total {
            let Some(Candidate { vertex, .. }) = queue.pop() else {
                break;
            };

            if self.graph[vertex].finalized {
                stats.stale_pops += 1;
                continue;
            }
            self.graph[vertex].finalized = true;
            stats.finalized += 1;

            let base = self.graph[vertex].distance;
            let mut edges = self
                .graph
                .neighbors_directed(vertex, Direction::Outgoing)
                .detach();

            while let Some((edge, neighbor)) = edges.next(&self.graph) {
                let distance = base.saturating_add(self.graph[edge].weight);
                let target = &mut self.graph[neighbor];

                if target.distance > distance {
                    target.distance = distance;
                    target.predecessor = Some(vertex);
                    queue.push(Candidate {
                        distance,
                        vertex: neighbor,
                    });
                    stats.relaxations += 1;
                    stats.pushes += 1;
                }
            }
        }

        stats.duration_ms = timer.elapsed().as_millis() as u64;

        debug!(
            "Shortest paths from {}: {}/{} vertices finalized, {} pushes, {} stale",
            start, stats.finalized, total, stats.pushes, stats.stale_pops
        );

        Ok(stats)
    }
}
