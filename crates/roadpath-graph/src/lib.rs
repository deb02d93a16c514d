//! Roadpath Graph - Weighted directed graph and shortest paths
//!
//! This crate holds the road graph built from edge records and runs
//! single-source shortest-path queries over it.
//!
//! # Architecture
//!
//! The graph uses petgraph internally with a name index on top. Each
//! vertex carries the state of the most recent shortest-path run
//! (distance, predecessor, finalized flag). A run resets that state
//! first, so repeated queries never see each other's results.
//!
//! # Example
//!
//! ```
//! use roadpath_graph::{GraphBuilder, PathOutcome};
//!
//! let mut builder = GraphBuilder::new();
//! builder.add_edge("A", "B", 1);
//! builder.add_edge("B", "C", 2);
//! builder.add_edge("A", "C", 5);
//! let mut graph = builder.build();
//!
//! graph.compute_shortest_paths("A").unwrap();
//! match graph.reconstruct_path("C") {
//!     PathOutcome::Found(path) => assert_eq!(path.cost, 3),
//!     other => panic!("unexpected outcome: {:?}", other),
//! }
//! ```

mod builder;
mod dijkstra;
mod edge;
mod error;
mod graph;
mod path;
mod report;

pub use builder::GraphBuilder;
pub use dijkstra::RunStats;
pub use edge::Edge;
pub use error::GraphError;
pub use graph::{GraphStats, RoadGraph, Vertex, VertexId};
pub use path::{PathOutcome, ShortestPath};
pub use report::Report;
pub use roadpath_core::Weight;
