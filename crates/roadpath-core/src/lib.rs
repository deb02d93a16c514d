//! Roadpath Core - Edge records and graph description loading
//!
//! This crate turns the line-oriented graph description into a list of
//! weighted edge records. It knows nothing about shortest paths; the
//! graph crate consumes the records it produces.
//!
//! # Input format
//!
//! Each line holds three whitespace-separated tokens:
//!
//! ```text
//! c this line is a comment
//! A B 7
//! B C 2
//! ```
//!
//! A line whose first token is `c` is skipped. Lines that fail to parse
//! are reported and skipped; the rest of the input still loads.
//!
//! # Example
//!
//! ```
//! use roadpath_core::load_edges;
//!
//! let input = "c roads\nA B 1\nB C 2\n";
//! let result = load_edges(input.as_bytes()).unwrap();
//! assert_eq!(result.records.len(), 2);
//! ```

mod error;
mod loader;
mod record;

pub use error::{LoadError, ParseError};
pub use loader::{load_edges, load_file, parse_line, LoadResult, COMMENT_MARKER};
pub use record::{EdgeRecord, Weight};
