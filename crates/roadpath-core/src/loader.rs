//! Line-oriented loader for graph descriptions.
//!
//! Parsing is per-line: a bad line (including one that is not valid
//! UTF-8) is logged and skipped, and loading carries on. Only a failure
//! to read the input aborts.

use crate::error::{LoadError, ParseError};
use crate::record::{EdgeRecord, Weight};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;
use tracing::{info, trace, warn};

/// First token that marks a line as a comment.
pub const COMMENT_MARKER: &str = "c";

/// Output of a load: the usable edges plus every line that was skipped.
#[derive(Debug, Default)]
pub struct LoadResult {
    /// Edge records in input order.
    pub records: Vec<EdgeRecord>,
    /// Lines that could not be turned into an edge.
    pub skipped: Vec<ParseError>,
    /// Total lines read, comments and blanks included.
    pub lines_read: usize,
    /// Time taken in milliseconds.
    pub duration_ms: u64,
}

/// Parses a single input line.
///
/// Returns `Ok(None)` for blank lines and comments. Tokens after the
/// weight are ignored.
pub fn parse_line(line: usize, text: &str) -> Result<Option<EdgeRecord>, ParseError> {
    let mut tokens = text.split_whitespace();

    let source = match tokens.next() {
        Some(COMMENT_MARKER) | None => return Ok(None),
        Some(token) => token,
    };
    let destination = tokens.next().ok_or(ParseError::MissingToken {
        line,
        field: "destination",
    })?;
    let token = tokens.next().ok_or(ParseError::MissingToken {
        line,
        field: "weight",
    })?;

    Ok(Some(EdgeRecord::new(source, destination, parse_weight(line, token)?)))
}

fn parse_weight(line: usize, token: &str) -> Result<Weight, ParseError> {
    if let Ok(weight) = token.parse::<Weight>() {
        return Ok(weight);
    }
    match token.parse::<i64>() {
        Ok(weight) if weight < 0 => Err(ParseError::NegativeWeight { line, weight }),
        // "-0"
        Ok(weight) => Ok(weight.unsigned_abs()),
        Err(_) => Err(ParseError::InvalidWeight {
            line,
            token: token.to_string(),
        }),
    }
}

/// Loads every edge record from a reader.
pub fn load_edges<R: BufRead>(reader: R) -> Result<LoadResult, LoadError> {
    let start = Instant::now();
    let mut result = LoadResult::default();

    for (index, bytes) in reader.split(b'\n').enumerate() {
        let mut bytes = bytes?;
        let line = index + 1;
        result.lines_read += 1;

        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }

        let parsed = match String::from_utf8(bytes) {
            Ok(text) => parse_line(line, &text),
            Err(_) => Err(ParseError::InvalidEncoding { line }),
        };

        match parsed {
            Ok(Some(record)) => {
                trace!("line {}: {}", line, record);
                result.records.push(record);
            }
            Ok(None) => {}
            Err(e) => {
                warn!("Skipping input {}", e);
                result.skipped.push(e);
            }
        }
    }

    result.duration_ms = start.elapsed().as_millis() as u64;

    info!(
        "Loaded {} edges from {} lines ({} skipped)",
        result.records.len(),
        result.lines_read,
        result.skipped.len()
    );

    Ok(result)
}

/// Opens a file and loads its edge records.
pub fn load_file(path: impl AsRef<Path>) -> Result<LoadResult, LoadError> {
    let file = File::open(path.as_ref())?;
    load_edges(BufReader::new(file))
}
