//! CLI command implementations.

use colored::Colorize;
use roadpath_core::{load_file, LoadResult};
use roadpath_graph::{GraphBuilder, PathOutcome, Report, RoadGraph};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::info;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Output path that selects stdout.
const STDOUT_MARKER: &str = "-";

/// Find the shortest path and write the report.
pub fn route(
    input: &Path,
    source: &str,
    destination: &str,
    output: &Path,
    json: bool,
) -> Result<()> {
    let loaded = load_file(input)?;
    warn_skipped(&loaded);

    let mut graph = build_graph(loaded);
    let run = graph.compute_shortest_paths(source)?;
    info!(
        "Solved from {} in {}ms ({} vertices finalized)",
        source, run.duration_ms, run.finalized
    );

    let report = Report::build(&graph, source, destination);

    let mut sink = open_sink(output)?;
    if json {
        report.write_json(&mut sink)?;
    } else {
        report.write_text(&mut sink)?;
    }

    if output != Path::new(STDOUT_MARKER) {
        match &report.outcome {
            PathOutcome::Found(path) => eprintln!(
                "{} {} → {}: cost {} over {} hops, written to {}",
                "✓".green(),
                source.cyan(),
                destination.cyan(),
                path.cost,
                path.hops(),
                output.display()
            ),
            _ => eprintln!(
                "{} No path from {} to {}, written to {}",
                "⚠".yellow(),
                source.cyan(),
                destination.cyan(),
                output.display()
            ),
        }
    }

    Ok(())
}

/// Show graph statistics.
pub fn stats(input: &Path, json: bool) -> Result<()> {
    let loaded = load_file(input)?;
    let lines_read = loaded.lines_read;
    let skipped = loaded.skipped.len();
    let duration_ms = loaded.duration_ms;
    warn_skipped(&loaded);

    let graph = build_graph(loaded);
    let stats = graph.stats();

    if json {
        let value = serde_json::json!({
            "lines": lines_read,
            "skipped": skipped,
            "stats": stats,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("{}", "Roadpath Graph".cyan().bold());
    println!();
    println!("  {} {}", "Lines:".dimmed(), lines_read);
    println!("  {} {}", "Skipped:".dimmed(), skipped);
    println!("  {} {}", "Vertices:".dimmed(), stats.vertex_count);
    println!("  {} {}", "Edges:".dimmed(), stats.edge_count);
    println!("  {} {}", "Total weight:".dimmed(), stats.total_weight);
    println!("  {} {}ms", "Load time:".dimmed(), duration_ms);

    Ok(())
}

fn build_graph(loaded: LoadResult) -> RoadGraph {
    let mut builder = GraphBuilder::new();
    builder.add_records(loaded.records);
    builder.build()
}

fn warn_skipped(loaded: &LoadResult) {
    if loaded.skipped.is_empty() {
        return;
    }

    eprintln!("{} {} lines skipped:", "⚠".yellow(), loaded.skipped.len());
    for error in loaded.skipped.iter().take(5) {
        eprintln!("  {}", error.to_string().red());
    }
    if loaded.skipped.len() > 5 {
        eprintln!("  ... and {} more", loaded.skipped.len() - 5);
    }
}

fn open_sink(output: &Path) -> Result<Box<dyn Write>> {
    if output == Path::new(STDOUT_MARKER) {
        return Ok(Box::new(io::stdout().lock()));
    }
    let file = File::create(output)?;
    Ok(Box::new(BufWriter::new(file)))
}
