//! Roadpath CLI - Command-line interface for Roadpath
//!
//! Loads a road graph description, finds the cheapest route between two
//! vertices and writes the result to a file or stdout.

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "roadpath")]
#[command(author = "Roadpath Contributors")]
#[command(version)]
#[command(about = "Shortest road paths over weighted directed graphs", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the shortest path between two vertices
    Route {
        /// Graph description file
        input: PathBuf,

        /// Vertex to start from
        source: String,

        /// Vertex to reach
        destination: String,

        /// Where to write the report ("-" for stdout)
        output: PathBuf,

        /// Output as JSON instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// Load a graph description and show statistics
    Stats {
        /// Graph description file
        input: PathBuf,

        /// Output as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();

    let result = match cli.command {
        Commands::Route {
            input,
            source,
            destination,
            output,
            json,
        } => commands::route(&input, &source, &destination, &output, json),
        Commands::Stats { input, json } => commands::stats(&input, json),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}
