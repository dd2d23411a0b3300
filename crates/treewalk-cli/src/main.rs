//! `treewalk` CLI: render and inspect JSON documents through the navigator.
//!
//! ## Usage
//!
//! ```sh
//! # Compact JSON (stdin → stdout); null-valued members are dropped
//! echo '{"a": 1, "b": null}' | treewalk compact
//!
//! # Pretty-print a file with 4-space indentation
//! treewalk pretty --indent 4 -i data.json -o data.pretty.json
//!
//! # Show tree statistics, as JSON
//! treewalk stats --json -i data.json
//!
//! # Refuse documents nested deeper than 64 containers
//! treewalk --max-depth 64 compact -i data.json
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Read};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use treewalk_core::{Format, Navigator, TreeStats, Value, DEFAULT_MAX_DEPTH};

/// Highest `--max-depth` accepted. Parsing and conversion recurse once per
/// container, so the flag is capped to keep that recursion on the main
/// thread's stack.
const MAX_DEPTH_CAP: u64 = 1024;

#[derive(Parser)]
#[command(
    name = "treewalk",
    version,
    about = "Render and inspect JSON documents with the treewalk navigator"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Maximum container nesting depth, enforced while parsing and traversing
    /// (at most 1024)
    #[arg(
        long,
        global = true,
        default_value_t = DEFAULT_MAX_DEPTH,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(0..=MAX_DEPTH_CAP)
    )]
    max_depth: usize,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the document as compact JSON
    Compact {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Write the document as indented JSON
    Pretty {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Spaces per nesting level
        #[arg(long, default_value_t = 2)]
        indent: usize,
    },
    /// Show node counts and nesting depth
    Stats {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Print the statistics as a JSON object
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let navigator = Navigator::with_max_depth(cli.max_depth);
    debug!(max_depth = cli.max_depth, "navigator configured");

    match cli.command {
        Commands::Compact { input, output } => {
            let value = read_document(input.as_deref(), cli.max_depth)?;
            let text = treewalk_core::render(&value, Format::Compact, &navigator)
                .context("Failed to render compact JSON")?;
            write_output(output.as_deref(), &text)?;
        }
        Commands::Pretty {
            input,
            output,
            indent,
        } => {
            let value = read_document(input.as_deref(), cli.max_depth)?;
            let text = treewalk_core::render(&value, Format::Pretty { indent }, &navigator)
                .context("Failed to render pretty JSON")?;
            write_output(output.as_deref(), &text)?;
        }
        Commands::Stats { input, json } => {
            let value = read_document(input.as_deref(), cli.max_depth)?;
            let stats = TreeStats::collect(&value, &navigator)
                .context("Failed to collect tree statistics")?;
            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("Objects:              {}", stats.objects);
                println!("Arrays:               {}", stats.arrays);
                println!("Primitives:           {}", stats.primitives);
                println!("Nulls:                {}", stats.nulls);
                println!("Skipped null members: {}", stats.skipped_null_members);
                println!("Max depth:            {}", stats.max_depth);
            }
        }
    }

    Ok(())
}

/// Log to stderr so rendered output on stdout stays clean. `RUST_LOG`
/// takes precedence over `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn read_document(path: Option<&str>, max_depth: usize) -> Result<Value> {
    let json = read_input(path)?;
    let value = Value::from_json_str_with_depth(&json, max_depth)
        .context("Failed to parse input as JSON")?;
    info!(kind = %value.kind(), bytes = json.len(), "document loaded");
    Ok(value)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
