//! Trace replay driver for the tag store.
//!
//! This binary replays write traces against a single store instance. It
//! performs:
//! 1. **Replay:** JSON-lines records drive lookups, victim selection, and
//!    fills.
//! 2. **Configuration:** Store geometry loads from a JSON file or falls
//!    back to defaults.
//! 3. **Reporting:** The statistics report and transition histogram print
//!    once the trace is exhausted.

use std::fs;
use std::io::{BufRead, BufReader};
use std::process;

use clap::{Parser, Subcommand};
use serde::Deserialize;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use nvtags_core::{Address, TagStore, TagStoreConfig, TagStoreError, WriteRequest};

#[derive(Parser, Debug)]
#[command(
    name = "nvtags",
    author,
    version,
    about = "Wear-aware cache tag store trace replay",
    long_about = "Replay a JSON-lines write trace through a wear-aware set-associative tag store.\n\nEach record is one write: {\"addr\": 64, \"data\": [255, 0, ...], \"secure\": false}.\nData must cover the 8-byte encode window at the start of the line.\n\nExamples:\n  nvtags run --trace traces/mixed.jsonl\n  nvtags run --trace traces/mixed.jsonl --config geometry.json\n  nvtags run --trace traces/l1.jsonl --top-level"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Replay a write trace and print the final report.
    Run {
        /// JSON-lines trace file, one write record per line.
        #[arg(short, long)]
        trace: String,

        /// Store geometry as JSON; built-in defaults apply when omitted.
        #[arg(short, long)]
        config: Option<String>,

        /// Treat the store as a top level: victims come from pure recency
        /// and no wear or encoding state moves.
        #[arg(long)]
        top_level: bool,
    },
}

/// One write record of a trace file.
#[derive(Debug, Deserialize)]
struct TraceRecord {
    /// Address the write targets.
    addr: u64,
    /// Payload bytes; must cover the encode window.
    data: Vec<u8>,
    /// Security domain of the write; insecure when absent.
    #[serde(default)]
    secure: bool,
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Run {
            trace,
            config,
            top_level,
        } => cmd_run(&trace, config.as_deref(), top_level),
    }
}

/// Loads the store configuration from a JSON file, or the defaults.
fn load_config(path: Option<&str>) -> TagStoreConfig {
    let Some(path) = path else {
        return TagStoreConfig::default();
    };
    let text = fs::read_to_string(path).unwrap_or_else(|err| {
        eprintln!("Error reading config {path}: {err}");
        process::exit(1);
    });
    serde_json::from_str(&text).unwrap_or_else(|err| {
        eprintln!("Error parsing config {path}: {err}");
        process::exit(1);
    })
}

/// Replays the trace: hits promote their block, misses fill a victim.
///
/// Prints the statistics report and transition histogram at the end. Exits
/// with code 1 on unreadable input or a malformed record.
fn cmd_run(trace_path: &str, config_path: Option<&str>, top_level: bool) {
    let config = load_config(config_path);
    let mut store = TagStore::new(&config).unwrap_or_else(|err| {
        eprintln!("Error building store: {err}");
        process::exit(1);
    });

    println!(
        "[*] Replay: {} sets x {} ways, {}-byte lines, wear threshold {}",
        config.sets, config.ways, config.line_bytes, config.wear_threshold
    );
    if top_level {
        println!("    top level: victims by recency only");
    }

    let file = fs::File::open(trace_path).unwrap_or_else(|err| {
        eprintln!("Error opening trace {trace_path}: {err}");
        process::exit(1);
    });

    let mut records = 0u64;
    for (number, line) in BufReader::new(file).lines().enumerate() {
        let line = line.unwrap_or_else(|err| {
            eprintln!("Error reading trace {trace_path}: {err}");
            process::exit(1);
        });
        if line.trim().is_empty() {
            continue;
        }
        let record: TraceRecord = serde_json::from_str(&line).unwrap_or_else(|err| {
            eprintln!("Error in {trace_path} line {}: {err}", number + 1);
            process::exit(1);
        });
        if let Err(err) = replay_record(&mut store, &record, top_level) {
            eprintln!("Error in {trace_path} line {}: {err}", number + 1);
            process::exit(1);
        }
        records += 1;
    }

    println!("[*] Replayed {records} records");
    store.print_report();
}

/// Applies one record: a hit promotes the block, a miss fills a victim.
fn replay_record(
    store: &mut TagStore,
    record: &TraceRecord,
    top_level: bool,
) -> Result<(), TagStoreError> {
    let request = WriteRequest::new(Address(record.addr), &record.data, record.secure)?;
    if store.access(request.addr(), request.secure()).is_none() {
        let victim = store.find_victim(&request, top_level);
        store.insert(&request, victim);
    }
    Ok(())
}
