use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use maze_core::{InputJournal, replay_to_end};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Replays a journal written by the desktop app and prints the final state.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the journal JSON file to replay
    #[arg(short, long)]
    journal: PathBuf,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
    let args = Args::parse();

    let journal_data = fs::read_to_string(&args.journal)
        .with_context(|| format!("Failed to read journal file: {}", args.journal.display()))?;
    let journal =
        InputJournal::from_json_str(&journal_data).context("Failed to deserialize journal JSON")?;
    info!(seed = journal.seed, records = journal.records.len(), "journal loaded");

    let result = replay_to_end(&journal).context("Replay failed")?;

    println!("Replay complete.");
    println!("Records applied: {}", result.records_applied);
    println!("Generation: {}", result.generation);
    println!("Level: {}", result.level);
    println!("Phase: {:?}", result.phase);
    println!("Snapshot Hash: 0x{:016x}", result.snapshot_hash);

    Ok(())
}
