use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use goop_core::replay_to_end;
use goop_tools::load_journal;
use log::info;

/// Replay an input journal and print the final state.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the journal JSON file to replay
    #[arg(short, long)]
    journal: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let journal = load_journal(&args.journal)?;
    info!("replaying {} inputs from seed {}", journal.inputs.len(), journal.seed);

    let result = replay_to_end(&journal)
        .with_context(|| format!("replay of {} failed", args.journal.display()))?;

    println!("Replay complete.");
    println!("Inputs: {}", result.inputs_applied);
    println!("Boards generated: {}", result.boards_generated);
    println!("Levels cleared: {}", result.levels_cleared);
    println!("Checkpoints: {}", result.checkpoints);
    println!("Won: {}", result.won);
    println!("Snapshot Hash: 0x{:016x}", result.final_snapshot_hash);

    Ok(())
}
