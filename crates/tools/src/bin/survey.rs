//! Generates many boards and reports how hard their goals are to stumble onto.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use goop_core::mapgen::{generate_board, walker_stream};
use goop_core::{GeneratedBoard, GeneratorConfig, estimate_reachability};
use goop_tools::load_config;
use log::debug;

/// Keeps the survey's walkers off the generator's own random sequence.
const WALKER_SALT: u64 = 0x5EED_0F_5A1D;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// First seed surveyed
    #[arg(short, long, default_value_t = 0)]
    seed: u64,
    #[arg(short, long, default_value_t = 200)]
    boards: u64,
    #[arg(short, long)]
    config: Option<PathBuf>,
}

struct BoardSample {
    attempts: u32,
    walls: usize,
    goops: usize,
    /// Share of walker rests that ended on the goal.
    goal_share: f64,
    checkpoint_share: Option<f64>,
}

fn sample(seed: u64, config: &GeneratorConfig, generated: &GeneratedBoard) -> BoardSample {
    let mut rng = walker_stream(seed ^ WALKER_SALT);
    let histogram = estimate_reachability(
        &generated.board,
        generated.board.player(),
        config.walk_trials,
        config.walk_steps,
        &mut rng,
    );
    let total = histogram.total().max(1) as f64;
    BoardSample {
        attempts: generated.attempts,
        walls: generated.walls_placed,
        goops: generated.goops_placed,
        goal_share: generated.goal().map_or(0.0, |pos| f64::from(histogram.count(pos)) / total),
        checkpoint_share: generated
            .checkpoints()
            .first()
            .map(|&pos| f64::from(histogram.count(pos)) / total),
    }
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0u64), |(sum, count), value| (sum + value, count + 1));
    if count == 0 { 0.0 } else { sum / count as f64 }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;

    let mut samples = Vec::new();
    let mut failures = 0u64;
    for seed in args.seed..args.seed.saturating_add(args.boards) {
        match generate_board(seed, config.clone()) {
            Ok(generated) => samples.push(sample(seed, &config, &generated)),
            Err(err) => {
                debug!("seed {seed}: {err}");
                failures += 1;
            }
        }
    }

    let mut goal_shares: Vec<f64> = samples.iter().map(|s| s.goal_share).collect();
    goal_shares.sort_by(f64::total_cmp);
    let median = goal_shares.get(goal_shares.len() / 2).copied().unwrap_or(0.0);

    println!("Boards: {} generated, {} gave up", samples.len(), failures);
    println!("Mean attempts: {:.2}", mean(samples.iter().map(|s| f64::from(s.attempts))));
    println!("Mean walls placed: {:.2}", mean(samples.iter().map(|s| s.walls as f64)));
    println!("Mean goops placed: {:.2}", mean(samples.iter().map(|s| s.goops as f64)));
    println!(
        "Goal rest share: min {:.4} median {:.4} max {:.4}",
        goal_shares.first().copied().unwrap_or(0.0),
        median,
        goal_shares.last().copied().unwrap_or(0.0)
    );
    println!(
        "Mean checkpoint rest share: {:.4}",
        mean(samples.iter().filter_map(|s| s.checkpoint_share))
    );
    Ok(())
}
