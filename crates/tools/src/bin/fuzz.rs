use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;
use goop_core::{Direction, Game, GameInput, InputJournal};
use goop_tools::{check_board, load_config, save_journal};
use log::{debug, info};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 1000)]
    inputs: u32,
    /// Generator config JSON; the default 7x7 board when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Write the inputs that were applied as a replayable journal
    #[arg(long)]
    journal_out: Option<PathBuf>,
}

fn choose(rng: &mut ChaCha8Rng) -> GameInput {
    // Bias toward moves so boards actually get explored.
    match rng.next_u64() % 20 {
        0 => GameInput::GiveUp,
        1..=3 => GameInput::Advance,
        roll => GameInput::Move(Direction::ALL[(roll % 4) as usize]),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;

    println!("Starting fuzz harness on seed {} for {} inputs...", args.seed, args.inputs);
    let mut game = Game::new(args.seed, config.clone())?;
    let mut journal = InputJournal::new(args.seed, config);
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    if let Err(violation) = check_board(game.board()) {
        bail!("first board is invalid: {violation}");
    }

    for step in 0..args.inputs {
        let input = choose(&mut rng);
        journal.append(input);
        let outcome = game.apply(input)?;
        debug!("step {step}: {input:?} -> {outcome:?}");

        if let Err(violation) = check_board(game.board()) {
            if let Some(path) = &args.journal_out {
                save_journal(path, &journal)?;
            }
            bail!("invariant failed after step {step} ({input:?}): {violation}");
        }
    }

    if let Some(path) = &args.journal_out {
        save_journal(path, &journal)?;
        info!("journal written to {}", path.display());
    }

    println!(
        "Fuzzing completed: {} boards, {} levels cleared, {} checkpoints held.",
        game.boards_generated(),
        game.levels_cleared(),
        game.board().checkpoints()
    );
    Ok(())
}
