use crate::error::ReplayError;
use crate::game::Game;
use crate::journal::{InputJournal, JOURNAL_FORMAT_VERSION};

#[derive(Debug, PartialEq, Eq)]
pub struct ReplayResult {
    pub final_snapshot_hash: u64,
    pub checkpoints: u32,
    pub levels_cleared: u32,
    pub boards_generated: u32,
    pub inputs_applied: u64,
    pub won: bool,
}

pub fn replay_to_end(journal: &InputJournal) -> Result<ReplayResult, ReplayError> {
    let game = replay_game(journal)?;
    Ok(ReplayResult {
        final_snapshot_hash: game.snapshot_hash(),
        checkpoints: game.board().checkpoints(),
        levels_cleared: game.levels_cleared(),
        boards_generated: game.boards_generated(),
        inputs_applied: game.input_count(),
        won: game.board().won(),
    })
}

/// Rebuilds the session a journal describes, leaving it at its final state.
pub fn replay_game(journal: &InputJournal) -> Result<Game, ReplayError> {
    if journal.format_version != JOURNAL_FORMAT_VERSION {
        return Err(ReplayError::UnsupportedFormat { found: journal.format_version });
    }

    let mut game = Game::new(journal.seed, journal.config.clone())?;
    for record in &journal.inputs {
        game.apply(record.input)?;
    }
    Ok(game)
}
