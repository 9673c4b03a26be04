//! Shared file handling for the headless tools.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use goop_core::{Board, Decoration, GeneratorConfig, InputJournal, Terrain};

/// Reads a generator config from JSON, or the default config when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<GeneratorConfig> {
    let Some(path) = path else {
        return Ok(GeneratorConfig::default());
    };
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let config: GeneratorConfig = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse config file {}", path.display()))?;
    config.validate().with_context(|| format!("config file {} is invalid", path.display()))?;
    Ok(config)
}

pub fn load_journal(path: &Path) -> Result<InputJournal> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read journal file {}", path.display()))?;
    InputJournal::from_json(&raw)
        .with_context(|| format!("failed to parse journal file {}", path.display()))
}

pub fn save_journal(path: &Path, journal: &InputJournal) -> Result<()> {
    let json = journal.to_json().context("failed to serialize journal")?;
    fs::write(path, json)
        .with_context(|| format!("failed to write journal file {}", path.display()))
}

/// Checks the invariants every board must hold between inputs.
pub fn check_board(board: &Board) -> Result<(), String> {
    for pos in board.positions() {
        if board.is_border(pos) && board.terrain_at(pos) != Terrain::Wall {
            return Err(format!("border cell {pos:?} is not wall"));
        }
        if board.decoration_at(pos).is_some() && board.terrain_at(pos) != Terrain::Floor {
            return Err(format!("decoration on non-floor cell {pos:?}"));
        }
    }
    let goals = board.cells_with(Decoration::Goal).len();
    if goals != 1 {
        return Err(format!("board holds {goals} goals"));
    }
    let player = board.player();
    if board.is_border(player) || board.terrain_at(player) != Terrain::Floor {
        return Err(format!("player stands on {player:?}"));
    }
    let on_goal = board.decoration_at(player) == Some(Decoration::Goal);
    if board.won() != on_goal {
        return Err(format!("won={} but player on goal={on_goal}", board.won()));
    }
    Ok(())
}
