//! Text for the status bar, footer, and recent-event lines.

use crate::app_loop::AppMode;
use crate::{format_seed, format_snapshot_hash};
use goop_core::{Direction, Game, LogEvent};

pub fn status_line(game: &Game) -> String {
    format!(
        "Checkpoints: {}   Levels: {}   Seed: {}",
        game.board().checkpoints(),
        game.levels_cleared(),
        format_seed(game.seed())
    )
}

pub fn mode_hint(mode: &AppMode) -> String {
    match mode {
        AppMode::Playing => "Arrows slide, Backspace gives up".to_string(),
        AppMode::Won => "Goal reached! Space for the next board".to_string(),
        AppMode::Failed(reason) => format!("Board generation failed: {reason}"),
    }
}

pub fn footer_line(game: &Game) -> String {
    format!(
        "Boards: {}   Inputs: {}   Snapshot: {}",
        game.boards_generated(),
        game.input_count(),
        format_snapshot_hash(game.snapshot_hash())
    )
}

fn direction_name(direction: Direction) -> &'static str {
    match direction {
        Direction::Left => "left",
        Direction::Right => "right",
        Direction::Down => "down",
        Direction::Up => "up",
    }
}

pub fn event_line(event: &LogEvent) -> String {
    match event {
        LogEvent::Moved { from, to } => {
            format!("Slid ({}, {}) -> ({}, {})", from.x, from.y, to.x, to.y)
        }
        LogEvent::Blocked { at, direction } => {
            format!("Blocked {} at ({}, {})", direction_name(*direction), at.x, at.y)
        }
        LogEvent::CheckpointCollected { total, .. } => format!("Checkpoint! ({total} total)"),
        LogEvent::GoalReached { .. } => "Goal reached".to_string(),
        LogEvent::GaveUp { checkpoints } => format!("Gave up ({checkpoints} checkpoints left)"),
        LogEvent::Advanced { levels_cleared } => format!("Level {levels_cleared} cleared"),
        LogEvent::BoardGenerated { attempts: 1, .. } => "New board".to_string(),
        LogEvent::BoardGenerated { attempts, .. } => format!("New board ({attempts} attempts)"),
    }
}

/// The newest `count` events, oldest first.
pub fn recent_event_lines(game: &Game, count: usize) -> Vec<String> {
    let log = game.log();
    log[log.len().saturating_sub(count)..].iter().map(event_line).collect()
}
