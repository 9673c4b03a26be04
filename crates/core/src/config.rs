//! Tunable generator parameters shared by the game session, replay, and tools.

use serde::{Deserialize, Serialize};

use crate::error::GenerationError;
use crate::types::Pos;

pub const MIN_SIDE: usize = 3;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub width: usize,
    pub height: usize,
    pub player_start: Pos,
    pub min_walls: usize,
    pub max_walls: usize,
    pub max_goops: usize,
    /// Independent random walks per goal placement.
    pub walk_trials: u32,
    /// Slides per random walk.
    pub walk_steps: u32,
    /// Goal cells to try for; the last one placed becomes the goal.
    pub goals: usize,
    pub max_attempts: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            width: 7,
            height: 7,
            player_start: Pos { y: 3, x: 3 },
            min_walls: 2,
            max_walls: 9,
            max_goops: 3,
            walk_trials: 100,
            walk_steps: 20,
            goals: 2,
            max_attempts: 64,
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.width < MIN_SIDE || self.height < MIN_SIDE {
            return Err(GenerationError::BoardTooSmall { width: self.width, height: self.height });
        }
        if !is_interior(self.width, self.height, self.player_start) {
            return Err(GenerationError::PlayerNotInterior { pos: self.player_start });
        }
        if self.min_walls > self.max_walls {
            return Err(GenerationError::InvalidConfig(format!(
                "min_walls {} exceeds max_walls {}",
                self.min_walls, self.max_walls
            )));
        }
        if self.goals == 0 {
            return Err(GenerationError::InvalidConfig("goals must be at least 1".to_string()));
        }
        if self.walk_trials == 0 || self.walk_steps == 0 {
            return Err(GenerationError::InvalidConfig(
                "walk_trials and walk_steps must be non-zero".to_string(),
            ));
        }
        if self.max_attempts == 0 {
            return Err(GenerationError::InvalidConfig(
                "max_attempts must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}

pub(crate) fn is_interior(width: usize, height: usize, pos: Pos) -> bool {
    pos.x >= 1 && pos.y >= 1 && (pos.x as usize) + 1 < width && (pos.y as usize) + 1 < height
}
