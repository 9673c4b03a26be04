use thiserror::Error;

use crate::types::Pos;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("board {width}x{height} has no interior; both sides must be at least 3")]
    BoardTooSmall { width: usize, height: usize },
    #[error("player start ({}, {}) is not strictly inside the board", pos.x, pos.y)]
    PlayerNotInterior { pos: Pos },
    #[error("invalid generator config: {0}")]
    InvalidConfig(String),
    #[error("no goal could be placed after {attempts} attempts")]
    AttemptsExhausted { attempts: u32 },
}

#[derive(Debug, PartialEq, Eq, Error)]
pub enum ReplayError {
    #[error("journal format version {found} is not supported")]
    UnsupportedFormat { found: u16 },
    #[error(transparent)]
    Generation(#[from] GenerationError),
}
