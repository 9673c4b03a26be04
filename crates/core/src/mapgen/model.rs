//! Output of one successful generation run.

use crate::board::Board;
use crate::types::Pos;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedBoard {
    pub board: Board,
    /// Goal cells in placement order; the last one holds the goal.
    pub goals: Vec<Pos>,
    pub walls_placed: usize,
    pub goops_placed: usize,
    /// 1-based attempt that produced this board.
    pub attempts: u32,
}

impl GeneratedBoard {
    pub fn goal(&self) -> Option<Pos> {
        self.goals.last().copied()
    }

    /// Intermediate checkpoints, i.e. every goal cell but the last.
    pub fn checkpoints(&self) -> &[Pos] {
        match self.goals.split_last() {
            Some((_, rest)) => rest,
            None => &[],
        }
    }
}
