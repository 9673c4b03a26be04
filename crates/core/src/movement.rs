//! Player sliding and goal collection.

use crate::board::Board;
use crate::types::{Decoration, Direction, MoveReport};

impl Board {
    /// Slides the player until a wall or goop stops it, then applies the landing
    /// cell's rules: an uncollected checkpoint is collected once, and `won` is
    /// recomputed from whether the player now stands on the goal.
    pub fn move_player(&mut self, direction: Direction) -> MoveReport {
        debug_assert!(!self.is_border(self.player), "player must stay inside the border");

        let from = self.player;
        let to = self.slide_from(from, direction);
        self.player = to;

        let collected_checkpoint = self.decoration_at(to) == Some(Decoration::Checkpoint);
        if collected_checkpoint {
            self.set_decoration(to, Some(Decoration::CheckpointCollected));
            self.checkpoints += 1;
        }

        self.won = self.decoration_at(to) == Some(Decoration::Goal);

        MoveReport { from, to, collected_checkpoint, won: self.won }
    }
}
