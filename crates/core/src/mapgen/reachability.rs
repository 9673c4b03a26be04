//! Monte-Carlo reachability estimate used as an inverse difficulty signal.

use rand_chacha::ChaCha8Rng;

use crate::board::Board;
use crate::types::{Direction, Pos};

use super::seed::roll_below;

/// Per-cell count of how often a random walker came to rest there.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisitHistogram {
    width: usize,
    counts: Vec<u32>,
}

impl VisitHistogram {
    fn new(width: usize, height: usize) -> Self {
        Self { width, counts: vec![0; width * height] }
    }

    pub fn count(&self, pos: Pos) -> u32 {
        if pos.x < 0 || pos.y < 0 || pos.x as usize >= self.width {
            return 0;
        }
        self.counts.get((pos.y as usize) * self.width + (pos.x as usize)).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&count| u64::from(count)).sum()
    }

    fn record(&mut self, pos: Pos) {
        let idx = (pos.y as usize) * self.width + (pos.x as usize);
        self.counts[idx] += 1;
    }
}

/// Runs `trials` independent walks of `steps` slides each from `start`. Every slide,
/// including one blocked immediately, records a visit to the cell it ends on.
pub fn estimate_reachability(
    board: &Board,
    start: Pos,
    trials: u32,
    steps: u32,
    rng: &mut ChaCha8Rng,
) -> VisitHistogram {
    let mut histogram = VisitHistogram::new(board.width(), board.height());
    for _ in 0..trials {
        let mut at = start;
        for _ in 0..steps {
            let direction = Direction::ALL[roll_below(rng, Direction::ALL.len())];
            at = board.slide_from(at, direction);
            histogram.record(at);
        }
    }
    histogram
}
