//! Ranked goal selection: each goal is drawn from the hardest-to-reach quarter of
//! the cells a random walker found from the previous goal.

use log::debug;
use rand_chacha::ChaCha8Rng;

use crate::board::Board;
use crate::config::GeneratorConfig;
use crate::types::{Decoration, Pos};

use super::reachability::{VisitHistogram, estimate_reachability};
use super::seed::roll_below;

/// Places up to `config.goals` checkpoints in sequence and returns them in placement
/// order. Stops early when a walk reaches no eligible cell.
pub(super) fn place_goals(
    board: &mut Board,
    config: &GeneratorConfig,
    rng: &mut ChaCha8Rng,
) -> Vec<Pos> {
    let mut placed = Vec::with_capacity(config.goals);
    let mut previous_goal = board.player();

    while placed.len() < config.goals {
        let histogram =
            estimate_reachability(board, previous_goal, config.walk_trials, config.walk_steps, rng);
        let candidates = ranked_candidates(board, &histogram);
        if candidates.is_empty() {
            debug!("no goal candidates reachable from {previous_goal:?}");
            break;
        }

        let counts: Vec<u32> = candidates.iter().map(|&pos| histogram.count(pos)).collect();
        let limit = selection_limit(&counts);
        let pick = candidates[roll_below(rng, limit)];

        board.set_decoration(pick, Some(Decoration::Checkpoint));
        placed.push(pick);
        previous_goal = pick;
    }

    placed
}

/// Visited, undecorated, non-player cells in row-major order, stably sorted so the
/// least visited come first.
fn ranked_candidates(board: &Board, histogram: &VisitHistogram) -> Vec<Pos> {
    let mut candidates: Vec<Pos> = board
        .positions()
        .filter(|&pos| pos != board.player())
        .filter(|&pos| board.decoration_at(pos).is_none())
        .filter(|&pos| histogram.count(pos) > 0)
        .collect();
    candidates.sort_by_key(|&pos| histogram.count(pos));
    candidates
}

/// Size of the pick pool over ascending `counts`: a quarter of the list (at least
/// one), widened so the cut never splits cells sharing the cutoff count.
fn selection_limit(counts: &[u32]) -> usize {
    debug_assert!(!counts.is_empty());
    let mut limit = (counts.len() / 4).max(1);
    while limit < counts.len() && counts[limit] == counts[limit - 1] {
        limit += 1;
    }
    limit
}
