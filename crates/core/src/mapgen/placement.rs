//! Random wall and goop scattering. Placement is permissive: repeated picks may
//! land on the same cell and simply overwrite it.

use rand_chacha::ChaCha8Rng;

use crate::board::Board;
use crate::config::GeneratorConfig;
use crate::types::{Decoration, Terrain};

use super::seed::{random_interior_pos, roll_below};

pub(super) fn place_walls(
    board: &mut Board,
    config: &GeneratorConfig,
    rng: &mut ChaCha8Rng,
) -> usize {
    let count = config.min_walls + roll_below(rng, config.max_walls - config.min_walls + 1);
    let mut placed = 0;
    for _ in 0..count {
        let pos = random_interior_pos(rng, board.width(), board.height());
        if pos == board.player() {
            continue;
        }
        board.set_terrain(pos, Terrain::Wall);
        placed += 1;
    }
    placed
}

pub(super) fn place_goops(
    board: &mut Board,
    config: &GeneratorConfig,
    rng: &mut ChaCha8Rng,
) -> usize {
    let count = roll_below(rng, config.max_goops + 1);
    let mut placed = 0;
    for _ in 0..count {
        let pos = random_interior_pos(rng, board.width(), board.height());
        if board.terrain_at(pos) == Terrain::Wall {
            continue;
        }
        board.set_decoration(pos, Some(Decoration::Goop));
        placed += 1;
    }
    placed
}
