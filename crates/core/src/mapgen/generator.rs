//! Board generation orchestration: walls, goop, then reachability-ranked goals,
//! retried until at least one goal lands.

use log::{debug, warn};
use rand_chacha::ChaCha8Rng;

use crate::board::Board;
use crate::config::{GeneratorConfig, is_interior};
use crate::error::GenerationError;
use crate::types::{Decoration, Pos};

use super::goals::place_goals;
use super::model::GeneratedBoard;
use super::placement::{place_goops, place_walls};
use super::seed::stream_from_seed;

pub struct BoardGenerator {
    config: GeneratorConfig,
    rng: ChaCha8Rng,
}

impl BoardGenerator {
    pub fn new(seed: u64, config: GeneratorConfig) -> Result<Self, GenerationError> {
        config.validate()?;
        Ok(Self { config, rng: stream_from_seed(seed) })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Builds a fresh board around `player`. The checkpoint counter is carried over
    /// as given; only layout and goal state are new.
    pub fn generate(
        &mut self,
        player: Pos,
        checkpoints: u32,
    ) -> Result<GeneratedBoard, GenerationError> {
        if !is_interior(self.config.width, self.config.height, player) {
            return Err(GenerationError::PlayerNotInterior { pos: player });
        }

        for attempt in 1..=self.config.max_attempts {
            let mut board = Board::open(self.config.width, self.config.height, player)?;
            board.checkpoints = checkpoints;

            let walls_placed = place_walls(&mut board, &self.config, &mut self.rng);
            let goops_placed = place_goops(&mut board, &self.config, &mut self.rng);
            let goals = place_goals(&mut board, &self.config, &mut self.rng);

            let Some(&goal) = goals.last() else {
                warn!("generation attempt {attempt} placed no goals around {player:?}; retrying");
                continue;
            };
            board.set_decoration(goal, Some(Decoration::Goal));
            board.won = false;

            debug!(
                "generated board on attempt {attempt}: {walls_placed} walls, {goops_placed} goops, goals {goals:?}"
            );
            return Ok(GeneratedBoard { board, goals, walls_placed, goops_placed, attempts: attempt });
        }

        Err(GenerationError::AttemptsExhausted { attempts: self.config.max_attempts })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeSet, VecDeque};

    use proptest::prelude::*;

    use super::*;
    use crate::types::{Direction, Terrain};

    fn generate(seed: u64, config: GeneratorConfig) -> GeneratedBoard {
        let start = config.player_start;
        BoardGenerator::new(seed, config)
            .expect("config is valid")
            .generate(start, 0)
            .expect("generation should succeed")
    }

    #[test]
    fn new_rejects_invalid_config() {
        let config = GeneratorConfig { height: 1, ..GeneratorConfig::default() };
        assert!(matches!(
            BoardGenerator::new(1, config),
            Err(GenerationError::BoardTooSmall { width: 7, height: 1 })
        ));
    }

    #[test]
    fn generate_rejects_player_outside_interior() {
        let mut generator =
            BoardGenerator::new(1, GeneratorConfig::default()).expect("config is valid");
        assert_eq!(
            generator.generate(Pos::new(6, 3), 0),
            Err(GenerationError::PlayerNotInterior { pos: Pos::new(6, 3) })
        );
    }

    #[test]
    fn three_by_three_board_fails_fast_instead_of_looping() {
        let config = GeneratorConfig {
            width: 3,
            height: 3,
            player_start: Pos::new(1, 1),
            max_attempts: 5,
            ..GeneratorConfig::default()
        };
        let mut generator = BoardGenerator::new(9, config).expect("config is valid");
        assert_eq!(
            generator.generate(Pos::new(1, 1), 0),
            Err(GenerationError::AttemptsExhausted { attempts: 5 })
        );
    }

    #[test]
    fn last_goal_becomes_the_single_goal() {
        for seed in 0..40 {
            let generated = generate(seed, GeneratorConfig::default());
            let board = &generated.board;

            assert_eq!(board.cells_with(Decoration::Goal), vec![generated.goal().unwrap()]);
            assert_eq!(board.cells_with(Decoration::Checkpoint), generated.checkpoints().to_vec());
            assert!(board.cells_with(Decoration::Checkpoint).len() <= 1);
            assert!(!board.won());
        }
    }

    #[test]
    fn checkpoint_counter_is_carried_not_reset() {
        let mut generator =
            BoardGenerator::new(77, GeneratorConfig::default()).expect("config is valid");
        let generated = generator.generate(Pos::new(3, 3), 5).expect("generation succeeds");
        assert_eq!(generated.board.checkpoints(), 5);
    }

    #[test]
    fn single_goal_config_places_no_checkpoint() {
        let config = GeneratorConfig { goals: 1, ..GeneratorConfig::default() };
        for seed in 0..20 {
            let generated = generate(seed, config.clone());
            assert_eq!(generated.goals.len(), 1);
            assert!(generated.checkpoints().is_empty());
            assert!(generated.board.cells_with(Decoration::Checkpoint).is_empty());
        }
    }

    #[test]
    fn same_seed_produces_byte_identical_boards() {
        let a = generate(0xBEAD_1234, GeneratorConfig::default());
        let b = generate(0xBEAD_1234, GeneratorConfig::default());
        assert_eq!(a.board.canonical_bytes(), b.board.canonical_bytes());
        assert_eq!(a, b);
    }

    #[test]
    fn consecutive_boards_from_one_stream_differ() {
        let mut generator =
            BoardGenerator::new(31, GeneratorConfig::default()).expect("config is valid");
        let boards: BTreeSet<Vec<u8>> = (0..8)
            .map(|_| {
                generator
                    .generate(Pos::new(3, 3), 0)
                    .expect("generation succeeds")
                    .board
                    .canonical_bytes()
            })
            .collect();
        assert!(boards.len() > 1, "a shared stream should keep producing new layouts");
    }

    #[test]
    fn goal_is_reachable_by_sliding_from_the_player() {
        for seed in 0..40 {
            let generated = generate(seed, GeneratorConfig::default());
            let goal = generated.goal().unwrap();
            assert!(
                slide_reachable(&generated.board, generated.board.player()).contains(&goal),
                "seed {seed}: goal {goal:?} unreachable"
            );
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]
        #[test]
        fn generated_boards_hold_layout_invariants(seed in any::<u64>()) {
            let generated = generate(seed, GeneratorConfig::default());
            let board = &generated.board;

            for pos in board.positions() {
                if board.is_border(pos) {
                    prop_assert_eq!(board.terrain_at(pos), Terrain::Wall);
                }
                if board.decoration_at(pos).is_some() {
                    prop_assert_eq!(board.terrain_at(pos), Terrain::Floor);
                }
            }
            prop_assert_eq!(board.cells_with(Decoration::Goal).len(), 1);
            prop_assert_eq!(board.terrain_at(board.player()), Terrain::Floor);
            prop_assert!(!matches!(
                board.decoration_at(board.player()),
                Some(Decoration::Goal | Decoration::Checkpoint)
            ));
        }
    }

    fn slide_reachable(board: &Board, start: Pos) -> BTreeSet<Pos> {
        let mut seen = BTreeSet::from([start]);
        let mut open = VecDeque::from([start]);
        while let Some(pos) = open.pop_front() {
            for direction in Direction::ALL {
                let next = board.slide_from(pos, direction);
                if seen.insert(next) {
                    open.push_back(next);
                }
            }
        }
        seen
    }
}
