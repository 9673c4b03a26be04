//! Game session: owns the current board and the generator's random stream, and
//! turns discrete inputs into moves or regenerations.

mod hash;

use log::info;

use crate::board::Board;
use crate::config::GeneratorConfig;
use crate::error::GenerationError;
use crate::mapgen::{BoardGenerator, GeneratedBoard};
use crate::types::*;

pub struct Game {
    seed: u64,
    generator: BoardGenerator,
    board: Board,
    log: Vec<LogEvent>,
    levels_cleared: u32,
    boards_generated: u32,
    input_count: u64,
}

impl Game {
    pub fn new(seed: u64, config: GeneratorConfig) -> Result<Self, GenerationError> {
        let mut generator = BoardGenerator::new(seed, config)?;
        let start = generator.config().player_start;
        let generated = generator.generate(start, 0)?;

        let mut game = Self {
            seed,
            generator,
            board: generated.board.clone(),
            log: Vec::new(),
            levels_cleared: 0,
            boards_generated: 0,
            input_count: 0,
        };
        game.record_generation(&generated);
        Ok(game)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &GeneratorConfig {
        self.generator.config()
    }

    pub fn log(&self) -> &[LogEvent] {
        &self.log
    }

    pub fn levels_cleared(&self) -> u32 {
        self.levels_cleared
    }

    pub fn boards_generated(&self) -> u32 {
        self.boards_generated
    }

    pub fn input_count(&self) -> u64 {
        self.input_count
    }

    /// Applies one input. A failed regeneration leaves the current board in place.
    pub fn apply(&mut self, input: GameInput) -> Result<InputOutcome, GenerationError> {
        self.input_count += 1;
        match input {
            GameInput::Move(direction) => Ok(self.move_player(direction)),
            GameInput::GiveUp => {
                let checkpoints = self.board.checkpoints().saturating_sub(1);
                info!("gave up; checkpoints {} -> {checkpoints}", self.board.checkpoints());
                let attempts = self.regenerate(checkpoints)?;
                self.log.push(LogEvent::GaveUp { checkpoints });
                Ok(InputOutcome::Regenerated { attempts })
            }
            GameInput::Advance => {
                if !self.board.won() {
                    return Ok(InputOutcome::Ignored);
                }
                let attempts = self.regenerate(self.board.checkpoints())?;
                self.levels_cleared += 1;
                info!("advanced to level {}", self.levels_cleared + 1);
                self.log.push(LogEvent::Advanced { levels_cleared: self.levels_cleared });
                Ok(InputOutcome::Regenerated { attempts })
            }
        }
    }

    fn move_player(&mut self, direction: Direction) -> InputOutcome {
        let report = self.board.move_player(direction);
        if !report.moved() {
            self.log.push(LogEvent::Blocked { at: report.from, direction });
            return InputOutcome::Blocked;
        }

        self.log.push(LogEvent::Moved { from: report.from, to: report.to });
        if report.collected_checkpoint {
            self.log.push(LogEvent::CheckpointCollected {
                pos: report.to,
                total: self.board.checkpoints(),
            });
        }
        if report.won {
            self.log.push(LogEvent::GoalReached { pos: report.to });
        }
        InputOutcome::Moved(report)
    }

    /// The new board is built around wherever the player currently stands.
    fn regenerate(&mut self, checkpoints: u32) -> Result<u32, GenerationError> {
        let generated = self.generator.generate(self.board.player(), checkpoints)?;
        self.board = generated.board.clone();
        self.record_generation(&generated);
        Ok(generated.attempts)
    }

    fn record_generation(&mut self, generated: &GeneratedBoard) {
        self.boards_generated += 1;
        self.log.push(LogEvent::BoardGenerated {
            attempts: generated.attempts,
            goals: generated.goals.len(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_game(seed: u64) -> Game {
        Game::new(seed, GeneratorConfig::default()).expect("default config generates")
    }

    /// Breadth-first search over slide moves from the player to the first cell
    /// matching `target`.
    fn route_to(board: &Board, target: Decoration) -> Option<Vec<Direction>> {
        use std::collections::{BTreeMap, VecDeque};

        let start = board.player();
        let mut came_from = BTreeMap::from([(start, None)]);
        let mut open = VecDeque::from([start]);
        while let Some(pos) = open.pop_front() {
            if board.decoration_at(pos) == Some(target) {
                let mut route = Vec::new();
                let mut at = pos;
                while let Some(Some((prev, direction))) = came_from.get(&at).copied() {
                    route.push(direction);
                    at = prev;
                }
                route.reverse();
                return Some(route);
            }
            for direction in Direction::ALL {
                let next = board.slide_from(pos, direction);
                if !came_from.contains_key(&next) {
                    came_from.insert(next, Some((pos, direction)));
                    open.push_back(next);
                }
            }
        }
        None
    }

    fn walk_to_goal(game: &mut Game) {
        let route = route_to(game.board(), Decoration::Goal).expect("goal is reachable");
        for direction in route {
            game.apply(GameInput::Move(direction)).expect("moves never fail");
        }
        assert!(game.board().won());
    }

    #[test]
    fn new_game_logs_its_first_board() {
        let game = new_game(1);
        assert_eq!(game.boards_generated(), 1);
        assert!(matches!(game.log(), [LogEvent::BoardGenerated { .. }]));
        assert_eq!(game.board().player(), GeneratorConfig::default().player_start);
    }

    #[test]
    fn advance_is_ignored_until_won() {
        let mut game = new_game(2);
        let before = game.board().clone();

        assert_eq!(game.apply(GameInput::Advance), Ok(InputOutcome::Ignored));
        assert_eq!(game.board(), &before);
        assert_eq!(game.levels_cleared(), 0);
    }

    #[test]
    fn advance_after_win_regenerates_around_the_player() {
        let mut game = new_game(3);
        walk_to_goal(&mut game);
        let goal = game.board().player();
        let checkpoints = game.board().checkpoints();

        let outcome = game.apply(GameInput::Advance).expect("regeneration succeeds");

        assert!(matches!(outcome, InputOutcome::Regenerated { .. }));
        assert_eq!(game.levels_cleared(), 1);
        assert_eq!(game.board().player(), goal);
        assert_eq!(game.board().checkpoints(), checkpoints);
        assert!(!game.board().won());
    }

    #[test]
    fn give_up_decrements_checkpoints_with_a_floor_of_zero() {
        let mut game = new_game(4);
        game.apply(GameInput::GiveUp).expect("regeneration succeeds");
        assert_eq!(game.board().checkpoints(), 0);

        game.board.checkpoints = 3;
        game.apply(GameInput::GiveUp).expect("regeneration succeeds");
        assert_eq!(game.board().checkpoints(), 2);
        assert!(matches!(game.log().last(), Some(LogEvent::GaveUp { checkpoints: 2 })));
    }

    #[test]
    fn collecting_the_checkpoint_is_logged() {
        for seed in 0..20 {
            let mut game = new_game(seed);
            let Some(route) = route_to(game.board(), Decoration::Checkpoint) else {
                continue;
            };
            for direction in route {
                game.apply(GameInput::Move(direction)).expect("moves never fail");
            }
            assert_eq!(game.board().checkpoints(), 1);
            assert!(
                game.log().iter().any(|event| matches!(
                    event,
                    LogEvent::CheckpointCollected { total: 1, .. }
                ))
            );
            return;
        }
        panic!("no seed produced a reachable checkpoint");
    }

    #[test]
    fn every_input_is_counted() {
        let mut game = new_game(5);
        for input in [
            GameInput::Move(Direction::Left),
            GameInput::Advance,
            GameInput::Move(Direction::Up),
        ] {
            game.apply(input).expect("no regeneration needed");
        }
        assert_eq!(game.input_count(), 3);
    }
}
