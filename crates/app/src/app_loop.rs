use goop_core::{Direction, Game, GameInput, InputOutcome};
use log::{debug, error};
use macroquad::prelude::KeyCode;

#[derive(Debug, PartialEq, Eq, Default)]
pub enum AppMode {
    #[default]
    Playing,
    /// Player is on the goal; Space advances.
    Won,
    /// Board generation gave up; the session cannot continue.
    Failed(String),
}

#[derive(Default)]
pub struct AppState {
    pub mode: AppMode,
    pub last_outcome: Option<InputOutcome>,
    /// Inputs accepted during the current frame's `tick()` call.
    pub accepted_inputs: Vec<GameInput>,
}

pub fn input_for_key(key: KeyCode) -> Option<GameInput> {
    match key {
        KeyCode::Left => Some(GameInput::Move(Direction::Left)),
        KeyCode::Right => Some(GameInput::Move(Direction::Right)),
        KeyCode::Up => Some(GameInput::Move(Direction::Up)),
        KeyCode::Down => Some(GameInput::Move(Direction::Down)),
        KeyCode::Backspace => Some(GameInput::GiveUp),
        KeyCode::Space => Some(GameInput::Advance),
        _ => None,
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies this frame's key presses in order.
    pub fn tick(&mut self, game: &mut Game, keys_pressed: &[KeyCode]) {
        self.accepted_inputs.clear();
        if matches!(self.mode, AppMode::Failed(_)) {
            return;
        }

        for &key in keys_pressed {
            let Some(input) = input_for_key(key) else {
                continue;
            };
            match game.apply(input) {
                Ok(outcome) => {
                    debug!("{input:?} -> {outcome:?}");
                    self.last_outcome = Some(outcome);
                    self.accepted_inputs.push(input);
                }
                Err(err) => {
                    error!("{input:?} failed: {err}");
                    self.mode = AppMode::Failed(err.to_string());
                    return;
                }
            }
        }

        self.mode = if game.board().won() { AppMode::Won } else { AppMode::Playing };
    }
}
