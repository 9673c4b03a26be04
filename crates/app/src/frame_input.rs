//! Keyboard input collection for one rendered frame.

use macroquad::prelude::{KeyCode, is_key_pressed};

const GAME_KEYS: [KeyCode; 6] = [
    KeyCode::Left,
    KeyCode::Right,
    KeyCode::Up,
    KeyCode::Down,
    KeyCode::Backspace,
    KeyCode::Space,
];

#[derive(Default)]
pub struct FrameInput {
    pub keys_pressed: Vec<KeyCode>,
    pub quit: bool,
}

pub fn capture_frame_input() -> FrameInput {
    let keys_pressed = GAME_KEYS.into_iter().filter(|&key| is_key_pressed(key)).collect();
    FrameInput { keys_pressed, quit: is_key_pressed(KeyCode::Escape) }
}
