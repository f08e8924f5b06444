//! Keyboard input collection for one rendered frame.

use std::time::Duration;

use macroquad::prelude::{KeyCode, get_char_pressed, get_frame_time, is_key_pressed};
use maze_app::app_loop::FrameInput;

const ACTION_KEYS: [KeyCode; 9] = [
    KeyCode::Space,
    KeyCode::Tab,
    KeyCode::Enter,
    KeyCode::KpEnter,
    KeyCode::Backspace,
    KeyCode::S,
    KeyCode::R,
    KeyCode::Up,
    KeyCode::Down,
];

pub fn capture_frame_input() -> FrameInput {
    let keys_pressed = ACTION_KEYS.into_iter().filter(|key| is_key_pressed(*key)).collect();

    let mut typed = Vec::new();
    while let Some(ch) = get_char_pressed() {
        typed.push(ch);
    }

    let elapsed = Duration::from_secs_f32(get_frame_time().max(0.0));
    FrameInput { keys_pressed, typed, elapsed }
}
