//! Keyboard, text and mouse collection for one rendered frame.

use app::app_loop::FrameInput;
use macroquad::prelude::{
    KeyCode, MouseButton, get_char_pressed, is_key_pressed, is_mouse_button_pressed,
    mouse_position,
};

const ACTION_KEYS: [KeyCode; 10] = [
    KeyCode::Up,
    KeyCode::Down,
    KeyCode::Left,
    KeyCode::Right,
    KeyCode::Space,
    KeyCode::R,
    KeyCode::Tab,
    KeyCode::Backspace,
    KeyCode::Enter,
    KeyCode::KpEnter,
];

pub fn capture_frame_input() -> FrameInput {
    let keys_pressed = ACTION_KEYS.into_iter().filter(|key| is_key_pressed(*key)).collect();

    let mut chars = Vec::new();
    while let Some(ch) = get_char_pressed() {
        chars.push(ch);
    }

    let click = is_mouse_button_pressed(MouseButton::Left).then(mouse_position);

    FrameInput { keys_pressed, chars, click }
}
