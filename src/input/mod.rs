use macroquad::prelude::*;

use crate::application::{BoardView, Command};
use crate::domain::{Difficulty, Position};
use crate::ui::Button;

/// Board position under a left click, if any
pub fn pointer_target(view: &BoardView, mouse_pos: (f32, f32)) -> Option<Position> {
    if !is_mouse_button_pressed(MouseButton::Left) {
        return None;
    }
    view.screen_to_cell(mouse_pos.0, mouse_pos.1)
}

/// Keyboard shortcuts for the panel
fn keyboard_commands() -> impl Iterator<Item = Command> {
    let bindings = [
        (KeyCode::Key1, Command::Begin(Difficulty::Easy)),
        (KeyCode::Key2, Command::Begin(Difficulty::Medium)),
        (KeyCode::Key3, Command::Begin(Difficulty::Hard)),
        (KeyCode::R, Command::Restart),
        (KeyCode::L, Command::NextLayout),
        (KeyCode::Escape, Command::Quit),
    ];

    bindings
        .into_iter()
        .filter(|(key, _)| is_key_pressed(*key))
        .map(|(_, command)| command)
}

/// Collect every command issued this frame: panel buttons first,
/// then a window click, then keys
pub fn poll_commands(buttons: &[Button], view: &BoardView, mouse_pos: (f32, f32)) -> Vec<Command> {
    let button_hit = buttons.iter().find_map(|btn| btn.clicked(mouse_pos));

    button_hit
        .into_iter()
        // A click on a button never reaches the building behind the panel
        .chain(
            button_hit
                .is_none()
                .then(|| pointer_target(view, mouse_pos))
                .flatten()
                .map(Command::Select),
        )
        .chain(keyboard_commands())
        .collect()
}
