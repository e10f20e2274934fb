mod button;

pub use button::Button;

use macroquad::prelude::{screen_height, screen_width};

use crate::application::{BoardView, Command};
use crate::domain::{Difficulty, SessionPhase};

pub const PANEL_WIDTH: f32 = 200.0;
pub const BUTTON_HEIGHT: f32 = 40.0;
const BUTTON_SPACING: f32 = 50.0;
/// Wall between neighbouring windows, in pixels
pub const WINDOW_GAP: f32 = 8.0;
/// Margin around the facade
pub const BOARD_MARGIN: f32 = 24.0;

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Width available to the building
pub fn board_area_width() -> f32 {
    (screen_width() - PANEL_WIDTH - 2.0 * BOARD_MARGIN).max(1.0)
}

pub fn board_area_height() -> f32 {
    (screen_height() - 2.0 * BOARD_MARGIN).max(1.0)
}

/// Buttons shown for the current phase, top to bottom.
/// The difficulty panel only appears while a board is waiting to be scrambled.
pub fn create_buttons(phase: SessionPhase) -> Vec<Button> {
    let mut entries: Vec<(String, Command)> = match phase {
        SessionPhase::Generating => Difficulty::all()
            .into_iter()
            .map(|d| (d.name().to_string(), Command::Begin(d)))
            .chain(std::iter::once(("Next Building".to_string(), Command::NextLayout)))
            .collect(),
        SessionPhase::Playing => vec![("Restart".to_string(), Command::Restart)],
        SessionPhase::Solved => vec![("Play Again".to_string(), Command::Restart)],
        SessionPhase::Uninitialized => Vec::new(),
    };
    entries.push(("Quit".to_string(), Command::Quit));

    let px = panel_x() + 10.0;
    entries
        .into_iter()
        .enumerate()
        .map(|(i, (label, command))| {
            Button::new(px, 200.0 + i as f32 * BUTTON_SPACING, PANEL_WIDTH - 20.0, BUTTON_HEIGHT, label, command)
        })
        .collect()
}

/// Fit the building into the area left of the panel
pub fn board_view(rows: usize, columns: usize) -> BoardView {
    let mut view = BoardView::fit(rows, columns, board_area_width(), board_area_height(), WINDOW_GAP);
    view.origin_x += BOARD_MARGIN;
    view.origin_y += BOARD_MARGIN;
    view
}
