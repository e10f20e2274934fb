use macroquad::prelude::*;

use crate::application::{BoardView, Session};
use crate::domain::{Grid, RandomSource, SessionPhase};
use crate::ui::{Button, PANEL_WIDTH, WINDOW_GAP, panel_x};

const WALL_COLOR: Color = Color::new(0.16, 0.15, 0.2, 1.0);
const LIGHT_ON: Color = Color::new(1.0, 0.85, 0.35, 1.0);
const LIGHT_OFF: Color = Color::new(0.08, 0.1, 0.18, 1.0);
const FRAME_COLOR: Color = Color::new(0.35, 0.33, 0.4, 1.0);

/// Draw the facade and every window.
/// The whole grid is redrawn each frame, so every cell a move flipped shows up.
pub fn draw_board(grid: &Grid, view: &BoardView) {
    let (rows, columns) = grid.dimensions();
    draw_rectangle(
        view.origin_x - WINDOW_GAP,
        view.origin_y - WINDOW_GAP,
        columns as f32 * view.slot + 2.0 * WINDOW_GAP,
        rows as f32 * view.slot + 2.0 * WINDOW_GAP,
        WALL_COLOR,
    );

    let size = view.window_size();
    for cell in grid.cells() {
        let (x, y) = view.cell_to_screen(cell.position());
        let fill = if cell.is_on() { LIGHT_ON } else { LIGHT_OFF };
        draw_rectangle(x, y, size, size, fill);
        draw_rectangle_lines(x, y, size, size, 2.0, FRAME_COLOR);
    }
}

/// Helper to draw text labels
fn draw_text_label(text: &str, x: f32, y: f32, size: f32, color: Color) {
    draw_text(text, x, y, size, color);
}

fn status_line(phase: SessionPhase) -> (&'static str, Color) {
    match phase {
        SessionPhase::Uninitialized => ("No building", GRAY),
        SessionPhase::Generating => ("Pick a difficulty", WHITE),
        SessionPhase::Playing => ("Lights out!", LIGHT_ON),
        SessionPhase::Solved => ("You win!", GREEN),
    }
}

/// Draw the side panel: building name, move counter, status and buttons
pub fn draw_panel<S: RandomSource>(session: &Session<S>, buttons: &[Button], mouse_pos: (f32, f32)) {
    let px = panel_x();
    draw_rectangle(px, 0.0, PANEL_WIDTH, screen_height(), Color::from_rgba(30, 30, 30, 255));

    let tx = px + 10.0;
    draw_text_label("LIGHTS OUT", tx, 30.0, 28.0, LIGHT_ON);

    if let Some(layout) = session.layout() {
        draw_text_label(layout.name, tx, 60.0, 18.0, WHITE);
        draw_text_label(layout.description, tx, 78.0, 14.0, GRAY);
    }

    draw_text_label("Moves:", tx, 110.0, 16.0, WHITE);
    draw_text_label(&session.move_count().to_string(), tx + 60.0, 110.0, 20.0, LIGHT_ON);

    if let Some(grid) = session.grid() {
        let lit = format!("{} lights on", grid.lit_count());
        draw_text_label(&lit, tx, 130.0, 14.0, GRAY);
    }

    let (status, color) = status_line(session.phase());
    draw_text_label(status, tx, 165.0, 22.0, color);

    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    let controls = [
        ("Click: toggle window", 12.0),
        ("1/2/3: difficulty", 12.0),
        ("R: restart  L: building", 12.0),
        ("Esc: quit", 12.0),
    ];
    let base_y = screen_height() - 70.0;
    for (i, (text, size)) in controls.iter().enumerate() {
        draw_text_label(text, tx, base_y + i as f32 * 14.0, *size, GRAY);
    }
}
