use macroquad::prelude::*;

use crate::application::Command;

/// Clickable panel button bound to the command it issues
#[derive(Clone)]
pub struct Button {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    label: String,
    command: Command,
    color: Color,
    hover_color: Color,
}

impl Button {
    pub fn new(x: f32, y: f32, width: f32, height: f32, label: impl Into<String>, command: Command) -> Self {
        Self {
            x,
            y,
            width,
            height,
            label: label.into(),
            command,
            color: Color::from_rgba(40, 52, 84, 255),
            hover_color: Color::from_rgba(230, 180, 60, 255),
        }
    }

    /// Check if the pointer is over the button
    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        Rect::new(self.x, self.y, self.width, self.height).contains(vec2(mouse_pos.0, mouse_pos.1))
    }

    /// Draw button; hovered buttons light up like a window
    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let (fill, text_color) = if self.is_hovered(mouse_pos) {
            (self.hover_color, BLACK)
        } else {
            (self.color, WHITE)
        };

        draw_rectangle(self.x, self.y, self.width, self.height, fill);
        draw_rectangle_lines(self.x, self.y, self.width, self.height, 2.0, WHITE);

        let text_size = measure_text(&self.label, None, 20, 1.0);
        draw_text(
            &self.label,
            self.x + (self.width - text_size.width) / 2.0,
            self.y + (self.height + text_size.height) / 2.0,
            20.0,
            text_color,
        );
    }

    /// Command issued if the button was clicked this frame
    pub fn clicked(&self, mouse_pos: (f32, f32)) -> Option<Command> {
        (self.is_hovered(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)).then_some(self.command)
    }
}
