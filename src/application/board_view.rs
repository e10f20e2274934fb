use crate::domain::Position;

/// BoardView maps the building facade onto the screen.
/// The board is scaled to fit the drawing area and centered in it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoardView {
    pub origin_x: f32,
    pub origin_y: f32,
    /// Side of one window slot (window plus gap)
    pub slot: f32,
    /// Empty space between neighbouring windows
    pub gap: f32,
    rows: usize,
    columns: usize,
}

impl BoardView {
    /// Fit a rows x columns board into the given area
    pub fn fit(rows: usize, columns: usize, area_width: f32, area_height: f32, gap: f32) -> Self {
        let rows_f = rows.max(1) as f32;
        let columns_f = columns.max(1) as f32;
        let slot = (area_width / columns_f).min(area_height / rows_f).max(1.0);
        Self {
            origin_x: (area_width - slot * columns_f) / 2.0,
            origin_y: (area_height - slot * rows_f) / 2.0,
            slot,
            gap: gap.min(slot / 2.0),
            rows,
            columns,
        }
    }

    /// Size of the lit window inside its slot
    pub fn window_size(&self) -> f32 {
        self.slot - self.gap
    }

    /// Convert screen coordinates to a board position, if they land on the board
    pub fn screen_to_cell(&self, screen_x: f32, screen_y: f32) -> Option<Position> {
        let local_x = screen_x - self.origin_x;
        let local_y = screen_y - self.origin_y;
        if local_x < 0.0 || local_y < 0.0 {
            return None;
        }

        let column = (local_x / self.slot) as usize;
        let row = (local_y / self.slot) as usize;
        (row < self.rows && column < self.columns).then(|| Position::new(row, column))
    }

    /// Top-left corner of the window drawn for a position
    pub fn cell_to_screen(&self, position: Position) -> (f32, f32) {
        let half_gap = self.gap / 2.0;
        (
            self.origin_x + position.column as f32 * self.slot + half_gap,
            self.origin_y + position.row as f32 * self.slot + half_gap,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_centers_square_board_in_wide_area() {
        let view = BoardView::fit(5, 5, 800.0, 500.0, 4.0);
        assert_eq!(view.slot, 100.0);
        assert_eq!(view.origin_x, 150.0);
        assert_eq!(view.origin_y, 0.0);
    }

    #[test]
    fn test_screen_to_cell_round_trips_window_center() {
        let view = BoardView::fit(6, 5, 600.0, 600.0, 6.0);
        let (x, y) = view.cell_to_screen(Position::new(4, 2));
        let half = view.window_size() / 2.0;
        assert_eq!(view.screen_to_cell(x + half, y + half), Some(Position::new(4, 2)));
    }

    #[test]
    fn test_clicks_outside_board_are_ignored() {
        let view = BoardView::fit(3, 3, 900.0, 300.0, 2.0);
        assert_eq!(view.screen_to_cell(10.0, 10.0), None);
        assert_eq!(view.screen_to_cell(650.0, 150.0), None);
        assert_eq!(view.screen_to_cell(450.0, 350.0), None);
        assert_eq!(view.screen_to_cell(450.0, 150.0), Some(Position::new(1, 1)));
    }
}
