use super::{Cell, Grid, Position, Result};

/// A named set of window positions a grid is built from
#[derive(Clone, Debug)]
pub struct Layout {
    pub name: &'static str,
    pub description: &'static str,
    positions: Vec<Position>,
}

impl Layout {
    /// Create a layout from window positions (any order)
    pub fn new(name: &'static str, description: &'static str, positions: Vec<Position>) -> Self {
        Self { name, description, positions }
    }

    /// Full rectangular facade
    pub fn rectangle(rows: usize, columns: usize) -> Self {
        let positions = (0..rows)
            .flat_map(|row| (0..columns).map(move |column| Position::new(row, column)))
            .collect();
        Self::new("Custom", "Rectangular facade", positions)
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Fresh cells, all lights off
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.positions.iter().map(|p| Cell::new(p.row, p.column))
    }

    /// Build the grid; fails if the positions leave holes
    pub fn build_grid(&self) -> Result<Grid> {
        Grid::from_cells(self.cells())
    }
}

/// Built-in buildings
pub mod presets {
    use super::*;

    /// Small 3x3 facade
    pub fn cottage() -> Layout {
        Layout { name: "Cottage", description: "3x3 windows", ..Layout::rectangle(3, 3) }
    }

    pub fn townhouse() -> Layout {
        Layout { name: "Townhouse", description: "4x4 windows", ..Layout::rectangle(4, 4) }
    }

    /// Classic 5x5 board
    pub fn apartment() -> Layout {
        Layout { name: "Apartment", description: "5x5 windows", ..Layout::rectangle(5, 5) }
    }

    /// Tall building, six floors of five windows
    pub fn office() -> Layout {
        Layout { name: "Office", description: "6 floors x 5 windows", ..Layout::rectangle(6, 5) }
    }

    /// Get all available layouts
    pub fn all_layouts() -> Vec<Layout> {
        vec![cottage(), townhouse(), apartment(), office()]
    }

    pub fn default_layout() -> Layout {
        apartment()
    }

    /// Look up a preset by name, ignoring case
    pub fn find(name: &str) -> Option<Layout> {
        all_layouts().into_iter().find(|layout| layout.name.eq_ignore_ascii_case(name))
    }
}
