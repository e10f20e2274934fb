/// A `(row, column)` address on the board.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

/// Cell is a single window on the building.
/// Its identity never changes; only the light can be switched.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Cell {
    row: usize,
    column: usize,
    is_on: bool,
}

impl Cell {
    /// Create a cell at the given position with the light off
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column, is_on: false }
    }

    pub const fn row(&self) -> usize {
        self.row
    }

    pub const fn column(&self) -> usize {
        self.column
    }

    pub const fn position(&self) -> Position {
        Position::new(self.row, self.column)
    }

    /// Check if the light is currently on
    pub const fn is_on(&self) -> bool {
        self.is_on
    }

    /// Flip the light
    pub fn toggle(&mut self) {
        self.is_on = !self.is_on;
    }

    /// Same identity, light switched off
    pub(crate) const fn cleared(self) -> Self {
        Self::new(self.row, self.column)
    }
}
