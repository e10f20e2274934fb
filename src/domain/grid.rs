use std::collections::HashSet;

use super::{Cell, LightsOutError, MalformedGrid, Position, Result};

/// Grid owns every window of the building.
/// Cells are stored row-major and the grid is always dense.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
    move_count: u32,
}

impl Grid {
    /// Create a dense grid with every light off
    pub fn new(rows: usize, columns: usize) -> Result<Self> {
        if rows == 0 || columns == 0 {
            return Err(MalformedGrid::Empty.into());
        }
        let cells = (0..rows)
            .flat_map(|row| (0..columns).map(move |column| Cell::new(row, column)))
            .collect();
        Ok(Self { rows, columns, cells, move_count: 0 })
    }

    /// Build a grid from an unordered set of placed cells.
    /// Bounds are implied by the largest row and column; every position
    /// inside them must be covered exactly once. Incoming light state is discarded.
    pub fn from_cells<I>(cells: I) -> Result<Self>
    where
        I: IntoIterator<Item = Cell>,
    {
        let mut cells: Vec<Cell> = cells.into_iter().collect();

        let rows = cells.iter().map(Cell::row).max().ok_or(MalformedGrid::Empty)?.saturating_add(1);
        let columns = cells.iter().map(Cell::column).max().ok_or(MalformedGrid::Empty)?.saturating_add(1);

        let mut seen = HashSet::with_capacity(cells.len());
        for cell in &cells {
            if !seen.insert(cell.position()) {
                return Err(MalformedGrid::Duplicate { row: cell.row(), column: cell.column() }.into());
            }
        }

        if rows.checked_mul(columns) != Some(cells.len()) {
            // Fewer distinct cells than positions, so a hole shows up within the first len + 1 slots
            let hole = (0..rows)
                .flat_map(|row| (0..columns).map(move |column| Position::new(row, column)))
                .find(|position| !seen.contains(position))
                .unwrap_or_default();
            return Err(MalformedGrid::Missing { row: hole.row, column: hole.column, rows, columns }.into());
        }

        cells.sort_by_key(Cell::position);
        let cells = cells.into_iter().map(Cell::cleared).collect();
        Ok(Self { rows, columns, cells, move_count: 0 })
    }

    /// Get grid dimensions as (rows, columns)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, row: usize, column: usize) -> usize {
        row * self.columns + column
    }

    const fn contains(&self, row: usize, column: usize) -> bool {
        row < self.rows && column < self.columns
    }

    fn check_bounds(&self, row: usize, column: usize) -> Result<()> {
        if self.contains(row, column) {
            Ok(())
        } else {
            Err(LightsOutError::OutOfBounds { row, column, rows: self.rows, columns: self.columns })
        }
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, row: usize, column: usize) -> Option<&Cell> {
        self.contains(row, column).then(|| &self.cells[self.get_index(row, column)])
    }

    pub fn is_on(&self, row: usize, column: usize) -> Option<bool> {
        self.get(row, column).map(Cell::is_on)
    }

    /// Positions a move at (row, column) would toggle: the target first,
    /// then whichever of up, down, left and right exist.
    pub fn footprint(&self, row: usize, column: usize) -> Result<Vec<Position>> {
        self.check_bounds(row, column)?;

        let up = row.checked_sub(1).map(|r| Position::new(r, column));
        let down = (row + 1 < self.rows).then(|| Position::new(row + 1, column));
        let left = column.checked_sub(1).map(|c| Position::new(row, c));
        let right = (column + 1 < self.columns).then(|| Position::new(row, column + 1));

        Ok(std::iter::once(Position::new(row, column))
            .chain([up, down, left, right].into_iter().flatten())
            .collect())
    }

    /// Toggle the target and its orthogonal neighbours.
    /// Out-of-bounds targets are rejected without touching the board.
    pub fn apply_move(&mut self, row: usize, column: usize) -> Result<()> {
        for position in self.footprint(row, column)? {
            let idx = self.get_index(position.row, position.column);
            self.cells[idx].toggle();
        }
        Ok(())
    }

    /// A move made by the player: applies it and bumps the move counter
    pub fn play_move(&mut self, row: usize, column: usize) -> Result<()> {
        self.apply_move(row, column)?;
        self.move_count += 1;
        Ok(())
    }

    pub const fn move_count(&self) -> u32 {
        self.move_count
    }

    pub(crate) fn reset_move_count(&mut self) {
        self.move_count = 0;
    }

    /// The puzzle is won when every light is off
    pub fn is_solved(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_on())
    }

    pub fn lit_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_on()).count()
    }

    /// All cells in row-major order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Every position in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells.iter().map(Cell::position)
    }
}
