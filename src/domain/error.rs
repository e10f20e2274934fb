//! Error types for the puzzle engine and session controller.

use thiserror::Error;

use super::SessionPhase;

pub type Result<T> = std::result::Result<T, LightsOutError>;

/// Reasons a set of cells cannot form a grid
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedGrid {
    #[error("grid has no cells")]
    Empty,

    #[error("cell ({row}, {column}) appears more than once")]
    Duplicate { row: usize, column: usize },

    #[error("no cell at ({row}, {column}) in a {rows}x{columns} layout")]
    Missing {
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LightsOutError {
    #[error("malformed grid: {0}")]
    MalformedGrid(#[from] MalformedGrid),

    #[error("position ({row}, {column}) is outside the {rows}x{columns} grid")]
    OutOfBounds {
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },

    #[error("cannot {action} while the session is {phase}")]
    InvalidState {
        action: &'static str,
        phase: SessionPhase,
    },

    #[error("board must start with every light off, found {lit} lit")]
    BoardNotCleared { lit: usize },
}
