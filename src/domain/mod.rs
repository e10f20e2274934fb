mod cell;
mod difficulty;
mod error;
mod generator;
mod grid;
mod layout;
mod phase;

pub use cell::{Cell, Position};
pub use difficulty::Difficulty;
pub use error::{LightsOutError, MalformedGrid, Result};
pub use generator::{RandomSource, generate_solvable_board};
pub use grid::Grid;
pub use layout::{Layout, presets};
pub use phase::SessionPhase;
