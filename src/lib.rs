// Domain layer - puzzle rules
pub mod domain;

// Application layer - session control and configuration
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, Difficulty, Grid, Layout, LightsOutError, Position, presets};
pub use application::{BoardView, Command, Flow, Game, MoveOutcome, Session, Settings};
pub use ui::Button;
