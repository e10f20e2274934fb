mod board_view;
mod game;
mod session;
mod settings;

pub use board_view::BoardView;
pub use game::{Command, Flow, Game};
pub use session::{MoveOutcome, Session};
pub use settings::Settings;
