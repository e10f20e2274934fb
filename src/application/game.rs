use log::{info, warn};

use super::{MoveOutcome, Session, Settings};
use crate::domain::{Difficulty, Layout, Position, RandomSource, Result, presets};

/// Everything the player can ask for, already translated from clicks and keys
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Player selected a window
    Select(Position),
    /// Difficulty button pressed
    Begin(Difficulty),
    /// Play Again / restart
    Restart,
    /// Switch to the next building
    NextLayout,
    Quit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Game routes player commands to the session and keeps the building rotation
pub struct Game<S: RandomSource> {
    session: Session<S>,
    layouts: Vec<Layout>,
    layout_index: usize,
}

impl<S: RandomSource> Game<S> {
    /// Prepare the configured building and, if a difficulty is preset, start right away
    pub fn new(source: S, settings: &Settings) -> Result<Self> {
        let mut layouts = presets::all_layouts();
        let layout_index = match layouts.iter().position(|l| l.name == settings.layout.name) {
            Some(idx) => idx,
            None => {
                layouts.push(settings.layout.clone());
                layouts.len() - 1
            }
        };

        let mut session = Session::new(source);
        session.prepare(layouts[layout_index].clone())?;
        if let Some(difficulty) = settings.difficulty {
            session.begin(difficulty.target_moves())?;
        }

        Ok(Self { session, layouts, layout_index })
    }

    /// Apply one command. Rejected commands are logged and leave the game as it was.
    pub fn handle(&mut self, command: Command) -> Flow {
        let result = match command {
            Command::Select(Position { row, column }) => {
                self.session.submit_move(row, column).map(|outcome| {
                    if outcome == MoveOutcome::Solved {
                        info!("Solved {} in {} moves", self.current_layout().name, self.session.move_count());
                    }
                })
            }
            Command::Begin(difficulty) => {
                info!("Starting {} game", difficulty.name());
                self.session.begin(difficulty.target_moves())
            }
            Command::Restart => self.session.restart(),
            Command::NextLayout => {
                self.layout_index = (self.layout_index + 1) % self.layouts.len();
                self.session.prepare(self.layouts[self.layout_index].clone())
            }
            Command::Quit => return Flow::Quit,
        };

        if let Err(err) = result {
            warn!("{:?} rejected: {}", command, err);
        }
        Flow::Continue
    }

    pub fn session(&self) -> &Session<S> {
        &self.session
    }

    pub fn current_layout(&self) -> &Layout {
        &self.layouts[self.layout_index]
    }
}
