use std::fmt;

/// Lifecycle of one play-through.
/// `Uninitialized -> Generating -> Playing -> Solved`, and `Solved -> Generating` on restart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SessionPhase {
    /// No grid yet
    #[default]
    Uninitialized,
    /// Grid built, waiting for a difficulty to scramble the board
    Generating,
    /// Player input accepted
    Playing,
    /// Every light is off; input rejected until restart
    Solved,
}

impl SessionPhase {
    pub fn name(&self) -> &'static str {
        match self {
            SessionPhase::Uninitialized => "uninitialized",
            SessionPhase::Generating => "generating",
            SessionPhase::Playing => "playing",
            SessionPhase::Solved => "solved",
        }
    }

    pub fn accepts_moves(&self) -> bool {
        matches!(self, SessionPhase::Playing)
    }
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
