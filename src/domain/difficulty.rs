//! Difficulty levels offered on the start panel.
//!
//! A difficulty is only a target move count for the scrambler; the
//! generator caps it at the number of windows.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Get all difficulties in panel order
    pub fn all() -> Vec<Difficulty> {
        vec![Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
    }

    /// Number of random moves used to scramble the board
    pub fn target_moves(&self) -> usize {
        match self {
            Difficulty::Easy => 3,
            Difficulty::Medium => 7,
            Difficulty::Hard => 12,
        }
    }

    /// Display name for UI
    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Difficulty::Easy => "3 scrambling moves",
            Difficulty::Medium => "7 scrambling moves",
            Difficulty::Hard => "12 scrambling moves",
        }
    }

    /// Parse a name such as `easy` or `HARD`
    pub fn from_name(name: &str) -> Option<Difficulty> {
        Self::all().into_iter().find(|d| d.name().eq_ignore_ascii_case(name.trim()))
    }
}
