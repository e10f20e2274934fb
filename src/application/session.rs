use log::{debug, info, warn};

use crate::domain::{
    Grid, Layout, LightsOutError, Position, RandomSource, Result, SessionPhase, generate_solvable_board,
};

/// What a successful move did to the session
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Lights remain on, keep playing
    Continue,
    /// Every light is off
    Solved,
}

/// Session orchestrates one play-through.
/// It owns the grid, the layout the grid is rebuilt from, and the random source.
pub struct Session<S: RandomSource> {
    source: S,
    layout: Option<Layout>,
    grid: Option<Grid>,
    phase: SessionPhase,
    scramble: Vec<Position>,
}

impl<S: RandomSource> Session<S> {
    /// Create an empty session; nothing is playable until a layout is prepared
    pub fn new(source: S) -> Self {
        Self {
            source,
            layout: None,
            grid: None,
            phase: SessionPhase::Uninitialized,
            scramble: Vec::new(),
        }
    }

    /// Build a fresh grid from the layout and wait for a difficulty.
    /// A malformed layout leaves the session uninitialized.
    pub fn prepare(&mut self, layout: Layout) -> Result<()> {
        self.end_session();
        let grid = layout.build_grid()?;
        let (rows, columns) = grid.dimensions();
        info!("Prepared {} ({}x{})", layout.name, rows, columns);

        self.grid = Some(grid);
        self.layout = Some(layout);
        self.phase = SessionPhase::Generating;
        Ok(())
    }

    /// Scramble the prepared grid and start accepting moves
    pub fn begin(&mut self, target_move_count: usize) -> Result<()> {
        let phase = self.phase;
        let grid = match (phase, self.grid.as_mut()) {
            (SessionPhase::Generating, Some(grid)) => grid,
            _ => return Err(LightsOutError::InvalidState { action: "generate a board", phase }),
        };

        self.scramble = generate_solvable_board(grid, target_move_count, &mut self.source)?;
        info!(
            "Board generated: target {} moves, {} applied, {} lights on",
            target_move_count,
            self.scramble.len(),
            grid.lit_count()
        );
        self.phase = SessionPhase::Playing;
        Ok(())
    }

    /// Rectangular board in one step: prepare then begin
    pub fn start(&mut self, rows: usize, columns: usize, target_move_count: usize) -> Result<()> {
        self.prepare(Layout::rectangle(rows, columns))?;
        self.begin(target_move_count)
    }

    /// Apply a player move and check for the win
    pub fn submit_move(&mut self, row: usize, column: usize) -> Result<MoveOutcome> {
        let phase = self.phase;
        let grid = match (phase, self.grid.as_mut()) {
            (SessionPhase::Playing, Some(grid)) => grid,
            _ => {
                warn!("Move ({}, {}) ignored while {}", row, column, phase);
                return Err(LightsOutError::InvalidState { action: "submit a move", phase });
            }
        };

        if let Err(err) = grid.play_move(row, column) {
            warn!("Move rejected: {}", err);
            return Err(err);
        }
        debug!("Move {} at ({}, {}), {} lights on", grid.move_count(), row, column, grid.lit_count());

        if grid.is_solved() {
            info!("All windows off, you win! ({} moves)", grid.move_count());
            self.phase = SessionPhase::Solved;
            Ok(MoveOutcome::Solved)
        } else {
            Ok(MoveOutcome::Continue)
        }
    }

    /// Throw the board away and rebuild it from the same layout
    pub fn restart(&mut self) -> Result<()> {
        let Some(layout) = self.layout.take() else {
            return Err(LightsOutError::InvalidState { action: "restart", phase: self.phase });
        };
        info!("Restarting {}", layout.name);
        self.prepare(layout)
    }

    /// Drop the board and layout
    pub fn end_session(&mut self) {
        self.grid = None;
        self.layout = None;
        self.scramble.clear();
        self.phase = SessionPhase::Uninitialized;
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// True while moves are accepted
    pub fn is_game_active(&self) -> bool {
        self.phase.accepts_moves()
    }

    pub fn move_count(&self) -> u32 {
        self.grid.as_ref().map_or(0, Grid::move_count)
    }

    pub fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }

    pub fn layout(&self) -> Option<&Layout> {
        self.layout.as_ref()
    }

    /// Positions the generator played to scramble the current board
    pub fn scramble(&self) -> &[Position] {
        &self.scramble
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MalformedGrid, presets};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn session() -> Session<StdRng> {
        Session::new(StdRng::seed_from_u64(42))
    }

    #[test]
    fn test_new_session_is_uninitialized() {
        let s = session();
        assert_eq!(s.phase(), SessionPhase::Uninitialized);
        assert!(!s.is_game_active());
        assert_eq!(s.move_count(), 0);
        assert!(s.grid().is_none());
    }

    #[test]
    fn test_prepare_then_begin_enters_playing() {
        let mut s = session();
        s.prepare(presets::cottage()).unwrap();
        assert_eq!(s.phase(), SessionPhase::Generating);
        assert!(s.grid().unwrap().is_solved());

        s.begin(4).unwrap();
        assert_eq!(s.phase(), SessionPhase::Playing);
        assert_eq!(s.scramble().len(), 4);
        assert!(s.is_game_active());
    }

    #[test]
    fn test_begin_requires_generating() {
        let mut s = session();
        assert_eq!(
            s.begin(3),
            Err(LightsOutError::InvalidState { action: "generate a board", phase: SessionPhase::Uninitialized })
        );
        s.start(3, 3, 2).unwrap();
        assert!(matches!(s.begin(3), Err(LightsOutError::InvalidState { .. })));
    }

    #[test]
    fn test_move_before_generation_is_rejected() {
        let mut s = session();
        s.prepare(presets::cottage()).unwrap();
        let err = s.submit_move(0, 0).unwrap_err();
        assert_eq!(err, LightsOutError::InvalidState { action: "submit a move", phase: SessionPhase::Generating });
        assert!(s.grid().unwrap().is_solved());
    }

    #[test]
    fn test_out_of_bounds_keeps_playing() {
        let mut s = session();
        s.start(3, 3, 5).unwrap();
        let before = s.grid().unwrap().clone();
        assert!(matches!(s.submit_move(3, 0), Err(LightsOutError::OutOfBounds { .. })));
        assert_eq!(s.phase(), SessionPhase::Playing);
        assert_eq!(s.grid(), Some(&before));
        assert_eq!(s.move_count(), 0);
    }

    #[test]
    fn test_replaying_scramble_wins_and_locks_input() {
        let mut s = session();
        s.start(5, 5, 6).unwrap();
        let scramble = s.scramble().to_vec();
        let (last, rest) = scramble.split_last().unwrap();

        for p in rest {
            assert_eq!(s.submit_move(p.row, p.column), Ok(MoveOutcome::Continue));
        }
        assert_eq!(s.submit_move(last.row, last.column), Ok(MoveOutcome::Solved));
        assert_eq!(s.phase(), SessionPhase::Solved);
        assert_eq!(s.move_count(), 6);
        assert!(!s.is_game_active());

        assert!(matches!(s.submit_move(0, 0), Err(LightsOutError::InvalidState { .. })));
        assert!(s.grid().unwrap().is_solved());
    }

    #[test]
    fn test_restart_rebuilds_same_layout() {
        let mut s = session();
        s.prepare(presets::office()).unwrap();
        s.begin(3).unwrap();
        s.restart().unwrap();
        assert_eq!(s.phase(), SessionPhase::Generating);
        assert_eq!(s.layout().map(|l| l.name), Some("Office"));
        assert!(s.grid().unwrap().is_solved());
        assert!(s.scramble().is_empty());
    }

    #[test]
    fn test_restart_without_layout_fails() {
        let mut s = session();
        assert!(matches!(s.restart(), Err(LightsOutError::InvalidState { action: "restart", .. })));
    }

    #[test]
    fn test_malformed_layout_stays_uninitialized() {
        let mut s = session();
        let broken = Layout::new("Broken", "", vec![Position::new(0, 0), Position::new(1, 1)]);
        assert_eq!(
            s.prepare(broken),
            Err(LightsOutError::MalformedGrid(MalformedGrid::Missing { row: 0, column: 1, rows: 2, columns: 2 }))
        );
        assert_eq!(s.phase(), SessionPhase::Uninitialized);
        assert!(s.grid().is_none());
    }

    #[test]
    fn test_end_session_clears_everything() {
        let mut s = session();
        s.start(2, 2, 1).unwrap();
        s.end_session();
        assert_eq!(s.phase(), SessionPhase::Uninitialized);
        assert!(s.layout().is_none());
        assert!(s.restart().is_err());
    }

    #[test]
    fn test_zero_target_is_a_trivial_puzzle() {
        let mut s = session();
        s.start(3, 3, 0).unwrap();
        assert_eq!(s.phase(), SessionPhase::Playing);
        assert!(s.grid().unwrap().is_solved());
    }
}
