//! End-to-end session flows through the public API.

use lights_out::domain::{
    Layout, LightsOutError, MalformedGrid, Position, RandomSource, SessionPhase, presets,
};
use lights_out::{MoveOutcome, Session};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Always picks the same slot of the remaining positions
struct FixedPick(usize);

impl RandomSource for FixedPick {
    fn pick_index(&mut self, len: usize) -> usize {
        self.0.min(len - 1)
    }
}

#[test]
fn center_scramble_is_solved_by_center_move() {
    let mut session = Session::new(FixedPick(4));
    session.start(3, 3, 1).unwrap();
    assert_eq!(session.scramble(), &[Position::new(1, 1)]);

    let grid = session.grid().unwrap();
    let lit: Vec<_> = grid
        .cells()
        .iter()
        .filter(|cell| cell.is_on())
        .map(|cell| (cell.row(), cell.column()))
        .collect();
    assert_eq!(lit, vec![(0, 1), (1, 0), (1, 1), (1, 2), (2, 1)]);

    assert_eq!(session.submit_move(1, 1), Ok(MoveOutcome::Solved));
    assert!(session.grid().unwrap().is_solved());
    assert_eq!(session.phase(), SessionPhase::Solved);
    assert_eq!(session.move_count(), 1);
}

#[test]
fn layout_missing_a_window_fails_to_start() {
    let positions: Vec<Position> = (0..3)
        .flat_map(|r| (0..3).map(move |c| Position::new(r, c)))
        .filter(|p| *p != Position::new(2, 2))
        .collect();
    let mut session = Session::new(StdRng::seed_from_u64(1));

    let err = session.prepare(Layout::new("Gap", "3x3 without a corner", positions)).unwrap_err();
    assert_eq!(
        err,
        LightsOutError::MalformedGrid(MalformedGrid::Missing { row: 2, column: 2, rows: 3, columns: 3 })
    );
    assert_eq!(session.phase(), SessionPhase::Uninitialized);
    assert!(matches!(session.begin(3), Err(LightsOutError::InvalidState { .. })));
}

#[test]
fn phases_follow_the_session_lifecycle() {
    let mut session = Session::new(StdRng::seed_from_u64(77));
    assert_eq!(session.phase(), SessionPhase::Uninitialized);

    session.prepare(presets::townhouse()).unwrap();
    assert_eq!(session.phase(), SessionPhase::Generating);
    assert!(!session.is_game_active());

    session.begin(5).unwrap();
    assert_eq!(session.phase(), SessionPhase::Playing);
    assert!(session.is_game_active());

    let scramble = session.scramble().to_vec();
    let mut outcome = MoveOutcome::Continue;
    for p in &scramble {
        outcome = session.submit_move(p.row, p.column).unwrap();
    }
    assert_eq!(outcome, MoveOutcome::Solved);
    assert_eq!(session.phase(), SessionPhase::Solved);
    assert_eq!(session.move_count(), scramble.len() as u32);

    session.restart().unwrap();
    assert_eq!(session.phase(), SessionPhase::Generating);
    assert_eq!(session.move_count(), 0);
    assert_eq!(session.grid().unwrap().dimensions(), (4, 4));
}

#[test]
fn wasted_moves_still_count() {
    let mut session = Session::new(FixedPick(0));
    session.start(2, 2, 1).unwrap();

    assert_eq!(session.submit_move(1, 1), Ok(MoveOutcome::Continue));
    assert_eq!(session.submit_move(1, 1), Ok(MoveOutcome::Continue));
    assert!(matches!(session.submit_move(5, 5), Err(LightsOutError::OutOfBounds { .. })));
    assert_eq!(session.move_count(), 2);
    assert_eq!(session.submit_move(0, 0), Ok(MoveOutcome::Solved));
    assert_eq!(session.move_count(), 3);
}

#[test]
fn single_window_building() {
    let mut session = Session::new(FixedPick(0));
    session.start(1, 1, 10).unwrap();
    assert_eq!(session.scramble().len(), 1);
    assert_eq!(session.grid().unwrap().lit_count(), 1);
    assert_eq!(session.submit_move(0, 0), Ok(MoveOutcome::Solved));
}
