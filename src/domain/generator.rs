//! Solvable board generation.
//!
//! Every move is its own inverse, so scrambling a cleared board with real
//! moves always yields a board the player can clear again: replaying the
//! same positions in any order switches every light back off.

use rand::Rng;

use super::{Grid, LightsOutError, Position, Result};

/// Source of uniform picks for the scrambler.
/// Implemented for every `rand::Rng`; tests can script their own picks.
pub trait RandomSource {
    /// Return an index in `0..len`. `len` is never zero.
    fn pick_index(&mut self, len: usize) -> usize;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn pick_index(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}

/// Scramble a cleared grid with `min(target_move_count, rows * columns)` distinct
/// random moves and reset its move counter.
///
/// Returns the positions that were played, in order.
pub fn generate_solvable_board<S>(
    grid: &mut Grid,
    target_move_count: usize,
    source: &mut S,
) -> Result<Vec<Position>>
where
    S: RandomSource + ?Sized,
{
    let lit = grid.lit_count();
    if lit > 0 {
        return Err(LightsOutError::BoardNotCleared { lit });
    }

    let mut remaining: Vec<Position> = grid.positions().collect();
    let moves = target_move_count.min(remaining.len());
    let mut scramble = Vec::with_capacity(moves);

    for _ in 0..moves {
        // Draw over the whole remaining set, then drop the pick so it can't repeat
        let idx = source.pick_index(remaining.len());
        let position = remaining.swap_remove(idx);
        grid.apply_move(position.row, position.column)?;
        scramble.push(position);
    }

    grid.reset_move_count();
    Ok(scramble)
}
