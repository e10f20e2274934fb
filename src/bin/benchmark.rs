//! Board generation benchmark across buildings and difficulties.
//! Each board is scrambled from its own seed on the rayon pool, then
//! replayed to confirm it clears.

use std::time::Instant;

use lights_out::domain::{Difficulty, Layout, Result, generate_solvable_board, presets};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;

struct Report {
    avg_lit: f64,
    trivial_pct: f64,
    micros_per_board: f64,
    unsolvable: usize,
}

/// Scramble one board and replay it. Returns (lights on after scramble, cleared by replay).
fn scramble_and_replay(layout: &Layout, difficulty: Difficulty, seed: u64) -> Result<(usize, bool)> {
    let mut grid = layout.build_grid()?;
    let mut rng = StdRng::seed_from_u64(seed);
    let scramble = generate_solvable_board(&mut grid, difficulty.target_moves(), &mut rng)?;
    let lit = grid.lit_count();

    for position in &scramble {
        grid.play_move(position.row, position.column)?;
    }
    Ok((lit, grid.is_solved()))
}

fn benchmark(layout: &Layout, difficulty: Difficulty, boards: u64) -> Result<Report> {
    let start = Instant::now();
    let results = (0..boards)
        .into_par_iter()
        .map(|seed| scramble_and_replay(layout, difficulty, seed))
        .collect::<Result<Vec<_>>>()?;
    let elapsed = start.elapsed();

    let lit_total: usize = results.iter().map(|(lit, _)| lit).sum();
    let trivial = results.iter().filter(|(lit, _)| *lit == 0).count();
    let unsolvable = results.iter().filter(|(_, solved)| !solved).count();

    Ok(Report {
        avg_lit: lit_total as f64 / boards as f64,
        trivial_pct: trivial as f64 * 100.0 / boards as f64,
        micros_per_board: elapsed.as_secs_f64() * 1_000_000.0 / boards as f64,
        unsolvable,
    })
}

fn main() -> Result<()> {
    env_logger::init();
    println!("=== Lights Out Generation Benchmark ===\n");

    let boards = 100_000;

    println!("{:>12} {:>8} {:>10} {:>10} {:>12} {:>11}",
        "Building", "Level", "Avg lit", "Trivial", "us/board", "Unsolvable");
    println!("{:-<68}", "");

    for layout in presets::all_layouts() {
        for difficulty in Difficulty::all() {
            let report = benchmark(&layout, difficulty, boards)?;
            println!(
                "{:>12} {:>8} {:>10.2} {:>9.3}% {:>12.3} {:>11}",
                layout.name,
                difficulty.name(),
                report.avg_lit,
                report.trivial_pct,
                report.micros_per_board,
                report.unsolvable
            );
        }
    }

    Ok(())
}
