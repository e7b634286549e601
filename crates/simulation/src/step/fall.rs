//! Fall phase: derive the next grid from the current one.
//!
//! Every particle looks for a destination between its velocity reach and the
//! row directly below, farthest first. At each candidate row straight down
//! wins, then the randomly chosen diagonal, then the other one. Destinations
//! are judged against the current grid only, so two particles can claim the
//! same empty cell in one tick; the later one in column-major scan order
//! overwrites the earlier.

use super::StepParams;
use crate::grid::{Grid, EMPTY};
use crate::rng::RandomSource;

pub fn fall<R: RandomSource + ?Sized>(grid: &Grid, params: &StepParams, rng: &mut R) -> Grid {
    let mut next = grid.empty_like();
    let cols = grid.cols() as i32;
    let rows = grid.rows() as i32;

    for i in 0..cols {
        for j in 0..rows {
            let state = grid.hue(i, j);
            if state <= EMPTY {
                continue;
            }
            let velocity = grid.velocity(i, j);
            let next_velocity = (velocity + params.gravity).min(params.terminal_velocity);
            let (di, dj) = destination(grid, i, j, velocity, rng).unwrap_or((i, j));
            next.set(di, dj, state, next_velocity);
        }
    }
    next
}

fn destination<R: RandomSource + ?Sized>(
    grid: &Grid,
    i: i32,
    j: i32,
    velocity: f32,
    rng: &mut R,
) -> Option<(i32, i32)> {
    let last_row = grid.rows() as i64 - 1;
    let reach = (j as f32 + velocity).floor() as i64;
    let farthest = reach.clamp(i64::from(j), last_row) as i32;

    for y in (j + 1..=farthest).rev() {
        let direction = if rng.next_unit() < 0.5 { 1 } else { -1 };
        if grid.is_empty(i, y) {
            return Some((i, y));
        }
        if is_open(grid, i + direction, y) {
            return Some((i + direction, y));
        }
        if is_open(grid, i - direction, y) {
            return Some((i - direction, y));
        }
    }
    None
}

/// Off-grid columns count as occupied.
fn is_open(grid: &Grid, col: i32, row: i32) -> bool {
    grid.within_cols(col) && grid.is_empty(col, row)
}
