//! Paint phase: scatter sand into a square brush around the pointer.

use super::{PaintRequest, StepParams};
use crate::grid::Grid;
use crate::hue::HueCursor;
use crate::rng::RandomSource;

/// Paint into `grid` in place and return the advanced hue cursor.
///
/// Every brush offset draws once, in column-major order, even when its target
/// falls off the grid; in-bounds hits receive the cursor's hue and
/// `painted_velocity`.
pub fn paint<R: RandomSource + ?Sized>(
    grid: &mut Grid,
    request: PaintRequest,
    hue: HueCursor,
    params: &StepParams,
    rng: &mut R,
) -> HueCursor {
    let extent = (params.brush_size / 2) as i32;
    let mut touched_grid = false;
    for di in -extent..=extent {
        for dj in -extent..=extent {
            if rng.next_unit() < params.paint_probability {
                let col = request.col + di;
                let row = request.row + dj;
                if grid.within_cols(col) && grid.within_rows(row) {
                    grid.set(col, row, hue.value(), params.painted_velocity);
                    touched_grid = true;
                }
            }
        }
    }
    if !touched_grid && !brush_overlaps(grid, request, extent) {
        log::warn!(
            "paint at ({}, {}) is outside the {}x{} grid",
            request.col,
            request.row,
            grid.cols(),
            grid.rows()
        );
    }
    hue.advanced()
}

fn brush_overlaps(grid: &Grid, request: PaintRequest, extent: i32) -> bool {
    (-extent..=extent).any(|d| grid.within_cols(request.col + d))
        && (-extent..=extent).any(|d| grid.within_rows(request.row + d))
}
