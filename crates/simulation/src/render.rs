//! What a renderer draws for a committed grid.

use crate::color::{hsl_to_rgb, Rgb};
use crate::grid::Grid;

/// Color of sand stored with hue `hue`.
#[must_use]
pub fn cell_color(hue: f32) -> Rgb {
    hsl_to_rgb(hue - 1.0, 1.0, 1.0)
}

/// Filled square covering one occupied cell, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRect {
    pub x: u32,
    pub y: u32,
    pub size: u32,
    pub color: Rgb,
}

/// Squares for every occupied cell, scanning column by column.
pub fn cell_rects(grid: &Grid, cell_size: u32) -> impl Iterator<Item = CellRect> + '_ {
    let rows = grid.rows() as i32;
    (0..grid.cols() as i32)
        .flat_map(move |i| (0..rows).map(move |j| (i, j)))
        .filter(move |&(i, j)| !grid.is_empty(i, j))
        .map(move |(i, j)| CellRect {
            x: i as u32 * cell_size,
            y: j as u32 * cell_size,
            size: cell_size,
            color: cell_color(grid.hue(i, j)),
        })
}

/// Fill `buf` with one opaque RGBA8 pixel per cell, row-major. Empty cells are black.
///
/// # Panics
///
/// Panics if `buf` is not exactly `cols * rows * 4` bytes.
pub fn write_rgba(grid: &Grid, buf: &mut [u8]) {
    assert_eq!(buf.len(), grid.hues().len() * 4, "RGBA buffer size mismatch");
    for (px, &hue) in buf.chunks_exact_mut(4).zip(grid.hues()) {
        let c = if hue > 0.0 { cell_color(hue) } else { Rgb::default() };
        px.copy_from_slice(&[c.r, c.g, c.b, 255]);
    }
}
