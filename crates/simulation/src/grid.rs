//! One frame of simulation state: per-cell hue and fall velocity.

use crate::error::{Result, SimError};

/// Hue stored in a cell that holds no sand.
pub const EMPTY: f32 = 0.0;

/// Occupancy and velocity arrays for a `cols × rows` grid, stored row-major.
///
/// Both arrays always share the grid's dimensions and are only ever swapped
/// as a pair, so a reader never sees one frame's hues next to another frame's
/// velocities. Accessors expect in-bounds coordinates; callers check
/// [`Grid::within_cols`] / [`Grid::within_rows`] first.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    cols: usize,
    rows: usize,
    hues: Vec<f32>,
    velocities: Vec<f32>,
}

impl Grid {
    /// Zero-filled grid. Fails when either dimension is zero.
    pub fn new(cols: usize, rows: usize) -> Result<Self> {
        if cols == 0 || rows == 0 {
            return Err(SimError::InvalidDimensions { cols, rows });
        }
        Ok(Self::zeroed(cols, rows))
    }

    fn zeroed(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            hues: vec![EMPTY; cols * rows],
            velocities: vec![0.0; cols * rows],
        }
    }

    /// Zero-sized stand-in for the live grid while a tick owns it.
    pub(crate) fn placeholder() -> Self {
        Self {
            cols: 0,
            rows: 0,
            hues: Vec::new(),
            velocities: Vec::new(),
        }
    }

    /// Fresh empty grid with the same dimensions.
    #[must_use]
    pub fn empty_like(&self) -> Self {
        Self::zeroed(self.cols, self.rows)
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn within_cols(&self, i: i32) -> bool {
        i >= 0 && (i as usize) < self.cols
    }

    #[must_use]
    pub fn within_rows(&self, j: i32) -> bool {
        j >= 0 && (j as usize) < self.rows
    }

    #[must_use]
    pub fn in_bounds(&self, i: i32, j: i32) -> bool {
        self.within_cols(i) && self.within_rows(j)
    }

    fn index(&self, i: i32, j: i32) -> usize {
        debug_assert!(
            self.in_bounds(i, j),
            "cell ({i}, {j}) outside {}x{} grid",
            self.cols,
            self.rows
        );
        j as usize * self.cols + i as usize
    }

    #[must_use]
    pub fn hue(&self, i: i32, j: i32) -> f32 {
        self.hues[self.index(i, j)]
    }

    #[must_use]
    pub fn velocity(&self, i: i32, j: i32) -> f32 {
        self.velocities[self.index(i, j)]
    }

    #[must_use]
    pub fn is_empty(&self, i: i32, j: i32) -> bool {
        self.hue(i, j) <= EMPTY
    }

    /// Write a cell's hue and velocity together.
    pub fn set(&mut self, i: i32, j: i32, hue: f32, velocity: f32) {
        let idx = self.index(i, j);
        self.hues[idx] = hue;
        self.velocities[idx] = velocity;
    }

    pub fn clear(&mut self) {
        self.hues.fill(EMPTY);
        self.velocities.fill(0.0);
    }

    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.hues.iter().filter(|&&h| h > EMPTY).count()
    }

    /// Row-major hue buffer.
    #[must_use]
    pub fn hues(&self) -> &[f32] {
        &self.hues
    }

    /// Row-major velocity buffer, aligned with [`Grid::hues`].
    #[must_use]
    pub fn velocities(&self) -> &[f32] {
        &self.velocities
    }
}
