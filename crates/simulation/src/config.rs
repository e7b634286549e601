//! Simulation settings and their validation.

use crate::error::{Result, SimError};
use crate::hue::HueCursor;
use crate::step::StepParams;

/// Everything a [`crate::Simulation`] needs to start.
///
/// `cell_size` and `fps` are only consumed by the host's presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    pub cols: usize,
    pub rows: usize,
    /// Edge length of one cell in pixels.
    pub cell_size: u32,
    pub fps: u32,
    /// Velocity added to every particle each tick.
    pub gravity: f32,
    /// Side length of the square brush, in cells. Odd.
    pub brush_size: usize,
    /// Chance that each brush cell receives sand.
    pub paint_probability: f32,
    pub initial_hue: f32,
    pub hue_step: f32,
    pub hue_min: f32,
    pub hue_max: f32,
    /// Velocity given to freshly painted sand.
    pub painted_velocity: f32,
    /// Upper bound on stored fall velocity. `f32::INFINITY` disables the cap.
    pub terminal_velocity: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            cols: 160,
            rows: 120,
            cell_size: 5,
            fps: 100,
            gravity: 0.1,
            brush_size: 5,
            paint_probability: 0.75,
            initial_hue: 200.0,
            hue_step: 0.001,
            hue_min: 1.0,
            hue_max: 2.0,
            painted_velocity: 1.0,
            terminal_velocity: 8.0,
        }
    }
}

impl SimConfig {
    #[must_use]
    pub fn with_size(mut self, cols: usize, rows: usize) -> Self {
        self.cols = cols;
        self.rows = rows;
        self
    }

    #[must_use]
    pub fn with_cell_size(mut self, cell_size: u32) -> Self {
        self.cell_size = cell_size;
        self
    }

    #[must_use]
    pub fn with_gravity(mut self, gravity: f32) -> Self {
        self.gravity = gravity;
        self
    }

    #[must_use]
    pub fn with_brush(mut self, brush_size: usize, paint_probability: f32) -> Self {
        self.brush_size = brush_size;
        self.paint_probability = paint_probability;
        self
    }

    #[must_use]
    pub fn with_terminal_velocity(mut self, terminal_velocity: f32) -> Self {
        self.terminal_velocity = terminal_velocity;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.cols == 0 || self.rows == 0 {
            return Err(SimError::InvalidDimensions {
                cols: self.cols,
                rows: self.rows,
            });
        }
        if self.cell_size == 0 {
            return Err(SimError::InvalidCellSize(self.cell_size));
        }
        if !self.gravity.is_finite() {
            return Err(SimError::InvalidGravity(self.gravity));
        }
        if self.brush_size % 2 == 0 {
            return Err(SimError::InvalidBrush(self.brush_size));
        }
        if !(0.0..=1.0).contains(&self.paint_probability) {
            return Err(SimError::InvalidProbability(self.paint_probability));
        }
        if !(self.hue_min.is_finite() && self.hue_max.is_finite())
            || self.hue_min <= 0.0
            || self.hue_min >= self.hue_max
        {
            return Err(SimError::InvalidHueRange {
                min: self.hue_min,
                max: self.hue_max,
            });
        }
        if !self.hue_step.is_finite() || self.hue_step < 0.0 {
            return Err(SimError::InvalidHueStep(self.hue_step));
        }
        if !self.initial_hue.is_finite() {
            return Err(SimError::InvalidInitialHue(self.initial_hue));
        }
        if !self.painted_velocity.is_finite() {
            return Err(SimError::InvalidPaintedVelocity(self.painted_velocity));
        }
        if self.terminal_velocity.is_nan() || self.terminal_velocity <= 0.0 {
            return Err(SimError::InvalidTerminalVelocity(self.terminal_velocity));
        }
        Ok(())
    }

    #[must_use]
    pub fn step_params(&self) -> StepParams {
        StepParams {
            gravity: self.gravity,
            brush_size: self.brush_size,
            paint_probability: self.paint_probability,
            painted_velocity: self.painted_velocity,
            terminal_velocity: self.terminal_velocity,
        }
    }

    #[must_use]
    pub fn hue_cursor(&self) -> HueCursor {
        HueCursor::new(self.initial_hue, self.hue_step, self.hue_min, self.hue_max)
    }
}
