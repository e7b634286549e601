//! Construction-time errors. Stepping itself never fails.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    #[error("grid dimensions must be non-zero, got {cols}x{rows}")]
    InvalidDimensions { cols: usize, rows: usize },
    #[error("cell size must be non-zero")]
    InvalidCellSize(u32),
    #[error("gravity must be finite, got {0}")]
    InvalidGravity(f32),
    #[error("brush size {0} must be odd and non-zero")]
    InvalidBrush(usize),
    #[error("paint probability {0} must be between 0.0 and 1.0")]
    InvalidProbability(f32),
    #[error("hue range [{min}, {max}) must be finite, positive and non-empty")]
    InvalidHueRange { min: f32, max: f32 },
    #[error("hue step {0} must be finite and non-negative")]
    InvalidHueStep(f32),
    #[error("initial hue must be finite, got {0}")]
    InvalidInitialHue(f32),
    #[error("painted velocity must be finite, got {0}")]
    InvalidPaintedVelocity(f32),
    #[error("terminal velocity {0} must be positive")]
    InvalidTerminalVelocity(f32),
}

pub type Result<T> = std::result::Result<T, SimError>;
