//! One simulation tick: optional painting, then the fall update.

mod fall;
mod paint;

pub use fall::fall;
pub use paint::paint;

use crate::grid::Grid;
use crate::hue::HueCursor;
use crate::rng::RandomSource;

/// Brush center in grid space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaintRequest {
    pub col: i32,
    pub row: i32,
}

impl PaintRequest {
    #[must_use]
    pub fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// Convert a pointer position in pixels. `None` for negative coordinates.
    #[must_use]
    pub fn from_pixel(x: i32, y: i32, cell_size: u32) -> Option<Self> {
        if x < 0 || y < 0 || cell_size == 0 {
            return None;
        }
        let w = cell_size as i32;
        Some(Self::new(x / w, y / w))
    }
}

/// Per-tick physics and brush parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepParams {
    pub gravity: f32,
    pub brush_size: usize,
    pub paint_probability: f32,
    pub painted_velocity: f32,
    pub terminal_velocity: f32,
}

/// Advance `current` by one tick.
///
/// `current` is consumed: painting mutates it in place, then the fall phase
/// builds a fresh grid from it. The returned hue is the cursor to pass to the
/// next call; it only moves when a paint request was applied.
pub fn step<R: RandomSource + ?Sized>(
    mut current: Grid,
    request: Option<PaintRequest>,
    hue: HueCursor,
    params: &StepParams,
    rng: &mut R,
) -> (Grid, HueCursor) {
    let hue = match request {
        Some(request) => paint(&mut current, request, hue, params, rng),
        None => hue,
    };
    (fall(&current, params, rng), hue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;
    use crate::rng::Scripted;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn pixel_conversion_divides_by_cell_size() {
        assert_eq!(PaintRequest::from_pixel(27, 9, 5), Some(PaintRequest::new(5, 1)));
        assert_eq!(PaintRequest::from_pixel(0, 0, 5), Some(PaintRequest::new(0, 0)));
        assert_eq!(PaintRequest::from_pixel(-1, 9, 5), None);
        assert_eq!(PaintRequest::from_pixel(3, 3, 0), None);
    }

    #[test]
    fn step_without_paint_keeps_hue() {
        let config = SimConfig::default();
        let grid = Grid::new(8, 8).unwrap();
        let hue = config.hue_cursor();
        let (next, next_hue) = step(grid, None, hue, &config.step_params(), &mut Scripted::constant(0.0));
        assert_eq!(next.occupied_count(), 0);
        assert_eq!(next_hue, hue);
    }

    #[test]
    fn painted_sand_falls_in_the_same_tick() {
        let config = SimConfig::default().with_brush(1, 1.0);
        let grid = Grid::new(8, 8).unwrap();
        let hue = config.hue_cursor();
        let (next, next_hue) = step(
            grid,
            Some(PaintRequest::new(3, 2)),
            hue,
            &config.step_params(),
            &mut Scripted::constant(0.0),
        );
        assert!(next.is_empty(3, 2));
        assert_eq!(next.hue(3, 3), hue.value());
        assert!(next_hue.value() > hue.value());
    }

    proptest! {
        #[test]
        fn prop_step_never_exceeds_painted_plus_existing(
            seed in any::<u64>(),
            col in -3i32..23,
            row in -3i32..23,
            ticks in 1usize..20,
        ) {
            let config = SimConfig::default().with_size(20, 20);
            let params = config.step_params();
            let mut rng = StdRng::seed_from_u64(seed);
            let mut grid = Grid::new(20, 20).unwrap();
            let mut hue = config.hue_cursor();
            for _ in 0..ticks {
                let before = grid.occupied_count();
                (grid, hue) = step(grid, Some(PaintRequest::new(col, row)), hue, &params, &mut rng);
                prop_assert_eq!((grid.cols(), grid.rows()), (20, 20));
                prop_assert!(grid.occupied_count() <= before + 25);
            }
        }
    }
}
