//! Frame driver: owns the live grid and carries state between ticks.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::SimConfig;
use crate::error::Result;
use crate::grid::Grid;
use crate::hue::HueCursor;
use crate::rng::RandomSource;
use crate::step::{step, PaintRequest, StepParams};

/// Live simulation state. Exactly one grid is live; `tick` replaces it.
#[derive(Debug)]
pub struct Simulation<R> {
    config: SimConfig,
    params: StepParams,
    grid: Grid,
    hue: HueCursor,
    pointer: Option<PaintRequest>,
    frame: u64,
    rng: R,
}

impl Simulation<StdRng> {
    pub fn with_seed(config: SimConfig, seed: u64) -> Result<Self> {
        Self::new(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: RandomSource> Simulation<R> {
    pub fn new(config: SimConfig, rng: R) -> Result<Self> {
        config.validate()?;
        let grid = Grid::new(config.cols, config.rows)?;
        log::info!(
            "sandbox {}x{} cells at {}px, gravity {}",
            config.cols,
            config.rows,
            config.cell_size,
            config.gravity
        );
        Ok(Self {
            params: config.step_params(),
            hue: config.hue_cursor(),
            config,
            grid,
            pointer: None,
            frame: 0,
            rng,
        })
    }

    /// Hold the pointer down over a cell; every tick paints there until [`Self::release`].
    pub fn press(&mut self, request: PaintRequest) {
        self.pointer = Some(request);
    }

    /// Like [`Self::press`] with a pixel position. Negative positions release the pointer.
    pub fn press_at_pixel(&mut self, x: i32, y: i32) {
        self.pointer = PaintRequest::from_pixel(x, y, self.config.cell_size);
    }

    pub fn release(&mut self) {
        self.pointer = None;
    }

    pub fn tick(&mut self) {
        let current = std::mem::replace(&mut self.grid, Grid::placeholder());
        let (next, hue) = step(current, self.pointer, self.hue, &self.params, &mut self.rng);
        self.grid = next;
        self.hue = hue;
        self.frame += 1;
        log::trace!(
            "frame {}: {} occupied, hue {:.3}",
            self.frame,
            self.grid.occupied_count(),
            self.hue.value()
        );
    }

    /// Empty the grid. The hue cursor keeps its position.
    pub fn clear(&mut self) {
        self.grid.clear();
    }

    pub fn set_gravity(&mut self, gravity: f32) {
        if gravity.is_finite() {
            self.config.gravity = gravity;
            self.params.gravity = gravity;
        } else {
            log::warn!("ignoring non-finite gravity {gravity}");
        }
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn hue(&self) -> HueCursor {
        self.hue
    }

    #[must_use]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    #[must_use]
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    #[must_use]
    pub fn pointer(&self) -> Option<PaintRequest> {
        self.pointer
    }
}
