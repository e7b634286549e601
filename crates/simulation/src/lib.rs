//! Velocity-driven falling sand simulation.
//!
//! Sand painted into a grid falls under gravity, sliding diagonally when the
//! cell below is taken. [`step::step`] is the pure per-tick update;
//! [`Simulation`] carries state between ticks and [`Universe`] exposes it to
//! JavaScript.

pub mod color;
pub mod config;
pub mod error;
pub mod grid;
pub mod hue;
pub mod render;
pub mod rng;
pub mod simulation;
pub mod step;

pub use config::SimConfig;
pub use error::SimError;
pub use grid::Grid;
pub use simulation::Simulation;

use rand::rngs::StdRng;
use step::PaintRequest;
use wasm_bindgen::prelude::*;

/// WASM-facing simulation with an RGBA frame buffer for zero-copy reads.
#[wasm_bindgen]
#[derive(Debug)]
pub struct Universe {
    sim: Simulation<StdRng>,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl Universe {
    /// `seed` drives painting and slide tie-breaks; pass a fresh random value per session.
    #[wasm_bindgen(constructor)]
    pub fn new(
        cols: usize,
        rows: usize,
        cell_size: u32,
        seed: u64,
    ) -> std::result::Result<Universe, JsError> {
        let config = SimConfig::default()
            .with_size(cols, rows)
            .with_cell_size(cell_size);
        let sim = Simulation::with_seed(config, seed)?;
        let mut universe = Self {
            pixels: vec![0; cols * rows * 4],
            sim,
        };
        universe.refresh_pixels();
        Ok(universe)
    }

    /// Hold the pointer down over cell `(col, row)`.
    pub fn press(&mut self, col: i32, row: i32) {
        self.sim.press(PaintRequest::new(col, row));
    }

    /// Hold the pointer down at a canvas pixel position.
    pub fn press_at_pixel(&mut self, x: i32, y: i32) {
        self.sim.press_at_pixel(x, y);
    }

    pub fn release(&mut self) {
        self.sim.release();
    }

    /// Advance one frame and refresh the pixel buffer.
    pub fn tick(&mut self) {
        self.sim.tick();
        self.refresh_pixels();
    }

    pub fn clear(&mut self) {
        self.sim.clear();
        self.refresh_pixels();
    }

    pub fn set_gravity(&mut self, gravity: f32) {
        self.sim.set_gravity(gravity);
    }

    #[wasm_bindgen(getter)]
    #[must_use]
    pub fn width(&self) -> usize {
        self.sim.grid().cols()
    }

    #[wasm_bindgen(getter)]
    #[must_use]
    pub fn height(&self) -> usize {
        self.sim.grid().rows()
    }

    #[wasm_bindgen(getter)]
    #[must_use]
    pub fn frame(&self) -> u64 {
        self.sim.frame()
    }

    #[wasm_bindgen(getter)]
    #[must_use]
    pub fn hue(&self) -> f32 {
        self.sim.hue().value()
    }

    #[wasm_bindgen(getter)]
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.sim.grid().occupied_count()
    }

    /// Pointer to `width * height` RGBA8 pixels, one per cell, row-major.
    #[must_use]
    pub fn pixels_ptr(&self) -> *const u8 {
        self.pixels.as_ptr()
    }

    #[must_use]
    pub fn pixels_len(&self) -> usize {
        self.pixels.len()
    }
}

impl Universe {
    fn refresh_pixels(&mut self) {
        render::write_rgba(self.sim.grid(), &mut self.pixels);
    }

    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    #[must_use]
    pub fn simulation(&self) -> &Simulation<StdRng> {
        &self.sim
    }
}

#[wasm_bindgen]
#[must_use]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn universe(cols: usize, rows: usize) -> Universe {
        match Universe::new(cols, rows, 4, 11) {
            Ok(universe) => universe,
            Err(_) => panic!("valid universe rejected"),
        }
    }

    #[test]
    fn universe_starts_black_and_opaque() {
        let universe = universe(8, 6);
        assert_eq!(universe.width(), 8);
        assert_eq!(universe.height(), 6);
        assert_eq!(universe.pixels_len(), 8 * 6 * 4);
        assert!(universe
            .pixels()
            .chunks_exact(4)
            .all(|px| px == [0, 0, 0, 255]));
    }

    #[test]
    fn universe_tick_paints_and_refreshes_pixels() {
        let mut universe = universe(16, 16);
        universe.press(8, 3);
        for _ in 0..5 {
            universe.tick();
        }
        assert_eq!(universe.frame(), 5);
        assert!(universe.occupied_count() > 0);
        let lit = universe
            .pixels()
            .chunks_exact(4)
            .filter(|px| px[..3] != [0, 0, 0])
            .count();
        assert_eq!(lit, universe.occupied_count());

        universe.clear();
        assert_eq!(universe.occupied_count(), 0);
    }

    #[test]
    fn universe_hue_advances_while_pressed() {
        let mut universe = universe(16, 16);
        let start = universe.hue();
        universe.press_at_pixel(20, 20);
        universe.tick();
        assert!(universe.hue() > start);
        universe.release();
        let held = universe.hue();
        universe.tick();
        assert_eq!(universe.hue(), held);
    }

    #[test]
    fn version_matches_package() {
        assert_eq!(version(), env!("CARGO_PKG_VERSION"));
    }
}
