//! Injectable source of uniform draws for painting and slide tie-breaks.

use rand::rngs::StdRng;
use rand::Rng;

/// Uniform draws in `[0, 1)`.
pub trait RandomSource {
    fn next_unit(&mut self) -> f32;
}

impl RandomSource for StdRng {
    fn next_unit(&mut self) -> f32 {
        self.random::<f32>()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_unit(&mut self) -> f32 {
        (**self).next_unit()
    }
}

/// Replays a fixed sequence of draws, cycling when exhausted.
#[cfg(test)]
#[derive(Debug)]
pub(crate) struct Scripted {
    draws: Vec<f32>,
    next: usize,
}

#[cfg(test)]
impl Scripted {
    pub(crate) fn new(draws: &[f32]) -> Self {
        assert!(!draws.is_empty());
        Self {
            draws: draws.to_vec(),
            next: 0,
        }
    }

    /// Always draws `value`.
    pub(crate) fn constant(value: f32) -> Self {
        Self::new(&[value])
    }
}

#[cfg(test)]
impl RandomSource for Scripted {
    fn next_unit(&mut self) -> f32 {
        let v = self.draws[self.next % self.draws.len()];
        self.next += 1;
        v
    }
}
