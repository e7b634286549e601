//! Hue assigned to freshly painted sand, advancing with every stroke.

/// Caller-owned hue state threaded through each step.
///
/// The value lives in `[min, max]`; advancing past `max` snaps back to `min`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HueCursor {
    value: f32,
    step: f32,
    min: f32,
    max: f32,
}

impl HueCursor {
    /// Build a cursor, wrapping `initial` into `[min, max)` by modulo when it
    /// lies outside the range. Range and step are validated by `SimConfig`.
    #[must_use]
    pub fn new(initial: f32, step: f32, min: f32, max: f32) -> Self {
        let value = if (min..=max).contains(&initial) {
            initial
        } else {
            let wrapped = min + (initial - min).rem_euclid(max - min);
            log::debug!("initial hue {initial} normalized to {wrapped}");
            wrapped
        };
        Self {
            value,
            step,
            min,
            max,
        }
    }

    #[must_use]
    pub fn value(&self) -> f32 {
        self.value
    }

    /// The cursor after one paint event.
    #[must_use]
    pub fn advanced(self) -> Self {
        let mut value = self.value + self.step;
        if value > self.max {
            log::debug!("hue cursor wrapped past {}", self.max);
            value = self.min;
        }
        Self { value, ..self }
    }
}
