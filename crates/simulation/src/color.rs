//! Piecewise-linear hue → RGB approximation used to draw sand.

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `0xRRGGBB`.
    #[must_use]
    pub fn to_u32(self) -> u32 {
        (u32::from(self.r) << 16) | (u32::from(self.g) << 8) | u32::from(self.b)
    }
}

/// Map `h` (nominally `[0, 1]`) with saturation `s` and lightness `l` to RGB.
///
/// Each channel is a clamped triangle wave in `h * 6`, truncated to an integer,
/// scaled by `l`, then pulled toward white by `1 - s`. With `s = l = 1` the
/// last two stages are identities. Fractional results are truncated.
#[must_use]
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> Rgb {
    let x = h * 6.0;
    let r = 255.0 * (x - 3.0).abs() - 1.0;
    let g = 255.0 * (2.0 - (x - 2.0).abs()) - 1.0;
    let b = 255.0 * (2.0 - (x - 4.0).abs()) - 1.0;
    Rgb::new(channel(r, s, l), channel(g, s, l), channel(b, s, l))
}

fn channel(raw: f32, s: f32, l: f32) -> u8 {
    let c = raw.clamp(0.0, 255.0).trunc() * l;
    let blended = c + (255.0 - c) * (1.0 - s);
    blended.clamp(0.0, 255.0) as u8
}
