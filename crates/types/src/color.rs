//! Color representations shared by the conversion routines and the palette.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An sRGB color with 8-bit integer channels.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_f64(self) -> RgbF64 {
        RgbF64 {
            r: f64::from(self.r),
            g: f64::from(self.g),
            b: f64::from(self.b),
        }
    }
}

/// Renders as the `rgb(r, g, b)` display string shown next to swatches.
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self { r, g, b }
    }
}

/// Floating-point RGB in the `0.0..=255.0` range, as produced by HSL conversion.
///
/// Rounding is left to the consumer so repeated conversions do not accumulate error.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct RgbF64 {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl RgbF64 {
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Round each channel to the nearest integer, clamping into `0..=255`.
    ///
    /// Non-finite channels collapse to zero.
    pub fn round(self) -> Rgb {
        Rgb {
            r: round_channel(self.r),
            g: round_channel(self.g),
            b: round_channel(self.b),
        }
    }
}

fn round_channel(value: f64) -> u8 {
    if !value.is_finite() {
        return 0;
    }
    value.round().clamp(0.0, 255.0) as u8
}

/// Hue in degrees `[0, 360)`, saturation and lightness as percentages `[0, 100]`.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Same hue and saturation with a different lightness.
    pub fn with_lightness(self, l: f64) -> Self {
        Self { l, ..self }
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({:.0}, {:.0}%, {:.0}%)", self.h, self.s, self.l)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_display_matches_css_function_syntax() {
        assert_eq!(Rgb::new(123, 97, 255).to_string(), "rgb(123, 97, 255)");
    }

    #[test]
    fn rounding_clamps_and_discards_non_finite_channels() {
        let rgb = RgbF64::new(-4.2, 255.6, f64::NAN).round();
        assert_eq!(rgb, Rgb::new(0, 255, 0));
        assert_eq!(RgbF64::new(12.5, 12.49, 200.0).round(), Rgb::new(13, 12, 200));
    }

    #[test]
    fn hsl_display_rounds_components() {
        assert_eq!(Hsl::new(249.6, 100.0, 69.0).to_string(), "hsl(250, 100%, 69%)");
    }
}
