//! Conversions between HEX strings, integer RGB and HSL.
//!
//! The HSL formulas are the standard colorimetric ones: hue in degrees,
//! saturation and lightness in percent. `hsl_to_rgb` returns unrounded channels;
//! callers round once at the display or hex-encoding boundary.

use vyra_types::{Hsl, Rgb, RgbF64};

use crate::ColorError;

/// Encode channels as a lowercase `#rrggbb` string.
///
/// Each channel is rounded to the nearest integer and clamped into `0..=255`,
/// so floating-point output from [`hsl_to_rgb`] can be passed straight through.
///
/// # Example
/// ```rust
/// use vyra_color::rgb_to_hex;
///
/// assert_eq!(rgb_to_hex(123.0, 97.0, 255.0), "#7b61ff");
/// assert_eq!(rgb_to_hex(0.4, 15.5, 300.0), "#0010ff");
/// ```
pub fn rgb_to_hex(r: f64, g: f64, b: f64) -> String {
    let Rgb { r, g, b } = RgbF64::new(r, g, b).round();
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// Decode a hex color into integer channels.
///
/// Accepts an optional leading `#` and either the 3-digit shorthand (each digit
/// doubled) or the full 6-digit form, in any letter case.
///
/// # Errors
/// Returns [`ColorError::InvalidFormat`] for any other length or for
/// non-hexadecimal characters.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, ColorError> {
    let digits = hex_digits(hex)?;
    let channel = |index: usize| (digits[index] << 4) | digits[index + 1];
    Ok(Rgb::new(channel(0), channel(2), channel(4)))
}

/// Validate a hex color and return it in canonical `#RRGGBB` form.
///
/// Shorthand input is expanded, so `#abc` becomes `#AABBCC`.
pub fn canonical_hex(hex: &str) -> Result<String, ColorError> {
    hex_to_rgb(hex).map(upper_hex)
}

/// Format integer channels as canonical uppercase `#RRGGBB`.
pub fn upper_hex(Rgb { r, g, b }: Rgb) -> String {
    format!("#{r:02X}{g:02X}{b:02X}")
}

/// Format channels as `rgb(r, g, b)` after rounding each one.
pub fn rgb_string(r: f64, g: f64, b: f64) -> String {
    RgbF64::new(r, g, b).round().to_string()
}

/// Convert integer RGB into HSL.
///
/// Gray colors (all channels equal) have hue and saturation 0. Otherwise the
/// hue branch is chosen by the largest channel, checking red, then green, then
/// blue, so ties resolve in that order.
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl::new(0.0, 0.0, l * 100.0);
    }

    let d = max - min;
    let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };

    let sector = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };
    let h = sector / 6.0;

    Hsl::new(h * 360.0, s * 100.0, l * 100.0)
}

/// Convert HSL back into floating-point RGB channels in `0.0..=255.0`.
pub fn hsl_to_rgb(hsl: Hsl) -> RgbF64 {
    let h = hsl.h / 360.0;
    let s = hsl.s / 100.0;
    let l = hsl.l / 100.0;

    if s == 0.0 {
        return RgbF64::new(l * 255.0, l * 255.0, l * 255.0);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    RgbF64::new(
        hue_to_channel(p, q, h + 1.0 / 3.0) * 255.0,
        hue_to_channel(p, q, h) * 255.0,
        hue_to_channel(p, q, h - 1.0 / 3.0) * 255.0,
    )
}

fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}

/// Expand a hex string into six nibble values.
fn hex_digits(hex: &str) -> Result<[u8; 6], ColorError> {
    let invalid = || ColorError::InvalidFormat(hex.to_string());
    let trimmed = hex.trim();
    let body = trimmed.strip_prefix('#').unwrap_or(trimmed);

    let nibbles: Vec<u8> = body
        .chars()
        .map(|c| c.to_digit(16).map(|value| value as u8))
        .collect::<Option<_>>()
        .ok_or_else(invalid)?;

    match nibbles.as_slice() {
        [r, g, b] => Ok([*r, *r, *g, *g, *b, *b]),
        [r1, r2, g1, g2, b1, b2] => Ok([*r1, *r2, *g1, *g2, *b1, *b2]),
        _ => Err(invalid()),
    }
}
