//! Lightness-stepped shade series.
//!
//! A series keeps the base color's hue and saturation and sweeps lightness
//! linearly from 0 (black) to 100 (white). Series are cheap to derive and are
//! never persisted; callers regenerate them whenever the base color changes.

use serde::Serialize;
use tracing::debug;
use vyra_types::{Hsl, Rgb};

use crate::convert::upper_hex;
use crate::{ColorError, hex_to_rgb, hsl_to_rgb, rgb_to_hsl};

/// Number of tiles the shades page renders by default.
pub const DEFAULT_SHADE_COUNT: usize = 12;

/// One entry of a shade series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shade {
    /// Zero-based position, darkest first.
    pub position: usize,
    /// Lightness percentage used to derive this shade.
    pub lightness: f64,
    /// Canonical `#RRGGBB` value, ready to be added to the palette.
    pub hex: String,
    /// Rounded channels of the shade.
    pub rgb: Rgb,
    /// `rgb(r, g, b)` display string for the copy button.
    pub rgb_string: String,
}

/// Derive `count` shades of `base_hex`, ordered from lightness 0 to lightness 100.
///
/// # Errors
/// * [`ColorError::InvalidFormat`] when `base_hex` does not parse.
/// * [`ColorError::InvalidShadeCount`] when `count < 2`, since both endpoints
///   of the sweep must be present.
///
/// # Example
/// ```rust
/// use vyra_color::generate_shade_series;
///
/// let shades = generate_shade_series("#7B61FF", 12).unwrap();
/// assert_eq!(shades.len(), 12);
/// assert_eq!(shades[0].hex, "#000000");
/// assert_eq!(shades[11].hex, "#FFFFFF");
/// ```
pub fn generate_shade_series(base_hex: &str, count: usize) -> Result<Vec<Shade>, ColorError> {
    if count < 2 {
        return Err(ColorError::InvalidShadeCount(count));
    }

    let base: Hsl = rgb_to_hsl(hex_to_rgb(base_hex)?);
    debug!(base = %base, count, "generating shade series");

    let step = 100.0 / (count - 1) as f64;
    let shades = (0..count)
        .map(|position| {
            let lightness = if position == count - 1 { 100.0 } else { position as f64 * step };
            let rgb = hsl_to_rgb(base.with_lightness(lightness)).round();
            Shade {
                position,
                lightness,
                hex: upper_hex(rgb),
                rgb,
                rgb_string: rgb.to_string(),
            }
        })
        .collect();
    Ok(shades)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twelve_shades_span_black_to_white() {
        let shades = generate_shade_series("#7B61FF", DEFAULT_SHADE_COUNT).unwrap();
        assert_eq!(shades.len(), 12);
        assert_eq!(shades.first().unwrap().hex, "#000000");
        assert_eq!(shades.first().unwrap().lightness, 0.0);
        assert_eq!(shades.last().unwrap().hex, "#FFFFFF");
        assert_eq!(shades.last().unwrap().lightness, 100.0);
    }

    #[test]
    fn shades_are_monotonically_lighter() {
        let shades = generate_shade_series("#7B61FF", DEFAULT_SHADE_COUNT).unwrap();
        for pair in shades.windows(2) {
            let (darker, lighter) = (pair[0].rgb, pair[1].rgb);
            assert!(lighter.r >= darker.r && lighter.g >= darker.g && lighter.b >= darker.b);
            assert!(pair[1].lightness > pair[0].lightness);
        }
    }

    #[test]
    fn shades_keep_base_hue() {
        let base = rgb_to_hsl(hex_to_rgb("#7B61FF").unwrap());
        let shades = generate_shade_series("#7B61FF", 5).unwrap();
        let middle = rgb_to_hsl(shades[2].rgb);
        assert!((middle.h - base.h).abs() < 1.0);
        assert!((middle.l - 50.0).abs() < 0.5);
    }

    #[test]
    fn gray_base_produces_gray_ramp() {
        let shades = generate_shade_series("#808080", 3).unwrap();
        let hexes: Vec<&str> = shades.iter().map(|shade| shade.hex.as_str()).collect();
        assert_eq!(hexes, ["#000000", "#808080", "#FFFFFF"]);
        assert_eq!(shades[1].rgb_string, "rgb(128, 128, 128)");
    }

    #[test]
    fn rejects_degenerate_counts_and_bad_hex() {
        assert_eq!(generate_shade_series("#7B61FF", 1), Err(ColorError::InvalidShadeCount(1)));
        assert_eq!(generate_shade_series("#7B61FF", 0), Err(ColorError::InvalidShadeCount(0)));
        assert!(matches!(
            generate_shade_series("#12", 12),
            Err(ColorError::InvalidFormat(_))
        ));
    }

    #[test]
    fn serialized_shade_carries_hex_and_rgb_string() {
        let shades = generate_shade_series("#808080", 3).unwrap();
        let value = serde_json::to_value(&shades[2]).unwrap();
        assert_eq!(value["hex"], "#FFFFFF");
        assert_eq!(value["rgb_string"], "rgb(255, 255, 255)");
    }

    #[test]
    fn regenerating_is_deterministic() {
        let first = generate_shade_series("#0af", 7).unwrap();
        let second = generate_shade_series("#0af", 7).unwrap();
        assert_eq!(first, second);
    }
}
