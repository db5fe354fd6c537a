//! # Color space utilities
//!
//! Pure conversions between the HEX, RGB and HSL representations used by the
//! pickers, plus the derived shade series and gradient CSS builders. Nothing in
//! this crate touches storage or the terminal, so every function can be called
//! from any UI collaborator and tested in isolation.

use thiserror::Error;

pub mod convert;
pub mod gradient;
pub mod shades;

pub use convert::{canonical_hex, hex_to_rgb, hsl_to_rgb, rgb_string, rgb_to_hex, rgb_to_hsl, upper_hex};
pub use gradient::Gradient;
pub use shades::{DEFAULT_SHADE_COUNT, Shade, generate_shade_series};

/// Errors surfaced by color parsing and derivation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Input was not a 3- or 6-digit hex color (with optional `#`).
    #[error("invalid hex color '{0}': expected #rgb or #rrggbb")]
    InvalidFormat(String),
    /// A shade series needs at least both lightness endpoints.
    #[error("invalid shade count {0}: at least 2 shades are required")]
    InvalidShadeCount(usize),
    /// Unknown `linear-gradient` direction keyword.
    #[error(transparent)]
    InvalidDirection(#[from] vyra_types::ParseGradientDirectionError),
}
