//! Shared value types for the Vyra color toolkit.
//!
//! These types cross every crate boundary in the workspace: the color math in
//! `vyra-color`, the session-backed stores in `vyra-util`, and the CLI front
//! end. They carry no behavior beyond parsing and display.

use std::{error::Error, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

pub mod color;

pub use color::{Hsl, Rgb, RgbF64};

/// Visual theme persisted alongside the palette for the session.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    Light,
    #[default]
    Dark,
}

impl ThemeName {
    /// Stored representation of the theme (`"light"` or `"dark"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The opposite theme, used by the toggle control.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeName {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(ParseThemeError),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseThemeError;

impl fmt::Display for ParseThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid theme; expected 'light' or 'dark'")
    }
}

impl Error for ParseThemeError {}

/// Direction keyword of a CSS `linear-gradient`.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Default, Serialize, Deserialize)]
pub enum GradientDirection {
    #[default]
    ToTop,
    ToBottom,
    ToLeft,
    ToRight,
    ToTopLeft,
    ToTopRight,
    ToBottomLeft,
    ToBottomRight,
}

impl GradientDirection {
    /// Every direction offered by the gradient builder, in display order.
    pub const ALL: [GradientDirection; 8] = [
        Self::ToTop,
        Self::ToBottom,
        Self::ToLeft,
        Self::ToRight,
        Self::ToTopLeft,
        Self::ToTopRight,
        Self::ToBottomLeft,
        Self::ToBottomRight,
    ];

    /// CSS keyword for this direction (e.g. `to top right`).
    pub fn as_css(&self) -> &'static str {
        match self {
            Self::ToTop => "to top",
            Self::ToBottom => "to bottom",
            Self::ToLeft => "to left",
            Self::ToRight => "to right",
            Self::ToTopLeft => "to top left",
            Self::ToTopRight => "to top right",
            Self::ToBottomLeft => "to bottom left",
            Self::ToBottomRight => "to bottom right",
        }
    }
}

impl fmt::Display for GradientDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_css())
    }
}

impl FromStr for GradientDirection {
    type Err = ParseGradientDirectionError;

    /// Accepts the CSS keyword (`to top right`) or a dashed shorthand (`top-right`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', " ");
        let normalized = normalized.strip_prefix("to ").unwrap_or(&normalized).trim();
        let words: Vec<&str> = normalized.split_whitespace().collect();
        match words.as_slice() {
            ["top"] => Ok(Self::ToTop),
            ["bottom"] => Ok(Self::ToBottom),
            ["left"] => Ok(Self::ToLeft),
            ["right"] => Ok(Self::ToRight),
            ["top", "left"] | ["left", "top"] => Ok(Self::ToTopLeft),
            ["top", "right"] | ["right", "top"] => Ok(Self::ToTopRight),
            ["bottom", "left"] | ["left", "bottom"] => Ok(Self::ToBottomLeft),
            ["bottom", "right"] | ["right", "bottom"] => Ok(Self::ToBottomRight),
            _ => Err(ParseGradientDirectionError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseGradientDirectionError(pub String);

impl fmt::Display for ParseGradientDirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid gradient direction '{}'", self.0)
    }
}

impl Error for ParseGradientDirectionError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_defaults_to_dark_and_toggles() {
        assert_eq!(ThemeName::default(), ThemeName::Dark);
        assert_eq!(ThemeName::Dark.toggled(), ThemeName::Light);
        assert_eq!(ThemeName::Light.toggled().toggled(), ThemeName::Light);
    }

    #[test]
    fn theme_parses_case_insensitively() {
        assert_eq!("LIGHT".parse::<ThemeName>(), Ok(ThemeName::Light));
        assert_eq!(" dark ".parse::<ThemeName>(), Ok(ThemeName::Dark));
        assert!("sepia".parse::<ThemeName>().is_err());
    }

    #[test]
    fn theme_serializes_as_lowercase_string() {
        let json = serde_json::to_string(&ThemeName::Light).unwrap();
        assert_eq!(json, "\"light\"");
    }

    #[test]
    fn gradient_direction_parses_css_and_shorthand() {
        assert_eq!("to top".parse::<GradientDirection>(), Ok(GradientDirection::ToTop));
        assert_eq!("bottom-right".parse::<GradientDirection>(), Ok(GradientDirection::ToBottomRight));
        assert_eq!("to left top".parse::<GradientDirection>(), Ok(GradientDirection::ToTopLeft));
        assert!("sideways".parse::<GradientDirection>().is_err());
    }

    #[test]
    fn gradient_direction_css_round_trips() {
        for direction in GradientDirection::ALL {
            assert_eq!(direction.as_css().parse::<GradientDirection>(), Ok(direction));
        }
    }
}
