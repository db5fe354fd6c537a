//! Two-stop CSS linear gradients.

use serde::Serialize;
use vyra_types::GradientDirection;

use crate::{ColorError, canonical_hex};

/// A linear gradient between two validated endpoint colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Gradient {
    pub direction: GradientDirection,
    /// Canonical `#RRGGBB` start color.
    pub start: String,
    /// Canonical `#RRGGBB` end color.
    pub end: String,
}

impl Gradient {
    /// Build a gradient, validating both endpoints.
    pub fn new(direction: GradientDirection, start: &str, end: &str) -> Result<Self, ColorError> {
        Ok(Self {
            direction,
            start: canonical_hex(start)?,
            end: canonical_hex(end)?,
        })
    }

    /// Like [`Gradient::new`] but with the direction given as a CSS keyword.
    pub fn parse(direction: &str, start: &str, end: &str) -> Result<Self, ColorError> {
        Self::new(direction.parse()?, start, end)
    }

    /// The `linear-gradient(...)` value.
    ///
    /// ```rust
    /// use vyra_color::Gradient;
    /// use vyra_types::GradientDirection;
    ///
    /// let gradient = Gradient::new(GradientDirection::ToRight, "#f00", "#0000ff").unwrap();
    /// assert_eq!(gradient.css(), "linear-gradient(to right, #FF0000, #0000FF)");
    /// ```
    pub fn css(&self) -> String {
        format!("linear-gradient({}, {}, {})", self.direction.as_css(), self.start, self.end)
    }

    /// The full `background:` declaration copied by the "Copy CSS" action.
    pub fn declaration(&self) -> String {
        format!("background: {};", self.css())
    }

    /// Endpoint colors in the order the "add both" action appends them.
    pub fn endpoints(&self) -> [&str; 2] {
        [&self.start, &self.end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_direction_is_to_top() {
        let gradient = Gradient::new(GradientDirection::default(), "#7b61ff", "#00c2ff").unwrap();
        assert_eq!(gradient.declaration(), "background: linear-gradient(to top, #7B61FF, #00C2FF);");
    }

    #[test]
    fn parse_accepts_direction_keywords() {
        let gradient = Gradient::parse("to bottom right", "#000", "#fff").unwrap();
        assert_eq!(gradient.direction, GradientDirection::ToBottomRight);
        assert_eq!(gradient.endpoints(), ["#000000", "#FFFFFF"]);
    }

    #[test]
    fn invalid_inputs_are_rejected() {
        assert!(matches!(
            Gradient::parse("diagonal", "#000", "#fff"),
            Err(ColorError::InvalidDirection(_))
        ));
        assert!(matches!(
            Gradient::parse("to top", "#000", "#ffff"),
            Err(ColorError::InvalidFormat(_))
        ));
    }
}
