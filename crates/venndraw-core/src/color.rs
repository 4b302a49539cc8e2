//! Color handling for venndraw diagrams
//!
//! This module provides the [`Color`] type which wraps the `DynamicColor` type
//! from the color crate. Set fills are translucent, so the alpha channel is
//! kept separate from the paint value when emitting SVG attributes.

use std::{fmt, str::FromStr};

use color::DynamicColor;

/// Wrapper around the `DynamicColor` type from the color crate
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Color {
    /// Create a new `Color` from a string
    /// This will parse CSS color strings such as "#ff0000", "rgba(92, 192, 98, 0.5)", "red", etc.
    ///
    /// # Examples
    ///
    /// ```
    /// use venndraw_core::color::Color;
    ///
    /// let red = Color::new("#ff0000").unwrap();
    /// let green = Color::new("rgba(92, 192, 98, 0.5)").unwrap();
    /// assert!((green.alpha() - 0.5).abs() < 0.001);
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Creates a new color with the specified alpha (transparency) value.
    ///
    /// # Examples
    ///
    /// ```
    /// use venndraw_core::color::Color;
    ///
    /// let red = Color::new("red").unwrap();
    /// let semi_transparent_red = red.with_alpha(0.5);
    /// assert_eq!(semi_transparent_red.alpha(), 0.5);
    /// ```
    pub fn with_alpha(self, alpha: f32) -> Self {
        Color {
            color: self.color.with_alpha(alpha),
        }
    }

    /// Returns the alpha (transparency) component of this color.
    ///
    /// 0.0 is fully transparent, 1.0 fully opaque.
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }

    /// Returns the CSS paint value of this color with alpha forced to 1.0.
    ///
    /// Pair it with [`alpha`](Self::alpha) in `fill-opacity` /
    /// `stroke-opacity` attributes.
    pub fn to_paint_string(self) -> String {
        self.with_alpha(1.0).to_string()
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_new() {
        let red = Color::new("#ff0000");
        assert!(red.is_ok());

        let invalid = Color::new("not-a-color");
        assert!(invalid.is_err());
    }

    #[test]
    fn test_color_new_error_mentions_input() {
        let err = Color::new("bluish").unwrap_err();
        assert!(err.contains("bluish"), "unexpected message: {err}");
    }

    #[test]
    fn test_color_default() {
        let color = Color::default();
        assert_eq!(color.to_string(), "black");
    }

    #[test]
    fn test_color_rgba_alpha() {
        let color = Color::new("rgba(241, 90, 96, 0.4)").unwrap();
        assert!((color.alpha() - 0.4).abs() < 0.001);
    }

    #[test]
    fn test_color_with_alpha() {
        let color = Color::new("red").unwrap();
        let transparent = color.with_alpha(0.5);
        assert!((transparent.alpha() - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_paint_string_is_opaque() {
        let translucent = Color::new("rgba(90, 155, 212, 0.5)").unwrap();
        let paint = Color::new(&translucent.to_paint_string()).unwrap();
        assert!((paint.alpha() - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_color_eq() {
        assert_eq!(Color::new("red").unwrap(), Color::new("#ff0000").unwrap());
        assert_ne!(Color::new("red").unwrap(), Color::new("blue").unwrap());
    }
}
