//! Pen and background colors.
//!
//! Colors arrive as CSS strings from configuration (`"white"`, `"#06080F"`,
//! `"rgb(244 236 216)"`) and are parsed with the `color` crate. Named colors
//! keep their name when written back out, so a white pen is emitted as
//! `stroke="white"`.

use std::{fmt, str::FromStr};

use color::DynamicColor;

/// A parsed CSS color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color(DynamicColor);

impl Color {
    /// Parses a CSS color string.
    ///
    /// ```
    /// use arcanum_core::color::Color;
    ///
    /// assert!(Color::new("#06080F").is_ok());
    /// assert!(Color::new("parchment").is_err());
    /// ```
    pub fn new(css: &str) -> Result<Self, String> {
        DynamicColor::from_str(css)
            .map(Self)
            .map_err(|err| format!("invalid color `{css}`: {err}"))
    }

    /// The default pen color.
    pub fn white() -> Self {
        Self::new("white").expect("'white' is a valid CSS color")
    }

    /// The same color with its opacity replaced.
    ///
    /// ```
    /// use arcanum_core::color::Color;
    ///
    /// let faint = Color::white().with_alpha(0.5);
    /// assert_eq!(faint.alpha(), 0.5);
    /// ```
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self(self.0.with_alpha(alpha))
    }

    /// Opacity between 0.0 and 1.0.
    pub fn alpha(&self) -> f32 {
        self.0.components[3]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<&Color> for svg::node::Value {
    fn from(color: &Color) -> Self {
        color.to_string().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_css_forms() {
        for css in ["white", "#06080F", "#fff", "rgb(160, 160, 160)", "hsl(40 50% 90%)"] {
            assert!(Color::new(css).is_ok(), "{css} should parse");
        }

        let err = Color::new("not-a-color").unwrap_err();
        assert!(err.contains("not-a-color"));
    }

    #[test]
    fn test_named_colors_round_trip() {
        assert_eq!(Color::default().to_string(), "black");
        assert_eq!(Color::white().to_string(), "white");
        assert_eq!("blue".parse::<Color>().unwrap(), Color::new("blue").unwrap());
    }

    #[test]
    fn test_alpha() {
        let ink = Color::new("#06080F").unwrap();
        assert!((ink.alpha() - 1.0).abs() < 1e-6);
        assert!((ink.with_alpha(0.25).alpha() - 0.25).abs() < 1e-6);
    }
}
