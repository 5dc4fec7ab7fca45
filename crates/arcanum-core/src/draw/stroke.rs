//! The pen every sigil is drawn with.
//!
//! A diagram is single-color line art, so one [`StrokeDefinition`] covers the
//! whole drawing. Line ends and corners matter at low precision, where circles
//! become visible polygons; [`StrokeCap`] and [`StrokeJoin`] control them.
//!
//! The [`apply_stroke!`](crate::apply_stroke!) macro copies a pen onto any SVG
//! element:
//!
//! ```
//! use arcanum_core::{color::Color, draw::StrokeDefinition};
//! use svg::node::element::Path;
//!
//! let ink = StrokeDefinition::new(Color::new("#06080F").unwrap(), 1.5);
//! let path = arcanum_core::apply_stroke!(Path::new().set("fill", "none"), &ink);
//! ```

use std::fmt;

use serde::Deserialize;

use crate::color::Color;

/// Shape drawn at the open ends of a line (`stroke-linecap`).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrokeCap {
    #[default]
    Butt,
    Round,
    Square,
}

impl StrokeCap {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Butt => "butt",
            Self::Round => "round",
            Self::Square => "square",
        }
    }
}

impl fmt::Display for StrokeCap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shape drawn where two segments meet (`stroke-linejoin`).
///
/// Star polygons with a high density meet at very sharp angles; `Round` or
/// `Bevel` keeps miter spikes from overshooting the enclosing circle.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrokeJoin {
    #[default]
    Miter,
    Round,
    Bevel,
}

impl StrokeJoin {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Miter => "miter",
            Self::Round => "round",
            Self::Bevel => "bevel",
        }
    }
}

impl fmt::Display for StrokeJoin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Color, width and line-end styling of the pen.
///
/// The default pen is white and 2 units wide.
///
/// ```
/// use arcanum_core::{
///     color::Color,
///     draw::{StrokeCap, StrokeDefinition, StrokeJoin},
/// };
///
/// let pen = StrokeDefinition::new(Color::new("gold").unwrap(), 3.0)
///     .with_cap(StrokeCap::Round)
///     .with_join(StrokeJoin::Bevel);
/// assert_eq!(pen.join(), StrokeJoin::Bevel);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
    cap: StrokeCap,
    join: StrokeJoin,
}

impl StrokeDefinition {
    pub fn new(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            cap: StrokeCap::default(),
            join: StrokeJoin::default(),
        }
    }

    pub fn with_cap(mut self, cap: StrokeCap) -> Self {
        self.cap = cap;
        self
    }

    pub fn with_join(mut self, join: StrokeJoin) -> Self {
        self.join = join;
        self
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn cap(&self) -> StrokeCap {
        self.cap
    }

    pub fn join(&self) -> StrokeJoin {
        self.join
    }
}

impl Default for StrokeDefinition {
    fn default() -> Self {
        Self::new(Color::white(), 2.0)
    }
}

/// Sets `stroke`, `stroke-opacity`, `stroke-width`, `stroke-linecap` and
/// `stroke-linejoin` on an SVG element from a [`StrokeDefinition`].
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        let stroke: &$crate::draw::StrokeDefinition = $stroke;
        $element
            .set("stroke", stroke.color().to_string())
            .set("stroke-opacity", stroke.color().alpha())
            .set("stroke-width", stroke.width())
            .set("stroke-linecap", stroke.cap().as_str())
            .set("stroke-linejoin", stroke.join().as_str())
    }};
}
