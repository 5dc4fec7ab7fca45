//! Configuration types for Arcanum diagram rendering.
//!
//! This module provides configuration structures that control how diagrams
//! are sized and styled. All types implement [`serde::Deserialize`] for
//! loading from external sources such as TOML files.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining every section.
//! - [`CanvasConfig`] - Canvas size, edge spacing and an optional fixed central radius.
//! - [`GeometryConfig`] - Circle approximation precision.
//! - [`StyleConfig`] - Pen and background styling.
//!
//! # Example
//!
//! ```
//! # use arcanum::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.canvas().width(), 1600.0);
//! assert!(config.style().stroke().is_ok());
//! ```

use serde::Deserialize;

use arcanum_core::{
    color::Color,
    draw::{StrokeCap, StrokeDefinition, StrokeJoin},
    geometry::Size,
    shape::DEFAULT_PRECISION,
};

use crate::{
    ArcanumError,
    layout::{DEFAULT_CANVAS_SIZE, DEFAULT_EDGE_SPACING, LayoutOptions},
};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Canvas configuration section.
    #[serde(default)]
    canvas: CanvasConfig,

    /// Geometry configuration section.
    #[serde(default)]
    geometry: GeometryConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    pub fn new(canvas: CanvasConfig, geometry: GeometryConfig, style: StyleConfig) -> Self {
        Self {
            canvas,
            geometry,
            style,
        }
    }

    /// Returns the canvas configuration.
    pub fn canvas(&self) -> &CanvasConfig {
        &self.canvas
    }

    /// Returns the geometry configuration.
    pub fn geometry(&self) -> &GeometryConfig {
        &self.geometry
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// The layout options described by the canvas and geometry sections.
    pub fn layout_options(&self) -> LayoutOptions {
        LayoutOptions::new(self.canvas.size())
            .with_edge_spacing(self.canvas.edge_spacing)
            .with_central_radius(self.canvas.central_radius)
            .with_precision(self.geometry.precision)
    }
}

/// Canvas dimensions and fitting.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    width: f64,
    height: f64,
    /// Gap left between the outer boundary and the canvas edge.
    edge_spacing: f64,
    /// Fixed central radius; when set the diagram is not fitted to the canvas.
    central_radius: Option<f64>,
}

impl CanvasConfig {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_SIZE,
            height: DEFAULT_CANVAS_SIZE,
            edge_spacing: DEFAULT_EDGE_SPACING,
            central_radius: None,
        }
    }
}

/// Shape approximation settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeometryConfig {
    /// Angular step of circle approximations, in radians.
    precision: f64,
}

impl GeometryConfig {
    pub fn precision(&self) -> f64 {
        self.precision
    }
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
        }
    }
}

/// Visual styling configuration for rendered diagrams.
///
/// Colors are CSS color strings and are parsed when the style is applied.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pen_color: String,
    pen_width: f32,
    line_cap: StrokeCap,
    line_join: StrokeJoin,
    /// Background fill; transparent when unset.
    background_color: Option<String>,
}

impl StyleConfig {
    /// The pen described by this section.
    ///
    /// # Errors
    ///
    /// Returns [`ArcanumError::Config`] if the pen color cannot be parsed.
    pub fn stroke(&self) -> Result<StrokeDefinition, ArcanumError> {
        let color = Color::new(&self.pen_color)
            .map_err(|err| ArcanumError::Config(format!("Invalid pen color in config: {err}")))?;

        Ok(StrokeDefinition::new(color, self.pen_width)
            .with_cap(self.line_cap)
            .with_join(self.line_join))
    }

    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns [`ArcanumError::Config`] if the configured color string cannot be parsed.
    pub fn background_color(&self) -> Result<Option<Color>, ArcanumError> {
        self.background_color
            .as_deref()
            .map(Color::new)
            .transpose()
            .map_err(|err| ArcanumError::Config(format!("Invalid background color in config: {err}")))
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            pen_color: "white".to_string(),
            pen_width: 2.0,
            line_cap: StrokeCap::default(),
            line_join: StrokeJoin::default(),
            background_color: None,
        }
    }
}
