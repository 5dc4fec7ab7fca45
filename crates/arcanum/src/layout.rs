//! Diagram layout: placing the eight sigils of a spell.
//!
//! The layout packs six equal "outer" circles around one central circle so
//! that each outer circle touches the central one and both of its
//! neighbours. With `n = 6` and `sin φ = sin(π/n)`:
//!
//! ```text
//! outer radius    = central radius · sin φ / (1 − sin φ)
//! centre distance = central radius / (1 − sin φ)
//! ```
//!
//! The first outer slot sits straight above the centre, which makes the
//! diagram mirror-symmetric about the vertical axis.
//!
//! ```text
//!            school
//!   potency         range
//!            (core)
//!   speed         duration
//!             size
//! ```

use std::f64::consts::{FRAC_PI_2, PI};

use log::{debug, trace};

use arcanum_core::{
    draw::RenderTarget,
    geometry::{Point, Size},
    path::Path,
    shape::{Circle, CompositeSigil, DEFAULT_ANGLE_OFFSET, DEFAULT_PRECISION, Shape},
};

use crate::{
    ArcanumError,
    spell::{Attribute, SpellAttributes},
};

/// Number of sigils arranged around the central circle.
pub const OUTER_SIGIL_COUNT: usize = 6;

/// `sin(π / 6)`, the packing angle of six circles around one.
pub const SIN_PHI: f64 = 0.5;

/// Distance of an outer centre from the diagram centre, per unit of central radius.
pub const POSITION_MULTIPLIER: f64 = 1.0 / (1.0 - SIN_PHI);

/// Outer radius per unit of central radius.
pub const RADIUS_MULTIPLIER: f64 = SIN_PHI * POSITION_MULTIPLIER;

/// Rotation of the first outer slot: straight up.
pub const LAYOUT_ANGLE_OFFSET: f64 = FRAC_PI_2;

/// Angle between two adjacent outer slots.
pub const SLOT_ANGLE: f64 = 2.0 * PI / OUTER_SIGIL_COUNT as f64;

/// Default side length of the square canvas.
pub const DEFAULT_CANVAS_SIZE: f64 = 1600.0;

/// Default gap between the outer boundary and the canvas edge.
pub const DEFAULT_EDGE_SPACING: f64 = 5.0;

/// Parameters controlling how a diagram is sized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutOptions {
    canvas: Size,
    edge_spacing: f64,
    central_radius: Option<f64>,
    precision: f64,
}

impl LayoutOptions {
    pub fn new(canvas: Size) -> Self {
        Self {
            canvas,
            ..Self::default()
        }
    }

    pub fn with_edge_spacing(mut self, edge_spacing: f64) -> Self {
        self.edge_spacing = edge_spacing;
        self
    }

    /// Fixes the central radius instead of fitting the diagram to the canvas.
    pub fn with_central_radius(mut self, central_radius: Option<f64>) -> Self {
        self.central_radius = central_radius;
        self
    }

    /// Sets the angular step used for every circle.
    pub fn with_precision(mut self, precision: f64) -> Self {
        self.precision = precision;
        self
    }

    pub fn canvas(&self) -> Size {
        self.canvas
    }

    pub fn edge_spacing(&self) -> f64 {
        self.edge_spacing
    }

    pub fn central_radius(&self) -> Option<f64> {
        self.central_radius
    }

    pub fn precision(&self) -> f64 {
        self.precision
    }
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            canvas: Size::square(DEFAULT_CANVAS_SIZE),
            edge_spacing: DEFAULT_EDGE_SPACING,
            central_radius: None,
            precision: DEFAULT_PRECISION,
        }
    }
}

/// The largest central radius whose outer boundary fits in `canvas`, less
/// `edge_spacing`.
///
/// The outer boundary has radius `central · (1 + 2·RADIUS_MULTIPLIER)`, so
/// this is `0.5 · min(width, height) / (1 + 2·RADIUS_MULTIPLIER) − edge_spacing`.
pub fn fit_central_radius(canvas: Size, edge_spacing: f64) -> f64 {
    0.5 * canvas.min_dimension() / (1.0 + 2.0 * RADIUS_MULTIPLIER) - edge_spacing
}

/// Centres of the six outer sigils, slot 0 first, going anticlockwise.
pub fn outer_centres(central_radius: f64) -> [Point; OUTER_SIGIL_COUNT] {
    let distance = POSITION_MULTIPLIER * central_radius;
    std::array::from_fn(|k| {
        let theta = SLOT_ANGLE * k as f64 + LAYOUT_ANGLE_OFFSET;
        Point::new(distance * theta.cos(), distance * theta.sin())
    })
}

/// A fully constructed magic-circle diagram.
///
/// Holds one [`CompositeSigil`] per spell attribute plus the central and
/// outer boundary circles. The diagram is immutable once built; drawing it
/// replays the eight sigil paths in a fixed order:
/// school, range, duration, size, speed, potency, central boundary, outer
/// boundary.
///
/// # Examples
///
/// ```
/// use arcanum::{
///     layout::{Diagram, LayoutOptions},
///     spell::{Attribute, SpellAttributes},
/// };
///
/// let magic_missile = SpellAttributes::new(None, 3, 1, 1, 4, 1);
/// let diagram = Diagram::new(magic_missile, &LayoutOptions::default()).unwrap();
///
/// assert_eq!(diagram.sigil(Attribute::Range).sides(), 9);
/// assert_eq!(diagram.sigil(Attribute::Range).density(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct Diagram {
    attributes: SpellAttributes,
    central_radius: f64,
    outer_radius: f64,
    centres: [Point; OUTER_SIGIL_COUNT],
    sigils: Vec<CompositeSigil>,
    central_boundary: Circle,
    outer_boundary: Circle,
}

impl Diagram {
    /// Lays out the sigils of `attributes`.
    ///
    /// # Errors
    ///
    /// Returns [`ArcanumError::Geometry`] if the resulting central radius is
    /// not positive (for example a canvas too small for its edge spacing) or
    /// if the configured precision is not positive or too fine, and
    /// [`ArcanumError::AttributeTooLarge`] if an attribute needs more polygon
    /// sides than a shape accepts.
    pub fn new(attributes: SpellAttributes, options: &LayoutOptions) -> Result<Self, ArcanumError> {
        let central_radius = options
            .central_radius()
            .unwrap_or_else(|| fit_central_radius(options.canvas(), options.edge_spacing()));
        let outer_radius = RADIUS_MULTIPLIER * central_radius;
        let centres = outer_centres(central_radius);

        debug!(
            central_radius,
            outer_radius,
            school_index = attributes.school_index();
            "Laying out diagram"
        );

        let mut sigils = Vec::with_capacity(OUTER_SIGIL_COUNT);
        for attribute in Attribute::ALL {
            let (sides, density) = attributes.sigil_parameters(attribute)?;
            let radius = match attribute {
                Attribute::School => central_radius,
                _ => outer_radius,
            };
            let centre = centres[attribute.slot()];

            trace!(attribute:%, sides, density, radius; "Building sigil");

            let sigil = CompositeSigil::new(radius, sides)?
                .with_density(density)
                .with_centre(centre)
                .with_angle_offset(DEFAULT_ANGLE_OFFSET)
                .with_precision(options.precision())?;
            sigils.push(sigil);
        }

        let central_boundary = Circle::new(central_radius)?.with_precision(options.precision())?;
        let outer_boundary = Circle::new(central_radius + 2.0 * outer_radius)?
            .with_precision(options.precision())?;

        Ok(Self {
            attributes,
            central_radius,
            outer_radius,
            centres,
            sigils,
            central_boundary,
            outer_boundary,
        })
    }

    pub fn attributes(&self) -> &SpellAttributes {
        &self.attributes
    }

    pub fn school_index(&self) -> u32 {
        self.attributes.school_index()
    }

    /// Radius of the central circle (and of the school sigil).
    pub fn central_radius(&self) -> f64 {
        self.central_radius
    }

    /// Common radius of the five outer attribute sigils.
    pub fn outer_radius(&self) -> f64 {
        self.outer_radius
    }

    /// Centres of the six outer slots, in slot order.
    pub fn centres(&self) -> &[Point; OUTER_SIGIL_COUNT] {
        &self.centres
    }

    /// The sigil drawn for `attribute`.
    pub fn sigil(&self, attribute: Attribute) -> &CompositeSigil {
        &self.sigils[attribute.slot()]
    }

    pub fn central_boundary(&self) -> &Circle {
        &self.central_boundary
    }

    pub fn outer_boundary(&self) -> &Circle {
        &self.outer_boundary
    }

    /// Every shape of the diagram in draw order.
    pub fn shapes(&self) -> impl Iterator<Item = &dyn Shape> + '_ {
        self.sigils
            .iter()
            .map(|sigil| sigil as &dyn Shape)
            .chain([
                &self.central_boundary as &dyn Shape,
                &self.outer_boundary as &dyn Shape,
            ])
    }

    /// The concatenated path of every shape, in draw order.
    pub fn path(&self) -> Path {
        let mut path = Path::new();
        for shape in self.shapes() {
            path.extend(shape.produce_path());
        }
        path
    }

    /// Replays every sigil onto `target`.
    ///
    /// The target's stroke is left as configured by the caller.
    pub fn draw<T: RenderTarget + ?Sized>(&self, target: &mut T) {
        for shape in self.shapes() {
            target.trace(&shape.produce_path());
        }
    }
}

/// Builds a diagram fitted to `canvas`.
///
/// Shorthand for [`Diagram::new`] with default precision and no fixed central
/// radius.
///
/// # Errors
///
/// See [`Diagram::new`].
pub fn build_diagram(
    attributes: SpellAttributes,
    canvas: Size,
    edge_spacing: f64,
) -> Result<Diagram, ArcanumError> {
    Diagram::new(
        attributes,
        &LayoutOptions::new(canvas).with_edge_spacing(edge_spacing),
    )
}
