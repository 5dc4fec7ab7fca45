use super::{DEFAULT_PRECISION, Shape, circle_side_count, star_polygon_path};
use crate::{Error, geometry::Point, path::Path};

/// A circle approximated by a regular polygon.
///
/// `precision` is the angular step between vertices in radians; a smaller
/// value gives a smoother circle.
///
/// # Examples
///
/// ```
/// use arcanum_core::shape::{Circle, Shape};
///
/// let circle = Circle::new(100.0).unwrap();
/// assert_eq!(circle.side_count(), 126);
///
/// assert!(Circle::new(100.0).unwrap().with_precision(0.0).is_err());
/// assert!(Circle::new(100.0).unwrap().with_precision(1e-10).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    radius: f64,
    centre: Point,
    precision: f64,
    sides: u32,
}

impl Circle {
    /// Creates a circle centred on the origin with the default precision.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `radius` is not strictly positive.
    pub fn new(radius: f64) -> Result<Self, Error> {
        Ok(Self {
            radius: Error::require_positive("radius", radius)?,
            centre: Point::default(),
            precision: DEFAULT_PRECISION,
            sides: circle_side_count(DEFAULT_PRECISION)?,
        })
    }

    pub fn with_centre(mut self, centre: Point) -> Self {
        self.centre = centre;
        self
    }

    /// Sets the angular step of the approximation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `precision` is not strictly
    /// positive, or [`Error::TooManySides`] if it is so fine that the polygon
    /// would exceed [`MAX_SIDES`](super::MAX_SIDES).
    pub fn with_precision(mut self, precision: f64) -> Result<Self, Error> {
        self.sides = circle_side_count(precision)?;
        self.precision = precision;
        Ok(self)
    }

    pub fn precision(&self) -> f64 {
        self.precision
    }

    /// Number of sides of the approximating polygon.
    pub fn side_count(&self) -> u32 {
        self.sides
    }
}

impl Shape for Circle {
    fn radius(&self) -> f64 {
        self.radius
    }

    fn centre(&self) -> Point {
        self.centre
    }

    fn produce_path(&self) -> Path {
        star_polygon_path(self.radius, self.sides, 1, self.centre, 0.0)
    }
}
