use super::{DEFAULT_ANGLE_OFFSET, Shape, star_polygon_path};
use crate::{Error, geometry::Point, path::Path};

/// A regular polygon, or star polygon, inscribed in a circle of `radius`.
///
/// - `density` is the number of edges "skipped" plus one: a pentagon has
///   density 1, a pentagram density 2. A proper star needs
///   `density ≤ (sides - 1) / 2`; this is not checked.
/// - `angle_offset` rotates the polygon anticlockwise about its centre, in radians.
///
/// # Examples
///
/// ```
/// use arcanum_core::shape::{RegularPolygon, Shape};
///
/// let pentagram = RegularPolygon::new(10.0, 5).unwrap().with_density(2);
/// assert_eq!(pentagram.produce_path().line_count(), 5);
///
/// assert!(RegularPolygon::new(0.0, 5).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RegularPolygon {
    radius: f64,
    centre: Point,
    sides: u32,
    density: u32,
    angle_offset: f64,
}

impl RegularPolygon {
    /// Creates a convex polygon centred on the origin with its first vertex
    /// pointing straight up.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `radius` is not strictly positive
    /// and [`Error::TooManySides`] if `sides` exceeds [`MAX_SIDES`](super::MAX_SIDES).
    pub fn new(radius: f64, sides: u32) -> Result<Self, Error> {
        Ok(Self {
            radius: Error::require_positive("radius", radius)?,
            centre: Point::default(),
            sides: Error::require_side_count("sides", f64::from(sides))?,
            density: 1,
            angle_offset: DEFAULT_ANGLE_OFFSET,
        })
    }

    pub fn with_density(mut self, density: u32) -> Self {
        self.density = density;
        self
    }

    pub fn with_centre(mut self, centre: Point) -> Self {
        self.centre = centre;
        self
    }

    pub fn with_angle_offset(mut self, angle_offset: f64) -> Self {
        self.angle_offset = angle_offset;
        self
    }

    pub fn sides(&self) -> u32 {
        self.sides
    }

    pub fn density(&self) -> u32 {
        self.density
    }

    pub fn angle_offset(&self) -> f64 {
        self.angle_offset
    }
}

impl Shape for RegularPolygon {
    fn radius(&self) -> f64 {
        self.radius
    }

    fn centre(&self) -> Point {
        self.centre
    }

    fn produce_path(&self) -> Path {
        star_polygon_path(
            self.radius,
            self.sides,
            self.density,
            self.centre,
            self.angle_offset,
        )
    }
}
