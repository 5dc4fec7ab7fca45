use super::{Circle, RegularPolygon, Shape};
use crate::{Error, geometry::Point, path::Path};

/// A circle and a star polygon drawn at the same centre and radius.
///
/// This is the drawable unit of a sigil. The two parts are kept as separate
/// values; the circle is drawn first and the polygon on top.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositeSigil {
    circle: Circle,
    polygon: RegularPolygon,
}

impl CompositeSigil {
    /// Creates a sigil centred on the origin with a convex polygon.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `radius` is not strictly positive
    /// and [`Error::TooManySides`] if `sides` is above the shape limit.
    pub fn new(radius: f64, sides: u32) -> Result<Self, Error> {
        Ok(Self {
            circle: Circle::new(radius)?,
            polygon: RegularPolygon::new(radius, sides)?,
        })
    }

    pub fn with_density(mut self, density: u32) -> Self {
        self.polygon = self.polygon.with_density(density);
        self
    }

    pub fn with_centre(self, centre: Point) -> Self {
        Self {
            circle: self.circle.with_centre(centre),
            polygon: self.polygon.with_centre(centre),
        }
    }

    pub fn with_angle_offset(mut self, angle_offset: f64) -> Self {
        self.polygon = self.polygon.with_angle_offset(angle_offset);
        self
    }

    /// Sets the angular step of the circle.
    ///
    /// # Errors
    ///
    /// Fails like [`Circle::with_precision`].
    pub fn with_precision(mut self, precision: f64) -> Result<Self, Error> {
        self.circle = self.circle.with_precision(precision)?;
        Ok(self)
    }

    pub fn circle(&self) -> &Circle {
        &self.circle
    }

    pub fn polygon(&self) -> &RegularPolygon {
        &self.polygon
    }

    pub fn sides(&self) -> u32 {
        self.polygon.sides()
    }

    pub fn density(&self) -> u32 {
        self.polygon.density()
    }
}

impl Shape for CompositeSigil {
    fn radius(&self) -> f64 {
        self.circle.radius()
    }

    fn centre(&self) -> Point {
        self.circle.centre()
    }

    fn produce_path(&self) -> Path {
        let mut path = self.circle.produce_path();
        path.extend(self.polygon.produce_path());
        path
    }
}
