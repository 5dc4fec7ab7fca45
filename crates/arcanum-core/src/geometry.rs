//! Geometric primitives for sigil construction.
//!
//! This module provides the fundamental geometric types used to place the
//! vertices of polygons and the centres of sigils.
//!
//! # Overview
//!
//! - [`Point`] - A position in the diagram frame
//! - [`Size`] - Canvas dimensions
//! - [`vertex_at`] - The point at a given angle on a circle
//!
//! # Coordinate System
//!
//! Diagrams are built in a mathematical frame centred on the diagram:
//!
//! ```text
//!          +Y
//!           ▲
//!           │
//!   ────────┼────────► +X
//!           │ (0,0)
//!           │
//! ```
//!
//! - **Origin**: The centre of the diagram
//! - **X-axis**: Increases rightward
//! - **Y-axis**: Increases upward
//! - **Angles**: Radians, counter-clockwise from +X
//!
//! Renderers are responsible for mapping this frame onto their own output
//! coordinates (see the SVG renderer in the `arcanum` crate).

/// A position in the diagram frame.
///
/// Coordinates are `f64` so that vertices computed with trigonometry stay
/// within a tight tolerance of their circle.
///
/// ```
/// # use arcanum_core::geometry::Point;
/// let corner = Point::new(3.0, 4.0);
/// assert_eq!(corner.hypot(), 5.0);
/// assert_eq!(corner.distance_to(Point::new(3.0, -1.0)), 5.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn x(self) -> f64 {
        self.x
    }

    pub fn y(self) -> f64 {
        self.y
    }

    /// Distance from the origin.
    pub fn hypot(self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn distance_to(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Angle of this point around the origin, in radians within `(-π, π]`.
    pub fn angle(self) -> f64 {
        self.y.atan2(self.x)
    }
}

/// Canvas dimensions.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f64,
    height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// A square size with both sides equal to `side`.
    pub fn square(side: f64) -> Self {
        Self::new(side, side)
    }

    pub fn width(self) -> f64 {
        self.width
    }

    pub fn height(self) -> f64 {
        self.height
    }

    /// The smaller of the two dimensions.
    pub fn min_dimension(self) -> f64 {
        self.width.min(self.height)
    }

    /// Midpoint of a canvas of this size whose corner is at the origin.
    pub fn center(self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Returns the point at `angle` on the circle of `radius` around `centre`.
///
/// This is `(centre.x + radius·cos(angle), centre.y + radius·sin(angle))`.
///
/// # Examples
///
/// ```
/// # use arcanum_core::geometry::{Point, vertex_at};
/// let top = vertex_at(2.0, Point::new(1.0, 1.0), std::f64::consts::FRAC_PI_2);
/// assert!((top.x() - 1.0).abs() < 1e-12);
/// assert!((top.y() - 3.0).abs() < 1e-12);
/// ```
pub fn vertex_at(radius: f64, centre: Point, angle: f64) -> Point {
    let (sin, cos) = angle.sin_cos();
    Point::new(
        radius.mul_add(cos, centre.x),
        radius.mul_add(sin, centre.y),
    )
}


#[cfg(test)]
mod proptest_tests {
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    use super::*;

    fn point_strategy() -> impl Strategy<Value = Point> {
        (-1000.0f64..1000.0, -1000.0f64..1000.0).prop_map(|(x, y)| Point::new(x, y))
    }

    /// Every vertex lies on its circle.
    fn check_vertex_on_circle(centre: Point, radius: f64, angle: f64) -> Result<(), TestCaseError> {
        let vertex = vertex_at(radius, centre, angle);
        let distance = centre.distance_to(vertex);

        prop_assert!(approx_eq!(f64, distance, radius, epsilon = 1e-9 * radius.max(1.0)));
        Ok(())
    }

    /// Distance is symmetric.
    fn check_distance_is_symmetric(p1: Point, p2: Point) -> Result<(), TestCaseError> {
        prop_assert!(approx_eq!(f64, p1.distance_to(p2), p2.distance_to(p1)));
        Ok(())
    }

    proptest! {
        #[test]
        fn vertex_on_circle(
            centre in point_strategy(),
            radius in 1e-6f64..1000.0,
            angle in -10.0f64..10.0,
        ) {
            check_vertex_on_circle(centre, radius, angle)?;
        }

        #[test]
        fn distance_is_symmetric(p1 in point_strategy(), p2 in point_strategy()) {
            check_distance_is_symmetric(p1, p2)?;
        }
    }
}
