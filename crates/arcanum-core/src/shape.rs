//! Shape definitions and path construction.
//!
//! This module provides the [`Shape`] trait and the three shapes sigils are
//! made of:
//!
//! - [`RegularPolygon`] - a regular or star polygon inscribed in a circle
//! - [`Circle`] - a circle approximated by a many-sided regular polygon
//! - [`CompositeSigil`] - a circle and a star polygon sharing one centre and radius
//!
//! The path construction itself is exposed as free functions
//! ([`star_polygon_path`], [`circle_path`], [`composite_sigil_path`]) so it can
//! be used without first building a shape value.

use std::f64::consts::TAU;

use log::trace;

use crate::{
    Error,
    geometry::{Point, vertex_at},
    path::Path,
};

mod circle;
mod composite;
mod polygon;

pub use circle::Circle;
pub use composite::CompositeSigil;
pub use polygon::RegularPolygon;

/// Default angular step of a circle approximation, in radians.
pub const DEFAULT_PRECISION: f64 = 0.05;

/// Default rotation of a polygon's first vertex: straight up.
pub const DEFAULT_ANGLE_OFFSET: f64 = std::f64::consts::FRAC_PI_2;

/// Largest side count a shape accepts.
///
/// Shapes and [`circle_side_count`] reject anything above it with
/// [`Error::TooManySides`] before a path is allocated.
pub const MAX_SIDES: u32 = 1 << 20;

/// A drawable figure with a bounding circle.
///
/// Implementors guarantee `radius() > 0`; the check happens when the shape is
/// constructed.
pub trait Shape: std::fmt::Debug {
    /// Radius of the circle the shape is inscribed in.
    fn radius(&self) -> f64;

    /// Centre of the shape in diagram coordinates.
    fn centre(&self) -> Point;

    /// The pen operations that draw this shape.
    fn produce_path(&self) -> Path;
}

/// Builds the path of a `{sides/density}` star polygon.
///
/// Vertex `i` sits at angle `angle_offset + 2π·i/sides`. The pen first moves
/// to vertex 0, then for every home vertex `0..sides` it moves to the home
/// vertex and draws a line to the vertex `density` steps ahead. Exactly
/// `sides` lines are drawn and none are chained tip-to-tail.
///
/// A density of 1 gives an ordinary convex polygon. Zero sides yield only the
/// initial move. The result is only a proper star when
/// `density ≤ (sides - 1) / 2` and the two are coprime; other combinations
/// draw overlapping or degenerate figures and are not rejected.
///
/// # Examples
///
/// ```
/// use arcanum_core::{geometry::Point, shape::star_polygon_path};
///
/// // A pentagram
/// let path = star_polygon_path(1.0, 5, 2, Point::default(), 0.0);
/// assert_eq!(path.line_count(), 5);
/// assert_eq!(path.len(), 11);
/// ```
pub fn star_polygon_path(
    radius: f64,
    sides: u32,
    density: u32,
    centre: Point,
    angle_offset: f64,
) -> Path {
    let sides_f = f64::from(sides);
    let angle_of = |index: u64| (TAU * index as f64 / sides_f) + angle_offset;

    let mut path = Path::with_capacity(1 + 2 * sides as usize);
    path.move_to(vertex_at(radius, centre, angle_offset));

    for home in 0..u64::from(sides) {
        let destination = home + u64::from(density);
        path.move_to(vertex_at(radius, centre, angle_of(home)));
        path.line_to(vertex_at(radius, centre, angle_of(destination)));
    }

    trace!(sides, density, ops = path.len(); "Built star polygon path");
    path
}

/// Number of sides used to approximate a circle with the given angular step.
///
/// This is `round(2π / precision)`.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] if `precision` is not strictly positive
/// and [`Error::TooManySides`] if the count would exceed [`MAX_SIDES`].
///
/// ```
/// use arcanum_core::shape::circle_side_count;
///
/// assert_eq!(circle_side_count(0.05), Ok(126));
/// assert!(circle_side_count(1e-10).is_err());
/// ```
pub fn circle_side_count(precision: f64) -> Result<u32, Error> {
    let precision = Error::require_positive("precision", precision)?;
    Error::require_side_count("precision", (TAU / precision).round())
}

/// Builds the path of a circle approximated by a regular polygon.
///
/// The polygon has [`circle_side_count`] sides, density 1 and its first vertex
/// at angle 0.
///
/// # Errors
///
/// Fails like [`circle_side_count`].
pub fn circle_path(radius: f64, centre: Point, precision: f64) -> Result<Path, Error> {
    let sides = circle_side_count(precision)?;
    Ok(star_polygon_path(radius, sides, 1, centre, 0.0))
}

/// Builds the path of a circle followed by a star polygon inscribed in it.
///
/// The circle is drawn first so the polygon is layered on top.
///
/// # Errors
///
/// Fails like [`circle_side_count`], or with [`Error::TooManySides`] if
/// `sides` exceeds [`MAX_SIDES`].
pub fn composite_sigil_path(
    radius: f64,
    sides: u32,
    density: u32,
    centre: Point,
    angle_offset: f64,
    precision: f64,
) -> Result<Path, Error> {
    let sides = Error::require_side_count("sides", f64::from(sides))?;
    let mut path = circle_path(radius, centre, precision)?;
    path.extend(star_polygon_path(radius, sides, density, centre, angle_offset));
    Ok(path)
}


#[cfg(test)]
mod proptest_tests {
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    use super::*;

    fn point_strategy() -> impl Strategy<Value = Point> {
        (-1000.0f64..1000.0, -1000.0f64..1000.0).prop_map(|(x, y)| Point::new(x, y))
    }

    /// Every emitted vertex lies on the circumscribed circle.
    fn check_vertices_on_circle(
        radius: f64,
        sides: u32,
        density: u32,
        centre: Point,
        angle_offset: f64,
    ) -> Result<(), TestCaseError> {
        let path = star_polygon_path(radius, sides, density, centre, angle_offset);

        for vertex in path.vertices() {
            let distance = centre.distance_to(vertex);
            prop_assert!(approx_eq!(
                f64,
                distance,
                radius,
                epsilon = 1e-9 * radius.max(1.0)
            ));
        }
        Ok(())
    }

    /// A convex polygon draws one line per side, each joining neighbours.
    fn check_convex_polygon_is_closed(
        radius: f64,
        sides: u32,
        centre: Point,
    ) -> Result<(), TestCaseError> {
        let path = star_polygon_path(radius, sides, 1, centre, 0.0);
        let segments = path.segments();
        prop_assert_eq!(segments.len(), sides as usize);

        // each line ends where the next one starts, and the last closes on the first
        for (i, (_, to)) in segments.iter().enumerate() {
            let (next_from, _) = segments[(i + 1) % segments.len()];
            prop_assert!(approx_eq!(f64, to.x(), next_from.x(), epsilon = 1e-6));
            prop_assert!(approx_eq!(f64, to.y(), next_from.y(), epsilon = 1e-6));
        }
        Ok(())
    }

    /// Smaller precision never produces fewer circle vertices.
    fn check_circle_count_monotonic(p1: f64, p2: f64) -> Result<(), TestCaseError> {
        let (fine, coarse) = if p1 <= p2 { (p1, p2) } else { (p2, p1) };
        let fine_path = circle_path(1.0, Point::default(), fine)?;
        let coarse_path = circle_path(1.0, Point::default(), coarse)?;

        prop_assert!(fine_path.line_count() >= coarse_path.line_count());
        prop_assert_eq!(fine_path.line_count(), circle_side_count(fine)? as usize);
        Ok(())
    }

    proptest! {
        #[test]
        fn vertices_on_circle(
            radius in 1e-6f64..1000.0,
            sides in 0u32..64,
            density in 0u32..32,
            centre in point_strategy(),
            angle_offset in -7.0f64..7.0,
        ) {
            check_vertices_on_circle(radius, sides, density, centre, angle_offset)?;
        }

        #[test]
        fn convex_polygon_is_closed(
            radius in 1.0f64..1000.0,
            sides in 3u32..200,
            centre in point_strategy(),
        ) {
            check_convex_polygon_is_closed(radius, sides, centre)?;
        }

        #[test]
        fn circle_count_monotonic(p1 in 0.01f64..3.0, p2 in 0.01f64..3.0) {
            check_circle_count_monotonic(p1, p2)?;
        }
    }
}
