//! Pen-plotter style path operations.
//!
//! Shapes describe themselves as an ordered list of [`PathOp`]s: a
//! [`PathOp::MoveTo`] lifts the pen and travels without drawing, a
//! [`PathOp::LineTo`] puts the pen down and draws a visible segment from the
//! current position. A [`Path`] is simply an owned sequence of these
//! operations that renderers replay in order.

use std::slice;

use crate::geometry::Point;

/// A single pen instruction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathOp {
    /// Pen-up travel to the point; nothing is drawn.
    MoveTo(Point),
    /// Pen-down travel to the point, drawing a segment.
    LineTo(Point),
}

impl PathOp {
    /// The destination of this operation.
    pub fn point(self) -> Point {
        match self {
            Self::MoveTo(point) | Self::LineTo(point) => point,
        }
    }

    /// Returns true if this operation draws a visible segment.
    pub fn is_draw(self) -> bool {
        matches!(self, Self::LineTo(_))
    }
}

/// An ordered sequence of [`PathOp`]s.
///
/// # Examples
///
/// ```
/// use arcanum_core::{geometry::Point, path::Path};
///
/// let mut path = Path::new();
/// path.move_to(Point::new(0.0, 0.0));
/// path.line_to(Point::new(1.0, 0.0));
///
/// assert_eq!(path.len(), 2);
/// assert_eq!(path.line_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    ops: Vec<PathOp>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty path able to hold `capacity` operations without reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            ops: Vec::with_capacity(capacity),
        }
    }

    /// Appends an operation.
    pub fn push(&mut self, op: PathOp) {
        self.ops.push(op);
    }

    /// Appends a pen-up move.
    pub fn move_to(&mut self, point: Point) {
        self.push(PathOp::MoveTo(point));
    }

    /// Appends a pen-down line.
    pub fn line_to(&mut self, point: Point) {
        self.push(PathOp::LineTo(point));
    }

    /// Appends every operation of `other` after the operations of this path.
    pub fn extend(&mut self, other: Path) {
        self.ops.extend(other.ops);
    }

    /// The operations in order.
    pub fn ops(&self) -> &[PathOp] {
        &self.ops
    }

    pub fn iter(&self) -> slice::Iter<'_, PathOp> {
        self.ops.iter()
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Number of drawn segments, i.e. [`PathOp::LineTo`] operations.
    pub fn line_count(&self) -> usize {
        self.ops.iter().filter(|op| op.is_draw()).count()
    }

    /// Every point the pen visits, in order.
    pub fn vertices(&self) -> impl Iterator<Item = Point> + '_ {
        self.ops.iter().map(|op| op.point())
    }

    /// The drawn segments as `(from, to)` pairs.
    ///
    /// A segment starts wherever the pen was before the [`PathOp::LineTo`].
    /// A `LineTo` at the very start of the path has no origin and is skipped.
    pub fn segments(&self) -> Vec<(Point, Point)> {
        self.ops
            .windows(2)
            .filter_map(|pair| match pair[1] {
                PathOp::LineTo(to) => Some((pair[0].point(), to)),
                PathOp::MoveTo(_) => None,
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a PathOp;
    type IntoIter = slice::Iter<'a, PathOp>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<PathOp> for Path {
    fn from_iter<I: IntoIterator<Item = PathOp>>(iter: I) -> Self {
        Self {
            ops: iter.into_iter().collect(),
        }
    }
}
