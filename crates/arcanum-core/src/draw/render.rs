//! The render-target seam between shapes and output backends.

use crate::{
    draw::StrokeDefinition,
    geometry::Point,
    path::{Path, PathOp},
};

/// A pen-plotter style drawing surface.
///
/// The stroke is configured once with [`set_stroke`](Self::set_stroke) before
/// drawing; after that the target receives pen-up moves and pen-down lines in
/// order. Each diagram draws onto its own target, so targets never need to be
/// shared between threads.
pub trait RenderTarget {
    /// Configures the pen used for all following lines.
    fn set_stroke(&mut self, stroke: &StrokeDefinition);

    /// Pen-up travel to `point`.
    fn move_to(&mut self, point: Point);

    /// Pen-down travel to `point`, drawing a segment.
    fn line_to(&mut self, point: Point);

    /// Replays a single operation.
    fn apply(&mut self, op: PathOp) {
        match op {
            PathOp::MoveTo(point) => self.move_to(point),
            PathOp::LineTo(point) => self.line_to(point),
        }
    }

    /// Replays every operation of `path` in order.
    fn trace(&mut self, path: &Path) {
        for op in path {
            self.apply(*op);
        }
    }
}

/// A [`RenderTarget`] that records what it is given.
///
/// # Examples
///
/// ```
/// use arcanum_core::{
///     draw::{PathRecorder, RenderTarget},
///     shape::{Circle, Shape},
/// };
///
/// let circle = Circle::new(10.0).unwrap();
/// let mut recorder = PathRecorder::new();
/// recorder.trace(&circle.produce_path());
///
/// assert_eq!(recorder.path(), &circle.produce_path());
/// ```
#[derive(Debug, Clone, Default)]
pub struct PathRecorder {
    stroke: Option<StrokeDefinition>,
    path: Path,
}

impl PathRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The stroke last configured, if any.
    pub fn stroke(&self) -> Option<&StrokeDefinition> {
        self.stroke.as_ref()
    }

    /// The recorded operations.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn into_path(self) -> Path {
        self.path
    }
}

impl RenderTarget for PathRecorder {
    fn set_stroke(&mut self, stroke: &StrokeDefinition) {
        self.stroke = Some(stroke.clone());
    }

    fn move_to(&mut self, point: Point) {
        self.path.move_to(point);
    }

    fn line_to(&mut self, point: Point) {
        self.path.line_to(point);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{RegularPolygon, Shape};

    #[test]
    fn test_recorder_replays_in_order() {
        let triangle = RegularPolygon::new(1.0, 3).unwrap().produce_path();

        let mut recorder = PathRecorder::new();
        recorder.trace(&triangle);
        recorder.trace(&triangle);

        let ops = recorder.path().ops();
        assert_eq!(ops.len(), 2 * triangle.len());
        assert_eq!(&ops[..triangle.len()], triangle.ops());
        assert_eq!(&ops[triangle.len()..], triangle.ops());
    }

    #[test]
    fn test_recorder_keeps_stroke() {
        let mut recorder = PathRecorder::new();
        assert!(recorder.stroke().is_none());

        recorder.set_stroke(&StrokeDefinition::default());
        assert_eq!(recorder.stroke().map(|s| s.width()), Some(2.0));
    }
}
