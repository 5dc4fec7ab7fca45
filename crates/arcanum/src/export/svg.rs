//! SVG rendering of diagrams.
//!
//! [`SvgRenderer`] is a [`RenderTarget`] that accumulates pen operations and
//! turns them into a single stroked `<path>` on a fixed canvas.
//!
//! Diagrams are built around their own centre with the y axis pointing up.
//! The renderer places that origin at the middle of the canvas and flips the
//! y axis so the school sigil ends up at the top of the image.

use std::{fs::File, io::Write, path::Path};

use log::{debug, error, info};
use svg::{
    Document,
    node::element::{self as svg_element, path::Data},
};

use arcanum_core::{
    apply_stroke,
    color::Color,
    draw::{RenderTarget, StrokeDefinition},
    geometry::{Point, Size},
    path::PathOp,
};

use crate::export;

/// Renders pen operations to an SVG document.
///
/// # Examples
///
/// ```
/// use arcanum::export::svg::SvgRenderer;
/// use arcanum_core::{
///     draw::{RenderTarget, StrokeDefinition},
///     geometry::Size,
///     shape::{Circle, Shape},
/// };
///
/// let mut renderer = SvgRenderer::new(Size::square(200.0));
/// renderer.set_stroke(&StrokeDefinition::default());
/// renderer.trace(&Circle::new(50.0).unwrap().produce_path());
///
/// let svg = renderer.render_string().unwrap();
/// assert!(svg.contains("<path"));
/// ```
#[derive(Debug, Clone)]
pub struct SvgRenderer {
    canvas: Size,
    stroke: StrokeDefinition,
    background: Option<Color>,
    ops: Vec<PathOp>,
}

impl SvgRenderer {
    /// Creates a renderer for a canvas of the given size with the default pen.
    pub fn new(canvas: Size) -> Self {
        Self {
            canvas,
            stroke: StrokeDefinition::default(),
            background: None,
            ops: Vec::new(),
        }
    }

    /// Fills the canvas with `color` behind the drawing.
    pub fn with_background(mut self, background: Option<Color>) -> Self {
        self.background = background;
        self
    }

    pub fn canvas(&self) -> Size {
        self.canvas
    }

    /// Number of operations received so far.
    pub fn op_count(&self) -> usize {
        self.ops.len()
    }

    /// Maps a diagram point onto the canvas.
    fn to_canvas(&self, point: Point) -> Point {
        let centre = self.canvas.center();
        Point::new(centre.x() + point.x(), centre.y() - point.y())
    }

    /// Builds the path data, rejecting coordinates SVG cannot represent.
    fn path_data(&self) -> Result<Data, export::Error> {
        self.ops.iter().try_fold(Data::new(), |data, op| {
            let point = self.to_canvas(op.point());
            if !(point.x().is_finite() && point.y().is_finite()) {
                return Err(export::Error::Render(format!(
                    "non-finite coordinate ({}, {})",
                    point.x(),
                    point.y()
                )));
            }

            let position = (point.x() as f32, point.y() as f32);
            Ok(match op {
                PathOp::MoveTo(_) => data.move_to(position),
                PathOp::LineTo(_) => data.line_to(position),
            })
        })
    }

    /// Builds the SVG document for everything drawn so far.
    ///
    /// # Errors
    ///
    /// Returns [`export::Error::Render`] if any coordinate is NaN or infinite.
    pub fn to_document(&self) -> Result<Document, export::Error> {
        let width = self.canvas.width() as f32;
        let height = self.canvas.height() as f32;

        let mut doc = Document::new()
            .set("viewBox", format!("0 0 {width} {height}"))
            .set("width", width)
            .set("height", height);

        if let Some(background) = &self.background {
            let rect = svg_element::Rectangle::new()
                .set("x", 0)
                .set("y", 0)
                .set("width", width)
                .set("height", height)
                .set("fill", background);
            doc = doc.add(rect);
        }

        if !self.ops.is_empty() {
            let path = svg_element::Path::new()
                .set("fill", "none")
                .set("d", self.path_data()?);
            doc = doc.add(apply_stroke!(path, &self.stroke));
        }

        debug!(ops = self.ops.len(), width, height; "SVG document rendered");
        Ok(doc)
    }

    /// Renders the document to a string.
    ///
    /// # Errors
    ///
    /// See [`to_document`](Self::to_document).
    pub fn render_string(&self) -> Result<String, export::Error> {
        Ok(self.to_document()?.to_string())
    }

    /// Writes the document to `file_name`.
    ///
    /// # Errors
    ///
    /// Returns [`export::Error::Io`] if the file cannot be created or written,
    /// or a render error from [`to_document`](Self::to_document).
    pub fn save(&self, file_name: impl AsRef<Path>) -> Result<(), export::Error> {
        let file_name = file_name.as_ref();
        let doc = self.to_document()?;

        info!(file_name = file_name.display().to_string(); "Creating SVG file");
        let mut f = match File::create(file_name) {
            Ok(file) => file,
            Err(err) => {
                error!(file_name = file_name.display().to_string(), err:err; "Failed to create SVG file");
                return Err(export::Error::Io(err));
            }
        };

        if let Err(err) = write!(f, "{doc}") {
            error!(file_name = file_name.display().to_string(), err:err; "Failed to write SVG content");
            return Err(export::Error::Io(err));
        }

        Ok(())
    }
}

impl RenderTarget for SvgRenderer {
    fn set_stroke(&mut self, stroke: &StrokeDefinition) {
        self.stroke = stroke.clone();
    }

    fn move_to(&mut self, point: Point) {
        self.ops.push(PathOp::MoveTo(point));
    }

    fn line_to(&mut self, point: Point) {
        self.ops.push(PathOp::LineTo(point));
    }
}
