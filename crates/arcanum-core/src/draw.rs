//! Drawing primitives shared by renderers.
//!
//! - [`StrokeDefinition`] and friends describe the pen.
//! - [`RenderTarget`] is the sink that shape paths are replayed onto.
//! - [`PathRecorder`] is an in-memory [`RenderTarget`].

mod render;
mod stroke;

pub use render::{PathRecorder, RenderTarget};
pub use stroke::{StrokeCap, StrokeDefinition, StrokeJoin};
