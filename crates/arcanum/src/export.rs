//! Export functionality for Arcanum diagrams.
//!
//! This is the final stage of the pipeline:
//!
//! ```text
//! SpellAttributes
//!     ↓ layout
//! Diagram (eight sigils)
//!     ↓ draw (RenderTarget)
//! Output File (this module)
//! ```
//!
//! # Available Backends
//!
//! - [`svg`] - SVG output via [`svg::SvgRenderer`]
//!
//! # Error Handling
//!
//! Export operations return [`Error`], covering rendering failures and I/O
//! errors. [`Error`] converts into [`ArcanumError::Export`] at the crate
//! boundary.
//!
//! [`ArcanumError::Export`]: crate::ArcanumError::Export

/// SVG export backend.
pub mod svg;

/// Errors that can occur during diagram export.
#[derive(Debug)]
pub enum Error {
    /// A rendering or conversion failure described by `message`.
    Render(String),
    /// An I/O error encountered while writing output.
    Io(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "Render error: {msg}"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Render(_) => None,
            Self::Io(err) => Some(err),
        }
    }
}
