//! Error types for Arcanum operations.
//!
//! This module provides the main error type [`ArcanumError`] which wraps
//! the error conditions that can occur while building and rendering diagrams.

use std::io;

use thiserror::Error;

/// The main error type for Arcanum operations.
#[derive(Debug, Error)]
pub enum ArcanumError {
    /// A shape was constructed with a non-positive radius or precision, or
    /// with more sides than a path can hold.
    #[error(transparent)]
    Geometry(#[from] arcanum_core::Error),

    #[error("unknown school of magic `{0}`")]
    UnknownSchool(String),

    /// An attribute value whose sigil would have more sides than
    /// [`MAX_SIDES`](arcanum_core::shape::MAX_SIDES).
    #[error("{attribute} value {value} is too large for a sigil")]
    AttributeTooLarge {
        attribute: crate::spell::Attribute,
        value: u32,
    },

    /// An output label that is not a plain file name.
    #[error("invalid output label `{0}`: must be a non-empty file name without path separators")]
    InvalidLabel(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error + Send + Sync>),
}

impl From<crate::export::Error> for ArcanumError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}
