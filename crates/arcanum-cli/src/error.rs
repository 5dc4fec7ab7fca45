//! Errors reported by the CLI.

use std::path::PathBuf;

use thiserror::Error;

use arcanum::ArcanumError;

/// A spell that could not be rendered.
#[derive(Debug)]
pub struct SpellFailure {
    name: String,
    error: ArcanumError,
}

impl SpellFailure {
    pub fn new(name: impl Into<String>, error: ArcanumError) -> Self {
        Self {
            name: name.into(),
            error,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn error(&self) -> &ArcanumError {
        &self.error
    }
}

/// The error type returned by [`run`](crate::run).
#[derive(Debug, Error)]
pub enum CliError {
    /// Setup failed before any spell was rendered.
    #[error(transparent)]
    Arcanum(#[from] ArcanumError),

    #[error("Invalid spellbook `{}`: {message}", path.display())]
    Spellbook { path: PathBuf, message: String },

    /// Some spells failed; the others were still written.
    #[error("{} spell(s) failed to render", .0.len())]
    Spells(Vec<SpellFailure>),
}
