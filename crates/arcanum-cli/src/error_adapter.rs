//! Error adapter for converting CLI errors to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.
//!
//! # Multi-Error Support
//!
//! When several spells of a spellbook fail, each failure is rendered
//! independently.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, GraphicalReportHandler, LabeledSpan};

use arcanum::{ArcanumError, shape::MAX_SIDES, spell::School};

use crate::error::{CliError, SpellFailure};

/// Adapter for a single [`ArcanumError`].
pub struct ErrorAdapter<'a>(pub &'a ArcanumError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            ArcanumError::Geometry(_) => "arcanum::geometry",
            ArcanumError::UnknownSchool(_) => "arcanum::unknown_school",
            ArcanumError::AttributeTooLarge { .. } => "arcanum::attribute_too_large",
            ArcanumError::InvalidLabel(_) => "arcanum::label",
            ArcanumError::Config(_) => "arcanum::config",
            ArcanumError::Io(_) => "arcanum::io",
            ArcanumError::Export(_) => "arcanum::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match &self.0 {
            ArcanumError::UnknownSchool(_) => Some(Box::new(school_help())),
            ArcanumError::Geometry(_) => Some(Box::new(
                "the canvas may be too small for its edge spacing, or the precision too fine; check `[canvas]` and `[geometry]` in the configuration",
            )),
            ArcanumError::AttributeTooLarge { attribute, .. } => Some(Box::new(format!(
                "`{attribute}` times its multiplier {} must not exceed {MAX_SIDES} polygon sides",
                attribute.multiplier()
            ))),
            _ => None,
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// Adapter for a spell that failed to render.
pub struct SpellAdapter<'a> {
    failure: &'a SpellFailure,
    inner: ErrorAdapter<'a>,
}

impl<'a> SpellAdapter<'a> {
    pub fn new(failure: &'a SpellFailure) -> Self {
        Self {
            failure,
            inner: ErrorAdapter(failure.error()),
        }
    }
}

impl fmt::Debug for SpellAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpellAdapter")
            .field("failure", &self.failure)
            .finish()
    }
}

impl fmt::Display for SpellAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "spell `{}`: {}", self.failure.name(), self.inner)
    }
}

impl std::error::Error for SpellAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.inner.source()
    }
}

impl MietteDiagnostic for SpellAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.inner.code()
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.inner.help()
    }
}

/// Adapter for CLI errors that do not wrap an [`ArcanumError`].
pub struct CliErrorAdapter<'a>(pub &'a CliError);

impl fmt::Debug for CliErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for CliErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for CliErrorAdapter<'_> {}

impl MietteDiagnostic for CliErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self.0 {
            CliError::Spellbook { .. } => Some(Box::new("arcanum::spellbook")),
            _ => None,
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self.0 {
            CliError::Spellbook { .. } => Some(Box::new(
                "each [[spell]] table needs a unique `name` usable as a file name; attributes are non-negative integers",
            )),
            _ => None,
        }
    }
}

/// A reportable error that can be rendered by miette.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A library error raised before any spell was rendered.
    Error(ErrorAdapter<'a>),
    /// One failed spell.
    Spell(SpellAdapter<'a>),
    /// A CLI-level error such as a malformed spellbook.
    Cli(CliErrorAdapter<'a>),
}

impl Reportable<'_> {
    fn diagnostic(&self) -> &dyn MietteDiagnostic {
        match self {
            Reportable::Error(e) => e,
            Reportable::Spell(s) => s,
            Reportable::Cli(c) => c,
        }
    }
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.diagnostic(), f)
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.diagnostic().source()
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diagnostic().code()
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diagnostic().help()
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        self.diagnostic().labels()
    }
}

fn school_help() -> String {
    let names: Vec<_> = School::ALL.iter().map(|school| school.name()).collect();
    format!(
        "valid schools: {}; omit `school` for a spell without one",
        names.join(", ")
    )
}

/// Render every diagnostic of `err` with `reporter`.
///
/// Each failed spell becomes its own report.
pub fn render_reports(reporter: &GraphicalReportHandler, err: &CliError) -> Vec<String> {
    to_reportables(err)
        .iter()
        .map(|reportable| {
            let mut writer = String::new();
            reporter
                .render_report(&mut writer, reportable)
                .expect("Writing to String buffer is infallible");
            writer
        })
        .collect()
}

/// Convert a [`CliError`] into a list of reportable errors.
///
/// For [`CliError::Spells`], this returns one [`Reportable`] for each failed
/// spell. For other error variants, this returns a single [`Reportable`].
pub fn to_reportables(err: &CliError) -> Vec<Reportable<'_>> {
    match err {
        CliError::Arcanum(error) => vec![Reportable::Error(ErrorAdapter(error))],
        CliError::Spells(failures) => failures
            .iter()
            .map(|failure| Reportable::Spell(SpellAdapter::new(failure)))
            .collect(),
        CliError::Spellbook { .. } => vec![Reportable::Cli(CliErrorAdapter(err))],
    }
}
