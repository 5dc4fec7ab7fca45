//! Spellbook loading.
//!
//! A spellbook is a TOML file listing the spells to render:
//!
//! ```toml
//! [[spell]]
//! name = "wall_of_fire"
//! school = "evocation"
//! range = 2
//! duration = 2
//! size = 5
//! potency = 4
//! ```
//!
//! `school` may be omitted for a spell without a school, and any omitted
//! attribute is 0. School names are resolved per spell, so one unknown school
//! does not prevent the rest of the book from loading.
//!
//! Names become output file stems: each must be a plain file name (see
//! [`arcanum::validate_label`]) and unique within the book. A book that breaks
//! either rule is rejected as a whole, before anything is written.

use std::{collections::HashSet, fs, path::Path};

use log::debug;
use serde::Deserialize;

use arcanum::{ArcanumError, spell::SpellAttributes};

use crate::error::CliError;

/// The spells of one spellbook, in file order.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Spellbook {
    #[serde(default, rename = "spell")]
    spells: Vec<SpellEntry>,
}

impl Spellbook {
    /// Read and parse a spellbook file.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Arcanum`] if the file cannot be read and
    /// [`CliError::Spellbook`] if it is not a valid spellbook.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CliError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(ArcanumError::from)?;

        let spellbook = Self::parse(&source).map_err(|message| CliError::Spellbook {
            path: path.to_path_buf(),
            message,
        })?;

        debug!(
            path = path.display().to_string(),
            spells = spellbook.spells.len();
            "Spellbook loaded"
        );
        Ok(spellbook)
    }

    /// Parse spellbook TOML and check the spell names.
    pub fn parse(source: &str) -> Result<Self, String> {
        let spellbook: Self = toml::from_str(source).map_err(|err| err.to_string())?;

        let mut seen = HashSet::with_capacity(spellbook.spells.len());
        for entry in &spellbook.spells {
            arcanum::validate_label(entry.name()).map_err(|err| err.to_string())?;
            if !seen.insert(entry.name()) {
                return Err(format!(
                    "spell name `{}` appears more than once; each spell needs its own output file",
                    entry.name()
                ));
            }
        }

        Ok(spellbook)
    }

    pub fn spells(&self) -> &[SpellEntry] {
        &self.spells
    }

    pub fn is_empty(&self) -> bool {
        self.spells.is_empty()
    }
}

/// A single `[[spell]]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SpellEntry {
    name: String,
    #[serde(default)]
    school: Option<String>,
    #[serde(default)]
    range: u32,
    #[serde(default)]
    duration: u32,
    #[serde(default)]
    size: u32,
    #[serde(default)]
    speed: u32,
    #[serde(default)]
    potency: u32,
}

impl SpellEntry {
    /// The spell's name, also used as its output file stem.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn school(&self) -> Option<&str> {
        self.school.as_deref()
    }

    /// Resolve the entry into spell attributes.
    ///
    /// # Errors
    ///
    /// Returns [`ArcanumError::UnknownSchool`] if the school is not recognised.
    pub fn attributes(&self) -> Result<SpellAttributes, ArcanumError> {
        SpellAttributes::new(
            None,
            self.range,
            self.duration,
            self.size,
            self.speed,
            self.potency,
        )
        .with_school_name(self.school())
    }
}
