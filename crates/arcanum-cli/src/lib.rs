//! CLI logic for the Arcanum sigil generator.
//!
//! Every spell in a spellbook is rendered to its own SVG file. Spells are
//! independent: a spell that fails is reported and the remaining spells are
//! still written.

pub mod error_adapter;
pub mod spellbook;

mod args;
mod config;
mod error;

pub use args::Args;
pub use error::{CliError, SpellFailure};

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::{error, info, warn};

use arcanum::{ArcanumError, DiagramBuilder};

use spellbook::{SpellEntry, Spellbook};

/// Run the Arcanum CLI application
///
/// # Errors
///
/// Returns [`CliError::Arcanum`] if the configuration cannot be loaded or the
/// output directory cannot be created, [`CliError::Spellbook`] for a
/// malformed spellbook (including spell names that are duplicated or are not
/// plain file names), and [`CliError::Spells`] listing every spell that
/// failed to render.
pub fn run(args: &Args) -> Result<(), CliError> {
    info!(
        spellbook = args.input,
        output_dir = args.output_dir;
        "Processing spellbook"
    );

    let app_config = config::load_config(args.config.as_ref())?;
    let spellbook = Spellbook::load(&args.input)?;

    if spellbook.is_empty() {
        warn!(spellbook = args.input; "Spellbook contains no spells");
        return Ok(());
    }

    fs::create_dir_all(&args.output_dir).map_err(ArcanumError::from)?;

    let builder = DiagramBuilder::new(app_config);
    let failures: Vec<SpellFailure> = spellbook
        .spells()
        .iter()
        .filter_map(|entry| match render_spell(&builder, entry, &args.output_dir) {
            Ok(file_name) => {
                info!(
                    spell = entry.name(),
                    output_file = file_name.display().to_string();
                    "Spell rendered"
                );
                None
            }
            Err(err) => {
                error!(spell = entry.name(), err:err; "Failed to render spell");
                Some(SpellFailure::new(entry.name(), err))
            }
        })
        .collect();

    if failures.is_empty() {
        info!(spells = spellbook.spells().len(); "Spellbook rendered");
        Ok(())
    } else {
        Err(CliError::Spells(failures))
    }
}

fn render_spell(
    builder: &DiagramBuilder,
    entry: &SpellEntry,
    output_dir: impl AsRef<Path>,
) -> Result<PathBuf, ArcanumError> {
    let attributes = entry.attributes()?;
    let diagram = builder.build(attributes)?;
    builder.save_svg(&diagram, output_dir, entry.name())
}
