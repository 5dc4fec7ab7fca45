//! Command-line argument definitions for the Arcanum CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control the spellbook to render, where the
//! diagrams are written, configuration file selection, and logging verbosity.

use std::str::FromStr;

use clap::Parser;
use log::LevelFilter;

/// Command-line arguments for the Arcanum sigil generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the spellbook (TOML)
    #[arg(help = "Path to the spellbook file")]
    pub input: String,

    /// Directory the `<spell>.svg` files are written to
    #[arg(short, long, default_value = ".")]
    pub output_dir: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// The requested log level, or `None` if `--log-level` is not a level name.
    pub fn level_filter(&self) -> Option<LevelFilter> {
        LevelFilter::from_str(&self.log_level).ok()
    }
}
