//! Arcanum CLI entry point.

use std::process;

use clap::Parser;
use log::{LevelFilter, debug, error, info};

use arcanum_cli::{Args, error_adapter::render_reports};

fn main() {
    // Install miette's panic hook before anything can panic
    miette::set_panic_hook();

    let args = Args::parse();

    // Logging comes up before the spellbook is touched; an unknown level
    // falls back to warnings only
    let log_level = args.level_filter().unwrap_or_else(|| {
        eprintln!(
            "Invalid log level: {}. Using 'warn' instead.",
            args.log_level
        );
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    info!(log_level:?; "Starting Arcanum");
    debug!(args:?; "Parsed arguments");

    // Render the whole spellbook
    if let Err(err) = arcanum_cli::run(&args) {
        let reporter = miette::GraphicalReportHandler::new();

        // One report per failed spell, then a non-zero exit
        for report in render_reports(&reporter, &err) {
            error!("{report}");
        }

        process::exit(1);
    }

    info!("Completed successfully");
}
