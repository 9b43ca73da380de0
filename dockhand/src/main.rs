// External crates
use clap::Parser;
use tracing::debug;

// Internal imports
use dockhand_core::{dock_error, dock_error_hint};
use dockhand_logging::init_subscriber;

// Local modules
mod cli;
mod commands;
mod context;
mod terminal;

use cli::Args;
use commands::execute_command;

fn main() {
    let args = Args::parse();

    // Diagnostics go to stderr; stdout stays clean for command output.
    init_subscriber(args.debug);

    if args.debug {
        debug!("Starting dockhand command");
    }

    // Top-level error sink: render the failure and exit nonzero.
    let debug_enabled = args.debug;
    if let Err(e) = execute_command(args) {
        dock_error!("{}", e);
        if !debug_enabled {
            dock_error_hint!("Re-run with --debug for more detail");
        }
        std::process::exit(1);
    }
}
