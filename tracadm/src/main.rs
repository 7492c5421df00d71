// Standard library
use std::env;

// External crates
use clap::Parser;
use tracing::debug;

// Internal imports
use tracadm_core::trac_error;
use tracadm_messages::{msg, MESSAGES};

// Local modules
mod cli;
mod commands;

use cli::Args;
use commands::execute_command;

fn main() {
    let args = Args::parse();

    // --debug raises the default filter unless the operator already set one
    if args.debug && env::var("LOG_LEVEL").is_err() {
        env::set_var("LOG_LEVEL", "debug");
    }

    // Hold the guard so file logging flushes on exit
    let _log_guard = tracadm_logging::init_subscriber();
    debug!("Starting tracadm");

    if let Err(e) = execute_command(args) {
        trac_error!("{}", msg!(MESSAGES.common.error_generic, error = e.to_string()));
        std::process::exit(1);
    }
}
