//! Non-interactive subcommand handlers: load the store, render, exit.

pub mod config_cmd;
pub mod flights;
pub mod hotels;
pub mod report;
pub mod reservations;

use std::path::Path;

use tripdesk_core::DataStore;

use crate::cli::{Command, GlobalOpts, OutputFormat};
use crate::error::{CliError, from_core};

/// Dispatch a store-backed command to the appropriate handler. `output`
/// is already resolved (flag > env > config file > table).
pub fn dispatch(
    cmd: Command,
    data_dir: &Path,
    output: &OutputFormat,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let store = DataStore::load(data_dir).map_err(|e| from_core(e, data_dir))?;

    match cmd {
        Command::Flights(args) => flights::handle(&store, args, output, global),
        Command::Hotels(args) => hotels::handle(&store, args, output, global),
        Command::Reservations(args) => reservations::handle(&store, args, output, global),
        Command::Report => report::handle(&store, data_dir, global),
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}
