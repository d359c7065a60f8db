//! Flight listing.

use tripdesk_core::DataStore;

use crate::cli::{FlightsArgs, FlightsCommand, GlobalOpts, OutputFormat};
use crate::error::CliError;
use crate::output::{self, FlightRow};

pub fn handle(
    store: &DataStore,
    args: FlightsArgs,
    output: &OutputFormat,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        FlightsCommand::List => {
            let rows: Vec<FlightRow> = store
                .flights()
                .iter()
                .map(|f| FlightRow::new(store, f))
                .collect();
            if rows.is_empty() {
                if !global.quiet {
                    eprintln!("No flights on file.");
                }
                return Ok(());
            }
            let rendered = output::render_list(output, &rows, |r| r.number.to_string());
            output::print_output(&rendered, global.quiet);
            Ok(())
        }
    }
}
