//! Hotel listing.

use tripdesk_core::DataStore;

use crate::cli::{GlobalOpts, HotelsArgs, HotelsCommand, OutputFormat};
use crate::error::CliError;
use crate::output::{self, HotelRow};

pub fn handle(
    store: &DataStore,
    args: HotelsArgs,
    output: &OutputFormat,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        HotelsCommand::List => {
            let rows: Vec<HotelRow> = store
                .hotels()
                .iter()
                .map(|h| HotelRow::new(store, h))
                .collect();
            if rows.is_empty() {
                if !global.quiet {
                    eprintln!("No hotels on file.");
                }
                return Ok(());
            }
            let rendered = output::render_list(output, &rows, |r| r.id.to_string());
            output::print_output(&rendered, global.quiet);
            Ok(())
        }
    }
}
