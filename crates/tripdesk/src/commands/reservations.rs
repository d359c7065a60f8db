//! Reservation listing with status and user filters.

use tripdesk_core::{DataStore, ReservationStatus};

use crate::cli::{GlobalOpts, OutputFormat, ReservationsArgs, ReservationsCommand};
use crate::error::CliError;
use crate::output::{self, ReservationRow};

pub fn handle(
    store: &DataStore,
    args: ReservationsArgs,
    output: &OutputFormat,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        ReservationsCommand::List { status, user } => {
            let status: Option<ReservationStatus> = status.map(Into::into);
            let rows: Vec<ReservationRow> = store
                .reservations()
                .iter()
                .filter(|r| status.is_none_or(|s| r.status == s))
                .filter(|r| user.as_deref().is_none_or(|u| r.username == u))
                .map(ReservationRow::new)
                .collect();

            if rows.is_empty() {
                if !global.quiet {
                    eprintln!("No matching reservations.");
                }
                return Ok(());
            }
            let rendered = output::render_list(output, &rows, |r| r.id.to_string());
            output::print_output(&rendered, global.quiet);
            Ok(())
        }
    }
}
