//! Reservation report generation.

use std::path::Path;

use tripdesk_core::{DataStore, report};

use crate::cli::GlobalOpts;
use crate::error::{CliError, from_core};

pub fn handle(store: &DataStore, data_dir: &Path, global: &GlobalOpts) -> Result<(), CliError> {
    let path = report::write_report(store, data_dir).map_err(|e| from_core(e, data_dir))?;
    if !global.quiet {
        eprintln!("Report written to {}", path.display());
    }
    Ok(())
}
