// ── Reservation report ──
//
// Plain-text dump of every reservation, written next to the data files.
// Kept deliberately dumb: the report is for printing or grepping, the
// JSON records are the machine-readable source.

use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::error::CoreError;
use crate::store::DataStore;

pub const REPORT_FILE: &str = "reservations_report.txt";

/// Render the report body.
pub fn render_report(store: &DataStore) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Reservations Report (generated {})\n",
        Utc::now().format("%Y-%m-%d %H:%M UTC")
    ));

    if store.reservations().is_empty() {
        out.push_str("No reservations on file.\n");
        return out;
    }

    out.push_str("ID | User | Target | Status\n");
    for r in store.reservations() {
        out.push_str(&format!(
            "{} | {} | {} | {}\n",
            r.id, r.username, r.target, r.status
        ));
    }
    out
}

/// Write the report into `dir`, returning the path written.
pub fn write_report(store: &DataStore, dir: &Path) -> Result<PathBuf, CoreError> {
    let path = dir.join(REPORT_FILE);
    std::fs::write(&path, render_report(store)).map_err(|source| CoreError::WriteFailed {
        file: REPORT_FILE.into(),
        source,
    })?;
    tracing::info!(path = %path.display(), "reservation report written");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Flight;

    #[test]
    fn empty_store_reports_no_reservations() {
        let report = render_report(&DataStore::new());
        assert!(report.contains("No reservations on file."));
    }

    #[test]
    fn report_lists_each_reservation_with_status() {
        let mut store = DataStore::new();
        store
            .add_flight(Flight {
                number: 100,
                origin: "LIS".into(),
                destination: "OPO".into(),
                departure: "08:00".into(),
                arrival: "09:00".into(),
                seats: 5,
            })
            .unwrap();
        let id = store.reserve_flight("ana", 100).unwrap().id;
        store.approve(id).unwrap();

        let report = render_report(&store);
        assert!(report.contains(&format!("{id} | ana | Flight 100 | Approved")));
    }

    #[test]
    fn write_report_creates_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_report(&DataStore::new(), dir.path()).unwrap();
        assert!(path.exists());
        assert_eq!(path.file_name().unwrap(), REPORT_FILE);
    }
}
