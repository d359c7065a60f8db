// ── Flat-file persistence ──
//
// One file per collection in a single data directory, rewritten whole on
// save. A missing file means an empty collection; a malformed record is a
// hard error naming the file and line.
//
// Formats:
//   flights.txt        pipe-delimited, hand-editable
//   hotels.txt         pipe-delimited, hand-editable
//   users.json         JSON array (not meant for hand edits)
//   reservations.json  JSON array
//   last_id.txt        single integer, the reservation-id counter

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::error::CoreError;
use crate::model::{Flight, Hotel, Reservation, User};

use super::data_store::{DataStore, RESERVATION_ID_SEED};

pub const USERS_FILE: &str = "users.json";
pub const FLIGHTS_FILE: &str = "flights.txt";
pub const HOTELS_FILE: &str = "hotels.txt";
pub const RESERVATIONS_FILE: &str = "reservations.json";
pub const LAST_ID_FILE: &str = "last_id.txt";

impl DataStore {
    /// Load every collection from `dir`. Missing files yield empty
    /// collections (and the seed counter); a missing directory yields a
    /// fresh store.
    pub fn load(dir: &Path) -> Result<Self, CoreError> {
        let store = Self {
            users: load_json(dir.join(USERS_FILE))?,
            flights: load_flights(&dir.join(FLIGHTS_FILE))?,
            hotels: load_hotels(&dir.join(HOTELS_FILE))?,
            reservations: load_json(dir.join(RESERVATIONS_FILE))?,
            last_reservation_id: load_last_id(&dir.join(LAST_ID_FILE))?,
        };
        tracing::info!(
            users = store.users.len(),
            flights = store.flights.len(),
            hotels = store.hotels.len(),
            reservations = store.reservations.len(),
            last_id = store.last_reservation_id,
            "data store loaded"
        );
        Ok(store)
    }

    /// Rewrite every file under `dir`, creating the directory if needed.
    pub fn save(&self, dir: &Path) -> Result<(), CoreError> {
        fs::create_dir_all(dir).map_err(|source| CoreError::WriteFailed {
            file: dir.display().to_string(),
            source,
        })?;

        save_json(&dir.join(USERS_FILE), &self.users)?;
        save_json(&dir.join(RESERVATIONS_FILE), &self.reservations)?;
        write_file(&dir.join(FLIGHTS_FILE), &render_flights(&self.flights))?;
        write_file(&dir.join(HOTELS_FILE), &render_hotels(&self.hotels))?;
        write_file(
            &dir.join(LAST_ID_FILE),
            &format!("{}\n", self.last_reservation_id),
        )?;

        tracing::debug!(dir = %dir.display(), "data store saved");
        Ok(())
    }
}

// ── JSON collections (users, reservations) ───────────────────────────

fn load_json<T: serde::de::DeserializeOwned>(path: std::path::PathBuf) -> Result<Vec<T>, CoreError> {
    let Some(contents) = read_optional(&path)? else {
        return Ok(Vec::new());
    };
    serde_json::from_str(&contents).map_err(|e| CoreError::DecodeFailed {
        file: file_name(&path),
        reason: e.to_string(),
    })
}

fn save_json<T: serde::Serialize>(path: &Path, records: &[T]) -> Result<(), CoreError> {
    let json = serde_json::to_string_pretty(records).map_err(|e| CoreError::DecodeFailed {
        file: file_name(path),
        reason: e.to_string(),
    })?;
    write_file(path, &format!("{json}\n"))
}

// ── Pipe-delimited collections (flights, hotels) ─────────────────────

fn render_flights(flights: &[Flight]) -> String {
    let mut out = String::new();
    for f in flights {
        let _ = writeln!(
            out,
            "{}|{}|{}|{}|{}|{}",
            f.number, f.origin, f.destination, f.departure, f.arrival, f.seats
        );
    }
    out
}

fn load_flights(path: &Path) -> Result<Vec<Flight>, CoreError> {
    parse_lines::<_, 6>(path, |fields, err| {
        Ok(Flight {
            number: parse_u32(fields[0]).map_err(|r| err(&r))?,
            origin: fields[1].to_string(),
            destination: fields[2].to_string(),
            departure: fields[3].to_string(),
            arrival: fields[4].to_string(),
            seats: parse_u32(fields[5]).map_err(|r| err(&r))?,
        })
    })
}

fn render_hotels(hotels: &[Hotel]) -> String {
    let mut out = String::new();
    for h in hotels {
        let _ = writeln!(out, "{}|{}|{}|{}", h.id, h.name, h.location, h.rooms);
    }
    out
}

fn load_hotels(path: &Path) -> Result<Vec<Hotel>, CoreError> {
    parse_lines::<_, 4>(path, |fields, err| {
        Ok(Hotel {
            id: parse_u32(fields[0]).map_err(|r| err(&r))?,
            name: fields[1].to_string(),
            location: fields[2].to_string(),
            rooms: parse_u32(fields[3]).map_err(|r| err(&r))?,
        })
    })
}

/// Parse a pipe-delimited file line by line, skipping blanks. `parse` gets
/// the split fields plus an error constructor already carrying file + line.
fn parse_lines<T, const N: usize>(
    path: &Path,
    parse: impl Fn(&[&str; N], &dyn Fn(&str) -> CoreError) -> Result<T, CoreError>,
) -> Result<Vec<T>, CoreError> {
    let Some(contents) = read_optional(path)? else {
        return Ok(Vec::new());
    };

    let mut records = Vec::new();
    for (idx, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let err = |reason: &str| CoreError::MalformedRecord {
            file: file_name(path),
            line: idx + 1,
            reason: reason.to_string(),
        };
        let fields: Vec<&str> = line.split('|').collect();
        let fields: [&str; N] = fields
            .try_into()
            .map_err(|_| err("wrong number of pipe-delimited fields"))?;
        records.push(parse(&fields, &err)?);
    }
    Ok(records)
}

fn parse_u32(s: &str) -> Result<u32, String> {
    s.trim()
        .parse()
        .map_err(|_| format!("'{s}' is not a non-negative integer"))
}

// ── Reservation-id counter ───────────────────────────────────────────

fn load_last_id(path: &Path) -> Result<u32, CoreError> {
    let Some(contents) = read_optional(path)? else {
        return Ok(RESERVATION_ID_SEED);
    };
    let value: u32 = contents
        .trim()
        .parse()
        .map_err(|_| CoreError::MalformedRecord {
            file: file_name(path),
            line: 1,
            reason: format!("'{}' is not a reservation id", contents.trim()),
        })?;
    // The counter must leave headroom for the next issued id.
    if value == u32::MAX {
        return Err(CoreError::MalformedRecord {
            file: file_name(path),
            line: 1,
            reason: "reservation id counter is exhausted".to_string(),
        });
    }
    Ok(value)
}

// ── I/O helpers ──────────────────────────────────────────────────────

/// Read a file, mapping "not found" to `None` (start-empty semantics).
fn read_optional(path: &Path) -> Result<Option<String>, CoreError> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(CoreError::ReadFailed {
            file: file_name(path),
            source,
        }),
    }
}

fn write_file(path: &Path, contents: &str) -> Result<(), CoreError> {
    fs::write(path, contents).map_err(|source| CoreError::WriteFailed {
        file: file_name(path),
        source,
    })
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ReservationStatus, ReservationTarget, Role};
    use pretty_assertions::assert_eq;

    fn sample_store() -> DataStore {
        let mut store = DataStore::new();
        store
            .add_user(User {
                username: "ana".into(),
                password: "hunter2".into(),
                role: Role::Admin,
            })
            .unwrap();
        store
            .add_flight(Flight {
                number: 100,
                origin: "LIS".into(),
                destination: "OPO".into(),
                departure: "2026-09-01 08:00".into(),
                arrival: "2026-09-01 09:00".into(),
                seats: 4,
            })
            .unwrap();
        store
            .add_hotel(Hotel {
                id: 7,
                name: "Hotel Mar".into(),
                location: "Faro".into(),
                rooms: 2,
            })
            .unwrap();
        let id = store.next_reservation_id();
        store.reservations.push(Reservation {
            id,
            username: "ana".into(),
            target: ReservationTarget::Flight(100),
            status: ReservationStatus::Pending,
        });
        store
    }

    #[test]
    fn round_trips_through_the_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let store = sample_store();
        store.save(dir.path()).unwrap();

        let loaded = DataStore::load(dir.path()).unwrap();
        assert_eq!(loaded.users(), store.users());
        assert_eq!(loaded.flights(), store.flights());
        assert_eq!(loaded.hotels(), store.hotels());
        assert_eq!(loaded.reservations(), store.reservations());
        assert_eq!(loaded.last_reservation_id(), store.last_reservation_id());
    }

    #[test]
    fn missing_directory_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = DataStore::load(&dir.path().join("nope")).unwrap();
        assert!(store.users().is_empty());
        assert!(store.flights().is_empty());
        assert_eq!(store.last_reservation_id(), 1000);
    }

    #[test]
    fn ids_keep_increasing_across_restarts() {
        let dir = tempfile::tempdir().unwrap();

        let mut store = DataStore::new();
        let first = store.next_reservation_id();
        store.save(dir.path()).unwrap();

        let mut reloaded = DataStore::load(dir.path()).unwrap();
        let second = reloaded.next_reservation_id();
        assert!(second > first, "{second} should be above {first}");
    }

    #[test]
    fn exhausted_id_counter_is_rejected_at_load() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(LAST_ID_FILE), format!("{}\n", u32::MAX)).unwrap();

        let err = DataStore::load(dir.path()).unwrap_err();
        match err {
            CoreError::MalformedRecord { file, reason, .. } => {
                assert_eq!(file, LAST_ID_FILE);
                assert!(reason.contains("exhausted"), "unexpected reason: {reason}");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn flights_file_is_pipe_delimited() {
        let dir = tempfile::tempdir().unwrap();
        sample_store().save(dir.path()).unwrap();

        let contents = std::fs::read_to_string(dir.path().join(FLIGHTS_FILE)).unwrap();
        assert_eq!(
            contents,
            "100|LIS|OPO|2026-09-01 08:00|2026-09-01 09:00|4\n"
        );
    }

    #[test]
    fn malformed_flight_line_names_file_and_line() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(FLIGHTS_FILE),
            "100|LIS|OPO|2026-09-01 08:00|2026-09-01 09:00|4\nnot|a|flight\n",
        )
        .unwrap();

        let err = DataStore::load(dir.path()).unwrap_err();
        match err {
            CoreError::MalformedRecord { file, line, .. } => {
                assert_eq!(file, FLIGHTS_FILE);
                assert_eq!(line, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn blank_lines_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(HOTELS_FILE), "\n7|Hotel Mar|Faro|2\n\n").unwrap();

        let store = DataStore::load(dir.path()).unwrap();
        assert_eq!(store.hotels().len(), 1);
        assert_eq!(store.find_hotel(7).unwrap().name, "Hotel Mar");
    }
}
