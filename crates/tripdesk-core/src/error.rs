// ── Core error types ──
//
// User-facing errors from tripdesk-core. Consumers never see raw I/O or
// serde failures for record data -- persistence errors carry the file
// (and line, where it exists) that produced them.

use thiserror::Error;

use crate::model::ReservationStatus;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Lookup errors ────────────────────────────────────────────────
    #[error("Flight {number} not found")]
    FlightNotFound { number: u32 },

    #[error("Hotel {id} not found")]
    HotelNotFound { id: u32 },

    #[error("User '{username}' not found")]
    UserNotFound { username: String },

    #[error("Reservation {id} not found")]
    ReservationNotFound { id: u32 },

    // ── Uniqueness errors ────────────────────────────────────────────
    #[error("Flight {number} already exists")]
    DuplicateFlight { number: u32 },

    #[error("Hotel {id} already exists")]
    DuplicateHotel { id: u32 },

    #[error("Username '{username}' is already taken")]
    DuplicateUser { username: String },

    // ── Booking errors ───────────────────────────────────────────────
    #[error("Flight {number} is fully booked")]
    FlightFull { number: u32 },

    #[error("Hotel {id} is fully booked")]
    HotelFull { id: u32 },

    #[error("Cannot {action} a reservation with status '{status}'")]
    InvalidTransition {
        action: &'static str,
        status: ReservationStatus,
    },

    #[error("Reservation {id} does not belong to '{username}'")]
    NotReservationOwner { id: u32, username: String },

    // ── Auth errors ──────────────────────────────────────────────────
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Access denied: account role does not match this login")]
    WrongRole,

    // ── Persistence errors ───────────────────────────────────────────
    #[error("Malformed record in {file} at line {line}: {reason}")]
    MalformedRecord {
        file: String,
        line: usize,
        reason: String,
    },

    #[error("Failed to read {file}")]
    ReadFailed {
        file: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {file}")]
    WriteFailed {
        file: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode {file}: {reason}")]
    DecodeFailed { file: String, reason: String },
}
