// tripdesk-core: domain layer between the flat files and the consoles (CLI/shell).

pub mod auth;
pub mod availability;
pub mod booking;
pub mod error;
pub mod model;
pub mod report;
pub mod store;

// ── Primary re-exports ──────────────────────────────────────────────
pub use error::CoreError;
pub use store::DataStore;

// Re-export model types at the crate root for ergonomics.
pub use model::{Flight, Hotel, Reservation, ReservationStatus, ReservationTarget, Role, User};
