use serde::{Deserialize, Serialize};

/// A scheduled flight.
///
/// Departure and arrival are opaque schedule labels (e.g. "2026-09-01 14:30");
/// the system never does time arithmetic on them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flight {
    /// Unique key.
    pub number: u32,
    pub origin: String,
    pub destination: String,
    pub departure: String,
    pub arrival: String,
    /// Total seat capacity. Available seats are derived from reservations,
    /// never decremented in place.
    pub seats: u32,
}

impl Flight {
    /// One-line route summary for prompts and logs.
    pub fn route(&self) -> String {
        format!("{} -> {}", self.origin, self.destination)
    }
}
