use serde::{Deserialize, Serialize};

/// What a reservation is for. The original records used a -1 sentinel in
/// whichever of the two id fields was unused; the enum makes "exactly one
/// target" unrepresentable-to-violate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum ReservationTarget {
    Flight(u32),
    Hotel(u32),
}

impl ReservationTarget {
    pub fn flight_number(&self) -> Option<u32> {
        match self {
            Self::Flight(n) => Some(*n),
            Self::Hotel(_) => None,
        }
    }

    pub fn hotel_id(&self) -> Option<u32> {
        match self {
            Self::Hotel(id) => Some(*id),
            Self::Flight(_) => None,
        }
    }
}

impl std::fmt::Display for ReservationTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Flight(n) => write!(f, "Flight {n}"),
            Self::Hotel(id) => write!(f, "Hotel {id}"),
        }
    }
}

/// Reservation lifecycle state.
///
/// Display strings match the legacy record vocabulary ("Cancel Requested"
/// has a space) so saved reports and filters read the same as before.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
pub enum ReservationStatus {
    Pending,
    Approved,
    Rejected,
    Cancelled,
    #[serde(rename = "Cancel Requested")]
    #[strum(serialize = "Cancel Requested")]
    CancelRequested,
}

impl ReservationStatus {
    /// States the admin still has to act on.
    pub fn needs_attention(&self) -> bool {
        matches!(self, Self::Pending | Self::CancelRequested)
    }
}

/// A booking request by a traveler against a flight or hotel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    /// Unique, strictly increasing across restarts (persisted counter).
    pub id: u32,
    /// The account that placed the booking.
    pub username: String,
    pub target: ReservationTarget,
    pub status: ReservationStatus,
}
