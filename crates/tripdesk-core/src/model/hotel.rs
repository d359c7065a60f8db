use serde::{Deserialize, Serialize};

/// A hotel property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hotel {
    /// Unique key.
    pub id: u32,
    pub name: String,
    pub location: String,
    /// Total room capacity. Available rooms are derived from reservations.
    pub rooms: u32,
}
