use serde::{Deserialize, Serialize};

/// Account role. A boolean in the original flat files; an enum here so
/// role checks read as what they are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[strum(serialize = "Admin")]
    Admin,
    #[strum(serialize = "Traveler")]
    Traveler,
}

/// A registered account.
///
/// Passwords are stored in plaintext -- credential hardening is explicitly
/// out of scope for this tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique key.
    pub username: String,
    pub password: String,
    pub role: Role,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
