// ── Accounts ──
//
// Plaintext credential checks against the user list. Hardening is an
// explicit non-goal; the interesting part is only that the admin and
// traveler logins are separate doors.

use crate::error::CoreError;
use crate::model::{Role, User};
use crate::store::DataStore;

impl DataStore {
    /// Create an account. Usernames are the unique key.
    pub fn register(&mut self, username: &str, password: &str, role: Role) -> Result<(), CoreError> {
        self.add_user(User {
            username: username.to_string(),
            password: password.to_string(),
            role,
        })
    }

    /// Check credentials for a login door. A matching account with the
    /// wrong role is `WrongRole`, distinct from bad credentials, so the
    /// shell can explain "right password, wrong menu".
    pub fn login(
        &self,
        username: &str,
        password: &str,
        expected_role: Role,
    ) -> Result<&User, CoreError> {
        let user = self
            .users()
            .iter()
            .find(|u| u.username == username && u.password == password)
            .ok_or(CoreError::InvalidCredentials)?;
        if user.role != expected_role {
            tracing::warn!(username, expected = %expected_role, actual = %user.role, "role mismatch at login");
            return Err(CoreError::WrongRole);
        }
        Ok(user)
    }
}
