use std::fmt;

use super::auth::UserRole;

/// Profile data for a new account; the password is still plaintext here
/// and is hashed by the store before insert
#[derive(Clone)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub full_name: String,
    pub rank: String,
    pub unit: String,
    pub notes: String,
    pub role: UserRole,
}

impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("full_name", &self.full_name)
            .field("rank", &self.rank)
            .field("unit", &self.unit)
            .field("role", &self.role)
            .finish()
    }
}
