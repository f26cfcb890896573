use poem_openapi::Object;

use crate::types::db::user;
use crate::types::internal::auth::{AccountStatus, UserRole};
use crate::types::internal::users::NewUser;

/// Request to create a user account
#[derive(Object)]
pub struct CreateUserRequest {
    pub username: String,

    /// Plaintext password; hashed before it is stored
    #[oai(write_only)]
    pub password: String,

    #[oai(default)]
    pub full_name: String,
    #[oai(default)]
    pub rank: String,
    #[oai(default)]
    pub unit: String,
    #[oai(default)]
    pub notes: String,

    /// Defaults to `user`
    pub role: Option<UserRole>,
}

impl From<CreateUserRequest> for NewUser {
    fn from(r: CreateUserRequest) -> Self {
        Self {
            username: r.username,
            password: r.password,
            full_name: r.full_name,
            rank: r.rank,
            unit: r.unit,
            notes: r.notes,
            role: r.role.unwrap_or(UserRole::User),
        }
    }
}

/// A user account without its password hash
#[derive(Object, Debug)]
pub struct UserResponse {
    pub id: i32,
    pub username: String,
    pub full_name: String,
    pub rank: String,
    pub unit: String,
    pub notes: String,
    pub role: UserRole,
    pub status: AccountStatus,
    pub attempts_left: i32,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<user::Model> for UserResponse {
    fn from(m: user::Model) -> Self {
        Self {
            id: m.id,
            username: m.username,
            full_name: m.full_name,
            rank: m.rank,
            unit: m.unit,
            notes: m.notes,
            role: m.role,
            status: m.status,
            attempts_left: m.attempts_left,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}
