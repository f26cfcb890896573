use poem_openapi::Object;

use crate::types::dto::admin::UserResponse;
use crate::types::internal::auth::UserRole;

/// Request model for user login
#[derive(Object, Debug)]
pub struct LoginRequest {
    pub username: String,

    pub password: String,

    /// Role the user is logging in as; must match the stored role
    pub role: UserRole,
}

/// Response model for a successful login
#[derive(Object, Debug)]
pub struct LoginResponse {
    /// JWT access token for API authentication
    pub access_token: String,

    /// Token type (always "Bearer")
    pub token_type: String,

    /// Number of seconds until the access token expires
    pub expires_in: i64,

    pub user: UserResponse,
}
