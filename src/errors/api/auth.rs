use crate::errors::internal::{CredentialError, InternalError};
use poem_openapi::{ApiResponse, Object, payload::Json};
use std::fmt;

/// Standardized error response for authentication endpoints
#[derive(Object, Debug)]
pub struct AuthErrorResponse {
    /// Error code identifier
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// HTTP status code
    pub status_code: u16,
}

/// Authentication error types
#[derive(ApiResponse, Debug)]
pub enum AuthError {
    /// No account with this username
    #[oai(status = 401)]
    UserNotFound(Json<AuthErrorResponse>),

    /// Wrong password
    #[oai(status = 401)]
    InvalidCredentials(Json<AuthErrorResponse>),

    /// Requested role does not match the account
    #[oai(status = 403)]
    RoleMismatch(Json<AuthErrorResponse>),

    /// Account is blocked
    #[oai(status = 403)]
    AccountBlocked(Json<AuthErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<AuthErrorResponse>),
}

impl AuthError {
    /// Create a UserNotFound error
    pub fn user_not_found() -> Self {
        AuthError::UserNotFound(Json(AuthErrorResponse {
            error: "user_not_found".to_string(),
            message: "User not found".to_string(),
            status_code: 401,
        }))
    }

    /// Create an InvalidCredentials error
    pub fn invalid_credentials(attempts_left: i32) -> Self {
        let message = if attempts_left > 0 {
            format!("Invalid password, {} attempts left", attempts_left)
        } else {
            "Invalid password, account is now blocked".to_string()
        };
        AuthError::InvalidCredentials(Json(AuthErrorResponse {
            error: "invalid_credentials".to_string(),
            message,
            status_code: 401,
        }))
    }

    /// Create a RoleMismatch error
    pub fn role_mismatch() -> Self {
        AuthError::RoleMismatch(Json(AuthErrorResponse {
            error: "role_mismatch".to_string(),
            message: "Account does not have the requested role".to_string(),
            status_code: 403,
        }))
    }

    /// Create an AccountBlocked error
    pub fn account_blocked() -> Self {
        AuthError::AccountBlocked(Json(AuthErrorResponse {
            error: "account_blocked".to_string(),
            message: "Account is blocked, contact an administrator".to_string(),
            status_code: 403,
        }))
    }

    /// Convert InternalError to AuthError
    ///
    /// This is the explicit conversion point from internal errors to API errors.
    /// Internal error details are logged but not exposed to clients.
    pub fn from_internal_error(err: InternalError) -> Self {
        match &err {
            InternalError::Credential(CredentialError::UserNotFound(username)) => {
                tracing::debug!("Login for unknown user: {}", username);
                Self::user_not_found()
            }
            InternalError::Credential(CredentialError::RoleMismatch(username)) => {
                tracing::debug!("Role mismatch for user: {}", username);
                Self::role_mismatch()
            }
            InternalError::Credential(CredentialError::AccountBlocked(username)) => {
                tracing::debug!("Login attempt on blocked account: {}", username);
                Self::account_blocked()
            }
            InternalError::Credential(CredentialError::InvalidCredentials { attempts_left }) => {
                tracing::debug!("Invalid credentials attempt");
                Self::invalid_credentials(*attempts_left)
            }
            InternalError::Parse { value_type, .. } => {
                tracing::error!("Parse error for {}: {}", value_type, err);
                Self::internal_server_error()
            }
            InternalError::Crypto { operation, .. } => {
                tracing::error!("Crypto error in {}: {}", operation, err);
                Self::internal_server_error()
            }
            _ => {
                tracing::error!("Unexpected error in auth operation: {}", err);
                Self::internal_server_error()
            }
        }
    }

    /// Create a generic internal server error
    fn internal_server_error() -> Self {
        AuthError::InternalError(Json(AuthErrorResponse {
            error: "internal_error".to_string(),
            message: "An internal error occurred".to_string(),
            status_code: 500,
        }))
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> String {
        match self {
            AuthError::UserNotFound(json) => json.0.message.clone(),
            AuthError::InvalidCredentials(json) => json.0.message.clone(),
            AuthError::RoleMismatch(json) => json.0.message.clone(),
            AuthError::AccountBlocked(json) => json.0.message.clone(),
            AuthError::InternalError(json) => json.0.message.clone(),
        }
    }
}

impl From<InternalError> for AuthError {
    fn from(err: InternalError) -> Self {
        Self::from_internal_error(err)
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_credentials_reports_remaining_attempts() {
        let err = InternalError::from(CredentialError::InvalidCredentials { attempts_left: 2 });

        let api_err = AuthError::from_internal_error(err);

        assert!(matches!(api_err, AuthError::InvalidCredentials(_)));
        assert_eq!(api_err.message(), "Invalid password, 2 attempts left");
    }

    #[test]
    fn test_last_failed_attempt_reports_block() {
        let api_err = AuthError::invalid_credentials(0);

        assert_eq!(api_err.message(), "Invalid password, account is now blocked");
    }

    #[test]
    fn test_blocked_and_role_mismatch_are_forbidden() {
        let blocked = AuthError::from_internal_error(CredentialError::AccountBlocked("bob".into()).into());
        let mismatch = AuthError::from_internal_error(CredentialError::RoleMismatch("bob".into()).into());

        match (blocked, mismatch) {
            (AuthError::AccountBlocked(b), AuthError::RoleMismatch(m)) => {
                assert_eq!(b.0.status_code, 403);
                assert_eq!(m.0.status_code, 403);
            }
            other => panic!("Unexpected mapping: {:?}", other),
        }
    }

    #[test]
    fn test_crypto_error_hides_details() {
        let err = InternalError::crypto("verify_password", "bad params: secret=xyz");

        let api_err = AuthError::from_internal_error(err);

        assert_eq!(api_err.message(), "An internal error occurred");
    }
}
