use crate::errors::internal::{CredentialError, InternalError, InventoryError};
use poem_openapi::{ApiResponse, Object, payload::Json};
use std::fmt;

/// Standardized error response for admin endpoints
#[derive(Object, Debug)]
pub struct AdminErrorResponse {
    /// Error code identifier
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// HTTP status code
    pub status_code: u16,
}

/// Admin operation error types
#[derive(ApiResponse, Debug)]
pub enum AdminError {
    /// Request body failed validation
    #[oai(status = 400)]
    InvalidInput(Json<AdminErrorResponse>),

    /// Missing, invalid or expired token
    #[oai(status = 401)]
    Unauthorized(Json<AdminErrorResponse>),

    /// Admin role required
    #[oai(status = 403)]
    AdminRequired(Json<AdminErrorResponse>),

    /// User not found
    #[oai(status = 404)]
    UserNotFound(Json<AdminErrorResponse>),

    /// Username already exists
    #[oai(status = 409)]
    DuplicateUsername(Json<AdminErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<AdminErrorResponse>),
}

impl AdminError {
    /// Create an InvalidInput error
    pub fn invalid_input(message: String) -> Self {
        AdminError::InvalidInput(Json(AdminErrorResponse {
            error: "invalid_input".to_string(),
            message,
            status_code: 400,
        }))
    }

    /// Create an Unauthorized error
    pub fn unauthorized() -> Self {
        AdminError::Unauthorized(Json(AdminErrorResponse {
            error: "unauthorized".to_string(),
            message: "Invalid or expired token".to_string(),
            status_code: 401,
        }))
    }

    /// Create an AdminRequired error
    pub fn admin_required() -> Self {
        AdminError::AdminRequired(Json(AdminErrorResponse {
            error: "admin_required".to_string(),
            message: "Admin role required".to_string(),
            status_code: 403,
        }))
    }

    /// Create a UserNotFound error
    pub fn user_not_found(user_id: String) -> Self {
        AdminError::UserNotFound(Json(AdminErrorResponse {
            error: "user_not_found".to_string(),
            message: format!("User not found: {}", user_id),
            status_code: 404,
        }))
    }

    /// Create a DuplicateUsername error
    pub fn duplicate_username(username: &str) -> Self {
        AdminError::DuplicateUsername(Json(AdminErrorResponse {
            error: "duplicate_username".to_string(),
            message: format!("Username {} already exists", username),
            status_code: 409,
        }))
    }

    /// Convert InternalError to AdminError
    ///
    /// This is the explicit conversion point from internal errors to API errors.
    /// Internal error details are logged but not exposed to clients.
    pub fn from_internal_error(err: InternalError) -> Self {
        match &err {
            InternalError::Credential(CredentialError::UserIdNotFound(user_id)) => {
                Self::user_not_found(user_id.to_string())
            }
            InternalError::Credential(CredentialError::UserNotFound(username)) => {
                Self::user_not_found(username.clone())
            }
            InternalError::Credential(CredentialError::DuplicateUsername(username)) => {
                tracing::warn!("Duplicate username in admin operation: {}", username);
                Self::duplicate_username(username)
            }
            InternalError::Credential(CredentialError::AdminRequired)
            | InternalError::Credential(CredentialError::AccountBlocked(_)) => Self::admin_required(),
            InternalError::Credential(CredentialError::InvalidToken(_))
            | InternalError::Credential(CredentialError::ExpiredToken) => Self::unauthorized(),
            InternalError::Inventory(InventoryError::Validation { .. })
            | InternalError::Credential(CredentialError::SelfModification) => {
                Self::invalid_input(err.to_string())
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
                tracing::error!("Unexpected error in admin operation: {}", err);
                Self::internal_server_error()
            }
        }
    }

    /// Create a generic internal server error
    fn internal_server_error() -> Self {
        AdminError::InternalError(Json(AdminErrorResponse {
            error: "internal_error".to_string(),
            message: "An internal error occurred".to_string(),
            status_code: 500,
        }))
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> String {
        match self {
            AdminError::InvalidInput(json) => json.0.message.clone(),
            AdminError::Unauthorized(json) => json.0.message.clone(),
            AdminError::AdminRequired(json) => json.0.message.clone(),
            AdminError::UserNotFound(json) => json.0.message.clone(),
            AdminError::DuplicateUsername(json) => json.0.message.clone(),
            AdminError::InternalError(json) => json.0.message.clone(),
        }
    }
}

impl From<InternalError> for AdminError {
    fn from(err: InternalError) -> Self {
        Self::from_internal_error(err)
    }
}

impl fmt::Display for AdminError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_user_id_maps_to_404() {
        let err = InternalError::from(CredentialError::UserIdNotFound(42));

        match AdminError::from_internal_error(err) {
            AdminError::UserNotFound(json) => {
                assert_eq!(json.0.status_code, 404);
                assert_eq!(json.0.message, "User not found: 42");
            }
            other => panic!("Expected UserNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_username_maps_to_conflict() {
        let err = InternalError::from(CredentialError::DuplicateUsername("alice".to_string()));

        assert!(matches!(
            AdminError::from_internal_error(err),
            AdminError::DuplicateUsername(_)
        ));
    }

    #[test]
    fn test_token_errors_map_to_unauthorized() {
        let expired = AdminError::from_internal_error(CredentialError::ExpiredToken.into());
        let invalid =
            AdminError::from_internal_error(CredentialError::InvalidToken("bad signature".into()).into());

        assert!(matches!(expired, AdminError::Unauthorized(_)));
        assert!(matches!(invalid, AdminError::Unauthorized(_)));
    }
}
