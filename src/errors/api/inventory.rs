use crate::errors::internal::{DatabaseError, InternalError, InventoryError};
use poem_openapi::{ApiResponse, Object, payload::Json};
use std::fmt;

/// Standardized error response for inventory endpoints
#[derive(Object, Debug)]
pub struct InventoryErrorResponse {
    /// Error code identifier
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// HTTP status code
    pub status_code: u16,
}

/// Errors returned by the workplace, software, maintenance and dashboard endpoints
#[derive(ApiResponse, Debug)]
pub enum InventoryApiError {
    /// Request body failed validation
    #[oai(status = 400)]
    InvalidInput(Json<InventoryErrorResponse>),

    /// Record not found
    #[oai(status = 404)]
    NotFound(Json<InventoryErrorResponse>),

    /// Inventory number already exists
    #[oai(status = 409)]
    DuplicateInventoryNumber(Json<InventoryErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<InventoryErrorResponse>),
}

impl InventoryApiError {
    /// Create an InvalidInput error
    pub fn invalid_input(message: String) -> Self {
        InventoryApiError::InvalidInput(Json(InventoryErrorResponse {
            error: "invalid_input".to_string(),
            message,
            status_code: 400,
        }))
    }

    /// Create a NotFound error
    pub fn not_found(entity: &str, id: i32) -> Self {
        InventoryApiError::NotFound(Json(InventoryErrorResponse {
            error: "not_found".to_string(),
            message: format!("{} with id {} not found", entity, id),
            status_code: 404,
        }))
    }

    /// Create a DuplicateInventoryNumber error
    pub fn duplicate_inventory_number(inventory_number: &str) -> Self {
        InventoryApiError::DuplicateInventoryNumber(Json(InventoryErrorResponse {
            error: "duplicate_inventory_number".to_string(),
            message: format!("Inventory number {} already exists", inventory_number),
            status_code: 409,
        }))
    }

    fn internal_server_error(message: String) -> Self {
        InventoryApiError::InternalError(Json(InventoryErrorResponse {
            error: "internal_error".to_string(),
            message,
            status_code: 500,
        }))
    }

    /// Convert InternalError to InventoryApiError
    ///
    /// This is the explicit conversion point from internal errors to API errors.
    /// Database failures are logged in full; the client only sees which
    /// operation failed.
    pub fn from_internal_error(err: InternalError) -> Self {
        match &err {
            InternalError::Inventory(InventoryError::DuplicateInventoryNumber(number)) => {
                tracing::warn!("Duplicate inventory number: {}", number);
                Self::duplicate_inventory_number(number)
            }
            InternalError::Inventory(InventoryError::NotFound { entity, id }) => {
                tracing::debug!("{} {} not found", entity, id);
                Self::not_found(entity, *id)
            }
            InternalError::Inventory(InventoryError::Validation { .. }) => {
                tracing::debug!("Rejected inventory input: {}", err);
                Self::invalid_input(err.to_string())
            }
            InternalError::Database(DatabaseError::Operation { operation, .. }) => {
                tracing::error!("Database error in {}: {}", operation, err);
                Self::internal_server_error(format!("Database operation '{}' failed", operation))
            }
            _ => {
                tracing::error!("Unexpected error in inventory operation: {}", err);
                Self::internal_server_error("An internal error occurred".to_string())
            }
        }
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> String {
        match self {
            InventoryApiError::InvalidInput(json) => json.0.message.clone(),
            InventoryApiError::NotFound(json) => json.0.message.clone(),
            InventoryApiError::DuplicateInventoryNumber(json) => json.0.message.clone(),
            InventoryApiError::InternalError(json) => json.0.message.clone(),
        }
    }
}

impl From<InternalError> for InventoryApiError {
    fn from(err: InternalError) -> Self {
        Self::from_internal_error(err)
    }
}

impl fmt::Display for InventoryApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
