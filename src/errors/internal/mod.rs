use thiserror::Error;

pub mod audit;
pub mod credential;
pub mod database;
pub mod inventory;

pub use audit::AuditError;
pub use credential::CredentialError;
pub use database::DatabaseError;
pub use inventory::InventoryError;

/// Internal error type for store and service operations
///
/// Infrastructure errors (database, parse, crypto) are shared by all stores;
/// domain errors are grouped per area. Not exposed via API - endpoints must
/// convert to one of the API error types.
#[derive(Error, Debug)]
pub enum InternalError {
    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error("Parse error: failed to parse {value_type}: {message}")]
    Parse { value_type: String, message: String },

    #[error("Crypto error: {operation} failed: {message}")]
    Crypto { operation: String, message: String },

    #[error(transparent)]
    Inventory(#[from] InventoryError),

    #[error(transparent)]
    Credential(#[from] CredentialError),

    #[error(transparent)]
    Audit(#[from] AuditError),
}

impl InternalError {
    pub fn database(operation: &str, source: sea_orm::DbErr) -> InternalError {
        InternalError::Database(DatabaseError::Operation {
            operation: operation.to_string(),
            source,
        })
    }

    pub fn parse(value_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            value_type: value_type.into(),
            message: message.into(),
        }
    }

    pub fn crypto(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Crypto {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// Whether a failed insert tripped a UNIQUE constraint
    pub fn is_unique_violation(err: &sea_orm::DbErr) -> bool {
        matches!(
            err.sql_err(),
            Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
        ) || err.to_string().contains("UNIQUE")
    }
}
