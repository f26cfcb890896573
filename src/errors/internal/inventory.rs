use thiserror::Error;

/// Errors raised by the workplace, software and maintenance stores
#[derive(Error, Debug)]
pub enum InventoryError {
    #[error("Inventory number {0} already exists")]
    DuplicateInventoryNumber(String),

    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: i32 },

    /// Input that passed schema validation but is still unusable
    #[error("Invalid {field}: {reason}")]
    Validation { field: String, reason: String },
}

impl InventoryError {
    pub fn not_found(entity: &'static str, id: i32) -> Self {
        Self::NotFound { entity, id }
    }

    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
