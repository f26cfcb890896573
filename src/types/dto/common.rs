use poem_openapi::Object;

/// Response model for health check endpoint
#[derive(Object, Debug)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,

    /// Timestamp of the health check (ISO 8601 format)
    pub timestamp: String,
}

/// Result of a delete request
///
/// Deleting an id that does not exist is not an error; `deleted` is then false.
#[derive(Object, Debug)]
pub struct DeleteResponse {
    pub deleted: bool,
}
