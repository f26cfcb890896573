use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuditError {
    #[error("Failed to write audit log {path}: {source}")]
    LogWriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
