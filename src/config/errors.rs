use thiserror::Error;

/// Errors raised while loading settings or secrets at startup
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Required secret '{secret_name}' is missing")]
    MissingSecret { secret_name: String },

    #[error("Secret '{secret_name}' must be at least {expected} characters, got {actual}")]
    SecretTooShort {
        secret_name: String,
        expected: usize,
        actual: usize,
    },

    #[error("Setting '{setting_name}' has invalid format. Expected: {expected}, got: {actual}")]
    InvalidFormat {
        setting_name: String,
        expected: String,
        actual: String,
    },
}

impl ConfigError {
    pub fn invalid_format(setting_name: &str, expected: &str, actual: &str) -> Self {
        Self::InvalidFormat {
            setting_name: setting_name.to_string(),
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }
}

/// Top-level error for CLI commands and server startup
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Logging(#[from] crate::config::LoggingError),

    #[error(transparent)]
    Internal(#[from] crate::errors::InternalError),

    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),
}
