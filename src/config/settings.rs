use std::fmt;
use std::path::PathBuf;

use crate::config::EnvironmentProvider;
use crate::config::errors::ConfigError;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://workplaces.db?mode=rwc";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_AUDIT_LOG_FILE: &str = "admin_actions.log";
pub const DEFAULT_JWT_EXPIRATION_MINUTES: i64 = 60;
/// One year
pub const MAX_JWT_EXPIRATION_MINUTES: i64 = 525_600;

/// Non-secret runtime settings
///
/// Every value has a default, so an empty environment yields a working
/// local setup. Secrets live in [`SecretManager`](crate::config::SecretManager).
#[derive(Clone)]
pub struct Settings {
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
    pub audit_log_file: PathBuf,
    pub jwt_expiration_minutes: i64,
}

impl Settings {
    pub fn from_env_provider(env: &dyn EnvironmentProvider) -> Result<Self, ConfigError> {
        let database_url = env
            .get_non_empty("DATABASE_URL")
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let server_host = env
            .get_non_empty("HOST")
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let server_port = match env.get_non_empty("PORT") {
            Some(value) => match value.parse::<u16>() {
                Ok(port) if port > 0 => port,
                _ => return Err(ConfigError::invalid_format("PORT", "integer between 1 and 65535", &value)),
            },
            None => DEFAULT_PORT,
        };

        let audit_log_file = env
            .get_non_empty("AUDIT_LOG_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_AUDIT_LOG_FILE));

        let jwt_expiration_minutes = match env.get_non_empty("JWT_EXPIRATION_MINUTES") {
            Some(value) => match value.parse::<i64>() {
                Ok(minutes) if (1..=MAX_JWT_EXPIRATION_MINUTES).contains(&minutes) => minutes,
                _ => {
                    return Err(ConfigError::invalid_format(
                        "JWT_EXPIRATION_MINUTES",
                        "integer between 1 and 525600",
                        &value,
                    ));
                }
            },
            None => DEFAULT_JWT_EXPIRATION_MINUTES,
        };

        Ok(Self {
            database_url,
            server_host,
            server_port,
            audit_log_file,
            jwt_expiration_minutes,
        })
    }

    /// Convenience method that uses the system environment provider
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_provider(&crate::config::SystemEnvironment)
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("database_url", &self.database_url)
            .field("server_address", &self.server_address())
            .field("audit_log_file", &self.audit_log_file)
            .field("jwt_expiration_minutes", &self.jwt_expiration_minutes)
            .finish()
    }
}
