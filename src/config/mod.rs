pub mod database;
mod env_provider;
pub mod errors;
mod logging;
mod secret_manager;
mod settings;

#[cfg(test)]
pub use env_provider::MockEnvironment;
pub use env_provider::{EnvironmentProvider, SystemEnvironment};
pub use errors::{ApplicationError, ConfigError};
pub use logging::{LoggingConfig, LoggingError, init_logging};
pub use secret_manager::SecretManager;
pub use settings::Settings;
