use std::fmt;

use crate::config::EnvironmentProvider;
use crate::config::errors::ConfigError;

/// A required secret and its validation rule
struct SecretRule {
    name: &'static str,
    min_length: usize,
}

const JWT_SECRET: SecretRule = SecretRule {
    name: "JWT_SECRET",
    min_length: 32,
};

const PEPPER: SecretRule = SecretRule {
    name: "PEPPER",
    min_length: 16,
};

/// Centralized manager for application secrets
pub struct SecretManager {
    jwt_secret: String,
    pepper: String,
}

impl SecretManager {
    /// Load and validate all secrets
    ///
    /// # Errors
    /// `MissingSecret` or `SecretTooShort` for the first secret that fails
    pub fn from_env_provider(env: &dyn EnvironmentProvider) -> Result<Self, ConfigError> {
        let jwt_secret = Self::load_secret(env, &JWT_SECRET)?;
        let pepper = Self::load_secret(env, &PEPPER)?;
        Ok(Self { jwt_secret, pepper })
    }

    /// Convenience method that uses the system environment provider
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_provider(&crate::config::SystemEnvironment)
    }

    /// Build from explicit values, applying the same length rules
    pub fn from_values(jwt_secret: String, pepper: String) -> Result<Self, ConfigError> {
        Self::check_length(&JWT_SECRET, &jwt_secret)?;
        Self::check_length(&PEPPER, &pepper)?;
        Ok(Self { jwt_secret, pepper })
    }

    pub fn jwt_secret(&self) -> &str {
        &self.jwt_secret
    }

    /// Pepper mixed into password hashes
    pub fn pepper(&self) -> &str {
        &self.pepper
    }

    fn load_secret(env: &dyn EnvironmentProvider, rule: &SecretRule) -> Result<String, ConfigError> {
        let value = env.get_var(rule.name).ok_or_else(|| ConfigError::MissingSecret {
            secret_name: rule.name.to_string(),
        })?;
        Self::check_length(rule, &value)?;
        Ok(value)
    }

    fn check_length(rule: &SecretRule, value: &str) -> Result<(), ConfigError> {
        if value.len() < rule.min_length {
            return Err(ConfigError::SecretTooShort {
                secret_name: rule.name.to_string(),
                expected: rule.min_length,
                actual: value.len(),
            });
        }
        Ok(())
    }
}

impl fmt::Debug for SecretManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretManager")
            .field("jwt_secret", &"<redacted>")
            .field("pepper", &"<redacted>")
            .finish()
    }
}

impl fmt::Display for SecretManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretManager {{ secrets_loaded: 2 }}")
    }
}
