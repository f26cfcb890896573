#[cfg(test)]
use std::collections::HashMap;

/// Source of environment variables
///
/// Settings and secrets read through this trait so tests can inject values
/// without touching the process environment, which parallel tests share.
pub trait EnvironmentProvider {
    fn get_var(&self, key: &str) -> Option<String>;

    /// Value of `key`, treating an unset or blank variable as absent
    fn get_non_empty(&self, key: &str) -> Option<String> {
        self.get_var(key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }
}

/// Production environment provider that reads from system environment
pub struct SystemEnvironment;

impl EnvironmentProvider for SystemEnvironment {
    fn get_var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// In-memory environment for tests
#[cfg(test)]
#[derive(Default)]
pub struct MockEnvironment {
    vars: HashMap<String, String>,
}

#[cfg(test)]
impl MockEnvironment {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_var(mut self, key: &str, value: &str) -> Self {
        self.vars.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_vars(mut self, vars: &[(&str, &str)]) -> Self {
        for (key, value) in vars {
            self.vars.insert(key.to_string(), value.to_string());
        }
        self
    }
}

#[cfg(test)]
impl EnvironmentProvider for MockEnvironment {
    fn get_var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_environment_lookup() {
        let provider = MockEnvironment::empty()
            .with_var("PORT", "8080")
            .with_vars(&[("HOST", "127.0.0.1"), ("LOG_LEVEL", "debug")]);

        assert_eq!(provider.get_var("PORT"), Some("8080".to_string()));
        assert_eq!(provider.get_var("HOST"), Some("127.0.0.1".to_string()));
        assert_eq!(provider.get_var("LOG_LEVEL"), Some("debug".to_string()));
        assert_eq!(provider.get_var("MISSING"), None);
    }

    #[test]
    fn test_blank_values_are_absent() {
        let provider = MockEnvironment::empty()
            .with_var("BLANK", "   ")
            .with_var("PADDED", "  value ");

        assert_eq!(provider.get_non_empty("BLANK"), None);
        assert_eq!(provider.get_non_empty("PADDED"), Some("value".to_string()));
        assert_eq!(provider.get_non_empty("MISSING"), None);
    }
}
