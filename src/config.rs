//! Configuration management for the contact form.
//!
//! Settings come from environment variables, optionally seeded from a `.env`
//! file. Everything has a default, so a missing environment is never an
//! error; malformed values are.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Shortest accepted name, in characters, after trimming.
pub const DEFAULT_NAME_MIN_LEN: usize = 3;

/// Longest accepted name, in characters, after trimming.
pub const DEFAULT_NAME_MAX_LEN: usize = 50;

/// Configuration for a contact form instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Minimum trimmed name length (default: 3)
    pub name_min_len: usize,

    /// Maximum trimmed name length (default: 50)
    pub name_max_len: usize,

    /// Re-run validation after every change (default: true)
    pub validate_on_change: bool,

    /// Re-run validation when a field loses focus (default: true)
    pub validate_on_blur: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_FORM_NAME_MIN_LEN`: Minimum name length (default: 3)
    /// - `CONTACT_FORM_NAME_MAX_LEN`: Maximum name length (default: 50)
    /// - `CONTACT_FORM_VALIDATE_ON_CHANGE`: `true`/`false` (default: true)
    /// - `CONTACT_FORM_VALIDATE_ON_BLUR`: `true`/`false` (default: true)
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        let name_min_len =
            Self::parse_env_usize("CONTACT_FORM_NAME_MIN_LEN", DEFAULT_NAME_MIN_LEN)?;
        let name_max_len =
            Self::parse_env_usize("CONTACT_FORM_NAME_MAX_LEN", DEFAULT_NAME_MAX_LEN)?;
        let validate_on_change = Self::parse_env_bool("CONTACT_FORM_VALIDATE_ON_CHANGE", true)?;
        let validate_on_blur = Self::parse_env_bool("CONTACT_FORM_VALIDATE_ON_BLUR", true)?;

        let config = Config {
            name_min_len,
            name_max_len,
            validate_on_change,
            validate_on_blur,
        };
        config.validate()?;

        Ok(config)
    }

    /// Check that the settings are consistent with each other.
    pub fn validate(&self) -> ConfigResult<()> {
        // Zero would make an empty name pass the length check
        if self.name_min_len == 0 {
            return Err(ConfigError::InvalidValue {
                var: "CONTACT_FORM_NAME_MIN_LEN".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        if self.name_min_len > self.name_max_len {
            return Err(ConfigError::Inconsistent(format!(
                "name minimum length ({}) exceeds maximum length ({})",
                self.name_min_len, self.name_max_len
            )));
        }

        Ok(())
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as bool with a default value.
    ///
    /// Accepts `true`/`false`, `1`/`0`, `yes`/`no` (case-insensitive).
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => Ok(true),
                "false" | "0" | "no" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            name_min_len: DEFAULT_NAME_MIN_LEN,
            name_max_len: DEFAULT_NAME_MAX_LEN,
            validate_on_change: true,
            validate_on_blur: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    const VARS: [&str; 4] = [
        "CONTACT_FORM_NAME_MIN_LEN",
        "CONTACT_FORM_NAME_MAX_LEN",
        "CONTACT_FORM_VALIDATE_ON_CHANGE",
        "CONTACT_FORM_VALIDATE_ON_BLUR",
    ];

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            // Start every test from a clean slate
            for var in VARS {
                env::remove_var(var);
            }
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.name_min_len, 3);
        assert_eq!(config.name_max_len, 50);
        assert!(config.validate_on_change);
        assert!(config.validate_on_blur);
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_config_from_env_defaults() {
        let _guard = EnvGuard::new();

        let config = Config::from_env().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    #[serial]
    fn test_config_from_env_overrides() {
        let mut guard = EnvGuard::new();
        guard.set("CONTACT_FORM_NAME_MIN_LEN", "2");
        guard.set("CONTACT_FORM_NAME_MAX_LEN", "80");
        guard.set("CONTACT_FORM_VALIDATE_ON_CHANGE", "false");
        guard.set("CONTACT_FORM_VALIDATE_ON_BLUR", "No");

        let config = Config::from_env().unwrap();
        assert_eq!(config.name_min_len, 2);
        assert_eq!(config.name_max_len, 80);
        assert!(!config.validate_on_change);
        assert!(!config.validate_on_blur);
    }

    #[test]
    #[serial]
    fn test_config_invalid_number() {
        let mut guard = EnvGuard::new();
        guard.set("CONTACT_FORM_NAME_MAX_LEN", "lots");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(var, "CONTACT_FORM_NAME_MAX_LEN");
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_invalid_bool() {
        let mut guard = EnvGuard::new();
        guard.set("CONTACT_FORM_VALIDATE_ON_BLUR", "sometimes");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(var, "CONTACT_FORM_VALIDATE_ON_BLUR");
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_min_exceeds_max() {
        let mut guard = EnvGuard::new();
        guard.set("CONTACT_FORM_NAME_MIN_LEN", "10");
        guard.set("CONTACT_FORM_NAME_MAX_LEN", "5");

        let result = Config::from_env();
        assert!(matches!(result, Err(ConfigError::Inconsistent(_))));
    }

    #[test]
    fn test_config_zero_min_rejected() {
        let config = Config {
            name_min_len: 0,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    #[serial]
    fn test_parse_env_usize() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_CONTACT_FORM_USIZE", "42");

        assert_eq!(Config::parse_env_usize("TEST_CONTACT_FORM_USIZE", 10).unwrap(), 42);
        assert_eq!(Config::parse_env_usize("NONEXISTENT", 10).unwrap(), 10);
    }
}
