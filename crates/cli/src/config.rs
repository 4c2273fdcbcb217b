//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `CART_STORE_PATH` - Store file holding the cart slot (default: cart-store.json)
//! - `CART_STORAGE_KEY` - Slot key inside the store (default: carrinho)
//! - `CART_CURRENCY_PREFIX` - Prefix for displayed amounts (default: "R$ ", may be empty)

use std::path::PathBuf;

use cart_state::DEFAULT_SLOT_KEY;
use cart_state::render::DEFAULT_CURRENCY_PREFIX;
use thiserror::Error;

const DEFAULT_STORE_PATH: &str = "cart-store.json";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),

    #[error("Invalid option {0}: {1}")]
    InvalidOption(String, String),
}

/// Command-line configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// File backing the persisted store
    pub store_path: PathBuf,
    /// Slot key of the cart inside the store
    pub storage_key: String,
    /// Currency prefix for formatted amounts
    pub currency_prefix: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
            storage_key: DEFAULT_SLOT_KEY.to_string(),
            currency_prefix: DEFAULT_CURRENCY_PREFIX.to_string(),
        }
    }
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but blank where a value is required.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but blank where a value is required.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let store_path = get_non_blank(&lookup, "CART_STORE_PATH")?
            .map_or(defaults.store_path, PathBuf::from);
        let storage_key =
            get_non_blank(&lookup, "CART_STORAGE_KEY")?.unwrap_or(defaults.storage_key);
        let currency_prefix = lookup("CART_CURRENCY_PREFIX").unwrap_or(defaults.currency_prefix);

        Ok(Self {
            store_path,
            storage_key,
            currency_prefix,
        })
    }

    /// Apply command-line overrides on top of the environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidOption` if an override is blank.
    pub fn with_overrides(
        mut self,
        store_path: Option<PathBuf>,
        storage_key: Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(path) = store_path {
            if path.as_os_str().to_string_lossy().trim().is_empty() {
                return Err(blank_option("--store"));
            }
            self.store_path = path;
        }
        if let Some(key) = storage_key {
            if key.trim().is_empty() {
                return Err(blank_option("--key"));
            }
            self.storage_key = key;
        }
        Ok(self)
    }
}

fn blank_option(name: &str) -> ConfigError {
    ConfigError::InvalidOption(name.to_string(), "value cannot be blank".to_string())
}

fn get_non_blank(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
) -> Result<Option<String>, ConfigError> {
    match lookup(name) {
        Some(value) if value.trim().is_empty() => Err(ConfigError::InvalidEnvVar(
            name.to_string(),
            "value cannot be blank".to_string(),
        )),
        other => Ok(other),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = CliConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.storage_key, "carrinho");
        assert_eq!(config.currency_prefix, "R$ ");
    }

    #[test]
    fn test_values_from_environment() {
        let config = CliConfig::from_lookup(lookup(&[
            ("CART_STORE_PATH", "/tmp/cart.json"),
            ("CART_STORAGE_KEY", "cart"),
            ("CART_CURRENCY_PREFIX", ""),
        ]))
        .unwrap();
        assert_eq!(config.store_path, PathBuf::from("/tmp/cart.json"));
        assert_eq!(config.storage_key, "cart");
        assert_eq!(config.currency_prefix, "");
    }

    #[test]
    fn test_blank_values_rejected() {
        let err = CliConfig::from_lookup(lookup(&[("CART_STORAGE_KEY", "  ")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(name, _) if name == "CART_STORAGE_KEY"));

        assert!(CliConfig::from_lookup(lookup(&[("CART_STORE_PATH", "")])).is_err());
    }

    #[test]
    fn test_overrides() {
        let config = CliConfig::default()
            .with_overrides(Some(PathBuf::from("other.json")), None)
            .unwrap();
        assert_eq!(config.store_path, PathBuf::from("other.json"));
        assert_eq!(config.storage_key, "carrinho");

        let config = CliConfig::default()
            .with_overrides(None, Some("cart".to_string()))
            .unwrap();
        assert_eq!(config.storage_key, "cart");
    }

    #[test]
    fn test_blank_overrides_rejected() {
        let err = CliConfig::default()
            .with_overrides(None, Some(String::new()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidOption(name, _) if name == "--key"));

        let err = CliConfig::default()
            .with_overrides(None, Some("   ".to_string()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidOption(name, _) if name == "--key"));

        let err = CliConfig::default()
            .with_overrides(Some(PathBuf::new()), None)
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidOption(name, _) if name == "--store"));
    }
}
