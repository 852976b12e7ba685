//! Cart configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `CART_NAMESPACE` - Storage key prefix (default: `@RocketShoes`, key `@RocketShoes:cart`)
//! - `CART_STORAGE_DIR` - Directory for [`FileStorage`](crate::storage::FileStorage) (default: `.cart`)
//! - `CART_API_URL` - Base URL of the product API; unset means the built-in demo inventory
//! - `CART_LOCALE` - Notification language, `en` or `pt-BR` (default: `en`)
//! - `CART_QUEUE_SIZE` - Capacity of the cart actor's command queue (default: 32)

use crate::notify::{Locale, UnknownLocale};
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_NAMESPACE: &str = "@RocketShoes";
pub const DEFAULT_STORAGE_DIR: &str = ".cart";
pub const DEFAULT_QUEUE_SIZE: usize = 32;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Cart store configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct CartConfig {
    /// Prefix of the persisted key
    pub namespace: String,
    /// Where the file backend keeps its snapshots
    pub storage_dir: PathBuf,
    /// Product API base URL (optional)
    pub api_url: Option<String>,
    /// Language of user notifications
    pub locale: Locale,
    /// Command queue capacity of the cart actor
    pub queue_size: usize,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            storage_dir: PathBuf::from(DEFAULT_STORAGE_DIR),
            api_url: None,
            locale: Locale::default(),
            queue_size: DEFAULT_QUEUE_SIZE,
        }
    }
}

impl CartConfig {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if a variable is set to a value
    /// that cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source.
    ///
    /// Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        let locale = match get("CART_LOCALE") {
            Some(raw) => raw
                .parse()
                .map_err(|e: UnknownLocale| invalid("CART_LOCALE", e))?,
            None => defaults.locale,
        };

        let queue_size = match get("CART_QUEUE_SIZE") {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(0) => return Err(invalid("CART_QUEUE_SIZE", "must be at least 1")),
                Ok(size) => size,
                Err(e) => return Err(invalid("CART_QUEUE_SIZE", e)),
            },
            None => defaults.queue_size,
        };

        Ok(Self {
            namespace: get("CART_NAMESPACE").unwrap_or(defaults.namespace),
            storage_dir: get("CART_STORAGE_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.storage_dir),
            api_url: get("CART_API_URL"),
            locale,
            queue_size,
        })
    }
}

fn invalid(key: &str, reason: impl std::fmt::Display) -> ConfigError {
    ConfigError::InvalidEnvVar(key.to_string(), reason.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = CartConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, CartConfig::default());
        assert_eq!(config.namespace, "@RocketShoes");
        assert_eq!(config.queue_size, 32);
    }

    #[test]
    fn test_reads_all_variables() {
        let config = CartConfig::from_lookup(lookup(&[
            ("CART_NAMESPACE", "@Shop"),
            ("CART_STORAGE_DIR", "/tmp/carts"),
            ("CART_API_URL", "http://localhost:3333"),
            ("CART_LOCALE", "pt-BR"),
            ("CART_QUEUE_SIZE", "8"),
        ]))
        .unwrap();

        assert_eq!(config.namespace, "@Shop");
        assert_eq!(config.storage_dir, PathBuf::from("/tmp/carts"));
        assert_eq!(config.api_url.as_deref(), Some("http://localhost:3333"));
        assert_eq!(config.locale, Locale::PtBr);
        assert_eq!(config.queue_size, 8);
    }

    #[test]
    fn test_empty_values_count_as_unset() {
        let config = CartConfig::from_lookup(lookup(&[("CART_API_URL", "")])).unwrap();
        assert_eq!(config.api_url, None);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let err = CartConfig::from_lookup(lookup(&[("CART_QUEUE_SIZE", "lots")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(key, _) if key == "CART_QUEUE_SIZE"));

        let err = CartConfig::from_lookup(lookup(&[("CART_QUEUE_SIZE", "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(key, _) if key == "CART_QUEUE_SIZE"));

        let err = CartConfig::from_lookup(lookup(&[("CART_LOCALE", "klingon")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(key, _) if key == "CART_LOCALE"));
    }
}
