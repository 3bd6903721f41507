//! # Checkout Configuration
//!
//! Where the checkout and products files live, and how chatty the logs are.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command-line arguments (highest priority)                          │
//! │     checkout --products ./p.json ./c.json                              │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     CHECKOUT_DATA_PATH, CHECKOUT_PRODUCTS_PATH, CHECKOUT_LOG           │
//! │                                                                         │
//! │  3. TOML Config File                                                   │
//! │     --config <path>, else ~/.config/checkout/checkout.toml (Linux)     │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                   │
//! │     ./checkout_data.json, ./product_data.json                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # checkout.toml
//! checkout_path = "./data/checkout.json"
//! products_path = "./data/products.json"
//! log_filter = "debug"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, info};

/// Default checkout data file path.
pub const DEFAULT_CHECKOUT_PATH: &str = "./checkout_data.json";

/// Default products data file path.
pub const DEFAULT_PRODUCTS_PATH: &str = "./product_data.json";

pub const ENV_CHECKOUT_PATH: &str = "CHECKOUT_DATA_PATH";
pub const ENV_PRODUCTS_PATH: &str = "CHECKOUT_PRODUCTS_PATH";
pub const ENV_LOG_FILTER: &str = "CHECKOUT_LOG";

// =============================================================================
// Config Error
// =============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// Checkout Config
// =============================================================================

/// Resolved settings for one checkout run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckoutConfig {
    /// Checkout JSON file (array of line items).
    pub checkout_path: PathBuf,

    /// Products JSON file (object keyed by product code).
    pub products_path: PathBuf,

    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_filter: Option<String>,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        CheckoutConfig {
            checkout_path: PathBuf::from(DEFAULT_CHECKOUT_PATH),
            products_path: PathBuf::from(DEFAULT_PRODUCTS_PATH),
            log_filter: None,
        }
    }
}

impl CheckoutConfig {
    /// Loads configuration from file and environment on top of defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file: `config_path` if given (must exist), otherwise the
    ///    platform default if it exists
    /// 3. Environment variables
    ///
    /// Command-line overrides are applied by the caller, which then calls
    /// [`CheckoutConfig::validate`].
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = match config_path {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound(path));
                }
                Self::from_file(path)?
            }
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(path)?,
                Some(path) => {
                    debug!(?path, "Config file not found, using defaults");
                    Self::default()
                }
                None => Self::default(),
            },
        };

        config.apply_overrides(|key| std::env::var(key).ok());

        Ok(config)
    }

    /// Reads a TOML config file. Keys that are absent keep their defaults.
    pub fn from_file(path: PathBuf) -> ConfigResult<Self> {
        info!(?path, "Loading checkout config from file");
        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(source) => return Err(ConfigError::Read { path, source }),
        };
        toml::from_str(&contents).map_err(|source| ConfigError::Parse { path, source })
    }

    /// Applies `CHECKOUT_*` overrides through `lookup`.
    ///
    /// Takes the lookup as a closure so tests don't have to touch the
    /// process environment.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(path) = lookup(ENV_CHECKOUT_PATH) {
            debug!(checkout_path = %path, "Overriding checkout path from environment");
            self.checkout_path = PathBuf::from(path);
        }

        if let Some(path) = lookup(ENV_PRODUCTS_PATH) {
            debug!(products_path = %path, "Overriding products path from environment");
            self.products_path = PathBuf::from(path);
        }

        if let Some(filter) = lookup(ENV_LOG_FILTER) {
            self.log_filter = Some(filter);
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.checkout_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue("checkout_path".into()));
        }

        if self.products_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue("products_path".into()));
        }

        if let Some(filter) = &self.log_filter {
            if filter.trim().is_empty() {
                return Err(ConfigError::InvalidValue("log_filter".into()));
            }
        }

        Ok(())
    }

    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "checkout")
            .map(|dirs| dirs.config_dir().join("checkout.toml"))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = CheckoutConfig::default();
        assert_eq!(config.checkout_path, PathBuf::from("./checkout_data.json"));
        assert_eq!(config.products_path, PathBuf::from("./product_data.json"));
        assert!(config.log_filter.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            (ENV_CHECKOUT_PATH, "/data/c.json"),
            (ENV_LOG_FILTER, "debug"),
        ]
        .into_iter()
        .collect();

        let mut config = CheckoutConfig::default();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.checkout_path, PathBuf::from("/data/c.json"));
        assert_eq!(config.products_path, PathBuf::from(DEFAULT_PRODUCTS_PATH));
        assert_eq!(config.log_filter.as_deref(), Some("debug"));
    }

    #[test]
    fn test_config_validation() {
        let mut config = CheckoutConfig::default();

        config.checkout_path = PathBuf::new();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue(ref field)) if field == "checkout_path"
        ));

        config.checkout_path = PathBuf::from("c.json");
        config.log_filter = Some("  ".into());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"products_path = "/srv/products.json""#).unwrap();

        let config = CheckoutConfig::from_file(file.path().to_path_buf()).unwrap();
        assert_eq!(config.products_path, PathBuf::from("/srv/products.json"));
        assert_eq!(config.checkout_path, PathBuf::from(DEFAULT_CHECKOUT_PATH));
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "checkout_path = ").unwrap();

        let err = CheckoutConfig::from_file(file.path().to_path_buf()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = CheckoutConfig::load(Some(dir.path().join("nope.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }
}
