//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `EC_CATALOG_PATH` - YAML or JSON product list (default: built-in demo catalog)
//! - `EC_CURRENCY` - Display currency code: USD, EUR, GBP, CAD, AUD (default: USD)
//! - `EC_LOG_FORMAT` - `text` or `json` (default: text)
//! - `RUST_LOG` - Log filter (default: `elegant_context_cli=info,elegant_context_core=info`)

use std::path::PathBuf;

use elegant_context_core::CurrencyCode;
use thiserror::Error;

const CATALOG_PATH_VAR: &str = "EC_CATALOG_PATH";
const CURRENCY_VAR: &str = "EC_CURRENCY";
const LOG_FORMAT_VAR: &str = "EC_LOG_FORMAT";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// CLI configuration.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Catalog file; `None` means the demo catalog
    pub catalog_path: Option<PathBuf>,
    /// Currency used when formatting prices
    pub currency: CurrencyCode,
    pub log_format: LogFormat,
}

impl CliConfig {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an unsupported value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an unsupported value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let catalog_path = lookup(CATALOG_PATH_VAR)
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        let currency = match lookup(CURRENCY_VAR) {
            Some(value) => value
                .parse::<CurrencyCode>()
                .map_err(|e| ConfigError::InvalidEnvVar(CURRENCY_VAR.to_string(), format!("{e}")))?,
            None => CurrencyCode::default(),
        };

        let log_format = match lookup(LOG_FORMAT_VAR).as_deref().map(str::trim) {
            None | Some("" | "text") => LogFormat::Text,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(ConfigError::InvalidEnvVar(
                    LOG_FORMAT_VAR.to_string(),
                    format!("expected `text` or `json`, got `{other}`"),
                ));
            }
        };

        Ok(Self {
            catalog_path,
            currency,
            log_format,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<CliConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        CliConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert!(config.catalog_path.is_none());
        assert_eq!(config.currency, CurrencyCode::USD);
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn test_all_set() {
        let config = load(&[
            ("EC_CATALOG_PATH", "catalog.yaml"),
            ("EC_CURRENCY", "gbp"),
            ("EC_LOG_FORMAT", "json"),
        ])
        .unwrap();
        assert_eq!(config.catalog_path, Some(PathBuf::from("catalog.yaml")));
        assert_eq!(config.currency, CurrencyCode::GBP);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_blank_catalog_path_uses_demo() {
        let config = load(&[("EC_CATALOG_PATH", "  ")]).unwrap();
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn test_invalid_currency() {
        let err = load(&[("EC_CURRENCY", "DOGE")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(var, _) if var == "EC_CURRENCY"));
    }

    #[test]
    fn test_invalid_log_format() {
        assert!(load(&[("EC_LOG_FORMAT", "xml")]).is_err());
    }
}
