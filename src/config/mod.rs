//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `TOPSIS` prefix and nested values use double underscores as separators.
//!
//! Every setting has a default, so an empty environment yields the reference
//! behaviour (4-decimal scores, "Topsis Score"/"Rank" headers, zero columns
//! neutralized).
//!
//! # Example
//!
//! ```no_run
//! use topsis_rank::config::{init_tracing, AppConfig};
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! init_tracing(&config.logging).expect("Failed to install subscriber");
//! ```

mod analysis;
mod error;
mod logging;

pub use analysis::{AnalysisConfig, MAX_SCORE_DECIMALS};
pub use error::{ConfigError, ValidationError};
pub use logging::{init_tracing, LoggingConfig};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Ranking and presentation settings
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Log level and output format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `TOPSIS` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `TOPSIS__ANALYSIS__SCORE_DECIMALS=2` -> `analysis.score_decimals = 2`
    /// - `TOPSIS__ANALYSIS__ZERO_NORM_POLICY=reject` -> `analysis.zero_norm_policy = reject`
    /// - `TOPSIS__LOGGING__JSON=true` -> `logging.json = true`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("TOPSIS")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.analysis.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::topsis::ZeroNormPolicy;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("TOPSIS__ANALYSIS__SCORE_DECIMALS");
        env::remove_var("TOPSIS__ANALYSIS__SCORE_HEADER");
        env::remove_var("TOPSIS__ANALYSIS__ZERO_NORM_POLICY");
        env::remove_var("TOPSIS__LOGGING__LEVEL");
        env::remove_var("TOPSIS__LOGGING__JSON");
    }

    #[test]
    fn test_load_with_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.analysis, AnalysisConfig::default());
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("TOPSIS__ANALYSIS__SCORE_DECIMALS", "2");
        env::set_var("TOPSIS__ANALYSIS__SCORE_HEADER", "Closeness");
        env::set_var("TOPSIS__ANALYSIS__ZERO_NORM_POLICY", "reject");
        env::set_var("TOPSIS__LOGGING__JSON", "true");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.analysis.score_decimals, 2);
        assert_eq!(config.analysis.score_header, "Closeness");
        assert_eq!(config.analysis.zero_norm_policy, ZeroNormPolicy::Reject);
        assert!(config.logging.json);
    }

    #[test]
    fn test_validate_full_config() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let config = AppConfig::load().unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_decimals() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("TOPSIS__ANALYSIS__SCORE_DECIMALS", "20");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::ScoreDecimalsTooLarge { .. })
        ));
    }
}
