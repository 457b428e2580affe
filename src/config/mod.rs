//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Configuration is loaded with the
//! `GROUPDESK` prefix and nested values use `__` as separator.
//!
//! # Example
//!
//! ```no_run
//! use groupdesk::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! if config.database.is_configured() {
//!     println!("Connecting to {}", config.database.url);
//! }
//! ```

mod database;
mod error;

pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Database configuration (PostgreSQL connection; empty URL means the
    /// in-memory adapters are used instead)
    #[serde(default)]
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Loads a `.env` file if present, then reads environment variables
    /// with the `GROUPDESK` prefix:
    ///
    /// - `GROUPDESK__DATABASE__URL=postgres://...` -> `database.url`
    /// - `GROUPDESK__DATABASE__MAX_CONNECTIONS=10` -> `database.max_connections`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into the expected
    /// types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::Environment::default().prefix("GROUPDESK").separator("__"))
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate the configuration.
    ///
    /// Database settings are only validated when a URL was supplied;
    /// an unconfigured database is a valid (in-memory) setup.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.database.is_configured() {
            self.database.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Env vars are process-global; serialize the tests that touch them.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn loads_without_any_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::remove_var("GROUPDESK__DATABASE__URL");

        let config = AppConfig::load().unwrap();
        assert!(!config.database.is_configured());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn reads_database_url_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("GROUPDESK__DATABASE__URL", "postgresql://test@localhost/test");

        let config = AppConfig::load().unwrap();
        env::remove_var("GROUPDESK__DATABASE__URL");

        assert_eq!(config.database.url, "postgresql://test@localhost/test");
        assert!(config.validate().is_ok());
    }
}
