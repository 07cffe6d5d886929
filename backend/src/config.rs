//! Configuration management for the farm records console
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (config/development.toml, config/production.toml)
//! 3. Environment variable overrides such as `FARM_LOGGING__JSON=true`
//!    (`FARM_` prefix, `__` between nested keys)

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Default tracing filter when neither RUST_LOG nor configuration sets one
pub const DEFAULT_LOG_FILTER: &str = "farm_console=info,farm_records_backend=info";

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Logging configuration
    pub logging: LoggingConfig,

    /// Console front-end configuration
    pub console: ConsoleConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive string
    pub filter: String,

    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ConsoleConfig {
    /// Print the welcome banner on start
    pub show_banner: bool,

    /// Ask for the farm profile on start when none is set
    pub setup_farm: bool,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("FARM_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("logging.filter", DEFAULT_LOG_FILTER)?
            .set_default("logging.json", false)?
            .set_default("console.show_banner", true)?
            .set_default("console.setup_farm", true)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (FARM_ prefix)
            .add_source(
                Environment::with_prefix("FARM")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            logging: LoggingConfig::default(),
            console: ConsoleConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
            json: false,
        }
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            show_banner: true,
            setup_farm: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_uses_defaults() {
        let config = Config::load().unwrap();
        assert!(!config.environment.is_empty());
        assert!(!config.logging.filter.is_empty());
    }

    #[test]
    fn test_env_override_uses_single_underscore_after_prefix() {
        std::env::set_var("FARM_CONSOLE__SETUP_FARM", "false");
        let config = Config::load().unwrap();
        std::env::remove_var("FARM_CONSOLE__SETUP_FARM");
        assert!(!config.console.setup_farm);
    }

    #[test]
    fn test_default_matches_documented_values() {
        let config = Config::default();
        assert_eq!(config.environment, "development");
        assert_eq!(config.logging.filter, DEFAULT_LOG_FILTER);
        assert!(!config.logging.json);
        assert!(config.console.show_banner);
        assert!(config.console.setup_farm);
    }
}
