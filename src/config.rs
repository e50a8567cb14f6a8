//! Configuration management for the inventory server

use config::{builder::DefaultState, Config, ConfigBuilder, ConfigError, Environment, File, Map};
use serde::Deserialize;
use std::env;

/// Local file-backed store used when nothing else is configured
pub const DEFAULT_DATABASE_URL: &str = "sqlite://mantenimiento.db?mode=rwc";

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// "json" for structured output, anything else for the human-readable format
    pub format: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let files = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false));

        Self::layered(files, None, env::var("DATABASE_URL").ok())
    }

    /// Put the environment on top of `files`, then the `DATABASE_URL` override.
    /// `vars` replaces the process environment when set.
    fn layered(
        files: ConfigBuilder<DefaultState>,
        vars: Option<Map<String, String>>,
        database_url: Option<String>,
    ) -> Result<Self, ConfigError> {
        files
            // GNB_SERVER__PORT=9000, GNB_DATABASE__MAX_CONNECTIONS=4, ...
            .add_source(
                Environment::with_prefix("GNB")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(vars),
            )
            // Hosted deployments hand the store over through DATABASE_URL
            .set_override_option("database.url", database_url)?
            .build()?
            .try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: 5,
            min_connections: 1,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
