//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub poll: PollConfig,

    #[serde(default)]
    pub app: AppConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Deployment flavour, selects the default endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Talks to a node on the local machine
    #[default]
    Development,
    /// Served by the node itself, endpoint relative to its origin
    Production,
}

impl Environment {
    pub fn default_endpoint(self) -> &'static str {
        match self {
            Environment::Development => "//127.0.0.1:9125/api",
            Environment::Production => "/api",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Some(Environment::Development),
            "production" | "prod" => Some(Environment::Production),
            _ => None,
        }
    }
}

/// HamGO node API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default)]
    pub environment: Environment,

    /// Base URL for all API calls; falls back to the environment default
    #[serde(default)]
    pub endpoint: Option<String>,

    /// Origin used to resolve a relative endpoint such as `/api`
    #[serde(default = "default_origin")]
    pub origin: String,
}

fn default_origin() -> String {
    "http://127.0.0.1:9125".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            endpoint: None,
            origin: default_origin(),
        }
    }
}

impl ApiConfig {
    /// Configured endpoint, as written (possibly relative)
    pub fn endpoint(&self) -> String {
        self.endpoint
            .clone()
            .unwrap_or_else(|| self.environment.default_endpoint().to_string())
    }
}

/// Polling configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PollConfig {
    #[serde(default = "default_poll_interval")]
    pub interval_ms: u64,

    /// Ask the node for at most this many cached messages
    #[serde(default)]
    pub max_messages: Option<usize>,
}

fn default_poll_interval() -> u64 {
    5000 // 5 seconds
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_poll_interval(),
            max_messages: None,
        }
    }
}

/// Application shell configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_title")]
    pub title: String,
}

fn default_title() -> String {
    "HamGO".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("hamgo").join("config.toml")),
            Some(PathBuf::from("/etc/hamgo/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply `HAMGO_*` overrides using the given variable lookup
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        // API overrides
        if let Some(env) = lookup("HAMGO_ENV") {
            match Environment::parse(&env) {
                Some(e) => self.api.environment = e,
                None => tracing::warn!("Ignoring unknown HAMGO_ENV value {:?}", env),
            }
        }
        if let Some(endpoint) = lookup("HAMGO_API_ENDPOINT") {
            self.api.endpoint = Some(endpoint);
        }
        if let Some(origin) = lookup("HAMGO_API_ORIGIN") {
            self.api.origin = origin;
        }

        // Poll overrides
        if let Some(interval) = lookup("HAMGO_POLL_INTERVAL_MS") {
            if let Ok(ms) = interval.parse() {
                self.poll.interval_ms = ms;
            }
        }

        if let Some(title) = lookup("HAMGO_TITLE") {
            self.app.title = title;
        }

        // Logging overrides
        if let Some(level) = lookup("HAMGO_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("HAMGO_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# HamGO client configuration
#
# Environment variables override these settings:
# - HAMGO_ENV
# - HAMGO_API_ENDPOINT
# - HAMGO_API_ORIGIN
# - HAMGO_POLL_INTERVAL_MS
# - HAMGO_TITLE
# - HAMGO_LOG_LEVEL
# - HAMGO_LOG_FORMAT

[api]
# development uses //127.0.0.1:9125/api, production uses /api
environment = "development"

# Explicit endpoint (overrides the environment default)
# endpoint = "http://127.0.0.1:9125/api"

# Origin used to resolve a relative endpoint
origin = "http://127.0.0.1:9125"

[poll]
# How often to refresh the message list (ms)
interval_ms = 5000

# Limit the number of cached messages fetched
# max_messages = 50

[app]
title = "HamGO"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
