//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::dashboard::Theme;
use crate::stats::{SummaryOptions, DEFAULT_CHART_WINDOW, DEFAULT_TOTAL_REQUESTS};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub dashboard: DashboardConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Statistics view configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    /// Figure shown on the "Richieste Totali" card
    #[serde(default = "default_total_requests")]
    pub total_requests: u64,

    /// Number of trailing rows plotted on the chart
    #[serde(default = "default_chart_window")]
    pub chart_window: usize,

    #[serde(default)]
    pub default_theme: Theme,
}

fn default_total_requests() -> u64 {
    DEFAULT_TOTAL_REQUESTS
}

fn default_chart_window() -> usize {
    DEFAULT_CHART_WINDOW
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            total_requests: default_total_requests(),
            chart_window: default_chart_window(),
            default_theme: Theme::default(),
        }
    }
}

impl DashboardConfig {
    /// Aggregation settings without a date filter
    pub fn summary_options(&self) -> SummaryOptions {
        SummaryOptions {
            chart_window: self.chart_window,
            total_requests: self.total_requests,
            ..SummaryOptions::default()
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

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
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
            dirs::config_dir().map(|p| p.join("intermobil").join("config.toml")),
            Some(PathBuf::from("./intermobil.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::debug!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        // Dashboard overrides
        if let Some(requests) = var("INTERMOBIL_TOTAL_REQUESTS") {
            match requests.parse() {
                Ok(n) => self.dashboard.total_requests = n,
                Err(_) => tracing::warn!("Ignoring INTERMOBIL_TOTAL_REQUESTS={:?}", requests),
            }
        }
        if let Some(window) = var("INTERMOBIL_CHART_WINDOW") {
            match window.parse() {
                Ok(n) => self.dashboard.chart_window = n,
                Err(_) => tracing::warn!("Ignoring INTERMOBIL_CHART_WINDOW={:?}", window),
            }
        }
        if let Some(theme) = var("INTERMOBIL_THEME") {
            match Theme::parse(&theme) {
                Some(t) => self.dashboard.default_theme = t,
                None => tracing::warn!("Ignoring INTERMOBIL_THEME={:?}", theme),
            }
        }

        // Logging overrides
        if let Some(level) = var("INTERMOBIL_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("INTERMOBIL_LOG_FORMAT") {
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
    r#"# Intermobil Dashboard Configuration
#
# Environment variables override these settings:
# - INTERMOBIL_TOTAL_REQUESTS
# - INTERMOBIL_CHART_WINDOW
# - INTERMOBIL_THEME
# - INTERMOBIL_LOG_LEVEL
# - INTERMOBIL_LOG_FORMAT

[dashboard]
# Figure shown on the "Richieste Totali" card (not part of the CSV)
total_requests = 5

# Number of most recent rows plotted on the visitor chart
chart_window = 30

# Initial theme: light or dark
default_theme = "light"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
