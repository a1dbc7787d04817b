//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::charts::{ChartResult, ChartSet, ChartSpec, chatbot_chart, stock_chart};
use crate::view::{Selectors, ViewResult, ViewTree, default_layout};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub dashboard: DashboardConfig,

    #[serde(default)]
    pub charts: ChartsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// View layout configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DashboardConfig {
    /// JSON view tree; the built-in layout is used when unset
    pub layout: Option<PathBuf>,

    /// Nav link selected at start-up
    pub initial_page: Option<String>,

    #[serde(default)]
    pub selectors: Selectors,
}

impl DashboardConfig {
    /// Load the configured layout, or the built-in one
    pub fn load_layout(&self) -> ViewResult<ViewTree> {
        match &self.layout {
            Some(path) => {
                tracing::info!("Loading layout from {:?}", path);
                ViewTree::load(path)
            }
            None => Ok(default_layout()),
        }
    }
}

/// Chart configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ChartsConfig {
    #[serde(default = "default_enabled")]
    pub stock: bool,

    #[serde(default = "default_enabled")]
    pub chatbot: bool,

    /// Additional chart descriptions
    #[serde(default)]
    pub custom: Vec<ChartSpec>,
}

fn default_enabled() -> bool {
    true
}

impl Default for ChartsConfig {
    fn default() -> Self {
        Self {
            stock: default_enabled(),
            chatbot: default_enabled(),
            custom: Vec::new(),
        }
    }
}

impl ChartsConfig {
    /// Enabled presets followed by the custom charts, validated
    pub fn build(&self) -> ChartResult<ChartSet> {
        let mut charts = Vec::new();
        if self.stock {
            charts.push(stock_chart());
        }
        if self.chatbot {
            charts.push(chatbot_chart());
        }
        charts.extend(self.custom.iter().cloned());
        ChartSet::new(charts)
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
            dirs::config_dir().map(|p| p.join("vaccine-dashboard").join("config.toml")),
            Some(PathBuf::from("/etc/vaccine-dashboard/config.toml")),
            Some(PathBuf::from("./config.toml")),
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

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(layout) = var("DASHBOARD_LAYOUT") {
            self.dashboard.layout = Some(PathBuf::from(layout));
        }
        if let Some(page) = var("DASHBOARD_INITIAL_PAGE") {
            self.dashboard.initial_page = Some(page);
        }

        if let Some(level) = var("DASHBOARD_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("DASHBOARD_LOG_FORMAT") {
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
    r#"# Vaccine Dashboard Configuration
#
# Environment variables override these settings:
# - DASHBOARD_LAYOUT
# - DASHBOARD_INITIAL_PAGE
# - DASHBOARD_LOG_LEVEL
# - DASHBOARD_LOG_FORMAT

[dashboard]
# JSON view tree to load instead of the built-in layout
# layout = "./layout.json"

# Nav link selected at start-up
# initial_page = "dashboard"

[dashboard.selectors]
nav_link_class = "nav-link"
target_attribute = "data-page"
page_class = "page"
entry_class = "conversation-item"
label_tag = "strong"
header_class = "chat-header"
header_tag = "h3"
active_class = "active"

[charts]
# Built-in charts
stock = true
chatbot = true

# Additional charts
# [[charts.custom]]
# name = "weekly"
# canvas = "weeklyChart"
# kind = "line"
# labels = ["Seg", "Ter", "Qua"]
#
# [[charts.custom.series]]
# name = "Doses"
# values = [10.0, 12.0, 9.0]
# style = { background_color = "rgba(16, 185, 129, 0.1)", border_color = "rgb(16, 185, 129)", tension = 0.4, fill = true }

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
