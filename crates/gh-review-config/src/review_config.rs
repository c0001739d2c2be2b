//! Review configuration
//!
//! Configuration loaded from `.gh-review.toml`.

use log::LevelFilter;
use serde::{Deserialize, Serialize};

/// User configuration for the review client
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ReviewConfig {
    /// GitHub host to talk to (e.g., "github.com" or a GitHub Enterprise host)
    #[serde(default = "default_host")]
    pub host: String,

    /// Login shown as the author of comments written in this client
    #[serde(default = "default_current_user_login")]
    pub current_user_login: String,

    /// Whether resolved threads are printed under their lines
    #[serde(default = "default_show_resolved")]
    pub show_resolved: bool,

    /// Log level when RUST_LOG is not set (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_host() -> String {
    "github.com".to_string()
}

fn default_current_user_login() -> String {
    "you".to_string()
}

fn default_show_resolved() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            current_user_login: default_current_user_login(),
            show_resolved: default_show_resolved(),
            log_level: default_log_level(),
        }
    }
}

impl ReviewConfig {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        if let Some(content) = crate::load_config_file() {
            match Self::parse(&content) {
                Ok(config) => {
                    log::info!("Loaded review config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {:#}", e);
                }
            }
        }

        log::debug!("Using default review config");
        Self::default()
    }

    /// Parse TOML content; missing keys take their defaults.
    pub fn parse(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// The configured log level, falling back to `Info` for unknown names.
    pub fn log_level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}
