//! Dashboard configuration: TOML file with defaults for every field.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use leads_core::Tab;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Errors from loading or validating the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("tick_rate_ms must be between 1 and 1000, got {0}")]
    TickRate(u64),

    #[error("unknown log_level '{0}' (expected trace, debug, info, warn, or error)")]
    LogLevel(String),
}

/// Runtime settings for the terminal dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    /// Input poll timeout per frame.
    pub tick_rate_ms: u64,
    pub log_level: String,
    /// Log destination. The terminal itself is owned by the UI.
    pub log_file: PathBuf,
    /// Tab shown on launch.
    pub start_tab: Tab,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 50,
            log_level: "info".to_string(),
            log_file: default_log_file(),
            start_tab: Tab::default(),
        }
    }
}

impl DashboardConfig {
    /// Load a configuration file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse and validate a configuration string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the configuration for startup.
    ///
    /// An explicit path must exist. Without one, the per-user file is read if
    /// present and defaults apply otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match Self::default_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=1000).contains(&self.tick_rate_ms) {
            return Err(ConfigError::TickRate(self.tick_rate_ms));
        }
        let level = self.log_level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::LogLevel(self.log_level.clone()));
        }
        Ok(())
    }

    /// Replace the log level, re-validating it.
    pub fn with_log_level(mut self, level: &str) -> Result<Self, ConfigError> {
        self.log_level = level.to_string();
        self.validate()?;
        Ok(self)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    /// `<config_dir>/leads-dashboard/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("leads-dashboard").join("config.toml"))
    }
}

fn default_log_file() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("leads-dashboard")
        .join("dashboard.log")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config = DashboardConfig::from_toml("").unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.start_tab, Tab::Leads);
        assert_eq!(config.tick_rate(), Duration::from_millis(50));
    }

    #[test]
    fn fields_override_defaults() {
        let config = DashboardConfig::from_toml(
            r#"
            tick_rate_ms = 100
            log_level = "debug"
            log_file = "/tmp/leads.log"
            start_tab = "Sales"
            "#,
        )
        .unwrap();
        assert_eq!(config.tick_rate_ms, 100);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.log_file, PathBuf::from("/tmp/leads.log"));
        assert_eq!(config.start_tab, Tab::Sales);
    }

    #[test]
    fn unknown_field_is_rejected() {
        let err = DashboardConfig::from_toml("refresh = 5").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn out_of_range_tick_rate() {
        let err = DashboardConfig::from_toml("tick_rate_ms = 0").unwrap_err();
        assert!(matches!(err, ConfigError::TickRate(0)));
        assert!(DashboardConfig::from_toml("tick_rate_ms = 1000").is_ok());
    }

    #[test]
    fn log_level_is_checked() {
        let err = DashboardConfig::default().with_log_level("loud").unwrap_err();
        assert!(matches!(err, ConfigError::LogLevel(ref l) if l == "loud"));
        let config = DashboardConfig::default().with_log_level("WARN").unwrap();
        assert_eq!(config.log_level, "WARN");
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let path = std::env::temp_dir().join("leads_dashboard_missing").join("config.toml");
        let err = DashboardConfig::load(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn explicit_file_roundtrip() {
        let dir = std::env::temp_dir().join("leads_dashboard_config_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(&path, "start_tab = \"Sales\"\n").unwrap();

        let config = DashboardConfig::load(Some(&path)).unwrap();
        assert_eq!(config.start_tab, Tab::Sales);

        let _ = std::fs::remove_dir_all(&dir);
    }
}
