// ABOUTME: Configuration loading for capelog.
// ABOUTME: Reads <config_dir>/mousecape/capelog.toml and resolves the default log directory.

use std::path::PathBuf;

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub logger: LoggerConfig,
}

/// Settings for the debug log session.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Overrides the platform log directory when set.
    pub directory: Option<PathBuf>,
    pub file_prefix: String,
    /// Write the header on init and the end marker on close.
    pub banner: bool,
    /// Mirror every line to stdout.
    pub console: bool,
    /// Logs older than this are removed on init. Zero keeps everything.
    pub retention_hours: u64,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            directory: None,
            file_prefix: "mousecape".to_string(),
            banner: true,
            console: true,
            retention_hours: 24,
        }
    }
}

impl LoggerConfig {
    /// Config that writes into `dir` instead of the platform log directory.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            directory: Some(dir.into()),
            ..Self::default()
        }
    }

    /// The directory log files are written to.
    pub fn logs_dir(&self) -> PathBuf {
        self.directory.clone().unwrap_or_else(default_logs_dir)
    }

    pub fn retention(&self) -> Option<chrono::Duration> {
        if self.retention_hours == 0 {
            return None;
        }
        i64::try_from(self.retention_hours)
            .ok()
            .and_then(chrono::Duration::try_hours)
    }
}

impl Config {
    /// Load config from the user config directory, falling back to defaults.
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Path to the config file.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("mousecape")
            .join("capelog.toml")
    }
}

/// `~/Library/Logs/Mousecape` on macOS, the local data dir elsewhere.
#[cfg(target_os = "macos")]
pub fn default_logs_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("Library")
        .join("Logs")
        .join("Mousecape")
}

/// `~/Library/Logs/Mousecape` on macOS, the local data dir elsewhere.
#[cfg(not(target_os = "macos"))]
pub fn default_logs_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("mousecape")
        .join("logs")
}
