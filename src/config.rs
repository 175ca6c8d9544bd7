//! User configuration stored as TOML.
//!
//! Interval lengths and UI preferences. Command-line flags are applied on top
//! of the loaded values in `main`.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::CONFIG_DIR_NAME;
use crate::models::TimerDurations;

/// Starting display mode.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
pub enum ThemeMode {
    /// Follow the OS setting
    #[default]
    Auto,
    /// Start dark
    Dark,
    /// Start light
    Light,
}

/// Interval lengths, in minutes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimerConfig {
    /// Focus interval length
    pub work_minutes: u32,
    /// Short break length
    pub short_break_minutes: u32,
    /// Long break length
    pub long_break_minutes: u32,
    /// Every n-th cycle boundary selects a long break
    pub long_break_every: u32,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            work_minutes: 25,
            short_break_minutes: 5,
            long_break_minutes: 15,
            long_break_every: 4,
        }
    }
}

impl TimerConfig {
    /// Converts to the second-based durations the timer runs on.
    #[must_use]
    pub fn durations(&self) -> TimerDurations {
        TimerDurations {
            work_seconds: self.work_minutes.saturating_mul(60),
            short_break_seconds: self.short_break_minutes.saturating_mul(60),
            long_break_seconds: self.long_break_minutes.saturating_mul(60),
            long_break_every: self.long_break_every,
        }
    }
}

/// Display preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UiConfig {
    /// Starting display mode
    #[serde(default)]
    pub theme_mode: ThemeMode,
    /// Open the help overlay at launch
    #[serde(default)]
    pub show_help_on_startup: bool,
}

/// Everything read from `config.toml`.
///
/// # File Location
///
/// - Linux: `~/.config/PomodoroTui/config.toml`
/// - macOS: `~/Library/Application Support/PomodoroTui/config.toml`
/// - Windows: `%APPDATA%\PomodoroTui\config.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Interval lengths
    #[serde(default)]
    pub timer: TimerConfig,
    /// Display preferences
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// `<platform config dir>/PomodoroTui`.
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(CONFIG_DIR_NAME);

        Ok(config_dir)
    }

    /// Default location of `config.toml`.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from `path`, falling back to defaults if it doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .context(format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Writes to `path` through a temporary file that is renamed into place.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .context(format!("Failed to create config directory: {}", dir.display()))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let temp_path = path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, path).context(format!(
            "Failed to rename temp config file to: {}",
            path.display()
        ))?;

        Ok(())
    }

    /// Rejects zero interval lengths and a zero long-break spacing.
    pub fn validate(&self) -> Result<()> {
        let timer = &self.timer;
        if timer.work_minutes == 0 {
            anyhow::bail!("timer.work_minutes must be greater than 0");
        }
        if timer.short_break_minutes == 0 {
            anyhow::bail!("timer.short_break_minutes must be greater than 0");
        }
        if timer.long_break_minutes == 0 {
            anyhow::bail!("timer.long_break_minutes must be greater than 0");
        }
        if timer.long_break_every == 0 {
            anyhow::bail!("timer.long_break_every must be greater than 0");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_new() {
        let config = Config::new();
        assert_eq!(config.ui.theme_mode, ThemeMode::Auto);
        assert!(!config.ui.show_help_on_startup);
        assert_eq!(config.timer.durations(), TimerDurations::default());
    }

    #[test]
    fn test_config_validate() {
        let mut config = Config::new();
        assert!(config.validate().is_ok());

        config.timer.long_break_every = 0;
        assert!(config.validate().is_err());

        config.timer.long_break_every = 4;
        config.timer.work_minutes = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load_from(&temp_dir.path().join("missing.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::new();
        config.timer.work_minutes = 50;
        config.ui.theme_mode = ThemeMode::Dark;

        config.save_to(&config_file).unwrap();
        assert!(!config_file.with_extension("toml.tmp").exists());

        let loaded = Config::load_from(&config_file).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        fs::write(&config_file, "[timer]\nshort_break_minutes = 10\n").unwrap();

        let loaded = Config::load_from(&config_file).unwrap();
        assert_eq!(loaded.timer.short_break_minutes, 10);
        assert_eq!(loaded.timer.work_minutes, 25);
        assert_eq!(loaded.ui.theme_mode, ThemeMode::Auto);
    }

    #[test]
    fn test_invalid_file_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        fs::write(&config_file, "[timer]\nlong_break_every = 0\n").unwrap();

        assert!(Config::load_from(&config_file).is_err());
    }

    #[test]
    fn test_save_rejects_invalid_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");

        let mut config = Config::new();
        config.timer.short_break_minutes = 0;
        assert!(config.save_to(&config_file).is_err());
        assert!(!config_file.exists());
    }
}
