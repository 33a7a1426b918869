//! Settings file handling for loading and saving application preferences.
//!
//! Settings are stored as JSON. Every field has a default, so an empty object
//! (`{}`) is a valid settings file. The skip catalog is never read from here.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Allowed range for the input poll interval in milliseconds
pub const TICK_RATE_RANGE: std::ops::RangeInclusive<u64> = 10..=1000;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Application settings that can be saved/loaded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Default tracing level (`RUST_LOG` takes precedence)
    pub log_level: String,
    /// Log file for the interactive wizard; logging is off in the TUI when unset
    pub log_file: Option<PathBuf>,
    /// Input poll interval for the event loop
    pub tick_rate_ms: u64,
    /// Open the help overlay when the wizard starts
    pub show_help_on_start: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_file: None,
            tick_rate_ms: 50,
            show_help_on_start: false,
        }
    }
}

impl Settings {
    /// Save settings to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json =
            serde_json::to_string_pretty(self).context("Failed to serialize settings to JSON")?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write settings to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Load settings from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read settings from {:?}", path.as_ref()))?;

        let settings: Self =
            serde_json::from_str(&content).context("Failed to parse settings JSON")?;

        Ok(settings)
    }

    /// Settings from `path` (or defaults) with overrides applied, validated.
    pub fn resolve(
        path: Option<&Path>,
        log_level: Option<&str>,
        log_file: Option<&Path>,
    ) -> Result<Self> {
        let settings = match path {
            Some(path) => Self::load_from_file(path)?,
            None => Self::default(),
        }
        .with_overrides(log_level, log_file);
        settings.validate()?;
        Ok(settings)
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        let level = self.log_level.trim().to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            anyhow::bail!(
                "Log level must be one of {} (got {:?})",
                LOG_LEVELS.join(", "),
                self.log_level
            );
        }

        if !TICK_RATE_RANGE.contains(&self.tick_rate_ms) {
            anyhow::bail!(
                "Tick rate must be between {} and {} ms",
                TICK_RATE_RANGE.start(),
                TICK_RATE_RANGE.end()
            );
        }

        if let Some(ref log_file) = self.log_file {
            if log_file.as_os_str().is_empty() {
                anyhow::bail!("Log file path cannot be empty");
            }
        }

        Ok(())
    }

    /// Apply command-line overrides on top of file settings.
    pub fn with_overrides(mut self, log_level: Option<&str>, log_file: Option<&Path>) -> Self {
        if let Some(level) = log_level {
            self.log_level = level.to_string();
        }
        if let Some(file) = log_file {
            self.log_file = Some(file.to_path_buf());
        }
        self
    }
}
