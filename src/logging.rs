//! Logging initialization
//!
//! Wizard mode: logs go to the configured log file, or nowhere, so nothing is
//! written over the alternate screen.
//! CLI mode: logs go to stderr.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::settings::Settings;

/// Where log output ended up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    File(PathBuf),
    Stderr,
    Disabled,
}

/// Choose the log destination for a run mode.
pub fn log_target(settings: &Settings, is_tui_mode: bool) -> LogTarget {
    match (&settings.log_file, is_tui_mode) {
        (Some(path), _) => LogTarget::File(path.clone()),
        (None, true) => LogTarget::Disabled,
        (None, false) => LogTarget::Stderr,
    }
}

/// Build the level filter; `RUST_LOG` overrides the configured level.
pub fn env_filter(settings: &Settings) -> EnvFilter {
    let level = settings.log_level.trim().to_ascii_lowercase();
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Install the global tracing subscriber.
///
/// Must be called once, before the terminal is switched to raw mode.
pub fn init_logging(settings: &Settings, is_tui_mode: bool) -> Result<LogTarget> {
    let target = log_target(settings, is_tui_mode);

    match &target {
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {:?}", path))?;

            tracing_subscriber::registry()
                .with(env_filter(settings))
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_target(false)
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .try_init()
                .context("Failed to install log subscriber")?;
        }
        LogTarget::Stderr => {
            tracing_subscriber::registry()
                .with(env_filter(settings))
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_target(false)
                        .with_writer(std::io::stderr),
                )
                .try_init()
                .context("Failed to install log subscriber")?;
        }
        LogTarget::Disabled => {}
    }

    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tui_without_file_is_disabled() {
        let settings = Settings::default();
        assert_eq!(log_target(&settings, true), LogTarget::Disabled);
    }

    #[test]
    fn test_cli_without_file_uses_stderr() {
        let settings = Settings::default();
        assert_eq!(log_target(&settings, false), LogTarget::Stderr);
    }

    #[test]
    fn test_file_wins_in_both_modes() {
        let settings = Settings {
            log_file: Some(PathBuf::from("wizard.log")),
            ..Default::default()
        };
        let expected = LogTarget::File(PathBuf::from("wizard.log"));
        assert_eq!(log_target(&settings, true), expected);
        assert_eq!(log_target(&settings, false), expected);
    }
}
