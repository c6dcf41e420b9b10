//! Process-wide configuration read from the environment (and an optional `.env` file),
//! plus logging initialisation.

use crate::error::{AppError, Result};
use std::env;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Top-level question used when none is given on the command line.
pub const DEFAULT_QUESTION: &str = "Would you like to";

/// Log line format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Whether console lines are coloured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_format: LogFormat,
    /// Directory for daily-rolling log files. Logs go to stderr when unset.
    pub log_dir: Option<PathBuf>,
    pub color: ColorMode,
    pub question: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_format: LogFormat::Text,
            log_dir: None,
            color: ColorMode::Auto,
            question: DEFAULT_QUESTION.to_string(),
        }
    }
}

impl Config {
    /// Loads `.env` (if present) and reads the `LETTER_MENU_*` variables.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Config::default();

        if let Some(format) = lookup("LETTER_MENU_LOG_FORMAT") {
            config.log_format = match format.to_lowercase().as_str() {
                "text" | "" => LogFormat::Text,
                "json" => LogFormat::Json,
                other => {
                    return Err(AppError::Cli(format!(
                        "LETTER_MENU_LOG_FORMAT must be 'text' or 'json', got '{}'",
                        other
                    )))
                },
            };
        }

        config.log_dir = lookup("LETTER_MENU_LOG_DIR")
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from);

        if lookup("NO_COLOR").is_some_and(|v| !v.is_empty()) {
            config.color = ColorMode::Never;
        }
        if let Some(color) = lookup("LETTER_MENU_COLOR") {
            config.color = match color.to_lowercase().as_str() {
                "auto" | "" => ColorMode::Auto,
                "always" => ColorMode::Always,
                "never" => ColorMode::Never,
                other => {
                    return Err(AppError::Cli(format!(
                        "LETTER_MENU_COLOR must be 'auto', 'always' or 'never', got '{}'",
                        other
                    )))
                },
            };
        }

        if let Some(question) = lookup("LETTER_MENU_QUESTION").filter(|q| !q.trim().is_empty()) {
            config.question = question;
        }

        Ok(config)
    }

    /// Applies the colour override to the `colored` crate.
    pub fn apply_color(&self) {
        match self.color {
            ColorMode::Auto => colored::control::unset_override(),
            ColorMode::Always => colored::control::set_override(true),
            ColorMode::Never => colored::control::set_override(false),
        }
    }

    /// Initializes the global tracing subscriber. `RUST_LOG` controls the filter and
    /// defaults to `warn` so logs stay out of the way of the menus.
    ///
    /// Keep the returned guard alive for as long as logs should be flushed to file.
    pub fn init_logging(&self) -> Option<WorkerGuard> {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let builder = tracing_subscriber::fmt().with_env_filter(filter);

        match &self.log_dir {
            Some(dir) => {
                let appender = tracing_appender::rolling::daily(dir, "letter-menu.log");
                let (writer, guard) = tracing_appender::non_blocking(appender);
                let builder = builder.with_writer(writer).with_ansi(false);
                match self.log_format {
                    LogFormat::Text => builder.init(),
                    LogFormat::Json => builder.json().init(),
                }
                Some(guard)
            },
            None => {
                let builder = builder.with_writer(std::io::stderr);
                match self.log_format {
                    LogFormat::Text => builder.init(),
                    LogFormat::Json => builder.json().init(),
                }
                None
            },
        }
    }
}
