//! The text input adapter: the only place user keystrokes enter the crate.

use crate::error::{AppError, Result};
use async_trait::async_trait;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Password};
use std::sync::Arc;
use tracing::debug;

/// Label used when a prompt has no field name of its own.
pub const DEFAULT_LABEL: &str = "?";

/// Answers to a multi-field prompt, in the order the fields were asked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fields(Vec<(String, String)>);

impl Fields {
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.0.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

/// Reads lines of user-entered text.
///
/// Implementations report an interrupt (Ctrl+C) as `AppError::Canceled`.
#[async_trait]
pub trait TextInput: Send {
    /// Reads one line for `label`. Returns the trimmed text, or `None` if nothing was entered.
    async fn read_line(&mut self, label: &str) -> Result<Option<String>>;

    /// Reads a hidden line, such as a password.
    async fn read_password(&mut self, label: &str) -> Result<String>;

    /// Reads one line per label, in order. Missing answers are stored as empty strings.
    async fn read_fields(&mut self, labels: &[&str]) -> Result<Fields> {
        let mut fields = Fields::default();
        for label in labels {
            let value = self.read_line(label).await?;
            fields.insert(*label, value.unwrap_or_default());
        }
        Ok(fields)
    }
}

/// Terminal-backed input using `dialoguer`.
///
/// Each read runs on a blocking thread and races an interrupt signal, so a Ctrl+C
/// during a read cancels it even while the blocking call is still waiting.
#[derive(Clone)]
pub struct TerminalInput {
    theme: Arc<ColorfulTheme>,
}

impl TerminalInput {
    /// Configures the terminal input subsystem. Call once, from the process entry point.
    pub fn init() -> Self {
        debug!("Initializing terminal input");
        Self {
            theme: Arc::new(ColorfulTheme::default()),
        }
    }

    async fn interact<T, F>(&self, read: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce() -> std::result::Result<T, dialoguer::Error> + Send + 'static,
    {
        let task = tokio::task::spawn_blocking(read);
        tokio::select! {
            joined = task => Ok(joined??),
            signal = tokio::signal::ctrl_c() => {
                signal?;
                debug!("Read interrupted by Ctrl+C");
                Err(AppError::Canceled)
            },
        }
    }
}

#[async_trait]
impl TextInput for TerminalInput {
    async fn read_line(&mut self, label: &str) -> Result<Option<String>> {
        let theme = Arc::clone(&self.theme);
        let label = label.to_string();
        let raw = self
            .interact(move || {
                Input::<String>::with_theme(theme.as_ref())
                    .with_prompt(label)
                    .allow_empty(true)
                    .interact_text()
            })
            .await?;
        let value = raw.trim();
        Ok((!value.is_empty()).then(|| value.to_string()))
    }

    async fn read_password(&mut self, label: &str) -> Result<String> {
        let theme = Arc::clone(&self.theme);
        let label = label.to_string();
        self.interact(move || {
            Password::with_theme(theme.as_ref())
                .with_prompt(label)
                .allow_empty_password(true)
                .interact()
        })
        .await
    }
}
