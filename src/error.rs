//! Defines the crate's primary error type `AppError` and a convenience `Result` alias.
//!
//! Uses the `thiserror` crate for ergonomic error definition and provides `From`
//! implementations to convert common external errors into `AppError` variants.
//! Errors that do not implement `Clone` are wrapped in `Arc` so `AppError` stays cloneable.
//!
//! Control signals (quitting a menu, declining a confirmation) are *not* errors; they
//! travel as [`crate::prompt::Outcome`] variants.

use std::sync::Arc;
use thiserror::Error;

/// The primary error enumeration for everything that can go wrong while prompting or
/// running a handler.
#[derive(Error, Debug, Clone)]
pub enum AppError {
    /// The input adapter was interrupted (e.g. Ctrl+C) or can no longer read (no
    /// terminal, input closed). The supervisor always treats this as a request to
    /// terminate.
    #[error("canceled")]
    Canceled,

    /// Error originating from the terminal prompt library (`dialoguer`).
    #[error("Input Error: {0}")]
    Input(Arc<dialoguer::Error>),

    /// Error related to standard I/O operations (console writes, seed files).
    #[error("I/O Error: {0}")]
    Io(Arc<std::io::Error>),

    /// A blocking read task panicked or was aborted.
    #[error("Input task failed: {0}")]
    Join(String),

    /// Error during JSON parsing (`serde_json`).
    #[error("JSON Parsing Error: {0}")]
    JsonParse(Arc<serde_json::Error>),

    /// Error related to accessing environment variables.
    #[error("Environment Error: {0}")]
    Env(#[from] std::env::VarError),

    /// Two options in one option set share a key.
    #[error("Duplicate option key: {0}")]
    DuplicateOption(String),

    /// More options than the two-letter code space can label.
    #[error("Too many options: {0} (at most {max})", max = crate::prompt::codec::MAX_CODES)]
    TooManyOptions(usize),

    /// Error specific to CLI logic or argument handling.
    #[error("CLI Error: {0}")]
    Cli(String),

    /// Failure reported by an application handler.
    #[error("{0}")]
    Handler(String),
}

impl AppError {
    /// Short, stable code printed next to the message in error reports.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Canceled => "E_CANCELED",
            AppError::Input(_) => "E_INPUT",
            AppError::Io(_) => "E_IO",
            AppError::Join(_) => "E_JOIN",
            AppError::JsonParse(_) => "E_JSON",
            AppError::Env(_) => "E_ENV",
            AppError::DuplicateOption(_) => "E_DUPLICATE_OPTION",
            AppError::TooManyOptions(_) => "E_TOO_MANY_OPTIONS",
            AppError::Cli(_) => "E_CLI",
            AppError::Handler(_) => "E_HANDLER",
        }
    }
}

/// A specialized `Result` type using the crate's `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

// --- From implementations ---

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::Interrupted {
            return AppError::Canceled;
        }
        AppError::Io(Arc::new(err))
    }
}

impl From<dialoguer::Error> for AppError {
    fn from(err: dialoguer::Error) -> Self {
        match err {
            dialoguer::Error::IO(io) if ends_input(io.kind()) => AppError::Canceled,
            other => AppError::Input(Arc::new(other)),
        }
    }
}

/// Read failures that no retry can recover from: an interrupt, no terminal attached,
/// or input closed.
fn ends_input(kind: std::io::ErrorKind) -> bool {
    matches!(
        kind,
        std::io::ErrorKind::Interrupted
            | std::io::ErrorKind::NotConnected
            | std::io::ErrorKind::UnexpectedEof
    )
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::JsonParse(Arc::new(err))
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        AppError::Join(err.to_string())
    }
}
