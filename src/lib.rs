//! Lettered option menus and a supervisor loop for interactive command-line workflows.
//!
//! A typical program builds an [`OptionSet`](prompt::OptionSet), wraps a
//! [`TerminalInput`](prompt::TerminalInput) and a [`Console`](prompt::Console) in a
//! [`Prompter`](prompt::Prompter), and hands both to [`supervisor::start_with`] together
//! with a [`Handler`](supervisor::Handler) for the selections.

pub mod config;
pub mod error;
pub mod prompt;
pub mod supervisor;

pub use error::{AppError, Result};
pub use supervisor::{start_with, Exit, Handler};
