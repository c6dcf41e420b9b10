//! The top-level driver: show the main menu, run the selected handler, recover, repeat.
//!
//! Every outcome except a deliberate hard exit lands back on the same main menu, so a
//! CLI built on [`start_with`] has exactly one recovery point:
//!
//! * a handler that completes prints `All DONE!`;
//! * a soft exit prints its message (if any);
//! * an unexpected error is reported on stderr as `ERROR: <message> <code> <detail>`;
//! * a hard exit prints its message and ends the loop.
//!
//! Quitting the main menu itself is always a hard exit, and so is an interrupted read.

use crate::error::{AppError, Result};
use crate::prompt::{Menu, OptionSet, Outcome, Prompter};
use async_trait::async_trait;
use colored::*;
use tracing::{debug, error, info};

/// Runs the workflow for one main-menu selection.
#[async_trait]
pub trait Handler: Send {
    /// Handles `selection` (the key of the chosen option). Nested prompts go through
    /// `prompter`.
    async fn handle(&mut self, prompter: &mut Prompter, selection: &str) -> Result<Outcome<()>>;
}

/// How the supervisor loop ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exit {
    /// Message carried by the hard exit, already printed.
    pub message: Option<String>,
}

/// What the recovering stage has to deal with.
#[derive(Debug)]
enum Flow {
    Done,
    Soft(Option<String>),
    Hard(Option<String>),
    Failed(AppError),
}

impl Flow {
    fn from_error(err: AppError) -> Self {
        match err {
            AppError::Canceled => Flow::Hard(None),
            other => Flow::Failed(other),
        }
    }
}

#[derive(Debug)]
enum LoopState {
    Menu,
    Handling(String),
    Recovering(Flow),
}

/// Shows `question` with `options` and hands each selection to `handler`, forever,
/// until a hard exit.
///
/// # Errors
///
/// Only when the console itself can no longer be written to.
pub async fn start_with<H>(
    prompter: &mut Prompter,
    question: &str,
    options: &OptionSet,
    handler: &mut H,
) -> Result<Exit>
where
    H: Handler + ?Sized,
{
    info!(options = options.len(), "Starting main menu");
    let mut state = LoopState::Menu;

    loop {
        state = match state {
            LoopState::Menu => {
                let menu = Menu::new(options).question(question);
                match prompter.select(&menu).await {
                    Ok(Outcome::Resolved(Some(key))) => LoopState::Handling(key),
                    // Nothing above the main menu to fall back to.
                    Ok(Outcome::Resolved(None)) | Ok(Outcome::SoftExit(_)) => {
                        LoopState::Recovering(Flow::Hard(None))
                    },
                    Ok(Outcome::HardExit(message)) => LoopState::Recovering(Flow::Hard(message)),
                    Err(err) => LoopState::Recovering(Flow::from_error(err)),
                }
            },
            LoopState::Handling(key) => {
                debug!(selection = %key, "Running handler");
                let flow = match handler.handle(prompter, &key).await {
                    Ok(Outcome::Resolved(())) => {
                        prompter.console().paragraph("All DONE!".green())?;
                        Flow::Done
                    },
                    Ok(Outcome::SoftExit(message)) => Flow::Soft(message),
                    Ok(Outcome::HardExit(message)) => Flow::Hard(message),
                    Err(err) => Flow::from_error(err),
                };
                LoopState::Recovering(flow)
            },
            LoopState::Recovering(flow) => {
                match flow {
                    Flow::Done => {},
                    Flow::Soft(message) => {
                        debug!(message = ?message, "Soft exit, back to main menu");
                        print_message(prompter, message.as_deref())?;
                    },
                    Flow::Hard(message) => {
                        info!(message = ?message, "Hard exit");
                        print_message(prompter, message.as_deref())?;
                        return Ok(Exit { message });
                    },
                    Flow::Failed(err) => {
                        error!(code = err.code(), "Handler failed: {:?}", err);
                        prompter.console().error_line(format!(
                            "{} {} {} {:?}",
                            "ERROR:".red().bold(),
                            err,
                            err.code(),
                            err
                        ))?;
                    },
                }
                LoopState::Menu
            },
        };
    }
}

fn print_message(prompter: &mut Prompter, message: Option<&str>) -> Result<()> {
    match message.filter(|m| !m.is_empty()) {
        Some(message) => prompter.console().paragraph(message),
        None => Ok(()),
    }
}
