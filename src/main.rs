mod api;
mod cli;
mod models;

use api::UserDirectory;
use clap::Parser;
use cli::{App, Cli};
use colored::*;
use letter_menu::config::Config;
use letter_menu::prompt::{Console, Prompter, TerminalInput};
use letter_menu::{start_with, Result};
use std::process;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", "Invalid configuration:".red(), e);
            process::exit(1);
        },
    };
    config.apply_color();
    // Held until exit so the fatal log line below still reaches a log file.
    let log_guard = config.init_logging();

    let code = match run(cli, &config).await {
        Ok(()) => 0,
        Err(e) => {
            error!("Fatal error: {:?}", e);
            eprintln!("{} {}", "Fatal error:".red(), e);
            1
        },
    };

    drop(log_guard);
    // A read may still be blocked on stdin; exiting here does not wait for it.
    process::exit(code);
}

async fn run(cli: Cli, config: &Config) -> Result<()> {
    let mut prompter = Prompter::new(TerminalInput::init(), Console::stdio());
    let launched = format!("Launched with args: {}", cli.describe());
    info!("{}", launched);
    prompter.console().line(launched)?;

    let directory = match &cli.users {
        Some(path) => UserDirectory::from_seed_file(path)?,
        None => UserDirectory::new(),
    };
    let mut app = App::new(directory);

    let question = cli.question.as_deref().unwrap_or(&config.question);
    let options = cli::main_menu()?;

    let exit = start_with(&mut prompter, question, &options, &mut app).await?;
    info!(message = ?exit.message, "Exiting");
    Ok(())
}
