use crate::api::UserDirectory;
use crate::models::NewUser;
use async_trait::async_trait;
use clap::Parser;
use letter_menu::prompt::{Menu, OptionSet, Outcome, Prompter};
use letter_menu::{resolved, Handler, Result};
use std::path::PathBuf;
use tracing::info;

/// Main menu keys.
pub const CREATE_USER: &str = "createUser";
pub const DELETE_USER: &str = "deleteUser";
pub const LIST_USERS: &str = "listUsers";

/// Example user directory driven by a lettered menu
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// JSON file with users to start from: a list of users or {"<id>": "<name>"}
    #[arg(short, long)]
    pub users: Option<PathBuf>,

    /// Question shown above the main menu
    #[arg(short, long)]
    pub question: Option<String>,

    /// Any other arguments; only logged
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub rest: Vec<String>,
}

impl Cli {
    /// One-line summary of the arguments, e.g. `users: [seed.json], root: [x, y]`.
    pub fn describe(&self) -> String {
        let mut parts = Vec::new();
        if let Some(users) = &self.users {
            parts.push(format!("users: [{}]", users.display()));
        }
        if let Some(question) = &self.question {
            parts.push(format!("question: [{}]", question));
        }
        if !self.rest.is_empty() {
            parts.push(format!("root: [{}]", self.rest.join(", ")));
        }
        parts.join(", ")
    }
}

/// The main menu shown by the example application.
pub fn main_menu() -> Result<OptionSet> {
    OptionSet::from_map([
        (CREATE_USER, "Create a new user"),
        (DELETE_USER, "Delete a user"),
        (LIST_USERS, "List users"),
    ])
}

/// Handles main-menu selections against a user directory.
pub struct App {
    directory: UserDirectory,
}

impl App {
    pub fn new(directory: UserDirectory) -> Self {
        Self { directory }
    }

    async fn create_user(&mut self, prompter: &mut Prompter) -> Result<Outcome<()>> {
        let email = prompter
            .ask(Some("Enter user's email"), "email")
            .await?
            .unwrap_or_default();
        let names = prompter
            .ask_fields(Some("What's the name for the user"), &["firstname", "lastname"])
            .await?;

        let new_user = NewUser {
            email,
            firstname: names.get("firstname").unwrap_or_default().to_string(),
            lastname: names.get("lastname").unwrap_or_default().to_string(),
        };

        let user = match self.directory.create(new_user) {
            Ok(user) => user,
            Err(e) => {
                return Ok(Outcome::soft_exit(format!(
                    "User could not be created because of error: {}",
                    e
                )))
            },
        };

        info!(id = %user.id, "User created");
        prompter.console().line(format!(
            "User {} {} was created successfully!",
            user.firstname, user.lastname
        ))?;
        Ok(Outcome::Resolved(()))
    }

    async fn delete_user(&mut self, prompter: &mut Prompter) -> Result<Outcome<()>> {
        if self.directory.list().is_empty() {
            return Ok(Outcome::soft_exit("There are no users to delete"));
        }

        let users = OptionSet::from_map(
            self.directory
                .list()
                .iter()
                .map(|u| (u.id.clone(), u.display_name())),
        )?;
        let menu = Menu::new(&users).question("Which user would you like to delete?");
        let Some(id) = resolved!(prompter.select(&menu).await) else {
            return Ok(Outcome::SoftExit(None));
        };

        prompter.console().paragraph("Are you absolutely sure?")?;
        let id = resolved!(prompter.confirm(id).await);

        let user = self.directory.delete(&id)?;
        info!(id = %user.id, "User deleted");
        prompter.console().line(format!(
            "User {} was successfully deleted!",
            user.display_name()
        ))?;
        Ok(Outcome::Resolved(()))
    }

    fn list_users(&self, prompter: &mut Prompter) -> Result<Outcome<()>> {
        let users = self.directory.list();
        if users.is_empty() {
            prompter.console().paragraph("No users yet")?;
            return Ok(Outcome::Resolved(()));
        }

        prompter.console().paragraph(format!("{} user(s):", users.len()))?;
        for user in users {
            prompter.console().line(format!(
                "{}  {}  {}",
                user.id,
                user.display_name(),
                user.email.as_deref().unwrap_or("-")
            ))?;
        }
        Ok(Outcome::Resolved(()))
    }
}

#[async_trait]
impl Handler for App {
    async fn handle(&mut self, prompter: &mut Prompter, selection: &str) -> Result<Outcome<()>> {
        match selection {
            CREATE_USER => self.create_user(prompter).await,
            DELETE_USER => self.delete_user(prompter).await,
            LIST_USERS => self.list_users(prompter),
            other => Ok(Outcome::hard_exit(format!("Unknown selection \"{}\"", other))),
        }
    }
}
