//! Menus, confirmations and free-text prompts.

use super::console::Console;
use super::input::{Fields, TextInput, DEFAULT_LABEL};
use super::options::OptionSet;
use super::outcome::Outcome;
use crate::error::Result;
use colored::*;
use tracing::{debug, warn};

/// Field asked by [`Prompter::confirm`].
pub const CONTINUE_FIELD: &str = "continue? (y/n)";

/// Message carried by the soft exit of a declined confirmation.
pub const ABORTED: &str = "Aborted";

/// A menu to show: its options plus an optional question and default.
#[derive(Debug, Clone)]
pub struct Menu<'a> {
    options: &'a OptionSet,
    question: Option<&'a str>,
    default_option: Option<&'a str>,
}

impl<'a> Menu<'a> {
    pub fn new(options: &'a OptionSet) -> Self {
        Self {
            options,
            question: None,
            default_option: None,
        }
    }

    /// Text printed above the options.
    pub fn question(mut self, question: &'a str) -> Self {
        self.question = Some(question);
        self
    }

    /// Describes what an empty answer means. Without one, empty answers are invalid.
    pub fn default_option(mut self, description: &'a str) -> Self {
        self.default_option = Some(description).filter(|d| !d.is_empty());
        self
    }
}

/// Owns the input adapter and the console; every prompt goes through it.
///
/// Borrowing the prompter mutably for each read keeps at most one question open.
pub struct Prompter {
    input: Box<dyn TextInput>,
    console: Console,
}

impl Prompter {
    pub fn new(input: impl TextInput + 'static, console: Console) -> Self {
        Self {
            input: Box::new(input),
            console,
        }
    }

    pub fn console(&mut self) -> &mut Console {
        &mut self.console
    }

    /// Shows `menu` and reads a selection until it is valid.
    ///
    /// Resolves to `Some(key)` for a chosen option, or `None` when the answer was empty
    /// and the menu has a default. Answering `q` yields `Outcome::SoftExit(None)`.
    pub async fn select(&mut self, menu: &Menu<'_>) -> Result<Outcome<Option<String>>> {
        loop {
            self.render(menu)?;

            let answer = self
                .input
                .read_line(DEFAULT_LABEL)
                .await?
                .unwrap_or_default()
                .to_lowercase();

            if answer.is_empty() && menu.default_option.is_some() {
                debug!("Empty answer, default option applies");
                return Ok(Outcome::Resolved(None));
            }
            if let Some(key) = menu.options.resolve(&answer) {
                debug!(selection = key, "Option selected");
                return Ok(Outcome::Resolved(Some(key.to_string())));
            }
            if answer == "q" {
                debug!("Menu quit");
                return Ok(Outcome::SoftExit(None));
            }

            warn!(answer = %answer, "Unrecognized selection");
            self.console
                .line("Please select one of the options!".yellow())?;
        }
    }

    fn render(&mut self, menu: &Menu<'_>) -> Result<()> {
        if let Some(question) = menu.question {
            self.console.paragraph(question.bold())?;
        }
        for line in menu.options.lines() {
            self.console.line(line)?;
        }
        self.console.line("q) Quit")?;
        if let Some(default) = menu.default_option {
            self.console.line(format!("(default): {default}"))?;
        }
        Ok(())
    }

    /// Asks `continue? (y/n)`. Hands `payload` back on `y`, soft-exits with
    /// `"Aborted"` on anything else.
    pub async fn confirm<T>(&mut self, payload: T) -> Result<Outcome<T>> {
        let fields = self.input.read_fields(&[CONTINUE_FIELD]).await?;
        let answer = fields.get(CONTINUE_FIELD).unwrap_or_default().to_lowercase();
        if answer == "y" {
            Ok(Outcome::Resolved(payload))
        } else {
            debug!(answer = %answer, "Confirmation declined");
            Ok(Outcome::soft_exit(ABORTED))
        }
    }

    /// Prints `text` (if any), then reads one line for `field`.
    pub async fn ask(&mut self, text: Option<&str>, field: &str) -> Result<Option<String>> {
        if let Some(text) = text {
            self.console.paragraph(text)?;
        }
        self.input.read_line(field).await
    }

    /// Prints `text` (if any), then reads one line per field.
    pub async fn ask_fields(&mut self, text: Option<&str>, fields: &[&str]) -> Result<Fields> {
        if let Some(text) = text {
            self.console.paragraph(text)?;
        }
        self.input.read_fields(fields).await
    }

    /// Reads a hidden `password` field.
    pub async fn ask_password(&mut self) -> Result<String> {
        self.input.read_password("password").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::prompt::console::SharedBuffer;
    use crate::prompt::scripted::ScriptedInput;

    fn prompter(answers: &[&str]) -> (Prompter, SharedBuffer, AskedLabels) {
        let input = ScriptedInput::new(answers.iter().copied());
        let labels = input.labels();
        let out = SharedBuffer::default();
        let console = Console::new(out.clone(), SharedBuffer::default());
        (Prompter::new(input, console), out, AskedLabels(labels))
    }

    struct AskedLabels(std::sync::Arc<std::sync::Mutex<Vec<String>>>);

    impl AskedLabels {
        fn reads(&self) -> usize {
            self.0.lock().unwrap().len()
        }
    }

    fn users() -> OptionSet {
        OptionSet::from_map([
            ("31725276", "Leonardo DiCaprio"),
            ("53bd3330", "Jennifer Lopez"),
        ])
        .unwrap()
    }

    #[tokio::test]
    async fn test_invalid_then_valid_reprompts_once() {
        let set = users();
        let (mut prompter, out, asked) = prompter(&["z", "a"]);

        let outcome = prompter.select(&Menu::new(&set)).await.unwrap();

        assert_eq!(outcome, Outcome::Resolved(Some("31725276".to_string())));
        assert_eq!(asked.reads(), 2);
        let output = out.contents();
        assert_eq!(output.matches("Please select one of the options!").count(), 1);
        assert_eq!(output.matches("a) Leonardo DiCaprio").count(), 2);
    }

    #[tokio::test]
    async fn test_empty_without_default_reprompts() {
        let set = users();
        let (mut prompter, out, asked) = prompter(&["", "b"]);

        let outcome = prompter.select(&Menu::new(&set)).await.unwrap();

        assert_eq!(outcome, Outcome::Resolved(Some("53bd3330".to_string())));
        assert_eq!(asked.reads(), 2);
        assert!(out.contents().contains("Please select one of the options!"));
    }

    #[tokio::test]
    async fn test_empty_with_default_resolves_none() {
        let set = users();
        let (mut prompter, out, asked) = prompter(&["", "a"]);

        let menu = Menu::new(&set).default_option("Keep everyone");
        let outcome = prompter.select(&menu).await.unwrap();

        assert_eq!(outcome, Outcome::Resolved(None));
        assert_eq!(asked.reads(), 1);
        assert!(out.contents().contains("(default): Keep everyone"));
    }

    #[tokio::test]
    async fn test_quit_is_soft_exit_without_message() {
        let set = users();
        let (mut prompter, _out, _asked) = prompter(&["q"]);

        let outcome = prompter.select(&Menu::new(&set)).await.unwrap();

        assert_eq!(outcome, Outcome::SoftExit(None));
    }

    #[tokio::test]
    async fn test_option_code_q_wins_over_quit() {
        let set = OptionSet::from_list((0..17).map(|i| format!("option {i}"))).unwrap();
        let (mut prompter, out, _asked) = prompter(&["q"]);

        let outcome = prompter.select(&Menu::new(&set)).await.unwrap();

        assert_eq!(outcome, Outcome::Resolved(Some("option 16".to_string())));
        assert!(out.contents().contains("q) option 16"));
    }

    #[tokio::test]
    async fn test_uppercase_answer_is_normalized() {
        let set = OptionSet::from_list(["red", "green"]).unwrap();
        let (mut prompter, _out, _asked) = prompter(&["B"]);

        let outcome = prompter.select(&Menu::new(&set)).await.unwrap();

        assert_eq!(outcome, Outcome::Resolved(Some("green".to_string())));
    }

    #[tokio::test]
    async fn test_rendering_layout() {
        let set = users();
        let (mut prompter, out, _asked) = prompter(&["a"]);

        colored::control::set_override(false);
        let menu = Menu::new(&set).question("Which user would you like to delete?");
        prompter.select(&menu).await.unwrap();

        assert_eq!(
            out.contents(),
            "\nWhich user would you like to delete?\n\
             a) Leonardo DiCaprio\n\
             b) Jennifer Lopez\n\
             q) Quit\n"
        );
    }

    #[tokio::test]
    async fn test_input_errors_propagate() {
        let set = users();
        let (mut prompter, _out, _asked) = prompter(&[]);

        let result = prompter.select(&Menu::new(&set)).await;

        assert!(matches!(result, Err(AppError::Canceled)));
    }

    #[tokio::test]
    async fn test_confirm_yes_returns_payload() {
        let (mut prompter, _out, asked) = prompter(&["Y"]);
        let payload = vec![1, 2, 3];
        let address = payload.as_ptr();

        let outcome = prompter.confirm(payload).await.unwrap();

        match outcome {
            Outcome::Resolved(returned) => assert_eq!(returned.as_ptr(), address),
            other => panic!("Expected payload back, got {other:?}"),
        }
        assert_eq!(*asked.0.lock().unwrap(), vec![CONTINUE_FIELD]);
    }

    #[tokio::test]
    async fn test_confirm_no_aborts() {
        let (mut prompter, _out, _asked) = prompter(&["n"]);

        let outcome = prompter.confirm("user-1").await.unwrap();

        assert_eq!(outcome, Outcome::SoftExit(Some(ABORTED.to_string())));
    }

    #[tokio::test]
    async fn test_confirm_empty_aborts() {
        let (mut prompter, _out, _asked) = prompter(&[""]);

        let outcome = prompter.confirm(()).await.unwrap();

        assert_eq!(outcome, Outcome::soft_exit(ABORTED));
    }

    #[tokio::test]
    async fn test_ask_prints_heading_and_trims() {
        let (mut prompter, out, asked) = prompter(&["  ada@example.com  "]);

        let answer = prompter
            .ask(Some("Enter user's email"), "email")
            .await
            .unwrap();

        assert_eq!(answer.as_deref(), Some("ada@example.com"));
        assert_eq!(out.contents(), "\nEnter user's email\n");
        assert_eq!(*asked.0.lock().unwrap(), vec!["email"]);
    }

    #[tokio::test]
    async fn test_ask_password_uses_password_field() {
        let (mut prompter, _out, asked) = prompter(&["hunter2"]);

        assert_eq!(prompter.ask_password().await.unwrap(), "hunter2");
        assert_eq!(*asked.0.lock().unwrap(), vec!["password"]);
    }
}
