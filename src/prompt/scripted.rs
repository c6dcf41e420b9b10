//! Canned input for driving prompts without a terminal, e.g. from tests.

use super::input::TextInput;
use crate::error::{AppError, Result};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

/// Plays back a fixed list of answers, one per read.
///
/// Once the answers run out every read fails with `AppError::Canceled`, the same
/// way an interrupted terminal read does.
pub struct ScriptedInput {
    answers: VecDeque<String>,
    labels: Arc<Mutex<Vec<String>>>,
}

impl ScriptedInput {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            labels: Arc::default(),
        }
    }

    /// Every label asked so far, shared with the input.
    pub fn labels(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.labels)
    }

    fn next(&mut self, label: &str) -> Result<String> {
        self.labels
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(label.to_string());
        self.answers.pop_front().ok_or(AppError::Canceled)
    }
}

#[async_trait]
impl TextInput for ScriptedInput {
    async fn read_line(&mut self, label: &str) -> Result<Option<String>> {
        let answer = self.next(label)?;
        let answer = answer.trim();
        Ok((!answer.is_empty()).then(|| answer.to_string()))
    }

    async fn read_password(&mut self, label: &str) -> Result<String> {
        self.next(label)
    }
}
