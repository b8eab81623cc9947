//! Prompt/notify surface
//!
//! The surface only paints what it is given. Labels arrive already
//! decorated with the live preview.

use crate::StyledText;
use std::collections::VecDeque;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SurfaceError {
    #[error("Input closed")]
    Closed,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No scripted answer left for: {0}")]
    Exhausted(String),
}

/// Host UI the edit loop talks to
pub trait PromptSurface {
    /// Read one line of free text
    fn prompt_text(
        &mut self,
        label: &StyledText,
        completions: &[String],
    ) -> Result<String, SurfaceError>;

    /// Pick one of `choices`
    fn prompt_choice(
        &mut self,
        label: &StyledText,
        choices: &[String],
    ) -> Result<String, SurfaceError>;

    fn confirm(&mut self, label: &StyledText) -> Result<bool, SurfaceError>;

    fn notify(&mut self, message: &str);
}

/// A queued answer for [`ScriptedSurface`]
#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    Text(String),
    Confirm(bool),
}

/// Surface that replays queued answers and records what it was shown
#[derive(Debug, Default)]
pub struct ScriptedSurface {
    answers: VecDeque<Answer>,
    /// Plain text of every label shown, in order
    pub labels: Vec<String>,
    pub notifications: Vec<String>,
}

impl ScriptedSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, answer: impl Into<String>) -> Self {
        self.answers.push_back(Answer::Text(answer.into()));
        self
    }

    pub fn confirm_with(mut self, answer: bool) -> Self {
        self.answers.push_back(Answer::Confirm(answer));
        self
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next_text(&mut self, label: &StyledText) -> Result<String, SurfaceError> {
        self.labels.push(label.text.clone());
        match self.answers.pop_front() {
            Some(Answer::Text(text)) => Ok(text),
            Some(other) => Err(SurfaceError::Exhausted(format!(
                "{} (next answer is {:?})",
                label.text, other
            ))),
            None => Err(SurfaceError::Exhausted(label.text.clone())),
        }
    }
}

impl PromptSurface for ScriptedSurface {
    fn prompt_text(
        &mut self,
        label: &StyledText,
        _completions: &[String],
    ) -> Result<String, SurfaceError> {
        self.next_text(label)
    }

    fn prompt_choice(
        &mut self,
        label: &StyledText,
        _choices: &[String],
    ) -> Result<String, SurfaceError> {
        self.next_text(label)
    }

    fn confirm(&mut self, label: &StyledText) -> Result<bool, SurfaceError> {
        self.labels.push(label.text.clone());
        match self.answers.pop_front() {
            Some(Answer::Confirm(answer)) => Ok(answer),
            Some(other) => Err(SurfaceError::Exhausted(format!(
                "{} (next answer is {:?})",
                label.text, other
            ))),
            None => Err(SurfaceError::Exhausted(label.text.clone())),
        }
    }

    fn notify(&mut self, message: &str) {
        self.notifications.push(message.to_string());
    }
}
