//! Error types for the editor

use crate::gateway::TagError;
use crate::prompt::SurfaceError;
use faceplate_literal::ParseError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Malformed literal: {0}")]
    Literal(#[from] ParseError),

    #[error("Property name must be a symbol, got {0}")]
    MalformedKey(String),

    #[error("Malformed face: {0}")]
    MalformedFace(String),

    #[error("Cannot answer {state} with {response}")]
    UnexpectedResponse {
        state: &'static str,
        response: &'static str,
    },

    #[error("Edit session has already terminated")]
    SessionTerminated,

    #[error("Prompt error: {0}")]
    Surface(#[from] SurfaceError),

    #[error("Document rejected tag: {0}")]
    Tag(#[from] TagError),

    #[error("Unknown style: {0}")]
    UnknownStyle(String),

    #[error("Invalid span {start}..{end}")]
    InvalidSpan { start: usize, end: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl EditorError {
    /// Errors the user can fix by answering the same prompt again
    pub fn is_recoverable(&self) -> bool {
        matches!(self, EditorError::Literal(_) | EditorError::MalformedKey(_))
    }
}
