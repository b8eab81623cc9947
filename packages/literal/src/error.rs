//! Error types for the literal parser

use crate::lexer::{LexError, TokenSpan};
use thiserror::Error;

/// Result type for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;

/// Parse error with location and context
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("Unexpected token at {}..{}: expected {expected}, found {found}", span.start, span.end)]
    UnexpectedToken {
        span: TokenSpan,
        expected: String,
        found: String,
    },

    #[error("Unexpected end of input: expected {expected}")]
    UnexpectedEof { expected: String },

    #[error("Invalid syntax at {}..{}: {message}", span.start, span.end)]
    InvalidSyntax { span: TokenSpan, message: String },

    #[error("Lexer error at {}..{}: {message}", span.start, span.end)]
    LexError { span: TokenSpan, message: String },
}

impl ParseError {
    pub fn span(&self) -> Option<TokenSpan> {
        match self {
            ParseError::UnexpectedToken { span, .. } => Some(*span),
            ParseError::UnexpectedEof { .. } => None,
            ParseError::InvalidSyntax { span, .. } => Some(*span),
            ParseError::LexError { span, .. } => Some(*span),
        }
    }

    pub fn unexpected_token(
        span: TokenSpan,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        Self::UnexpectedToken {
            span,
            expected: expected.into(),
            found: found.into(),
        }
    }

    pub fn unexpected_eof(expected: impl Into<String>) -> Self {
        Self::UnexpectedEof {
            expected: expected.into(),
        }
    }

    pub fn invalid_syntax(span: TokenSpan, message: impl Into<String>) -> Self {
        Self::InvalidSyntax {
            span,
            message: message.into(),
        }
    }

    fn label(&self) -> String {
        match self {
            ParseError::UnexpectedToken { expected, .. } => format!("expected {}", expected),
            ParseError::UnexpectedEof { expected } => format!("expected {}", expected),
            ParseError::InvalidSyntax { message, .. } => message.clone(),
            ParseError::LexError { message, .. } => message.clone(),
        }
    }
}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        ParseError::LexError {
            span: err.span,
            message: err.message,
        }
    }
}

/// Pretty-print an error with source context using ariadne
#[cfg(feature = "pretty-errors")]
pub fn format_error(source: &str, filename: &str, error: &ParseError) -> String {
    use ariadne::{Color, Label, Report, ReportKind, Source};

    let span = error.span().unwrap_or(TokenSpan {
        start: source.len(),
        end: source.len(),
    });

    let mut output = Vec::new();
    let report = Report::build(ReportKind::Error, filename, span.start)
        .with_message(error.to_string())
        .with_label(
            Label::new((filename, span.start..span.end))
                .with_color(Color::Red)
                .with_message(error.label()),
        )
        .finish();

    if report
        .write((filename, Source::from(source)), &mut output)
        .is_err()
    {
        return error.to_string();
    }

    String::from_utf8(output).unwrap_or_else(|_| error.to_string())
}

/// Plain fallback when ariadne is disabled
#[cfg(not(feature = "pretty-errors"))]
pub fn format_error(_source: &str, filename: &str, error: &ParseError) -> String {
    format!("{}: {} ({})", filename, error, error.label())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_accessor() {
        let err = ParseError::invalid_syntax(TokenSpan { start: 2, end: 4 }, "bad");
        assert_eq!(err.span(), Some(TokenSpan { start: 2, end: 4 }));
        assert_eq!(ParseError::unexpected_eof("a literal").span(), None);
    }

    #[test]
    fn test_display() {
        let err = ParseError::unexpected_token(TokenSpan { start: 5, end: 6 }, "end of input", ")");
        assert_eq!(
            err.to_string(),
            "Unexpected token at 5..6: expected end of input, found )"
        );
    }

    #[test]
    fn test_format_error_mentions_message() {
        let source = "(bold";
        let err = ParseError::unexpected_eof("')'");
        let rendered = format_error(source, "value", &err);
        assert!(rendered.contains("expected ')'"));
    }
}
