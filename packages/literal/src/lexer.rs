//! Lexer for face literals using logos
//!
//! Atoms are deliberately permissive so that CSS-ish values such as `16px`
//! or `#ff0000` read as a single symbol instead of a number followed by junk.

use logos::Logos;
use std::fmt;

/// Token types for the literal syntax
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n]+")]
pub enum Token<'src> {
    #[token("nil")]
    #[token("null")]
    Nil,
    #[token("true")]
    True,
    #[token("false")]
    False,

    #[regex(r#""([^"\\]|\\.)*""#, |lex| {
        let s = lex.slice();
        &s[1..s.len()-1]  // Strip quotes
    })]
    String(&'src str),

    #[regex(r"-?[0-9]+", |lex| lex.slice(), priority = 10)]
    Integer(&'src str),

    #[regex(r"-?[0-9]+\.[0-9]+", |lex| lex.slice(), priority = 10)]
    Float(&'src str),

    #[regex(r"[A-Za-z0-9_:+*/<>=!?&%$~^.#-]+", |lex| lex.slice(), priority = 1)]
    Symbol(&'src str),

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
}

impl<'src> fmt::Display for Token<'src> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Nil => write!(f, "nil"),
            Token::True => write!(f, "true"),
            Token::False => write!(f, "false"),
            Token::String(s) => write!(f, "string \"{}\"", s),
            Token::Integer(n) => write!(f, "integer {}", n),
            Token::Float(n) => write!(f, "float {}", n),
            Token::Symbol(s) => write!(f, "symbol '{}'", s),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
            Token::LBracket => write!(f, "["),
            Token::RBracket => write!(f, "]"),
        }
    }
}

/// Span information for a token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenSpan {
    pub start: usize,
    pub end: usize,
}

/// A token with its span
#[derive(Debug, Clone, PartialEq)]
pub struct SpannedToken<'src> {
    pub token: Token<'src>,
    pub span: TokenSpan,
}

#[derive(Debug, Clone)]
pub struct LexError {
    pub span: TokenSpan,
    pub message: String,
}

/// Lex source text into tokens with spans
pub fn lex(source: &str) -> impl Iterator<Item = Result<SpannedToken<'_>, LexError>> + '_ {
    Token::lexer(source).spanned().map(|(result, span)| {
        let span = TokenSpan {
            start: span.start,
            end: span.end,
        };
        match result {
            Ok(token) => Ok(SpannedToken { token, span }),
            Err(_) => Err(LexError {
                span,
                message: unexpected_message(&source[span.start..span.end]),
            }),
        }
    })
}

fn unexpected_message(slice: &str) -> String {
    if slice.starts_with('"') {
        "Unterminated string".to_string()
    } else {
        format!("Unexpected character {:?}", slice)
    }
}
