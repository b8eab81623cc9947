//! # Faceplate Literal
//!
//! Free-text literal syntax for face keys and values.
//!
//! ```text
//! :weight            symbol (keyword-style atom)
//! bold  16px  #f00   symbol
//! "Fira Code"        string
//! 42  -1  1.5        integer / float
//! true false         boolean
//! nil null           nil
//! (:line-width 2)    list, `[...]` also accepted
//! ```
//!
//! Exactly one literal is read per input; trailing tokens are an error.

pub mod error;
pub mod lexer;
pub mod parser;
pub mod value;

pub use error::{format_error, ParseError, ParseResult};
pub use lexer::{lex, Token, TokenSpan};
pub use parser::{parse, Parser};
pub use value::Value;
