use crate::error::{ParseError, ParseResult};
use crate::lexer::{lex, SpannedToken, Token, TokenSpan};
use crate::value::Value;

/// Deepest list nesting accepted before giving up
pub const MAX_DEPTH: usize = 256;

/// Parser for a single face literal
pub struct Parser<'src> {
    tokens: Vec<SpannedToken<'src>>,
    pos: usize,
    depth: usize,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str) -> ParseResult<Self> {
        let tokens = lex(source).collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            tokens,
            pos: 0,
            depth: 0,
        })
    }

    /// Parse exactly one literal, rejecting anything after it
    pub fn parse_single(&mut self) -> ParseResult<Value> {
        let value = self.parse_value()?;

        if let Some(extra) = self.peek() {
            return Err(ParseError::unexpected_token(
                extra.span,
                "end of input",
                extra.token.to_string(),
            ));
        }

        Ok(value)
    }

    fn parse_value(&mut self) -> ParseResult<Value> {
        let Some(next) = self.advance() else {
            return Err(ParseError::unexpected_eof("a literal"));
        };
        let span = next.span;

        match next.token.clone() {
            Token::Nil => Ok(Value::Nil),
            Token::True => Ok(Value::Bool(true)),
            Token::False => Ok(Value::Bool(false)),
            Token::Symbol(name) => Ok(Value::Symbol(name.to_string())),
            Token::String(raw) => unescape(raw, span).map(Value::Str),
            Token::Integer(text) => text
                .parse::<i64>()
                .map(Value::Int)
                .map_err(|_| ParseError::invalid_syntax(span, "Integer out of range")),
            Token::Float(text) => match text.parse::<f64>() {
                Ok(f) if f.is_finite() => Ok(Value::Float(f)),
                Ok(_) => Err(ParseError::invalid_syntax(span, "Float out of range")),
                Err(_) => Err(ParseError::invalid_syntax(span, "Malformed float")),
            },
            Token::LParen => self.parse_list(Token::RParen, span),
            Token::LBracket => self.parse_list(Token::RBracket, span),
            closing @ (Token::RParen | Token::RBracket) => Err(ParseError::unexpected_token(
                span,
                "a literal",
                closing.to_string(),
            )),
        }
    }

    fn parse_list(&mut self, close: Token<'src>, open: TokenSpan) -> ParseResult<Value> {
        if self.depth >= MAX_DEPTH {
            return Err(ParseError::invalid_syntax(open, "Nesting too deep"));
        }
        self.depth += 1;
        let items = self.parse_items(close)?;
        self.depth -= 1;
        Ok(Value::List(items))
    }

    fn parse_items(&mut self, close: Token<'src>) -> ParseResult<Vec<Value>> {
        let mut items = Vec::new();

        loop {
            match self.peek() {
                None => {
                    return Err(ParseError::unexpected_eof(format!("'{}'", close)));
                }
                Some(t) if t.token == close => {
                    self.advance();
                    return Ok(items);
                }
                Some(t) if matches!(t.token, Token::RParen | Token::RBracket) => {
                    return Err(ParseError::unexpected_token(
                        t.span,
                        format!("'{}'", close),
                        t.token.to_string(),
                    ));
                }
                Some(_) => items.push(self.parse_value()?),
            }
        }
    }

    // ========== Helper Methods ==========

    fn peek(&self) -> Option<&SpannedToken<'src>> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<&SpannedToken<'src>> {
        let token = self.tokens.get(self.pos);
        self.pos += 1;
        token
    }
}

fn unescape(raw: &str, span: TokenSpan) -> ParseResult<String> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some(other) => {
                return Err(ParseError::invalid_syntax(
                    span,
                    format!("Unknown escape '\\{}'", other),
                ))
            }
            None => return Err(ParseError::invalid_syntax(span, "Dangling escape")),
        }
    }

    Ok(out)
}

/// Parse one literal from free text
pub fn parse(source: &str) -> ParseResult<Value> {
    Parser::new(source)?.parse_single()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scalars() {
        assert_eq!(parse("bold").unwrap(), Value::symbol("bold"));
        assert_eq!(parse(":weight").unwrap(), Value::symbol(":weight"));
        assert_eq!(parse("  42 ").unwrap(), Value::Int(42));
        assert_eq!(parse("1.25").unwrap(), Value::Float(1.25));
        assert_eq!(parse("true").unwrap(), Value::Bool(true));
        assert_eq!(parse("false").unwrap(), Value::Bool(false));
    }

    #[test]
    fn test_nil_and_null_are_values() {
        assert_eq!(parse("nil").unwrap(), Value::Nil);
        assert_eq!(parse("null").unwrap(), Value::Nil);
    }

    #[test]
    fn test_parse_string_escapes() {
        assert_eq!(
            parse(r#""tab\there \"q\"""#).unwrap(),
            Value::string("tab\there \"q\"")
        );
    }

    #[test]
    fn test_unknown_escape_rejected() {
        let err = parse(r#""\q""#).unwrap_err();
        assert!(matches!(err, ParseError::InvalidSyntax { .. }));
    }

    #[test]
    fn test_parse_lists() {
        assert_eq!(
            parse("(:line-width 2 :color \"red\")").unwrap(),
            Value::List(vec![
                Value::symbol(":line-width"),
                Value::Int(2),
                Value::symbol(":color"),
                Value::string("red"),
            ])
        );
        assert_eq!(
            parse("[a (b)]").unwrap(),
            Value::List(vec![
                Value::symbol("a"),
                Value::List(vec![Value::symbol("b")]),
            ])
        );
        assert_eq!(parse("()").unwrap(), Value::List(vec![]));
    }

    #[test]
    fn test_empty_input_is_eof() {
        assert_eq!(
            parse("   ").unwrap_err(),
            ParseError::unexpected_eof("a literal")
        );
    }

    #[test]
    fn test_trailing_tokens_rejected() {
        let err = parse("bold italic").unwrap_err();
        match err {
            ParseError::UnexpectedToken { span, expected, .. } => {
                assert_eq!(span, TokenSpan { start: 5, end: 11 });
                assert_eq!(expected, "end of input");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_unbalanced_lists() {
        assert!(matches!(
            parse("(a b").unwrap_err(),
            ParseError::UnexpectedEof { .. }
        ));
        assert!(matches!(
            parse("(a]").unwrap_err(),
            ParseError::UnexpectedToken { .. }
        ));
        assert!(matches!(
            parse(")").unwrap_err(),
            ParseError::UnexpectedToken { .. }
        ));
    }

    #[test]
    fn test_integer_overflow() {
        let err = parse("99999999999999999999").unwrap_err();
        assert!(matches!(err, ParseError::InvalidSyntax { .. }));
    }

    #[test]
    fn test_float_overflow() {
        let source = format!("{}.0", "9".repeat(400));
        let err = parse(&source).unwrap_err();
        match err {
            ParseError::InvalidSyntax { message, .. } => assert_eq!(message, "Float out of range"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_deep_nesting_rejected() {
        let err = parse(&"(".repeat(100_000)).unwrap_err();
        match err {
            ParseError::InvalidSyntax { span, message } => {
                assert_eq!(message, "Nesting too deep");
                assert_eq!(span, TokenSpan { start: MAX_DEPTH, end: MAX_DEPTH + 1 });
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_nesting_at_limit_accepted() {
        let source = format!("{}{}", "[".repeat(MAX_DEPTH), "]".repeat(MAX_DEPTH));
        let mut value = parse(&source).unwrap();
        for _ in 1..MAX_DEPTH {
            let Value::List(mut items) = value else {
                panic!("expected list");
            };
            value = items.remove(0);
        }
        assert_eq!(value, Value::List(vec![]));
    }

    #[test]
    fn test_display_reads_back() {
        let source = "(:family \"Fira Code\" :height 1.5 :box (:line-width -1) :inverse-video nil)";
        let value = parse(source).unwrap();
        assert_eq!(parse(&value.to_string()).unwrap(), value);
    }
}
