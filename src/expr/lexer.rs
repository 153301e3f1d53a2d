//! Tokenizer for arithmetic expressions.

use crate::core::Number;
use crate::error::ExprError;
use std::fmt;

/// Lexical token kinds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenKind {
    /// Numeric literal.
    Number(Number),
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `//`
    DoubleSlash,
    /// `**`
    DoubleStar,
    /// `(`
    LParen,
    /// `)`
    RParen,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Plus => f.write_str("+"),
            Self::Minus => f.write_str("-"),
            Self::Star => f.write_str("*"),
            Self::Slash => f.write_str("/"),
            Self::DoubleSlash => f.write_str("//"),
            Self::DoubleStar => f.write_str("**"),
            Self::LParen => f.write_str("("),
            Self::RParen => f.write_str(")"),
        }
    }
}

/// A token and the byte offset it starts at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token {
    /// What was scanned.
    pub kind: TokenKind,
    /// Byte offset into the source.
    pub pos: usize,
}

/// Splits `source` into tokens, skipping whitespace.
///
/// # Examples
///
/// ```
/// use deskcalc::expr::{TokenKind, tokenize};
///
/// let tokens = tokenize("2**3").unwrap();
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(tokens[1].kind, TokenKind::DoubleStar);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, ExprError> {
    let bytes = source.as_bytes();
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        let b = bytes[pos];
        let (kind, len) = match b {
            b' ' | b'\t' | b'\n' | b'\r' => {
                pos += 1;
                continue;
            }
            b'+' => (TokenKind::Plus, 1),
            b'-' => (TokenKind::Minus, 1),
            b'*' if bytes.get(pos + 1) == Some(&b'*') => (TokenKind::DoubleStar, 2),
            b'*' => (TokenKind::Star, 1),
            b'/' if bytes.get(pos + 1) == Some(&b'/') => (TokenKind::DoubleSlash, 2),
            b'/' => (TokenKind::Slash, 1),
            b'(' => (TokenKind::LParen, 1),
            b')' => (TokenKind::RParen, 1),
            b'0'..=b'9' | b'.' => {
                let len = scan_number(&bytes[pos..]);
                let text = &source[pos..pos + len];
                (TokenKind::Number(parse_literal(text, pos)?), len)
            }
            _ => {
                let ch = source[pos..].chars().next().unwrap_or('\u{fffd}');
                return Err(ExprError::UnexpectedChar { ch, pos });
            }
        };
        tokens.push(Token { kind, pos });
        pos += len;
    }

    Ok(tokens)
}

/// Length of the numeric literal at the start of `bytes`.
///
/// Matches `digits [. digits] [e [+-] digits]` with either side of the
/// point optional. An `e` not followed by digits is left for the caller.
fn scan_number(bytes: &[u8]) -> usize {
    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut len = digits_from(0);
    if bytes.get(len) == Some(&b'.') {
        len += 1;
        len += digits_from(len);
    }

    if matches!(bytes.get(len), Some(b'e' | b'E')) {
        let mut exp = len + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = digits_from(exp);
        if exp_digits > 0 {
            len = exp + exp_digits;
        }
    }
    len
}

fn parse_literal(text: &str, pos: usize) -> Result<Number, ExprError> {
    let is_integer = text.bytes().all(|b| b.is_ascii_digit());
    if is_integer {
        if text.len() > 1 && text.starts_with('0') && text.bytes().any(|b| b != b'0') {
            return Err(ExprError::LeadingZero {
                text: text.to_string(),
                pos,
            });
        }
        if let Ok(value) = text.parse::<i64>() {
            return Ok(Number::Integer(value));
        }
    }

    // "." alone scans as a number but is not one
    text.parse::<f64>()
        .map(Number::Float)
        .map_err(|_| ExprError::MalformedNumber {
            text: text.to_string(),
            pos,
        })
}
