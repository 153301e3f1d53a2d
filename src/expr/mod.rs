//! Arithmetic expression evaluation.
//!
//! A closed grammar over numbers, `+ - * / // **`, unary signs and
//! parentheses. Input is tokenized, parsed into an [`Expr`] tree and then
//! evaluated; nothing outside this grammar can be executed.

pub mod ast;
pub mod lexer;
pub mod parser;

pub use ast::{BinaryOp, Expr};
pub use lexer::{Token, TokenKind, tokenize};
pub use parser::{MAX_NESTING, MAX_TREE_DEPTH, parse};

use crate::core::Number;
use crate::error::ExprError;

/// Tokenizes, parses and evaluates `source`.
///
/// # Examples
///
/// ```
/// use deskcalc::core::Number;
/// use deskcalc::expr::evaluate;
///
/// assert_eq!(evaluate("2+3*4").unwrap(), Number::Integer(14));
/// assert_eq!(evaluate("7/2").unwrap(), Number::Float(3.5));
/// assert!(evaluate("3+*2").is_err());
/// ```
pub fn evaluate(source: &str) -> Result<Number, ExprError> {
    let tokens = tokenize(source)?;
    let expr = parse(&tokens)?;
    expr.eval()
}
