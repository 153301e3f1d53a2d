//! Recursive-descent parser.
//!
//! ```text
//! expr    := term (('+' | '-') term)*
//! term    := unary (('*' | '/' | '//') unary)*
//! unary   := ('+' | '-') unary | power
//! power   := primary ('**' unary)?
//! primary := NUMBER | '(' expr ')'
//! ```
//!
//! Recursion is bounded twice over: by how deeply groups, signs and powers
//! nest, and by the depth of the finished tree, which long operator chains
//! grow without nesting. Both limits keep parsing, evaluation and drop off
//! the end of the stack.

use crate::error::ExprError;
use crate::expr::ast::{BinaryOp, Expr};
use crate::expr::lexer::{Token, TokenKind};

/// Deepest nesting of parentheses, unary signs and `**` right operands.
pub const MAX_NESTING: usize = 200;

/// Deepest expression tree the parser builds.
pub const MAX_TREE_DEPTH: usize = 1_000;

/// Parses a complete token stream into an expression tree.
///
/// # Errors
///
/// Any [`ExprError`] raised by the grammar, or [`ExprError::TooDeep`] once
/// either depth limit is passed.
pub fn parse(tokens: &[Token]) -> Result<Expr, ExprError> {
    let mut parser = Parser {
        tokens,
        cursor: 0,
        nesting: 0,
    };
    let node = parser.expr()?;
    match parser.peek() {
        None => Ok(node.expr),
        Some(token) => Err(unexpected(token)),
    }
}

/// A subtree and its depth.
struct Node {
    expr: Expr,
    depth: usize,
}

impl Node {
    const fn leaf(expr: Expr) -> Self {
        Self { expr, depth: 1 }
    }

    fn binary(op: BinaryOp, lhs: Self, rhs: Self, pos: usize) -> Result<Self, ExprError> {
        let depth = check_depth(lhs.depth.max(rhs.depth) + 1, pos)?;
        Ok(Self {
            expr: Expr::binary(op, lhs.expr, rhs.expr),
            depth,
        })
    }

    fn unary(wrap: fn(Box<Expr>) -> Expr, inner: Self, pos: usize) -> Result<Self, ExprError> {
        let depth = check_depth(inner.depth + 1, pos)?;
        Ok(Self {
            expr: wrap(Box::new(inner.expr)),
            depth,
        })
    }
}

struct Parser<'a> {
    tokens: &'a [Token],
    cursor: usize,
    nesting: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.cursor).copied()
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.peek();
        if token.is_some() {
            self.cursor += 1;
        }
        token
    }

    /// Runs `rule` one nesting level down.
    fn nested(
        &mut self,
        pos: usize,
        rule: impl FnOnce(&mut Self) -> Result<Node, ExprError>,
    ) -> Result<Node, ExprError> {
        if self.nesting >= MAX_NESTING {
            return Err(ExprError::TooDeep { pos });
        }
        self.nesting += 1;
        let node = rule(self);
        self.nesting -= 1;
        node
    }

    fn expr(&mut self) -> Result<Node, ExprError> {
        let mut lhs = self.term()?;
        while let Some(token) = self.peek()
            && let Some(op) = additive(token.kind)
        {
            self.cursor += 1;
            let rhs = self.term()?;
            lhs = Node::binary(op, lhs, rhs, token.pos)?;
        }
        Ok(lhs)
    }

    fn term(&mut self) -> Result<Node, ExprError> {
        let mut lhs = self.unary()?;
        while let Some(token) = self.peek()
            && let Some(op) = multiplicative(token.kind)
        {
            self.cursor += 1;
            let rhs = self.unary()?;
            lhs = Node::binary(op, lhs, rhs, token.pos)?;
        }
        Ok(lhs)
    }

    fn unary(&mut self) -> Result<Node, ExprError> {
        let Some(token) = self.peek() else {
            return self.power();
        };
        let wrap: fn(Box<Expr>) -> Expr = match token.kind {
            TokenKind::Minus => Expr::Neg,
            TokenKind::Plus => Expr::Pos,
            _ => return self.power(),
        };
        self.cursor += 1;
        let inner = self.nested(token.pos, Self::unary)?;
        Node::unary(wrap, inner, token.pos)
    }

    fn power(&mut self) -> Result<Node, ExprError> {
        let base = self.primary()?;
        match self.peek() {
            Some(token) if token.kind == TokenKind::DoubleStar => {
                self.cursor += 1;
                let exponent = self.nested(token.pos, Self::unary)?;
                Node::binary(BinaryOp::Pow, base, exponent, token.pos)
            }
            _ => Ok(base),
        }
    }

    fn primary(&mut self) -> Result<Node, ExprError> {
        let token = self.next().ok_or(ExprError::UnexpectedEnd)?;
        match token.kind {
            TokenKind::Number(n) => Ok(Node::leaf(Expr::Number(n))),
            TokenKind::LParen => {
                let inner = self.nested(token.pos, Self::expr)?;
                match self.next() {
                    Some(Token {
                        kind: TokenKind::RParen,
                        ..
                    }) => Ok(inner),
                    Some(other) => Err(unexpected(other)),
                    None => Err(ExprError::UnbalancedParen { pos: token.pos }),
                }
            }
            _ => Err(unexpected(token)),
        }
    }
}

const fn check_depth(depth: usize, pos: usize) -> Result<usize, ExprError> {
    if depth > MAX_TREE_DEPTH {
        Err(ExprError::TooDeep { pos })
    } else {
        Ok(depth)
    }
}

const fn additive(kind: TokenKind) -> Option<BinaryOp> {
    match kind {
        TokenKind::Plus => Some(BinaryOp::Add),
        TokenKind::Minus => Some(BinaryOp::Sub),
        _ => None,
    }
}

const fn multiplicative(kind: TokenKind) -> Option<BinaryOp> {
    match kind {
        TokenKind::Star => Some(BinaryOp::Mul),
        TokenKind::Slash => Some(BinaryOp::Div),
        TokenKind::DoubleSlash => Some(BinaryOp::FloorDiv),
        _ => None,
    }
}

fn unexpected(token: Token) -> ExprError {
    ExprError::UnexpectedToken {
        token: token.kind.to_string(),
        pos: token.pos,
    }
}
