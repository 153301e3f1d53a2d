//! Expression tree and its evaluation.

use crate::core::Number;
use crate::error::ExprError;
use std::fmt;

/// Binary operators in precedence order, loosest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `//`
    FloorDiv,
    /// `**`
    Pow,
}

impl BinaryOp {
    /// Applies the operator.
    pub fn apply(self, lhs: Number, rhs: Number) -> Result<Number, ExprError> {
        match self {
            Self::Add => Ok(lhs.add(rhs)),
            Self::Sub => Ok(lhs.sub(rhs)),
            Self::Mul => Ok(lhs.mul(rhs)),
            Self::Div => lhs.div(rhs),
            Self::FloorDiv => lhs.floor_div(rhs),
            Self::Pow => lhs.pow(rhs),
        }
    }

    const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::FloorDiv => "//",
            Self::Pow => "**",
        }
    }
}

/// Parsed arithmetic expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Literal.
    Number(Number),
    /// Unary minus.
    Neg(Box<Self>),
    /// Unary plus.
    Pos(Box<Self>),
    /// Binary operation.
    Binary {
        /// Operator.
        op: BinaryOp,
        /// Left operand.
        lhs: Box<Self>,
        /// Right operand.
        rhs: Box<Self>,
    },
}

impl Expr {
    /// Builds a binary node.
    #[must_use]
    pub fn binary(op: BinaryOp, lhs: Self, rhs: Self) -> Self {
        Self::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    /// Evaluates the tree, left operand before right.
    pub fn eval(&self) -> Result<Number, ExprError> {
        match self {
            Self::Number(n) => Ok(*n),
            Self::Neg(inner) => Ok(inner.eval()?.negate()),
            Self::Pos(inner) => inner.eval(),
            Self::Binary { op, lhs, rhs } => {
                let lhs = lhs.eval()?;
                let rhs = rhs.eval()?;
                op.apply(lhs, rhs)
            }
        }
    }
}

impl fmt::Display for Expr {
    /// Fully parenthesized form, handy for checking precedence.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Neg(inner) => write!(f, "(-{inner})"),
            Self::Pos(inner) => write!(f, "(+{inner})"),
            Self::Binary { op, lhs, rhs } => write!(f, "({lhs} {} {rhs})", op.symbol()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(i: i64) -> Expr {
        Expr::Number(Number::Integer(i))
    }

    #[test]
    fn test_eval_nested() {
        let expr = Expr::binary(
            BinaryOp::Mul,
            Expr::binary(BinaryOp::Add, int(1), int(2)),
            Expr::Neg(Box::new(int(4))),
        );
        assert_eq!(expr.eval(), Ok(Number::Integer(-12)));
        assert_eq!(expr.to_string(), "((1 + 2) * (-4))");
    }

    #[test]
    fn test_eval_propagates_division_by_zero() {
        let expr = Expr::binary(
            BinaryOp::Div,
            int(6),
            Expr::binary(BinaryOp::Sub, int(3), int(3)),
        );
        assert_eq!(expr.eval(), Err(ExprError::DivisionByZero));
    }

    #[test]
    fn test_unary_plus_is_identity() {
        let expr = Expr::Pos(Box::new(int(7)));
        assert_eq!(expr.eval(), Ok(Number::Integer(7)));
    }
}
