//! Numeric values held by the evaluator and the memory register.
//!
//! A [`Number`] is either an exact integer or a float. Integer arithmetic
//! stays integral until it overflows `i64`, at which point the operation is
//! redone in floating point. Any float operand makes the result a float.

use crate::error::ExprError;
use serde::{Serialize, Serializer};
use std::fmt;

/// Floats at or above this magnitude render in exponent form.
const EXP_UPPER: f64 = 1e16;

/// Non-zero floats below this magnitude render in exponent form.
const EXP_LOWER: f64 = 1e-4;

/// A calculator value.
///
/// # Examples
///
/// ```
/// use deskcalc::core::Number;
///
/// assert_eq!(Number::Integer(5).to_string(), "5");
/// assert_eq!(Number::Float(5.0).to_string(), "5.0");
/// assert_eq!(Number::Float(0.00001).to_string(), "1e-05");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Exact integer.
    Integer(i64),
    /// IEEE-754 double.
    Float(f64),
}

impl Default for Number {
    fn default() -> Self {
        Self::Integer(0)
    }
}

impl Number {
    /// Parses free-form numeric text the way the unary buttons do.
    ///
    /// Accepts surrounding whitespace, an optional sign, decimal and
    /// exponent forms, and `inf`/`nan`. Always yields a float.
    ///
    /// # Examples
    ///
    /// ```
    /// use deskcalc::core::Number;
    ///
    /// assert_eq!(Number::parse_float(" -3.5 "), Some(Number::Float(-3.5)));
    /// assert_eq!(Number::parse_float("abc"), None);
    /// ```
    #[must_use]
    pub fn parse_float(text: &str) -> Option<Self> {
        text.trim().parse::<f64>().ok().map(Self::Float)
    }

    /// Returns the value as `f64`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Integer(i) => i as f64,
            Self::Float(f) => f,
        }
    }

    /// Returns `true` if the value equals zero.
    #[must_use]
    pub fn is_zero(self) -> bool {
        match self {
            Self::Integer(i) => i == 0,
            Self::Float(f) => f == 0.0,
        }
    }

    /// Arithmetic negation, preserving the variant.
    #[must_use]
    pub fn negate(self) -> Self {
        match self {
            Self::Integer(i) => i
                .checked_neg()
                .map_or_else(|| Self::Float(-self.as_f64()), Self::Integer),
            Self::Float(f) => Self::Float(-f),
        }
    }

    /// Addition.
    #[must_use]
    pub fn add(self, rhs: Self) -> Self {
        self.integral_or_float(rhs, i64::checked_add, |a, b| a + b)
    }

    /// Subtraction.
    #[must_use]
    pub fn sub(self, rhs: Self) -> Self {
        self.integral_or_float(rhs, i64::checked_sub, |a, b| a - b)
    }

    /// Multiplication.
    #[must_use]
    pub fn mul(self, rhs: Self) -> Self {
        self.integral_or_float(rhs, i64::checked_mul, |a, b| a * b)
    }

    /// True division. The result is always a float.
    pub fn div(self, rhs: Self) -> Result<Self, ExprError> {
        if rhs.is_zero() {
            return Err(ExprError::DivisionByZero);
        }
        Ok(Self::Float(self.as_f64() / rhs.as_f64()))
    }

    /// Floor division. Integral when both operands are integers.
    pub fn floor_div(self, rhs: Self) -> Result<Self, ExprError> {
        if rhs.is_zero() {
            return Err(ExprError::DivisionByZero);
        }
        if let (Self::Integer(a), Self::Integer(b)) = (self, rhs)
            && let Some(q) = a.checked_div(b)
        {
            let floored = if a % b != 0 && ((a < 0) != (b < 0)) {
                q - 1
            } else {
                q
            };
            return Ok(Self::Integer(floored));
        }
        Ok(Self::Float((self.as_f64() / rhs.as_f64()).floor()))
    }

    /// Exponentiation.
    ///
    /// Integer bases with non-negative integer exponents stay integral;
    /// everything else is computed in floating point. Finite operands that
    /// produce an infinite result are an overflow; a negative base with a
    /// fractional exponent has no real result.
    pub fn pow(self, rhs: Self) -> Result<Self, ExprError> {
        if self.is_zero() && rhs.as_f64() < 0.0 {
            return Err(ExprError::DivisionByZero);
        }

        if let (Self::Integer(base), Self::Integer(exp)) = (self, rhs)
            && exp >= 0
            && let Some(value) = integer_pow(base, exp)
        {
            return Ok(Self::Integer(value));
        }

        let (base, exp) = (self.as_f64(), rhs.as_f64());
        let value = base.powf(exp);
        if base.is_finite() && exp.is_finite() {
            if value.is_nan() {
                return Err(ExprError::NoRealResult);
            }
            if value.is_infinite() {
                return Err(ExprError::Overflow);
            }
        }
        Ok(Self::Float(value))
    }

    /// Square root as a float. Callers reject negative input first.
    #[must_use]
    pub fn sqrt(self) -> Self {
        Self::Float(self.as_f64().sqrt())
    }

    fn integral_or_float(
        self,
        rhs: Self,
        int_op: fn(i64, i64) -> Option<i64>,
        float_op: fn(f64, f64) -> f64,
    ) -> Self {
        if let (Self::Integer(a), Self::Integer(b)) = (self, rhs)
            && let Some(value) = int_op(a, b)
        {
            return Self::Integer(value);
        }
        Self::Float(float_op(self.as_f64(), rhs.as_f64()))
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(v) => f.write_str(&format_float(*v)),
        }
    }
}

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Integer(i) => serializer.serialize_i64(*i),
            Self::Float(v) => serializer.serialize_f64(*v),
        }
    }
}

/// `base ** exp` for a non-negative `exp`, or `None` if it overflows.
///
/// Bases 0, 1 and -1 never overflow, whatever the exponent.
fn integer_pow(base: i64, exp: i64) -> Option<i64> {
    match base {
        0 => Some(i64::from(exp == 0)),
        1 => Some(1),
        -1 => Some(if exp % 2 == 0 { 1 } else { -1 }),
        _ => u32::try_from(exp).ok().and_then(|exp| base.checked_pow(exp)),
    }
}

/// Canonical float text: shortest round-trip digits, always with a
/// fractional part or an exponent.
fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude != 0.0 && !(EXP_LOWER..EXP_UPPER).contains(&magnitude) {
        let text = format!("{value:e}");
        return match text.split_once('e') {
            Some((mantissa, exp)) => {
                let (sign, digits) = exp
                    .strip_prefix('-')
                    .map_or(("+", exp), |rest| ("-", rest));
                format!("{mantissa}e{sign}{digits:0>2}")
            }
            None => text,
        };
    }

    let text = format!("{value}");
    if text.contains('.') {
        text
    } else {
        format!("{text}.0")
    }
}
