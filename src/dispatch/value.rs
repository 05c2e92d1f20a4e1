// ============================================================================
// Tower Values
// Closed variant over every numeric representation
// ============================================================================

use super::Rank;
use crate::complex::Complex;
use crate::integer::BigInteger;
use crate::interfaces::Notation;
use crate::numeric::{native, NumericError, NumericResult};
use crate::rational::Rational;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A value of any rank.
///
/// `PartialEq` is structural: `Integer(2)` and `Number(2.0)` differ. Use
/// [`crate::dispatch::is_equal`] to compare across ranks.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Value {
    Number(f64),
    Integer(BigInteger),
    Rational(Rational),
    Complex(Complex),
}

impl Value {
    pub fn rank(&self) -> Rank {
        match self {
            Value::Number(_) => Rank::Number,
            Value::Integer(_) => Rank::Integer,
            Value::Rational(_) => Rank::Rational,
            Value::Complex(_) => Rank::Complex,
        }
    }

    #[inline]
    pub fn tag(&self) -> &'static str {
        self.rank().tag()
    }

    /// Equivalent value at `rank`.
    ///
    /// # Errors
    /// Returns `Coercion` when the value has no exact representation at
    /// `rank`.
    pub fn coerce_to(&self, rank: Rank) -> NumericResult<Value> {
        match self {
            Value::Number(x) => coerce_native(*x, rank),
            Value::Integer(n) => n.coerce_to(rank),
            Value::Rational(r) => r.coerce_to(rank),
            Value::Complex(z) => z.coerce_to(rank),
        }
    }

    /// Nearest complex value. Never fails; exact parts are rounded.
    pub fn to_complex(&self) -> Complex {
        match self {
            Value::Complex(z) => *z,
            other => Complex::from_real(other.to_f64()),
        }
    }

    /// Nearest native value. Complex values map to their real part when
    /// real and to NaN otherwise.
    pub fn to_f64(&self) -> f64 {
        match self {
            Value::Number(x) => *x,
            Value::Integer(n) => n.to_f64(),
            Value::Rational(r) => r.to_f64(),
            Value::Complex(z) if z.is_real() => z.re(),
            Value::Complex(_) => f64::NAN,
        }
    }

    pub fn is_zero(&self) -> bool {
        match self {
            Value::Number(x) => native::is_zero(*x),
            Value::Integer(n) => n.is_zero(),
            Value::Rational(r) => r.is_zero(),
            Value::Complex(z) => z.is_zero(),
        }
    }

    pub fn is_nan(&self) -> bool {
        match self {
            Value::Number(x) => x.is_nan(),
            Value::Complex(z) => z.is_nan(),
            Value::Integer(_) | Value::Rational(_) => false,
        }
    }

    pub fn is_finite(&self) -> bool {
        match self {
            Value::Number(x) => x.is_finite(),
            Value::Complex(z) => z.is_finite(),
            Value::Integer(_) => true,
            Value::Rational(r) => r.is_exact() || r.to_f64().is_finite(),
        }
    }
}

fn coerce_native(x: f64, rank: Rank) -> NumericResult<Value> {
    let failure = NumericError::Coercion {
        from: Rank::Number,
        to: rank,
    };

    match rank {
        Rank::Number => Ok(Value::Number(x)),
        Rank::Integer => BigInteger::from_f64(x)
            .map(Value::Integer)
            .map_err(|_| failure),
        Rank::Rational => Rational::from_f64(x)
            .map(Value::Rational)
            .map_err(|_| failure),
        Rank::Complex => Ok(Value::Complex(Complex::from_real(x))),
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Number(x)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(BigInteger::from(n))
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Integer(BigInteger::from(n))
    }
}

impl From<BigInteger> for Value {
    fn from(n: BigInteger) -> Self {
        Value::Integer(n)
    }
}

impl From<Rational> for Value {
    fn from(r: Rational) -> Self {
        Value::Rational(r)
    }
}

impl From<Complex> for Value {
    fn from(z: Complex) -> Self {
        Value::Complex(z)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(x) => write!(f, "{}", native::to_string(*x)),
            Value::Integer(n) => write!(f, "{}", n),
            Value::Rational(r) => write!(f, "{}", r),
            Value::Complex(z) => write!(f, "{}", z),
        }
    }
}

impl Notation for Value {
    fn to_latex(&self) -> String {
        match self {
            Value::Number(x) => x.to_latex(),
            Value::Integer(n) => n.to_latex(),
            Value::Rational(r) => r.to_latex(),
            Value::Complex(z) => z.to_latex(),
        }
    }

    fn to_mathml(&self) -> String {
        match self {
            Value::Number(x) => x.to_mathml(),
            Value::Integer(n) => n.to_mathml(),
            Value::Rational(r) => r.to_mathml(),
            Value::Complex(z) => z.to_mathml(),
        }
    }

    fn to_content_mathml(&self) -> String {
        match self {
            Value::Number(x) => x.to_content_mathml(),
            Value::Integer(n) => n.to_content_mathml(),
            Value::Rational(r) => r.to_content_mathml(),
            Value::Complex(z) => z.to_content_mathml(),
        }
    }
}
