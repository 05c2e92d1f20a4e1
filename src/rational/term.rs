// ============================================================================
// Rational Terms
// Numerator/denominator parts: exact BigIntegers or native numbers
// ============================================================================

use crate::integer::BigInteger;
use crate::interfaces::Notation;
use crate::numeric::{native, NumericError, NumericResult};
use std::cmp::Ordering;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One part of a Rational.
///
/// Arithmetic between two `Integer` terms stays exact. Any operation with a
/// `Number` operand produces a `Number`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Term {
    Number(f64),
    Integer(BigInteger),
}

impl Term {
    pub fn one() -> Self {
        Term::Integer(BigInteger::one())
    }

    pub fn is_zero(&self) -> bool {
        match self {
            Term::Number(x) => native::is_zero(*x),
            Term::Integer(n) => n.is_zero(),
        }
    }

    pub fn is_negative(&self) -> bool {
        match self {
            Term::Number(x) => *x < 0.0,
            Term::Integer(n) => n.is_negative(),
        }
    }

    #[inline]
    pub fn is_exact(&self) -> bool {
        matches!(self, Term::Integer(_))
    }

    pub fn to_f64(&self) -> f64 {
        match self {
            Term::Number(x) => *x,
            Term::Integer(n) => n.to_f64(),
        }
    }

    pub fn negative(&self) -> Self {
        match self {
            Term::Number(x) => Term::Number(-x),
            Term::Integer(n) => Term::Integer(n.negative()),
        }
    }

    pub fn abs(&self) -> Self {
        match self {
            Term::Number(x) => Term::Number(x.abs()),
            Term::Integer(n) => Term::Integer(n.abs()),
        }
    }

    pub fn plus(&self, other: &Self) -> Self {
        match (self, other) {
            (Term::Integer(a), Term::Integer(b)) => Term::Integer(a.plus(b)),
            _ => Term::Number(self.to_f64() + other.to_f64()),
        }
    }

    pub fn minus(&self, other: &Self) -> Self {
        match (self, other) {
            (Term::Integer(a), Term::Integer(b)) => Term::Integer(a.minus(b)),
            _ => Term::Number(self.to_f64() - other.to_f64()),
        }
    }

    pub fn times(&self, other: &Self) -> Self {
        match (self, other) {
            (Term::Integer(a), Term::Integer(b)) => Term::Integer(a.times(b)),
            _ => Term::Number(self.to_f64() * other.to_f64()),
        }
    }

    /// Exact quotient by a divisor of this term (as produced by `gcd`).
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `divisor` is zero.
    pub fn div_exact(&self, divisor: &Self) -> NumericResult<Self> {
        if divisor.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        match (self, divisor) {
            (Term::Integer(a), Term::Integer(b)) => Ok(Term::Integer(a.divrem(b)?.0)),
            _ => Ok(Term::Number(self.to_f64() / divisor.to_f64())),
        }
    }

    /// `self ^ |exponent|`
    pub fn pow_abs(&self, exponent: &BigInteger) -> Self {
        match self {
            Term::Integer(n) => Term::Integer(n.pow_abs(exponent)),
            Term::Number(x) => Term::Number(x.powf(exponent.abs().to_f64())),
        }
    }

    /// Non-negative greatest common divisor.
    pub fn gcd(&self, other: &Self) -> Self {
        match (self, other) {
            (Term::Integer(a), Term::Integer(b)) => Term::Integer(a.gcd(b)),
            _ => Term::Number(native::gcd(self.to_f64(), other.to_f64())),
        }
    }

    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Term::Integer(a), Term::Integer(b)) => a.compare(b),
            _ => native::compare(self.to_f64(), other.to_f64()),
        }
    }

    pub fn is_equal_within(&self, other: &Self, tolerance: f64) -> bool {
        match (self, other) {
            (Term::Integer(a), Term::Integer(b)) => a.is_equal(b),
            _ => native::is_equal_within(self.to_f64(), other.to_f64(), tolerance),
        }
    }
}

impl From<BigInteger> for Term {
    fn from(n: BigInteger) -> Self {
        Term::Integer(n)
    }
}

impl From<f64> for Term {
    fn from(x: f64) -> Self {
        Term::Number(x)
    }
}

impl From<i64> for Term {
    fn from(n: i64) -> Self {
        Term::Integer(BigInteger::from(n))
    }
}

impl From<i32> for Term {
    fn from(n: i32) -> Self {
        Term::Integer(BigInteger::from(n))
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Number(x) => write!(f, "{}", native::to_string(*x)),
            Term::Integer(n) => write!(f, "{}", n),
        }
    }
}

impl Notation for Term {
    fn to_latex(&self) -> String {
        match self {
            Term::Number(x) => x.to_latex(),
            Term::Integer(n) => n.to_latex(),
        }
    }

    fn to_mathml(&self) -> String {
        match self {
            Term::Number(x) => x.to_mathml(),
            Term::Integer(n) => n.to_mathml(),
        }
    }

    fn to_content_mathml(&self) -> String {
        match self {
            Term::Number(x) => x.to_content_mathml(),
            Term::Integer(n) => n.to_content_mathml(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_terms_stay_exact() {
        let a = Term::from(6);
        let b = Term::from(4);
        assert_eq!(a.times(&b), Term::from(24));
        assert_eq!(a.minus(&b), Term::from(2));
        assert_eq!(a.gcd(&b), Term::from(2));
        assert_eq!(a.div_exact(&Term::from(2)).unwrap(), Term::from(3));
    }

    #[test]
    fn test_mixed_terms_go_native() {
        let a = Term::from(3);
        let b = Term::from(0.5);
        assert_eq!(a.plus(&b), Term::Number(3.5));
        assert_eq!(a.times(&b), Term::Number(1.5));
        assert!(!a.times(&b).is_exact());
    }

    #[test]
    fn test_div_exact_by_zero() {
        assert_eq!(
            Term::from(3).div_exact(&Term::from(0)),
            Err(NumericError::DivisionByZero)
        );
    }

    #[test]
    fn test_compare_across_kinds() {
        assert_eq!(Term::from(2).compare(&Term::from(2.5)), Ordering::Less);
        assert_eq!(Term::from(-1).compare(&Term::from(-3)), Ordering::Greater);
        assert!(Term::from(2).is_equal_within(&Term::from(2.0), 0.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(Term::from(-12).to_string(), "-12");
        assert_eq!(Term::from(0.25).to_string(), "0.25");
    }
}
