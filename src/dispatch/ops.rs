// ============================================================================
// Generic Operations
// Rank promotion and dispatch over variant pairs
// ============================================================================
//
// Same-rank operands dispatch straight to the concrete method. Mixed operands
// are promoted with `coerce` and dispatched again, so every arm below the
// same-rank arms handles a pair that is already one representation.

use super::{Rank, Value};
use crate::integer::BigInteger;
use crate::numeric::{native, NumericError, NumericResult, EQUALITY_TOLERANCE};
use crate::rational::Rational;
use std::cmp::Ordering;

/// Bring two values to a common representation.
///
/// The target is the higher of the two ranks. If either operand cannot be
/// represented exactly there (e.g. `2.5` as an integer), the target is raised
/// until both fit. Complex always fits.
pub fn coerce(a: &Value, b: &Value) -> (Value, Value) {
    let mut rank = Some(a.rank().max(b.rank()));

    while let Some(target) = rank {
        if let (Ok(x), Ok(y)) = (a.coerce_to(target), b.coerce_to(target)) {
            return (x, y);
        }
        rank = target.next();
    }

    (
        Value::Complex(a.to_complex()),
        Value::Complex(b.to_complex()),
    )
}

// ============================================================================
// Arithmetic
// ============================================================================

pub fn plus(a: &Value, b: &Value) -> NumericResult<Value> {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => Ok(Value::Number(x + y)),
        (Value::Integer(x), Value::Integer(y)) => Ok(Value::Integer(x.plus(y))),
        (Value::Rational(x), Value::Rational(y)) => x.plus(y).map(Value::Rational),
        (Value::Complex(x), Value::Complex(y)) => Ok(Value::Complex(x.plus(y))),
        _ => {
            let (x, y) = coerce(a, b);
            plus(&x, &y)
        },
    }
}

pub fn minus(a: &Value, b: &Value) -> NumericResult<Value> {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => Ok(Value::Number(x - y)),
        (Value::Integer(x), Value::Integer(y)) => Ok(Value::Integer(x.minus(y))),
        (Value::Rational(x), Value::Rational(y)) => x.minus(y).map(Value::Rational),
        (Value::Complex(x), Value::Complex(y)) => Ok(Value::Complex(x.minus(y))),
        _ => {
            let (x, y) = coerce(a, b);
            minus(&x, &y)
        },
    }
}

pub fn times(a: &Value, b: &Value) -> NumericResult<Value> {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => Ok(Value::Number(x * y)),
        (Value::Integer(x), Value::Integer(y)) => Ok(Value::Integer(x.times(y))),
        (Value::Rational(x), Value::Rational(y)) => x.times(y).map(Value::Rational),
        (Value::Complex(x), Value::Complex(y)) => Ok(Value::Complex(x.times(y))),
        _ => {
            let (x, y) = coerce(a, b);
            times(&x, &y)
        },
    }
}

/// Quotient. Integers divide to an Integer when exact and to a Rational
/// otherwise.
///
/// # Errors
/// `DivisionByZero` for an integer zero divisor, `ZeroDenominator` for a
/// rational one. Native and complex division follow their own zero rules.
pub fn divide(a: &Value, b: &Value) -> NumericResult<Value> {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => Ok(Value::Number(x / y)),
        (Value::Integer(x), Value::Integer(y)) => x.divide(y),
        (Value::Rational(x), Value::Rational(y)) => x.divide(y).map(Value::Rational),
        (Value::Complex(x), Value::Complex(y)) => Ok(Value::Complex(x.divide(y))),
        _ => {
            let (x, y) = coerce(a, b);
            divide(&x, &y)
        },
    }
}

/// `a ^ b`.
///
/// Rationals raised to an integral rational power stay rational; any other
/// rational power is evaluated in the complex plane.
pub fn pow(a: &Value, b: &Value) -> NumericResult<Value> {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => Ok(Value::Number(x.powf(*y))),
        (Value::Integer(x), Value::Integer(y)) => x.pow(y),
        (Value::Rational(x), Value::Rational(_)) => match b.coerce_to(Rank::Integer) {
            Ok(Value::Integer(n)) => x.pow(&n).map(Value::Rational),
            _ => Ok(Value::Complex(a.to_complex().pow(&b.to_complex()))),
        },
        (Value::Complex(x), Value::Complex(y)) => Ok(Value::Complex(x.pow(y))),
        _ => {
            let (x, y) = coerce(a, b);
            pow(&x, &y)
        },
    }
}

/// Non-negative remainder.
///
/// # Errors
/// `DivisionByZero` for an integer zero modulus; `InvalidInput` for
/// rational and complex operands.
pub fn modulo(a: &Value, b: &Value) -> NumericResult<Value> {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => Ok(Value::Number(x.rem_euclid(*y))),
        (Value::Integer(x), Value::Integer(y)) => x.modulo(y).map(Value::Integer),
        (Value::Rational(_), Value::Rational(_)) | (Value::Complex(_), Value::Complex(_)) => {
            Err(NumericError::InvalidInput)
        },
        _ => {
            let (x, y) = coerce(a, b);
            modulo(&x, &y)
        },
    }
}

// ============================================================================
// Folds
// ============================================================================

/// Sum of all values; the empty sum is `Number(0)`.
pub fn sum(values: &[Value]) -> NumericResult<Value> {
    match values.split_first() {
        None => Ok(Value::Number(0.0)),
        Some((first, rest)) => rest
            .iter()
            .try_fold(first.clone(), |acc, v| plus(&acc, v)),
    }
}

/// Product of all values; the empty product is `Number(1)`.
pub fn product(values: &[Value]) -> NumericResult<Value> {
    match values.split_first() {
        None => Ok(Value::Number(1.0)),
        Some((first, rest)) => rest
            .iter()
            .try_fold(first.clone(), |acc, v| times(&acc, v)),
    }
}

// ============================================================================
// Unary
// ============================================================================

pub fn negative(a: &Value) -> Value {
    match a {
        Value::Number(x) => Value::Number(-x),
        Value::Integer(n) => Value::Integer(n.negative()),
        Value::Rational(r) => Value::Rational(r.negative()),
        Value::Complex(z) => Value::Complex(z.negative()),
    }
}

/// Multiplicative inverse. `1/n` of an integer is a Rational unless `n` is
/// a unit.
///
/// # Errors
/// `ZeroDenominator` for integer and rational zero.
pub fn inverse(a: &Value) -> NumericResult<Value> {
    match a {
        Value::Number(x) => Ok(Value::Number(1.0 / x)),
        Value::Integer(n) if n.is_unit() => Ok(Value::Integer(n.clone())),
        Value::Integer(n) => Rational::new(BigInteger::one(), n.clone()).map(Value::Rational),
        Value::Rational(r) => r.inverse().map(Value::Rational),
        Value::Complex(z) => Ok(Value::Complex(z.inverse())),
    }
}

/// Magnitude; complex values yield their modulus as a Number.
pub fn abs(a: &Value) -> Value {
    match a {
        Value::Number(x) => Value::Number(x.abs()),
        Value::Integer(n) => Value::Integer(n.abs()),
        Value::Rational(r) => Value::Rational(r.abs()),
        Value::Complex(z) => Value::Number(z.abs()),
    }
}

// ============================================================================
// Comparison
// ============================================================================

/// Total sort order over all values.
///
/// Values of different representation order by type tag
/// (`complex < integer < number < rational`); equal tags order by value.
pub fn compare(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => native::compare(*x, *y),
        (Value::Integer(x), Value::Integer(y)) => x.compare(y),
        (Value::Rational(x), Value::Rational(y)) => x.compare(y),
        (Value::Complex(x), Value::Complex(y)) => x.compare(y),
        _ => a.tag().cmp(b.tag()),
    }
}

/// Numeric order after promotion to a common representation.
pub fn compare_numeric(a: &Value, b: &Value) -> Ordering {
    if a.rank() == b.rank() {
        return compare(a, b);
    }
    let (x, y) = coerce(a, b);
    compare(&x, &y)
}

/// Equality across representations, with floating parts compared within
/// `tolerance`.
pub fn is_equal_within(a: &Value, b: &Value, tolerance: f64) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => native::is_equal_within(*x, *y, tolerance),
        (Value::Integer(x), Value::Integer(y)) => x.is_equal(y),
        (Value::Rational(x), Value::Rational(y)) => x.is_equal_within(y, tolerance),
        (Value::Complex(x), Value::Complex(y)) => x.is_equal_within(y, tolerance),
        _ => {
            let (x, y) = coerce(a, b);
            is_equal_within(&x, &y, tolerance)
        },
    }
}

pub fn is_equal(a: &Value, b: &Value) -> bool {
    is_equal_within(a, b, EQUALITY_TOLERANCE)
}

/// Complex zero test shared by callers that want to warn before inverting.
pub(crate) fn is_complex_zero(a: &Value) -> bool {
    matches!(a, Value::Complex(z) if z.is_zero())
}
