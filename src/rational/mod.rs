// ============================================================================
// Rational Engine
// Numerator/denominator pairs with explicit reduction
// ============================================================================

mod term;

pub use term::Term;

use crate::complex::Complex;
use crate::dispatch::{Rank, Value};
use crate::integer::BigInteger;
use crate::interfaces::Notation;
use crate::numeric::{native, NumericError, NumericResult};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Neg;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rational number `numerator / denominator`.
///
/// The denominator is never zero and never negative; a negative sign is
/// folded into the numerator at construction. Values are not reduced
/// automatically, call [`Rational::reduce`] for lowest terms.
///
/// `PartialEq` is structural (`2/4 != 1/2`); use [`Rational::is_equal`] for
/// value equality.
///
/// # Example
/// ```
/// use numeric_tower::Rational;
///
/// let r = Rational::new(2, 4).unwrap();
/// assert_eq!(r.reduce().to_string(), "1/2");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawRational"))]
pub struct Rational {
    numerator: Term,
    denominator: Term,
}

/// Wire form of a Rational, validated through [`Rational::new`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawRational {
    numerator: Term,
    denominator: Term,
}

#[cfg(feature = "serde")]
impl TryFrom<RawRational> for Rational {
    type Error = NumericError;

    fn try_from(raw: RawRational) -> Result<Self, Self::Error> {
        Rational::new(raw.numerator, raw.denominator)
    }
}

impl Rational {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create `numerator / denominator`.
    ///
    /// # Errors
    /// Returns `ZeroDenominator` if `denominator` is zero.
    pub fn new(numerator: impl Into<Term>, denominator: impl Into<Term>) -> NumericResult<Self> {
        let numerator = numerator.into();
        let denominator = denominator.into();

        if denominator.is_zero() {
            return Err(NumericError::ZeroDenominator);
        }

        if denominator.is_negative() {
            return Ok(Self {
                numerator: numerator.negative(),
                denominator: denominator.negative(),
            });
        }

        Ok(Self {
            numerator,
            denominator,
        })
    }

    /// `n / 1`
    pub fn from_integer(n: BigInteger) -> Self {
        Self {
            numerator: Term::Integer(n),
            denominator: Term::one(),
        }
    }

    /// Exact rational value of a finite double, in lowest terms.
    ///
    /// # Errors
    /// Returns `InvalidInput` for NaN and infinities.
    pub fn from_f64(x: f64) -> NumericResult<Self> {
        if !x.is_finite() {
            return Err(NumericError::InvalidInput);
        }

        let bits = x.to_bits();
        let biased = ((bits >> 52) & 0x7ff) as i64;
        let fraction = bits & ((1 << 52) - 1);
        let (mantissa, exponent) = if biased == 0 {
            (fraction, -1074)
        } else {
            (fraction | (1 << 52), biased - 1075)
        };

        let mut numerator = BigInteger::from(mantissa);
        if x.is_sign_negative() {
            numerator = numerator.negative();
        }

        let two = BigInteger::from(2);
        let scale = two.pow_abs(&BigInteger::from(exponent));
        let rational = if exponent >= 0 {
            Self::from_integer(numerator.times(&scale))
        } else {
            Self::new(numerator, scale)?
        };

        Ok(rational.reduce())
    }

    /// Exact rational value of a decimal, in lowest terms.
    pub fn from_decimal(d: rust_decimal::Decimal) -> NumericResult<Self> {
        let denominator = BigInteger::from(10).pow_abs(&BigInteger::from(d.scale()));
        Ok(Self::new(BigInteger::from(d.mantissa()), denominator)?.reduce())
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn numerator(&self) -> &Term {
        &self.numerator
    }

    #[inline]
    pub fn denominator(&self) -> &Term {
        &self.denominator
    }

    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.numerator.is_negative()
    }

    /// True when both parts are BigIntegers.
    pub fn is_exact(&self) -> bool {
        self.numerator.is_exact() && self.denominator.is_exact()
    }

    /// Nearest double. Exact parts beyond the double range are scaled
    /// down together first, so `huge / huge` stays finite.
    pub fn to_f64(&self) -> f64 {
        match (&self.numerator, &self.denominator) {
            (Term::Integer(n), Term::Integer(d)) => exact_quotient(n, d),
            _ => self.numerator.to_f64() / self.denominator.to_f64(),
        }
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// Lowest terms: both parts divided by `sign(d) * gcd(n, d)`.
    pub fn reduce(&self) -> Self {
        let mut divisor = self.numerator.gcd(&self.denominator);
        if let Term::Number(g) = &divisor {
            // Infinite or NaN parts have no gcd
            if !g.is_finite() || *g == 0.0 {
                return self.clone();
            }
        }
        if self.denominator.is_negative() {
            divisor = divisor.negative();
        }

        // The gcd of a non-zero denominator is never zero
        match (
            self.numerator.div_exact(&divisor),
            self.denominator.div_exact(&divisor),
        ) {
            (Ok(numerator), Ok(denominator)) => Self {
                numerator,
                denominator,
            },
            _ => self.clone(),
        }
    }

    pub fn negative(&self) -> Self {
        Self {
            numerator: self.numerator.negative(),
            denominator: self.denominator.clone(),
        }
    }

    pub fn abs(&self) -> Self {
        Self {
            numerator: self.numerator.abs(),
            denominator: self.denominator.clone(),
        }
    }

    /// `d / n`
    ///
    /// # Errors
    /// Returns `ZeroDenominator` if the rational is zero.
    pub fn inverse(&self) -> NumericResult<Self> {
        Self::new(self.denominator.clone(), self.numerator.clone())
    }

    /// `(ad + bc) / bd`
    pub fn plus(&self, other: &Self) -> NumericResult<Self> {
        Self::new(
            self.numerator
                .times(&other.denominator)
                .plus(&self.denominator.times(&other.numerator)),
            self.denominator.times(&other.denominator),
        )
    }

    /// `(ad - bc) / bd`
    pub fn minus(&self, other: &Self) -> NumericResult<Self> {
        Self::new(
            self.numerator
                .times(&other.denominator)
                .minus(&self.denominator.times(&other.numerator)),
            self.denominator.times(&other.denominator),
        )
    }

    /// `ac / bd`
    pub fn times(&self, other: &Self) -> NumericResult<Self> {
        Self::new(
            self.numerator.times(&other.numerator),
            self.denominator.times(&other.denominator),
        )
    }

    /// `ad / bc`
    ///
    /// # Errors
    /// Returns `ZeroDenominator` if `other` is zero.
    pub fn divide(&self, other: &Self) -> NumericResult<Self> {
        Self::new(
            self.numerator.times(&other.denominator),
            self.denominator.times(&other.numerator),
        )
    }

    /// Integral power. A negative exponent inverts the result.
    ///
    /// # Errors
    /// Returns `ZeroDenominator` for zero raised to a negative power.
    pub fn pow(&self, exponent: &BigInteger) -> NumericResult<Self> {
        let raised = Self::new(
            self.numerator.pow_abs(exponent),
            self.denominator.pow_abs(exponent),
        )?;
        if exponent.is_negative() {
            return raised.inverse();
        }
        Ok(raised)
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Sign of `n1 * d2 - d1 * n2`.
    pub fn compare(&self, other: &Self) -> Ordering {
        self.numerator
            .times(&other.denominator)
            .compare(&self.denominator.times(&other.numerator))
    }

    pub fn is_equal_within(&self, other: &Self, tolerance: f64) -> bool {
        self.numerator
            .times(&other.denominator)
            .is_equal_within(&self.denominator.times(&other.numerator), tolerance)
    }

    pub fn is_equal(&self, other: &Self) -> bool {
        self.is_equal_within(other, native::EQUALITY_TOLERANCE)
    }

    // ========================================================================
    // Coercion
    // ========================================================================

    /// Equivalent value at `rank`.
    ///
    /// # Errors
    /// Returns `Coercion` when the value is not integral (for `Integer`), or
    /// when an exact part has no exact double value (for `Number`).
    pub fn coerce_to(&self, rank: Rank) -> NumericResult<Value> {
        let failure = NumericError::Coercion {
            from: Rank::Rational,
            to: rank,
        };

        match rank {
            Rank::Number => match (&self.numerator, &self.denominator) {
                (Term::Integer(n), Term::Integer(d)) => {
                    match (n.coerce_to(Rank::Number), d.coerce_to(Rank::Number)) {
                        (Ok(Value::Number(n)), Ok(Value::Number(d))) => Ok(Value::Number(n / d)),
                        _ => Err(failure),
                    }
                },
                _ => Ok(Value::Number(self.to_f64())),
            },
            Rank::Integer => match (&self.numerator, &self.denominator) {
                (Term::Integer(n), Term::Integer(d)) => {
                    let (quotient, remainder) = n.divrem(d)?;
                    if remainder.is_zero() {
                        Ok(Value::Integer(quotient))
                    } else {
                        Err(failure)
                    }
                },
                _ => BigInteger::from_f64(self.to_f64())
                    .map(Value::Integer)
                    .map_err(|_| failure),
            },
            Rank::Rational => Ok(Value::Rational(self.clone())),
            Rank::Complex => Ok(Value::Complex(Complex::new(self.to_f64(), 0.0))),
        }
    }

    /// Convert to `rust_decimal::Decimal`.
    ///
    /// # Errors
    /// Returns `Overflow` if either part or the quotient is out of range.
    pub fn to_decimal(&self) -> NumericResult<rust_decimal::Decimal> {
        match (&self.numerator, &self.denominator) {
            (Term::Integer(n), Term::Integer(d)) => n
                .to_decimal()?
                .checked_div(d.to_decimal()?)
                .ok_or(NumericError::Overflow),
            _ => rust_decimal::Decimal::try_from(self.to_f64()).map_err(|_| NumericError::Overflow),
        }
    }
}

/// `n / d` from the top 64 bits of each part, rescaled by the dropped bits.
fn exact_quotient(n: &BigInteger, d: &BigInteger) -> f64 {
    let n_shift = n.bit_length().saturating_sub(64);
    let d_shift = d.bit_length().saturating_sub(64);
    if n_shift == 0 && d_shift == 0 {
        return n.to_f64() / d.to_f64();
    }

    let quotient = n.shr(n_shift).to_f64() / d.shr(d_shift).to_f64();
    native::scale_by_pow2(quotient, n_shift as i64 - d_shift as i64)
}

impl From<BigInteger> for Rational {
    fn from(n: BigInteger) -> Self {
        Self::from_integer(n)
    }
}

impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Self::Output {
        self.negative()
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Self::Output {
        self.negative()
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl Notation for Rational {
    fn to_latex(&self) -> String {
        format!(
            "\\frac{{{}}}{{{}}}",
            self.numerator.to_latex(),
            self.denominator.to_latex()
        )
    }

    fn to_mathml(&self) -> String {
        format!(
            "<mfrac>{}{}</mfrac>",
            self.numerator.to_mathml(),
            self.denominator.to_mathml()
        )
    }

    fn to_content_mathml(&self) -> String {
        format!(
            "<cn type=\"rational\">{}<sep/>{}</cn>",
            self.numerator, self.denominator
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
