// ============================================================================
// BigInteger Engine
// Arbitrary-precision signed integers over 2^26-radix limbs
// ============================================================================

mod division;
pub mod limbs;
mod parse;

use crate::dispatch::{Rank, Value};
use crate::interfaces::Notation;
use crate::numeric::{native, NumericError, NumericResult};
use crate::{Complex, Rational};
use limbs::Limbs;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul, Neg, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Sign of a BigInteger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Sign {
    Plus,
    Minus,
}

impl Sign {
    #[inline]
    pub fn flip(self) -> Self {
        match self {
            Sign::Plus => Sign::Minus,
            Sign::Minus => Sign::Plus,
        }
    }

    /// Sign of a product
    #[inline]
    pub fn times(self, other: Self) -> Self {
        if self == other {
            Sign::Plus
        } else {
            Sign::Minus
        }
    }
}

/// Arbitrary-precision integer.
///
/// Stored as a sign and a little-endian sequence of limbs in `[0, 2^26)`.
/// The magnitude never has trailing zero limbs; zero is `[0]` with sign
/// `Plus`, except that a `-0.0` input keeps sign `Minus`. Zero of either
/// sign compares and hashes equal.
///
/// Every operation returns a new value; operands are never modified.
///
/// # Example
/// ```
/// use numeric_tower::BigInteger;
///
/// let a: BigInteger = "123456789".parse().unwrap();
/// let b: BigInteger = "987654321".parse().unwrap();
/// assert_eq!(a.times(&b).to_string(), "121932631112635269");
/// ```
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawBigInteger"))]
pub struct BigInteger {
    sign: Sign,
    limbs: Limbs,
}

/// Wire form of a BigInteger, validated through [`BigInteger::from_limbs`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawBigInteger {
    sign: Sign,
    limbs: Vec<u32>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawBigInteger> for BigInteger {
    type Error = NumericError;

    fn try_from(raw: RawBigInteger) -> Result<Self, Self::Error> {
        BigInteger::from_limbs(raw.sign, &raw.limbs)
    }
}

impl BigInteger {
    // ========================================================================
    // Construction
    // ========================================================================

    pub fn zero() -> Self {
        Self {
            sign: Sign::Plus,
            limbs: limbs::zero(),
        }
    }

    pub fn one() -> Self {
        Self {
            sign: Sign::Plus,
            limbs: limbs::one(),
        }
    }

    /// Build from a magnitude, trimming it and giving zero the `Plus` sign.
    pub(crate) fn from_magnitude(sign: Sign, magnitude: Limbs) -> Self {
        let limbs = limbs::trim(magnitude);
        let sign = if limbs::is_zero(&limbs) { Sign::Plus } else { sign };
        Self { sign, limbs }
    }

    /// Build from raw little-endian limbs.
    ///
    /// Trailing zero limbs are trimmed.
    ///
    /// # Errors
    /// Returns `InvalidInput` if any limb is not below 2^26.
    pub fn from_limbs(sign: Sign, raw: &[u32]) -> NumericResult<Self> {
        if raw.iter().any(|&l| l >= limbs::BASE) {
            return Err(NumericError::InvalidInput);
        }
        Ok(Self::from_magnitude(sign, raw.iter().copied().collect()))
    }

    /// Build from an integral native number.
    ///
    /// `-0.0` keeps its sign.
    ///
    /// # Errors
    /// Returns `InvalidInput` for NaN, infinities and non-integral values.
    pub fn from_f64(n: f64) -> NumericResult<Self> {
        if !native::is_integral(n) {
            return Err(NumericError::InvalidInput);
        }

        let sign = if n.is_sign_negative() {
            Sign::Minus
        } else {
            Sign::Plus
        };
        if n == 0.0 {
            return Ok(Self {
                sign,
                limbs: limbs::zero(),
            });
        }

        let base = f64::from(limbs::BASE);
        let mut rest = n.abs();
        let mut magnitude = Limbs::new();
        while rest > 0.0 {
            magnitude.push((rest % base) as u32);
            rest = (rest / base).floor();
        }

        Ok(Self::from_magnitude(sign, magnitude))
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Little-endian limbs of the magnitude.
    #[inline]
    pub fn limbs(&self) -> &[u32] {
        &self.limbs
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        limbs::is_zero(&self.limbs)
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Minus && !self.is_zero()
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.sign == Sign::Plus && !self.is_zero()
    }

    /// True for `1` and `-1`.
    pub fn is_unit(&self) -> bool {
        self.limbs.as_slice() == [1]
    }

    /// Integers are always finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        true
    }

    /// No integer is NaN.
    #[inline]
    pub fn is_nan(&self) -> bool {
        false
    }

    #[inline]
    pub fn is_even(&self) -> bool {
        !limbs::is_odd(&self.limbs)
    }

    /// -1, 0 or 1.
    pub fn signum(&self) -> i32 {
        if self.is_zero() {
            0
        } else if self.sign == Sign::Plus {
            1
        } else {
            -1
        }
    }

    /// Nearest double, rounded once (half to even). Magnitudes of 2^1024
    /// and above become infinite.
    pub fn to_f64(&self) -> f64 {
        let magnitude = limbs::to_f64(&self.limbs);
        match self.sign {
            Sign::Plus => magnitude,
            Sign::Minus => -magnitude,
        }
    }

    /// Number of significant bits in the magnitude.
    pub fn bit_length(&self) -> u64 {
        limbs::bit_length(&self.limbs)
    }

    /// `self / 2^bits`, truncated towards zero.
    pub(crate) fn shr(&self, bits: u64) -> Self {
        Self::from_magnitude(self.sign, limbs::shr(&self.limbs, bits))
    }

    /// The value as i128, if it fits.
    pub fn to_i128(&self) -> Option<i128> {
        let magnitude = limbs::to_u128(&self.limbs)?;
        match self.sign {
            Sign::Plus => i128::try_from(magnitude).ok(),
            Sign::Minus => 0i128.checked_sub_unsigned(magnitude),
        }
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Compare two integers. Zeros of either sign are equal.
    pub fn compare(&self, other: &Self) -> Ordering {
        if self.sign != other.sign {
            if self.is_zero() && other.is_zero() {
                return Ordering::Equal;
            }
            return match self.sign {
                Sign::Plus => Ordering::Greater,
                Sign::Minus => Ordering::Less,
            };
        }

        let magnitude = limbs::cmp(&self.limbs, &other.limbs);
        match self.sign {
            Sign::Plus => magnitude,
            Sign::Minus => magnitude.reverse(),
        }
    }

    #[inline]
    pub fn is_equal(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// Absolute value
    pub fn abs(&self) -> Self {
        Self {
            sign: Sign::Plus,
            limbs: self.limbs.clone(),
        }
    }

    /// Negation. Flips the sign of zero as well, like IEEE negation.
    pub fn negative(&self) -> Self {
        Self {
            sign: self.sign.flip(),
            limbs: self.limbs.clone(),
        }
    }

    /// Integers are real, so this is a copy.
    pub fn conjugate(&self) -> Self {
        self.clone()
    }

    /// `self + other`. Mixed signs are handed to `minus`.
    pub fn plus(&self, other: &Self) -> Self {
        if self.sign != other.sign {
            return self.minus(&other.negative());
        }
        Self::from_magnitude(self.sign, limbs::add(&self.limbs, &other.limbs))
    }

    /// `self - other`. Mixed signs are handed to `plus`.
    pub fn minus(&self, other: &Self) -> Self {
        if self.sign != other.sign {
            return self.plus(&other.negative());
        }

        match limbs::cmp(&self.limbs, &other.limbs) {
            Ordering::Equal => Self::zero(),
            Ordering::Greater => {
                Self::from_magnitude(self.sign, limbs::sub(&self.limbs, &other.limbs))
            },
            Ordering::Less => {
                Self::from_magnitude(self.sign.flip(), limbs::sub(&other.limbs, &self.limbs))
            },
        }
    }

    /// `self * other`
    pub fn times(&self, other: &Self) -> Self {
        Self::from_magnitude(
            self.sign.times(other.sign),
            limbs::mul(&self.limbs, &other.limbs),
        )
    }

    /// Quotient and remainder with a non-negative remainder:
    /// `q * divisor + r == self` and `0 <= r < |divisor|`.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `divisor` is zero.
    ///
    /// # Example
    /// ```
    /// use numeric_tower::BigInteger;
    ///
    /// let (q, r) = BigInteger::from(-7).divrem(&BigInteger::from(2)).unwrap();
    /// assert_eq!(q, BigInteger::from(-4));
    /// assert_eq!(r, BigInteger::from(1));
    /// ```
    pub fn divrem(&self, divisor: &Self) -> NumericResult<(Self, Self)> {
        if divisor.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        if self.is_zero() {
            return Ok((Self::zero(), Self::zero()));
        }

        let (q, r) = division::divrem_magnitudes(&self.limbs, &divisor.limbs);
        let mut quotient = Self::from_magnitude(Sign::Plus, q);
        let mut remainder = Self::from_magnitude(Sign::Plus, r);

        if self.sign == Sign::Minus && !remainder.is_zero() {
            quotient = quotient.plus(&Self::one());
            remainder = divisor.abs().minus(&remainder);
        }

        let sign = self.sign.times(divisor.sign);
        Ok((Self::from_magnitude(sign, quotient.limbs), remainder))
    }

    /// Exact quotient when the division leaves no remainder, otherwise the
    /// Rational `self / divisor`.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `divisor` is zero.
    pub fn divide(&self, divisor: &Self) -> NumericResult<Value> {
        let (quotient, remainder) = self.divrem(divisor)?;
        if remainder.is_zero() {
            return Ok(Value::Integer(quotient));
        }
        Rational::new(self.clone(), divisor.clone()).map(Value::Rational)
    }

    /// Remainder of `divrem`, always non-negative.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `n` is zero.
    pub fn modulo(&self, n: &Self) -> NumericResult<Self> {
        self.divrem(n).map(|(_, remainder)| remainder)
    }

    /// `self ^ |exponent|` by square-and-multiply over the exponent's limbs.
    pub fn pow_abs(&self, exponent: &Self) -> Self {
        fn pow_rec(base: &BigInteger, exponent: &[u32]) -> BigInteger {
            if limbs::is_zero(exponent) {
                return BigInteger::one();
            }
            if exponent == [1] {
                return base.clone();
            }

            let half = pow_rec(base, &limbs::halve(exponent));
            let square = half.times(&half);
            if limbs::is_odd(exponent) {
                square.times(base)
            } else {
                square
            }
        }

        pow_rec(self, &exponent.limbs)
    }

    /// `self ^ exponent`. A negative exponent yields the Rational `1 / self^|e|`.
    ///
    /// # Errors
    /// Returns `ZeroDenominator` for zero raised to a negative power.
    pub fn pow(&self, exponent: &Self) -> NumericResult<Value> {
        let result = self.pow_abs(exponent);
        if exponent.is_negative() {
            return Rational::new(Self::one(), result).map(Value::Rational);
        }
        Ok(Value::Integer(result))
    }

    /// Greatest common divisor of the magnitudes (`gcd(0, 0) = 0`).
    pub fn gcd(&self, other: &Self) -> Self {
        let mut a = self.abs();
        let mut b = other.abs();
        while !b.is_zero() {
            let (_, r) = match a.divrem(&b) {
                Ok(qr) => qr,
                Err(_) => break,
            };
            a = b;
            b = r;
        }
        a
    }

    // ========================================================================
    // Coercion
    // ========================================================================

    /// Equivalent value at `rank`.
    ///
    /// # Errors
    /// Returns `Coercion` when the integer has no exact double value and
    /// `rank` is `Number`.
    pub fn coerce_to(&self, rank: Rank) -> NumericResult<Value> {
        match rank {
            Rank::Number => {
                let magnitude =
                    limbs::to_f64_exact(&self.limbs).ok_or(NumericError::Coercion {
                        from: Rank::Integer,
                        to: Rank::Number,
                    })?;
                Ok(Value::Number(match self.sign {
                    Sign::Plus => magnitude,
                    Sign::Minus => -magnitude,
                }))
            },
            Rank::Integer => Ok(Value::Integer(self.clone())),
            Rank::Rational => Ok(Value::Rational(Rational::from_integer(self.clone()))),
            Rank::Complex => Ok(Value::Complex(Complex::new(self.to_f64(), 0.0))),
        }
    }

    // ========================================================================
    // Decimal Conversion (for API boundaries)
    // ========================================================================

    /// Convert to `rust_decimal::Decimal`.
    ///
    /// # Errors
    /// Returns `Overflow` if the magnitude needs more than 96 bits.
    pub fn to_decimal(&self) -> NumericResult<rust_decimal::Decimal> {
        let value = self.to_i128().ok_or(NumericError::Overflow)?;
        rust_decimal::Decimal::try_from_i128_with_scale(value, 0)
            .map_err(|_| NumericError::Overflow)
    }

    /// Convert from an integral `rust_decimal::Decimal`.
    ///
    /// # Errors
    /// Returns `PrecisionLoss` if `d` has a fractional part.
    pub fn from_decimal(d: rust_decimal::Decimal) -> NumericResult<Self> {
        let d = d.normalize();
        if d.scale() != 0 {
            return Err(NumericError::PrecisionLoss);
        }
        Ok(Self::from(d.mantissa()))
    }
}

// ============================================================================
// Native Conversions
// ============================================================================

impl From<u128> for BigInteger {
    fn from(n: u128) -> Self {
        Self::from_magnitude(Sign::Plus, limbs::from_u128(n))
    }
}

impl From<i128> for BigInteger {
    fn from(n: i128) -> Self {
        let sign = if n < 0 { Sign::Minus } else { Sign::Plus };
        Self::from_magnitude(sign, limbs::from_u128(n.unsigned_abs()))
    }
}

impl From<u64> for BigInteger {
    fn from(n: u64) -> Self {
        Self::from(u128::from(n))
    }
}

impl From<i64> for BigInteger {
    fn from(n: i64) -> Self {
        Self::from(i128::from(n))
    }
}

impl From<u32> for BigInteger {
    fn from(n: u32) -> Self {
        Self::from(u128::from(n))
    }
}

impl From<i32> for BigInteger {
    fn from(n: i32) -> Self {
        Self::from(i128::from(n))
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for BigInteger {
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialEq for BigInteger {
    fn eq(&self, other: &Self) -> bool {
        self.is_equal(other)
    }
}

impl Eq for BigInteger {}

impl PartialOrd for BigInteger {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

impl Ord for BigInteger {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl Hash for BigInteger {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Both zeros hash alike
        self.signum().hash(state);
        self.limbs.as_slice().hash(state);
    }
}

impl Neg for BigInteger {
    type Output = BigInteger;

    fn neg(self) -> Self::Output {
        self.negative()
    }
}

impl Neg for &BigInteger {
    type Output = BigInteger;

    fn neg(self) -> Self::Output {
        self.negative()
    }
}

macro_rules! forward_binop {
    ($trait:ident, $fn:ident, $method:ident) => {
        impl $trait<&BigInteger> for &BigInteger {
            type Output = BigInteger;

            fn $fn(self, rhs: &BigInteger) -> Self::Output {
                self.$method(rhs)
            }
        }

        impl $trait for BigInteger {
            type Output = BigInteger;

            fn $fn(self, rhs: BigInteger) -> Self::Output {
                self.$method(&rhs)
            }
        }
    };
}

forward_binop!(Add, add, plus);
forward_binop!(Sub, sub, minus);
forward_binop!(Mul, mul, times);

// ============================================================================
// Display and Notation
// ============================================================================

/// Sub-base used for decimal rendering
const DECIMAL_CHUNK: u32 = 10_000_000;

impl fmt::Display for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let mut chunks = Vec::new();
        let mut rest = self.limbs.clone();
        while !limbs::is_zero(&rest) {
            let (quotient, remainder) = limbs::div_small(&rest, DECIMAL_CHUNK);
            chunks.push(remainder);
            rest = quotient;
        }

        let mut digits = String::with_capacity(chunks.len() * 7);
        for chunk in chunks.iter().rev() {
            digits.push_str(&format!("{:07}", chunk));
        }

        if self.sign == Sign::Minus {
            write!(f, "-")?;
        }
        write!(f, "{}", digits.trim_start_matches('0'))
    }
}

impl fmt::Debug for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigInteger({}, limbs={:?})", self, self.limbs.as_slice())
    }
}

impl Notation for BigInteger {
    fn to_latex(&self) -> String {
        self.to_string()
    }

    fn to_mathml(&self) -> String {
        format!("<mn>{}</mn>", self)
    }

    fn to_content_mathml(&self) -> String {
        format!("<cn type=\"integer\" base=\"10\">{}</cn>", self)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn int(s: &str) -> BigInteger {
        s.parse().unwrap()
    }

    #[test]
    fn test_from_native() {
        let n = BigInteger::from(-123_456_789_012i64);
        assert!(n.is_negative());
        assert_eq!(n.to_string(), "-123456789012");
        assert_eq!(n.limbs().len(), 2);

        let big = BigInteger::from_f64(2f64.powi(80)).unwrap();
        assert_eq!(big.to_string(), "1208925819614629174706176");
    }

    #[test]
    fn test_from_f64_signed_zero() {
        let neg_zero = BigInteger::from_f64(-0.0).unwrap();
        assert_eq!(neg_zero.sign(), Sign::Minus);
        assert!(neg_zero.is_zero());
        assert_eq!(neg_zero, BigInteger::zero());
        assert_eq!(neg_zero.to_string(), "0");
        assert!(native::is_neg_zero(neg_zero.to_f64()));
    }

    #[test]
    fn test_to_f64_rounds_to_nearest() {
        assert_eq!(int("9007199254740993").to_f64(), 9007199254740992.0);
        assert_eq!(int("-9007199254740995").to_f64(), -9007199254740996.0);
        let huge = BigInteger::from(2).pow_abs(&int("1100"));
        assert_eq!(huge.to_f64(), f64::INFINITY);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_validates_limbs() {
        use std::collections::hash_map::DefaultHasher;

        let hash = |n: &BigInteger| {
            let mut hasher = DefaultHasher::new();
            n.hash(&mut hasher);
            hasher.finish()
        };

        let padded: BigInteger =
            serde_json::from_str(r#"{"sign":"Plus","limbs":[5,0]}"#).unwrap();
        assert_eq!(padded, BigInteger::from(5));
        assert_eq!(padded.limbs(), &[5]);
        assert_eq!(hash(&padded), hash(&BigInteger::from(5)));

        let out_of_range =
            serde_json::from_str::<BigInteger>(r#"{"sign":"Plus","limbs":[67108864]}"#);
        assert!(out_of_range.is_err());

        let n = int("-123456789012345678901234567890");
        let json = serde_json::to_string(&n).unwrap();
        assert_eq!(serde_json::from_str::<BigInteger>(&json).unwrap(), n);
    }

    #[test]
    fn test_from_f64_rejects_fractions() {
        assert_eq!(BigInteger::from_f64(2.5), Err(NumericError::InvalidInput));
        assert_eq!(
            BigInteger::from_f64(f64::INFINITY),
            Err(NumericError::InvalidInput)
        );
        assert_eq!(BigInteger::from_f64(f64::NAN), Err(NumericError::InvalidInput));
    }

    #[test]
    fn test_from_limbs_trims() {
        let n = BigInteger::from_limbs(Sign::Plus, &[5, 1, 0, 0]).unwrap();
        assert_eq!(n.limbs(), &[5, 1]);
        assert_eq!(
            BigInteger::from_limbs(Sign::Plus, &[limbs::BASE]),
            Err(NumericError::InvalidInput)
        );
        let z = BigInteger::from_limbs(Sign::Minus, &[0, 0]).unwrap();
        assert_eq!(z.limbs(), &[0]);
        assert_eq!(z.sign(), Sign::Plus);
    }

    #[test]
    fn test_compare() {
        assert_eq!(int("5").compare(&int("-5")), Ordering::Greater);
        assert_eq!(int("-5").compare(&int("-6")), Ordering::Greater);
        assert_eq!(
            int("-100000000000").compare(&int("-5")),
            Ordering::Less
        );
        assert_eq!(
            BigInteger::from_f64(-0.0).unwrap().compare(&BigInteger::zero()),
            Ordering::Equal
        );
    }

    #[test]
    fn test_plus_minus_signs() {
        assert_eq!(int("5").plus(&int("-3")), int("2"));
        assert_eq!(int("-5").plus(&int("3")), int("-2"));
        assert_eq!(int("-5").minus(&int("-3")), int("-2"));
        assert_eq!(int("3").minus(&int("5")), int("-2"));
        assert_eq!(int("3").minus(&int("-5")), int("8"));
        assert_eq!(int("7").minus(&int("7")).sign(), Sign::Plus);
    }

    #[test]
    fn test_operands_are_not_modified() {
        let a = int("-99999999999999999999");
        let b = int("1");
        let a_before = a.limbs().to_vec();
        let b_before = b.limbs().to_vec();

        let _ = a.plus(&b);
        let _ = a.minus(&b);
        let _ = b.plus(&a);
        let _ = a.times(&b);
        let _ = a.divrem(&b);

        assert_eq!(a.limbs(), a_before.as_slice());
        assert_eq!(b.limbs(), b_before.as_slice());
        assert!(a.is_negative());
    }

    #[test]
    fn test_times() {
        assert_eq!(
            int("123456789").times(&int("987654321")).to_string(),
            "121932631112635269"
        );
        assert_eq!(int("-3").times(&int("4")), int("-12"));
        assert_eq!(int("-3").times(&int("-4")), int("12"));
        assert_eq!(int("-3").times(&BigInteger::zero()).sign(), Sign::Plus);
    }

    #[test]
    fn test_divrem_floor_semantics() {
        let (q, r) = int("-7").divrem(&int("2")).unwrap();
        assert_eq!((q, r), (int("-4"), int("1")));

        let (q, r) = int("7").divrem(&int("-2")).unwrap();
        assert_eq!((q, r), (int("-3"), int("1")));

        let (q, r) = int("-7").divrem(&int("-2")).unwrap();
        assert_eq!((q, r), (int("4"), int("1")));

        let (q, r) = int("-8").divrem(&int("2")).unwrap();
        assert_eq!((q, r), (int("-4"), int("0")));
    }

    #[test]
    fn test_divrem_large() {
        let a = int("1234567890123456789012345678901234567890");
        let b = int("987654321987654321");
        let (q, r) = a.divrem(&b).unwrap();
        assert_eq!(q.to_string(), "1249999987484375011531");
        assert_eq!(q.times(&b).plus(&r), a);
        assert!(r < b);
    }

    #[test]
    fn test_divrem_by_zero() {
        assert_eq!(
            int("1").divrem(&BigInteger::zero()),
            Err(NumericError::DivisionByZero)
        );
    }

    #[test]
    fn test_divide() {
        assert_eq!(
            int("12").divide(&int("4")).unwrap(),
            Value::Integer(int("3"))
        );
        match int("1").divide(&int("3")).unwrap() {
            Value::Rational(r) => assert_eq!(r.to_string(), "1/3"),
            other => panic!("expected rational, got {:?}", other),
        }
    }

    #[test]
    fn test_pow() {
        assert_eq!(
            int("2").pow(&int("100")).unwrap(),
            Value::Integer(int("1267650600228229401496703205376"))
        );
        assert_eq!(int("7").pow(&int("0")).unwrap(), Value::Integer(int("1")));
        assert_eq!(int("-3").pow(&int("3")).unwrap(), Value::Integer(int("-27")));

        match int("2").pow(&int("-3")).unwrap() {
            Value::Rational(r) => assert_eq!(r.to_string(), "1/8"),
            other => panic!("expected rational, got {:?}", other),
        }
        assert_eq!(
            BigInteger::zero().pow(&int("-1")),
            Err(NumericError::ZeroDenominator)
        );
    }

    #[test]
    fn test_gcd() {
        assert_eq!(int("-48").gcd(&int("18")), int("6"));
        assert_eq!(int("0").gcd(&int("5")), int("5"));
        assert_eq!(int("0").gcd(&int("0")), int("0"));
    }

    #[test]
    fn test_predicates() {
        assert!(int("-1").is_unit());
        assert!(!int("2").is_unit());
        assert!(int("10").is_even());
        assert_eq!(int("-10").signum(), -1);
    }

    #[test]
    fn test_coerce_to() {
        assert_eq!(
            int("-42").coerce_to(Rank::Number).unwrap(),
            Value::Number(-42.0)
        );
        let huge = int("9007199254740993"); // 2^53 + 1
        assert!(matches!(
            huge.coerce_to(Rank::Number),
            Err(NumericError::Coercion { .. })
        ));
        match int("3").coerce_to(Rank::Rational).unwrap() {
            Value::Rational(r) => assert_eq!(r.to_string(), "3/1"),
            other => panic!("expected rational, got {:?}", other),
        }
    }

    #[test]
    fn test_decimal_conversion() {
        use rust_decimal::Decimal;

        let n = BigInteger::from_decimal(Decimal::new(123_456, 0)).unwrap();
        assert_eq!(n, int("123456"));
        assert_eq!(
            BigInteger::from_decimal(Decimal::new(15, 1)),
            Err(NumericError::PrecisionLoss)
        );
        assert_eq!(int("-42").to_decimal().unwrap(), Decimal::new(-42, 0));
        assert_eq!(
            int("1").times(&BigInteger::from(2).pow_abs(&int("100"))).to_decimal(),
            Err(NumericError::Overflow)
        );
    }

    #[test]
    fn test_display_pads_inner_chunks() {
        assert_eq!(int("100000000000000").to_string(), "100000000000000");
        assert_eq!(int("-10000000").to_string(), "-10000000");
        assert_eq!(BigInteger::zero().to_string(), "0");
    }

    #[test]
    fn test_notation() {
        let n = int("-12");
        assert_eq!(n.to_latex(), "-12");
        assert_eq!(n.to_mathml(), "<mn>-12</mn>");
        assert_eq!(
            n.to_content_mathml(),
            "<cn type=\"integer\" base=\"10\">-12</cn>"
        );
    }

    #[test]
    fn test_operators() {
        let a = int("10");
        let b = int("4");
        assert_eq!(&a + &b, int("14"));
        assert_eq!(&a - &b, int("6"));
        assert_eq!(&a * &b, int("40"));
        assert_eq!(-a, int("-10"));
    }

    // ========================================================================
    // Properties
    // ========================================================================

    fn big() -> impl Strategy<Value = BigInteger> {
        (any::<bool>(), proptest::collection::vec(0..limbs::BASE, 1..8))
            .prop_map(|(neg, raw)| {
                let sign = if neg { Sign::Minus } else { Sign::Plus };
                BigInteger::from_limbs(sign, &raw).unwrap()
            })
    }

    proptest! {
        #[test]
        fn prop_string_round_trip(n in big()) {
            let parsed: BigInteger = n.to_string().parse().unwrap();
            prop_assert_eq!(parsed, n);
        }

        #[test]
        fn prop_division_invariant(a in big(), b in big()) {
            prop_assume!(!b.is_zero());
            let (q, r) = a.divrem(&b).unwrap();
            prop_assert_eq!(q.times(&b).plus(&r), a);
            prop_assert!(!r.is_negative());
            prop_assert!(r < b.abs());
        }

        #[test]
        fn prop_addition_laws(a in big(), b in big(), c in big()) {
            prop_assert_eq!(a.plus(&b), b.plus(&a));
            prop_assert_eq!(a.plus(&b).plus(&c), a.plus(&b.plus(&c)));
            prop_assert_eq!(a.plus(&b).minus(&b), a.clone());
        }

        #[test]
        fn prop_multiplication_laws(a in big(), b in big(), c in big()) {
            prop_assert_eq!(a.times(&b), b.times(&a));
            prop_assert_eq!(a.times(&b).times(&c), a.times(&b.times(&c)));
            prop_assert_eq!(a.times(&b.plus(&c)), a.times(&b).plus(&a.times(&c)));
        }

        #[test]
        fn prop_matches_i128(x in any::<i64>(), y in any::<i64>()) {
            let a = BigInteger::from(x);
            let b = BigInteger::from(y);
            prop_assert_eq!(a.times(&b).to_i128(), Some(i128::from(x) * i128::from(y)));
            prop_assert_eq!(a.minus(&b).to_i128(), Some(i128::from(x) - i128::from(y)));
            prop_assert_eq!(a.compare(&b), x.cmp(&y));
            if y != 0 {
                let (q, r) = a.divrem(&b).unwrap();
                prop_assert_eq!(q.to_i128(), Some(i128::from(x).div_euclid(i128::from(y))));
                prop_assert_eq!(r.to_i128(), Some(i128::from(x).rem_euclid(i128::from(y))));
            }
        }
    }
}
