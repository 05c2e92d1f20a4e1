// ============================================================================
// Complex Engine
// f64 complex numbers with a single point at infinity
// ============================================================================

mod elementary;

use crate::dispatch::{Rank, Value};
use crate::integer::BigInteger;
use crate::interfaces::Notation;
use crate::numeric::{native, NumericError, NumericResult};
use crate::rational::Rational;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Complex number `re + im·i` over the extended plane.
///
/// Construction canonicalizes non-finite input: if either part is NaN the
/// value is `ComplexNaN`, otherwise if either part is infinite the value is
/// the single `ComplexInfinity` (stored as `+∞ + +∞i`).
///
/// # Example
/// ```
/// use numeric_tower::Complex;
///
/// assert_eq!(Complex::new(3.0, 4.0).abs(), 5.0);
/// assert!(Complex::new(0.0, 0.0).inverse().is_infinite());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Complex {
    re: f64,
    im: f64,
}

impl Complex {
    // ========================================================================
    // Construction
    // ========================================================================

    pub fn new(re: f64, im: f64) -> Self {
        if re.is_nan() || im.is_nan() {
            Self::nan()
        } else if re.is_infinite() || im.is_infinite() {
            Self::infinity()
        } else {
            Self { re, im }
        }
    }

    #[inline]
    pub fn from_real(re: f64) -> Self {
        Self::new(re, 0.0)
    }

    /// `abs·(cos arg + i·sin arg)`; an infinite `abs` gives `ComplexInfinity`.
    pub fn polar(abs: f64, arg: f64) -> Self {
        if abs == f64::INFINITY {
            return Self::infinity();
        }
        Self::new(abs * arg.cos(), abs * arg.sin())
    }

    #[inline]
    pub const fn infinity() -> Self {
        Self {
            re: f64::INFINITY,
            im: f64::INFINITY,
        }
    }

    #[inline]
    pub const fn nan() -> Self {
        Self {
            re: f64::NAN,
            im: f64::NAN,
        }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { re: 0.0, im: 0.0 }
    }

    #[inline]
    pub const fn one() -> Self {
        Self { re: 1.0, im: 0.0 }
    }

    // ========================================================================
    // Accessors and Predicates
    // ========================================================================

    #[inline]
    pub fn re(&self) -> f64 {
        self.re
    }

    #[inline]
    pub fn im(&self) -> f64 {
        self.im
    }

    pub fn is_zero(&self) -> bool {
        native::is_zero(self.re) && native::is_zero(self.im)
    }

    pub fn is_one(&self) -> bool {
        native::is_one(self.re) && native::is_zero(self.im)
    }

    #[inline]
    pub fn is_nan(&self) -> bool {
        self.re.is_nan()
    }

    #[inline]
    pub fn is_infinite(&self) -> bool {
        self.re == f64::INFINITY
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.re.is_finite()
    }

    /// Finite with a zero imaginary part.
    pub fn is_real(&self) -> bool {
        self.is_finite() && native::is_zero(self.im)
    }

    /// Modulus, computed without intermediate overflow.
    pub fn abs(&self) -> f64 {
        native::hypot(self.re, self.im)
    }

    /// Principal argument in `(-π, π]`; NaN for `ComplexInfinity`.
    pub fn arg(&self) -> f64 {
        if self.is_infinite() {
            return f64::NAN;
        }
        self.im.atan2(self.re)
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    pub fn conjugate(&self) -> Self {
        Self::new(self.re, -self.im)
    }

    pub fn negative(&self) -> Self {
        Self::new(-self.re, -self.im)
    }

    pub fn plus(&self, other: &Self) -> Self {
        Self::new(self.re + other.re, self.im + other.im)
    }

    pub fn minus(&self, other: &Self) -> Self {
        self.plus(&other.negative())
    }

    /// Product. `∞·z` is NaN when `z` is zero or NaN and `∞` otherwise.
    pub fn times(&self, other: &Self) -> Self {
        if self.is_infinite() {
            return Self::times_infinity(other);
        }
        if other.is_infinite() {
            return Self::times_infinity(self);
        }

        Self::new(
            self.re * other.re - self.im * other.im,
            self.re * other.im + self.im * other.re,
        )
    }

    fn times_infinity(factor: &Self) -> Self {
        if factor.is_zero() || factor.is_nan() {
            Self::nan()
        } else {
            Self::infinity()
        }
    }

    /// `1/z` with `1/0 = ∞` and `1/∞ = 0`.
    pub fn inverse(&self) -> Self {
        if self.is_zero() {
            return Self::infinity();
        }
        if self.is_infinite() {
            return Self::zero();
        }

        let d = self.re * self.re + self.im * self.im;
        Self::new(self.re / d, -self.im / d)
    }

    pub fn divide(&self, divisor: &Self) -> Self {
        self.times(&divisor.inverse())
    }

    /// `self ^ exponent`. Real exponents take the [`Complex::powf`] path.
    pub fn pow(&self, exponent: &Self) -> Self {
        if exponent.im == 0.0 && !exponent.is_nan() && !exponent.is_infinite() {
            return self.powf(exponent.re);
        }

        // 0^c = 0 and ∞^c = ∞ for usable exponents
        if (self.is_zero() || self.is_infinite())
            && !(exponent.is_zero() || exponent.is_infinite() || exponent.is_nan())
        {
            return *self;
        }

        let abs = self.abs();
        let arg = self.arg();
        Self::polar(
            abs.powf(exponent.re) * (-exponent.im * arg).exp(),
            exponent.re * arg + exponent.im * abs.ln(),
        )
    }

    /// `self ^ e` for a real exponent.
    ///
    /// Integral exponents use binary exponentiation so small integer powers
    /// of Gaussian integers stay exact. `z^0 = 1 + 0i` with the zero carrying
    /// the sign of `e`.
    pub fn powf(&self, e: f64) -> Self {
        if !native::is_integral(e) {
            return Self::polar(self.abs().powf(e), self.arg() * e);
        }

        if e == 0.0 {
            return Self::new(1.0, e);
        }

        let mut result = Self::one();
        let mut power = *self;
        let mut n = e.abs();
        while n >= 1.0 {
            if n % 2.0 == 1.0 {
                result = result.times(&power);
            }
            power = power.times(&power);
            n = (n / 2.0).floor();
        }

        if e < 0.0 {
            result.inverse()
        } else {
            result
        }
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Total order: NaN first, infinity last, otherwise by modulus then
    /// argument.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self.is_nan(), other.is_nan()) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => {},
        }

        match (self.is_infinite(), other.is_infinite()) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Greater,
            (false, true) => return Ordering::Less,
            _ => {},
        }

        native::compare(self.abs(), other.abs())
            .then_with(|| native::compare(self.arg(), other.arg()))
    }

    pub fn is_equal_within(&self, other: &Self, tolerance: f64) -> bool {
        native::is_equal_within(self.re, other.re, tolerance)
            && native::is_equal_within(self.im, other.im, tolerance)
    }

    pub fn is_equal(&self, other: &Self) -> bool {
        self.is_equal_within(other, native::EQUALITY_TOLERANCE)
    }

    // ========================================================================
    // Coercion
    // ========================================================================

    /// Equivalent value at `rank`.
    ///
    /// A NaN complex coerces to `Number(NaN)`.
    ///
    /// # Errors
    /// Returns `Coercion` for non-real values and, for `Integer`, for
    /// non-integral real parts.
    pub fn coerce_to(&self, rank: Rank) -> NumericResult<Value> {
        let failure = NumericError::Coercion {
            from: Rank::Complex,
            to: rank,
        };

        if rank == Rank::Complex {
            return Ok(Value::Complex(*self));
        }
        if rank == Rank::Number && self.is_nan() {
            return Ok(Value::Number(f64::NAN));
        }
        if !self.is_finite() || self.im != 0.0 {
            return Err(failure);
        }

        match rank {
            Rank::Number => Ok(Value::Number(self.re)),
            Rank::Integer => BigInteger::from_f64(self.re)
                .map(Value::Integer)
                .map_err(|_| failure),
            Rank::Rational => Rational::from_f64(self.re)
                .map(Value::Rational)
                .map_err(|_| failure),
            Rank::Complex => Ok(Value::Complex(*self)),
        }
    }
}

impl Default for Complex {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<f64> for Complex {
    fn from(re: f64) -> Self {
        Self::from_real(re)
    }
}

impl Add for Complex {
    type Output = Complex;

    fn add(self, rhs: Complex) -> Self::Output {
        self.plus(&rhs)
    }
}

impl Sub for Complex {
    type Output = Complex;

    fn sub(self, rhs: Complex) -> Self::Output {
        self.minus(&rhs)
    }
}

impl Mul for Complex {
    type Output = Complex;

    fn mul(self, rhs: Complex) -> Self::Output {
        self.times(&rhs)
    }
}

impl Div for Complex {
    type Output = Complex;

    fn div(self, rhs: Complex) -> Self::Output {
        self.divide(&rhs)
    }
}

impl Neg for Complex {
    type Output = Complex;

    fn neg(self) -> Self::Output {
        self.negative()
    }
}

// ============================================================================
// Display and Notation
// ============================================================================

impl Complex {
    fn extended_name(&self) -> &'static str {
        if self.is_nan() {
            "ComplexNaN"
        } else {
            "ComplexInfinity"
        }
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_finite() {
            return write!(f, "{}", self.extended_name());
        }

        let mut out = String::new();
        if !native::is_zero(self.re) {
            out.push_str(&native::to_string(self.re));
        }
        if !native::is_zero(self.im) {
            if self.im < 0.0 {
                out.push('-');
            } else if !out.is_empty() {
                out.push('+');
            }
            out.push_str(&native::to_string(self.im.abs()));
            out.push('i');
        }
        if out.is_empty() {
            out.push('0');
        }

        write!(f, "{}", out)
    }
}

impl Notation for Complex {
    fn to_latex(&self) -> String {
        if !self.is_finite() {
            return format!("\\text{{{}}}", self.extended_name());
        }

        let mut out = String::new();
        let has_re = !native::is_zero(self.re);
        if has_re {
            out.push_str(&native::to_latex_signed(self.re, false));
        }
        if !native::is_zero(self.im) {
            out.push_str(&native::to_latex_signed(self.im, has_re));
            out.push('i');
        }
        if out.is_empty() {
            out.push('0');
        }
        out
    }

    fn to_mathml(&self) -> String {
        if !self.is_finite() {
            return format!("<mi>{}</mi>", self.extended_name());
        }

        let mut out = String::new();
        let has_re = !native::is_zero(self.re);
        if has_re {
            out.push_str(&native::to_mathml_signed(self.re, false));
        }
        if !native::is_zero(self.im) {
            out.push_str(&native::to_mathml_signed(self.im, has_re));
            out.push_str("<mo>&#x2062;</mo><mi>i</mi>");
        }
        if out.is_empty() {
            out.push_str("<mn>0</mn>");
        }
        out
    }

    fn to_content_mathml(&self) -> String {
        if !self.is_finite() {
            let symbol = if self.is_nan() { "NaN" } else { "infinity" };
            return format!("<csymbol cd=\"nums1\">{}</csymbol>", symbol);
        }

        format!(
            "<apply><plus />{}<apply><times />{}<imaginaryi /></apply></apply>",
            self.re.to_content_mathml(),
            self.im.to_content_mathml()
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
