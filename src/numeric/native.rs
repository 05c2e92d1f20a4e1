// ============================================================================
// Native Numbers
// f64 helpers shared by every rank of the tower
// ============================================================================

use crate::interfaces::Notation;
use std::cmp::Ordering;

/// Default tolerance used when comparing floating components for equality.
pub const EQUALITY_TOLERANCE: f64 = 3e-15;

/// Magnitude below which a native number counts as zero.
pub const EPSILON: f64 = f64::EPSILON;

/// Largest integer such that every smaller integer is exactly representable.
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0; // 2^53

#[inline]
pub fn is_zero(x: f64) -> bool {
    x.abs() < EPSILON
}

#[inline]
pub fn is_one(x: f64) -> bool {
    (x - 1.0).abs() < EPSILON
}

#[inline]
pub fn is_integral(x: f64) -> bool {
    x.is_finite() && x.fract() == 0.0
}

/// True for `-0.0`.
#[inline]
pub fn is_neg_zero(x: f64) -> bool {
    x == 0.0 && x.is_sign_negative()
}

/// Sign of `x` as -1, 0 or 1. Signed zeros map to 0, NaN maps to NaN.
#[inline]
pub fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        x
    }
}

/// Equality within `tolerance`. Identical values (including infinities)
/// are always equal; NaN is never equal to anything.
#[inline]
pub fn is_equal_within(a: f64, b: f64, tolerance: f64) -> bool {
    a == b || (a - b).abs() <= tolerance
}

#[inline]
pub fn is_equal(a: f64, b: f64) -> bool {
    is_equal_within(a, b, EQUALITY_TOLERANCE)
}

/// Total order on native numbers with NaN sorting first.
pub fn compare(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

/// Overflow-safe hypotenuse. Infinity wins over NaN (IEEE 754-2008, 9.2.1).
pub fn hypot(a: f64, b: f64) -> f64 {
    let a = a.abs();
    let b = b.abs();

    if a.is_infinite() || b.is_infinite() {
        return f64::INFINITY;
    }
    if a == 0.0 && b == 0.0 {
        return 0.0;
    }

    let max = a.max(b);
    let min = a.min(b);
    max * (1.0 + (min / max).powi(2)).sqrt()
}

/// Euclid's algorithm over native numbers.
///
/// NaN when either input is not finite.
pub fn gcd(a: f64, b: f64) -> f64 {
    if !a.is_finite() || !b.is_finite() {
        return f64::NAN;
    }

    let mut a = a.abs();
    let mut b = b.abs();
    while b != 0.0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// `x * 2^exponent` for exponents beyond the range of a single double.
pub fn scale_by_pow2(mut x: f64, mut exponent: i64) -> f64 {
    const STEP: i32 = 1000;
    while exponent > i64::from(STEP) && x.is_finite() && x != 0.0 {
        x *= 2f64.powi(STEP);
        exponent -= i64::from(STEP);
    }
    while exponent < -i64::from(STEP) && x.is_finite() && x != 0.0 {
        x *= 2f64.powi(-STEP);
        exponent += i64::from(STEP);
    }

    if !x.is_finite() || x == 0.0 {
        return x;
    }
    x * 2f64.powi(exponent as i32)
}

/// Canonical text form, matching the notation of the rest of the tower.
pub fn to_string(x: f64) -> String {
    if x.is_nan() {
        "NaN".to_string()
    } else if x == f64::INFINITY {
        "Infinity".to_string()
    } else if x == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if x == 0.0 {
        "0".to_string()
    } else {
        format!("{}", x)
    }
}

/// LaTeX form; with `signed` a leading `+` is emitted for non-negative values.
pub fn to_latex_signed(x: f64, signed: bool) -> String {
    if signed && x >= 0.0 {
        format!("+{}", to_string(x))
    } else {
        to_string(x)
    }
}

/// Presentation MathML; with `signed` the sign becomes a separate `<mo>`.
pub fn to_mathml_signed(x: f64, signed: bool) -> String {
    if signed {
        let op = if x < 0.0 { '-' } else { '+' };
        format!("<mo>{}</mo><mn>{}</mn>", op, to_string(x.abs()))
    } else {
        format!("<mn>{}</mn>", to_string(x))
    }
}

impl Notation for f64 {
    fn to_latex(&self) -> String {
        to_latex_signed(*self, false)
    }

    fn to_mathml(&self) -> String {
        to_mathml_signed(*self, false)
    }

    fn to_content_mathml(&self) -> String {
        if self.is_nan() {
            "<notanumber/>".to_string()
        } else if self.is_infinite() {
            if *self > 0.0 {
                "<infinity/>".to_string()
            } else {
                "<apply><minus/><infinity/></apply>".to_string()
            }
        } else {
            format!("<cn>{}</cn>", to_string(*self))
        }
    }
}
