// ============================================================================
// Elementary Functions
// Exponential, logarithm, trigonometric and hyperbolic families
// ============================================================================
//
// Known gap: arcsin and arctan follow the principal-branch formulas below.
// The special values at zero and infinity are handled explicitly, but points
// on the branch cuts along the axes may land on the other side of the cut.

use super::Complex;
use crate::numeric::native;
use std::f64::consts::FRAC_PI_2;

/// Sign of `x` counting signed zeros: `+0 -> 1`, `-0 -> -1`.
fn signed_unit(x: f64) -> f64 {
    if x.is_sign_negative() {
        -1.0
    } else {
        1.0
    }
}

impl Complex {
    // ========================================================================
    // Exponential and Logarithm
    // ========================================================================

    pub fn exp(&self) -> Self {
        let scale = self.re.exp();
        Self::new(scale * self.im.cos(), scale * self.im.sin())
    }

    /// Principal logarithm; `ln(∞) = ∞` and `ln(0) = ∞`.
    pub fn ln(&self) -> Self {
        if self.is_infinite() {
            return Self::infinity();
        }
        Self::new(self.abs().ln(), self.arg())
    }

    /// Principal square root.
    pub fn sqrt(&self) -> Self {
        Self::polar(self.abs().sqrt(), self.arg() / 2.0)
    }

    /// `z / |z|`; zero and NaN map to themselves, infinity to NaN.
    pub fn sign(&self) -> Self {
        if self.is_zero() || self.is_nan() {
            return *self;
        }
        if self.is_infinite() {
            return Self::nan();
        }
        Self::polar(1.0, self.arg())
    }

    // ========================================================================
    // Trigonometric
    // ========================================================================

    pub fn sin(&self) -> Self {
        Self::new(
            self.re.sin() * self.im.cosh(),
            self.re.cos() * self.im.sinh(),
        )
    }

    pub fn cos(&self) -> Self {
        Self::new(
            self.re.cos() * self.im.cosh(),
            -self.re.sin() * self.im.sinh(),
        )
    }

    pub fn tan(&self) -> Self {
        let (aa, bb) = (2.0 * self.re, 2.0 * self.im);
        let d = aa.cos() + bb.cosh();
        Self::new(aa.sin() / d, bb.sinh() / d)
    }

    /// `cot(0) = ∞`
    pub fn cot(&self) -> Self {
        if self.is_zero() {
            return Self::infinity();
        }
        let (aa, bb) = (2.0 * self.re, 2.0 * self.im);
        let d = aa.cos() - bb.cosh();
        Self::new(-aa.sin() / d, bb.sinh() / d)
    }

    pub fn sec(&self) -> Self {
        let (a, b) = (self.re, self.im);
        let d = (2.0 * a).cos() + (2.0 * b).cosh();
        Self::new(
            2.0 * a.cos() * b.cosh() / d,
            2.0 * a.sin() * b.sinh() / d,
        )
    }

    /// `csc(0) = ∞`
    pub fn csc(&self) -> Self {
        if self.is_zero() {
            return Self::infinity();
        }
        let (a, b) = (self.re, self.im);
        let d = (2.0 * a).cos() - (2.0 * b).cosh();
        Self::new(
            -2.0 * a.sin() * b.cosh() / d,
            2.0 * a.cos() * b.sinh() / d,
        )
    }

    // ========================================================================
    // Hyperbolic
    // ========================================================================

    pub fn sinh(&self) -> Self {
        Self::new(
            self.im.cos() * self.re.sinh(),
            self.im.sin() * self.re.cosh(),
        )
    }

    pub fn cosh(&self) -> Self {
        Self::new(
            self.im.cos() * self.re.cosh(),
            self.im.sin() * self.re.sinh(),
        )
    }

    pub fn tanh(&self) -> Self {
        let (aa, bb) = (2.0 * self.re, 2.0 * self.im);
        let d = aa.cosh() + bb.cos();
        Self::new(aa.sinh() / d, bb.sin() / d)
    }

    /// `coth(0) = ∞`
    pub fn coth(&self) -> Self {
        if self.is_zero() {
            return Self::infinity();
        }
        let (aa, bb) = (2.0 * self.re, 2.0 * self.im);
        let d = aa.cosh() - bb.cos();
        Self::new(aa.sinh() / d, -bb.sin() / d)
    }

    pub fn sech(&self) -> Self {
        let (a, b) = (self.re, self.im);
        let d = (2.0 * a).cosh() + (2.0 * b).cos();
        Self::new(
            2.0 * a.cosh() * b.cos() / d,
            -2.0 * a.sinh() * b.sin() / d,
        )
    }

    /// `csch(0) = ∞`
    pub fn csch(&self) -> Self {
        if self.is_zero() {
            return Self::infinity();
        }
        let (a, b) = (self.re, self.im);
        let d = (2.0 * a).cosh() - (2.0 * b).cos();
        Self::new(
            2.0 * a.sinh() * b.cos() / d,
            -2.0 * a.cosh() * b.sin() / d,
        )
    }

    // ========================================================================
    // Inverse Functions
    // ========================================================================

    pub fn arcsin(&self) -> Self {
        if self.is_infinite() {
            return Self::infinity();
        }

        let (a, b) = (self.re, self.im);
        let (aa, bb) = (a * a, b * b);
        let root = ((aa + bb - 1.0).powi(2) + 4.0 * bb).sqrt();

        Self::new(
            signed_unit(a) / 2.0 * (root - (aa + bb)).acos(),
            signed_unit(b) / 2.0 * (root + (aa + bb)).acosh(),
        )
    }

    /// `π/2 - arcsin(z)`
    pub fn arccos(&self) -> Self {
        Self::from_real(FRAC_PI_2).minus(&self.arcsin())
    }

    /// `arctan(0) = 0`, keeping the sign of the zero.
    pub fn arctan(&self) -> Self {
        if self.is_zero() {
            return *self;
        }

        let iz = Self::new(-self.im, self.re);
        let one = Self::one();
        let quotient = one.plus(&iz).divide(&one.minus(&iz));
        let mut result = Self::new(0.0, -0.5).times(&quotient.ln());

        // Points on the negative-zero imaginary axis outside [0, 1]
        if native::is_neg_zero(self.re)
            && !result.is_infinite()
            && (self.im < 0.0 || self.im > 1.0)
        {
            result = Self::new(-result.re, result.im);
        }

        result
    }

    pub fn arccot(&self) -> Self {
        if self.is_zero() {
            return Self::new(signed_unit(self.re) * FRAC_PI_2, -self.im);
        }
        self.inverse().arctan()
    }

    /// `arcsec(0) = ∞`
    pub fn arcsec(&self) -> Self {
        if self.is_zero() {
            return Self::infinity();
        }
        self.inverse().arccos()
    }

    /// `arccsc(0) = ∞`
    pub fn arccsc(&self) -> Self {
        if self.is_zero() {
            return Self::infinity();
        }
        self.inverse().arcsin()
    }

    /// `artanh(0) = 0`, `artanh(∞) = NaN`.
    pub fn artanh(&self) -> Self {
        if self.is_zero() {
            return *self;
        }
        if self.is_infinite() {
            return Self::nan();
        }

        let one = Self::one();
        let difference = one.plus(self).ln().minus(&one.minus(self).ln());
        Self::from_real(0.5).times(&difference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{E, FRAC_PI_6, PI};

    const TOL: f64 = 1e-12;

    fn c(re: f64, im: f64) -> Complex {
        Complex::new(re, im)
    }

    fn close(a: Complex, b: Complex) -> bool {
        a.is_equal_within(&b, TOL)
    }

    #[test]
    fn test_exp_and_ln() {
        assert!(close(c(0.0, PI).exp(), c(-1.0, 0.0)));
        assert!(close(c(1.0, 0.0).exp(), c(E, 0.0)));
        assert!(close(c(-1.0, 0.0).ln(), c(0.0, PI)));
        assert!(Complex::zero().ln().is_infinite());
        assert!(Complex::infinity().ln().is_infinite());
    }

    #[test]
    fn test_sqrt_and_sign() {
        assert!(close(c(-4.0, 0.0).sqrt(), c(0.0, 2.0)));
        assert!(close(c(0.0, 2.0).sqrt(), c(1.0, 1.0)));
        assert!(close(c(3.0, 4.0).sign(), c(0.6, 0.8)));
        assert!(Complex::infinity().sign().is_nan());
        assert_eq!(Complex::zero().sign(), Complex::zero());
    }

    #[test]
    fn test_trig_identities() {
        let z = c(0.7, -0.3);
        let s = z.sin();
        let co = z.cos();
        assert!(close(s.times(&s).plus(&co.times(&co)), Complex::one()));
        assert!(close(z.tan(), s.divide(&co)));
        assert!(close(z.cot(), co.divide(&s)));
        assert!(close(z.sec(), co.inverse()));
        assert!(close(z.csc(), s.inverse()));
    }

    #[test]
    fn test_hyperbolic_identities() {
        let z = c(0.4, 1.1);
        let sh = z.sinh();
        let ch = z.cosh();
        assert!(close(ch.times(&ch).minus(&sh.times(&sh)), Complex::one()));
        assert!(close(z.tanh(), sh.divide(&ch)));
        assert!(close(z.coth(), ch.divide(&sh)));
        assert!(close(z.sech(), ch.inverse()));
        assert!(close(z.csch(), sh.inverse()));
    }

    #[test]
    fn test_poles_at_zero() {
        let zero = Complex::zero();
        assert!(zero.cot().is_infinite());
        assert!(zero.csc().is_infinite());
        assert!(zero.coth().is_infinite());
        assert!(zero.csch().is_infinite());
        assert!(zero.arcsec().is_infinite());
        assert!(zero.arccsc().is_infinite());
    }

    #[test]
    fn test_inverse_functions() {
        assert!(close(c(0.5, 0.0).arcsin(), c(FRAC_PI_6, 0.0)));
        assert!(close(c(0.5, 0.0).arccos(), c(PI / 3.0, 0.0)));
        assert!(close(c(1.0, 0.0).arctan(), c(PI / 4.0, 0.0)));
        assert!(close(c(1.0, 0.0).arccot(), c(PI / 4.0, 0.0)));
        assert!(close(c(2.0, 0.0).arcsec(), c(PI / 3.0, 0.0)));
        assert!(close(c(2.0, 0.0).arccsc(), c(FRAC_PI_6, 0.0)));
        assert!(close(c(0.5, 0.0).artanh(), c(0.5f64.atanh(), 0.0)));
    }

    #[test]
    fn test_inverse_round_trips() {
        let z = c(0.3, 0.2);
        assert!(close(z.arcsin().sin(), z));
        assert!(close(z.arctan().tan(), z));
        assert!(close(z.artanh().tanh(), z));
    }

    #[test]
    fn test_inverse_special_values() {
        assert_eq!(Complex::zero().arctan(), Complex::zero());
        assert_eq!(Complex::zero().artanh(), Complex::zero());
        assert!(Complex::infinity().artanh().is_nan());
        assert!(Complex::infinity().arcsin().is_infinite());
        assert!(close(Complex::zero().arccot(), c(FRAC_PI_2, 0.0)));
        assert!(close(c(-0.0, 0.0).arccot(), c(-FRAC_PI_2, 0.0)));
    }
}
