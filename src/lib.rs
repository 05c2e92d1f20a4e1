// ============================================================================
// Numeric Tower Library
// Exact mixed-precision arithmetic across integers, rationals and complexes
// ============================================================================

//! # Numeric Tower
//!
//! Arbitrary-precision integers, rationals, complex numbers and native
//! doubles that interoperate as one algebra.
//!
//! ## Features
//!
//! - **BigInteger** over 2^26-radix limbs with schoolbook long division
//! - **Rational** numbers whose parts are exact integers or native numbers
//! - **Complex** numbers with a single point at infinity and the elementary
//!   function family
//! - **Coercion dispatcher** that promotes mixed operands to a common rank
//!   without silent loss
//! - **Error channel** for subscribing to errors and warnings per session
//!
//! ## Example
//!
//! ```rust
//! use numeric_tower::prelude::*;
//!
//! let a: BigInteger = "123456789".parse().unwrap();
//! let b: BigInteger = "987654321".parse().unwrap();
//! assert_eq!(a.times(&b).to_string(), "121932631112635269");
//!
//! // Mixed ranks are promoted before dispatch
//! let half = Value::Rational(Rational::new(1, 2).unwrap());
//! let one = Value::Complex(Complex::new(1.0, 0.0));
//! let sum = dispatch::plus(&half, &one).unwrap();
//! assert_eq!(sum, Value::Complex(Complex::new(1.5, 0.0)));
//! ```

pub mod complex;
pub mod dispatch;
pub mod integer;
pub mod interfaces;
pub mod numeric;
pub mod rational;
pub mod session;

pub use complex::Complex;
pub use integer::{BigInteger, Sign};
pub use rational::{Rational, Term};
pub use session::{Session, TowerConfig};

// Re-exports for convenience
pub mod prelude {
    pub use crate::complex::Complex;
    pub use crate::dispatch::{self, Rank, Value};
    pub use crate::integer::{BigInteger, Sign};
    pub use crate::interfaces::{
        ChannelErrorHandler, ErrorChannel, ErrorHandler, EventKind, LoggingErrorHandler,
        NoOpErrorHandler, Notation, NumericEvent, SubscriptionId,
    };
    pub use crate::numeric::{NumericError, NumericResult};
    pub use crate::rational::{Rational, Term};
    pub use crate::session::{Session, TowerConfig};
}

/// Install a `tracing` subscriber that prints events at `level` and above.
///
/// Returns an error if a global subscriber is already set.
#[cfg(feature = "logging")]
pub fn init_logging(
    level: tracing::Level,
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    tracing_subscriber::fmt().with_max_level(level).try_init()
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use crossbeam::channel::unbounded;
    use std::sync::Arc;

    #[test]
    fn test_big_multiplication() {
        let a: BigInteger = "123456789".parse().unwrap();
        let b: BigInteger = "987654321".parse().unwrap();
        assert_eq!(a.times(&b).to_string(), "121932631112635269");
    }

    #[test]
    fn test_floor_divrem() {
        let (q, r) = BigInteger::from(-7).divrem(&BigInteger::from(2)).unwrap();
        assert_eq!(q, BigInteger::from(-4));
        assert_eq!(r, BigInteger::from(1));
    }

    #[test]
    fn test_rational_reduction() {
        let r = Rational::new(2, 4).unwrap().reduce();
        assert_eq!(r.to_string(), "1/2");
    }

    #[test]
    fn test_complex_modulus() {
        assert_eq!(Complex::new(3.0, 4.0).abs(), 5.0);
    }

    #[test]
    fn test_complex_infinity_algebra() {
        let inf = Complex::infinity();
        assert_eq!(Complex::new(1.0, 2.0).times(&inf), inf);
        assert_eq!(Complex::zero().inverse(), inf);
        assert_eq!(inf.inverse(), Complex::zero());
    }

    #[test]
    fn test_coercion_consistency() {
        let exact = dispatch::plus(&Value::from(3), &Value::from(2.0)).unwrap();
        let native = dispatch::plus(&Value::from(3.0), &Value::from(2.0)).unwrap();
        assert!(dispatch::is_equal(&exact, &native));

        let half = Value::Rational(Rational::new(1, 2).unwrap());
        let one = Value::Complex(Complex::new(1.0, 0.0));
        assert_eq!(
            dispatch::plus(&half, &one).unwrap(),
            Value::Complex(Complex::new(1.5, 0.0))
        );
    }

    #[test]
    fn test_zero_denominator_through_session() {
        let session = Session::new();
        let (tx, rx) = unbounded();
        session.on(EventKind::Error, Arc::new(ChannelErrorHandler::new(tx)));

        let result = session.rational(2, 0);
        assert_eq!(result, Err(NumericError::ZeroDenominator));

        let event = rx.try_recv().unwrap();
        assert_eq!(event.kind, EventKind::Error);
        assert_eq!(event.message, "the denominator cannot be zero");
    }

    #[test]
    fn test_mixed_pipeline() {
        let session = Session::new();

        // (2^64 / 3) + 0.5, all exact until the complex step
        let big = session.integer("18446744073709551616").unwrap();
        let third = session.divide(&big, &Value::from(3)).unwrap();
        assert_eq!(third.rank(), Rank::Rational);

        let shifted = session.plus(&third, &Value::from(0.5)).unwrap();
        assert_eq!(shifted.rank(), Rank::Rational);

        let rotated = session
            .times(&shifted, &Value::Complex(Complex::new(0.0, 1.0)))
            .unwrap();
        assert_eq!(rotated.rank(), Rank::Complex);
        assert_eq!(rotated.to_complex().re(), 0.0);
    }

    #[test]
    fn test_notation_contract() {
        let values = [
            Value::from(-12),
            Value::Rational(Rational::new(1, 2).unwrap()),
            Value::Complex(Complex::new(1.0, -1.0)),
        ];
        let content: Vec<_> = values.iter().map(|v| v.to_content_mathml()).collect();
        assert_eq!(content[0], "<cn type=\"integer\" base=\"10\">-12</cn>");
        assert_eq!(content[1], "<cn type=\"rational\">1<sep/>2</cn>");
        assert!(content[2].starts_with("<apply><plus />"));
        assert_eq!(values[2].to_string(), "1-1i");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let values = vec![
            Value::from(2.5),
            Value::from(BigInteger::from(-1234567890123456789i64)),
            Value::Rational(Rational::new(3, 4).unwrap()),
            Value::Complex(Complex::new(1.0, -2.0)),
        ];

        let json = serde_json::to_string(&values).unwrap();
        let back: Vec<Value> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, values);
    }
}
