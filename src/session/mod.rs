// ============================================================================
// Session
// Computation context owning a configuration and an error channel
// ============================================================================

mod config;

pub use config::TowerConfig;

use crate::dispatch::{self, Rank, Value};
use crate::integer::BigInteger;
use crate::interfaces::{ErrorChannel, ErrorHandler, EventKind, SubscriptionId};
use crate::numeric::{NumericError, NumericResult};
use crate::rational::{Rational, Term};
use std::cmp::Ordering;
use std::sync::Arc;

/// Entry point for computations that report failures to subscribers.
///
/// Every operation returns the same `Result` as the free function in
/// [`crate::dispatch`]; on `Err` the session also fires an error event.
/// Recoverable anomalies (a sentinel was produced) fire warnings when
/// `report_warnings` is set.
///
/// # Example
/// ```
/// use numeric_tower::prelude::*;
/// use crossbeam::channel::unbounded;
/// use std::sync::Arc;
///
/// let session = Session::new();
/// let (tx, rx) = unbounded();
/// session.on(EventKind::Error, Arc::new(ChannelErrorHandler::new(tx)));
///
/// assert!(session.rational(2, 0).is_err());
/// assert_eq!(rx.try_recv().unwrap().message, "the denominator cannot be zero");
/// ```
pub struct Session {
    config: TowerConfig,
    channel: Arc<ErrorChannel>,
}

impl Session {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Session with the default configuration
    pub fn new() -> Self {
        Self {
            config: TowerConfig::default(),
            channel: Arc::new(ErrorChannel::new()),
        }
    }

    /// Session with a validated configuration
    pub fn with_config(config: TowerConfig) -> Result<Self, String> {
        config.validate()?;
        Ok(Self {
            config,
            channel: Arc::new(ErrorChannel::new()),
        })
    }

    /// Session sharing an existing error channel
    pub fn with_channel(config: TowerConfig, channel: Arc<ErrorChannel>) -> Result<Self, String> {
        config.validate()?;
        Ok(Self { config, channel })
    }

    #[inline]
    pub fn config(&self) -> &TowerConfig {
        &self.config
    }

    #[inline]
    pub fn channel(&self) -> &Arc<ErrorChannel> {
        &self.channel
    }

    // ========================================================================
    // Subscriptions
    // ========================================================================

    pub fn on(&self, kind: EventKind, handler: Arc<dyn ErrorHandler>) -> SubscriptionId {
        self.channel.on(kind, handler)
    }

    pub fn off(&self, id: SubscriptionId) -> bool {
        self.channel.off(id)
    }

    // ========================================================================
    // Reporting
    // ========================================================================

    fn report<T>(&self, result: NumericResult<T>, method: &'static str) -> NumericResult<T> {
        if let Err(err) = &result {
            tracing::trace!(method, error = %err, "numeric operation failed");
            self.channel.error(err.to_string(), method);
        }
        result
    }

    fn warn(&self, message: impl Into<String>, method: &'static str) {
        if self.config.report_warnings {
            self.channel.warning(message, method);
        }
    }

    // ========================================================================
    // Construction Helpers
    // ========================================================================

    /// Parse an integer in the configured default radix.
    pub fn integer(&self, digits: &str) -> NumericResult<Value> {
        self.report(
            BigInteger::from_str_radix(digits, self.config.default_radix).map(Value::Integer),
            "BigInteger::from_str_radix",
        )
    }

    /// Build `numerator / denominator`.
    pub fn rational(
        &self,
        numerator: impl Into<Term>,
        denominator: impl Into<Term>,
    ) -> NumericResult<Value> {
        self.report(
            Rational::new(numerator, denominator).map(Value::Rational),
            "Rational::new",
        )
    }

    /// Value at `rank`, or `Number(NaN)` with a warning when no exact
    /// representation exists.
    pub fn coerce(&self, value: &Value, rank: Rank) -> Value {
        match value.coerce_to(rank) {
            Ok(coerced) => coerced,
            Err(err) => {
                self.warn(err.to_string(), "Value::coerce_to");
                Value::Number(f64::NAN)
            },
        }
    }

    // ========================================================================
    // Generic Operations
    // ========================================================================

    pub fn plus(&self, a: &Value, b: &Value) -> NumericResult<Value> {
        self.report(dispatch::plus(a, b), "plus")
    }

    pub fn minus(&self, a: &Value, b: &Value) -> NumericResult<Value> {
        self.report(dispatch::minus(a, b), "minus")
    }

    pub fn times(&self, a: &Value, b: &Value) -> NumericResult<Value> {
        self.report(dispatch::times(a, b), "times")
    }

    pub fn divide(&self, a: &Value, b: &Value) -> NumericResult<Value> {
        let result = self.report(dispatch::divide(a, b), "divide");
        if let Ok(Value::Complex(z)) = &result {
            if z.is_infinite() && b.is_zero() {
                self.warn("division by zero produced complex infinity", "divide");
            }
        }
        result
    }

    pub fn pow(&self, a: &Value, b: &Value) -> NumericResult<Value> {
        self.report(dispatch::pow(a, b), "pow")
    }

    pub fn modulo(&self, a: &Value, b: &Value) -> NumericResult<Value> {
        self.report(dispatch::modulo(a, b), "modulo")
    }

    pub fn sum(&self, values: &[Value]) -> NumericResult<Value> {
        self.report(dispatch::sum(values), "sum")
    }

    pub fn product(&self, values: &[Value]) -> NumericResult<Value> {
        self.report(dispatch::product(values), "product")
    }

    pub fn negative(&self, a: &Value) -> Value {
        dispatch::negative(a)
    }

    pub fn abs(&self, a: &Value) -> Value {
        dispatch::abs(a)
    }

    /// Multiplicative inverse. Complex zero inverts to complex infinity with
    /// a warning.
    pub fn inverse(&self, a: &Value) -> NumericResult<Value> {
        if dispatch::is_complex_zero(a) {
            self.warn("inverse of complex zero is complex infinity", "inverse");
        }
        self.report(dispatch::inverse(a), "inverse")
    }

    pub fn compare(&self, a: &Value, b: &Value) -> Ordering {
        dispatch::compare(a, b)
    }

    pub fn compare_numeric(&self, a: &Value, b: &Value) -> Ordering {
        dispatch::compare_numeric(a, b)
    }

    /// Equality using the configured tolerance.
    pub fn is_equal(&self, a: &Value, b: &Value) -> bool {
        dispatch::is_equal_within(a, b, self.config.equality_tolerance)
    }

    /// Integer division with remainder, reported like the other operations.
    pub fn divrem(&self, a: &BigInteger, b: &BigInteger) -> NumericResult<(BigInteger, BigInteger)> {
        self.report(a.divrem(b), "BigInteger::divrem")
    }

    /// Exact `Decimal` view of a value, for API boundaries.
    pub fn to_decimal(&self, value: &Value) -> NumericResult<rust_decimal::Decimal> {
        let result = match value {
            Value::Integer(n) => n.to_decimal(),
            Value::Rational(r) => r.to_decimal(),
            Value::Number(x) => {
                rust_decimal::Decimal::try_from(*x).map_err(|_| NumericError::Overflow)
            },
            Value::Complex(_) => match value.coerce_to(Rank::Number) {
                Ok(Value::Number(x)) => {
                    rust_decimal::Decimal::try_from(x).map_err(|_| NumericError::Overflow)
                },
                Ok(_) => Err(NumericError::InvalidInput),
                Err(err) => Err(err),
            },
        };
        self.report(result, "to_decimal")
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
