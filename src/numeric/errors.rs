// ============================================================================
// Numeric Errors
// Error types for tower arithmetic and coercion
// ============================================================================

use crate::dispatch::Rank;
use std::fmt;

/// Errors that can occur while constructing or combining numeric values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Result does not fit the requested native representation
    Overflow,
    /// Attempted integer division by zero
    DivisionByZero,
    /// Rational constructed with a zero denominator
    ZeroDenominator,
    /// Conversion would lose significant digits
    PrecisionLoss,
    /// Input string or value is invalid
    InvalidInput,
    /// Value cannot be represented at the requested rank
    Coercion { from: Rank, to: Rank },
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: result exceeded native range")
            },
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::ZeroDenominator => write!(f, "the denominator cannot be zero"),
            NumericError::PrecisionLoss => write!(
                f,
                "precision loss: conversion would lose significant digits"
            ),
            NumericError::InvalidInput => write!(f, "invalid input: could not parse value"),
            NumericError::Coercion { from, to } => {
                write!(f, "cannot coerce {} to {}", from.tag(), to.tag())
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
