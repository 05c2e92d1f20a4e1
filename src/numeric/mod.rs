// ============================================================================
// Numeric Module
// Error types and native-number helpers shared across the tower
// ============================================================================
//
// This module provides:
// - NumericError: Error type for construction, arithmetic and coercion
// - native: f64 comparison, tolerance and notation helpers
//
// Design principles:
// - Construction and coercion failures return Result (no panics)
// - Floating comparisons go through one tolerance
// - Signed zeros and non-finite values are handled explicitly

mod errors;
pub mod native;

pub use errors::{NumericError, NumericResult};
pub use native::EQUALITY_TOLERANCE;
