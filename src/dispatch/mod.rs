// ============================================================================
// Coercion Dispatcher
// Rank table, closed value variant and generic operations
// ============================================================================
//
// This module provides:
// - Rank: Number < Integer < Rational < Complex
// - Value: one variant per representation
// - Generic operations that promote mixed operands before dispatching
//
// Design principles:
// - Dispatch is a match over variant pairs
// - Promotion never silently drops information below Complex
// - Operands are never modified

mod ops;
mod rank;
mod value;

pub use ops::{
    abs, coerce, compare, compare_numeric, divide, inverse, is_equal, is_equal_within, minus,
    modulo, negative, plus, pow, product, sum, times,
};
pub(crate) use ops::is_complex_zero;
pub use rank::Rank;
pub use value::Value;
