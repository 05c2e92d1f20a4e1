// ============================================================================
// Rank Table
// Total order over representations used to pick a promotion target
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Representation rank, lowest first.
///
/// Binary operations on operands of different rank promote the lower one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Rank {
    Number,
    Integer,
    Rational,
    Complex,
}

impl Rank {
    /// All ranks in ascending order
    pub const ALL: [Rank; 4] = [Rank::Number, Rank::Integer, Rank::Rational, Rank::Complex];

    /// Type tag, also used as the primary key of the value sort order.
    pub const fn tag(self) -> &'static str {
        match self {
            Rank::Number => "number",
            Rank::Integer => "integer",
            Rank::Rational => "rational",
            Rank::Complex => "complex",
        }
    }

    /// The next rank up, if any.
    pub const fn next(self) -> Option<Rank> {
        match self {
            Rank::Number => Some(Rank::Integer),
            Rank::Integer => Some(Rank::Rational),
            Rank::Rational => Some(Rank::Complex),
            Rank::Complex => None,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}
