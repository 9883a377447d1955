use std::convert::Infallible;
use std::fmt;
use std::num::TryFromIntError;

use thiserror::Error;

/// Canonical result for every seqops operator.
pub type Result<T> = std::result::Result<T, Error>;

/// How many elements matched when exactly one was required.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    None,
    Many,
}

impl fmt::Display for Cardinality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cardinality::None => f.write_str("no matching element"),
            Cardinality::Many => f.write_str("more than one matching element"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// No qualifying element exists (also used for out-of-range indices).
    #[error("{op}: sequence contains no elements")]
    EmptySequence { op: &'static str },

    #[error("{op}: expected exactly one matching element, found {found}")]
    CardinalityViolation {
        op: &'static str,
        found: Cardinality,
    },

    #[error("cannot convert {from} to {to}")]
    ConversionFailure {
        from: &'static str,
        to: &'static str,
    },

    // Raised while materializing; the source is not pulled past `limit + 1`.
    #[error("{op}: materialized buffer exceeded {limit} elements")]
    BufferLimit { op: &'static str, limit: usize },
}

impl Error {
    pub fn empty(op: &'static str) -> Self {
        Error::EmptySequence { op }
    }

    pub fn cardinality(op: &'static str, found: Cardinality) -> Self {
        Error::CardinalityViolation { op, found }
    }

    /// True for the conditions the `-OrDefault` operators swallow.
    pub fn is_empty_sequence(&self) -> bool {
        matches!(self, Error::EmptySequence { .. })
    }
}

impl From<Infallible> for Error {
    fn from(e: Infallible) -> Self {
        match e {}
    }
}

// Primitive narrowing casts (`i64` -> `u8`, ...) go through `TryFrom`.
impl From<TryFromIntError> for Error {
    fn from(_: TryFromIntError) -> Self {
        Error::ConversionFailure {
            from: "integer",
            to: "narrower integer",
        }
    }
}
