//! Unified error types for the domain layer
//!
//! The calculator itself never fails (invalid numeric input degrades to zero);
//! these errors cover token and identifier parsing.

use thiserror::Error;

use crate::value_objects::DiceParseError;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Invalid ID format
    #[error("Invalid ID format: {0}")]
    InvalidId(String),

    /// Parse error (for vocabulary tokens and value objects)
    #[error("Parse error: {0}")]
    Parse(String),

    /// Entry position outside the collection
    #[error("Index {index} out of bounds for {collection} (len {len})")]
    IndexOutOfBounds {
        collection: &'static str,
        index: usize,
        len: usize,
    },
}

impl DomainError {
    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// Use this in `FromStr` implementations when the input string
    /// doesn't match any known token:
    ///
    /// ```ignore
    /// impl FromStr for Skill {
    ///     type Err = DomainError;
    ///     fn from_str(s: &str) -> Result<Self, Self::Err> {
    ///         Self::from_key(s).ok_or_else(|| DomainError::parse(format!("Unknown skill: {}", s)))
    ///     }
    /// }
    /// ```
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create an invalid ID error
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    /// Create an out-of-bounds error for positional collection access
    pub fn index_out_of_bounds(collection: &'static str, index: usize, len: usize) -> Self {
        Self::IndexOutOfBounds {
            collection,
            index,
            len,
        }
    }
}

impl From<DiceParseError> for DomainError {
    fn from(err: DiceParseError) -> Self {
        Self::Parse(err.to_string())
    }
}
