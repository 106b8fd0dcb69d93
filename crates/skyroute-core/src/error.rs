//! Typed errors raised while reading route data.

/// A route line that could not be turned into a [`crate::ingest::RouteRecord`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    /// The line did not split into the expected number of fields.
    #[error("expected {expected} fields, found {found}")]
    FieldCount { found: usize, expected: usize },

    /// A quoted field was still open at the end of the line.
    #[error("unterminated quoted field")]
    UnterminatedQuote,

    /// An airport code field was blank.
    #[error("{field} code is empty")]
    EmptyCode { field: &'static str },

    /// A numeric field did not parse as a non-negative integer.
    #[error("invalid {field} '{raw}': expected a non-negative integer")]
    InvalidNumber { field: &'static str, raw: String },
}
