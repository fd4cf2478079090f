//! Error types for pattern pipelines and argument checks.

use std::io;

use thiserror::Error;

/// Result alias using the crate-level [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

/// Failure modes of the fallible operations in this crate.
///
/// A miscompare found while validating is not an error; it is reported as an
/// ordinary value by [`crate::validate_random_buffer`] and
/// [`crate::VerifySummary`].
#[derive(Debug, Error)]
pub enum Error {
    /// I/O failure while reading or writing a pattern stream.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Inclusive bounds with the lower bound above the upper bound.
    #[error("invalid range: min {min} is greater than max {max}")]
    InvalidRange {
        /// Requested lower bound
        min: u32,
        /// Requested upper bound
        max: u32,
    },

    /// The range cannot be split into `count` sub-ranges of width at least one.
    #[error("range [{min}, {max}] is too narrow for {count} unique values")]
    RangeTooNarrow {
        /// Requested lower bound
        min: u32,
        /// Requested upper bound
        max: u32,
        /// Number of unique values requested
        count: usize,
    },

    /// The reader ended before the expected number of pattern bytes.
    #[error("pattern stream truncated: expected {expected} bytes, got {actual}")]
    Truncated {
        /// Number of bytes the caller asked to verify
        expected: u64,
        /// Number of bytes actually read
        actual: u64,
    },
}
