//! Shared constants and result types for pattern generation and validation.

/// Size in bytes of one pattern word.
pub const WORD_SIZE: usize = std::mem::size_of::<u32>();

/// Raw "no miscompare" value.
///
/// Every real offset is non-negative, so `-1` can never be confused with one.
pub const NO_MISCOMPARE: i64 = -1;

/// Converts a validation result to its raw sentinel form.
///
/// # Parameters
///
/// * `miscompare` - Result of [`crate::validate_random_buffer`] or a
///   [`VerifySummary::miscompare`] value
///
/// # Returns
///
/// [`NO_MISCOMPARE`] when the data matched, otherwise the offset of the first
/// mismatching word.
pub fn miscompare_to_raw<T: TryInto<i64>>(miscompare: Option<T>) -> i64 {
    match miscompare {
        None => NO_MISCOMPARE,
        // Offsets of in-memory buffers and streams never exceed `i64::MAX`.
        Some(offset) => offset.try_into().unwrap_or(i64::MAX),
    }
}

/// Statistical summary of a completed pattern write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamSummary {
    /// Total number of pattern bytes written to the destination.
    pub bytes_written: u64,
}

impl StreamSummary {
    pub(crate) const fn new(bytes_written: u64) -> Self {
        Self { bytes_written }
    }
}

/// Outcome of verifying a stream against the pattern for a seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerifySummary {
    /// Total number of bytes read from the source before verification stopped.
    pub bytes_read: u64,

    /// Offset of the start of the first mismatching word, if any.
    pub miscompare: Option<u64>,
}

impl VerifySummary {
    pub(crate) const fn new(bytes_read: u64, miscompare: Option<u64>) -> Self {
        Self {
            bytes_read,
            miscompare,
        }
    }

    /// Whether every verified byte matched the pattern.
    pub const fn is_match(&self) -> bool {
        self.miscompare.is_none()
    }

    /// The miscompare in its raw sentinel form (see [`NO_MISCOMPARE`]).
    pub fn raw_miscompare(&self) -> i64 {
        miscompare_to_raw(self.miscompare)
    }
}
