//! Bounded random integers, permutations and workload sequences.
//!
//! Every operation is available in two forms: as a [`SequenceRng`] method on
//! an explicit stream (any [`RngCore`], usually an [`xrand::Xrand`]), and as a
//! free function that draws from the calling thread's ambient stream (see
//! [`xrand::tls`]). Seed the ambient stream with [`xrand::tls::init`] when the
//! generated sequence has to be replayable.
//!
//! Ranges are reduced with a plain modulo of a 64-bit draw. The result is
//! slightly biased towards low values when the range width does not divide
//! 2^64; that bias is part of the contract because it keeps sequences
//! reproducible for existing seeds.

use rand_core::RngCore;
use xrand::ThreadXrand;

use crate::error::{Error, Result};

#[cfg(test)]
mod tests;

/// Sequence generation on top of any [`RngCore`] stream.
pub trait SequenceRng: RngCore {
    /// Returns a value in the inclusive range `[min, max]`.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`.
    #[allow(clippy::cast_possible_truncation)]
    fn random_u32(&mut self, min: u32, max: u32) -> u32 {
        assert!(min <= max, "{}", Error::InvalidRange { min, max });
        let width = u64::from(max - min) + 1;
        // The remainder is below `width`, which never exceeds 2^32.
        min + (self.next_u64() % width) as u32
    }

    /// Shuffles `values` in place.
    ///
    /// Walks from the last index down to 1, swapping each element with one
    /// drawn from `[0, i - 1]`. The multiset of values is always preserved.
    ///
    /// # Panics
    ///
    /// Panics if `values` holds more than 2^32 elements.
    fn permute<T>(&mut self, values: &mut [T]) {
        if values.len() < 2 {
            return;
        }

        let Ok(last) = u32::try_from(values.len() - 1) else {
            panic!("cannot permute {} values, at most 2^32 are supported", values.len());
        };

        for i in (1..=last).rev() {
            let j = self.random_u32(0, i - 1);
            values.swap(i as usize, j as usize);
        }
    }

    /// Fills `values` with independent draws from `[min, max]`, then permutes.
    ///
    /// Values may repeat.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`.
    fn random_sequence(&mut self, min: u32, max: u32, values: &mut [u32]) {
        for value in values.iter_mut() {
            *value = self.random_u32(min, max);
        }
        self.permute(values);
    }

    /// Fills `values` with pairwise-distinct draws from `[min, max]`, then
    /// permutes.
    ///
    /// The range is split into `values.len()` consecutive sub-ranges of width
    /// [`unique_stride`]; each slot draws from its own sub-range and the last
    /// one also absorbs the remainder up to `max`. An empty slice is left
    /// untouched.
    ///
    /// # Panics
    ///
    /// Panics if `min > max` or if the range is too narrow for the requested
    /// count (see [`unique_stride`]).
    #[allow(clippy::cast_possible_truncation)]
    fn unique_sequence(&mut self, min: u32, max: u32, values: &mut [u32]) {
        if values.is_empty() {
            return;
        }

        let stride = match unique_stride(min, max, values.len()) {
            Ok(stride) => stride,
            Err(err) => panic!("{err}"),
        };

        let last = values.len() - 1;
        for (slot, value) in values.iter_mut().enumerate() {
            // `slot < count <= max - min`, so neither cast nor product overflows.
            let low = min + slot as u32 * stride;
            let high = if slot == last { max } else { low + stride - 1 };
            *value = self.random_u32(low, high);
        }

        self.permute(values);
    }
}

impl<R: RngCore + ?Sized> SequenceRng for R {}

/// Computes the sub-range width used by unique sequence generation.
///
/// # Parameters
///
/// * `min` - Inclusive lower bound
/// * `max` - Inclusive upper bound
/// * `count` - Number of unique values requested
///
/// # Returns
///
/// `(max - min) / count`, which is at least one on success.
///
/// # Errors
///
/// * [`Error::InvalidRange`] if `min > max`
/// * [`Error::RangeTooNarrow`] if `count` is zero or the stride would be zero
pub fn unique_stride(min: u32, max: u32, count: usize) -> Result<u32> {
    if min > max {
        return Err(Error::InvalidRange { min, max });
    }

    let too_narrow = Error::RangeTooNarrow { min, max, count };
    let divisor = match u32::try_from(count) {
        Ok(0) | Err(_) => return Err(too_narrow),
        Ok(divisor) => divisor,
    };

    match (max - min) / divisor {
        0 => Err(too_narrow),
        stride => Ok(stride),
    }
}

/// Returns a value in `[min, max]` drawn from the thread's ambient stream.
///
/// # Panics
///
/// Panics if `min > max`.
pub fn generate_random_u32(min: u32, max: u32) -> u32 {
    ThreadXrand::new().random_u32(min, max)
}

/// Shuffles `values` with the thread's ambient stream.
///
/// See [`SequenceRng::permute`].
pub fn permute_u32_sequence(values: &mut [u32]) {
    ThreadXrand::new().permute(values);
}

/// Fills `values` from `[min, max]` with the thread's ambient stream.
///
/// See [`SequenceRng::random_sequence`].
pub fn generate_random_u32_sequence(min: u32, max: u32, values: &mut [u32]) {
    ThreadXrand::new().random_sequence(min, max, values);
}

/// Fills `values` with distinct values from `[min, max]` with the thread's
/// ambient stream.
///
/// See [`SequenceRng::unique_sequence`].
pub fn generate_random_u32_sequence_unique(min: u32, max: u32, values: &mut [u32]) {
    ThreadXrand::new().unique_sequence(min, max, values);
}
