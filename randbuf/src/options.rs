//! Configuration builder for pattern pipelines.

use std::num::NonZeroUsize;

const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;

/// Configuration for writing and verifying pattern streams.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternOptions {
    seed: u64,
    chunk_size: NonZeroUsize,
}

impl Default for PatternOptions {
    fn default() -> Self {
        Self {
            seed: 0,
            chunk_size: NonZeroUsize::new(DEFAULT_CHUNK_SIZE).unwrap_or(NonZeroUsize::MIN),
        }
    }
}

impl PatternOptions {
    /// Sets the seed the pattern is derived from.
    ///
    /// Writing and verifying must use the same seed; seed `0` is as valid and
    /// as deterministic as any other.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the size of the intermediate buffer used for each I/O call.
    ///
    /// The chunk size only affects how the stream is split into reads and
    /// writes; the bytes on the wire are the same for every chunk size.
    #[must_use]
    pub fn with_chunk_size(mut self, size: NonZeroUsize) -> Self {
        self.chunk_size = size;
        self
    }

    /// Returns the configured seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the intermediate buffer capacity in bytes.
    pub fn chunk_capacity(&self) -> usize {
        self.chunk_size.get()
    }
}
