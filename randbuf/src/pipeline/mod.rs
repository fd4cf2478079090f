//! Pipelines that stream a seed's pattern through writers and readers.

#[cfg(feature = "async")]
mod r#async;
mod sync;

#[cfg(feature = "async")]
pub use r#async::{verify_pattern_async, write_pattern_async};
pub use sync::{verify_pattern, write_pattern};

/// Number of bytes to move in the next I/O call.
fn next_chunk_len(remaining: u64, capacity: usize) -> usize {
    usize::try_from(remaining).map_or(capacity, |remaining| remaining.min(capacity))
}
