//! Asynchronous pattern write and verify pipeline.

use std::io::ErrorKind;

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::config::{StreamSummary, VerifySummary};
use crate::error::{Error, Result};
use crate::options::PatternOptions;
use crate::pattern::PatternStream;

use super::next_chunk_len;

/// Writes `len` bytes of the pattern for the configured seed into `writer`
/// asynchronously.
///
/// # Parameters
///
/// * `writer` - Output destination implementing [`AsyncWrite`] + [`Unpin`] traits
/// * `len` - Number of pattern bytes to write
/// * `options` - Seed and chunking configuration [`PatternOptions`]
///
/// # Returns
///
/// Returns a [`StreamSummary`] with the number of bytes written.
///
/// # Errors
///
/// Returns [`Error::Io`] if writing to or flushing `writer` fails.
pub async fn write_pattern_async<W>(
    mut writer: W,
    len: u64,
    options: &PatternOptions,
) -> Result<StreamSummary>
where
    W: AsyncWrite + Unpin,
{
    let mut pattern = PatternStream::new(options.seed());
    let mut chunk = vec![0u8; options.chunk_capacity()];
    let mut remaining = len;

    while remaining > 0 {
        let take = next_chunk_len(remaining, chunk.len());
        pattern.fill(&mut chunk[..take]);
        writer.write_all(&chunk[..take]).await?;
        remaining -= take as u64;
    }

    writer.flush().await?;
    tracing::debug!(seed = options.seed(), bytes = len, "pattern written");
    Ok(StreamSummary::new(len))
}

/// Reads `len` bytes from `reader` asynchronously and checks them against the
/// pattern for the configured seed.
///
/// Reading stops at the first miscompare; nothing past `len` is ever read.
///
/// # Parameters
///
/// * `reader` - Input source implementing [`AsyncRead`] + [`Unpin`] traits
/// * `len` - Number of bytes expected in the stream
/// * `options` - Seed and chunking configuration [`PatternOptions`]
///
/// # Returns
///
/// Returns a [`VerifySummary`] whose `miscompare` holds the offset of the
/// start of the first mismatching word, or `None` if all `len` bytes matched.
///
/// # Errors
///
/// This function will return an error if:
///
/// - Reading from `reader` fails ([`Error::Io`])
/// - The reader ends before `len` bytes ([`Error::Truncated`])
pub async fn verify_pattern_async<R>(
    mut reader: R,
    len: u64,
    options: &PatternOptions,
) -> Result<VerifySummary>
where
    R: AsyncRead + Unpin,
{
    let mut pattern = PatternStream::new(options.seed());
    let mut chunk = vec![0u8; options.chunk_capacity()];
    let mut total = 0u64;

    while total < len {
        let want = next_chunk_len(len - total, chunk.len());
        let read = match reader.read(&mut chunk[..want]).await {
            Ok(read) => read,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => return Err(err.into()),
        };
        if read == 0 {
            return Err(Error::Truncated {
                expected: len,
                actual: total,
            });
        }

        total += read as u64;
        if let Some(offset) = pattern.verify(&chunk[..read]) {
            tracing::debug!(seed = options.seed(), offset, bytes = total, "pattern verify failed");
            return Ok(VerifySummary::new(total, Some(offset)));
        }
    }

    tracing::debug!(seed = options.seed(), bytes = total, "pattern verified");
    Ok(VerifySummary::new(total, None))
}
