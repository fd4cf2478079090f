//! Deterministic byte patterns derived from a seed.
//!
//! The pattern for a seed is the sequence of 32-bit words drawn from an
//! [`Xrand`] stream created with that seed, each stored in native byte order.
//! A buffer whose length is not a multiple of [`WORD_SIZE`] ends with the
//! leading bytes of one extra word.

use xrand::Xrand;

use crate::config::WORD_SIZE;


/// Overwrites `buf` with the pattern for `seed`.
///
/// Every byte of `buf` is written. An empty buffer is left untouched and no
/// stream is created.
///
/// # Parameters
///
/// * `buf` - Destination buffer
/// * `seed` - Seed the pattern is derived from
pub fn randomize_buffer(buf: &mut [u8], seed: u64) {
    if buf.is_empty() {
        return;
    }

    let mut stream = Xrand::new(seed);
    let mut slots = buf.chunks_exact_mut(WORD_SIZE);
    for slot in &mut slots {
        slot.copy_from_slice(&stream.next_u32().to_ne_bytes());
    }

    let tail = slots.into_remainder();
    if !tail.is_empty() {
        let word = stream.next_u32().to_ne_bytes();
        tail.copy_from_slice(&word[..tail.len()]);
    }
}

/// Checks `buf` against the pattern for `seed`.
///
/// # Parameters
///
/// * `buf` - Buffer previously produced by [`randomize_buffer`]
/// * `seed` - Seed the buffer is expected to have been filled with
///
/// # Returns
///
/// * `None` if every byte matches (always the case for an empty buffer)
/// * `Some(offset)` with the offset of the start of the first mismatching
///   word. For a mismatch inside the trailing partial word the offset is the
///   start of that partial word, so the corruption begins no earlier than the
///   reported offset.
pub fn validate_random_buffer(buf: &[u8], seed: u64) -> Option<usize> {
    if buf.is_empty() {
        return None;
    }

    let mut stream = Xrand::new(seed);
    let mut slots = buf.chunks_exact(WORD_SIZE);
    for (index, slot) in slots.by_ref().enumerate() {
        let expected = stream.next_u32().to_ne_bytes();
        if slot != expected {
            return Some(report_miscompare(seed, index * WORD_SIZE, buf.len()));
        }
    }

    let tail = slots.remainder();
    if !tail.is_empty() {
        let expected = stream.next_u32().to_ne_bytes();
        if tail != &expected[..tail.len()] {
            return Some(report_miscompare(seed, buf.len() - tail.len(), buf.len()));
        }
    }

    None
}

fn report_miscompare(seed: u64, offset: usize, len: usize) -> usize {
    tracing::debug!(seed, offset, len, "random buffer miscompare");
    offset
}

/// Incremental form of [`randomize_buffer`] and [`validate_random_buffer`].
///
/// A `PatternStream` remembers how far into the pattern it is, so a pattern
/// can be produced or checked in chunks of any size. Splitting a buffer into
/// chunks never changes the bytes produced or the offsets reported.
#[derive(Debug, Clone)]
pub struct PatternStream {
    seed: u64,
    stream: Xrand,
    word: [u8; WORD_SIZE],
    position: u64,
}

impl PatternStream {
    /// Creates a stream positioned at the start of the pattern for `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            stream: Xrand::new(seed),
            word: [0; WORD_SIZE],
            position: 0,
        }
    }

    /// Seed the pattern is derived from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of pattern bytes produced or checked so far.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Writes the next `out.len()` pattern bytes into `out`.
    pub fn fill(&mut self, out: &mut [u8]) {
        let mut done = 0;
        while done < out.len() {
            let (lane, take) = self.advance(out.len() - done);
            out[done..done + take].copy_from_slice(&self.word[lane..lane + take]);
            done += take;
        }
    }

    /// Checks `data` against the next `data.len()` pattern bytes.
    ///
    /// The whole chunk is always consumed, so later calls stay aligned with
    /// the pattern even after a miscompare.
    ///
    /// # Returns
    ///
    /// The absolute offset of the start of the word holding the first
    /// mismatching byte, or `None` if the chunk matches.
    pub fn verify(&mut self, data: &[u8]) -> Option<u64> {
        let mut done = 0;
        let mut miscompare = None;
        while done < data.len() {
            let word_start = self.position - self.lane() as u64;
            let (lane, take) = self.advance(data.len() - done);
            if miscompare.is_none() && data[done..done + take] != self.word[lane..lane + take] {
                tracing::debug!(seed = self.seed, offset = word_start, "pattern stream miscompare");
                miscompare = Some(word_start);
            }
            done += take;
        }
        miscompare
    }

    #[allow(clippy::cast_possible_truncation)]
    fn lane(&self) -> usize {
        (self.position % WORD_SIZE as u64) as usize
    }

    /// Moves over at most `wanted` bytes of the current word, drawing a new
    /// word at each word boundary. Returns the starting lane and byte count.
    fn advance(&mut self, wanted: usize) -> (usize, usize) {
        let lane = self.lane();
        if lane == 0 {
            self.word = self.stream.next_u32().to_ne_bytes();
        }
        let take = wanted.min(WORD_SIZE - lane);
        self.position += take as u64;
        (lane, take)
    }
}
