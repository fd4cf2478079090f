//! # randbuf
//!
//! Seed-reproducible synthetic data for test harnesses.
//!
//! A buffer filled by [`randomize_buffer`] can later be checked with
//! [`validate_random_buffer`] using nothing but the seed, which makes it easy
//! to detect corruption after data has travelled through storage or the
//! network. The [`sequence`] module builds random and random-unique `u32`
//! sequences for driving workloads such as randomized key orders, and the
//! [`pipeline`] module streams the same byte pattern through readers and
//! writers, synchronously or with tokio.
//!
//! ```rust
//! use randbuf::{randomize_buffer, validate_random_buffer};
//!
//! let mut buf = vec![0u8; 10];
//! randomize_buffer(&mut buf, 42);
//! assert_eq!(validate_random_buffer(&buf, 42), None);
//!
//! buf[7] ^= 0xFF;
//! assert_eq!(validate_random_buffer(&buf, 42), Some(4));
//! ```

pub mod config;
pub mod error;
pub mod options;
pub mod pattern;
pub mod pipeline;
pub mod sequence;

pub use config::{miscompare_to_raw, StreamSummary, VerifySummary, NO_MISCOMPARE, WORD_SIZE};
pub use error::{Error, Result};
pub use options::PatternOptions;
pub use pattern::{randomize_buffer, validate_random_buffer, PatternStream};
pub use sequence::{
    generate_random_u32, generate_random_u32_sequence, generate_random_u32_sequence_unique,
    permute_u32_sequence, unique_stride, SequenceRng,
};
