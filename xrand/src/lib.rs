//! Seedable pseudorandom word streams for reproducible test data.
//!
//! The crate exposes a single generator, [`Xrand`], which is a xoroshiro128+
//! state expanded from a 64-bit seed with splitmix64. Two streams created from
//! the same seed yield the same words on every platform, which is the only
//! property downstream pattern generators rely on.
//!
//! # Highlights
//!
//! - explicit, owned streams for per-call determinism
//! - an ambient per-thread stream ([`tls`]) with explicit init and teardown
//! - [`rand_core::RngCore`] and [`rand_core::SeedableRng`] implementations so
//!   the generator plugs into code written against `rand_core`
//!
//! # Example
//!
//! ```rust
//! use xrand::Xrand;
//!
//! let mut a = Xrand::new(42);
//! let mut b = Xrand::new(42);
//! assert_eq!(a.next_u64(), b.next_u64());
//! assert_eq!(a.next_u32(), b.next_u32());
//!
//! xrand::tls::init(7);
//! let first = xrand::tls::next_u64();
//! xrand::tls::init(7);
//! assert_eq!(first, xrand::tls::next_u64());
//! xrand::tls::reset();
//! ```

pub mod stream;
pub mod tls;

pub use stream::Xrand;
pub use tls::ThreadXrand;
