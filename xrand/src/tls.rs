//! Ambient per-thread stream.
//!
//! Each thread owns at most one stream. [`init`] installs a seeded stream,
//! [`reset`] tears it down. Drawing from a thread that was never initialized
//! seeds the stream from the clock and thread identity, which is convenient
//! for ad-hoc workloads but not reproducible; call [`init`] first whenever the
//! output must be replayable.

use std::cell::RefCell;
use std::collections::hash_map::RandomState;
use std::hash::{BuildHasher, Hash, Hasher};
use std::time::{SystemTime, UNIX_EPOCH};

use rand_core::{impls, RngCore};

use crate::stream::Xrand;

thread_local! {
    static AMBIENT: RefCell<Option<Xrand>> = const { RefCell::new(None) };
}

/// Install a stream seeded with `seed` on the current thread.
///
/// Any previously installed stream is discarded.
pub fn init(seed: u64) {
    AMBIENT.with(|cell| *cell.borrow_mut() = Some(Xrand::new(seed)));
}

/// Drop the current thread's stream.
///
/// The next draw will self-seed unless [`init`] is called again.
pub fn reset() {
    AMBIENT.with(|cell| *cell.borrow_mut() = None);
}

/// Whether the current thread has a stream installed.
pub fn is_initialized() -> bool {
    AMBIENT.with(|cell| cell.borrow().is_some())
}

/// Run `f` with exclusive access to the current thread's stream.
///
/// # Panics
///
/// Panics if `f` re-enters the ambient stream (for example by calling
/// [`next_u64`] from inside the closure).
pub fn with<T>(f: impl FnOnce(&mut Xrand) -> T) -> T {
    AMBIENT.with(|cell| {
        let mut slot = cell.borrow_mut();
        let stream = slot.get_or_insert_with(|| {
            let seed = entropy_seed();
            tracing::trace!(seed, "self-seeding ambient xrand stream");
            Xrand::new(seed)
        });
        f(stream)
    })
}

/// Draw the next 64-bit word from the current thread's stream.
pub fn next_u64() -> u64 {
    with(Xrand::next_u64)
}

/// Draw the next 32-bit word from the current thread's stream.
pub fn next_u32() -> u32 {
    with(Xrand::next_u32)
}

/// Zero-sized handle to the current thread's stream.
///
/// The handle lets code written against [`RngCore`] draw from the ambient
/// stream. It is neither `Send` nor `Sync`, so it cannot leak to another
/// thread's stream by accident.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadXrand {
    _not_send: std::marker::PhantomData<*const ()>,
}

impl ThreadXrand {
    /// Handle to the current thread's stream.
    pub fn new() -> Self {
        Self::default()
    }
}

impl RngCore for ThreadXrand {
    fn next_u32(&mut self) -> u32 {
        next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        with(|stream| impls::fill_bytes_via_next(stream, dest));
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

/// Non-reproducible seed from wall-clock time and thread identity.
fn entropy_seed() -> u64 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos());

    let mut hasher = RandomState::new().build_hasher();
    std::thread::current().id().hash(&mut hasher);
    nanos.hash(&mut hasher);
    hasher.finish()
}
