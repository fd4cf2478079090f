//! The xoroshiro128+ word stream.

use rand_core::{impls, RngCore, SeedableRng};


const SPLITMIX_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// Replacement state for the all-zero seed, which xoroshiro cannot leave.
const NONZERO_STATE: [u64; 2] = [SPLITMIX_GAMMA, 0x6A09_E667_F3BC_C909];

/// Deterministic pseudorandom stream seeded from a 64-bit value.
///
/// The stream is cheap to create and to copy; cloning it forks an identical
/// continuation of the sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Xrand {
    state: [u64; 2],
}

impl Xrand {
    /// Create a stream for `seed`.
    ///
    /// The 128-bit state is expanded from the seed by two splitmix64 steps, so
    /// every seed (including zero) produces a well-mixed, non-zero state.
    pub fn new(seed: u64) -> Self {
        let mut x = seed;
        let s0 = splitmix64(&mut x);
        let s1 = splitmix64(&mut x);
        Self::from_state([s0, s1])
    }

    /// Create a stream from a raw xoroshiro state.
    ///
    /// The all-zero state is a fixed point of the generator and is replaced by
    /// a constant non-zero state.
    pub fn from_state(state: [u64; 2]) -> Self {
        if state == [0, 0] {
            return Self {
                state: NONZERO_STATE,
            };
        }
        Self { state }
    }

    /// Current raw state, suitable for [`Xrand::from_state`].
    pub fn state(&self) -> [u64; 2] {
        self.state
    }

    /// Draw the next 64-bit word.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        let s0 = self.state[0];
        let mut s1 = self.state[1];
        let result = s0.wrapping_add(s1);

        s1 ^= s0;
        self.state[0] = s0.rotate_left(24) ^ s1 ^ (s1 << 16);
        self.state[1] = s1.rotate_left(37);

        result
    }

    /// Draw the next 32-bit word.
    ///
    /// This is the low half of [`Xrand::next_u64`]; one 32-bit draw consumes
    /// one full step of the generator.
    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    pub fn next_u32(&mut self) -> u32 {
        self.next_u64() as u32
    }
}

impl RngCore for Xrand {
    fn next_u32(&mut self) -> u32 {
        Xrand::next_u32(self)
    }

    fn next_u64(&mut self) -> u64 {
        Xrand::next_u64(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Xrand {
    type Seed = [u8; 16];

    /// Load the state directly from 16 little-endian bytes.
    fn from_seed(seed: Self::Seed) -> Self {
        let mut lo = [0u8; 8];
        let mut hi = [0u8; 8];
        lo.copy_from_slice(&seed[..8]);
        hi.copy_from_slice(&seed[8..]);
        Self::from_state([u64::from_le_bytes(lo), u64::from_le_bytes(hi)])
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::new(state)
    }
}

/// One splitmix64 step: advance `x` and return the mixed output.
#[inline]
pub(crate) fn splitmix64(x: &mut u64) -> u64 {
    *x = x.wrapping_add(SPLITMIX_GAMMA);
    let mut z = *x;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
