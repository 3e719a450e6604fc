//! Deterministic RNG wrapper and seed-derivation helpers.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use siphasher::sip::SipHasher13;
use std::hash::Hasher;

/// Seedable random source threaded through every null-model draw.
///
/// Nothing in SIMPL touches a process-wide generator: callers construct a
/// handle from a master `seed: u64` and pass it by `&mut` into the sampler.
/// Independent samples are branched off with [`RngHandle::substream`], which
/// seeds a fresh handle from `derive_substream_seed(master, index)`. The
/// derivation hashes both integers with SipHash-1-3 under fixed zero keys, so
/// a given `(master, index)` pair yields the same stream on every platform.
#[derive(Debug, Clone)]
pub struct RngHandle {
    seed: u64,
    rng: StdRng,
}

impl RngHandle {
    /// Creates a new RNG handle from a master seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Creates the handle for substream `index` of the given master seed.
    pub fn substream(master_seed: u64, index: u64) -> Self {
        Self::from_seed(derive_substream_seed(master_seed, index))
    }

    /// Returns the seed this handle was constructed from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draws a uniformly distributed index in `0..bound`.
    ///
    /// `bound` must be non-zero; callers check for empty pools first.
    pub fn index_below(&mut self, bound: usize) -> usize {
        self.rng.gen_range(0..bound)
    }
}

impl RngCore for RngHandle {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.rng.try_fill_bytes(dest)
    }
}

/// Derives the deterministic seed for a specific substream.
pub fn derive_substream_seed(master_seed: u64, substream: u64) -> u64 {
    let mut hasher = SipHasher13::new_with_keys(0, 0);
    hasher.write_u64(master_seed);
    hasher.write_u64(substream);
    hasher.finish()
}
