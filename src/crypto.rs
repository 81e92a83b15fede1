// src/crypto.rs
//! Cryptographically secure sampling.
//!
//! Every random value the generator consumes comes from here, both for the
//! initial draw and for complexity repair. Values are reduced to an index
//! range with rejection sampling, so no residue is favoured when the range
//! does not divide 2^32.
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

const SAMPLE_SPACE: u64 = 1 << 32;

pub struct SecureSampler<R = OsRng> {
    rng: R,
}

impl SecureSampler<OsRng> {
    pub fn new() -> Self {
        SecureSampler { rng: OsRng }
    }
}

impl Default for SecureSampler<OsRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore + CryptoRng> SecureSampler<R> {
    pub fn with_rng(rng: R) -> Self {
        SecureSampler { rng }
    }

    /// `count` values uniformly distributed over the full `u32` range.
    pub fn sample(&mut self, count: usize) -> Vec<u32> {
        (0..count).map(|_| self.rng.next_u32()).collect()
    }

    /// A uniform index in `0..bound`, or `None` if the range is empty or
    /// wider than the sampler's native range.
    pub fn below(&mut self, bound: usize) -> Option<usize> {
        let bound = u64::try_from(bound).ok().filter(|&b| b > 0 && b <= SAMPLE_SPACE)?;
        // Largest multiple of `bound` that fits in the sample space.
        let limit = SAMPLE_SPACE - SAMPLE_SPACE % bound;
        loop {
            let value = u64::from(self.rng.next_u32());
            if value < limit {
                return Some((value % bound) as usize);
            }
        }
    }

    pub fn sample_below(&mut self, bound: usize, count: usize) -> Option<Vec<usize>> {
        (0..count).map(|_| self.below(bound)).collect()
    }

    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        self.below(items.len()).map(|i| &items[i])
    }
}
