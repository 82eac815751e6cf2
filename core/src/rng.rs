//! Park-Miller Linear Congruential Generator (MINSTD)
//!
//! A tiny seedable generator so a `u32` seed always reproduces the same
//! maze, independent of which algorithm `rand` ships as its default RNG.
//! It implements the `rand_core` traits, so it plugs into anything that
//! takes an `Rng`.
//!
//! Constants:
//! - Multiplier (a): 48271
//! - Modulus (m): 2^31 - 1 = 2147483647
//!
//! Reference: https://en.wikipedia.org/wiki/Lehmer_random_number_generator

use rand_core::{impls, Error, RngCore, SeedableRng};

const A: u64 = 48271;
const M: u64 = 2147483647; // 2^31 - 1

/// Park-Miller Linear Congruential Generator
///
/// Same seed always produces the same sequence. Not suitable for anything
/// security related.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimpleLCG {
    state: u32,
}

impl SimpleLCG {
    /// Create a new LCG with the given seed
    ///
    /// Seeds are reduced modulo 2^31 - 1; a zero state is replaced with 1
    /// to avoid the degenerate all-zero sequence.
    pub fn new(seed: u32) -> Self {
        let state = (seed as u64 % M) as u32;
        Self {
            state: if state == 0 { 1 } else { state },
        }
    }

    /// Advance and return the raw 31-bit state, in `[1, 2^31 - 2]`
    fn advance(&mut self) -> u32 {
        // u64 keeps the product from overflowing
        self.state = ((self.state as u64 * A) % M) as u32;
        self.state
    }
}

impl RngCore for SimpleLCG {
    /// Two steps, keeping the high 16 of each 31-bit output
    fn next_u32(&mut self) -> u32 {
        let hi = self.advance() >> 15;
        let lo = self.advance() >> 15;
        (hi << 16) | lo
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for SimpleLCG {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }
}
