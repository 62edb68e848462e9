//! 32-bit Mersenne Twister (MT19937) and the value helpers built on it.
//!
//! Output is word-for-word the reference MT19937 sequence, so a generator
//! seeded with [`MersenneTwister::with_seed`] reproduces the same values in
//! any process and against any other conforming implementation.
//!
//! Not safe for cryptographic use.

use std::fmt;

use super::constants_errors::*;
use super::utils::{entropy_words, os_entropy};

const MATRIX_A: u32 = 0x9908_b0df;
const UPPER_MASK: u32 = 0x8000_0000;
const LOWER_MASK: u32 = 0x7fff_ffff;
const ZERO_KEY: [u32; 1] = [0];

/// MT19937 state: 624 words plus the read position.
///
/// A single instance is not synchronised; share it behind a lock or give each
/// thread its own.
#[derive(Clone)]
pub struct MersenneTwister {
    state: [u32; MT_STATE_WORDS],
    index: usize,
}

impl MersenneTwister {
    /// Deterministic generator: the same seed always yields the same sequence.
    pub fn with_seed(seed: u32) -> Self {
        let mut mt = MersenneTwister {
            state: [0u32; MT_STATE_WORDS],
            index: MT_STATE_WORDS,
        };
        mt.init_genrand(seed);
        mt
    }

    /// Seeds the full state from a key (`init_by_array`). An empty key is
    /// treated as the single word `0`.
    pub fn from_key(key: &[u32]) -> Self {
        let key: &[u32] = if key.is_empty() { &ZERO_KEY } else { key };
        let mut mt = Self::with_seed(19_650_218);
        let state = &mut mt.state;

        let mut i = 1usize;
        let mut j = 0usize;
        for _ in 0..MT_STATE_WORDS.max(key.len()) {
            let prev = state[i - 1];
            state[i] = (state[i] ^ (prev ^ (prev >> 30)).wrapping_mul(1_664_525))
                .wrapping_add(key[j])
                .wrapping_add(j as u32);
            i += 1;
            j += 1;
            if i >= MT_STATE_WORDS {
                state[0] = state[MT_STATE_WORDS - 1];
                i = 1;
            }
            if j >= key.len() {
                j = 0;
            }
        }
        for _ in 0..MT_STATE_WORDS - 1 {
            let prev = state[i - 1];
            state[i] = (state[i] ^ (prev ^ (prev >> 30)).wrapping_mul(1_566_083_941))
                .wrapping_sub(i as u32);
            i += 1;
            if i >= MT_STATE_WORDS {
                state[0] = state[MT_STATE_WORDS - 1];
                i = 1;
            }
        }
        state[0] = UPPER_MASK;
        mt.index = MT_STATE_WORDS;
        mt
    }

    /// Non-deterministic generator seeded from the operating system.
    pub fn from_entropy() -> Result<Self, RandomError> {
        Self::from_entropy_with(os_entropy)
    }

    /// Like [`from_entropy`](Self::from_entropy) with a caller-supplied
    /// entropy source. A failing source is reported, never replaced by a
    /// fixed seed.
    pub fn from_entropy_with<F>(fill: F) -> Result<Self, RandomError>
    where
        F: FnOnce(&mut [u8]) -> Result<(), getrandom::Error>,
    {
        let key = entropy_words(fill)?;
        Ok(Self::from_key(&key))
    }

    /// Restarts the deterministic sequence for `seed` in place.
    pub fn reseed(&mut self, seed: u32) {
        self.init_genrand(seed);
    }

    fn init_genrand(&mut self, seed: u32) {
        self.state[0] = seed;
        for i in 1..MT_STATE_WORDS {
            let prev = self.state[i - 1];
            self.state[i] = 1_812_433_253u32
                .wrapping_mul(prev ^ (prev >> 30))
                .wrapping_add(i as u32);
        }
        self.index = MT_STATE_WORDS;
    }

    fn twist(&mut self) {
        for k in 0..MT_STATE_WORDS {
            let y = (self.state[k] & UPPER_MASK)
                | (self.state[(k + 1) % MT_STATE_WORDS] & LOWER_MASK);
            let mag = if y & 1 == 0 { 0 } else { MATRIX_A };
            self.state[k] = self.state[(k + MT_SHIFT_WORDS) % MT_STATE_WORDS] ^ (y >> 1) ^ mag;
        }
        self.index = 0;
    }

    // MARK: next_u32
    pub fn next_u32(&mut self) -> u32 {
        if self.index >= MT_STATE_WORDS {
            self.twist();
        }
        let mut y = self.state[self.index];
        self.index += 1;

        y ^= y >> 11;
        y ^= (y << 7) & 0x9d2c_5680;
        y ^= (y << 15) & 0xefc6_0000;
        y ^= y >> 18;
        y
    }

    // MARK: next_u64
    /// First word drawn is the high half.
    pub fn next_u64(&mut self) -> u64 {
        let hi = self.next_u32() as u64;
        let lo = self.next_u32() as u64;
        (hi << 32) | lo
    }

    // MARK: next
    /// Uniform double in `[0.0, 1.0)` with 53 bits of resolution.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> f64 {
        let a = (self.next_u32() >> 5) as f64;
        let b = (self.next_u32() >> 6) as f64;
        (a * 67_108_864.0 + b) * (1.0 / 9_007_199_254_740_992.0)
    }

    // MARK: next_below
    /// Uniform integer in `[0, bound)` by rejection sampling.
    pub fn next_below(&mut self, bound: u32) -> Result<u32, RandomError> {
        if bound == 0 {
            return Err(RandomError::InvalidBound);
        }
        let threshold = u32::MAX - (u32::MAX % bound);
        loop {
            let value = self.next_u32();
            if value < threshold {
                return Ok(value % bound);
            }
        }
    }

    // MARK: uniform
    /// Uniform double in `[lo, hi)`.
    #[inline]
    pub fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        self.next() * (hi - lo) + lo
    }

    // MARK: normal
    /// Polar Box-Muller, Knuth vol. 2, 3rd ed., p.122.
    pub fn normal(&mut self, mean: f64, stdev: f64) -> f64 {
        let (y, r2) = loop {
            let x = -1.0 + 2.0 * self.next();
            let y = -1.0 + 2.0 * self.next();
            let r2 = x * x + y * y;
            if r2 <= 1.0 && r2 != 0.0 {
                break (y, r2);
            }
        };
        mean + stdev * y * (-2.0 * r2.ln() / r2).sqrt()
    }

    pub fn normals(&mut self, count: usize, mean: f64, stdev: f64) -> Vec<f64> {
        (0..count).map(|_| self.normal(mean, stdev)).collect()
    }

    // MARK: exponential
    /// Unit-rate exponential distribution.
    #[inline]
    pub fn exponential(&mut self) -> f64 {
        -(1.0 - self.next()).ln()
    }

    // MARK: alphanumeric
    pub fn alphanumeric(&mut self, len: usize) -> String {
        (0..len)
            .map(|_| {
                // ALPHANUMERIC has 62 entries, so the bound is never zero
                let idx = self.next_below(ALPHANUMERIC.len() as u32).unwrap_or(0);
                ALPHANUMERIC[idx as usize] as char
            })
            .collect()
    }
}

impl Default for MersenneTwister {
    fn default() -> Self {
        Self::with_seed(MT_DEFAULT_SEED)
    }
}

impl fmt::Debug for MersenneTwister {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MersenneTwister")
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}
