//! xorshift64* random number generator
//!
//! This is a fast, high-quality PRNG suitable for picking attendees.
//!
//! # Algorithm
//!
//! xorshift64* is a variant of xorshift that passes TestU01's BigCrush
//! statistical tests. It uses 64-bit state and produces 64-bit output.
//!
//! # Seeding
//!
//! Same seed → same sequence of random numbers, which is what tests and
//! reproducible draws rely on. Production picks without a configured seed
//! start from [`RngManager::from_entropy`] so every draw is independent.
//!
//! `RngManager` implements [`rand::RngCore`] and [`rand::SeedableRng`], so
//! sampling and shuffling come from `rand` on top of this bit source.

use rand::rngs::OsRng;
use rand::{RngCore, SeedableRng};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while constructing a generator
#[derive(Debug, Error)]
pub enum RngError {
    #[error("Failed to read seed from OS entropy source: {0}")]
    Entropy(#[from] rand::Error),
}

/// Random number generator using xorshift64*
///
/// # Example
/// ```
/// use attendees_picker::RngManager;
/// use rand::Rng;
///
/// let mut rng = RngManager::new(12345);
/// let value = rng.next();
/// let seat = rng.gen_range(1..41);
/// assert!((1..41).contains(&seat));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngManager {
    /// Internal state (64-bit)
    state: u64,
}

impl RngManager {
    /// Create a new RNG with given seed
    ///
    /// # Arguments
    /// * `seed` - Initial seed value (u64)
    ///
    /// # Example
    /// ```
    /// use attendees_picker::RngManager;
    ///
    /// let rng = RngManager::new(12345);
    /// ```
    pub fn new(seed: u64) -> Self {
        // Ensure seed is never zero (xorshift requirement)
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Create a new RNG seeded from the operating system's entropy source
    ///
    /// # Errors
    /// Returns [`RngError::Entropy`] if the OS refuses to provide random bytes.
    ///
    /// # Example
    /// ```
    /// use attendees_picker::RngManager;
    ///
    /// let rng = RngManager::from_entropy().unwrap();
    /// assert_ne!(rng.get_state(), 0);
    /// ```
    pub fn from_entropy() -> Result<Self, RngError> {
        Ok(Self::from_rng(OsRng)?)
    }

    /// Generate next random u64 value
    ///
    /// This advances the internal state and returns a random value.
    pub fn next(&mut self) -> u64 {
        // xorshift64* algorithm
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    /// Get current RNG state (for replaying a draw)
    ///
    /// # Example
    /// ```
    /// use attendees_picker::RngManager;
    ///
    /// let rng = RngManager::new(12345);
    /// let state = rng.get_state();
    ///
    /// // Later, can recreate RNG from this state
    /// let rng2 = RngManager::new(state);
    /// ```
    pub fn get_state(&self) -> u64 {
        self.state
    }
}

impl RngCore for RngManager {
    fn next_u32(&mut self) -> u32 {
        // High bits of xorshift64* are the strongest
        (self.next() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.next()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for RngManager {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u64::from_le_bytes(seed))
    }

    /// Same as [`RngManager::new`], so `seed_from_u64(s)` replays `new(s)`
    fn seed_from_u64(state: u64) -> Self {
        Self::new(state)
    }
}
