//! xorshift64* random number generator
//!
//! This is a fast, high-quality PRNG that is deterministic and suitable
//! for simulation purposes.
//!
//! # Determinism
//!
//! Same seed → same sequence of random numbers. This is CRITICAL for:
//! - Debugging (reproduce exact simulation)
//! - Testing (verify behavior)
//! - Calibration (the threshold/booth searches re-run the same voter
//!   stream under different parameters and compare outcomes)
//!
//! The generator is always threaded explicitly as `&mut RngManager`;
//! there is no process-global random state, so independent calibration
//! trials cannot interfere with each other.

use serde::{Deserialize, Serialize};

/// Deterministic random number generator using xorshift64*
///
/// # Example
/// ```
/// use polling_simulator_core_rs::RngManager;
///
/// let mut rng = RngManager::new(12345);
/// let gap = rng.exponential(0.5);
/// let impatient = rng.bernoulli(0.1);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngManager {
    /// Internal state (64-bit)
    state: u64,
}

impl RngManager {
    /// Create a new RNG with given seed
    ///
    /// # Example
    /// ```
    /// use polling_simulator_core_rs::RngManager;
    ///
    /// let rng = RngManager::new(12345);
    /// ```
    pub fn new(seed: u64) -> Self {
        // Ensure seed is never zero (xorshift requirement)
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
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

    /// Generate random f64 in range [0.0, 1.0)
    ///
    /// Useful for sampling from probability distributions.
    ///
    /// # Example
    /// ```
    /// use polling_simulator_core_rs::RngManager;
    ///
    /// let mut rng = RngManager::new(12345);
    /// let probability = rng.next_f64();
    /// assert!(probability >= 0.0 && probability < 1.0);
    /// ```
    pub fn next_f64(&mut self) -> f64 {
        let value = self.next();
        // Convert to [0.0, 1.0) by dividing by 2^64
        (value >> 11) as f64 * (1.0 / ((1u64 << 53) as f64))
    }

    /// Sample from an exponential distribution with the given rate
    ///
    /// Uses inverse-CDF sampling: `-ln(1 - u) / rate` with `u` in
    /// [0.0, 1.0). The result is always finite and strictly positive
    /// for a positive rate. Used for inter-arrival gaps and voting
    /// durations.
    ///
    /// # Panics
    /// Panics if rate <= 0
    ///
    /// # Example
    /// ```
    /// use polling_simulator_core_rs::RngManager;
    ///
    /// let mut rng = RngManager::new(12345);
    /// let gap = rng.exponential(0.1); // mean 10 minutes
    /// assert!(gap > 0.0);
    /// ```
    pub fn exponential(&mut self, rate: f64) -> f64 {
        assert!(rate > 0.0, "rate must be positive");

        let u = self.next_f64();
        // 1 - u is in (0.0, 1.0], so ln never sees zero
        -(1.0 - u).ln() / rate
    }

    /// Sample a Bernoulli trial with success probability `p`
    ///
    /// # Example
    /// ```
    /// use polling_simulator_core_rs::RngManager;
    ///
    /// let mut rng = RngManager::new(12345);
    /// assert!(!rng.bernoulli(0.0));
    /// ```
    pub fn bernoulli(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    /// Get current RNG state (for replay)
    pub fn state(&self) -> u64 {
        self.state
    }
}
