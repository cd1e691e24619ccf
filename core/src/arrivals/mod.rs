//! Arrival generation module for deterministic voter creation.
//!
//! This module implements the arrival generation system that creates the
//! voter stream for one simulated election day. All generation is
//! deterministic based on the RNG seed.
//!
//! # Key Principles
//!
//! 1. **Determinism**: Same seed + same config → same voters. The
//!    calibration searches re-run the identical stream under different
//!    parameters, so this property is load-bearing, not cosmetic.
//! 2. **Explicit RNG**: sampling goes through an [`RngManager`] owned by
//!    the stream; no process-global random state.
//! 3. **Exponential gaps and durations**: inter-arrival gaps follow
//!    Exponential(arrival_rate), voting durations
//!    Exponential(voting_duration_rate), impatience Bernoulli(p) — sampled
//!    in that order for every voter.
//!
//! # Example
//!
//! ```
//! use polling_simulator_core_rs::arrivals::VoterGenerator;
//! use polling_simulator_core_rs::PrecinctConfig;
//!
//! let config = PrecinctConfig {
//!     name: "Downtown".to_string(),
//!     hours_open: 1,
//!     num_voters: 10,
//!     arrival_rate: 0.17,
//!     voting_duration_rate: 0.1,
//!     impatience_prob: 0.1,
//! };
//!
//! let generator = VoterGenerator::new(config);
//! let voters = generator.generate_voters(42);
//! assert!(voters.len() <= 10);
//! ```

use crate::models::precinct::PrecinctConfig;
use crate::models::voter::Voter;
use crate::rng::RngManager;

/// One sampled arrival: gap since the previous voter, booth time needed,
/// and whether the voter is impatient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoterParams {
    /// Minutes since the previous arrival
    pub gap: f64,

    /// Minutes the voter needs in a booth
    pub duration: f64,

    /// Whether the voter balks rather than wait too long
    pub impatient: bool,
}

/// Logically infinite, lazy stream of [`VoterParams`] triples.
///
/// Created by [`VoterGenerator::stream`]. The stream owns its RNG, so two
/// streams built from the same seed yield identical sequences regardless
/// of what else is sampling in the process.
pub struct ArrivalStream<'a> {
    config: &'a PrecinctConfig,
    rng: RngManager,
}

impl Iterator for ArrivalStream<'_> {
    type Item = VoterParams;

    fn next(&mut self) -> Option<VoterParams> {
        // Fixed sampling order keeps the sequence reproducible
        let gap = self.rng.exponential(self.config.arrival_rate);
        let duration = self.rng.exponential(self.config.voting_duration_rate);
        let impatient = self.rng.bernoulli(self.config.impatience_prob);

        Some(VoterParams {
            gap,
            duration,
            impatient,
        })
    }
}

/// Generator for the voter stream of a single precinct.
#[derive(Debug, Clone)]
pub struct VoterGenerator {
    config: PrecinctConfig,
}

impl VoterGenerator {
    /// Create a new voter generator for the given precinct.
    pub fn new(config: PrecinctConfig) -> Self {
        Self { config }
    }

    /// Lazy, logically infinite arrival stream seeded with `seed`.
    pub fn stream(&self, seed: u64) -> ArrivalStream<'_> {
        ArrivalStream {
            config: &self.config,
            rng: RngManager::new(seed),
        }
    }

    /// Materialize the voter list for one election day.
    ///
    /// Consumes the arrival stream, accumulating a running arrival time,
    /// until either `num_voters` voters have been produced or the next
    /// arrival would fall after closing time. The first late arrival is
    /// discarded and generation stops there; no later voters exist.
    pub fn generate_voters(&self, seed: u64) -> Vec<Voter> {
        let closing = self.config.minutes_open();
        let mut present_time = 0.0;
        let mut voters = Vec::with_capacity(self.config.num_voters);

        for params in self.stream(seed).take(self.config.num_voters) {
            present_time += params.gap;
            if present_time > closing {
                break;
            }
            voters.push(Voter::new(present_time, params.duration, params.impatient));
        }

        voters
    }

    /// The precinct configuration driving this generator.
    pub fn config(&self) -> &PrecinctConfig {
        &self.config
    }
}
