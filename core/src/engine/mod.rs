//! Simulation engine
//!
//! Drives one full election day for a precinct:
//!
//! ```text
//! For each voter, in arrival order:
//! 1. Advance the clock to the arrival time
//! 2. Free every booth whose occupant has finished
//! 3. Open booth → admit immediately
//! 4. No booth → compute the wait until the next release; tolerant
//!    voters wait and are then admitted, intolerant voters balk
//! After the last voter: drain the remaining occupants
//! ```
//!
//! The engine is single-threaded and deterministic: concurrent booth
//! contention is modeled entirely through timestamp bookkeeping on a
//! non-decreasing simulation clock. The balk decision happens exactly
//! once, at admission-contention time — a voter told to wait always gets
//! the booth once the clock reaches the release time; there is no
//! reneging while waiting.

use crate::arrivals::VoterGenerator;
use crate::booths::{BoothPool, PoolError};
use crate::models::precinct::PrecinctConfig;
use crate::models::voter::Voter;
use thiserror::Error;

/// Simulation error types
///
/// Every variant is a contract violation: the caller handed the core
/// something its preconditions forbid. None are retried or swallowed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SimulationError {
    /// Precinct configuration failed validation
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Calibration requested with zero trials
    #[error("calibration requires at least 1 trial, got {0}")]
    InvalidTrialCount(usize),

    /// Booth pool contract violation
    #[error("booth pool error: {0}")]
    Pool(#[from] PoolError),
}

/// A precinct and its simulation engine
///
/// Owns the validated configuration and the voter generator; each
/// [`simulate`](Precinct::simulate) call is an independent run over a
/// freshly generated voter list.
///
/// # Example
/// ```
/// use polling_simulator_core_rs::{BoothPool, Precinct, PrecinctConfig};
///
/// let config = PrecinctConfig {
///     name: "Downtown".to_string(),
///     hours_open: 1,
///     num_voters: 10,
///     arrival_rate: 0.17,
///     voting_duration_rate: 0.1,
///     impatience_prob: 0.1,
/// };
///
/// let precinct = Precinct::new(config).unwrap();
/// let mut booths = BoothPool::new(2).unwrap();
/// let voters = precinct.simulate(42, &mut booths, 15.0).unwrap();
///
/// for voter in &voters {
///     if voter.voted() {
///         assert!(voter.start_time().unwrap() >= voter.arrival_time());
///     }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Precinct {
    generator: VoterGenerator,
}

impl Precinct {
    /// Create a precinct from a validated configuration
    ///
    /// # Errors
    /// [`SimulationError::InvalidConfig`] if a rate is non-positive or
    /// non-finite, the impatience probability falls outside [0, 1], or
    /// the precinct is open for zero hours.
    pub fn new(config: PrecinctConfig) -> Result<Self, SimulationError> {
        Self::validate_config(&config)?;
        Ok(Self {
            generator: VoterGenerator::new(config),
        })
    }

    fn validate_config(config: &PrecinctConfig) -> Result<(), SimulationError> {
        if config.hours_open == 0 {
            return Err(SimulationError::InvalidConfig(
                "hours_open must be at least 1".to_string(),
            ));
        }
        if !(config.arrival_rate.is_finite() && config.arrival_rate > 0.0) {
            return Err(SimulationError::InvalidConfig(format!(
                "arrival_rate must be positive and finite, got {}",
                config.arrival_rate
            )));
        }
        if !(config.voting_duration_rate.is_finite() && config.voting_duration_rate > 0.0) {
            return Err(SimulationError::InvalidConfig(format!(
                "voting_duration_rate must be positive and finite, got {}",
                config.voting_duration_rate
            )));
        }
        if !(0.0..=1.0).contains(&config.impatience_prob) {
            return Err(SimulationError::InvalidConfig(format!(
                "impatience_prob must be in [0, 1], got {}",
                config.impatience_prob
            )));
        }
        Ok(())
    }

    /// The precinct configuration
    pub fn config(&self) -> &PrecinctConfig {
        self.generator.config()
    }

    /// Simulate one election day
    ///
    /// Generates the voter list for `seed`, runs the admission loop, and
    /// returns the voters with their outcome fields populated. The booth
    /// pool is borrowed exclusively for the run and is empty again when
    /// the call returns, so the same pool may be reused across runs.
    ///
    /// # Errors
    /// Propagates [`PoolError`] contract violations; a well-formed pool
    /// and voter list never trigger them.
    pub fn simulate(
        &self,
        seed: u64,
        booths: &mut BoothPool,
        impatience_threshold: f64,
    ) -> Result<Vec<Voter>, SimulationError> {
        let mut voters = self.generator.generate_voters(seed);
        run_day(&mut voters, booths, impatience_threshold)?;
        Ok(voters)
    }
}

/// Run the admission loop over a pre-built voter list
///
/// The engine core behind [`Precinct::simulate`]. Public so callers with
/// hand-crafted arrival lists (scenario tests, what-if analyses) can
/// drive the state machine without going through the stochastic
/// generator. Voters must be in arrival order; the pool must be empty.
pub fn run_day(
    voters: &mut [Voter],
    booths: &mut BoothPool,
    impatience_threshold: f64,
) -> Result<(), SimulationError> {
    let mut current_time: f64 = 0.0;

    for (index, voter) in voters.iter_mut().enumerate() {
        current_time = current_time.max(voter.arrival_time());
        release_finished(booths, current_time)?;

        if booths.has_capacity() {
            start_voting(voter, index, current_time, booths)?;
            continue;
        }

        let next_free = booths.next_release()?;
        let wait = next_free - voter.arrival_time();
        let tolerates = !voter.is_impatient() || wait <= impatience_threshold;

        if tolerates {
            current_time = current_time.max(next_free);
            release_finished(booths, current_time)?;
            start_voting(voter, index, current_time, booths)?;
        }
        // Intolerant: balk. Outcome fields stay unset and no booth
        // slot is consumed.
    }

    // Drain so the pool starts empty for a subsequent run
    while booths.has_occupant() {
        booths.release_earliest()?;
    }

    Ok(())
}

/// Free every booth whose occupant departs at or before `current_time`.
fn release_finished(booths: &mut BoothPool, current_time: f64) -> Result<(), PoolError> {
    while booths.has_occupant() && booths.next_release()? <= current_time {
        booths.release_earliest()?;
    }
    Ok(())
}

/// Admit `voter` to a booth at `current_time`.
fn start_voting(
    voter: &mut Voter,
    index: usize,
    current_time: f64,
    booths: &mut BoothPool,
) -> Result<(), PoolError> {
    voter.begin_voting(current_time);
    booths.admit(index, voter)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> PrecinctConfig {
        PrecinctConfig {
            name: "TEST".to_string(),
            hours_open: 1,
            num_voters: 10,
            arrival_rate: 0.5,
            voting_duration_rate: 0.2,
            impatience_prob: 0.1,
        }
    }

    #[test]
    fn test_invalid_rate_rejected() {
        let mut bad = config();
        bad.arrival_rate = 0.0;
        assert!(matches!(
            Precinct::new(bad),
            Err(SimulationError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_invalid_probability_rejected() {
        let mut bad = config();
        bad.impatience_prob = 1.5;
        assert!(matches!(
            Precinct::new(bad),
            Err(SimulationError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_zero_hours_rejected() {
        let mut bad = config();
        bad.hours_open = 0;
        assert!(matches!(
            Precinct::new(bad),
            Err(SimulationError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_pool_drained_after_run() {
        let precinct = Precinct::new(config()).unwrap();
        let mut booths = BoothPool::new(2).unwrap();

        precinct.simulate(42, &mut booths, 100.0).unwrap();
        assert!(!booths.has_occupant(), "pool must be drained on exit");
    }
}
