//! Calibration searches
//!
//! Answers the provisioning questions for a precinct: what is the
//! smallest impatience threshold (given a booth count), or the smallest
//! booth count (given a threshold), under which every generated voter
//! gets to vote?
//!
//! Each question is a monotone-parameter linear scan over single
//! simulation runs, repeated across independent seeded trials and
//! aggregated by the median. The scans assume the predicate "every voter
//! voted" is non-decreasing in the scanned parameter for a fixed seed;
//! under a non-monotone predicate they return the first, not necessarily
//! globally minimal, satisfying value. Termination of the unbounded
//! upward scans is a liveness assumption of the stochastic model: with a
//! finite voter list, a large enough threshold (or booth count) always
//! serves everyone.
//!
//! Trials share no mutable state and run on scoped threads; the only
//! serialization point is the final sort-and-select-median step.

use crate::booths::BoothPool;
use crate::engine::{Precinct, SimulationError};
use crate::models::voter::Voter;

/// Step between successive threshold candidates (1, 11, 21, ...)
const THRESHOLD_STEP: u32 = 10;

/// Did every voter in the run vote?
///
/// An empty voter list (nobody arrived before closing) counts as
/// trivially served, so the scans terminate at their first candidate.
fn all_voted(voters: &[Voter]) -> bool {
    voters.iter().all(Voter::voted)
}

/// Upper median of per-trial results
///
/// Sorts ascending and returns the element at index `len / 2` — the
/// upper median when the count is even.
///
/// # Panics
/// Panics if `results` is empty; callers validate the trial count first.
///
/// # Example
/// ```
/// use polling_simulator_core_rs::calibration::median_of_trials;
///
/// assert_eq!(median_of_trials(vec![10, 20, 20, 30]), 20);
/// ```
pub fn median_of_trials(mut results: Vec<u32>) -> u32 {
    assert!(!results.is_empty(), "median of empty trial list");
    results.sort_unstable();
    results[results.len() / 2]
}

/// Unbounded upward linear scan
///
/// Tries `start`, `start + step`, `start + 2*step`, ... and returns the
/// first candidate for which the predicate holds. Under a non-monotone
/// predicate this is the first, not the global minimal, satisfying
/// value. Never terminates if the predicate never holds.
fn scan_upward<P>(start: u32, step: u32, mut predicate: P) -> Result<u32, SimulationError>
where
    P: FnMut(u32) -> Result<bool, SimulationError>,
{
    let mut candidate = start;
    loop {
        if predicate(candidate)? {
            return Ok(candidate);
        }
        candidate += step;
    }
}

/// Minimal satisfying threshold for a single seeded trial
///
/// Scans candidates 1, 11, 21, ... and returns the first threshold under
/// which every voter voted when simulated with `seed` on `booths`. The
/// pool is reused across candidates; the engine's drain-on-exit invariant
/// keeps successive runs independent.
pub fn find_trial_threshold(
    seed: u64,
    precinct: &Precinct,
    booths: &mut BoothPool,
) -> Result<u32, SimulationError> {
    scan_upward(1, THRESHOLD_STEP, |candidate| {
        let voters = precinct.simulate(seed, booths, f64::from(candidate))?;
        Ok(all_voted(&voters))
    })
}

/// Minimal satisfying booth count for a single seeded trial
///
/// Scans 1, 2, 3, ... with a fresh pool of each candidate size and
/// returns the first count under which every voter voted.
pub fn find_trial_capacity(
    seed: u64,
    precinct: &Precinct,
    impatience_threshold: f64,
) -> Result<u32, SimulationError> {
    scan_upward(1, 1, |candidate| {
        let mut booths = BoothPool::new(candidate as usize)?;
        let voters = precinct.simulate(seed, &mut booths, impatience_threshold)?;
        Ok(all_voted(&voters))
    })
}

/// Median impatience threshold across independent trials
///
/// Runs [`find_trial_threshold`] for seeds `seed + 0 .. seed + trials-1`,
/// one scoped thread per trial, and returns the upper median of the
/// per-trial minima.
///
/// # Errors
/// [`SimulationError::InvalidTrialCount`] if `trials` is zero;
/// [`crate::booths::PoolError::NonPositiveCapacity`] (via
/// [`SimulationError::Pool`]) if `capacity` is zero.
///
/// # Example
/// ```
/// use polling_simulator_core_rs::calibration::find_threshold;
/// use polling_simulator_core_rs::{Precinct, PrecinctConfig};
///
/// let config = PrecinctConfig {
///     name: "Downtown".to_string(),
///     hours_open: 1,
///     num_voters: 10,
///     arrival_rate: 0.17,
///     voting_duration_rate: 0.1,
///     impatience_prob: 0.1,
/// };
/// let precinct = Precinct::new(config).unwrap();
///
/// let threshold = find_threshold(42, &precinct, 2, 5).unwrap();
/// assert_eq!(threshold % 10, 1); // candidates are 1, 11, 21, ...
/// ```
pub fn find_threshold(
    seed: u64,
    precinct: &Precinct,
    capacity: usize,
    trials: usize,
) -> Result<u32, SimulationError> {
    if trials == 0 {
        return Err(SimulationError::InvalidTrialCount(trials));
    }

    let results = run_trials(trials, seed, |trial_seed| {
        let mut booths = BoothPool::new(capacity)?;
        find_trial_threshold(trial_seed, precinct, &mut booths)
    })?;

    Ok(median_of_trials(results))
}

/// Median booth count across independent trials
///
/// Runs [`find_trial_capacity`] for seeds `seed + 0 .. seed + trials-1`,
/// one scoped thread per trial, and returns the upper median of the
/// per-trial minima.
///
/// # Errors
/// [`SimulationError::InvalidTrialCount`] if `trials` is zero.
pub fn find_capacity(
    seed: u64,
    precinct: &Precinct,
    impatience_threshold: f64,
    trials: usize,
) -> Result<u32, SimulationError> {
    if trials == 0 {
        return Err(SimulationError::InvalidTrialCount(trials));
    }

    let results = run_trials(trials, seed, |trial_seed| {
        find_trial_capacity(trial_seed, precinct, impatience_threshold)
    })?;

    Ok(median_of_trials(results))
}

/// Run `trials` independent single-trial searches on scoped threads.
///
/// Trial `i` uses seed `base_seed + i`. Results come back in trial
/// order; the first contract violation aborts the whole batch.
fn run_trials<F>(
    trials: usize,
    base_seed: u64,
    trial_fn: F,
) -> Result<Vec<u32>, SimulationError>
where
    F: Fn(u64) -> Result<u32, SimulationError> + Sync,
{
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..trials)
            .map(|trial| {
                let trial_fn = &trial_fn;
                let trial_seed = base_seed.wrapping_add(trial as u64);
                scope.spawn(move || trial_fn(trial_seed))
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| {
                handle
                    .join()
                    .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
            })
            .collect()
    })
}
