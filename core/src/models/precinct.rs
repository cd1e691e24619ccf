//! Precinct configuration
//!
//! Immutable parameters describing one polling place for one election day.
//! Together with an RNG seed these fully determine the generated voter
//! stream, which is what makes calibration runs reproducible.

use serde::{Deserialize, Serialize};

/// Configuration for a single precinct
///
/// Loaded by an external configuration layer and handed to the engine
/// unchanged; the core never reads files itself.
///
/// # Example
/// ```
/// use polling_simulator_core_rs::PrecinctConfig;
///
/// let config = PrecinctConfig {
///     name: "Downtown".to_string(),
///     hours_open: 1,
///     num_voters: 10,
///     arrival_rate: 0.17,
///     voting_duration_rate: 0.1,
///     impatience_prob: 0.1,
/// };
/// assert_eq!(config.minutes_open(), 60.0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrecinctConfig {
    /// Precinct name (reporting only)
    pub name: String,

    /// Hours the polls stay open; arrivals after closing are discarded
    pub hours_open: u32,

    /// Target number of voters to generate
    pub num_voters: usize,

    /// Rate parameter for exponential inter-arrival gaps (per minute)
    pub arrival_rate: f64,

    /// Rate parameter for exponential voting durations (per minute)
    pub voting_duration_rate: f64,

    /// Probability that a generated voter is impatient
    pub impatience_prob: f64,
}

impl PrecinctConfig {
    /// Closing time in minutes since opening
    pub fn minutes_open(&self) -> f64 {
        f64::from(self.hours_open) * 60.0
    }
}
