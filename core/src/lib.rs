//! Polling Place Simulator Core - Rust Engine
//!
//! Discrete-event simulation of a capacity-constrained polling place with
//! deterministic execution, plus calibration searches for minimal
//! provisioning parameters.
//!
//! # Architecture
//!
//! - **models**: Domain types (Voter, PrecinctConfig)
//! - **arrivals**: Deterministic voter stream generation
//! - **booths**: Bounded booth pool ordered by departure time
//! - **engine**: Single-run simulation loop (admit, wait, or balk)
//! - **calibration**: Threshold/booth searches over repeated trials
//! - **rng**: Deterministic random number generation
//!
//! # Critical Invariants
//!
//! 1. All times are f64 minutes since the polls opened
//! 2. All randomness is deterministic (seeded RNG, threaded explicitly)
//! 3. Booth occupancy never exceeds capacity
//! 4. Every simulation run drains the booth pool before returning

// Module declarations
pub mod arrivals;
pub mod booths;
pub mod calibration;
pub mod engine;
pub mod models;
pub mod rng;

// Re-exports for convenience
pub use arrivals::{ArrivalStream, VoterGenerator, VoterParams};
pub use booths::{BoothPool, PoolError};
pub use calibration::{find_capacity, find_threshold};
pub use engine::{run_day, Precinct, SimulationError};
pub use models::{precinct::PrecinctConfig, voter::Voter};
pub use rng::RngManager;
