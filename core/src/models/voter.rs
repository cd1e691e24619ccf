//! Voter model
//!
//! Represents a single voter arriving at the polls.
//! Each voter has:
//! - Arrival time and voting duration (f64 minutes, fixed at generation)
//! - An impatience flag (impatient voters balk if the wait is too long)
//! - Outcome fields (start time, departure time, voted) filled in by the
//!   simulation engine
//!
//! CRITICAL: All times are f64 minutes since the polls opened.

use serde::{Deserialize, Serialize};

/// A voter arriving at a precinct
///
/// The arrival attributes are immutable once generated. The outcome fields
/// start unset and are assigned at most once, together, by
/// [`begin_voting`](Voter::begin_voting): a voter either votes (all three
/// set) or balks (none set).
///
/// # Example
/// ```
/// use polling_simulator_core_rs::Voter;
///
/// let mut voter = Voter::new(5.0, 10.0, false);
/// assert!(!voter.voted());
///
/// voter.begin_voting(5.0);
/// assert!(voter.voted());
/// assert_eq!(voter.departure_time(), Some(15.0));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Voter {
    /// Minutes since opening when the voter arrives
    arrival_time: f64,

    /// Minutes the voter needs in a booth
    voting_duration: f64,

    /// Whether a wait-tolerance policy applies to this voter
    is_impatient: bool,

    /// Minutes since opening when the voter entered a booth (if served)
    start_time: Option<f64>,

    /// Minutes since opening when the voter left the booth (if served)
    departure_time: Option<f64>,

    /// Whether the voter voted
    voted: bool,
}

impl Voter {
    /// Create a new voter that has not yet been served
    ///
    /// # Panics
    /// Panics if arrival_time < 0 or voting_duration <= 0
    pub fn new(arrival_time: f64, voting_duration: f64, is_impatient: bool) -> Self {
        assert!(arrival_time >= 0.0, "arrival_time must be non-negative");
        assert!(voting_duration > 0.0, "voting_duration must be positive");

        Self {
            arrival_time,
            voting_duration,
            is_impatient,
            start_time: None,
            departure_time: None,
            voted: false,
        }
    }

    /// Record that the voter entered a booth at `start_time`
    ///
    /// Sets the start time, the departure time
    /// (`start_time + voting_duration`), and the voted flag together, so
    /// the outcome invariant can never be half-applied.
    ///
    /// # Panics
    /// Panics if called twice for the same voter or if `start_time`
    /// precedes the arrival time.
    pub fn begin_voting(&mut self, start_time: f64) {
        assert!(!self.voted, "voter already served");
        assert!(
            start_time >= self.arrival_time,
            "start_time must not precede arrival"
        );

        self.start_time = Some(start_time);
        self.departure_time = Some(start_time + self.voting_duration);
        self.voted = true;
    }

    /// Minutes since opening when the voter arrives
    pub fn arrival_time(&self) -> f64 {
        self.arrival_time
    }

    /// Minutes the voter needs in a booth
    pub fn voting_duration(&self) -> f64 {
        self.voting_duration
    }

    /// Whether the voter balks rather than tolerate a long wait
    pub fn is_impatient(&self) -> bool {
        self.is_impatient
    }

    /// Booth entry time, if the voter was served
    pub fn start_time(&self) -> Option<f64> {
        self.start_time
    }

    /// Booth exit time, if the voter was served
    pub fn departure_time(&self) -> Option<f64> {
        self.departure_time
    }

    /// Whether the voter voted
    pub fn voted(&self) -> bool {
        self.voted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_voter_unserved() {
        let voter = Voter::new(3.0, 7.5, true);

        assert_eq!(voter.arrival_time(), 3.0);
        assert_eq!(voter.voting_duration(), 7.5);
        assert!(voter.is_impatient());
        assert_eq!(voter.start_time(), None);
        assert_eq!(voter.departure_time(), None);
        assert!(!voter.voted());
    }

    #[test]
    fn test_begin_voting_sets_outcome_together() {
        let mut voter = Voter::new(3.0, 7.5, false);
        voter.begin_voting(4.0);

        assert!(voter.voted());
        assert_eq!(voter.start_time(), Some(4.0));
        assert_eq!(voter.departure_time(), Some(11.5));
    }

    #[test]
    #[should_panic(expected = "voter already served")]
    fn test_begin_voting_twice_panics() {
        let mut voter = Voter::new(0.0, 1.0, false);
        voter.begin_voting(0.0);
        voter.begin_voting(1.0);
    }

    #[test]
    #[should_panic(expected = "start_time must not precede arrival")]
    fn test_begin_voting_before_arrival_panics() {
        let mut voter = Voter::new(5.0, 1.0, false);
        voter.begin_voting(4.0);
    }

    #[test]
    #[should_panic(expected = "voting_duration must be positive")]
    fn test_zero_duration_panics() {
        Voter::new(0.0, 0.0, false);
    }
}
