//! Voting booth pool
//!
//! A bank of voting booths is a bounded resource: at most `capacity`
//! voters occupy booths at once. Occupants are ordered by pending
//! departure time so the engine can always find the next booth to free.
//!
//! The pool never runs concurrently — contention is modeled purely
//! through timestamp bookkeeping. Misuse (querying an empty pool,
//! admitting past capacity) is a contract violation surfaced as
//! [`PoolError`], never silently absorbed.

use crate::models::voter::Voter;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use thiserror::Error;

/// Errors for booth pool contract violations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PoolError {
    /// Pool constructed or searched with zero booths
    #[error("booth capacity must be at least 1")]
    NonPositiveCapacity,

    /// `next_release`/`release_earliest` called on an empty pool
    #[error("no booths in use")]
    EmptyPoolQuery,

    /// Admission without capacity, or of a voter with no start time
    #[error("cannot admit voter: {0}")]
    DoubleAdmission(&'static str),
}

/// A pending departure: when a booth frees up and whose it is.
///
/// Ordered by departure time (ties broken by voter index) so the
/// earliest departure sits at the top of a min-heap. Times are finite
/// f64 minutes, compared with `total_cmp`.
#[derive(Debug, Clone, Copy)]
struct Departure {
    time: f64,
    voter_index: usize,
}

impl PartialEq for Departure {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Departure {}

impl PartialOrd for Departure {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Departure {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap, we want the earliest
        // departure on top
        other
            .time
            .total_cmp(&self.time)
            .then_with(|| other.voter_index.cmp(&self.voter_index))
    }
}

/// A bank of voting booths for one precinct
///
/// # Example
/// ```
/// use polling_simulator_core_rs::{BoothPool, Voter};
///
/// let mut booths = BoothPool::new(2).unwrap();
/// assert!(booths.has_capacity());
///
/// let mut voter = Voter::new(0.0, 10.0, false);
/// voter.begin_voting(0.0);
/// booths.admit(0, &voter).unwrap();
///
/// assert!(booths.has_occupant());
/// assert_eq!(booths.next_release().unwrap(), 10.0);
/// ```
#[derive(Debug, Clone)]
pub struct BoothPool {
    /// Number of booths in the bank
    capacity: usize,

    /// Pending departures, earliest first
    occupied: BinaryHeap<Departure>,
}

impl PartialEq for BoothPool {
    fn eq(&self, other: &Self) -> bool {
        if self.capacity != other.capacity {
            return false;
        }
        let mut a: Vec<&Departure> = self.occupied.iter().collect();
        let mut b: Vec<&Departure> = other.occupied.iter().collect();
        a.sort();
        b.sort();
        a == b
    }
}

impl BoothPool {
    /// Create a pool with the given number of booths
    ///
    /// # Errors
    /// [`PoolError::NonPositiveCapacity`] if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self, PoolError> {
        if capacity == 0 {
            return Err(PoolError::NonPositiveCapacity);
        }
        Ok(Self {
            capacity,
            occupied: BinaryHeap::with_capacity(capacity),
        })
    }

    /// Is at least one booth open
    pub fn has_capacity(&self) -> bool {
        self.occupied.len() < self.capacity
    }

    /// Is at least one booth occupied
    pub fn has_occupant(&self) -> bool {
        !self.occupied.is_empty()
    }

    /// Number of booths currently occupied
    pub fn occupancy(&self) -> usize {
        self.occupied.len()
    }

    /// Number of booths in the bank
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Admit a served voter to an open booth
    ///
    /// `voter_index` is the voter's position in the engine's voter list;
    /// it comes back out of [`release_earliest`](Self::release_earliest).
    ///
    /// # Errors
    /// [`PoolError::DoubleAdmission`] if all booths are in use or the
    /// voter's start time has not been assigned.
    pub fn admit(&mut self, voter_index: usize, voter: &Voter) -> Result<(), PoolError> {
        if !self.has_capacity() {
            return Err(PoolError::DoubleAdmission("all booths in use"));
        }
        let time = voter
            .departure_time()
            .ok_or(PoolError::DoubleAdmission("voter start time not set"))?;

        self.occupied.push(Departure { time, voter_index });
        Ok(())
    }

    /// When will the next booth be free, without freeing it
    ///
    /// # Errors
    /// [`PoolError::EmptyPoolQuery`] if no booth is occupied.
    pub fn next_release(&self) -> Result<f64, PoolError> {
        self.occupied
            .peek()
            .map(|d| d.time)
            .ok_or(PoolError::EmptyPoolQuery)
    }

    /// Free the booth with the earliest departure
    ///
    /// Returns the departing voter's index and departure time.
    ///
    /// # Errors
    /// [`PoolError::EmptyPoolQuery`] if no booth is occupied.
    pub fn release_earliest(&mut self) -> Result<(usize, f64), PoolError> {
        self.occupied
            .pop()
            .map(|d| (d.voter_index, d.time))
            .ok_or(PoolError::EmptyPoolQuery)
    }
}
