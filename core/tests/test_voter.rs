//! Tests for the Voter model and precinct configuration

use polling_simulator_core_rs::{PrecinctConfig, Voter};

#[test]
fn test_voter_starts_unserved() {
    let voter = Voter::new(12.5, 4.0, true);

    assert!(!voter.voted());
    assert_eq!(voter.start_time(), None);
    assert_eq!(voter.departure_time(), None);
}

#[test]
fn test_outcome_invariant_after_serving() {
    // voted == true ⇔ start_time and departure_time are both set
    let mut voter = Voter::new(12.5, 4.0, false);
    voter.begin_voting(20.0);

    assert!(voter.voted());
    assert_eq!(voter.start_time(), Some(20.0));
    assert_eq!(voter.departure_time(), Some(24.0));
}

#[test]
fn test_departure_equals_start_plus_duration() {
    let mut voter = Voter::new(0.0, 7.25, false);
    voter.begin_voting(3.5);

    let start = voter.start_time().unwrap();
    let departure = voter.departure_time().unwrap();
    assert_eq!(departure, start + voter.voting_duration());
}

#[test]
fn test_voter_serde_round_trip() {
    let mut voter = Voter::new(1.5, 3.0, true);
    voter.begin_voting(2.0);

    let json = serde_json::to_string(&voter).unwrap();
    let back: Voter = serde_json::from_str(&json).unwrap();

    assert_eq!(back.arrival_time(), voter.arrival_time());
    assert_eq!(back.voting_duration(), voter.voting_duration());
    assert_eq!(back.is_impatient(), voter.is_impatient());
    assert_eq!(back.start_time(), voter.start_time());
    assert_eq!(back.departure_time(), voter.departure_time());
    assert_eq!(back.voted(), voter.voted());
}

#[test]
fn test_precinct_config_serde_round_trip() {
    // External config loaders hand this struct over the serde boundary
    let config = PrecinctConfig {
        name: "Little Rodentia".to_string(),
        hours_open: 13,
        num_voters: 50,
        arrival_rate: 0.17,
        voting_duration_rate: 0.1,
        impatience_prob: 0.04,
    };

    let json = serde_json::to_string(&config).unwrap();
    let back: PrecinctConfig = serde_json::from_str(&json).unwrap();

    assert_eq!(back.name, config.name);
    assert_eq!(back.hours_open, config.hours_open);
    assert_eq!(back.num_voters, config.num_voters);
    assert_eq!(back.arrival_rate, config.arrival_rate);
    assert_eq!(back.voting_duration_rate, config.voting_duration_rate);
    assert_eq!(back.impatience_prob, config.impatience_prob);
    assert_eq!(back.minutes_open(), 780.0);
}
