//! Domain models
//!
//! Core simulation entities: voters and precinct configuration.

pub mod precinct;
pub mod voter;
