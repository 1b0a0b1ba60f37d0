//! Test fixtures for itinerary-planner.
//!
//! Provides realistic test data:
//! - Real Lisbon / Sintra points of interest grouped by neighborhood
//! - Conversion into activities for the schedule builder

pub mod lisbon_locations;

pub use lisbon_locations::*;
