//! Seams between the scheduling core and its geometry.
//!
//! The builder and optimizer only need coordinates and a travel model;
//! anything implementing these traits can be scheduled.

use crate::model::{Activity, Coordinate, ItineraryItem, TravelMode};

/// Anything with a position on the map.
pub trait Located {
    fn location(&self) -> Coordinate;
}

impl Located for Coordinate {
    fn location(&self) -> Coordinate {
        *self
    }
}

impl Located for Activity {
    fn location(&self) -> Coordinate {
        self.location
    }
}

impl Located for ItineraryItem {
    fn location(&self) -> Coordinate {
        self.location
    }
}

impl<T: Located> Located for &T {
    fn location(&self) -> Coordinate {
        T::location(*self)
    }
}

/// Provides distances and travel-time estimates between two stops.
pub trait TravelEstimator {
    /// Distance between two points in kilometers.
    fn distance_km(&self, from: Coordinate, to: Coordinate) -> f64;

    /// Whole minutes needed to cover `distance_km` using `mode`.
    fn travel_minutes(&self, distance_km: f64, mode: TravelMode) -> i32;
}
