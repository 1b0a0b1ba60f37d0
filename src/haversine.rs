//! Haversine distance and travel-time estimation.
//!
//! Uses great-circle distance with per-mode average speeds.
//! Ignores roads and traffic; good enough for comparing stops within a city.

use crate::model::{Coordinate, TravelMode};
use crate::traits::{Located, TravelEstimator};

/// Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

const WALK_SPEED_KMH: f64 = 4.5;
const DRIVE_SPEED_KMH: f64 = 30.0;
const TRANSIT_SPEED_KMH: f64 = 20.0;

/// Haversine-based travel estimator.
///
/// Each mode converts straight-line distance to minutes at an average speed,
/// adds a fixed buffer (parking, waiting for a connection) and never returns
/// less than the mode's floor.
#[derive(Debug, Clone)]
pub struct HaversineEstimator {
    pub walk_kmh: f64,
    pub drive_kmh: f64,
    pub transit_kmh: f64,
    pub drive_buffer_minutes: i32,
    pub transit_wait_minutes: i32,
    pub walk_min_minutes: i32,
    pub drive_min_minutes: i32,
    pub transit_min_minutes: i32,
}

impl Default for HaversineEstimator {
    fn default() -> Self {
        Self {
            walk_kmh: WALK_SPEED_KMH,
            drive_kmh: DRIVE_SPEED_KMH,
            transit_kmh: TRANSIT_SPEED_KMH,
            drive_buffer_minutes: 5,
            transit_wait_minutes: 8,
            walk_min_minutes: 5,
            drive_min_minutes: 5,
            transit_min_minutes: 10,
        }
    }
}

impl HaversineEstimator {
    fn km_to_minutes(km: f64, speed_kmh: f64) -> i32 {
        let hours = km / speed_kmh;
        (hours * 60.0).round() as i32
    }
}

impl TravelEstimator for HaversineEstimator {
    fn distance_km(&self, from: Coordinate, to: Coordinate) -> f64 {
        distance_km(from, to)
    }

    fn travel_minutes(&self, distance_km: f64, mode: TravelMode) -> i32 {
        match mode {
            TravelMode::Walk => {
                Self::km_to_minutes(distance_km, self.walk_kmh).max(self.walk_min_minutes)
            }
            TravelMode::Drive => (Self::km_to_minutes(distance_km, self.drive_kmh)
                + self.drive_buffer_minutes)
                .max(self.drive_min_minutes),
            TravelMode::Transit => (Self::km_to_minutes(distance_km, self.transit_kmh)
                + self.transit_wait_minutes)
                .max(self.transit_min_minutes),
        }
    }
}

/// Great-circle distance between two points in kilometers.
pub fn distance_km(from: Coordinate, to: Coordinate) -> f64 {
    let lat1_rad = from.latitude.to_radians();
    let lat2_rad = to.latitude.to_radians();
    let delta_lat = (to.latitude - from.latitude).to_radians();
    let delta_lng = (to.longitude - from.longitude).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    // Rounding can push `a` a hair past 1 for antipodal points.
    let c = 2.0 * a.sqrt().min(1.0).asin();

    EARTH_RADIUS_KM * c
}

/// Travel minutes using the default speeds.
pub fn travel_minutes(distance_km: f64, mode: TravelMode) -> i32 {
    HaversineEstimator::default().travel_minutes(distance_km, mode)
}

/// Arithmetic mean of the given points, or `None` if there are none.
pub fn centroid<L: Located>(points: &[L]) -> Option<Coordinate> {
    if points.is_empty() {
        return None;
    }

    let (lat_sum, lng_sum) = points.iter().fold((0.0, 0.0), |(lat, lng), point| {
        let location = point.location();
        (lat + location.latitude, lng + location.longitude)
    });
    let n = points.len() as f64;

    Some(Coordinate::new(lat_sum / n, lng_sum / n))
}
