//! itinerary-planner core
//!
//! Distance and travel-time estimation, day scheduling under a time budget,
//! and a single-move heuristic for rebalancing activities across trip days.

pub mod error;
pub mod model;
pub mod traits;
pub mod haversine;
pub mod clock;
pub mod schedule;
pub mod optimizer;

pub use error::{PlannerError, Result};
pub use model::{
    Activity, Coordinate, DayPlan, ItemType, ItineraryItem, OptimizationSuggestion, Pace, Rating,
    TransportPreference, TravelMode, TravelSegment, TripPlan, UserPreferences,
};
pub use schedule::{build_schedule, DaySchedule, DaySummary, ScheduleBuilder};
