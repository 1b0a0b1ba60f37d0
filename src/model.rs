//! Trip data model.
//!
//! Field names serialize in camelCase so records produced by the content
//! generation service deserialize directly. Only `id`, `rating` and
//! `location` are required on an [`Activity`]; everything else passes
//! through or defaults.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::clock;
use crate::error::{PlannerError, Result};

/// A point on the Earth's surface in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

/// Popularity rating assigned by the content service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Rating {
    One = 1,
    Two = 2,
    Three = 3,
}

impl TryFrom<u8> for Rating {
    type Error = PlannerError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            1 => Ok(Rating::One),
            2 => Ok(Rating::Two),
            3 => Ok(Rating::Three),
            other => Err(PlannerError::InvalidRating(other)),
        }
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating as u8
    }
}

/// A candidate point of interest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub rating: Rating,
    pub location: Coordinate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    #[default]
    Attraction,
    Food,
    Break,
    Transport,
    Hostel,
}

/// One scheduled activity occurrence within a day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryItem {
    pub id: String,
    pub activity_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type", default)]
    pub item_type: ItemType,
    pub duration_minutes: i32,
    /// "HH:MM"
    pub start_time: String,
    /// "HH:MM"
    pub end_time: String,
    pub location: Coordinate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ItineraryItem {
    /// Rebuild the activity this item was scheduled from.
    ///
    /// Items without a rating fall back to [`Rating::Two`]; callers that
    /// reschedule from items pass explicit durations anyway.
    pub fn to_activity(&self) -> Activity {
        Activity {
            id: self.activity_id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            rating: self.rating.unwrap_or(Rating::Two),
            location: self.location,
            image_url: self.image_url.clone(),
        }
    }
}

/// Concrete travel mode of a segment between two stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    Walk,
    Transit,
    Drive,
}

impl TravelMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            TravelMode::Walk => "walk",
            TravelMode::Transit => "transit",
            TravelMode::Drive => "drive",
        }
    }
}

/// Travel between two consecutive items of a day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelSegment {
    pub from_activity_id: String,
    pub to_activity_id: String,
    pub minutes: i32,
    pub mode: TravelMode,
    pub distance_km: f64,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transport_details: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayPlan {
    /// 1-based day number.
    pub day: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default)]
    pub items: Vec<ItineraryItem>,
    #[serde(default)]
    pub segments: Vec<TravelSegment>,
    #[serde(default)]
    pub approved: bool,
}

impl DayPlan {
    pub fn new(day: u32) -> Self {
        Self {
            day,
            theme: None,
            summary: None,
            items: Vec::new(),
            segments: Vec::new(),
            approved: false,
        }
    }

    pub fn contains_activity(&self, activity_id: &str) -> bool {
        self.items.iter().any(|item| item.activity_id == activity_id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pace {
    Leisurely,
    #[default]
    Moderate,
    Fast,
}

impl Pace {
    /// Multiplier applied to the rating-derived base duration.
    pub fn duration_factor(&self) -> f64 {
        match self {
            Pace::Leisurely => 1.2,
            Pace::Moderate => 1.0,
            Pace::Fast => 0.8,
        }
    }
}

/// Transport preference as expressed by the traveler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportPreference {
    #[default]
    Walking,
    Transit,
    Mixed,
}

impl TransportPreference {
    /// Mixed travel is estimated as driving.
    pub fn travel_mode(&self) -> TravelMode {
        match self {
            TransportPreference::Walking => TravelMode::Walk,
            TransportPreference::Transit => TravelMode::Transit,
            TransportPreference::Mixed => TravelMode::Drive,
        }
    }
}

pub const MIN_DAY_LENGTH_HOURS: u32 = 4;
pub const MAX_DAY_LENGTH_HOURS: u32 = 16;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    pub day_start_time: String,
    pub day_length_hours: u32,
    pub default_pace: Pace,
    pub default_transport_mode: TransportPreference,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            day_start_time: "09:00".to_string(),
            day_length_hours: 10,
            default_pace: Pace::Moderate,
            default_transport_mode: TransportPreference::Walking,
        }
    }
}

impl UserPreferences {
    pub fn validate(&self) -> Result<()> {
        if !(MIN_DAY_LENGTH_HOURS..=MAX_DAY_LENGTH_HOURS).contains(&self.day_length_hours) {
            return Err(PlannerError::InvalidPreferences(format!(
                "day length must be between {} and {} hours, got {}",
                MIN_DAY_LENGTH_HOURS, MAX_DAY_LENGTH_HOURS, self.day_length_hours
            )));
        }
        clock::parse_time(&self.day_start_time)
            .map_err(|err| PlannerError::InvalidPreferences(err.to_string()))?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripPlan {
    pub destination: String,
    pub duration_days: u32,
    pub days: Vec<DayPlan>,
    #[serde(default)]
    pub preferences: UserPreferences,
}

impl TripPlan {
    /// Build a trip, checking that day numbers are unique and within
    /// `1..=duration_days`.
    pub fn new(
        destination: impl Into<String>,
        duration_days: u32,
        days: Vec<DayPlan>,
        preferences: UserPreferences,
    ) -> Result<Self> {
        let trip = Self {
            destination: destination.into(),
            duration_days,
            days,
            preferences,
        };
        trip.validate()?;
        Ok(trip)
    }

    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for day in &self.days {
            if day.day == 0 || day.day > self.duration_days {
                return Err(PlannerError::DayOutOfRange {
                    day: day.day,
                    duration_days: self.duration_days,
                });
            }
            if !seen.insert(day.day) {
                return Err(PlannerError::DuplicateDay(day.day));
            }
        }
        Ok(())
    }

    pub fn day(&self, day: u32) -> Option<&DayPlan> {
        self.days.iter().find(|plan| plan.day == day)
    }

    pub fn day_mut(&mut self, day: u32) -> Option<&mut DayPlan> {
        self.days.iter_mut().find(|plan| plan.day == day)
    }

    /// Days sorted by ascending day number, regardless of storage order.
    pub fn days_in_order(&self) -> Vec<&DayPlan> {
        let mut days: Vec<&DayPlan> = self.days.iter().collect();
        days.sort_by_key(|plan| plan.day);
        days
    }

    /// Mark a day as finished. Returns false if the day does not exist.
    pub fn approve_day(&mut self, day: u32) -> bool {
        match self.day_mut(day) {
            Some(plan) => {
                plan.approved = true;
                true
            }
            None => false,
        }
    }

    pub fn item_count(&self) -> usize {
        self.days.iter().map(|plan| plan.items.len()).sum()
    }
}

/// A proposed relocation of one activity to another day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationSuggestion {
    pub activity_id: String,
    pub activity_name: String,
    pub from_day: u32,
    pub to_day: u32,
    pub saving_minutes: f64,
}
