//! Single-day schedule builder.
//!
//! Walks an ordered activity list, inserting a travel segment between each
//! consecutive pair and stamping start/end times on a running clock. When the
//! day runs past its length budget only the last item is shortened.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::clock::{format_time, parse_time};
use crate::error::Result;
use crate::haversine::HaversineEstimator;
use crate::model::{
    Activity, DayPlan, ItemType, ItineraryItem, Pace, Rating, TravelMode, TravelSegment,
    UserPreferences,
};
use crate::traits::TravelEstimator;

/// Shortest duration overflow correction may leave on the last item.
pub const MIN_LAST_ITEM_MINUTES: i32 = 30;

/// Timed items and the travel between them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DaySchedule {
    pub items: Vec<ItineraryItem>,
    pub segments: Vec<TravelSegment>,
}

impl DaySchedule {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn summary(&self) -> DaySummary {
        DaySummary::from_parts(&self.items, &self.segments)
    }
}

/// Totals for one day.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySummary {
    pub total_travel_minutes: i32,
    pub total_activity_minutes: i32,
    pub total_distance_km: f64,
    pub distance_by_mode: HashMap<TravelMode, f64>,
}

impl DaySummary {
    pub fn from_parts(items: &[ItineraryItem], segments: &[TravelSegment]) -> Self {
        let mut distance_by_mode: HashMap<TravelMode, f64> = HashMap::new();
        for segment in segments {
            *distance_by_mode.entry(segment.mode).or_default() += segment.distance_km;
        }

        Self {
            total_travel_minutes: segments.iter().map(|s| s.minutes).sum(),
            total_activity_minutes: items.iter().map(|i| i.duration_minutes).sum(),
            total_distance_km: segments.iter().map(|s| s.distance_km).sum(),
            distance_by_mode,
        }
    }

    pub fn for_day(day: &DayPlan) -> Self {
        Self::from_parts(&day.items, &day.segments)
    }

    /// Wall-clock span from first start to last end; schedules have no idle gaps.
    pub fn elapsed_minutes(&self) -> i32 {
        self.total_travel_minutes + self.total_activity_minutes
    }
}

/// Default visit length for an activity: better-rated places get more time,
/// scaled by the traveler's pace.
pub fn default_duration_minutes(rating: Rating, pace: Pace) -> i32 {
    let base = match rating {
        Rating::Three => 120.0,
        Rating::Two => 90.0,
        Rating::One => 60.0,
    };
    (base * pace.duration_factor()).round() as i32
}

/// Builds day schedules with a pluggable travel estimator.
#[derive(Debug, Clone)]
pub struct ScheduleBuilder<E = HaversineEstimator> {
    pub estimator: E,
    pub min_last_item_minutes: i32,
}

impl Default for ScheduleBuilder<HaversineEstimator> {
    fn default() -> Self {
        Self::new(HaversineEstimator::default())
    }
}

impl<E: TravelEstimator> ScheduleBuilder<E> {
    pub fn new(estimator: E) -> Self {
        Self {
            estimator,
            min_last_item_minutes: MIN_LAST_ITEM_MINUTES,
        }
    }

    /// Schedule `activities` in the given order.
    ///
    /// `duration_overrides` maps activity id to minutes and wins over the
    /// rating/pace default. `start_override` replaces the preferred day start.
    /// Fails only if the start time does not parse.
    pub fn build(
        &self,
        activities: &[Activity],
        preferences: &UserPreferences,
        duration_overrides: Option<&HashMap<String, i32>>,
        start_override: Option<&str>,
    ) -> Result<DaySchedule> {
        self.build_with(
            activities,
            preferences,
            Durations::ById(duration_overrides),
            start_override,
        )
    }

    fn build_with(
        &self,
        activities: &[Activity],
        preferences: &UserPreferences,
        durations: Durations<'_>,
        start_override: Option<&str>,
    ) -> Result<DaySchedule> {
        let mode = preferences.default_transport_mode.travel_mode();
        let start_minutes = parse_time(start_override.unwrap_or(&preferences.day_start_time))?;
        let day_length = i32::try_from(preferences.day_length_hours)
            .unwrap_or(i32::MAX)
            .saturating_mul(60);
        let end_of_day = start_minutes.saturating_add(day_length);

        let mut items: Vec<ItineraryItem> = Vec::with_capacity(activities.len());
        let mut segments: Vec<TravelSegment> = Vec::with_capacity(activities.len().saturating_sub(1));
        let mut clock = start_minutes;

        for (i, activity) in activities.iter().enumerate() {
            if i > 0 {
                let prev = &activities[i - 1];
                let distance_km = self.estimator.distance_km(prev.location, activity.location);
                let minutes = self.estimator.travel_minutes(distance_km, mode);
                segments.push(travel_segment(prev, activity, minutes, mode, distance_km));
                clock = clock.saturating_add(minutes);
            }

            let duration = durations.resolve(i, activity, preferences.default_pace);
            let start_time = format_time(clock);
            clock = clock.saturating_add(duration);

            items.push(ItineraryItem {
                id: format!("{}-{}", activity.id, i),
                activity_id: activity.id.clone(),
                name: activity.name.clone(),
                description: activity.description.clone(),
                item_type: ItemType::Attraction,
                duration_minutes: duration,
                start_time,
                end_time: format_time(clock),
                location: activity.location,
                rating: Some(activity.rating),
                image_url: activity.image_url.clone(),
                notes: None,
            });
        }

        if clock > end_of_day {
            if let Some(last) = items.last_mut() {
                let overflow = clock - end_of_day;
                let shortened = last
                    .duration_minutes
                    .saturating_sub(overflow)
                    .max(self.min_last_item_minutes);
                let last_start = clock - last.duration_minutes;
                debug!(
                    overflow,
                    from = last.duration_minutes,
                    to = shortened,
                    activity_id = %last.activity_id,
                    "Day over budget, shortening last item"
                );
                last.duration_minutes = shortened;
                last.end_time = format_time(last_start.saturating_add(shortened));
            }
        }

        debug!(
            activities = activities.len(),
            mode = mode.as_str(),
            start = %format_time(start_minutes),
            end = %items.last().map(|item| item.end_time.as_str()).unwrap_or("-"),
            "Built day schedule"
        );

        Ok(DaySchedule { items, segments })
    }
}

/// Where each scheduled occurrence takes its duration from.
enum Durations<'a> {
    /// Caller overrides keyed by activity id, else the rating/pace default.
    ById(Option<&'a HashMap<String, i32>>),
    /// One duration per position, as kept on existing items.
    ByPosition(&'a [i32]),
}

impl Durations<'_> {
    fn resolve(&self, index: usize, activity: &Activity, pace: Pace) -> i32 {
        let requested = match self {
            Durations::ById(overrides) => overrides.and_then(|o| o.get(&activity.id)).copied(),
            Durations::ByPosition(minutes) => minutes.get(index).copied(),
        };

        match requested {
            Some(minutes) if minutes > 0 => minutes,
            Some(minutes) => {
                warn!(activity_id = %activity.id, minutes, "Ignoring non-positive duration override");
                default_duration_minutes(activity.rating, pace)
            }
            None => default_duration_minutes(activity.rating, pace),
        }
    }
}

/// Schedule `activities` with the default haversine travel model.
pub fn build_schedule(
    activities: &[Activity],
    preferences: &UserPreferences,
    duration_overrides: Option<&HashMap<String, i32>>,
    start_override: Option<&str>,
) -> Result<DaySchedule> {
    ScheduleBuilder::<HaversineEstimator>::default().build(
        activities,
        preferences,
        duration_overrides,
        start_override,
    )
}

impl DayPlan {
    /// Re-derive times and segments from the current item order.
    ///
    /// Each item keeps its duration. Used after a cross-day move, which leaves
    /// both affected days with stale times.
    pub fn rescheduled(
        &self,
        preferences: &UserPreferences,
        start_override: Option<&str>,
    ) -> Result<DayPlan> {
        let activities: Vec<Activity> = self.items.iter().map(ItineraryItem::to_activity).collect();
        let durations: Vec<i32> = self.items.iter().map(|item| item.duration_minutes).collect();

        let schedule = ScheduleBuilder::<HaversineEstimator>::default().build_with(
            &activities,
            preferences,
            Durations::ByPosition(&durations),
            start_override,
        )?;

        // Keep per-item fields the builder does not know about.
        let items = schedule
            .items
            .into_iter()
            .zip(&self.items)
            .map(|(mut rebuilt, original)| {
                rebuilt.item_type = original.item_type;
                rebuilt.rating = original.rating;
                rebuilt.notes = original.notes.clone();
                rebuilt
            })
            .collect();

        Ok(DayPlan {
            items,
            segments: schedule.segments,
            ..self.clone()
        })
    }
}

fn travel_segment(
    from: &Activity,
    to: &Activity,
    minutes: i32,
    mode: TravelMode,
    distance_km: f64,
) -> TravelSegment {
    TravelSegment {
        from_activity_id: from.id.clone(),
        to_activity_id: to.id.clone(),
        minutes,
        mode,
        distance_km,
        description: format!("{} min {}", minutes, mode.as_str()),
        transport_details: match mode {
            TravelMode::Transit => Some("Public transport".to_string()),
            _ => None,
        },
    }
}
