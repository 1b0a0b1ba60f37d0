//! Cross-day relocation heuristic.
//!
//! Each day is represented by the centroid of its items. An item that sits
//! much closer to another day's centroid than to its own is a candidate to
//! move there; the single best candidate is suggested.

use rayon::prelude::*;
use tracing::{debug, trace, warn};

use crate::haversine::{centroid, distance_km};
use crate::model::{Coordinate, DayPlan, OptimizationSuggestion, TripPlan};

#[derive(Debug, Clone)]
pub struct OptimizerOptions {
    /// Minutes credited per kilometer of centroid distance saved.
    pub minutes_per_km: f64,
    /// A move is only suggested if it saves strictly more than this.
    pub min_saving_minutes: f64,
}

impl Default for OptimizerOptions {
    fn default() -> Self {
        Self {
            minutes_per_km: 12.0,
            min_saving_minutes: 20.0,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Candidate {
    from_day: u32,
    item_index: usize,
    to_day: u32,
    saving_minutes: f64,
}

/// Suggest the best single move using the default heuristic constants.
pub fn suggest(trip: &TripPlan) -> Option<OptimizationSuggestion> {
    suggest_with(trip, &OptimizerOptions::default())
}

/// Suggest the single activity move with the largest saving above the
/// threshold, or `None` if no move qualifies.
///
/// Days are scanned in ascending day number, items in array order and
/// target days in ascending day number; on equal savings the first wins.
pub fn suggest_with(trip: &TripPlan, options: &OptimizerOptions) -> Option<OptimizationSuggestion> {
    let days = trip.days_in_order();
    let centroids: Vec<(u32, Coordinate)> = days
        .iter()
        .filter_map(|day| centroid(&day.items).map(|c| (day.day, c)))
        .collect();

    if centroids.len() < 2 {
        debug!(days = centroids.len(), "Not enough populated days to compare");
        return None;
    }

    // Per-day scans run in parallel; collecting keeps day order so the
    // sequential reduction below preserves first-maximum-wins.
    let per_day: Vec<Option<Candidate>> = days
        .par_iter()
        .map(|day| best_move_for_day(day, &centroids, options))
        .collect();

    let best = per_day.into_iter().flatten().fold(None, |best: Option<Candidate>, candidate| {
        match best {
            Some(current) if candidate.saving_minutes <= current.saving_minutes => Some(current),
            _ => Some(candidate),
        }
    });

    let Some(best) = best else {
        debug!(destination = %trip.destination, "No beneficial move found");
        return None;
    };

    let item = trip.day(best.from_day).map(|day| &day.items[best.item_index])?;
    debug!(
        activity_id = %item.activity_id,
        from_day = best.from_day,
        to_day = best.to_day,
        saving_minutes = best.saving_minutes,
        "Suggesting activity move"
    );

    Some(OptimizationSuggestion {
        activity_id: item.activity_id.clone(),
        activity_name: item.name.clone(),
        from_day: best.from_day,
        to_day: best.to_day,
        saving_minutes: best.saving_minutes,
    })
}

fn best_move_for_day(
    day: &DayPlan,
    centroids: &[(u32, Coordinate)],
    options: &OptimizerOptions,
) -> Option<Candidate> {
    let (_, own) = centroids.iter().find(|(number, _)| *number == day.day)?;
    let mut best: Option<Candidate> = None;

    for (item_index, item) in day.items.iter().enumerate() {
        let to_own = distance_km(item.location, *own);

        for &(other_day, other) in centroids {
            if other_day == day.day {
                continue;
            }

            let delta_km = to_own - distance_km(item.location, other);
            let saving_minutes = delta_km * options.minutes_per_km;
            trace!(
                activity_id = %item.activity_id,
                from_day = day.day,
                to_day = other_day,
                saving_minutes,
                "Evaluated move"
            );

            if saving_minutes <= options.min_saving_minutes {
                continue;
            }
            if best.is_none_or(|current| saving_minutes > current.saving_minutes) {
                best = Some(Candidate {
                    from_day: day.day,
                    item_index,
                    to_day: other_day,
                    saving_minutes,
                });
            }
        }
    }

    best
}

/// Move the suggested activity's item from its origin day to the end of the
/// destination day, returning a new trip.
///
/// Times and segments of both days are left as they were; reschedule them
/// with [`DayPlan::rescheduled`]. If the origin day no longer holds the
/// activity, or the destination day does not exist, the trip is returned
/// unchanged.
pub fn apply(trip: &TripPlan, suggestion: &OptimizationSuggestion) -> TripPlan {
    let mut updated = trip.clone();

    let Some(position) = updated.day(suggestion.from_day).and_then(|day| {
        day.items
            .iter()
            .position(|item| item.activity_id == suggestion.activity_id)
    }) else {
        warn!(
            activity_id = %suggestion.activity_id,
            from_day = suggestion.from_day,
            "Activity not found on origin day, leaving trip unchanged"
        );
        return updated;
    };

    if updated.day(suggestion.to_day).is_none() {
        warn!(
            to_day = suggestion.to_day,
            "Destination day does not exist, leaving trip unchanged"
        );
        return updated;
    }

    let Some(item) = updated
        .day_mut(suggestion.from_day)
        .map(|day| day.items.remove(position))
    else {
        return updated;
    };
    if let Some(destination) = updated.day_mut(suggestion.to_day) {
        destination.items.push(item);
    }

    debug!(
        activity_id = %suggestion.activity_id,
        from_day = suggestion.from_day,
        to_day = suggestion.to_day,
        "Applied activity move"
    );

    updated
}
