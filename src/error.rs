use thiserror::Error;

pub type Result<T> = std::result::Result<T, PlannerError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlannerError {
    #[error("invalid time {input:?}: {reason}")]
    InvalidTime { input: String, reason: &'static str },

    #[error("invalid preferences: {0}")]
    InvalidPreferences(String),

    #[error("rating must be 1, 2 or 3, got {0}")]
    InvalidRating(u8),

    #[error("day {0} appears more than once in the trip")]
    DuplicateDay(u32),

    #[error("day {day} is outside the trip range 1..={duration_days}")]
    DayOutOfRange { day: u32, duration_days: u32 },
}

impl PlannerError {
    pub(crate) fn invalid_time(input: &str, reason: &'static str) -> Self {
        PlannerError::InvalidTime {
            input: input.to_string(),
            reason,
        }
    }
}
