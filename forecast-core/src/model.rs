use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Time units accepted in a request's time phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    Minute,
    Hour,
    Day,
}

impl TimeUnit {
    /// Case-insensitive lookup of a unit word, singular or plural.
    pub fn from_word(word: &str) -> Option<Self> {
        match word.to_ascii_lowercase().as_str() {
            "minute" | "minutes" => Some(TimeUnit::Minute),
            "hour" | "hours" => Some(TimeUnit::Hour),
            "day" | "days" => Some(TimeUnit::Day),
            _ => None,
        }
    }

    pub fn to_hours(self, amount: f64) -> f64 {
        match self {
            TimeUnit::Minute => amount / 60.0,
            TimeUnit::Hour => amount,
            TimeUnit::Day => amount * 24.0,
        }
    }
}

/// A parsed forecast request.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastRequest {
    /// Trimmed, non-empty location name.
    pub location: String,
    /// Forecast horizon in hours, never negative.
    pub duration_hours: f64,
}

/// Outcome of a single simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub temperature_celsius: i32,
    pub location: String,
    pub duration_hours: f64,
}

impl SimulationResult {
    /// Instant the forecast refers to, `duration_hours` after `now`.
    ///
    /// Returns `None` when the horizon does not fit in a `DateTime<Utc>`.
    pub fn valid_at(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let millis = self.duration_hours * 3_600_000.0;
        if !millis.is_finite() || millis > i64::MAX as f64 {
            return None;
        }
        let delta = Duration::try_milliseconds(millis as i64)?;
        now.checked_add_signed(delta)
    }
}
