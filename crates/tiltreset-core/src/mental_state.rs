//! Mental state meter shown at the top of the home screen.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::streak::UserStreakRecord;

/// Hours reported when the user has never practiced.
const NEVER_PRACTICED_HOURS: f64 = 999.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MentalState {
    /// Practiced today, within the last hour.
    Peak,
    /// Practiced today.
    Calm,
    /// Not today, and more than 24 hours ago.
    Tilted,
    Neutral,
}

impl MentalState {
    pub fn classify(
        record: Option<&UserStreakRecord>,
        today_completed: bool,
        now: DateTime<Utc>,
    ) -> Self {
        let Some(record) = record else {
            return MentalState::Neutral;
        };
        let hours = hours_since(record.last_practice_date, now);

        if today_completed && hours < 1.0 {
            MentalState::Peak
        } else if today_completed {
            MentalState::Calm
        } else if hours > 24.0 {
            MentalState::Tilted
        } else {
            MentalState::Neutral
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            MentalState::Peak => "🔥",
            MentalState::Calm => "😌",
            MentalState::Tilted => "😡",
            MentalState::Neutral => "😐",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MentalState::Peak => "PEAK",
            MentalState::Calm => "CALM",
            MentalState::Tilted => "TILTED",
            MentalState::Neutral => "NEUTRAL",
        }
    }

    /// Hex colour used by the meter.
    pub fn color(&self) -> &'static str {
        match self {
            MentalState::Peak => "#00FF87",
            MentalState::Calm => "#00D9FF",
            MentalState::Tilted => "#FF4655",
            MentalState::Neutral => "#9CA3AF",
        }
    }
}

fn hours_since(last: Option<DateTime<Utc>>, now: DateTime<Utc>) -> f64 {
    match last {
        Some(last) => (now - last).num_milliseconds() as f64 / 3_600_000.0,
        None => NEVER_PRACTICED_HOURS,
    }
}
