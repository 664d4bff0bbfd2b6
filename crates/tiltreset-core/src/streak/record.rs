use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user's practice history as shown on the home screen.
///
/// `longest_streak >= current_streak` holds for every record produced by
/// [`super::apply_completion`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStreakRecord {
    /// Consecutive-day completion count.
    pub current_streak: u32,
    /// Highest `current_streak` ever observed.
    pub longest_streak: u32,
    /// Number of completion events, never decreases.
    pub total_days: u32,
    /// Mock count of milestone tokens minted.
    #[serde(default)]
    pub nfts_minted: u32,
    /// Instant of the most recent completion.
    #[serde(default)]
    pub last_practice_date: Option<DateTime<Utc>>,
}

impl UserStreakRecord {
    /// Whether the record has ever seen a completion.
    pub fn has_practiced(&self) -> bool {
        self.last_practice_date.is_some()
    }
}
