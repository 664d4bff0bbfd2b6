//! Streak state holder.
//!
//! ## State Transitions
//!
//! ```text
//! NoRecord --load()--> Loaded --complete_practice()--> Loaded
//! ```
//!
//! `complete_practice` is a no-op in `NoRecord`. There is no terminal state.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::watch;

use super::record::UserStreakRecord;
use super::repository::UserRepository;
use super::rule;
use crate::clock::Clock;
use crate::error::RepositoryError;
use crate::events::Event;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreakState {
    NoRecord,
    Loaded(UserStreakRecord),
}

pub struct StreakStore {
    state: StreakState,
    loading: bool,
    clock: Arc<dyn Clock>,
    observers: watch::Sender<Option<UserStreakRecord>>,
}

impl StreakStore {
    /// Create an empty store. It reports `loading` until [`Self::load`] finishes.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        let (observers, _) = watch::channel(None);
        Self {
            state: StreakState::NoRecord,
            loading: true,
            clock,
            observers,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> &StreakState {
        &self.state
    }

    pub fn record(&self) -> Option<&UserStreakRecord> {
        match &self.state {
            StreakState::Loaded(record) => Some(record),
            StreakState::NoRecord => None,
        }
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    /// Whether the last completion falls on today's local calendar date.
    ///
    /// This deliberately differs from the 24h bucket used by
    /// [`Self::complete_practice`]; the two can disagree around midnight.
    pub fn today_completed(&self) -> bool {
        let last = self.record().and_then(|r| r.last_practice_date);
        rule::completed_on_same_date(last, self.clock.as_ref())
    }

    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    /// Receive every record change. The current value is visible immediately.
    pub fn subscribe(&self) -> watch::Receiver<Option<UserStreakRecord>> {
        self.observers.subscribe()
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Fetch the record from `repo` and move to `Loaded`.
    ///
    /// # Errors
    ///
    /// Returns the repository error; the store stays in `NoRecord` and
    /// stops reporting `loading`.
    pub async fn load(&mut self, repo: &dyn UserRepository) -> Result<Event, RepositoryError> {
        self.loading = true;
        let outcome = repo.load_user().await;
        self.loading = false;
        match outcome {
            Ok(record) => {
                tracing::info!(
                    current_streak = record.current_streak,
                    longest_streak = record.longest_streak,
                    total_days = record.total_days,
                    "user record loaded"
                );
                Ok(self.replace(record))
            }
            Err(e) => {
                tracing::warn!("user record unavailable: {e}");
                Err(e)
            }
        }
    }

    /// Install a record directly, bypassing any repository.
    ///
    /// A longest streak below the current one is raised to match.
    pub fn replace(&mut self, mut record: UserStreakRecord) -> Event {
        if record.longest_streak < record.current_streak {
            tracing::debug!(
                current_streak = record.current_streak,
                longest_streak = record.longest_streak,
                "raising longest streak to current"
            );
            record.longest_streak = record.current_streak;
        }
        let event = Event::RecordLoaded {
            current_streak: record.current_streak,
            longest_streak: record.longest_streak,
            total_days: record.total_days,
            at: self.clock.now().with_timezone(&Utc),
        };
        self.loading = false;
        self.set_record(record);
        event
    }

    /// Record a practice session completed now.
    ///
    /// Returns `None` without side effects when no record is loaded.
    pub fn complete_practice(&mut self) -> Option<Event> {
        let StreakState::Loaded(record) = &self.state else {
            tracing::debug!("complete_practice ignored: no record loaded");
            return None;
        };

        let now = self.clock.now().with_timezone(&Utc);
        let continuation = rule::classify(record.last_practice_date, now);
        let streak_before = record.current_streak;
        let next = rule::apply_completion(record, now);

        tracing::debug!(
            ?continuation,
            streak_before,
            streak_after = next.current_streak,
            "practice completed"
        );

        let event = Event::PracticeCompleted {
            continuation,
            streak_before,
            streak_after: next.current_streak,
            longest_streak: next.longest_streak,
            total_days: next.total_days,
            at: now,
        };
        self.set_record(next);
        Some(event)
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn set_record(&mut self, record: UserStreakRecord) {
        self.observers.send_replace(Some(record.clone()));
        self.state = StreakState::Loaded(record);
    }
}

impl std::fmt::Debug for StreakStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StreakStore")
            .field("state", &self.state)
            .field("loading", &self.loading)
            .finish_non_exhaustive()
    }
}
