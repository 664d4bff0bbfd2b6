//! Sources for the user record.
//!
//! There is no backend: [`SeedRepository`] simulates a fetch by sleeping
//! and handing out a fixed record, [`MemoryRepository`] returns whatever it
//! was built with.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;

use super::record::UserStreakRecord;
use crate::clock::Clock;
use crate::error::RepositoryError;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch the current user's record.
    async fn load_user(&self) -> Result<UserStreakRecord, RepositoryError>;
}

/// Values of the simulated fetch, minus the timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedValues {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub total_days: u32,
    pub nfts_minted: u32,
}

impl Default for SeedValues {
    fn default() -> Self {
        Self {
            current_streak: 5,
            longest_streak: 12,
            total_days: 30,
            nfts_minted: 2,
        }
    }
}

/// Simulated remote fetch: waits `delay`, then yields the seed record
/// stamped as practiced "now".
pub struct SeedRepository {
    seed: SeedValues,
    delay: Duration,
    clock: Arc<dyn Clock>,
}

impl SeedRepository {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            seed: SeedValues::default(),
            delay: Duration::from_millis(1000),
            clock,
        }
    }

    pub fn with_seed(mut self, seed: SeedValues) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[async_trait]
impl UserRepository for SeedRepository {
    async fn load_user(&self) -> Result<UserStreakRecord, RepositoryError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        let SeedValues {
            current_streak,
            longest_streak,
            total_days,
            nfts_minted,
        } = self.seed;
        Ok(UserStreakRecord {
            current_streak,
            longest_streak,
            total_days,
            nfts_minted,
            last_practice_date: Some(self.clock.now().with_timezone(&Utc)),
        })
    }
}

/// Returns a fixed outcome.
#[derive(Debug, Clone)]
pub struct MemoryRepository {
    outcome: Result<UserStreakRecord, RepositoryError>,
}

impl MemoryRepository {
    pub fn new(record: UserStreakRecord) -> Self {
        Self {
            outcome: Ok(record),
        }
    }

    pub fn failing(error: RepositoryError) -> Self {
        Self {
            outcome: Err(error),
        }
    }
}

#[async_trait]
impl UserRepository for MemoryRepository {
    async fn load_user(&self) -> Result<UserStreakRecord, RepositoryError> {
        self.outcome.clone()
    }
}
