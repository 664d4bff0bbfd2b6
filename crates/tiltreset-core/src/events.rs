use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::streak::Continuation;

/// Every state change in the system produces an Event.
/// The CLI prints them; observers can log or forward them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// The user record arrived from the repository.
    RecordLoaded {
        current_streak: u32,
        longest_streak: u32,
        total_days: u32,
        at: DateTime<Utc>,
    },
    PracticeCompleted {
        continuation: Continuation,
        streak_before: u32,
        streak_after: u32,
        longest_streak: u32,
        total_days: u32,
        at: DateTime<Utc>,
    },
    WalletConnected {
        public_key: String,
        at: DateTime<Utc>,
    },
    /// Connection attempt failed; the wallet state was left untouched.
    WalletConnectFailed {
        reason: String,
        at: DateTime<Utc>,
    },
    WalletDisconnected {
        at: DateTime<Utc>,
    },
}

impl Event {
    pub fn at(&self) -> DateTime<Utc> {
        match self {
            Event::RecordLoaded { at, .. }
            | Event::PracticeCompleted { at, .. }
            | Event::WalletConnected { at, .. }
            | Event::WalletConnectFailed { at, .. }
            | Event::WalletDisconnected { at } => *at,
        }
    }
}
