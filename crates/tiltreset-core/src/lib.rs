//! # TiltReset Core Library
//!
//! Business logic for TiltReset, a daily mental-reset habit tracker for
//! gamers. The CLI is a thin layer over this crate.
//!
//! ## Architecture
//!
//! - **Streak store**: owns the user record and applies the 24h-bucket
//!   continuation rule on each completed practice
//! - **Wallet store**: mock wallet connection behind an injectable adapter
//! - **Dashboard**: derives the onboarding/loading/home screen from both stores
//! - **Storage**: TOML configuration only; user state lives in memory
//!
//! ## Key Components
//!
//! - [`StreakStore`]: streak state holder
//! - [`WalletStore`]: wallet state holder
//! - [`Screen`]: home screen view model
//! - [`Config`]: application configuration management

pub mod app;
pub mod clock;
pub mod dashboard;
pub mod error;
pub mod events;
pub mod mental_state;
pub mod storage;
pub mod streak;
pub mod wallet;
pub mod wisdom;

pub use app::App;
pub use clock::{Clock, FixedClock, SystemClock};
pub use dashboard::{CallToAction, HomeView, Screen};
pub use error::{ConfigError, CoreError, RepositoryError, ValidationError, WalletError};
pub use events::Event;
pub use mental_state::MentalState;
pub use storage::Config;
pub use streak::{
    MemoryRepository, SeedRepository, StreakState, StreakStore, UserRepository, UserStreakRecord,
};
pub use wallet::{PublicKey, WalletAdapter, WalletConnection, WalletStore};
pub use wisdom::{wisdom_for_day, Wisdom};
