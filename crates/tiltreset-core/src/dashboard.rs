//! Home screen view model.
//!
//! Picks which screen to show and derives every displayed value from the
//! two stores. Nothing here mutates state.

use chrono::{Datelike, NaiveDate, Utc};
use serde::Serialize;

use crate::clock::Clock;
use crate::mental_state::MentalState;
use crate::storage::Config;
use crate::streak::{StreakStore, UserStreakRecord};
use crate::wallet::WalletStore;
use crate::wisdom::{wisdom_for_day, Wisdom};

pub const TAGLINE: &str = "The Mental Edge For Gamers";

const WEEKDAY_LETTERS: [&str; 7] = ["S", "M", "T", "W", "T", "F", "S"];

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum Screen {
    Onboarding { tagline: &'static str },
    Loading,
    Home(Box<HomeView>),
}

#[derive(Debug, Clone, Serialize)]
pub struct HomeView {
    pub short_address: Option<String>,
    pub mental_state: MentalStateView,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub total_days: u32,
    pub nfts_minted: u32,
    pub today_completed: bool,
    pub week: Vec<WeekDot>,
    /// Absent once today's practice is done.
    pub seal_progress: Option<SealProgress>,
    pub wisdom: Wisdom,
    pub call_to_action: CallToAction,
}

#[derive(Debug, Clone, Serialize)]
pub struct MentalStateView {
    pub state: MentalState,
    pub emoji: &'static str,
    pub label: &'static str,
    pub color: &'static str,
}

impl From<MentalState> for MentalStateView {
    fn from(state: MentalState) -> Self {
        Self {
            state,
            emoji: state.emoji(),
            label: state.label(),
            color: state.color(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeekDot {
    pub day: &'static str,
    pub completed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SealProgress {
    pub target_days: u32,
    pub percent: f64,
    pub days_remaining: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CallToAction {
    /// Today is done; show the congratulation banner.
    Completed,
    EmergencyReset,
    PreGameWarmup,
}

impl CallToAction {
    pub fn title(&self) -> &'static str {
        match self {
            CallToAction::Completed => "Your mental is peak. Dominate the game! 🎮",
            CallToAction::EmergencyReset => "🚨 Emergency Reset",
            CallToAction::PreGameWarmup => "🎮 Pre-Game Warmup",
        }
    }
}

impl Screen {
    pub fn build(streak: &StreakStore, wallet: &WalletStore, config: &Config) -> Self {
        if !wallet.connected() {
            return Screen::Onboarding { tagline: TAGLINE };
        }
        if streak.loading() {
            return Screen::Loading;
        }

        let now = streak.clock().now();
        let today = streak.clock().today();
        let today_completed = streak.today_completed();
        let record = streak.record();
        let mental = MentalState::classify(record, today_completed, now.with_timezone(&Utc));
        let zero = UserStreakRecord::default();
        let shown = record.unwrap_or(&zero);

        Screen::Home(Box::new(HomeView {
            short_address: wallet.public_key().map(|k| k.short()),
            mental_state: mental.into(),
            current_streak: shown.current_streak,
            longest_streak: shown.longest_streak,
            total_days: shown.total_days,
            nfts_minted: shown.nfts_minted,
            today_completed,
            week: week_dots(today),
            seal_progress: (!today_completed)
                .then(|| seal_progress(shown.current_streak, config.streak.seal_target_days)),
            wisdom: wisdom_for_day(today),
            call_to_action: call_to_action(today_completed, mental),
        }))
    }
}

/// Sunday-first dots; every weekday before today is shown as done.
pub fn week_dots(today: NaiveDate) -> Vec<WeekDot> {
    let today_idx = today.weekday().num_days_from_sunday() as usize;
    WEEKDAY_LETTERS
        .iter()
        .enumerate()
        .map(|(idx, &day)| WeekDot {
            day,
            completed: idx < today_idx,
        })
        .collect()
}

pub fn seal_progress(current_streak: u32, target_days: u32) -> SealProgress {
    let percent = if target_days == 0 {
        100.0
    } else {
        (current_streak as f64 / target_days as f64 * 100.0).min(100.0)
    };
    SealProgress {
        target_days,
        percent,
        days_remaining: target_days.saturating_sub(current_streak),
    }
}

pub fn call_to_action(today_completed: bool, mental: MentalState) -> CallToAction {
    if today_completed {
        CallToAction::Completed
    } else if mental == MentalState::Tilted {
        CallToAction::EmergencyReset
    } else {
        CallToAction::PreGameWarmup
    }
}
