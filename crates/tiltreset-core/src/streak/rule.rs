//! Daily streak continuation rule.
//!
//! Elapsed time is bucketed by truncating the millisecond difference into
//! whole 24h days. This is not a calendar-day comparison: 23:00 and 01:00
//! the next morning fall into the same bucket.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::record::UserStreakRecord;
use crate::clock::Clock;

pub const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// How a completion relates to the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Continuation {
    /// No previous completion on record.
    First,
    /// Same 24h bucket as the previous completion.
    SameDay,
    /// Exactly one bucket later.
    NextDay,
    /// Two or more buckets later, or the clock went backwards.
    Broken,
}

/// Whole 24h buckets between `last` and `now`, floored.
///
/// Negative when `now` precedes `last`.
pub fn elapsed_days(last: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - last).num_milliseconds().div_euclid(DAY_MS)
}

pub fn classify(last: Option<DateTime<Utc>>, now: DateTime<Utc>) -> Continuation {
    match last.map(|last| elapsed_days(last, now)) {
        None => Continuation::First,
        Some(0) => Continuation::SameDay,
        Some(1) => Continuation::NextDay,
        Some(_) => Continuation::Broken,
    }
}

/// Apply one completion event at `now` and return the updated record.
pub fn apply_completion(record: &UserStreakRecord, now: DateTime<Utc>) -> UserStreakRecord {
    let current_streak = match classify(record.last_practice_date, now) {
        Continuation::SameDay => record.current_streak,
        Continuation::NextDay => record.current_streak.saturating_add(1),
        Continuation::First | Continuation::Broken => 1,
    };

    UserStreakRecord {
        current_streak,
        longest_streak: record.longest_streak.max(current_streak),
        total_days: record.total_days.saturating_add(1),
        last_practice_date: Some(now),
        ..record.clone()
    }
}

/// True when the last completion falls on today's local calendar date.
///
/// Each instant is read in the offset that applied to it, so a daylight
/// saving switch between the two does not shift the earlier date.
pub fn completed_on_same_date(last: Option<DateTime<Utc>>, clock: &dyn Clock) -> bool {
    last.is_some_and(|last| clock.local_date(last) == clock.today())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::{Duration, FixedOffset};

    fn at(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    fn seeded(last: DateTime<Utc>) -> UserStreakRecord {
        UserStreakRecord {
            current_streak: 5,
            longest_streak: 12,
            total_days: 30,
            nfts_minted: 2,
            last_practice_date: Some(last),
        }
    }

    #[test]
    fn first_completion_starts_streak() {
        let now = at("2024-05-01T10:00:00Z");
        let next = apply_completion(&UserStreakRecord::default(), now);
        assert_eq!(next.current_streak, 1);
        assert_eq!(next.longest_streak, 1);
        assert_eq!(next.total_days, 1);
        assert_eq!(next.last_practice_date, Some(now));
    }

    #[test]
    fn same_bucket_keeps_streak() {
        let now = at("2024-05-01T10:00:00Z");
        let next = apply_completion(&seeded(now - Duration::hours(23)), now);
        assert_eq!(next.current_streak, 5);
        assert_eq!(next.total_days, 31);
    }

    #[test]
    fn next_bucket_extends_streak() {
        let now = at("2024-05-01T10:00:00Z");
        let next = apply_completion(&seeded(now - Duration::hours(25)), now);
        assert_eq!(next.current_streak, 6);
        assert_eq!(next.longest_streak, 12);
    }

    #[test]
    fn two_buckets_reset_streak() {
        let now = at("2024-05-01T10:00:00Z");
        let next = apply_completion(&seeded(now - Duration::hours(50)), now);
        assert_eq!(next.current_streak, 1);
        assert_eq!(next.longest_streak, 12);
    }

    #[test]
    fn bucket_edges_are_exact() {
        let last = at("2024-05-01T00:00:00Z");
        let ms = Duration::milliseconds;
        assert_eq!(classify(Some(last), last), Continuation::SameDay);
        assert_eq!(classify(Some(last), last + ms(DAY_MS - 1)), Continuation::SameDay);
        assert_eq!(classify(Some(last), last + ms(DAY_MS)), Continuation::NextDay);
        assert_eq!(classify(Some(last), last + ms(2 * DAY_MS - 1)), Continuation::NextDay);
        assert_eq!(classify(Some(last), last + ms(2 * DAY_MS)), Continuation::Broken);
    }

    #[test]
    fn clock_moving_backwards_breaks_streak() {
        let now = at("2024-05-01T10:00:00Z");
        assert_eq!(elapsed_days(now + Duration::minutes(5), now), -1);
        let next = apply_completion(&seeded(now + Duration::minutes(5)), now);
        assert_eq!(next.current_streak, 1);
    }

    #[test]
    fn longest_streak_follows_new_maximum() {
        let now = at("2024-05-01T10:00:00Z");
        let record = UserStreakRecord {
            current_streak: 12,
            longest_streak: 12,
            total_days: 40,
            nfts_minted: 0,
            last_practice_date: Some(now - Duration::hours(30)),
        };
        let next = apply_completion(&record, now);
        assert_eq!(next.current_streak, 13);
        assert_eq!(next.longest_streak, 13);
    }

    #[test]
    fn nfts_minted_is_carried_through() {
        let now = at("2024-05-01T10:00:00Z");
        let next = apply_completion(&seeded(now - Duration::hours(25)), now);
        assert_eq!(next.nfts_minted, 2);
    }

    #[test]
    fn same_date_check_uses_local_calendar() {
        // 23:30 local on the 1st, then 00:30 local on the 2nd.
        let last = at("2024-05-01T21:30:00Z");
        let clock = FixedClock::new(
            at("2024-05-01T22:30:00Z").with_timezone(&FixedOffset::east_opt(2 * 3600).unwrap()),
        );
        assert!(!completed_on_same_date(Some(last), &clock));
        // Same instant pair is one 24h bucket.
        assert_eq!(classify(Some(last), at("2024-05-01T22:30:00Z")), Continuation::SameDay);
    }

    #[test]
    fn same_date_check_without_history() {
        let now = at("2024-05-01T22:30:00Z");
        let clock = FixedClock::new(now.fixed_offset());
        assert!(!completed_on_same_date(None, &clock));
        assert!(completed_on_same_date(Some(now - Duration::hours(1)), &clock));
    }

    #[test]
    fn same_date_check_reads_last_instant_in_its_own_offset() {
        // Winter time (+01:00) until 01:00 UTC on 2024-03-31, summer time (+02:00) after.
        let switch = at("2024-03-31T01:00:00Z");
        let clock = FixedClock::with_zone(at("2024-03-31T08:00:00Z"), move |instant| {
            let hours = if instant < switch { 1 } else { 2 };
            FixedOffset::east_opt(hours * 3600).unwrap()
        });
        // 23:30 on the 30th in winter time; today's +02:00 would make it 00:30 on the 31st.
        assert!(!completed_on_same_date(Some(at("2024-03-30T22:30:00Z")), &clock));
        assert!(completed_on_same_date(Some(at("2024-03-31T00:30:00Z")), &clock));
    }
}
