//! Property tests for the streak continuation rule.

use chrono::{DateTime, Duration, Utc};
use proptest::prelude::*;
use tiltreset_core::streak::{apply_completion, DAY_MS};
use tiltreset_core::UserStreakRecord;

fn base() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

fn arb_record() -> impl Strategy<Value = UserStreakRecord> {
    (0u32..500, 0u32..500, 0u32..10_000).prop_map(|(current, extra, total)| UserStreakRecord {
        current_streak: current,
        longest_streak: current + extra,
        total_days: total,
        nfts_minted: 0,
        last_practice_date: Some(base()),
    })
}

proptest! {
    #[test]
    fn within_one_day_streak_is_unchanged(record in arb_record(), gap in 0i64..DAY_MS) {
        let next = apply_completion(&record, base() + Duration::milliseconds(gap));
        prop_assert_eq!(next.current_streak, record.current_streak);
        prop_assert_eq!(next.total_days, record.total_days + 1);
    }

    #[test]
    fn second_day_increments(record in arb_record(), gap in DAY_MS..2 * DAY_MS) {
        let next = apply_completion(&record, base() + Duration::milliseconds(gap));
        prop_assert_eq!(next.current_streak, record.current_streak + 1);
    }

    #[test]
    fn later_days_reset(record in arb_record(), gap in 2 * DAY_MS..400 * DAY_MS) {
        let next = apply_completion(&record, base() + Duration::milliseconds(gap));
        prop_assert_eq!(next.current_streak, 1);
    }

    #[test]
    fn sequences_keep_invariants(gaps in proptest::collection::vec(0i64..3 * DAY_MS, 1..60)) {
        let mut record = UserStreakRecord::default();
        let mut now = base();
        for gap in &gaps {
            now += Duration::milliseconds(*gap);
            record = apply_completion(&record, now);
            prop_assert!(record.longest_streak >= record.current_streak);
            prop_assert!(record.current_streak >= 1);
        }
        prop_assert_eq!(record.total_days as usize, gaps.len());
        prop_assert_eq!(record.last_practice_date, Some(now));
    }
}
