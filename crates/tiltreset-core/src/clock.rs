//! Wall-clock source for the stores.
//!
//! The rolling 24h streak bucket only needs instants. The calendar-day
//! `today_completed` check needs the local date of an instant under the
//! zone rules in force at that instant, which a single fixed offset cannot
//! express across a daylight-saving change.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, FixedOffset, Local, NaiveDate, Utc};

pub trait Clock: Send + Sync {
    /// Current instant in the user's local offset.
    fn now(&self) -> DateTime<FixedOffset>;

    /// Local calendar date of `instant`, using the offset that applied then.
    fn local_date(&self, instant: DateTime<Utc>) -> NaiveDate;

    /// Today's local calendar date.
    fn today(&self) -> NaiveDate {
        self.local_date(self.now().with_timezone(&Utc))
    }
}

/// The operating system clock in the machine's local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }

    fn local_date(&self, instant: DateTime<Utc>) -> NaiveDate {
        instant.with_timezone(&Local).date_naive()
    }
}

type OffsetRule = Arc<dyn Fn(DateTime<Utc>) -> FixedOffset + Send + Sync>;

/// A manually driven clock.
///
/// By default every instant is read in the offset it was created with;
/// [`FixedClock::with_zone`] supplies per-instant offsets instead.
pub struct FixedClock {
    now: Mutex<DateTime<Utc>>,
    offset_at: OffsetRule,
}

impl FixedClock {
    pub fn new(now: DateTime<FixedOffset>) -> Self {
        let offset = *now.offset();
        Self::with_zone(now.with_timezone(&Utc), move |_| offset)
    }

    pub fn with_zone(
        now: DateTime<Utc>,
        offset_at: impl Fn(DateTime<Utc>) -> FixedOffset + Send + Sync + 'static,
    ) -> Self {
        Self {
            now: Mutex::new(now),
            offset_at: Arc::new(offset_at),
        }
    }

    pub fn set(&self, now: DateTime<FixedOffset>) {
        *self.lock() = now.with_timezone(&Utc);
    }

    pub fn advance(&self, by: Duration) {
        let mut guard = self.lock();
        *guard += by;
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, DateTime<Utc>> {
        // A poisoned clock still holds a valid timestamp.
        self.now.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        let now = *self.lock();
        now.with_timezone(&(self.offset_at)(now))
    }

    fn local_date(&self, instant: DateTime<Utc>) -> NaiveDate {
        instant.with_timezone(&(self.offset_at)(instant)).date_naive()
    }
}

impl std::fmt::Debug for FixedClock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FixedClock")
            .field("now", &self.now())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Central European rules around the March 2024 switch to summer time.
    fn paris_spring_2024(instant: DateTime<Utc>) -> FixedOffset {
        if instant < utc("2024-03-31T01:00:00Z") {
            FixedOffset::east_opt(3600).unwrap()
        } else {
            FixedOffset::east_opt(7200).unwrap()
        }
    }

    fn utc(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn fixed_clock_advances() {
        let start = DateTime::parse_from_rfc3339("2024-03-10T08:00:00+02:00").unwrap();
        let clock = FixedClock::new(start);
        clock.advance(Duration::hours(25));
        assert_eq!(
            clock.now(),
            DateTime::parse_from_rfc3339("2024-03-11T09:00:00+02:00").unwrap()
        );
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2024, 3, 11).unwrap());
    }

    #[test]
    fn zoned_clock_reads_past_instants_in_their_own_offset() {
        let clock = FixedClock::with_zone(utc("2024-03-31T08:00:00Z"), paris_spring_2024);
        assert_eq!(clock.now().offset().local_minus_utc(), 7200);
        // 23:30 in winter time on the 30th, not 00:30 summer time on the 31st.
        assert_eq!(
            clock.local_date(utc("2024-03-30T22:30:00Z")),
            NaiveDate::from_ymd_opt(2024, 3, 30).unwrap()
        );
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2024, 3, 31).unwrap());
    }

    #[test]
    fn system_clock_is_close_to_utc_now() {
        let now = SystemClock.now();
        let drift = (Utc::now() - now.with_timezone(&Utc)).num_seconds().abs();
        assert!(drift < 5);
    }

    #[test]
    fn system_clock_uses_local_zone_rules() {
        let instant = utc("2024-03-30T22:30:00Z");
        assert_eq!(
            SystemClock.local_date(instant),
            instant.with_timezone(&Local).date_naive()
        );
    }
}
