use std::ops::Range;

use chrono::{
    DateTime, Datelike, Duration, FixedOffset, NaiveDate, Offset, TimeZone, Utc, Weekday,
};

/// Source of the current instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at one instant, for demos and deterministic tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Local calendar used to bucket shifts into "this week" and "this month".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calendar {
    offset: FixedOffset,
    week_start: Weekday,
}

impl Calendar {
    pub fn new(offset: FixedOffset, week_start: Weekday) -> Self {
        Self { offset, week_start }
    }

    pub fn utc() -> Self {
        Self::new(Utc.fix(), Weekday::Mon)
    }

    /// Half-open range covering the local calendar week containing `now`.
    pub fn week_containing(&self, now: DateTime<Utc>) -> Range<DateTime<Utc>> {
        let today = now.with_timezone(&self.offset).date_naive();
        let days_into_week = (today.weekday().num_days_from_monday() + 7
            - self.week_start.num_days_from_monday())
            % 7;
        let first_day = today - Duration::days(i64::from(days_into_week));

        let start = self.local_midnight(first_day);
        start..start + Duration::days(7)
    }

    /// Half-open range covering the local calendar month containing `now`.
    pub fn month_containing(&self, now: DateTime<Utc>) -> Range<DateTime<Utc>> {
        let today = now.with_timezone(&self.offset).date_naive();
        let first_day = today.with_day(1).unwrap_or(today);
        let next_month = first_day
            .checked_add_months(chrono::Months::new(1))
            .unwrap_or(NaiveDate::MAX);

        self.local_midnight(first_day)..self.local_midnight(next_month)
    }

    fn local_midnight(&self, day: NaiveDate) -> DateTime<Utc> {
        // Fixed offsets never produce ambiguous or skipped local times.
        self.offset
            .from_local_datetime(&day.and_time(chrono::NaiveTime::MIN))
            .single()
            .map(|local| local.with_timezone(&Utc))
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }
}

impl Default for Calendar {
    fn default() -> Self {
        Self::utc()
    }
}
