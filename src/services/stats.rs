use chrono::{DateTime, Utc};

use crate::database::models::ShiftRecord;
use crate::services::calendar::Calendar;

// Always recomputed from the full shift set; nothing here is cached.

/// Hours scheduled in the local calendar week containing `now`.
pub fn weekly_hours(shifts: &[ShiftRecord], now: DateTime<Utc>, calendar: &Calendar) -> f64 {
    let week = calendar.week_containing(now);

    shifts
        .iter()
        .filter(|shift| week.contains(&shift.date))
        .map(ShiftRecord::hours)
        .sum()
}

/// Number of shifts in the local calendar month containing `now`.
pub fn monthly_shift_count(
    shifts: &[ShiftRecord],
    now: DateTime<Utc>,
    calendar: &Calendar,
) -> usize {
    let month = calendar.month_containing(now);

    shifts
        .iter()
        .filter(|shift| month.contains(&shift.date))
        .count()
}
