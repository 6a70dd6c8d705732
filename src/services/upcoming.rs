use chrono::{DateTime, Utc};

use crate::database::models::ShiftRecord;

/// Number of upcoming shifts shown on the dashboard.
pub const DEFAULT_UPCOMING_LIMIT: usize = 5;

/// Returns the next `limit` shifts starting at or after `now`.
///
/// Ordered by start instant with ties broken by id, so the result does not
/// depend on the order the source returned the records in.
pub fn select_upcoming(
    shifts: &[ShiftRecord],
    now: DateTime<Utc>,
    limit: usize,
) -> Vec<ShiftRecord> {
    let mut upcoming: Vec<ShiftRecord> = shifts
        .iter()
        .filter(|shift| shift.date >= now)
        .cloned()
        .collect();

    upcoming.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.id.cmp(&b.id)));
    upcoming.truncate(limit);
    upcoming
}
