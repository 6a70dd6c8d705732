use chrono::{DateTime, NaiveTime, Utc};
use uuid::Uuid;

use crate::database::models::ShiftRecord;

// Database row type that matches the employee_shifts schema
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ShiftRow {
    pub id: Uuid,
    pub shift_date: DateTime<Utc>,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub role: String,
    pub schedule_name: String,
}

impl From<ShiftRow> for ShiftRecord {
    fn from(row: ShiftRow) -> Self {
        Self {
            id: row.id.to_string(),
            date: row.shift_date,
            start_time: row.start_time,
            end_time: row.end_time,
            role: row.role,
            schedule_name: row.schedule_name,
        }
    }
}
