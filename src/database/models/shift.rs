use chrono::{DateTime, Duration, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ShiftValidationError;

/// A single scheduled work period assigned to the current employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftRecord {
    pub id: String,
    pub date: DateTime<Utc>,
    #[serde(with = "time_of_day")]
    pub start_time: NaiveTime,
    #[serde(with = "time_of_day")]
    pub end_time: NaiveTime,
    pub role: String,
    pub schedule_name: String,
}

impl ShiftRecord {
    /// Shifts never wrap past midnight, so the end must come strictly after the start.
    pub fn validate(&self) -> Result<(), ShiftValidationError> {
        if self.id.trim().is_empty() {
            return Err(ShiftValidationError::EmptyId);
        }

        if self.end_time <= self.start_time {
            return Err(ShiftValidationError::EndNotAfterStart {
                start: self.start_time,
                end: self.end_time,
            });
        }

        Ok(())
    }

    pub fn duration(&self) -> Duration {
        self.end_time - self.start_time
    }

    pub fn hours(&self) -> f64 {
        self.duration().num_seconds() as f64 / 3600.0
    }
}

/// `HH:MM` time-of-day serialization. Parsing also accepts `HH:MM:SS`.
pub mod time_of_day {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).map_err(serde::de::Error::custom)
    }

    pub fn parse(raw: &str) -> Result<NaiveTime, String> {
        NaiveTime::parse_from_str(raw, FORMAT)
            .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
            .map_err(|e| format!("Invalid time of day '{}': {}", raw, e))
    }
}
