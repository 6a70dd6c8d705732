use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, NaiveTime};
use sqlx::PgPool;

use crate::database::models::ShiftRecord;
use crate::database::types::ShiftRow;
use crate::error::FetchError;
use crate::services::calendar::Clock;
use crate::services::employee_context::EmployeeContext;

/// Source of the shifts assigned to an employee.
///
/// Implementations return an unordered set of validated records; callers must
/// not rely on any particular ordering.
#[async_trait]
pub trait ShiftRepository: Send + Sync {
    async fn fetch(&self, context: &EmployeeContext) -> Result<Vec<ShiftRecord>, FetchError>;
}

/// Rejects sets containing an invalid record or a reused id.
pub fn validate_shift_set(shifts: Vec<ShiftRecord>) -> Result<Vec<ShiftRecord>, FetchError> {
    {
        let mut seen = HashSet::with_capacity(shifts.len());

        for shift in &shifts {
            shift
                .validate()
                .map_err(|source| FetchError::InvalidRecord {
                    id: shift.id.clone(),
                    source,
                })?;

            if !seen.insert(shift.id.as_str()) {
                return Err(FetchError::DuplicateId(shift.id.clone()));
            }
        }
    }

    Ok(shifts)
}

pub struct PgShiftRepository {
    pool: PgPool,
}

impl PgShiftRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShiftRepository for PgShiftRepository {
    async fn fetch(&self, context: &EmployeeContext) -> Result<Vec<ShiftRecord>, FetchError> {
        let rows = sqlx::query_as::<_, ShiftRow>(
            r#"
            SELECT id, shift_date, start_time, end_time, role, schedule_name
            FROM employee_shifts
            WHERE employee_id = $1
              AND ($2::uuid IS NULL OR company_id = $2)
            "#,
        )
        .bind(context.employee_id)
        .bind(context.company_id)
        .fetch_all(&self.pool)
        .await?;

        validate_shift_set(rows.into_iter().map(ShiftRecord::from).collect())
    }
}

/// Built-in sample schedule used until a live source is configured.
///
/// Dates are anchored on the clock at fetch time: one lunch shift starting
/// now and one evening shift tomorrow.
pub struct SampleShiftRepository {
    clock: Arc<dyn Clock>,
}

impl SampleShiftRepository {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }
}

#[async_trait]
impl ShiftRepository for SampleShiftRepository {
    async fn fetch(&self, context: &EmployeeContext) -> Result<Vec<ShiftRecord>, FetchError> {
        log::debug!("Serving sample shifts for employee {}", context.employee_id);

        let now = self.clock.now();
        let at = |hour: i64| NaiveTime::MIN + Duration::hours(hour);

        validate_shift_set(vec![
            ShiftRecord {
                id: "1".to_string(),
                date: now,
                start_time: at(11),
                end_time: at(15),
                role: "Serveur".to_string(),
                schedule_name: "Semaine 4 - Janvier".to_string(),
            },
            ShiftRecord {
                id: "2".to_string(),
                date: now + Duration::days(1),
                start_time: at(19),
                end_time: at(23),
                role: "Serveur".to_string(),
                schedule_name: "Semaine 4 - Janvier".to_string(),
            },
        ])
    }
}
