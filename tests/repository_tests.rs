use std::sync::Arc;

use chrono::{Duration, NaiveTime};
use pretty_assertions::assert_eq;

use shiftboard::database::repositories::validate_shift_set;
use shiftboard::error::FetchError;
use shiftboard::services::FixedClock;
use shiftboard::services::upcoming::{DEFAULT_UPCOMING_LIMIT, select_upcoming};
use shiftboard::{SampleShiftRepository, ShiftRepository};

mod common;

use common::{employee, fake_shift, test_now};

#[tokio::test]
async fn test_sample_repository_is_anchored_on_clock() {
    let repository = SampleShiftRepository::new(Arc::new(FixedClock(test_now())));

    let shifts = repository.fetch(&employee()).await.unwrap();

    assert_eq!(shifts.len(), 2);
    assert_eq!(shifts[0].date, test_now());
    assert_eq!(shifts[1].date, test_now() + Duration::days(1));
    assert_eq!(shifts[1].start_time, NaiveTime::from_hms_opt(19, 0, 0).unwrap());
    assert!(shifts.iter().all(|s| s.role == "Serveur"));

    // The shift starting exactly now still counts as upcoming.
    let upcoming = select_upcoming(&shifts, test_now(), DEFAULT_UPCOMING_LIMIT);
    assert_eq!(upcoming.len(), 2);
}

#[tokio::test]
async fn test_sample_repository_serves_any_employee() {
    let repository = SampleShiftRepository::new(Arc::new(FixedClock(test_now())));

    let first = repository.fetch(&employee()).await.unwrap();
    let second = repository.fetch(&employee()).await.unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_validate_shift_set_rejects_duplicate_ids() {
    let shifts = vec![
        fake_shift("1", Duration::hours(1)),
        fake_shift("2", Duration::hours(2)),
        fake_shift("1", Duration::hours(3)),
    ];

    match validate_shift_set(shifts) {
        Err(FetchError::DuplicateId(id)) => assert_eq!(id, "1"),
        other => panic!("expected duplicate id error, got {:?}", other),
    }
}

#[test]
fn test_validate_shift_set_rejects_overnight_shift() {
    let mut overnight = fake_shift("night", Duration::hours(10));
    overnight.start_time = NaiveTime::from_hms_opt(22, 0, 0).unwrap();
    overnight.end_time = NaiveTime::from_hms_opt(2, 0, 0).unwrap();

    let err = validate_shift_set(vec![fake_shift("day", Duration::hours(1)), overnight])
        .unwrap_err();

    assert!(matches!(err, FetchError::InvalidRecord { ref id, .. } if id == "night"));
}

#[test]
fn test_validate_shift_set_accepts_empty_and_valid_sets() {
    assert!(validate_shift_set(Vec::new()).unwrap().is_empty());

    let shifts: Vec<_> = (0..10)
        .map(|i| fake_shift(&format!("shift-{}", i), Duration::hours(i)))
        .collect();
    assert_eq!(validate_shift_set(shifts.clone()).unwrap(), shifts);
}
