#![allow(dead_code)]

use std::collections::VecDeque;
use std::env;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Duration, NaiveTime, TimeZone, Utc};
use fake::Fake;
use fake::faker::lorem::en::Word;
use tokio::sync::Notify;
use uuid::Uuid;

use shiftboard::database::models::{Notice, NoticeKind, PermissionState, ShiftRecord};
use shiftboard::error::{FetchError, PermissionError};
use shiftboard::services::{
    DashboardPresenter, DashboardSettings, EmployeeContext, FixedClock,
    NotificationPermissionController, Notifier, PermissionApi,
};
use shiftboard::ShiftRepository;

pub fn setup_test_env() {
    unsafe {
        env::set_var("RUST_LOG", "debug");
    }
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Wednesday 22 January 2025, noon UTC.
pub fn test_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 22, 12, 0, 0).unwrap()
}

pub fn employee() -> EmployeeContext {
    EmployeeContext::new(Uuid::new_v4())
}

pub fn shift(id: &str, date: DateTime<Utc>, role: &str) -> ShiftRecord {
    ShiftRecord {
        id: id.to_string(),
        date,
        start_time: NaiveTime::from_hms_opt(11, 0, 0).unwrap(),
        end_time: NaiveTime::from_hms_opt(15, 0, 0).unwrap(),
        role: role.to_string(),
        schedule_name: "Semaine 4 - Janvier".to_string(),
    }
}

/// A shift with generated role and schedule labels.
pub fn fake_shift(id: &str, offset: Duration) -> ShiftRecord {
    ShiftRecord {
        role: Word().fake(),
        schedule_name: format!("Semaine {}", (1..52).fake::<u32>()),
        ..shift(id, test_now() + offset, "")
    }
}

pub enum Outcome {
    Shifts(Vec<ShiftRecord>),
    Fail(String),
}

/// Repository double returning a canned outcome, optionally held behind a gate.
pub struct StubShiftRepository {
    outcome: Outcome,
    gate: Option<Arc<Notify>>,
    pub calls: AtomicUsize,
}

impl StubShiftRepository {
    pub fn with_shifts(shifts: Vec<ShiftRecord>) -> Self {
        Self {
            outcome: Outcome::Shifts(shifts),
            gate: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            outcome: Outcome::Fail(reason.to_string()),
            gate: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Fetches block until the returned handle is notified.
    pub fn gated(mut self) -> (Self, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        self.gate = Some(gate.clone());
        (self, gate)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ShiftRepository for StubShiftRepository {
    async fn fetch(&self, _context: &EmployeeContext) -> Result<Vec<ShiftRecord>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        match &self.outcome {
            Outcome::Shifts(shifts) => Ok(shifts.clone()),
            Outcome::Fail(reason) => Err(FetchError::Unavailable(reason.clone())),
        }
    }
}

/// Permission API double answering from a script; repeats the last answer.
pub struct ScriptedPermissionApi {
    answers: Mutex<VecDeque<Result<PermissionState, PermissionError>>>,
    last: Mutex<Result<PermissionState, PermissionError>>,
    first_call_gate: Option<Arc<Notify>>,
    calls: AtomicUsize,
}

impl ScriptedPermissionApi {
    pub fn new(answers: Vec<Result<PermissionState, PermissionError>>) -> Self {
        Self {
            answers: Mutex::new(answers.into()),
            last: Mutex::new(Err(PermissionError::Unsupported)),
            first_call_gate: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// The first request takes its answer immediately but only returns it once
    /// the handle is notified; later requests are not held.
    pub fn gate_first_call(mut self) -> (Self, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        self.first_call_gate = Some(gate.clone());
        (self, gate)
    }

    pub fn always(answer: PermissionState) -> Self {
        Self::new(vec![Ok(answer)])
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PermissionApi for ScriptedPermissionApi {
    async fn request(&self) -> Result<PermissionState, PermissionError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);

        let answer = {
            let mut last = self.last.lock().unwrap();
            if let Some(next) = self.answers.lock().unwrap().pop_front() {
                *last = next;
            }
            last.clone()
        };

        if call == 0 {
            if let Some(gate) = &self.first_call_gate {
                gate.notified().await;
            }
        }

        answer
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }

    pub fn count(&self, kind: NoticeKind) -> usize {
        self.notices().iter().filter(|n| n.kind == kind).count()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, kind: NoticeKind, message: &str) {
        self.notices.lock().unwrap().push(Notice {
            kind,
            message: message.to_string(),
        });
    }
}

pub struct PresenterFixture {
    pub presenter: DashboardPresenter,
    pub repository: Arc<StubShiftRepository>,
    pub permission_api: Arc<ScriptedPermissionApi>,
    pub notifier: Arc<RecordingNotifier>,
}

impl PresenterFixture {
    pub fn new(repository: StubShiftRepository, permission_api: ScriptedPermissionApi) -> Self {
        let repository = Arc::new(repository);
        let permission_api = Arc::new(permission_api);
        let notifier = Arc::new(RecordingNotifier::default());

        let controller =
            NotificationPermissionController::new(permission_api.clone(), notifier.clone());
        let presenter = DashboardPresenter::new(
            repository.clone(),
            controller,
            notifier.clone(),
            Arc::new(FixedClock(test_now())),
            DashboardSettings::default(),
        );

        Self {
            presenter,
            repository,
            permission_api,
            notifier,
        }
    }
}
