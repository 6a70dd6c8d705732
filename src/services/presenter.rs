use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use tokio::sync::watch;

use crate::database::models::{
    DashboardViewModel, NoticeKind, PermissionState, ShiftRecord, UpcomingShift,
};
use crate::database::repositories::ShiftRepository;
use crate::services::calendar::{Calendar, Clock};
use crate::services::employee_context::EmployeeContext;
use crate::services::notification::{NotificationPermissionController, Notifier};
use crate::services::role_category::category_for;
use crate::services::stats::{monthly_shift_count, weekly_hours};
use crate::services::upcoming::{DEFAULT_UPCOMING_LIMIT, select_upcoming};

pub const SHIFTS_LOAD_FAILED_MESSAGE: &str = "Erreur lors du chargement des plannings";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardSettings {
    pub calendar: Calendar,
    pub upcoming_limit: usize,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            calendar: Calendar::default(),
            upcoming_limit: DEFAULT_UPCOMING_LIMIT,
        }
    }
}

/// The presenter's slice of shift state. Replaced wholesale, never edited.
#[derive(Debug, Clone, Default)]
pub enum ShiftSnapshot {
    #[default]
    Loading,
    Settled(Arc<Vec<ShiftRecord>>),
}

/// Builds the dashboard view-model from one consistent snapshot.
pub fn compute_view_model(
    shifts: &ShiftSnapshot,
    permission: PermissionState,
    now: DateTime<Utc>,
    settings: &DashboardSettings,
) -> DashboardViewModel {
    let records = match shifts {
        ShiftSnapshot::Loading => return DashboardViewModel::loading(permission),
        ShiftSnapshot::Settled(records) => records.as_slice(),
    };

    let upcoming = select_upcoming(records, now, settings.upcoming_limit)
        .into_iter()
        .map(|shift| UpcomingShift {
            category: category_for(&shift.role),
            shift,
        })
        .collect();

    DashboardViewModel {
        loading: false,
        upcoming,
        weekly_hours: weekly_hours(records, now, &settings.calendar),
        monthly_shift_count: monthly_shift_count(records, now, &settings.calendar),
        permission,
    }
}

/// Orchestrates the shift fetch and the permission request into a view-model
/// the rendering layer subscribes to.
pub struct DashboardPresenter {
    repository: Arc<dyn ShiftRepository>,
    permissions: NotificationPermissionController,
    notifier: Arc<dyn Notifier>,
    clock: Arc<dyn Clock>,
    settings: DashboardSettings,
    generation: AtomicU64,
    shifts: watch::Sender<ShiftSnapshot>,
    view: watch::Sender<DashboardViewModel>,
}

impl DashboardPresenter {
    pub fn new(
        repository: Arc<dyn ShiftRepository>,
        permissions: NotificationPermissionController,
        notifier: Arc<dyn Notifier>,
        clock: Arc<dyn Clock>,
        settings: DashboardSettings,
    ) -> Self {
        let (shifts, _) = watch::channel(ShiftSnapshot::Loading);
        let (view, _) = watch::channel(DashboardViewModel::loading(permissions.state()));

        Self {
            repository,
            permissions,
            notifier,
            clock,
            settings,
            generation: AtomicU64::new(0),
            shifts,
            view,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<DashboardViewModel> {
        self.view.subscribe()
    }

    pub fn view_model(&self) -> DashboardViewModel {
        self.view.borrow().clone()
    }

    pub fn permission(&self) -> PermissionState {
        self.permissions.state()
    }

    /// Loads the employee's shifts and asks for notification permission.
    ///
    /// Both run concurrently on the calling task; each completion only
    /// republishes its own slice. Returns the view-model once both settle.
    pub async fn activate(&self, context: &EmployeeContext) -> DashboardViewModel {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        log::debug!(
            "Activating dashboard for employee {} (generation {})",
            context.employee_id,
            generation
        );

        self.shifts.send_replace(ShiftSnapshot::Loading);
        self.publish();

        tokio::join!(
            self.load_shifts(context, generation),
            self.request_permission_on_load(generation)
        );

        self.view_model()
    }

    /// Supersedes the current activation. Results still in flight are dropped.
    pub fn deactivate(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    /// Explicit user-triggered permission request.
    pub async fn request_permission(&self) -> PermissionState {
        let state = self.permissions.request_permission().await;
        self.publish();
        state
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }

    async fn load_shifts(&self, context: &EmployeeContext, generation: u64) {
        let result = self.repository.fetch(context).await;

        if !self.is_current(generation) {
            log::debug!(
                "Ignoring shift fetch for superseded activation {}",
                generation
            );
            return;
        }

        let shifts = match result {
            Ok(shifts) => {
                log::info!(
                    "Loaded {} shifts for employee {}",
                    shifts.len(),
                    context.employee_id
                );
                shifts
            }
            Err(err) => {
                log::error!(
                    "Error fetching shifts for employee {}: {}",
                    context.employee_id,
                    err
                );
                self.notifier
                    .notify(NoticeKind::Error, SHIFTS_LOAD_FAILED_MESSAGE);
                Vec::new()
            }
        };

        self.shifts
            .send_replace(ShiftSnapshot::Settled(Arc::new(shifts)));
        self.publish();
    }

    async fn request_permission_on_load(&self, generation: u64) {
        let state = self.permissions.request_on_load().await;

        if !self.is_current(generation) {
            log::debug!(
                "Ignoring permission answer for superseded activation {}",
                generation
            );
            return;
        }

        self.permissions.commit(state);
        self.publish();
    }

    fn publish(&self) {
        let snapshot = self.shifts.borrow().clone();
        let view = compute_view_model(
            &snapshot,
            self.permissions.state(),
            self.clock.now(),
            &self.settings,
        );
        self.view.send_replace(view);
    }
}
