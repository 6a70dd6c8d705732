use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::watch;

use crate::database::models::{Notice, NoticeKind, PermissionReport, PermissionState};
use crate::error::PermissionError;

pub const NOTIFICATIONS_ENABLED_MESSAGE: &str = "Notifications activées";

/// Platform notification permission prompt.
#[async_trait]
pub trait PermissionApi: Send + Sync {
    async fn request(&self) -> Result<PermissionState, PermissionError>;
}

/// Fire-and-forget channel for user-facing toast messages.
pub trait Notifier: Send + Sync {
    fn notify(&self, kind: NoticeKind, message: &str);
}

/// Writes notices to the application log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, kind: NoticeKind, message: &str) {
        match kind {
            NoticeKind::Success => log::info!("[notice] {}", message),
            NoticeKind::Error => log::error!("[notice] {}", message),
        }
    }
}

/// Collects notices so they can be handed back to the client with a response.
#[derive(Debug, Default)]
pub struct NoticeBuffer {
    notices: Mutex<Vec<Notice>>,
}

impl NoticeBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drain(&self) -> Vec<Notice> {
        let mut notices = self.notices.lock().unwrap_or_else(|e| e.into_inner());
        std::mem::take(&mut *notices)
    }
}

impl Notifier for NoticeBuffer {
    fn notify(&self, kind: NoticeKind, message: &str) {
        log::debug!("Buffering {} notice: {}", kind, message);
        self.notices
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(Notice {
                kind,
                message: message.to_string(),
            });
    }
}

/// Permission answer already obtained by the browser and forwarded to us.
///
/// A report without a result means the platform never produced one.
#[derive(Debug, Clone, Default)]
pub struct ReportedPermission {
    report: PermissionReport,
}

impl ReportedPermission {
    pub fn new(report: PermissionReport) -> Self {
        Self { report }
    }
}

#[async_trait]
impl PermissionApi for ReportedPermission {
    async fn request(&self) -> Result<PermissionState, PermissionError> {
        if let Some(error) = &self.report.error {
            return Err(PermissionError::Platform(error.clone()));
        }

        self.report.result.ok_or(PermissionError::Unsupported)
    }
}

/// Drives the notification permission request lifecycle.
///
/// The platform API is invoked exactly once per `request_*` call and never
/// retried here; re-prompting is left to the user or a new activation.
pub struct NotificationPermissionController {
    api: Arc<dyn PermissionApi>,
    notifier: Arc<dyn Notifier>,
    state: watch::Sender<PermissionState>,
}

impl NotificationPermissionController {
    pub fn new(api: Arc<dyn PermissionApi>, notifier: Arc<dyn Notifier>) -> Self {
        let (state, _) = watch::channel(PermissionState::Unknown);
        Self {
            api,
            notifier,
            state,
        }
    }

    pub fn state(&self) -> PermissionState {
        *self.state.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<PermissionState> {
        self.state.subscribe()
    }

    /// Lifecycle-triggered prompt issued when the dashboard is activated.
    ///
    /// The answer is not recorded; the activation that asked commits it with
    /// [`commit`](Self::commit) only if it is still current when it resolves.
    pub async fn request_on_load(&self) -> PermissionState {
        log::debug!("Requesting notification permission on dashboard activation");
        self.prompt().await
    }

    /// Explicit request, e.g. the user pressing "enable notifications".
    pub async fn request_permission(&self) -> PermissionState {
        let state = self.prompt().await;
        self.commit(state);
        state
    }

    /// Records an answer and announces it when notifications were granted.
    pub fn commit(&self, state: PermissionState) {
        self.state.send_replace(state);

        if state == PermissionState::Granted {
            self.notifier
                .notify(NoticeKind::Success, NOTIFICATIONS_ENABLED_MESSAGE);
        }
    }

    /// Invokes the platform API exactly once.
    async fn prompt(&self) -> PermissionState {
        match self.api.request().await {
            // A dismissed prompt leaves the platform undecided; the user still said no.
            Ok(PermissionState::Unknown) => PermissionState::Denied,
            Ok(state) => state,
            Err(err) => {
                log::warn!("Notification permission unavailable: {}", err);
                PermissionState::Unsupported
            }
        }
    }
}
