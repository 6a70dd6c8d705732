use std::sync::Arc;

pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod services;

pub use config::Config;
pub use database::repositories::{PgShiftRepository, SampleShiftRepository, ShiftRepository};
pub use services::{DashboardPresenter, DashboardSettings};

use services::{Clock, NotificationPermissionController, Notifier, PermissionApi};

pub struct AppState {
    pub shift_repository: Arc<dyn ShiftRepository>,
    pub clock: Arc<dyn Clock>,
    pub settings: DashboardSettings,
}

impl AppState {
    /// Fresh presenter for one dashboard activation.
    pub fn presenter(
        &self,
        permission_api: Arc<dyn PermissionApi>,
        notifier: Arc<dyn Notifier>,
    ) -> DashboardPresenter {
        let permissions = NotificationPermissionController::new(permission_api, notifier.clone());

        DashboardPresenter::new(
            self.shift_repository.clone(),
            permissions,
            notifier,
            self.clock.clone(),
            self.settings,
        )
    }
}
