pub mod calendar;
pub mod employee_context;
pub mod notification;
pub mod presenter;
pub mod role_category;
pub mod stats;
pub mod upcoming;

pub use calendar::{Calendar, Clock, FixedClock, SystemClock};
pub use employee_context::EmployeeContext;
pub use notification::{
    LogNotifier, NoticeBuffer, NotificationPermissionController, Notifier, PermissionApi,
    ReportedPermission,
};
pub use presenter::{DashboardPresenter, DashboardSettings};
