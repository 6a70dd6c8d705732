use serde::{Deserialize, Serialize};

use crate::database::models::macros::string_enum;
use crate::database::models::{Notice, PermissionState, ShiftRecord};

string_enum! {
    /// Visual palette slot a shift badge is drawn with.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum RoleCategory {
        Chart1 => "chart-1",
        Chart2 => "chart-2",
        Chart3 => "chart-3",
        Chart4 => "chart-4",
        Muted => "muted",
    }
}

/// An upcoming shift annotated with its role category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingShift {
    #[serde(flatten)]
    pub shift: ShiftRecord,
    pub category: RoleCategory,
}

string_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum DashboardState {
        Loading => "loading",
        Empty => "empty",
        Populated => "populated",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardViewModel {
    pub loading: bool,
    pub upcoming: Vec<UpcomingShift>,
    pub weekly_hours: f64,
    pub monthly_shift_count: usize,
    pub permission: PermissionState,
}

impl DashboardViewModel {
    pub fn loading(permission: PermissionState) -> Self {
        Self {
            loading: true,
            upcoming: Vec::new(),
            weekly_hours: 0.0,
            monthly_shift_count: 0,
            permission,
        }
    }

    /// An empty upcoming list only means "nothing ahead" once loading is over.
    pub fn state(&self) -> DashboardState {
        if self.loading {
            DashboardState::Loading
        } else if self.upcoming.is_empty() {
            DashboardState::Empty
        } else {
            DashboardState::Populated
        }
    }
}

impl Default for DashboardViewModel {
    fn default() -> Self {
        Self::loading(PermissionState::Unknown)
    }
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub dashboard: DashboardViewModel,
    pub state: DashboardState,
    pub notices: Vec<Notice>,
}

#[derive(Debug, Serialize)]
pub struct PermissionResponse {
    pub permission: PermissionState,
    pub notices: Vec<Notice>,
}
