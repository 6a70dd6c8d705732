use serde::{Deserialize, Serialize};

use crate::database::models::macros::string_enum;

string_enum! {
    /// Notification authorization status for this application.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub enum PermissionState {
        #[default]
        Unknown => "unknown",
        Granted => "granted",
        Denied => "denied",
        Unsupported => "unsupported",
    }
}

string_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum NoticeKind {
        Success => "success",
        Error => "error",
    }
}

/// A user-facing toast message emitted through the notify channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

/// Answer of the client-side permission prompt, as reported by the browser.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionReport {
    pub result: Option<PermissionState>,
    pub error: Option<String>,
}
