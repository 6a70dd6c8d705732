use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use chrono::NaiveTime;
use thiserror::Error;

use crate::handlers::shared::ApiResponse;

/// Failure to retrieve the employee's shift set.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Invalid shift record {id}: {source}")]
    InvalidRecord {
        id: String,
        #[source]
        source: ShiftValidationError,
    },

    #[error("Duplicate shift id: {0}")]
    DuplicateId(String),

    #[error("Shift source unavailable: {0}")]
    Unavailable(String),
}

/// Failure reported by the platform notification permission API.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PermissionError {
    #[error("Notifications are not supported on this platform")]
    Unsupported,

    #[error("Permission request failed: {0}")]
    Platform(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShiftValidationError {
    #[error("shift id must not be empty")]
    EmptyId,

    #[error("end time {end} is not after start time {start}")]
    EndNotAfterStart { start: NaiveTime, end: NaiveTime },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();
        let error_message = self.to_string();

        log::error!(
            "Request failed with status {}: {}",
            status_code,
            error_message
        );

        let response_body = ApiResponse::<()>::error(&error_message);

        HttpResponse::build(status_code).json(response_body)
    }
}
