use std::sync::Arc;

use actix_web::{HttpResponse, web};
use serde::Deserialize;
use uuid::Uuid;

use crate::AppState;
use crate::database::models::{
    DashboardResponse, PermissionReport, PermissionResponse, PermissionState,
};
use crate::error::AppError;
use crate::handlers::shared::ApiResponse;
use crate::services::{EmployeeContext, NoticeBuffer, ReportedPermission};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardQuery {
    /// Permission answer the browser already holds, if it reported one.
    pub permission: Option<PermissionState>,
    pub company_id: Option<Uuid>,
}

// Browsers always settle a prompt, so "unknown" is never a valid report.
fn reject_unknown(result: Option<PermissionState>) -> Result<(), AppError> {
    match result {
        Some(PermissionState::Unknown) => Err(AppError::BadRequest(
            "Permission result must be granted, denied or unsupported".to_string(),
        )),
        _ => Ok(()),
    }
}

/// Activate the employee dashboard and return its view-model
pub async fn get_dashboard(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    query: web::Query<DashboardQuery>,
) -> Result<HttpResponse, AppError> {
    let employee_id = path.into_inner();
    let query = query.into_inner();
    reject_unknown(query.permission)?;

    let mut context = EmployeeContext::new(employee_id);
    if let Some(company_id) = query.company_id {
        context = context.with_company(company_id);
    }

    let notices = Arc::new(NoticeBuffer::new());
    let permission = ReportedPermission::new(PermissionReport {
        result: query.permission,
        error: None,
    });
    let presenter = state.presenter(Arc::new(permission), notices.clone());

    let dashboard = presenter.activate(&context).await;

    Ok(HttpResponse::Ok().json(ApiResponse::success(DashboardResponse {
        state: dashboard.state(),
        dashboard,
        notices: notices.drain(),
    })))
}

/// Explicit "enable notifications" action from the employee
pub async fn request_notification_permission(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<PermissionReport>,
) -> Result<HttpResponse, AppError> {
    let employee_id = path.into_inner();
    let report = body.into_inner();
    reject_unknown(report.result)?;

    let notices = Arc::new(NoticeBuffer::new());
    let presenter = state.presenter(Arc::new(ReportedPermission::new(report)), notices.clone());

    let permission = presenter.request_permission().await;
    log::info!(
        "Notification permission for employee {} is now {}",
        employee_id,
        permission
    );

    Ok(HttpResponse::Ok().json(ApiResponse::success_with_message(
        PermissionResponse {
            permission,
            notices: notices.drain(),
        },
        &format!("Notification permission {}", permission),
    )))
}
