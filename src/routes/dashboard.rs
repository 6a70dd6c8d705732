use actix_web::web;

use crate::handlers::dashboard;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/employees/{employee_id}")
            .route("/dashboard", web::get().to(dashboard::get_dashboard))
            .route(
                "/notifications/permission",
                web::post().to(dashboard::request_notification_permission),
            ),
    );
}
