use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{App, HttpResponse, HttpServer, Responder, get, middleware::Logger, web};
use anyhow::Result;

use shiftboard::database::init_database;
use shiftboard::handlers::shared::not_found;
use shiftboard::services::{Clock, SystemClock};
use shiftboard::{AppState, Config, PgShiftRepository, SampleShiftRepository, ShiftRepository};

#[get("/")]
async fn hello() -> impl Responder {
    HttpResponse::Ok().body("Shiftboard API v1.0")
}

#[get("/health")]
async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "timestamp": chrono::Utc::now()
    }))
}

#[actix_web::main]
async fn main() -> Result<()> {
    // Load configuration (also reads .env)
    let config = Config::from_env()?;

    // Initialize logger
    env_logger::init();

    println!("🚀 Starting Shiftboard API server...");
    println!(
        "📋 Configuration loaded (environment: {})",
        config.environment
    );

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let shift_repository: Arc<dyn ShiftRepository> = match &config.database_url {
        Some(database_url) => {
            let pool = init_database(database_url).await?;
            println!("✅ Database initialized");
            Arc::new(PgShiftRepository::new(pool))
        }
        None => {
            if config.is_production() {
                log::warn!("DATABASE_URL is not set; serving sample shifts in production");
            } else if config.is_development() {
                println!("🧪 No DATABASE_URL set, serving sample shifts");
            }
            Arc::new(SampleShiftRepository::new(clock.clone()))
        }
    };

    let app_state = web::Data::new(AppState {
        shift_repository,
        clock,
        settings: config.dashboard_settings()?,
    });

    let server_address = config.server_address();
    let allowed_origin = config.client_base_url.clone();
    println!("🌐 Server starting on http://{}", server_address);

    // Start HTTP server
    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(
                Cors::default()
                    .allowed_origin(&allowed_origin)
                    .allowed_methods(vec!["GET", "POST", "OPTIONS"])
                    .allowed_headers(vec!["Authorization", "Content-Type", "Accept"])
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .service(hello)
            .service(health)
            .configure(shiftboard::routes::configure)
            .default_service(web::to(not_found))
    })
    .bind(&server_address)?
    .run()
    .await
    .map_err(|e| anyhow::anyhow!("Server error: {}", e))
}
