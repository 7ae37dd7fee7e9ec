use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use sqlx::SqlitePool;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub database: bool,
}

/// GET /health - Liveness probe
///
/// Returns 200 if the application can respond to requests; does not touch
/// the store.
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        service: "bulletin".to_string(),
    })
}

/// GET /ready - Readiness probe
///
/// Pings the store; 503 until the database answers.
pub async fn readiness_check(pool: web::Data<SqlitePool>) -> impl Responder {
    let database = sqlx::query("SELECT 1").fetch_one(pool.get_ref()).await.is_ok();

    let response = ReadinessResponse {
        ready: database,
        database,
    };

    if database {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}

/// Configure health routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/ready", web::get().to(readiness_check));
}
