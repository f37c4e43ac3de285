use actix_web::HttpResponse;
use cv_shared::HealthResponse;

/// Health check endpoint handler
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::healthy(
        "customer-vendor-api",
        env!("CARGO_PKG_VERSION"),
    ))
}
