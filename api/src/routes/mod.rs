//! HTTP route table
//!
//! Authentication routes and `/health` are public. Every commerce route is
//! wrapped in [`SessionAuth`]; vendor-only routes additionally in
//! [`RequireRole`](crate::middleware::RequireRole).

pub mod auth;
pub mod commerce;
pub mod health;

use actix_web::web;

use crate::middleware::SessionAuth;

pub fn configure(cfg: &mut web::ServiceConfig, session_auth: SessionAuth) {
    cfg.route("/health", web::get().to(health::health_check))
        .route("/signup", web::post().to(auth::signup))
        .route("/request-otp", web::post().to(auth::request_otp))
        .route("/verify-otp", web::post().to(auth::verify_otp));

    commerce::configure(cfg, session_auth);
}
