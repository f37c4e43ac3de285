//! CORS middleware configuration for cross-origin requests.

use actix_cors::Cors;
use actix_web::http::{header, Method};
use cv_shared::CorsConfig;

/// Creates a CORS middleware instance from configuration.
///
/// With `allow_any_origin` every origin is accepted and credentials (the
/// session cookie) are supported. Otherwise only `allowed_origins` are accepted.
pub fn create_cors(config: &CorsConfig) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
            header::COOKIE,
        ])
        .max_age(config.max_age)
        .supports_credentials();

    if config.allow_any_origin {
        log::info!("Configuring permissive CORS");
        return cors.allow_any_origin();
    }

    config.allowed_origins.iter().fold(cors, |cors, origin| {
        log::info!("Adding allowed origin: {}", origin);
        cors.allowed_origin(origin)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_cors_from_config() {
        let _cors = create_cors(&CorsConfig::development());

        let restricted = CorsConfig {
            allowed_origins: vec!["https://shop.example.com".to_string()],
            ..CorsConfig::default()
        };
        let _cors = create_cors(&restricted);
    }
}
