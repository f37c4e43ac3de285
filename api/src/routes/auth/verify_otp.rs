use actix_web::{
    cookie::{time::OffsetDateTime, Cookie},
    http::header::ContentType,
    web, HttpResponse,
};
use cv_core::domain::value_objects::IssuedSession;
use cv_core::errors::DomainError;
use cv_shared::{phone::mask_phone_number, SessionConfig, SESSION_COOKIE_NAME};
use validator::Validate;

use crate::app::AppState;
use crate::dto::VerifyOtpRequest;
use crate::handlers::ApiError;

/// Build the session cookie; `Expires` mirrors the token's `exp` claim
pub fn session_cookie(
    config: &SessionConfig,
    session: &IssuedSession,
) -> Result<Cookie<'static>, DomainError> {
    let expires = OffsetDateTime::from_unix_timestamp(session.token.claims.exp)
        .map_err(|e| DomainError::internal(format!("Invalid session expiry: {}", e)))?;

    Ok(Cookie::build(SESSION_COOKIE_NAME, session.token_value().to_string())
        .path("/")
        .expires(expires)
        .secure(config.secure)
        .http_only(config.http_only)
        .finish())
}

/// Handler for POST /verify-otp
///
/// Checks the submitted code and, on success, sets the session cookie and
/// replies with the plain-text body `Login successful`.
///
/// # Errors
/// * 400 - Malformed phone number or missing code
/// * 404 - No account uses this phone number
/// * 401 - Wrong or expired code
pub async fn verify_otp(
    state: web::Data<AppState>,
    request: web::Json<VerifyOtpRequest>,
) -> Result<HttpResponse, ApiError> {
    request.validate()?;
    let phone = request.phone();

    log::info!("Processing OTP verification for phone: {}", mask_phone_number(&phone));

    let session = state.otp_service.verify_otp(&phone, &request.otp).await?;
    let cookie = session_cookie(&state.config.auth.session, &session)?;

    log::info!(
        "Login successful for account {} ({})",
        session.account_id,
        session.role()
    );

    Ok(HttpResponse::Ok()
        .cookie(cookie)
        .content_type(ContentType::plaintext())
        .body("Login successful"))
}
