use actix_web::{http::header::ContentType, web, HttpResponse};
use cv_shared::phone::mask_phone_number;
use validator::Validate;

use crate::app::AppState;
use crate::dto::RequestOtpRequest;
use crate::handlers::ApiError;

/// Handler for POST /request-otp
///
/// Issues a 6-digit code for the account with this phone number and sends it
/// by SMS. Replies with the plain-text body `OTP sent successfully`.
///
/// # Errors
/// * 400 - Malformed phone number
/// * 404 - No account uses this phone number
/// * 500 - Store failure or SMS delivery failure
pub async fn request_otp(
    state: web::Data<AppState>,
    request: web::Json<RequestOtpRequest>,
) -> Result<HttpResponse, ApiError> {
    request.validate()?;
    let phone = request.phone();

    log::info!("Processing OTP request for phone: {}", mask_phone_number(&phone));

    let sent = state.otp_service.request_otp(&phone).await?;
    log::debug!("OTP message {} accepted by provider", sent.message_id);

    Ok(HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body("OTP sent successfully"))
}
