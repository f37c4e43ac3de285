use actix_web::{web, HttpResponse};
use cv_shared::phone::mask_phone_number;
use validator::Validate;

use crate::app::AppState;
use crate::dto::SignupRequest;
use crate::handlers::ApiError;

/// Handler for POST /signup
///
/// Creates an account and returns it, with `password` holding the bcrypt hash.
///
/// # Errors
/// * 400 - Missing fields, unknown role or malformed phone number
/// * 409 - Phone number already registered
pub async fn signup(
    state: web::Data<AppState>,
    request: web::Json<SignupRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = request.into_inner();
    request.validate()?;

    log::info!(
        "Processing signup for phone: {}",
        mask_phone_number(&request.phone_number)
    );

    let command = request.into_command()?;
    let account = state.account_service.signup(command).await?;

    Ok(HttpResponse::Ok().json(account))
}
