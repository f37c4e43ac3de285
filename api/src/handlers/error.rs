//! Mapping of domain failures onto HTTP responses
//!
//! Every failure body is an [`ErrorResponse`] JSON document.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use cv_core::errors::{AuthError, DomainError, TokenError, ValidationError};
use cv_shared::{error_codes, ErrorResponse};
use std::fmt;

/// HTTP status, error code and message for a domain error
pub fn classify(error: &DomainError) -> (StatusCode, &'static str, String) {
    match error {
        DomainError::Validation { message } => (
            StatusCode::BAD_REQUEST,
            error_codes::VALIDATION_ERROR,
            message.clone(),
        ),
        DomainError::NotFound { resource } => (
            StatusCode::NOT_FOUND,
            error_codes::NOT_FOUND,
            format!("{} not found", resource),
        ),
        DomainError::Conflict { message } => {
            (StatusCode::CONFLICT, error_codes::CONFLICT, message.clone())
        }
        DomainError::Timeout { .. } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            error_codes::DATABASE_ERROR,
            "The data store did not respond in time".to_string(),
        ),
        DomainError::Internal { .. } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            error_codes::INTERNAL_ERROR,
            "An internal error occurred".to_string(),
        ),
        DomainError::Auth(auth_error) => classify_auth(auth_error),
        DomainError::Token(token_error) => classify_token(token_error),
        DomainError::ValidationErr(validation_error) => classify_validation(validation_error),
    }
}

fn classify_auth(error: &AuthError) -> (StatusCode, &'static str, String) {
    let message = error.to_string();
    match error {
        AuthError::InvalidPhoneFormat { .. } => {
            (StatusCode::BAD_REQUEST, error_codes::VALIDATION_ERROR, message)
        }
        AuthError::AccountNotFound => (StatusCode::NOT_FOUND, error_codes::NOT_FOUND, message),
        AuthError::AccountAlreadyExists => (StatusCode::CONFLICT, error_codes::CONFLICT, message),
        AuthError::InvalidOrExpiredOtp => {
            (StatusCode::UNAUTHORIZED, error_codes::OTP_INVALID, message)
        }
        AuthError::OtpDeliveryFailed => (
            StatusCode::INTERNAL_SERVER_ERROR,
            error_codes::SMS_ERROR,
            message,
        ),
        AuthError::MissingSession => {
            (StatusCode::UNAUTHORIZED, error_codes::UNAUTHORIZED, message)
        }
        AuthError::InsufficientRole { .. } => {
            (StatusCode::FORBIDDEN, error_codes::FORBIDDEN, message)
        }
        AuthError::PasswordHashingFailed => (
            StatusCode::INTERNAL_SERVER_ERROR,
            error_codes::INTERNAL_ERROR,
            message,
        ),
    }
}

fn classify_token(error: &TokenError) -> (StatusCode, &'static str, String) {
    let message = error.to_string();
    match error {
        TokenError::Malformed => (StatusCode::BAD_REQUEST, error_codes::TOKEN_MALFORMED, message),
        TokenError::InvalidSignature => {
            (StatusCode::UNAUTHORIZED, error_codes::TOKEN_INVALID, message)
        }
        TokenError::Expired => (StatusCode::UNAUTHORIZED, error_codes::TOKEN_EXPIRED, message),
        TokenError::GenerationFailed => (
            StatusCode::INTERNAL_SERVER_ERROR,
            error_codes::INTERNAL_ERROR,
            message,
        ),
    }
}

fn classify_validation(error: &ValidationError) -> (StatusCode, &'static str, String) {
    (
        StatusCode::BAD_REQUEST,
        error_codes::VALIDATION_ERROR,
        error.to_string(),
    )
}

/// Handle domain errors and convert them to appropriate HTTP responses
pub fn handle_domain_error(error: &DomainError) -> HttpResponse {
    let (status, code, message) = classify(error);

    if status.is_server_error() {
        log::error!("Request failed: {}", error);
    } else {
        log::debug!("Request rejected with {}: {}", status.as_u16(), error);
    }

    HttpResponse::build(status).json(ErrorResponse::new(code, message))
}

/// Build a 400 response listing the fields that failed validation
pub fn validation_error_response(errors: &validator::ValidationErrors) -> HttpResponse {
    let mut response = ErrorResponse::new(error_codes::VALIDATION_ERROR, "Invalid request data");
    for (field, field_errors) in errors.field_errors() {
        let messages: Vec<String> = field_errors
            .iter()
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string())
            })
            .collect();
        response = response.add_detail(field.to_string(), messages);
    }
    HttpResponse::BadRequest().json(response)
}

/// Error type returned by handlers
#[derive(Debug)]
pub enum ApiError {
    /// Failure reported by a core service or repository
    Domain(DomainError),
    /// Request body or query failed validation
    Invalid(validator::ValidationErrors),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Domain(error) => error.fmt(f),
            ApiError::Invalid(errors) => write!(f, "Invalid request data: {}", errors),
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        ApiError::Domain(error)
    }
}

impl From<AuthError> for ApiError {
    fn from(error: AuthError) -> Self {
        ApiError::Domain(error.into())
    }
}

impl From<TokenError> for ApiError {
    fn from(error: TokenError) -> Self {
        ApiError::Domain(error.into())
    }
}

impl From<ValidationError> for ApiError {
    fn from(error: ValidationError) -> Self {
        ApiError::Domain(error.into())
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        ApiError::Invalid(errors)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Domain(error) => classify(error).0,
            ApiError::Invalid(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::Domain(error) => handle_domain_error(error),
            ApiError::Invalid(errors) => validation_error_response(errors),
        }
    }
}
