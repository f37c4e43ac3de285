//! Application state and factory
//!
//! This module handles the initialization of the application state
//! and provides the factory for creating the Actix-web application.

use std::sync::Arc;

use actix_web::{
    error::{InternalError, JsonPayloadError, QueryPayloadError},
    middleware::Logger,
    web, App, HttpRequest, HttpResponse,
};
use cv_core::errors::DomainError;
use cv_core::repositories::AccountRepository;
use cv_core::services::{
    AccountService, Clock, OtpService, OtpServiceConfig, PasswordHasher, SmsServiceTrait,
    SystemClock, TokenService, TokenServiceConfig,
};
use cv_infra::Repositories;
use cv_shared::{error_codes, AppConfig, ErrorResponse};

use crate::middleware::{create_cors, SessionAuth};
use crate::routes;

/// Application state shared by every worker
pub struct AppState {
    pub account_service: AccountService<dyn AccountRepository>,
    pub otp_service: OtpService<dyn AccountRepository, dyn SmsServiceTrait>,
    pub token_service: Arc<TokenService>,
    pub repositories: Repositories,
    pub clock: Arc<dyn Clock>,
    pub config: AppConfig,
}

impl AppState {
    /// Wire the services over the given repositories and SMS sender
    pub fn new(
        config: AppConfig,
        repositories: Repositories,
        sms_service: Arc<dyn SmsServiceTrait>,
    ) -> Result<Self, DomainError> {
        Self::with_clock(config, repositories, sms_service, Arc::new(SystemClock))
    }

    /// Same as [`AppState::new`] with an explicit time source
    pub fn with_clock(
        config: AppConfig,
        repositories: Repositories,
        sms_service: Arc<dyn SmsServiceTrait>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, DomainError> {
        let token_config = TokenServiceConfig::from_jwt_config(&config.auth.jwt)?;
        let token_service = Arc::new(TokenService::with_clock(token_config, Arc::clone(&clock)));

        let otp_service = OtpService::with_clock(
            Arc::clone(&repositories.accounts),
            sms_service,
            Arc::clone(&token_service),
            OtpServiceConfig::default(),
            Arc::clone(&clock),
        );
        let account_service =
            AccountService::new(Arc::clone(&repositories.accounts), PasswordHasher::default());

        Ok(Self {
            account_service,
            otp_service,
            token_service,
            repositories,
            clock,
            config,
        })
    }

    /// Replace the password hasher, e.g. with a lower bcrypt cost
    pub fn with_password_hasher(mut self, hasher: PasswordHasher) -> Self {
        self.account_service = AccountService::new(Arc::clone(&self.repositories.accounts), hasher);
        self
    }

    /// Session middleware bound to this state's token service
    pub fn session_auth(&self) -> SessionAuth {
        SessionAuth::new(Arc::clone(&self.token_service))
    }
}

fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::debug!("Rejected JSON body on {}: {}", req.path(), err);
    let response = HttpResponse::BadRequest().json(ErrorResponse::new(
        error_codes::BAD_REQUEST,
        format!("Invalid request body: {}", err),
    ));
    InternalError::from_response(err, response).into()
}

fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::debug!("Rejected query string on {}: {}", req.path(), err);
    let response = HttpResponse::BadRequest().json(ErrorResponse::new(
        error_codes::BAD_REQUEST,
        format!("Invalid query string: {}", err),
    ));
    InternalError::from_response(err, response).into()
}

/// Create and configure the application with all dependencies
pub fn create_app(
    app_state: web::Data<AppState>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let cors = create_cors(&app_state.config.cors);
    let session_auth = app_state.session_auth();
    let json_config = web::JsonConfig::default()
        .limit(app_state.config.server.max_payload_size)
        .error_handler(json_error_handler);
    let query_config = web::QueryConfig::default().error_handler(query_error_handler);

    App::new()
        .app_data(app_state)
        .app_data(json_config)
        .app_data(query_config)
        .wrap(cors)
        .wrap(Logger::default())
        .configure(|cfg| routes::configure(cfg, session_auth))
        .default_service(web::route().to(not_found))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
