//! Main OTP service implementation

use std::sync::Arc;

use constant_time_eq::constant_time_eq;
use cv_shared::phone::mask_phone_number;

use crate::domain::entities::otp_code::OtpCode;
use crate::domain::value_objects::IssuedSession;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::AccountRepository;
use crate::services::clock::{Clock, SystemClock};
use crate::services::token::TokenService;

use super::config::OtpServiceConfig;
use super::traits::SmsServiceTrait;
use super::types::SendOtpResult;

/// OTP service for issuing and checking one-time login codes
pub struct OtpService<R: AccountRepository + ?Sized, S: SmsServiceTrait + ?Sized> {
    /// Account store holding the current code and its expiry
    account_repository: Arc<R>,
    /// SMS service for sending messages
    sms_service: Arc<S>,
    /// Issues the session token after a successful check
    token_service: Arc<TokenService>,
    clock: Arc<dyn Clock>,
    config: OtpServiceConfig,
}

impl<R: AccountRepository + ?Sized, S: SmsServiceTrait + ?Sized> OtpService<R, S> {
    /// Create a new OTP service backed by the system clock
    pub fn new(
        account_repository: Arc<R>,
        sms_service: Arc<S>,
        token_service: Arc<TokenService>,
        config: OtpServiceConfig,
    ) -> Self {
        Self::with_clock(
            account_repository,
            sms_service,
            token_service,
            config,
            Arc::new(SystemClock),
        )
    }

    /// Create a new OTP service with an explicit time source
    pub fn with_clock(
        account_repository: Arc<R>,
        sms_service: Arc<S>,
        token_service: Arc<TokenService>,
        config: OtpServiceConfig,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            account_repository,
            sms_service,
            token_service,
            clock,
            config,
        }
    }

    /// Issue a fresh code for the account with this phone number and send it by SMS
    ///
    /// This method:
    /// 1. Looks up the account by phone number
    /// 2. Generates a 6-digit code expiring after the configured TTL
    /// 3. Stores code and expiry on the account, replacing any earlier code
    /// 4. Sends the code via SMS
    ///
    /// If the SMS send fails after the code was stored, the stored code stays
    /// valid until it expires.
    ///
    /// # Returns
    ///
    /// * `Ok(SendOtpResult)` - Code stored and sent
    /// * `Err(DomainError::Auth(AuthError::AccountNotFound))` - No account uses this phone
    /// * `Err(DomainError::Auth(AuthError::OtpDeliveryFailed))` - SMS provider failed
    /// * `Err(DomainError)` - Store failure or timeout
    pub async fn request_otp(&self, phone: &str) -> DomainResult<SendOtpResult> {
        let masked = mask_phone_number(phone);

        if self.account_repository.find_by_phone(phone).await?.is_none() {
            tracing::info!(phone = %masked, event = "otp_request_unknown_phone", "No account for phone number");
            return Err(AuthError::AccountNotFound.into());
        }

        let otp = OtpCode::generate(self.clock.now(), self.config.code_ttl_seconds);

        let updated = self
            .account_repository
            .update_otp(phone, &otp.code, otp.expires_at)
            .await?;
        if !updated {
            // Account removed between lookup and update
            return Err(AuthError::AccountNotFound.into());
        }

        tracing::info!(
            phone = %masked,
            expires_at = otp.expires_at,
            event = "otp_generated",
            "Stored new OTP for account"
        );

        let message_id = self
            .sms_service
            .send_sms(phone, &self.config.message_for(&otp.code))
            .await
            .map_err(|e| {
                tracing::warn!(
                    phone = %masked,
                    provider = self.sms_service.provider_name(),
                    error = %e,
                    event = "otp_delivery_failed",
                    "OTP stored but SMS delivery failed"
                );
                DomainError::Auth(AuthError::OtpDeliveryFailed)
            })?;

        tracing::info!(
            phone = %masked,
            provider = self.sms_service.provider_name(),
            message_id = %message_id,
            event = "otp_sent",
            "OTP sent"
        );

        Ok(SendOtpResult {
            message_id,
            expires_at: otp.expires_at,
        })
    }

    /// Check a submitted code and issue a session on success
    ///
    /// The code must equal the stored code exactly and the current time must
    /// not be past the stored expiry. The stored code is left in place after a
    /// successful check.
    ///
    /// # Returns
    ///
    /// * `Ok(IssuedSession)` - Signed session token for the account's username and role
    /// * `Err(DomainError::Auth(AuthError::AccountNotFound))` - No account uses this phone
    /// * `Err(DomainError::Auth(AuthError::InvalidOrExpiredOtp))` - Wrong or expired code
    pub async fn verify_otp(&self, phone: &str, code: &str) -> DomainResult<IssuedSession> {
        let masked = mask_phone_number(phone);

        let account = self
            .account_repository
            .find_by_phone(phone)
            .await?
            .ok_or(AuthError::AccountNotFound)?;

        let matches = account.has_otp() && constant_time_eq(code.as_bytes(), account.otp.as_bytes());
        let now = self.clock.now();

        if !matches || account.otp_expired_at(now) {
            tracing::warn!(
                phone = %masked,
                code_matched = matches,
                expired = account.otp_expired_at(now),
                event = "otp_verification_failed",
                "OTP verification failed"
            );
            return Err(AuthError::InvalidOrExpiredOtp.into());
        }

        let token = self.token_service.issue(&account.username, account.role)?;

        tracing::info!(
            phone = %masked,
            account_id = %account.id,
            event = "otp_verified_success",
            "OTP verified, session issued"
        );

        Ok(IssuedSession::new(account.id, token))
    }
}
