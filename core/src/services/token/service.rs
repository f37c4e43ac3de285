//! Main token service implementation

use std::sync::Arc;

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::account::Role;
use crate::domain::entities::session::{IssuedToken, SessionClaims};
use crate::errors::{DomainError, TokenError};
use crate::services::clock::{Clock, SystemClock};

use super::config::TokenServiceConfig;

/// Service for minting and verifying session tokens
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    clock: Arc<dyn Clock>,
}

impl TokenService {
    /// Creates a token service backed by the system clock
    pub fn new(config: TokenServiceConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Creates a token service with an explicit time source
    pub fn with_clock(config: TokenServiceConfig, clock: Arc<dyn Clock>) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        // Expiry is checked against the injected clock after decoding
        let mut validation = Validation::new(config.algorithm);
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
            clock,
        }
    }

    /// Mints a token for `username` and `role`, valid for 24 hours
    ///
    /// # Returns
    ///
    /// * `Ok(IssuedToken)` - The signed token and the claims it carries
    /// * `Err(DomainError::Token(TokenError::GenerationFailed))` - Signing failed
    pub fn issue(&self, username: &str, role: Role) -> Result<IssuedToken, DomainError> {
        let claims = SessionClaims::new(username, role, self.clock.now());

        let header = Header::new(self.config.algorithm);
        let token = encode(&header, &claims, &self.encoding_key).map_err(|e| {
            tracing::error!(error = %e, event = "token_generation_failed", "Failed to sign session token");
            DomainError::Token(TokenError::GenerationFailed)
        })?;

        tracing::debug!(
            username = username,
            role = %role,
            exp = claims.exp,
            event = "session_token_issued",
            "Issued session token"
        );

        Ok(IssuedToken { token, claims })
    }

    /// Verifies a session token and returns its claims
    ///
    /// # Returns
    ///
    /// * `Ok(SessionClaims)` - Signature valid and `now <= exp`
    /// * `Err(TokenError::Malformed)` - Not a parseable token
    /// * `Err(TokenError::InvalidSignature)` - Parsed but not signed with this secret and algorithm
    /// * `Err(TokenError::Expired)` - Correctly signed but past its expiry
    pub fn verify(&self, token: &str) -> Result<SessionClaims, TokenError> {
        let token_data = decode::<SessionClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => {
                    TokenError::InvalidSignature
                }
                _ => TokenError::Malformed,
            })?;

        let claims = token_data.claims;
        if claims.is_expired_at(self.clock.now()) {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }
}
