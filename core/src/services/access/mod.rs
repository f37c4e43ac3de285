//! Role-based authorization for session claims

use crate::domain::entities::account::Role;
use crate::domain::entities::session::SessionClaims;
use crate::errors::AuthError;

/// Check that a request's session satisfies a required role
///
/// # Returns
///
/// * `Ok(&SessionClaims)` - Session present with the required role
/// * `Err(AuthError::MissingSession)` - No authenticated session on the request
/// * `Err(AuthError::InsufficientRole)` - Session role differs from `required`
pub fn authorize(claims: Option<&SessionClaims>, required: Role) -> Result<&SessionClaims, AuthError> {
    let claims = claims.ok_or(AuthError::MissingSession)?;
    if claims.role != required {
        return Err(AuthError::InsufficientRole {
            required: required.to_string(),
        });
    }
    Ok(claims)
}
