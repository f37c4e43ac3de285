use cv_core::domain::entities::Role;
use cv_core::errors::ValidationError as DomainValidationError;
use cv_core::services::SignupRequest as SignupCommand;
use cv_shared::phone::{is_valid_international_phone, normalize_phone_number};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Accepts E.164 numbers, ignoring spaces and punctuation
fn validate_phone_number(phone: &str) -> Result<(), ValidationError> {
    if is_valid_international_phone(phone) {
        Ok(())
    } else {
        let mut error = ValidationError::new("phone_format");
        error.message = Some("Phone number must be in international format, e.g. +15550001111".into());
        Err(error)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 1, max = 64, message = "Username is required"))]
    pub username: String,

    #[validate(length(min = 1, max = 72, message = "Password must be 1 to 72 characters"))]
    pub password: String,

    /// "customer" or "vendor", any case
    #[validate(length(min = 1, message = "Role is required"))]
    pub role: String,

    #[validate(custom(function = "validate_phone_number"))]
    pub phone_number: String,
}

impl SignupRequest {
    /// Convert into the core signup input, parsing the role and normalizing the phone number
    pub fn into_command(self) -> Result<SignupCommand, DomainValidationError> {
        let role: Role = self.role.parse()?;
        Ok(SignupCommand {
            username: self.username,
            password: self.password,
            role,
            phone_number: normalize_phone_number(&self.phone_number),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RequestOtpRequest {
    #[validate(custom(function = "validate_phone_number"))]
    pub phone_number: String,
}

impl RequestOtpRequest {
    pub fn phone(&self) -> String {
        normalize_phone_number(&self.phone_number)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VerifyOtpRequest {
    #[validate(custom(function = "validate_phone_number"))]
    pub phone_number: String,

    #[validate(length(min = 1, message = "OTP is required"))]
    pub otp: String,
}

impl VerifyOtpRequest {
    pub fn phone(&self) -> String {
        normalize_phone_number(&self.phone_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_validation() {
        let request = SignupRequest {
            username: "alice".to_string(),
            password: "pw".to_string(),
            role: "Vendor".to_string(),
            phone_number: "+1 555 000 1111".to_string(),
        };
        assert!(request.validate().is_ok());

        let command = request.into_command().unwrap();
        assert_eq!(command.role, Role::Vendor);
        assert_eq!(command.phone_number, "+15550001111");
    }

    #[test]
    fn test_signup_rejects_unknown_role() {
        let request = SignupRequest {
            username: "alice".to_string(),
            password: "pw".to_string(),
            role: "admin".to_string(),
            phone_number: "+15550001111".to_string(),
        };
        assert!(request.into_command().is_err());
    }

    #[test]
    fn test_phone_must_be_international() {
        let request = RequestOtpRequest {
            phone_number: "5550001111".to_string(),
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("phone_number"));
    }
}
