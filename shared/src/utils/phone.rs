//! Phone number utilities

use once_cell::sync::Lazy;
use regex::Regex;

// International phone number regex (E.164 format)
static INTERNATIONAL_PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+[1-9]\d{6,14}$").expect("valid E.164 pattern"));

/// Normalize a phone number by removing common formatting characters
pub fn normalize_phone_number(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}

/// Check if a phone number is valid international E.164 (`+` then 7 to 15 digits)
pub fn is_valid_international_phone(phone: &str) -> bool {
    INTERNATIONAL_PHONE_REGEX.is_match(&normalize_phone_number(phone))
}

/// Mask a phone number for logging, keeping only the last 4 digits
///
/// ```
/// use cv_shared::phone::mask_phone_number;
/// assert_eq!(mask_phone_number("+15550001111"), "+*******1111");
/// ```
pub fn mask_phone_number(phone: &str) -> String {
    let len = phone.chars().count();
    if len <= 4 {
        return "*".repeat(len);
    }

    let visible: String = phone.chars().skip(len - 4).collect();
    if phone.starts_with('+') {
        format!("+{}{}", "*".repeat(len - 5), visible)
    } else {
        format!("{}{}", "*".repeat(len - 4), visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_phone_number() {
        assert_eq!(normalize_phone_number("+1 (555) 000-1111"), "+15550001111");
        assert_eq!(normalize_phone_number("555 0001"), "5550001");
    }

    #[test]
    fn test_is_valid_international_phone() {
        assert!(is_valid_international_phone("+15550001111"));
        assert!(is_valid_international_phone("+61 412 345 678"));
        assert!(!is_valid_international_phone("15550001111"));
        assert!(!is_valid_international_phone("+0123456789"));
        assert!(!is_valid_international_phone("+123"));
    }

    #[test]
    fn test_mask_phone_number() {
        assert_eq!(mask_phone_number("+1234567890"), "+******7890");
        assert_eq!(mask_phone_number("1234567890"), "******7890");
        assert_eq!(mask_phone_number("123"), "***");
        assert_eq!(mask_phone_number("1234"), "****");
    }
}
