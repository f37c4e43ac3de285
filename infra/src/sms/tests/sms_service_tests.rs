//! Unit tests for SMS helper functions

use crate::sms::{is_valid_phone_number, mask_phone_number};

#[test]
fn test_mask_phone_number() {
    assert_eq!(mask_phone_number("+1234567890"), "+******7890");
    assert_eq!(mask_phone_number("+12345678901234"), "+**********1234");
    assert_eq!(mask_phone_number("1234567890"), "******7890");
    assert_eq!(mask_phone_number("123"), "***");
}

#[test]
fn test_is_valid_phone_number() {
    assert!(is_valid_phone_number("+1234567890"));
    assert!(is_valid_phone_number("+123456789012345"));

    assert!(!is_valid_phone_number("1234567890"));
    assert!(!is_valid_phone_number("+123"));
    assert!(!is_valid_phone_number("+1234567890123456"));
    assert!(!is_valid_phone_number("+123abc4567"));
    assert!(!is_valid_phone_number("+"));
}
