//! Input validation and masking helpers.
//!
//! Emails and phone numbers appear in log output all over the verification
//! flows; the masking helpers here keep them out of plain-text logs.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("valid email regex")
});

/// Validate an email address format
pub fn is_valid_email(email: &str) -> bool {
    email.len() <= 254 && EMAIL_RE.is_match(email)
}

/// Validate phone number format (E.164)
///
/// - Starts with '+'
/// - Contains only digits after '+'
/// - Length between 8 and 15 digits (excluding '+')
pub fn is_valid_phone_number(phone: &str) -> bool {
    if !phone.starts_with('+') {
        return false;
    }

    let digits = &phone[1..];
    if digits.len() < 8 || digits.len() > 15 {
        return false;
    }

    digits.chars().all(|c| c.is_ascii_digit())
}

/// Mask a phone number for logging, showing only the last 4 digits
pub fn mask_phone_number(phone: &str) -> String {
    if phone.len() <= 4 {
        return "*".repeat(phone.len());
    }

    let visible = 4;
    let masked = phone.len() - visible;
    let tail = &phone[phone.len() - visible..];

    if phone.starts_with('+') {
        format!("+{}{}", "*".repeat(masked - 1), tail)
    } else {
        format!("{}{}", "*".repeat(masked), tail)
    }
}

/// Mask an email address for logging, keeping the first character of the
/// local part and the full domain
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() => {
            let first = local.chars().next().unwrap();
            format!("{}***@{}", first, domain)
        }
        _ => "***".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("first.last+tag@sub.example.co"));

        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@example"));
        assert!(!is_valid_email("no-at-sign"));
    }

    #[test]
    fn test_is_valid_phone_number() {
        assert!(is_valid_phone_number("+1234567890"));
        assert!(is_valid_phone_number("+61412345678"));
        assert!(is_valid_phone_number("+123456789012345"));

        assert!(!is_valid_phone_number("1234567890")); // No plus
        assert!(!is_valid_phone_number("+123")); // Too short
        assert!(!is_valid_phone_number("+1234567890123456")); // Too long
        assert!(!is_valid_phone_number("+123abc4567"));
    }

    #[test]
    fn test_mask_phone_number() {
        assert_eq!(mask_phone_number("+1234567890"), "+******7890");
        assert_eq!(mask_phone_number("1234567890"), "******7890");
        assert_eq!(mask_phone_number("123"), "***");
    }

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_email("user@example.com"), "u***@example.com");
        assert_eq!(mask_email("not-an-email"), "***");
    }
}
