//! Email format validation

use crate::ValidationResult;
use once_cell::sync::Lazy;
use regex::Regex;

// Loose "local@domain.tld" shape, deliberately short of RFC 5322.
// Server-side validation is authoritative; tightening this only rejects
// addresses the server would accept.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap()
});

/// Validate email format
pub fn validate_email(value: &str) -> ValidationResult {
    if EMAIL_REGEX.is_match(value) {
        ValidationResult::Valid
    } else {
        ValidationResult::invalid("Please enter a valid email address")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_valid_emails() {
        assert!(validate_email("user@example.com").is_valid());
        assert!(validate_email("a@b.com").is_valid());
        assert!(validate_email("user.name+tag@example.co.uk").is_valid());
        assert!(validate_email("user_name@example-domain.com").is_valid());
    }

    #[test]
    fn test_invalid_emails() {
        assert!(validate_email("").is_invalid());
        assert!(validate_email("not-an-email").is_invalid());
        assert!(validate_email("user@example").is_invalid());
        assert!(validate_email("user@").is_invalid());
        assert!(validate_email("@example.com").is_invalid());
        assert!(validate_email("user name@example.com").is_invalid());
        assert!(validate_email("user@@example.com").is_invalid());
    }

    #[test]
    fn test_failure_message() {
        assert_eq!(
            validate_email("nope").message(),
            Some("Please enter a valid email address")
        );
    }
}
