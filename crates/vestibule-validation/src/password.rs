//! Password rules

use crate::ValidationResult;

/// Minimum password length in characters
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Validate password length. No complexity requirements.
pub fn validate_password(value: &str) -> ValidationResult {
    if value.chars().count() >= MIN_PASSWORD_LENGTH {
        ValidationResult::Valid
    } else {
        ValidationResult::invalid("Password must be at least 6 characters long")
    }
}

/// Validate that a confirmation value matches its reference exactly.
/// Case-sensitive; two empty strings match.
pub fn validate_confirmation(value: &str, reference: &str) -> ValidationResult {
    if value == reference {
        ValidationResult::Valid
    } else {
        ValidationResult::invalid("Passwords do not match")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_length() {
        assert!(validate_password("").is_invalid());
        assert!(validate_password("12345").is_invalid());
        assert!(validate_password("123456").is_valid());
        assert!(validate_password("secret1").is_valid());
    }

    #[test]
    fn test_password_length_counts_chars_not_bytes() {
        // six characters, more than six bytes
        assert!(validate_password("çççççç").is_valid());
    }

    #[test]
    fn test_confirmation() {
        assert!(validate_confirmation("secret1", "secret1").is_valid());
        assert!(validate_confirmation("", "").is_valid());
        assert!(validate_confirmation("secret1", "Secret1").is_invalid());
        assert!(validate_confirmation("secret1", "secret2").is_invalid());
    }
}
