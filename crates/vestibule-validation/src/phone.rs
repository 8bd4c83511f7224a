//! Phone number validation

use crate::ValidationResult;
use once_cell::sync::Lazy;
use regex::Regex;

// Optional "+", first digit 1-9, up to 15 further digits. Loose on
// purpose (not E.164); the server decides what is actually reachable.
static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+?[1-9][0-9]{0,15}$").unwrap()
});

/// Drop the punctuation people type into phone numbers
fn strip_formatting(value: &str) -> String {
    value
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '(' | ')'))
        .collect()
}

/// Validate phone number format, ignoring spaces, hyphens and parentheses
pub fn validate_phone(value: &str) -> ValidationResult {
    if PHONE_REGEX.is_match(&strip_formatting(value)) {
        ValidationResult::Valid
    } else {
        ValidationResult::invalid("Please enter a valid phone number")
    }
}
