//! Generic string rules

use crate::ValidationResult;

/// Validate minimum length in characters.
///
/// The failure message is a label-free default; callers that know the
/// field's label replace it with their own copy (name fields report
/// "<Label> must be at least N characters long").
pub fn validate_min_length(value: &str, min: usize) -> ValidationResult {
    if value.chars().count() >= min {
        ValidationResult::Valid
    } else {
        ValidationResult::invalid(format!("Must be at least {} characters long", min))
    }
}

/// Validate presence. No trimming: whitespace counts as present, only the
/// empty string is missing.
pub fn validate_required(value: &str) -> ValidationResult {
    if value.is_empty() {
        ValidationResult::invalid("This field is required")
    } else {
        ValidationResult::Valid
    }
}
