//! Vestibule validation core
//!
//! Pure validation rules shared by field-level and form-level checks.
//! Every rule is a deterministic function from a string to a
//! [`ValidationResult`]; nothing here panics, logs, or touches I/O.

pub mod email;
pub mod password;
pub mod phone;
pub mod string;

pub use email::validate_email;
pub use password::{validate_confirmation, validate_password};
pub use phone::validate_phone;
pub use string::{validate_min_length, validate_required};

/// Outcome of a single validation rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid(String),
}

impl ValidationResult {
    /// Create a failed result with the given message
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(message.into())
    }

    /// Check if validation passed
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Check if validation failed
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Error message if validation failed
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Valid => None,
            Self::Invalid(message) => Some(message.as_str()),
        }
    }
}
