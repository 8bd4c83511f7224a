// File: src/rules.rs
// Purpose: Field kinds and the required-first rule composition

use vestibule_validation::{
    validate_confirmation, validate_email, validate_min_length, validate_password,
    validate_phone, validate_required, ValidationResult,
};

/// Which rule a field carries beyond the shared required check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Email,
    Phone,
    /// Length-checked password (signup)
    Password,
    /// Name-style field with a minimum length
    Name { min: usize },
    /// Must match the named field's current value (password confirmation)
    Confirmation { of: String },
    /// Presence only (login password)
    Required,
}

impl FieldKind {
    /// Full composition used at submit time: required check first (empty
    /// stops with the required message), then the kind's own rule.
    ///
    /// `reference` is the current value of the referenced field; only
    /// `Confirmation` consults it.
    pub fn check(&self, value: &str, label: &str, reference: Option<&str>) -> ValidationResult {
        if validate_required(value).is_invalid() {
            return ValidationResult::invalid(self.required_message(label));
        }
        self.check_value(value, label, reference)
    }

    /// The kind-specific rule alone, without the required check
    pub fn check_value(
        &self,
        value: &str,
        label: &str,
        reference: Option<&str>,
    ) -> ValidationResult {
        match self {
            FieldKind::Email => validate_email(value),
            FieldKind::Phone => validate_phone(value),
            FieldKind::Password => validate_password(value),
            FieldKind::Name { min } => match validate_min_length(value, *min) {
                ValidationResult::Valid => ValidationResult::Valid,
                ValidationResult::Invalid(_) => ValidationResult::invalid(format!(
                    "{} must be at least {} characters long",
                    label, min
                )),
            },
            FieldKind::Confirmation { .. } => {
                validate_confirmation(value, reference.unwrap_or_default())
            }
            FieldKind::Required => ValidationResult::Valid,
        }
    }

    fn required_message(&self, label: &str) -> String {
        match self {
            FieldKind::Confirmation { .. } => "Please confirm your password".to_string(),
            _ => format!("{} is required", label),
        }
    }

    /// Name of the field this kind reads at evaluation time, if any
    pub fn reference(&self) -> Option<&str> {
        match self {
            FieldKind::Confirmation { of } => Some(of.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_required_runs_first() {
        assert_eq!(
            FieldKind::Email.check("", "Email", None).message(),
            Some("Email is required")
        );
        assert_eq!(
            FieldKind::Required.check("", "Password", None).message(),
            Some("Password is required")
        );
    }

    #[test]
    fn test_confirmation_required_message() {
        let kind = FieldKind::Confirmation { of: "password".to_string() };
        assert_eq!(
            kind.check("", "Confirm password", Some("secret1")).message(),
            Some("Please confirm your password")
        );
    }

    #[test]
    fn test_name_message_carries_label() {
        let kind = FieldKind::Name { min: 2 };
        assert_eq!(
            kind.check("A", "First name", None).message(),
            Some("First name must be at least 2 characters long")
        );
        assert!(kind.check("Al", "First name", None).is_valid());
    }

    #[test]
    fn test_required_kind_accepts_any_presence() {
        // login password: presence only, no length rule
        assert!(FieldKind::Required.check("x", "Password", None).is_valid());
    }

    #[test]
    fn test_confirmation_reads_reference() {
        let kind = FieldKind::Confirmation { of: "password".to_string() };
        assert!(kind.check("secret1", "Confirm password", Some("secret1")).is_valid());
        assert_eq!(
            kind.check("secret2", "Confirm password", Some("secret1")).message(),
            Some("Passwords do not match")
        );
        assert_eq!(kind.reference(), Some("password"));
        assert_eq!(FieldKind::Email.reference(), None);
    }
}
