// File: src/form.rs
// Purpose: Ordered field collection with per-field and whole-form validation

use crate::context::FormContext;
use crate::field::Field;
use std::collections::HashMap;
use vestibule_validation::ValidationResult;

/// A single field failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Aggregate result of validating a whole form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutcome {
    /// Every field passed
    Valid,
    /// At least one field failed; errors follow field declaration order
    Invalid(Vec<FieldError>),
}

impl FormOutcome {
    /// Check if validation passed
    pub fn is_valid(&self) -> bool {
        matches!(self, FormOutcome::Valid)
    }

    /// Check if validation failed
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Field errors, empty when valid
    pub fn errors(&self) -> &[FieldError] {
        match self {
            FormOutcome::Valid => &[],
            FormOutcome::Invalid(errors) => errors,
        }
    }
}

/// Ordered collection of the fields making up one form.
///
/// Fields are independent: validating one never touches another field's
/// annotation slot. The only cross-field dependency is a confirmation
/// field reading (never writing) its reference's current value.
#[derive(Debug, Clone)]
pub struct Form {
    name: String,
    fields: Vec<Field>,
}

impl Form {
    /// Create a form from fields in declaration order
    pub fn new(name: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Look up a field by name
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name() == name)
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut Field> {
        self.fields.iter_mut().find(|f| f.name() == name)
    }

    /// Current value of a field, empty for unknown names
    pub fn value(&self, name: &str) -> &str {
        self.field(name).map(Field::value).unwrap_or_default()
    }

    /// Set a field's value. `None` is treated as empty input.
    pub fn set_value(&mut self, name: &str, value: Option<&str>) {
        if let Some(field) = self.field_mut(name) {
            field.set_value(value);
        }
    }

    /// Check whether any field currently carries an annotation
    pub fn has_errors(&self) -> bool {
        self.fields.iter().any(Field::is_annotated)
    }

    // Reference value for a confirmation field, read at evaluation time
    fn reference_value(&self, name: &str) -> Option<String> {
        let of = self.field(name)?.kind().reference()?;
        Some(self.value(of).to_string())
    }

    /// Validate one field with the full required-first composition and
    /// apply the annotate/clear transition to its slot
    pub fn validate_field(&mut self, name: &str) -> ValidationResult {
        let reference = self.reference_value(name);
        let Some(field) = self.field_mut(name) else {
            tracing::warn!(field = name, "validate_field on unknown field");
            return ValidationResult::Valid;
        };
        let result = field
            .kind()
            .check(field.value(), field.label(), reference.as_deref());
        field.apply(result)
    }

    /// Lenient blur-time validation: an empty value clears the annotation
    /// instead of flagging it as required. Required-ness is enforced by
    /// [`Form::validate_all`] when submission is attempted.
    pub fn validate_on_blur(&mut self, name: &str) -> ValidationResult {
        let reference = self.reference_value(name);
        let Some(field) = self.field_mut(name) else {
            tracing::warn!(field = name, "validate_on_blur on unknown field");
            return ValidationResult::Valid;
        };
        if field.value().is_empty() {
            field.clear();
            return ValidationResult::Valid;
        }
        let result = field
            .kind()
            .check_value(field.value(), field.label(), reference.as_deref());
        field.apply(result)
    }

    /// Validate every field in declaration order, leaving per-field
    /// annotations in place
    pub fn validate_all(&mut self) -> FormOutcome {
        let names: Vec<String> = self.fields.iter().map(|f| f.name().to_string()).collect();
        let mut errors = Vec::new();
        for name in names {
            if let ValidationResult::Invalid(message) = self.validate_field(&name) {
                errors.push(FieldError { field: name, message });
            }
        }
        if errors.is_empty() {
            tracing::debug!(form = %self.name, "form valid");
            FormOutcome::Valid
        } else {
            tracing::debug!(form = %self.name, errors = errors.len(), "form invalid");
            FormOutcome::Invalid(errors)
        }
    }

    /// Snapshot of current annotations and values for rendering
    pub fn context(&self) -> FormContext {
        let mut errors = HashMap::new();
        let mut values = HashMap::new();
        for field in &self.fields {
            if let Some(message) = field.annotation() {
                errors.insert(field.name().to_string(), message.to_string());
            }
            values.insert(field.name().to_string(), field.value().to_string());
        }
        FormContext::new(errors, values)
    }
}
