// File: src/field.rs
// Purpose: Single form field with value and error annotation slot

use crate::rules::FieldKind;
use vestibule_validation::ValidationResult;

/// A single input field: current value plus at most one error annotation.
///
/// The annotation slot holds the field's error state: the field is "in
/// error" exactly when the slot is non-empty. Annotating an already
/// annotated field replaces the message in place; clearing a clear field
/// is a no-op.
#[derive(Debug, Clone)]
pub struct Field {
    name: String,
    label: String,
    kind: FieldKind,
    value: String,
    annotation: Option<String>,
}

impl Field {
    /// Create a clear field with an empty value
    pub fn new(name: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind,
            value: String::new(),
            annotation: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Set the current value. `None` is treated as empty input.
    pub fn set_value(&mut self, value: Option<&str>) {
        self.value = value.unwrap_or_default().to_string();
    }

    /// Current annotation message, if the field is in error
    pub fn annotation(&self) -> Option<&str> {
        self.annotation.as_deref()
    }

    /// Check whether the field is in error
    pub fn is_annotated(&self) -> bool {
        self.annotation.is_some()
    }

    /// Attach an error annotation, replacing any existing one in place
    pub fn annotate(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(field = %self.name, %message, "field annotated");
        self.annotation = Some(message);
    }

    /// Remove the annotation if present. No-op on a clear field.
    pub fn clear(&mut self) {
        if self.annotation.take().is_some() {
            tracing::debug!(field = %self.name, "field cleared");
        }
    }

    /// Apply a rule outcome to the annotation slot and hand it back
    pub fn apply(&mut self, result: ValidationResult) -> ValidationResult {
        match &result {
            ValidationResult::Valid => self.clear(),
            ValidationResult::Invalid(message) => self.annotate(message.clone()),
        }
        result
    }
}
