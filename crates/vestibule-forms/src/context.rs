// File: src/context.rs
// Purpose: Render-ready snapshot of a form's errors and values

use std::collections::HashMap;

/// Point-in-time view of a form for rendering: the message of every
/// annotated field plus every field's current value, keyed by field name.
///
/// Built by [`crate::Form::context`]. The snapshot owns its data, so it
/// stays stable while the form keeps changing underneath it.
#[derive(Debug, Clone, Default)]
pub struct FormContext {
    errors: HashMap<String, String>,
    values: HashMap<String, String>,
}

impl FormContext {
    pub(crate) fn new(errors: HashMap<String, String>, values: HashMap<String, String>) -> Self {
        Self { errors, values }
    }

    /// Whether the named field was annotated when the snapshot was taken
    pub fn has_error(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    /// Annotation message for the named field, if it was in error
    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// Whether any field was in error
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Value the named field held when the snapshot was taken
    pub fn value(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use crate::field::Field;
    use crate::form::Form;
    use crate::rules::FieldKind;
    use pretty_assertions::assert_eq;

    fn login_like() -> Form {
        Form::new(
            "login",
            vec![
                Field::new("email", "Email", FieldKind::Email),
                Field::new("password", "Password", FieldKind::Required),
            ],
        )
    }

    #[test]
    fn test_snapshot_reflects_annotations_and_values() {
        let mut form = login_like();
        form.set_value("email", Some("nope"));
        form.set_value("password", Some("secret1"));
        form.validate_all();

        let context = form.context();
        assert!(context.has_errors());
        assert!(context.has_error("email"));
        assert_eq!(
            context.error("email"),
            Some("Please enter a valid email address")
        );
        assert!(!context.has_error("password"));
        assert_eq!(context.value("password"), Some("secret1"));
    }

    #[test]
    fn test_snapshot_is_detached_from_later_edits() {
        let mut form = login_like();
        form.set_value("email", Some("a@b.com"));

        let context = form.context();
        form.set_value("email", Some("changed@b.com"));

        assert_eq!(context.value("email"), Some("a@b.com"));
    }

    #[test]
    fn test_unknown_fields_read_as_absent() {
        let form = login_like();
        let context = form.context();
        assert!(!context.has_errors());
        assert_eq!(context.error("email"), None);
        assert_eq!(context.value("no_such_field"), None);
    }
}
