// File: src/forms.rs
// Purpose: Canonical login and signup form definitions

use crate::field::Field;
use crate::form::Form;
use crate::rules::FieldKind;

/// The login form: email plus presence-only password
pub fn login_form() -> Form {
    Form::new(
        "login",
        vec![
            Field::new("email", "Email", FieldKind::Email),
            Field::new("password", "Password", FieldKind::Required),
        ],
    )
}

/// The signup form, fields in declaration order
pub fn signup_form() -> Form {
    Form::new(
        "signup",
        vec![
            Field::new("first_name", "First name", FieldKind::Name { min: 2 }),
            Field::new("last_name", "Last name", FieldKind::Name { min: 2 }),
            Field::new("email", "Email", FieldKind::Email),
            Field::new("phone", "Phone number", FieldKind::Phone),
            Field::new("password", "Password", FieldKind::Password),
            Field::new(
                "confirm_password",
                "Confirm password",
                FieldKind::Confirmation {
                    of: "password".to_string(),
                },
            ),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_login_form_fields() {
        let form = login_form();
        let names: Vec<&str> = form.fields().iter().map(|f| f.name()).collect();
        assert_eq!(names, vec!["email", "password"]);
        // login password is presence-only
        assert_eq!(form.field("password").unwrap().kind(), &FieldKind::Required);
    }

    #[test]
    fn test_signup_form_declaration_order() {
        let form = signup_form();
        let names: Vec<&str> = form.fields().iter().map(|f| f.name()).collect();
        assert_eq!(
            names,
            vec![
                "first_name",
                "last_name",
                "email",
                "phone",
                "password",
                "confirm_password"
            ]
        );
    }

    #[test]
    fn test_signup_confirmation_references_password() {
        let form = signup_form();
        let kind = form.field("confirm_password").unwrap().kind();
        assert_eq!(kind.reference(), Some("password"));
    }
}
