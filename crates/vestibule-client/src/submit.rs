// File: src/submit.rs
// Purpose: Guarded submission: no network call while the form is invalid

use crate::api::{AuthApi, SubmitOutcome};
use vestibule_forms::{FieldError, Form, FormOutcome, LoginData, SignupData};

/// Error shown when the terms checkbox is left unchecked
pub const TERMS_MESSAGE: &str = "Please agree to the Terms & Conditions";

/// Validate the login form and, only if it passes, call the login
/// endpoint exactly once
pub async fn submit_login<A: AuthApi>(api: &A, form: &mut Form, remember: bool) -> SubmitOutcome {
    match form.validate_all() {
        FormOutcome::Invalid(errors) => {
            tracing::debug!(errors = errors.len(), "login submission refused");
            SubmitOutcome::Rejected(errors)
        }
        FormOutcome::Valid => api.login(&LoginData::from_form(form, remember)).await,
    }
}

/// Validate the signup form plus the terms gate; call the signup endpoint
/// only when everything passes
pub async fn submit_signup<A: AuthApi>(
    api: &A,
    form: &mut Form,
    accepted_terms: bool,
) -> SubmitOutcome {
    let mut errors = match form.validate_all() {
        FormOutcome::Invalid(errors) => errors,
        FormOutcome::Valid => Vec::new(),
    };
    if !accepted_terms {
        errors.push(FieldError {
            field: "terms".to_string(),
            message: TERMS_MESSAGE.to_string(),
        });
    }
    if !errors.is_empty() {
        tracing::debug!(errors = errors.len(), "signup submission refused");
        return SubmitOutcome::Rejected(errors);
    }
    api.signup(&SignupData::from_form(form, accepted_terms)).await
}
