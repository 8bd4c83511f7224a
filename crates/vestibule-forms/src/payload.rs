// File: src/payload.rs
// Purpose: Wire payloads for the login and signup endpoints

use crate::form::Form;
use serde::{Deserialize, Serialize};

/// Payload for POST /api/login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginData {
    pub email: String,
    pub password: String,
    pub remember: bool,
}

impl LoginData {
    /// Collect the payload from a login form's current values
    pub fn from_form(form: &Form, remember: bool) -> Self {
        Self {
            email: form.value("email").to_string(),
            password: form.value("password").to_string(),
            remember,
        }
    }
}

/// Payload for POST /api/signup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupData {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub accepted_terms: bool,
}

impl SignupData {
    /// Collect the payload from a signup form's current values
    pub fn from_form(form: &Form, accepted_terms: bool) -> Self {
        Self {
            first_name: form.value("first_name").to_string(),
            last_name: form.value("last_name").to_string(),
            email: form.value("email").to_string(),
            phone: form.value("phone").to_string(),
            password: form.value("password").to_string(),
            accepted_terms,
        }
    }
}
