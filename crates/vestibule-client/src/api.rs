// File: src/api.rs
// Purpose: Submit outcome type and the auth endpoint seam

use serde_json::Value as JsonValue;
use std::future::Future;
use vestibule_forms::{FieldError, LoginData, SignupData};

/// Message shown when the transport itself fails
pub const NETWORK_ERROR_MESSAGE: &str = "Network error occurred";

/// Terminal outcome of one submission attempt. No automatic retry.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Server accepted the submission
    Success(JsonValue),
    /// Validation refused the submission; no network call was made
    Rejected(Vec<FieldError>),
    /// Server answered with a structured error message
    ServerError(String),
    /// Transport failure, collapsed to one generic outcome
    NetworkError,
}

impl SubmitOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmitOutcome::Success(_))
    }

    /// Top-level message to show for a failed attempt. Rejections carry
    /// per-field messages instead and render at the fields.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            SubmitOutcome::Success(_) | SubmitOutcome::Rejected(_) => None,
            SubmitOutcome::ServerError(message) => Some(message.as_str()),
            SubmitOutcome::NetworkError => Some(NETWORK_ERROR_MESSAGE),
        }
    }
}

/// The two auth endpoints, one request/response exchange each
pub trait AuthApi {
    fn login(&self, data: &LoginData) -> impl Future<Output = SubmitOutcome> + Send;
    fn signup(&self, data: &SignupData) -> impl Future<Output = SubmitOutcome> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_messages() {
        assert_eq!(SubmitOutcome::Success(json!({})).error_message(), None);
        assert_eq!(SubmitOutcome::Rejected(Vec::new()).error_message(), None);
        assert_eq!(
            SubmitOutcome::ServerError("Account exists".to_string()).error_message(),
            Some("Account exists")
        );
        assert_eq!(
            SubmitOutcome::NetworkError.error_message(),
            Some("Network error occurred")
        );
    }
}
