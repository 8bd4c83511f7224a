// File: src/http.rs
// Purpose: reqwest client for the placeholder auth endpoints

use crate::api::{AuthApi, SubmitOutcome};
use serde::Serialize;
use serde_json::Value as JsonValue;
use vestibule_forms::{LoginData, SignupData};

/// HTTP client for the auth endpoints
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client against the given base URL,
    /// e.g. `http://localhost:3000`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// POST a JSON body and fold the response into a [`SubmitOutcome`]
    async fn post_json<T: Serialize>(&self, path: &str, body: &T) -> SubmitOutcome {
        let url = self.endpoint(path);
        let response = match self.http.post(&url).json(body).send().await {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(%url, error = %err, "request failed");
                return SubmitOutcome::NetworkError;
            }
        };

        let status = response.status();
        if status.is_success() {
            match response.json::<JsonValue>().await {
                Ok(data) => SubmitOutcome::Success(data),
                Err(err) => {
                    tracing::warn!(%url, error = %err, "unreadable success body");
                    SubmitOutcome::NetworkError
                }
            }
        } else {
            // Structured server errors carry {"message": "..."}; anything
            // else is indistinguishable from a broken transport.
            let message = response.json::<JsonValue>().await.ok().and_then(|body| {
                body.get("message")
                    .and_then(JsonValue::as_str)
                    .map(String::from)
            });
            match message {
                Some(message) => SubmitOutcome::ServerError(message),
                None => {
                    tracing::warn!(%url, %status, "unstructured error response");
                    SubmitOutcome::NetworkError
                }
            }
        }
    }
}

impl AuthApi for ApiClient {
    async fn login(&self, data: &LoginData) -> SubmitOutcome {
        self.post_json("/api/login", data).await
    }

    async fn signup(&self, data: &SignupData) -> SubmitOutcome {
        self.post_json("/api/signup", data).await
    }
}
