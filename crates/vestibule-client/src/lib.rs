// Vestibule client
// Submit operations for the auth forms: one request/response exchange per
// attempt, no retry, and no network call while the form is invalid.

pub mod api;
pub mod http;
pub mod submit;

pub use api::{AuthApi, SubmitOutcome, NETWORK_ERROR_MESSAGE};
pub use http::ApiClient;
pub use submit::{submit_login, submit_signup, TERMS_MESSAGE};
