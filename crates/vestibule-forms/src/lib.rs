// Vestibule forms
// Field model, error annotation and form aggregation for the auth UI

pub mod context;
pub mod events;
pub mod field;
pub mod form;
pub mod forms;
pub mod payload;
pub mod rules;
pub mod session;

pub use context::FormContext;
pub use events::{EventRegistry, Trigger};
pub use field::Field;
pub use form::{FieldError, Form, FormOutcome};
pub use forms::{login_form, signup_form};
pub use payload::{LoginData, SignupData};
pub use rules::FieldKind;
pub use session::SessionState;

// Re-export the rule outcome so most callers need only this crate
pub use vestibule_validation::ValidationResult;
