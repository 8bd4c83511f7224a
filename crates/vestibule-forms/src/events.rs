// File: src/events.rs
// Purpose: Typed trigger registry replacing ad-hoc DOM event callbacks

use crate::form::Form;

/// A named trigger the host environment can dispatch
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Trigger {
    /// A field lost focus
    FieldBlur(String),
    /// Submission was attempted
    FormSubmit,
}

impl Trigger {
    /// Blur trigger for the named field
    pub fn blur(field: impl Into<String>) -> Self {
        Trigger::FieldBlur(field.into())
    }
}

/// Type alias for a registered trigger handler
pub type Handler = Box<dyn FnMut(&mut Form) + Send>;

/// Registry of handlers keyed by trigger.
///
/// Handlers run synchronously, in registration order, when their trigger
/// is dispatched. The host maps its own UI events onto triggers, so the
/// validation engine never depends on a UI framework.
#[derive(Default)]
pub struct EventRegistry {
    handlers: Vec<(Trigger, Handler)>,
}

impl EventRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for a trigger
    pub fn on(&mut self, trigger: Trigger, handler: impl FnMut(&mut Form) + Send + 'static) {
        self.handlers.push((trigger, Box::new(handler)));
    }

    /// Dispatch a trigger against a form, returning how many handlers ran
    pub fn dispatch(&mut self, trigger: &Trigger, form: &mut Form) -> usize {
        let mut ran = 0;
        for (registered, handler) in &mut self.handlers {
            if registered == trigger {
                handler(form);
                ran += 1;
            }
        }
        tracing::debug!(?trigger, ran, "trigger dispatched");
        ran
    }

    /// Install the default wiring: blur runs the lenient per-field check,
    /// submit runs full-form validation
    pub fn wire_default_validation(&mut self, form: &Form) {
        for field in form.fields() {
            let name = field.name().to_string();
            self.on(Trigger::blur(name.clone()), move |form| {
                form.validate_on_blur(&name);
            });
        }
        self.on(Trigger::FormSubmit, |form| {
            form.validate_all();
        });
    }
}
