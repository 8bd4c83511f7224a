// File: src/session.rs
// Purpose: Explicit session state passed to UI affordance decisions

/// Who the UI believes is signed in.
///
/// Passed explicitly into whatever decides UI affordances, instead of
/// living in ambient global state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Anonymous,
    Authenticated {
        email: String,
    },
}

impl SessionState {
    /// Session for a successful login
    pub fn authenticated(email: impl Into<String>) -> Self {
        Self::Authenticated {
            email: email.into(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    /// Signed-in email, if any
    pub fn email(&self) -> Option<&str> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated { email } => Some(email.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_states() {
        let anon = SessionState::default();
        assert!(!anon.is_authenticated());
        assert_eq!(anon.email(), None);

        let session = SessionState::authenticated("a@b.com");
        assert!(session.is_authenticated());
        assert_eq!(session.email(), Some("a@b.com"));
    }
}
