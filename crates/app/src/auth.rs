use dioxus::prelude::*;
use shared_types::Session;

/// Global authentication state.
///
/// The in-memory image of the persisted session, provided as context so any
/// route can read who is signed in without touching browser storage itself.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub session: Signal<Option<Session>>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            session: Signal::new(None),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_some()
    }

    pub fn set_session(&mut self, session: Session) {
        self.session.set(Some(session));
    }

    pub fn clear(&mut self) {
        self.session.set(None);
    }

    /// Email to display in the header; empty before the gate resolves.
    pub fn email(&self) -> String {
        self.session
            .read()
            .as_ref()
            .map(|s| s.email.clone())
            .unwrap_or_default()
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}
