use shared::models::{Session, UserProfile};
use yewdux::prelude::*;

/// Global application state shared across components.
///
/// Holds only the in-memory copy of the session; fetched page data stays
/// local to the page that fetched it.
#[derive(Default, Clone, PartialEq, Eq, Store)]
pub struct AppState {
    /// Current session, `None` while signed out.
    pub session: Option<Session>,
}

impl AppState {
    /// Build the state for a freshly established session.
    pub fn authenticated(session: Session) -> Self {
        Self {
            session: Some(session),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// The signed-in user's cached profile, when one is stored.
    pub fn user(&self) -> Option<&UserProfile> {
        self.session.as_ref().and_then(|session| session.user.as_ref())
    }
}
