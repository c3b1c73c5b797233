//! Authenticated session shared by outbound adapters.
//!
//! Holds the bearer token. Adapters receive it as an `Arc<Session>` at
//! construction time and read the token per request, so a logout takes
//! effect on the next call. The HTTP adapter signs the session out when the
//! backend answers 401.

use parking_lot::RwLock;

/// Current authentication state.
#[derive(Debug, Default)]
pub struct Session {
    token: RwLock<Option<String>>,
}

impl Session {
    /// Create a signed-out session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session holding a token. Blank tokens leave it signed out.
    #[must_use]
    pub fn from_token(token: impl Into<String>) -> Self {
        let token = token.into();
        Self {
            token: RwLock::new(Some(token).filter(|t| !t.trim().is_empty())),
        }
    }

    /// Sign out.
    pub fn logout(&self) {
        tracing::debug!("Session logout");
        *self.token.write() = None;
    }

    /// Bearer token, if signed in.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.token.read().clone()
    }

    /// Returns true if a token is held.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.read().is_some()
    }
}
