//! Session state synchronized with durable storage.

use std::cell::RefCell;

use serde::{Deserialize, Serialize};

use zentro_core::AuthState;
use zentro_storage::KeyValueStore;

/// Storage key for the raw auth token.
pub const TOKEN_KEY: &str = "token";
/// Storage key for the serialized user record.
pub const USER_KEY: &str = "user";

/// The signed-in user as returned by the auth backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: String,
}

#[derive(Debug, Default)]
struct SessionState {
    user: Option<User>,
    token: Option<String>,
    authenticated: bool,
    initialized: bool,
}

/// Authentication session for the active UI session.
///
/// In-memory state is authoritative; storage is a best-effort mirror so a
/// page reload (or app restart) can restore the session. Storage failures
/// are logged and never surface to the caller.
///
/// Methods take `&self` (single-threaded, interior mutability) so a shared
/// `Rc<Session<_>>` can serve both the login flow and the cart's auth gate.
#[derive(Debug)]
pub struct Session<S: KeyValueStore> {
    storage: S,
    state: RefCell<SessionState>,
}

impl<S: KeyValueStore> Session<S> {
    /// Create an anonymous, not-yet-initialized session.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            state: RefCell::new(SessionState::default()),
        }
    }

    /// Restore the session from storage.
    ///
    /// The session becomes authenticated only if both the token and a
    /// well-formed user record are present. A malformed user payload is
    /// logged and the session stays anonymous; the stored keys are left in
    /// place so the next sign-in overwrites them.
    pub fn initialize(&self) {
        let token = match self.storage.get(TOKEN_KEY) {
            Ok(token) => token,
            Err(err) => {
                tracing::warn!("failed to read token from storage: {err}");
                None
            }
        };
        let user_raw = match self.storage.get(USER_KEY) {
            Ok(raw) => raw,
            Err(err) => {
                tracing::warn!("failed to read user from storage: {err}");
                None
            }
        };

        let mut state = self.state.borrow_mut();
        if let (Some(token), Some(user_raw)) = (token, user_raw) {
            match serde_json::from_str::<User>(&user_raw) {
                Ok(user) => {
                    state.user = Some(user);
                    state.token = Some(token);
                    state.authenticated = true;
                }
                Err(err) => {
                    tracing::warn!("stored user record is malformed, staying anonymous: {err}");
                }
            }
        }
        state.initialized = true;
    }

    /// Sign in: adopt the credentials handed back by the auth backend and
    /// mirror them into storage.
    pub fn set_credentials(&self, user: User, token: impl Into<String>) {
        let token = token.into();

        if let Err(err) = self.storage.set(TOKEN_KEY, &token) {
            tracing::warn!("failed to persist token: {err}");
        }
        match serde_json::to_string(&user) {
            Ok(payload) => {
                if let Err(err) = self.storage.set(USER_KEY, &payload) {
                    tracing::warn!("failed to persist user: {err}");
                }
            }
            Err(err) => tracing::error!("failed to serialize user: {err}"),
        }

        let mut state = self.state.borrow_mut();
        state.user = Some(user);
        state.token = Some(token);
        state.authenticated = true;
    }

    /// Sign out: drop in-memory credentials and remove the stored keys.
    ///
    /// The cart's storage key is independent and deliberately untouched.
    pub fn logout(&self) {
        if let Err(err) = self.storage.remove(TOKEN_KEY) {
            tracing::warn!("failed to remove stored token: {err}");
        }
        if let Err(err) = self.storage.remove(USER_KEY) {
            tracing::warn!("failed to remove stored user: {err}");
        }

        let mut state = self.state.borrow_mut();
        state.user = None;
        state.token = None;
        state.authenticated = false;
    }

    pub fn user(&self) -> Option<User> {
        self.state.borrow().user.clone()
    }

    pub fn token(&self) -> Option<String> {
        self.state.borrow().token.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().authenticated
    }

    /// Whether `initialize` has run (the UI waits on this before rendering
    /// auth-dependent chrome).
    pub fn is_initialized(&self) -> bool {
        self.state.borrow().initialized
    }
}

impl<S: KeyValueStore> AuthState for Session<S> {
    fn is_authenticated(&self) -> bool {
        self.is_authenticated()
    }
}
