//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session is the only shared mutable state in the application. It is
//! provided once from `App` as a [`SessionContext`] and mutated exclusively
//! through [`SessionContext::login`] and [`SessionContext::logout`], which
//! also keep the persisted localStorage entries in step. Route guards and
//! user-aware components read it to coordinate redirects and identity
//! rendering.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::types::User;
use crate::util::session_storage;

/// An authenticated identity: the user record together with its bearer token.
///
/// Holding both in one struct keeps the pair inseparable; there is no state
/// where a token exists without a user or vice versa.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub user: User,
    pub token: String,
}

/// Session state snapshot. `None` means unauthenticated.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub session: Option<Session>,
}

impl SessionState {
    pub fn authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn user(&self) -> Option<&User> {
        self.session.as_ref().map(|s| &s.user)
    }

    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }

    /// Overwrite the session unconditionally. No token validation happens
    /// here; the remote API is the sole authority.
    pub fn login(&mut self, user: User, token: String) {
        self.session = Some(Session { user, token });
    }

    /// Clear the session. Does not contact the remote API.
    pub fn logout(&mut self) {
        self.session = None;
    }
}

/// Rebuild a session from the raw persisted entries.
///
/// Returns `Some` only when both entries are present and the user record
/// parses; any malformed or partial state degrades to unauthenticated.
pub(crate) fn session_from_raw(
    raw_user: Option<String>,
    raw_token: Option<String>,
) -> Option<Session> {
    let token = raw_token.filter(|t| !t.is_empty())?;
    let raw_user = raw_user?;
    match serde_json::from_str::<User>(&raw_user) {
        Ok(user) => Some(Session { user, token }),
        Err(_) => None,
    }
}

/// Shared handle over the session signal with controlled mutation entry
/// points. `Copy`, so components capture it freely in event handlers.
#[derive(Clone, Copy)]
pub struct SessionContext {
    state: RwSignal<SessionState>,
}

impl SessionContext {
    /// Create the context from persisted storage and register it for the
    /// component tree. Called once from `App`.
    pub fn provide() -> Self {
        let restored = SessionState { session: session_storage::load_session() };
        let ctx = Self { state: RwSignal::new(restored) };
        provide_context(ctx);
        ctx
    }

    /// Reactive read of the current state.
    pub fn get(self) -> SessionState {
        self.state.get()
    }

    /// Non-reactive snapshot of the bearer token, for event handlers.
    pub fn token(self) -> Option<String> {
        self.state.with_untracked(|s| s.token().map(str::to_owned))
    }

    /// Non-reactive snapshot of the user record, for event handlers.
    pub fn user(self) -> Option<User> {
        self.state.with_untracked(|s| s.user().cloned())
    }

    /// Store a fresh identity and persist it.
    pub fn login(self, user: User, token: String) {
        session_storage::persist(&user, &token);
        self.state.update(|s| s.login(user, token));
    }

    /// Drop the identity and remove the persisted entries.
    pub fn logout(self) {
        session_storage::clear();
        self.state.update(SessionState::logout);
    }
}
