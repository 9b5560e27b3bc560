//! Browser localStorage glue for the persisted session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Two durable entries back the session: the bearer token as a plain string
//! and the user record as JSON. Both are written on every login and removed
//! together on logout. All reads degrade to `None`; this module never fails.

use crate::net::types::User;
use crate::state::session::Session;

#[cfg(feature = "csr")]
const TOKEN_KEY: &str = "token";
#[cfg(feature = "csr")]
const USER_KEY: &str = "user";

#[cfg(feature = "csr")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Read the persisted session, if a complete and well-formed one exists.
pub fn load_session() -> Option<Session> {
    #[cfg(feature = "csr")]
    {
        let storage = storage()?;
        let raw_token = storage.get_item(TOKEN_KEY).ok().flatten();
        let raw_user = storage.get_item(USER_KEY).ok().flatten();
        let had_entries = raw_token.is_some() || raw_user.is_some();
        let session = crate::state::session::session_from_raw(raw_user, raw_token);
        if session.is_none() && had_entries {
            log::warn!("persisted session unusable; starting unauthenticated");
        }
        session
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Persist both session entries, overwriting any previous values.
pub fn persist(user: &User, token: &str) {
    #[cfg(feature = "csr")]
    {
        let Some(storage) = storage() else {
            return;
        };
        let Ok(raw_user) = serde_json::to_string(user) else {
            return;
        };
        let _ = storage.set_item(TOKEN_KEY, token);
        let _ = storage.set_item(USER_KEY, &raw_user);
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (user, token);
    }
}

/// Remove both session entries.
pub fn clear() {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(TOKEN_KEY);
            let _ = storage.remove_item(USER_KEY);
        }
    }
}
