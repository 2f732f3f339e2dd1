//! Browser-local session persistence.
//!
//! All localStorage access goes through [`SessionStore`]; nothing else in the
//! app touches the underlying keys. The token is written under two keys
//! because earlier releases read `token` while current code reads
//! `authToken`, and a deployed mix of both must keep working against the
//! same storage. For that same reason the token keys hold the raw opaque
//! string, not a JSON-quoted one: older readers take the value as-is.
//! Only the profile and pending blobs are JSON-serialized.

use gloo_storage::{LocalStorage, Storage};
use shared::models::{PendingRegistration, Session, UserProfile};

/// Canonical token key.
pub const AUTH_TOKEN_KEY: &str = "authToken";
/// Alias kept in sync for sessions created by earlier releases.
pub const LEGACY_TOKEN_KEY: &str = "token";
/// Cached profile of the signed-in user.
pub const USER_KEY: &str = "user";
/// Registration awaiting email verification.
pub const PENDING_USER_KEY: &str = "pendingUser";

/// Accessor for the persisted session.
///
/// Every operation degrades to "logged out" when storage is unavailable:
/// reads return `None` and writes are dropped.
pub struct SessionStore;

impl SessionStore {
    /// The stored bearer token, if any, preferring the canonical key.
    ///
    /// Token keys are read raw: a value written by an earlier release is an
    /// unquoted opaque string and must come back unchanged.
    pub fn token() -> Option<String> {
        if !storage_available() {
            return None;
        }
        let storage = LocalStorage::raw();
        storage
            .get_item(AUTH_TOKEN_KEY)
            .ok()
            .flatten()
            .or_else(|| storage.get_item(LEGACY_TOKEN_KEY).ok().flatten())
    }

    /// The full persisted session, if a token is present.
    ///
    /// A missing or malformed profile blob does not invalidate the session;
    /// it degrades to a token-only session.
    pub fn get() -> Option<Session> {
        let token = Self::token()?;
        let user = LocalStorage::get(USER_KEY).ok();
        Some(Session { token, user })
    }

    /// Persist a session, writing the token under both keys.
    pub fn set(session: &Session) {
        if !storage_available() {
            return;
        }
        let storage = LocalStorage::raw();
        let _ = storage.set_item(AUTH_TOKEN_KEY, &session.token);
        let _ = storage.set_item(LEGACY_TOKEN_KEY, &session.token);
        match &session.user {
            Some(user) => {
                let _ = LocalStorage::set(USER_KEY, user);
            }
            None => LocalStorage::delete(USER_KEY),
        }
    }

    /// Refresh the cached profile without touching the token keys.
    pub fn update_user(user: &UserProfile) {
        if !storage_available() {
            return;
        }
        let _ = LocalStorage::set(USER_KEY, user);
    }

    /// Remove every stored key, the pending registration included.
    pub fn clear() {
        if !storage_available() {
            return;
        }
        LocalStorage::delete(AUTH_TOKEN_KEY);
        LocalStorage::delete(LEGACY_TOKEN_KEY);
        LocalStorage::delete(USER_KEY);
        LocalStorage::delete(PENDING_USER_KEY);
    }

    /// Remember a registration that still needs its email code.
    pub fn set_pending(pending: &PendingRegistration) {
        if !storage_available() {
            return;
        }
        let _ = LocalStorage::set(PENDING_USER_KEY, pending);
    }

    /// The registration awaiting verification, if any.
    pub fn pending() -> Option<PendingRegistration> {
        if !storage_available() {
            return None;
        }
        LocalStorage::get(PENDING_USER_KEY).ok()
    }

    /// Forget the pending registration.
    pub fn clear_pending() {
        if !storage_available() {
            return;
        }
        LocalStorage::delete(PENDING_USER_KEY);
    }
}

/// `gloo_storage` panics when the storage area itself is missing, so probe it
/// first and treat that state as logged out.
fn storage_available() -> bool {
    web_sys::window()
        .and_then(|window| window.local_storage().ok())
        .flatten()
        .is_some()
}
