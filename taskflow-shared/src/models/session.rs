use serde::{Deserialize, Serialize};

use super::user::UserProfile;

/// The client-side session: a bearer token plus the profile blob that was
/// stored with it.
///
/// The token is an opaque credential; its lifetime runs until explicit
/// logout, deletion, or a server-side 401. The profile can be absent right
/// after OTP verification, which returns only a token; it is filled in by
/// the next successful login or profile update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    /// Opaque bearer credential sent as `Authorization: Bearer <token>`.
    pub token: String,

    /// Profile stored alongside the token, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserProfile>,
}

impl Session {
    /// Session holding a token but no profile yet.
    #[must_use]
    pub const fn bare(token: String) -> Self {
        Self { token, user: None }
    }
}
