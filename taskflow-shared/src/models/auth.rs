use serde::{Deserialize, Serialize};

use super::user::{UserProfile, UserStats};

/// Credentials submitted by the login form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// The account's email address.
    pub email: String,
    /// The account's password.
    pub password: String,
}

/// Successful authentication body: a bearer token plus the profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    /// Opaque bearer credential for subsequent requests.
    pub token: String,
    /// Profile of the authenticated account.
    pub user: UserProfile,
}

/// Fields submitted by the registration form.
///
/// The confirmation and terms checkbox are validated client-side and never
/// sent over the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    /// Display name for the new account.
    pub name: String,
    /// Email address to verify.
    pub email: String,
    /// Chosen password (client enforces a minimum of 8 characters).
    pub password: String,
}

/// Body returned when registration needs email verification first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VerificationRequired {
    /// Identifier of the unverified account, passed back during OTP calls.
    pub user_id: String,
    /// Optional human-readable note from the server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Registration outcome.
///
/// The backend decides per deployment whether a new account must verify its
/// email: it answers either with a full session (`{ token, user }`) or with
/// the identifier that starts the OTP flow (`{ userId }`). Both shapes are
/// accepted here so the controller can route on the outcome instead of
/// guessing a single behavior.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum RegisterResponse {
    /// Server skipped verification and opened a session directly.
    Authenticated(LoginResponse),
    /// Server created an unverified account; the OTP flow begins.
    VerificationRequired(VerificationRequired),
}

/// Six-digit code submission for the verification endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VerifyOtpRequest {
    /// Identifier returned by registration.
    pub user_id: String,
    /// The emailed one-time code, exactly six digits.
    pub otp: String,
}

/// Body returned by a successful OTP verification.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VerifyOtpResponse {
    /// Bearer token for the now-verified account.
    pub token: String,
    /// Profile, when the server includes it; older deployments send only
    /// the token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserProfile>,
}

/// Request to email a fresh one-time code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResendOtpRequest {
    /// Identifier returned by registration.
    pub user_id: String,
}

/// `GET /auth/profile` body: the profile plus account statistics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileResponse {
    /// Current profile.
    pub user: UserProfile,
    /// Aggregate statistics for the account.
    pub stats: UserStats,
}

/// Editable profile fields for `PUT /auth/profile`.
///
/// Absent fields are left untouched by the server, so `None` is omitted
/// from the body rather than sent as `null`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New university.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub university: Option<String>,
    /// New major.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub major: Option<String>,
    /// New year of study.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_of_study: Option<u8>,
    /// New biography.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

/// `PUT /auth/profile` body: the profile as the server now holds it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateProfileResponse {
    /// Updated profile.
    pub user: UserProfile,
}

/// Password change submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    /// The password currently on the account.
    pub current_password: String,
    /// The replacement password.
    pub new_password: String,
}

/// Minimal acknowledgement body.
///
/// Several endpoints answer `{}` or `{ "message": … }`; both parse into
/// this.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ack {
    /// Optional human-readable confirmation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Transient record kept while an OTP verification is outstanding.
///
/// Written at registration submission, deleted on successful verification.
/// It carries no expiry: an abandoned verification leaves it in place until
/// the next successful one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PendingRegistration {
    /// Email the code was sent to, shown on the verification page.
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A `{ token, user }` body lands in the authenticated arm.
    #[test]
    fn register_response_authenticated_arm() {
        let response: RegisterResponse = serde_json::from_str(
            r#"{"token":"t1","user":{"name":"A","email":"a@b.com"}}"#,
        )
        .unwrap();
        match response {
            RegisterResponse::Authenticated(body) => {
                assert_eq!(body.token, "t1");
                assert_eq!(body.user.name, "A");
            }
            RegisterResponse::VerificationRequired(_) => panic!("expected authenticated arm"),
        }
    }

    /// A `{ userId }` body lands in the verification arm.
    #[test]
    fn register_response_verification_arm() {
        let response: RegisterResponse = serde_json::from_str(r#"{"userId":"u1"}"#).unwrap();
        match response {
            RegisterResponse::VerificationRequired(body) => {
                assert_eq!(body.user_id, "u1");
                assert_eq!(body.message, None);
            }
            RegisterResponse::Authenticated(_) => panic!("expected verification arm"),
        }
    }

    /// OTP requests use the backend's camelCase `userId` key.
    #[test]
    fn verify_otp_request_wire_shape() {
        let request = VerifyOtpRequest {
            user_id: "u1".to_string(),
            otp: "123456".to_string(),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"userId":"u1","otp":"123456"}"#);
    }

    #[test]
    fn resend_otp_request_wire_shape() {
        let request = ResendOtpRequest {
            user_id: "u1".to_string(),
        };
        assert_eq!(serde_json::to_string(&request).unwrap(), r#"{"userId":"u1"}"#);
    }

    /// Verification responses may or may not include the profile.
    #[test]
    fn verify_otp_response_token_only() {
        let response: VerifyOtpResponse = serde_json::from_str(r#"{"token":"t2"}"#).unwrap();
        assert_eq!(response.token, "t2");
        assert!(response.user.is_none());
    }

    /// An empty object is a valid acknowledgement.
    #[test]
    fn ack_parses_empty_object() {
        let ack: Ack = serde_json::from_str("{}").unwrap();
        assert_eq!(ack.message, None);

        let ack: Ack = serde_json::from_str(r#"{"message":"OTP sent"}"#).unwrap();
        assert_eq!(ack.message.as_deref(), Some("OTP sent"));
    }

    /// Untouched profile fields are omitted from the update body.
    #[test]
    fn update_profile_request_omits_absent_fields() {
        let request = UpdateProfileRequest {
            major: Some("Physics".to_string()),
            ..UpdateProfileRequest::default()
        };
        assert_eq!(serde_json::to_string(&request).unwrap(), r#"{"major":"Physics"}"#);
    }

    #[test]
    fn change_password_request_wire_shape() {
        let request = ChangePasswordRequest {
            current_password: "old-secret".to_string(),
            new_password: "new-secret".to_string(),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"currentPassword\":\"old-secret\""));
        assert!(json.contains("\"newPassword\":\"new-secret\""));
    }

    #[test]
    fn pending_registration_roundtrip() {
        let pending = PendingRegistration {
            email: "a@b.com".to_string(),
        };
        let json = serde_json::to_string(&pending).unwrap();
        assert_eq!(json, r#"{"email":"a@b.com"}"#);
        let back: PendingRegistration = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pending);
    }
}
