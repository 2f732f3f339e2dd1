use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The body every failed endpoint returns: `{ "error": "…" }`.
///
/// The message is written for end users and the client surfaces it
/// verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Error)]
#[error("{error}")]
pub struct ErrorBody {
    /// Human-readable description of what went wrong.
    pub error: String,
}

impl ErrorBody {
    /// Builds an error body from any message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_wire_shape() {
        let body = ErrorBody::new("Invalid code");
        assert_eq!(serde_json::to_string(&body).unwrap(), r#"{"error":"Invalid code"}"#);
    }

    #[test]
    fn error_body_parses_backend_failure() {
        let body: ErrorBody = serde_json::from_str(r#"{"error":"Email already registered"}"#).unwrap();
        assert_eq!(body.error, "Email already registered");
    }

    #[test]
    fn error_body_displays_message_only() {
        let body = ErrorBody::new("Invalid credentials");
        assert_eq!(body.to_string(), "Invalid credentials");
    }

    #[test]
    fn error_body_is_std_error() {
        let body = ErrorBody::new("boom");
        let as_error: &dyn std::error::Error = &body;
        assert_eq!(as_error.to_string(), "boom");
    }
}
