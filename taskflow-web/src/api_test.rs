//! Tests for the API client.
//!
//! Everything here is native: response decoding and URL assembly are pure,
//! so the wire-level behaviors (error-body extraction, malformed-response
//! detection, the 401 predicate) are checked without a browser.

#[cfg(test)]
mod tests {
    use crate::api::{ApiClient, ApiError, Period, decode_response};
    use shared::models::{Ack, DashboardSummary, LoginResponse};

    #[test]
    fn client_trims_trailing_slashes_off_the_base_url() {
        let client = ApiClient::new("/api/");
        assert_eq!(client.api_url("auth/login"), "/api/auth/login");

        let client = ApiClient::new("https://taskflow.app/api");
        assert_eq!(
            client.api_url("/analytics/insights"),
            "https://taskflow.app/api/analytics/insights"
        );
    }

    #[test]
    fn success_body_decodes_into_the_expected_type() {
        let body = r#"{"token":"t1","user":{"name":"A","email":"a@b.com"}}"#;
        let response: LoginResponse = decode_response(200, body).unwrap();
        assert_eq!(response.token, "t1");
        assert_eq!(response.user.name, "A");
    }

    /// A 2xx body that is not the expected shape is its own error kind,
    /// distinct from transport failure.
    #[test]
    fn malformed_success_body_is_not_a_network_error() {
        let result: Result<LoginResponse, ApiError> = decode_response(200, "<html>gateway</html>");
        assert_eq!(result.unwrap_err(), ApiError::MalformedResponse);

        let result: Result<LoginResponse, ApiError> = decode_response(200, r#"{"nope":true}"#);
        assert_eq!(result.unwrap_err(), ApiError::MalformedResponse);
    }

    /// Acknowledge-only endpoints may answer with an empty body.
    #[test]
    fn empty_success_body_decodes_as_an_ack() {
        let ack: Ack = decode_response(200, "").unwrap();
        assert_eq!(ack.message, None);

        let ack: Ack = decode_response(204, "   ").unwrap();
        assert_eq!(ack.message, None);
    }

    /// The server's own `{"error": …}` message is surfaced verbatim.
    #[test]
    fn http_error_prefers_the_server_message() {
        let result: Result<Ack, ApiError> =
            decode_response(400, r#"{"error":"Invalid code"}"#);
        match result.unwrap_err() {
            ApiError::Http { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "Invalid code");
            }
            other => panic!("expected Http error, got {other:?}"),
        }
    }

    /// Without a parseable body the message falls back to the status line.
    #[test]
    fn http_error_without_a_body_gets_a_generic_message() {
        let result: Result<Ack, ApiError> = decode_response(502, "Bad Gateway");
        match result.unwrap_err() {
            ApiError::Http { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message, "HTTP 502");
            }
            other => panic!("expected Http error, got {other:?}"),
        }
    }

    #[test]
    fn only_a_401_counts_as_unauthorized() {
        let unauthorized: Result<DashboardSummary, ApiError> =
            decode_response(401, r#"{"error":"Token expired"}"#);
        assert!(unauthorized.unwrap_err().is_unauthorized());

        let forbidden: Result<DashboardSummary, ApiError> = decode_response(403, "{}");
        assert!(!forbidden.unwrap_err().is_unauthorized());

        assert!(!ApiError::Network.is_unauthorized());
        assert!(!ApiError::MalformedResponse.is_unauthorized());
    }

    /// Error display is what ends up in alerts and toasts.
    #[test]
    fn error_display_is_user_facing_text() {
        let err = ApiError::Http {
            status: 409,
            message: "Email already registered".to_string(),
        };
        assert_eq!(err.to_string(), "Email already registered");
        assert_eq!(ApiError::Network.to_string(), "Unable to reach the server");
    }

    #[test]
    fn period_wire_values_and_labels() {
        assert_eq!(Period::Week.as_str(), "week");
        assert_eq!(Period::Month.as_str(), "month");
        assert_eq!(Period::default(), Period::Week);
        assert_eq!(Period::Week.label(), "This week");
    }
}
