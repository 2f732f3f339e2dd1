use once_cell::unsync::OnceCell;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use shared::models::{
    Ack, ChangePasswordRequest, DashboardSummary, ErrorBody, GenerateRecommendationsResponse,
    InsightsResponse, LoginRequest, LoginResponse, ProfileResponse, RecommendationActionResponse,
    RecommendationsResponse, RegisterRequest, RegisterResponse, ResendOtpRequest, Task,
    TrendsResponse, UpdateProfileRequest, UpdateProfileResponse, VerifyOtpRequest,
    VerifyOtpResponse,
};
use strum_macros::EnumIter;
use thiserror::Error;

use crate::config::FrontendConfig;
use crate::session::SessionStore;

thread_local! {
    static SHARED_CLIENT: OnceCell<ApiClient> = OnceCell::new();
}

/// Failure modes of a backend call, already shaped for display.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("Unable to reach the server")]
    Network,
    /// A 2xx response carried a body that did not match the expected shape.
    #[error("The server returned an unexpected response")]
    MalformedResponse,
    /// A non-2xx response, with the server's own message when it sent one.
    #[error("{message}")]
    Http { status: u16, message: String },
}

impl ApiError {
    /// Whether this error means the stored token is no longer accepted.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Http { status: 401, .. })
    }
}

/// Reporting window accepted by the analytics endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter)]
pub enum Period {
    #[default]
    Week,
    Month,
}

impl Period {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Week => "week",
            Self::Month => "month",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Week => "This week",
            Self::Month => "This month",
        }
    }
}

/// Map a response to the expected body type.
///
/// Non-2xx statuses become [`ApiError::Http`], preferring the backend's
/// `{"error": "..."}` message over a generic one. Empty success bodies are
/// treated as `{}` so acknowledge-only endpoints decode without a payload.
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<ErrorBody>(body)
            .map(|parsed| parsed.error)
            .unwrap_or_else(|_| format!("HTTP {status}"));
        return Err(ApiError::Http { status, message });
    }
    let body = if body.trim().is_empty() { "{}" } else { body };
    serde_json::from_str(body).map_err(|_| ApiError::MalformedResponse)
}

/// Lightweight API client for TaskFlow web interactions.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    client: Client,
}

impl ApiClient {
    /// Create a new API client with the provided base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| {
            cell.get_or_init(|| Self::new(FrontendConfig::default().api_base_url()))
                .clone()
        })
    }

    pub fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Attach the stored bearer token, send, and decode.
    ///
    /// The token is read per request, so a login that happened after this
    /// client was created is picked up without rebuilding it.
    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let request = match SessionStore::token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        };
        let response = request.send().await.map_err(|err| network_error(&err))?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|err| network_error(&err))?;
        decode_response(status, &body)
    }

    /// Create an account; the server decides whether verification is needed.
    pub async fn register(&self, payload: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
        let url = self.api_url("auth/register");
        self.execute(self.client.post(url).json(payload)).await
    }

    /// Authenticate with email/password credentials.
    pub async fn login(&self, payload: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let url = self.api_url("auth/login");
        self.execute(self.client.post(url).json(payload)).await
    }

    /// Redeem a one-time email code for a token.
    pub async fn verify_otp(&self, payload: &VerifyOtpRequest) -> Result<VerifyOtpResponse, ApiError> {
        let url = self.api_url("auth/verify-otp");
        self.execute(self.client.post(url).json(payload)).await
    }

    /// Ask for a fresh one-time code to be emailed.
    pub async fn resend_otp(&self, payload: &ResendOtpRequest) -> Result<Ack, ApiError> {
        let url = self.api_url("auth/resend-otp");
        self.execute(self.client.post(url).json(payload)).await
    }

    /// Retrieve the authenticated user's profile and account stats.
    pub async fn profile(&self) -> Result<ProfileResponse, ApiError> {
        let url = self.api_url("auth/profile");
        self.execute(self.client.get(url)).await
    }

    /// Update profile fields; absent fields are left untouched.
    pub async fn update_profile(
        &self,
        payload: &UpdateProfileRequest,
    ) -> Result<UpdateProfileResponse, ApiError> {
        let url = self.api_url("auth/profile");
        self.execute(self.client.put(url).json(payload)).await
    }

    /// Change the account password.
    pub async fn change_password(&self, payload: &ChangePasswordRequest) -> Result<Ack, ApiError> {
        let url = self.api_url("auth/change-password");
        self.execute(self.client.post(url).json(payload)).await
    }

    /// Permanently delete the account.
    pub async fn delete_account(&self) -> Result<Ack, ApiError> {
        let url = self.api_url("auth/delete-account");
        self.execute(self.client.delete(url)).await
    }

    /// List the user's tasks.
    pub async fn tasks(&self) -> Result<Vec<Task>, ApiError> {
        let url = self.api_url("tasks");
        self.execute(self.client.get(url)).await
    }

    /// Aggregated task counts for the given period.
    pub async fn dashboard(&self, period: Period) -> Result<DashboardSummary, ApiError> {
        let url = self.api_url("analytics/dashboard");
        let request = self.client.get(url).query(&[("period", period.as_str())]);
        self.execute(request).await
    }

    /// Daily completion/creation/study series for the given period.
    pub async fn trends(&self, period: Period) -> Result<TrendsResponse, ApiError> {
        let url = self.api_url("analytics/trends");
        let request = self.client.get(url).query(&[("period", period.as_str())]);
        self.execute(request).await
    }

    /// Narrative insights derived from recent activity.
    pub async fn insights(&self) -> Result<InsightsResponse, ApiError> {
        let url = self.api_url("analytics/insights");
        self.execute(self.client.get(url)).await
    }

    /// List study recommendations.
    pub async fn recommendations(&self) -> Result<RecommendationsResponse, ApiError> {
        let url = self.api_url("ai-recommendations");
        self.execute(self.client.get(url)).await
    }

    /// Ask the backend to produce a new batch of recommendations.
    pub async fn generate_recommendations(
        &self,
    ) -> Result<GenerateRecommendationsResponse, ApiError> {
        let url = self.api_url("ai-recommendations/generate");
        self.execute(self.client.post(url)).await
    }

    /// Mark a recommendation as applied.
    pub async fn apply_recommendation(
        &self,
        id: &str,
    ) -> Result<RecommendationActionResponse, ApiError> {
        let url = self.api_url(&format!("ai-recommendations/{id}/apply"));
        self.execute(self.client.post(url)).await
    }

    /// Dismiss a recommendation.
    pub async fn dismiss_recommendation(
        &self,
        id: &str,
    ) -> Result<RecommendationActionResponse, ApiError> {
        let url = self.api_url(&format!("ai-recommendations/{id}/dismiss"));
        self.execute(self.client.post(url)).await
    }
}

fn network_error(err: &reqwest::Error) -> ApiError {
    web_sys::console::error_1(&format!("request failed: {err}").into());
    ApiError::Network
}
