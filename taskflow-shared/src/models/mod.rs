pub mod analytics;
pub mod auth;
pub mod errors;
pub mod recommendation;
pub mod session;
pub mod task;
pub mod user;

pub use analytics::{DashboardSummary, Insight, InsightKind, InsightsResponse, TrendPoint, TrendsResponse};
pub use auth::{
    Ack, ChangePasswordRequest, LoginRequest, LoginResponse, PendingRegistration, ProfileResponse,
    RegisterRequest, RegisterResponse, ResendOtpRequest, UpdateProfileRequest,
    UpdateProfileResponse, VerificationRequired, VerifyOtpRequest, VerifyOtpResponse,
};
pub use errors::ErrorBody;
pub use recommendation::{
    GenerateRecommendationsResponse, Recommendation, RecommendationActionResponse,
    RecommendationCategory, RecommendationStatus, RecommendationsResponse,
};
pub use session::Session;
pub use task::{Priority, Task, TaskStatus};
pub use user::{UserProfile, UserStats};
