mod analytics;
pub mod auth_validation;
mod dashboard;
mod error;
pub mod login;
mod profile;
mod recommendations;
mod register;
mod verify_otp;

pub use analytics::AnalyticsPage;
pub use dashboard::DashboardPage;
pub use error::ErrorPage;
pub use login::LoginPage;
pub use profile::ProfilePage;
pub use recommendations::RecommendationsPage;
pub use register::RegisterPage;
pub use verify_otp::VerifyOtpPage;
