pub(crate) mod charts;
pub(crate) mod fetch_error;
pub(crate) mod header_nav_item;
pub(crate) mod loading;
pub(crate) mod recommendation_card;
pub(crate) mod stat_card;
pub(crate) mod toast;
pub(crate) mod user_dropdown;

// Re-export components for convenience
pub use charts::{BarChart, ChartSet, DonutChart, LineChart};
pub use fetch_error::FetchError;
pub use loading::Loading;
pub use recommendation_card::RecommendationCard;
pub use stat_card::StatCard;
pub use toast::{ToastHost, ToastLevel, Toasts, push_toast};
