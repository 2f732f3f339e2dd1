pub mod app_state;
pub mod fetch;

pub use app_state::AppState;
pub use fetch::FetchState;
