use crate::api::ApiError;

/// Lifecycle of a view's data load.
///
/// Views fetch everything they need in one go, so there is no partial state:
/// either all requests landed and the page is `Ready`, or the first failure
/// marks the whole load `Failed`.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Ready(T),
    Failed(ApiError),
}
