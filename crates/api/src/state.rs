use kfranchise_db::ConnectionProvider;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable and read-only; requests share nothing mutable.
#[derive(Clone)]
pub struct AppState {
    /// Hands out one pooled connection per request.
    pub db: ConnectionProvider,
}
