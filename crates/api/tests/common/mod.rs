#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use kfranchise_api::config::ServerConfig;
use kfranchise_api::router::build_app_router;
use kfranchise_api::state::AppState;
use kfranchise_db::{ConnectionProvider, DatabaseConfig};
use tower::ServiceExt;

/// Password configured for the unreachable database; must never appear in
/// a response body.
pub const TEST_DB_PASSWORD: &str = "test-secret-pw";

/// Database settings pointing at a closed local port, with a one second
/// acquire timeout so connection failures surface quickly.
pub fn unreachable_db_config() -> DatabaseConfig {
    DatabaseConfig {
        host: "127.0.0.1".to_string(),
        port: 1,
        database: "kfranchise_test".to_string(),
        user: "kfranchise".to_string(),
        password: TEST_DB_PASSWORD.to_string(),
        charset: "utf8mb4".to_string(),
        max_connections: 2,
        acquire_timeout_secs: 1,
    }
}

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as the only CORS origin.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        database: unreachable_db_config(),
    }
}

/// Build the full application router around `db`, with the same middleware
/// stack production uses.
pub fn build_test_app(db: ConnectionProvider) -> Router {
    build_app_router(AppState { db }, &test_config())
}

/// Router whose database can never be reached.
pub fn build_unreachable_app() -> Router {
    build_test_app(ConnectionProvider::new(&unreachable_db_config()))
}

/// Send a GET request through the router.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
