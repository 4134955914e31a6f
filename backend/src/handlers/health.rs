use axum::{response::IntoResponse, Json};
use serde::Serialize;

// Field order is the wire order.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub message: &'static str,
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ApiTestResponse {
    pub message: &'static str,
    pub mongo: &'static str,
    pub redis: &'static str,
}

const CONNECTED: &str = "Connected";

/// Liveness check. Never touches the database or the cache.
pub async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        message: "Backend is running!",
        status: "OK",
    })
}

/// Static payload. Dependencies were verified once at startup; the
/// "Connected" values are not re-checked per request.
pub async fn api_test() -> impl IntoResponse {
    Json(ApiTestResponse {
        message: "Hello from Go backend!",
        mongo: CONNECTED,
        redis: CONNECTED,
    })
}
