//! Shared helpers for backend integration tests.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, Response},
};
use backend::config::BackendConfig;
use http_body_util::BodyExt;

pub const TEST_ORIGIN: &str = "http://localhost:3000";

/// Config pointing at local services; nothing connects until `Application::build`.
pub fn test_config() -> BackendConfig {
    BackendConfig {
        mongo_uri: "mongodb://127.0.0.1:27017".to_string(),
        redis_url: "redis://127.0.0.1:6379".to_string(),
        port: 0,
        frontend_url: Some(TEST_ORIGIN.to_string()),
        service_name: "backend-test".to_string(),
        log_level: "debug".to_string(),
        otlp_endpoint: None,
    }
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Reserve a free port and release it immediately.
pub fn free_port() -> u16 {
    let listener = std::net::TcpListener::bind("0.0.0.0:0").unwrap();
    listener.local_addr().unwrap().port()
}

pub fn port_is_free(port: u16) -> bool {
    std::net::TcpListener::bind(("0.0.0.0", port)).is_ok()
}
