pub mod health;

use axum::extract::OriginalUri;
use axum::http::Method;
use service_core::error::AppError;

pub use health::{api_test, health_check};

/// Unmatched routes echo the path as the client sent it, before case and
/// trailing-slash normalisation.
pub async fn not_found(method: Method, OriginalUri(uri): OriginalUri) -> AppError {
    AppError::RouteNotFound {
        method,
        path: uri.path().to_string(),
    }
}
