//! Startup liveness checks for external dependencies.
//!
//! Each dependency is pinged exactly once before the HTTP listener is bound.
//! There is no retry: the first failure aborts startup.

use async_trait::async_trait;
use service_core::error::AppError;

/// A dependency that can confirm reachability with a single round trip.
#[async_trait]
pub trait LivenessCheck: Send + Sync {
    /// Short name used in logs and errors (`mongo`, `redis`).
    fn name(&self) -> &'static str;

    async fn ping(&self) -> Result<(), AppError>;
}

/// Ping one dependency, logging the outcome.
pub async fn verify(check: &dyn LivenessCheck) -> Result<(), AppError> {
    let dependency = check.name();
    match check.ping().await {
        Ok(()) => {
            tracing::info!(dependency, "Liveness check succeeded");
            Ok(())
        }
        Err(e) => {
            tracing::error!(dependency, error = %e, "Liveness check failed");
            Err(AppError::DependencyUnavailable {
                dependency,
                source: Box::new(e),
            })
        }
    }
}

/// Ping each dependency in order, stopping at the first failure.
pub async fn verify_all(checks: &[&dyn LivenessCheck]) -> Result<(), AppError> {
    for check in checks {
        verify(*check).await?;
    }
    Ok(())
}
