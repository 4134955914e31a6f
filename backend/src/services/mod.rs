pub mod cache;
pub mod database;
pub mod liveness;

pub use cache::RedisCache;
pub use database::MongoDb;
pub use liveness::{verify, verify_all, LivenessCheck};

use service_core::error::AppError;

/// Parse both connection strings, then ping the database and the cache in
/// that order.
///
/// Returns only when both have answered a ping; nothing is retried.
pub async fn connect_dependencies(
    mongo_uri: &str,
    redis_url: &str,
) -> Result<(MongoDb, RedisCache), AppError> {
    let db = MongoDb::connect(mongo_uri).await?;
    let cache = RedisCache::connect(redis_url)?;

    let checks: [&dyn LivenessCheck; 2] = [&db, &cache];
    verify_all(&checks).await?;
    tracing::info!("Connected to MongoDB and Redis");

    Ok((db, cache))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    const UNREACHABLE_MONGO: &str = "mongodb://127.0.0.1:1/?serverSelectionTimeoutMS=300";

    #[tokio::test]
    async fn unparseable_mongo_uri_is_a_database_error() {
        let err = connect_dependencies("not-a-mongo-uri", "redis://127.0.0.1:6379")
            .await
            .err()
            .unwrap();
        assert!(matches!(err, AppError::DatabaseError(_)));
    }

    #[tokio::test]
    async fn unparseable_redis_url_fails_before_any_ping() {
        // An attempted Mongo ping would take the full server selection timeout.
        let result = tokio::time::timeout(
            Duration::from_millis(200),
            connect_dependencies("mongodb://127.0.0.1:1", "not a redis url"),
        )
        .await
        .expect("should fail on parsing");

        assert!(matches!(result.err().unwrap(), AppError::RedisError(_)));
    }

    #[tokio::test]
    async fn unreachable_mongo_is_reported_before_redis() {
        let err = connect_dependencies(UNREACHABLE_MONGO, "redis://127.0.0.1:1")
            .await
            .err()
            .unwrap();

        match err {
            AppError::DependencyUnavailable { dependency, .. } => assert_eq!(dependency, "mongo"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
