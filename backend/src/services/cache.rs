use crate::services::liveness::LivenessCheck;
use async_trait::async_trait;
use redis::Client;
use service_core::error::AppError;

#[derive(Clone)]
pub struct RedisCache {
    client: Client,
}

impl RedisCache {
    /// Parse the URL (`redis://` or TLS `rediss://`). No connection is made
    /// until the first ping.
    pub fn connect(url: &str) -> Result<Self, AppError> {
        let client = Client::open(url).map_err(|e| {
            tracing::error!("Redis URL parse error: {}", e);
            AppError::from(e)
        })?;
        Ok(Self { client })
    }
}

#[async_trait]
impl LivenessCheck for RedisCache {
    fn name(&self) -> &'static str {
        "redis"
    }

    /// One connection attempt and one `PING`; a refused or dropped
    /// connection is reported as is, never retried.
    async fn ping(&self) -> Result<(), AppError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let _: String = redis::cmd("PING").query_async(&mut conn).await?;
        Ok(())
    }
}
