use crate::services::liveness::LivenessCheck;
use async_trait::async_trait;
use mongodb::{bson::doc, Client as MongoClient};
use service_core::error::AppError;

#[derive(Clone)]
pub struct MongoDb {
    client: MongoClient,
}

impl MongoDb {
    /// Parse the URI and build the driver client. The driver connects
    /// lazily, so an unreachable server only surfaces on the first ping.
    pub async fn connect(uri: &str) -> Result<Self, AppError> {
        tracing::info!("Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to connect to MongoDB: {}", e);
            AppError::from(e)
        })?;
        Ok(Self { client })
    }
}

#[async_trait]
impl LivenessCheck for MongoDb {
    fn name(&self) -> &'static str {
        "mongo"
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await?;
        Ok(())
    }
}
