use backend::config::BackendConfig;
use backend::Application;
use service_core::error::AppError;
use service_core::observability::init_tracing;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Load configuration - fail fast if required settings are missing
    let config = BackendConfig::load().map_err(|e| {
        eprintln!("Failed to read configuration: {}", e);
        e
    })?;

    init_tracing(
        &config.service_name,
        &config.log_level,
        config.otlp_endpoint(),
    )?;

    tracing::info!(
        service = %config.service_name,
        version = env!("CARGO_PKG_VERSION"),
        port = config.port,
        "Starting backend"
    );

    let app = Application::build(config).await.map_err(|e| {
        tracing::error!(error = %e, "Startup failed");
        e
    })?;

    app.run_until_stopped().await
}
