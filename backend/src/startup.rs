//! Application startup: dependency bootstrap, router and listener.
//!
//! Nothing is bound until both MongoDB and Redis have answered a ping.

use crate::config::BackendConfig;
use crate::handlers::{api_test, health_check, not_found};
use crate::services::{connect_dependencies, MongoDb, RedisCache};
use axum::{
    extract::Request,
    http::{HeaderValue, Method},
    middleware::from_fn,
    routing::get,
    Router, ServiceExt,
};
use service_core::error::AppError;
use service_core::middleware::{
    lenient_routing, request_id_middleware, LenientRouting, REQUEST_ID_HEADER,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

/// Methods granted to the allowed origin, independent of the routes served.
pub const CORS_METHODS: [Method; 6] = [
    Method::GET,
    Method::POST,
    Method::HEAD,
    Method::PUT,
    Method::DELETE,
    Method::PATCH,
];

/// CORS policy for the configured frontend origin.
///
/// Without an origin no `Access-Control-Allow-Origin` header is ever sent.
/// `*` allows any origin; a comma-separated value allows each listed origin.
pub fn cors_layer(origin: Option<&str>) -> Result<CorsLayer, AppError> {
    let layer = CorsLayer::new().allow_methods(CORS_METHODS);

    let Some(origin) = origin else {
        tracing::warn!("FRONTEND_URL is not set; cross-origin requests will be refused");
        return Ok(layer);
    };

    let entries: Vec<&str> = origin
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .collect();

    if entries.contains(&"*") {
        return Ok(layer.allow_origin(AllowOrigin::any()));
    }

    let origins = entries
        .into_iter()
        .map(|o| {
            HeaderValue::from_str(o).map_err(|e| {
                AppError::ConfigError(anyhow::anyhow!("Invalid CORS origin '{}': {}", o, e))
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(layer.allow_origin(AllowOrigin::list(origins)))
}

/// The routed application as served: routing ignores path case and
/// trailing slashes.
pub type HttpService = LenientRouting<Router>;

pub fn build_router(config: &BackendConfig) -> Result<HttpService, AppError> {
    let cors = cors_layer(config.allowed_origin())?;

    let router = Router::new()
        .route("/health", get(health_check))
        .route("/api/test", get(api_test))
        .fallback(not_found)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        .layer(from_fn(request_id_middleware));

    Ok(lenient_routing(router))
}

/// Owns the dependency handles and the bound listener for the life of the
/// process.
pub struct Application {
    port: u16,
    listener: TcpListener,
    service: HttpService,
    db: MongoDb,
    cache: RedisCache,
}

impl Application {
    /// Build the router, connect and ping MongoDB then Redis, and only then
    /// bind the listener. Port 0 picks a random port.
    pub async fn build(config: BackendConfig) -> Result<Self, AppError> {
        let service = build_router(&config)?;

        let (db, cache) = connect_dependencies(&config.mongo_uri, &config.redis_url).await?;

        let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind HTTP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!(port, "Backend running");

        Ok(Self {
            port,
            listener,
            service,
            db,
            cache,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Serve until the process is terminated.
    pub async fn run_until_stopped(self) -> Result<(), AppError> {
        let Self {
            listener,
            service,
            db,
            cache,
            ..
        } = self;

        // Handles stay open while serving.
        let _dependencies = (db, cache);

        axum::serve(listener, ServiceExt::<Request>::into_make_service(service))
            .await
            .map_err(|e| {
                tracing::error!("HTTP server error: {}", e);
                AppError::from(e)
            })
    }
}
