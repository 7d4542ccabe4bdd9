//! Application startup and lifecycle management.
//!
//! The router is built explicitly from an [`AppState`] and owned by the
//! [`Application`] that serves it; nothing here is process-global apart from
//! the metrics recorder.

use crate::config::{LimitsConfig, OperationsConfig};
use crate::handlers::{health, heximal, incorrect_method, matrix};
use crate::services::{get_metrics, init_metrics};
use axum::{
    extract::DefaultBodyLimit,
    http::StatusCode,
    middleware::from_fn,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{metrics_middleware, request_id_middleware, REQUEST_ID_HEADER};
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone, Debug)]
pub struct AppState {
    pub limits: LimitsConfig,
}

impl AppState {
    pub fn new(limits: LimitsConfig) -> Self {
        Self { limits }
    }
}

/// Prometheus metrics endpoint.
async fn metrics_endpoint() -> Result<impl IntoResponse, AppError> {
    let body = get_metrics().ok_or_else(|| {
        AppError::InternalError(anyhow::anyhow!("metrics recorder not initialized"))
    })?;

    Ok((
        StatusCode::OK,
        [("content-type", "text/plain; charset=utf-8")],
        body,
    ))
}

pub fn build_router(state: AppState) -> Router {
    let max_body_bytes = state.limits.max_body_bytes;

    Router::new()
        .route(
            "/check_health/",
            get(health::check_health).fallback(incorrect_method),
        )
        .route(
            "/check_health",
            get(health::check_health).fallback(incorrect_method),
        )
        .route(
            "/matrix_operations",
            post(matrix::matrix_operations).fallback(incorrect_method),
        )
        .route(
            "/heximal_operations",
            post(heximal::heximal_operations).fallback(incorrect_method),
        )
        .route("/metrics", get(metrics_endpoint))
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(from_fn(metrics_middleware))
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
        .layer(from_fn(request_id_middleware))
        .with_state(state)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Bind the listener and assemble the router. Port 0 picks a free port.
    pub async fn build(config: OperationsConfig) -> Result<Self, AppError> {
        init_metrics();

        let addr = config.common.socket_addr();
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind HTTP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!(
            service = %config.service_name,
            port,
            max_body_bytes = config.limits.max_body_bytes,
            max_result_cells = config.limits.max_result_cells,
            "Operations service bound"
        );

        Ok(Self {
            port,
            listener,
            router: build_router(AppState::new(config.limits)),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Serve until SIGINT/SIGTERM, letting in-flight requests finish.
    pub async fn run_until_stopped(self) -> Result<(), AppError> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Service shutdown complete");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received SIGINT, starting graceful shutdown");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}
