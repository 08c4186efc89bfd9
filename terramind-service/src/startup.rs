//! Application startup and lifecycle management.

use crate::config::Settings;
use crate::handlers::{analysis, health, metrics};
use crate::services::providers::terramind::{TerraMindConfig, TerraMindProvider};
use crate::services::providers::InferenceProvider;
use crate::services::Analyzer;
use axum::middleware::from_fn;
use axum::{
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{metrics::metrics_middleware, tracing::request_id_middleware};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
    pub analyzer: Arc<Analyzer>,
}

/// Build the service router with every layer applied.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        .route("/analyze", post(analysis::analyze))
        .route("/capabilities", get(analysis::capabilities))
        .route("/metrics", get(metrics::metrics))
        // The browser frontends call this service directly.
        .layer(CorsLayer::permissive())
        .layer(from_fn(metrics_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .layer(from_fn(request_id_middleware))
        .with_state(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the given configuration.
    pub async fn build(settings: Settings) -> Result<Self, AppError> {
        let provider: Option<Arc<dyn InferenceProvider>> = if settings.demo_mode {
            tracing::info!("Running in demo mode - generating synthetic reports");
            None
        } else {
            let endpoint = settings.model.endpoint.clone().ok_or_else(|| {
                AppError::ConfigError(anyhow::anyhow!(
                    "TERRAMIND_ENDPOINT is required when demo mode is off"
                ))
            })?;

            tracing::info!(
                model = %settings.model.name,
                endpoint = %endpoint,
                "Initialized TerraMind inference provider"
            );

            Some(Arc::new(TerraMindProvider::new(TerraMindConfig {
                model: settings.model.name.clone(),
                endpoint,
                timeout_secs: settings.model.timeout_secs,
            })))
        };

        let analyzer = Arc::new(Analyzer::new(settings.model.name.clone(), provider));
        let state = AppState {
            settings: settings.clone(),
            analyzer,
        };

        // Bind listener (port 0 = random port for testing)
        let addr = SocketAddr::from(([0, 0, 0, 0], settings.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        Ok(Self {
            port,
            listener,
            state,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until a shutdown signal arrives.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let router = build_router(self.state);

        axum::serve(self.listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}
