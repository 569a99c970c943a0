//! Server lifecycle: load dependencies once, then serve until shutdown.

use std::sync::Arc;

use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use mylla_core::inference::load_artifact;
use mylla_core::model::ModelRole;
use mylla_core::rules::builtin::default_ruleset;
use mylla_core::rules::load_ruleset;

use crate::config::ServerConfig;
use crate::error::ApiError;
use crate::handlers::{create_router, AppState};

/// HTTP server wrapping the advisory engine.
///
/// Construction loads the ruleset and both classifier artifacts; any failure
/// there is fatal and the process must not begin serving.
pub struct MyllaServer {
    config: ServerConfig,
    state: AppState,
}

impl MyllaServer {
    pub fn new(config: ServerConfig) -> Result<Self, ApiError> {
        if let Err(e) = config.validate() {
            return Err(ApiError::internal(format!("Invalid config: {e}")));
        }

        let rules = match &config.rules_path {
            Some(path) => load_ruleset(path),
            None => default_ruleset(),
        }
        .map_err(|e| {
            error!("Failed to load ruleset: {e}");
            ApiError::internal(format!("Failed to load ruleset: {e}"))
        })?;

        let irrigation = load_artifact(&config.irrigation_model_path(), ModelRole::Irrigation)
            .map_err(|e| {
                error!("Failed to load irrigation model: {e}");
                ApiError::internal(format!("Failed to load irrigation model: {e}"))
            })?;

        let fertilizer = load_artifact(&config.fertiliser_model_path(), ModelRole::Fertilizer)
            .map_err(|e| {
                error!("Failed to load fertiliser model: {e}");
                ApiError::internal(format!("Failed to load fertiliser model: {e}"))
            })?;

        info!(ruleset = %rules.name, "loaded ruleset and both classifier artifacts");

        let state = AppState {
            irrigation: Arc::new(irrigation),
            fertilizer: Arc::new(fertilizer),
            rules: Arc::new(rules),
            recommendations: config.recommendations,
        };

        Ok(Self { config, state })
    }

    pub fn server_url(&self) -> String {
        format!("http://{}:{}", self.config.host, self.config.port)
    }

    /// Bind and serve until Ctrl+C or SIGTERM.
    pub async fn start(&self) -> Result<(), ApiError> {
        let addr = self.config.socket_addr().map_err(ApiError::internal)?;

        let app = create_router()
            .with_state(self.state.clone())
            .layer(TraceLayer::new_for_http());

        let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
            error!("Failed to bind to {addr}: {e}");
            ApiError::internal(format!("Failed to bind to {addr}: {e}"))
        })?;

        info!("Server listening on {}", self.server_url());

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| ApiError::internal(format!("Server error: {e}")))
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
        info!("Received shutdown signal");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix;
        unix::signal(unix::SignalKind::terminate())
            .expect("Failed to install TERM handler")
            .recv()
            .await;
        info!("Received TERM signal");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
