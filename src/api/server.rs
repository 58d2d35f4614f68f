//! HTTP Server
//!
//! Binds the listen address and serves the router until shutdown.

use std::future::Future;

use axum::Router;
use tokio::net::TcpListener;

use crate::config::Config;
use crate::error::{ChirpyError, Result};

use super::{build_router, AppState};

/// HTTP server for Chirpy
pub struct Server {
    config: Config,
    state: AppState,
}

impl Server {
    /// Create a new server with the given config and state
    pub fn new(config: Config, state: AppState) -> Self {
        Self { config, state }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Build the router (useful for testing)
    pub fn router(&self) -> Router {
        build_router(self.state.clone(), &self.config)
    }

    /// Serve until Ctrl+C
    pub async fn run(self) -> Result<()> {
        self.run_until(ctrl_c()).await
    }

    /// Serve until `shutdown` resolves, then drain in-flight requests
    pub async fn run_until<F>(self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let app = self.router();
        let listener = TcpListener::bind(&self.config.listen_addr)
            .await
            .map_err(|e| {
                ChirpyError::Network(format!("Failed to bind {}: {}", self.config.listen_addr, e))
            })?;

        tracing::info!("Chirpy listening on {}", listener.local_addr()?);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| ChirpyError::Network(e.to_string()))?;

        tracing::info!("Server stopped");
        Ok(())
    }
}

async fn ctrl_c() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Received Ctrl+C, initiating shutdown..."),
        Err(e) => {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
