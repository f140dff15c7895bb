//! Startup orchestration.
//!
//! # Responsibilities
//! - Build the store and HTTP server from a validated config
//! - Bind the listener (fatal on failure)
//! - Serve until shutdown
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Listener binds last (traffic only when ready)

use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::broadcast;

use crate::config::ServiceConfig;
use crate::http::HttpServer;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Bind the configured address and serve until `shutdown` fires.
pub async fn run(
    config: ServiceConfig,
    shutdown: broadcast::Receiver<()>,
) -> Result<(), StartupError> {
    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        max_body_size = config.limits.max_body_size,
        "Configuration loaded"
    );

    let address = config.listener.bind_address.clone();
    let server = HttpServer::new(config);

    let listener = TcpListener::bind(&address)
        .await
        .map_err(|source| StartupError::Bind { address, source })?;

    server.run(listener, shutdown).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bind_failure_is_reported() {
        let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let mut config = ServiceConfig::default();
        config.listener.bind_address = taken.local_addr().unwrap().to_string();

        let (_tx, rx) = broadcast::channel(1);
        let err = run(config, rx).await.unwrap_err();
        assert!(matches!(err, StartupError::Bind { .. }));
    }
}
