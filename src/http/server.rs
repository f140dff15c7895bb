//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with all user routes
//! - Wire up middleware (request ID, tracing, timeout, body limit)
//! - Serve on a bound listener until shutdown is signalled

use axum::{
    body::Body,
    extract::DefaultBodyLimit,
    http::Request,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServiceConfig;
use crate::http::handlers;
use crate::store::UserStore;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<UserStore>,
}

impl AppState {
    pub fn new(store: Arc<UserStore>) -> Self {
        Self { store }
    }
}

/// Build the Axum router with all middleware layers.
#[allow(deprecated)]
pub fn build_router(config: &ServiceConfig, state: AppState) -> Router {
    Router::new()
        .route("/users", post(handlers::create_user).get(handlers::get_user_by_query))
        .route(
            "/users/{id}",
            get(handlers::get_user)
                .put(handlers::update_user)
                .delete(handlers::delete_user),
        )
        .route("/status", get(handlers::get_status))
        .with_state(state)
        .layer(DefaultBodyLimit::max(config.limits.max_body_size))
        .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
            let request_id = request
                .headers()
                .get("x-request-id")
                .and_then(|v| v.to_str().ok())
                .unwrap_or("unknown");
            tracing::info_span!(
                "request",
                method = %request.method(),
                uri = %request.uri(),
                request_id = %request_id,
            )
        }))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

/// HTTP server for the user service.
pub struct HttpServer {
    router: Router,
    store: Arc<UserStore>,
    config: ServiceConfig,
}

impl HttpServer {
    /// Create a server with a fresh, empty store.
    pub fn new(config: ServiceConfig) -> Self {
        Self::with_store(config, Arc::new(UserStore::new()))
    }

    /// Create a server around an existing store.
    pub fn with_store(config: ServiceConfig, store: Arc<UserStore>) -> Self {
        let router = build_router(&config, AppState::new(store.clone()));
        Self {
            router,
            store,
            config,
        }
    }

    /// Run the server until `shutdown` fires, then drain in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!(users = self.store.len(), "HTTP server stopped");
        Ok(())
    }

    pub fn store(&self) -> &Arc<UserStore> {
        &self.store
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}
