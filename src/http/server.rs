//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Mount every `RouteTable` entry on an axum Router
//! - Wire up middleware (tracing, timeout, request ID)
//! - Serve on a listener until shutdown is signalled

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    body::Body,
    extract::State,
    http::{Method, Request},
    routing::{on, MethodFilter},
    Router,
};
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::{EnvProvider, ProcessEnv, ServiceConfig};
use crate::http::handlers::{self, BuildInfo};
use crate::http::request::{RequestIdExt, RequestIdLayer};
use crate::observability::metrics;
use crate::routing::{Endpoint, RouteTable};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub build: Arc<BuildInfo>,
    pub env: Arc<dyn EnvProvider>,
}

impl AppState {
    pub fn new(build: BuildInfo, env: Arc<dyn EnvProvider>) -> Self {
        Self {
            build: Arc::new(build),
            env,
        }
    }
}

/// Errors from building or running the server.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("route method {0} is not supported by the HTTP router")]
    UnsupportedMethod(Method),

    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// HTTP server for the endpoint service.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
}

impl HttpServer {
    /// Standard routes, reading the real process environment.
    pub fn new(config: ServiceConfig) -> Result<Self, ServerError> {
        Self::with_parts(config, &RouteTable::standard(), Arc::new(ProcessEnv))
    }

    /// Build a server from an explicit routing table and environment.
    pub fn with_parts(
        config: ServiceConfig,
        table: &RouteTable,
        env: Arc<dyn EnvProvider>,
    ) -> Result<Self, ServerError> {
        let state = AppState::new(BuildInfo::from(&config.build), env);
        let router = Self::build_router(&config, table, state)?;
        Ok(Self { router, config })
    }

    /// Build the axum router with all middleware layers.
    #[allow(deprecated)]
    pub fn build_router(
        config: &ServiceConfig,
        table: &RouteTable,
        state: AppState,
    ) -> Result<Router, ServerError> {
        let mut router = Router::new();
        for route in table.routes() {
            let filter = MethodFilter::try_from(route.method.clone())
                .map_err(|_| ServerError::UnsupportedMethod(route.method.clone()))?;
            let endpoint = route.endpoint;
            router = router.route(
                &route.path,
                on(
                    filter,
                    move |State(state): State<AppState>, request: Request<Body>| {
                        dispatch(endpoint, state, request)
                    },
                ),
            );
        }

        tracing::debug!(routes = table.len(), "Routes mounted");

        Ok(router
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(RequestIdLayer)
            .layer(TraceLayer::new_for_http()))
    }

    /// A clone of the fully layered router, for in-process use.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener until
    /// `shutdown` fires (or its sender is dropped).
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), ServerError> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            request_timeout_secs = self.config.timeouts.request_secs,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received, draining connections");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}

async fn dispatch(endpoint: Endpoint, state: AppState, request: Request<Body>) -> String {
    let start = Instant::now();
    tracing::debug!(
        request_id = request.request_id().unwrap_or("unknown"),
        endpoint = endpoint.name(),
        path = %request.uri().path(),
        "Serving endpoint"
    );

    let body = handlers::render(endpoint, &state.build, state.env.as_ref());
    metrics::record_request(endpoint.name(), start);
    body
}
