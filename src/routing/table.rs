//! Route lookup and dispatch.
//!
//! # Responsibilities
//! - Store the (method, path) → endpoint mapping
//! - Look up the endpoint for a request
//! - Return matched endpoint or explicit no-match
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - Exact path matching only; there are no parameters or prefixes
//! - Explicit `None` rather than silent default
//! - Request dispatch is done by axum from the mounted entries; `resolve`
//!   answers the same question for callers outside the request path

use axum::http::Method;
use thiserror::Error;

/// The responses this service knows how to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Fixed greeting at `/`.
    Greeting,
    /// Liveness message at `/health`.
    Health,
    /// Version label plus build number at `/version`.
    Version,
}

impl Endpoint {
    /// Stable name used in logs and metric labels.
    pub fn name(&self) -> &'static str {
        match self {
            Endpoint::Greeting => "greeting",
            Endpoint::Health => "health",
            Endpoint::Version => "version",
        }
    }
}

/// One routing table entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub method: Method,
    pub path: String,
    pub endpoint: Endpoint,
}

impl Route {
    pub fn new(method: Method, path: impl Into<String>, endpoint: Endpoint) -> Self {
        Self {
            method,
            path: path.into(),
            endpoint,
        }
    }

    /// Shorthand for a GET route.
    pub fn get(path: impl Into<String>, endpoint: Endpoint) -> Self {
        Self::new(Method::GET, path, endpoint)
    }
}

/// Errors raised while building a [`RouteTable`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("route path `{0}` must start with '/'")]
    InvalidPath(String),

    #[error("duplicate route {method} {path}")]
    Duplicate { method: Method, path: String },
}

/// Immutable mapping from (method, path) to [`Endpoint`].
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Build a table, rejecting malformed paths and duplicate entries.
    pub fn new(routes: Vec<Route>) -> Result<Self, RouteError> {
        for (i, route) in routes.iter().enumerate() {
            if !route.path.starts_with('/') {
                return Err(RouteError::InvalidPath(route.path.clone()));
            }
            let duplicate = routes[..i]
                .iter()
                .any(|r| r.method == route.method && r.path == route.path);
            if duplicate {
                return Err(RouteError::Duplicate {
                    method: route.method.clone(),
                    path: route.path.clone(),
                });
            }
        }
        Ok(Self { routes })
    }

    /// The three GET routes this service exposes.
    pub fn standard() -> Self {
        Self {
            routes: vec![
                Route::get("/", Endpoint::Greeting),
                Route::get("/health", Endpoint::Health),
                Route::get("/version", Endpoint::Version),
            ],
        }
    }

    /// Find the endpoint registered for `method` and `path`.
    pub fn resolve(&self, method: &Method, path: &str) -> Option<Endpoint> {
        self.routes
            .iter()
            .find(|r| r.method == *method && r.path == path)
            .map(|r| r.endpoint)
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
