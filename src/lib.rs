//! Hello Service Library
//!
//! A three-route HTTP service (`/`, `/health`, `/version`) used as a CI/CD
//! deployment target.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;

pub use config::schema::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use routing::RouteTable;
