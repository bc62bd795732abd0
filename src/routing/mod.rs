//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route Compilation (at startup):
//!     Route[] (method, path, endpoint)
//!     → table.rs (validate: absolute paths, no duplicates)
//!     → Freeze as immutable RouteTable
//!     → http/server.rs mounts each entry on the axum Router
//!
//! Incoming Request (method, path)
//!     → axum dispatch
//!     → Endpoint → http/handlers.rs renders the body
//! ```
//!
//! # Design Decisions
//! - Routes declared as data, not via framework macros or attributes
//! - Deterministic: same input always matches same endpoint
//! - Unknown paths fall through to the framework's 404

pub mod table;

pub use table::{Endpoint, Route, RouteError, RouteTable};
