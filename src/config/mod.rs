//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ServiceConfig (validated, immutable)
//!     → shared via Arc to handlers
//!
//! Per request:
//!     env.rs (EnvProvider) → BUILD_NUMBER lookup
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults; running without a file is the normal case
//! - Validation separates syntactic (serde) from semantic checks
//! - The environment is an injected capability, never read ambiently

pub mod env;
pub mod loader;
pub mod schema;
pub mod validation;

pub use env::{EnvProvider, ProcessEnv, StaticEnv};
pub use loader::{load_config, parse_config, resolve_config, ConfigError};
pub use schema::{
    BuildConfig, ListenerConfig, LogFormat, ObservabilityConfig, ServiceConfig, TimeoutConfig,
};
