//! Response bodies for each endpoint.
//!
//! Everything here is a pure function of its arguments. The only outside
//! input is the build number, fetched through the injected [`EnvProvider`].

use crate::config::{BuildConfig, EnvProvider};
use crate::routing::Endpoint;

pub const GREETING: &str = "Hello World! CI/CD Pipeline is working successfully!";
pub const HEALTHY: &str = "Application is healthy and running!";

/// Version details resolved from configuration at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
    pub version: String,
    pub build_number_env: String,
    pub missing_placeholder: String,
}

impl From<&BuildConfig> for BuildInfo {
    fn from(config: &BuildConfig) -> Self {
        Self {
            version: config.version.clone(),
            build_number_env: config.build_number_env.clone(),
            missing_placeholder: config.missing_placeholder.clone(),
        }
    }
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self::from(&BuildConfig::default())
    }
}

pub fn greeting() -> &'static str {
    GREETING
}

pub fn health() -> &'static str {
    HEALTHY
}

/// `Version: <label> - Build: <build number or placeholder>`.
pub fn version(build: &BuildInfo, env: &dyn EnvProvider) -> String {
    let number = env
        .var(&build.build_number_env)
        .unwrap_or_else(|| build.missing_placeholder.clone());
    format!("Version: {} - Build: {}", build.version, number)
}

/// Render the body for `endpoint`.
pub fn render(endpoint: Endpoint, build: &BuildInfo, env: &dyn EnvProvider) -> String {
    match endpoint {
        Endpoint::Greeting => greeting().to_string(),
        Endpoint::Health => health().to_string(),
        Endpoint::Version => version(build, env),
    }
}
