//! Environment lookup capability.
//!
//! Handlers never touch `std::env` directly; they receive an [`EnvProvider`]
//! through application state so tests can pin the environment.

use std::collections::HashMap;

/// Key/value lookup into a process-like environment.
pub trait EnvProvider: Send + Sync + std::fmt::Debug {
    /// Returns the value for `key`, or `None` if it is not set.
    fn var(&self, key: &str) -> Option<String>;
}

/// Reads the real process environment at call time.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvProvider for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        // Non-UTF-8 values are reported as absent.
        std::env::var(key).ok()
    }
}

/// A fixed environment.
#[derive(Debug, Clone, Default)]
pub struct StaticEnv {
    vars: HashMap<String, String>,
}

impl StaticEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a variable.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }
}

impl<K, V> FromIterator<(K, V)> for StaticEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl EnvProvider for StaticEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}
