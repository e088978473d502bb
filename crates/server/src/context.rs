//! Shared request state.

use std::sync::Arc;

use bridge_executor::{Error, Registry};

use crate::config::ServerConfig;

/// State handed to every route handler.
///
/// Built once in `main`; cloning is two `Arc` bumps.
#[derive(Clone)]
pub struct AppContext {
    registry: Arc<Registry>,
    config: Arc<ServerConfig>,
}

impl AppContext {
    /// Bundle a registry with the configuration it was opened from.
    pub fn new(registry: Registry, config: ServerConfig) -> Self {
        Self {
            registry: Arc::new(registry),
            config: Arc::new(config),
        }
    }

    /// The registry.
    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }

    /// The configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Run a registry operation on the blocking pool.
    ///
    /// SQLite calls block, so they never run on an async worker thread.
    pub async fn run<T, F>(&self, f: F) -> Result<T, Error>
    where
        F: FnOnce(&Registry) -> Result<T, Error> + Send + 'static,
        T: Send + 'static,
    {
        let registry = Arc::clone(&self.registry);
        tokio::task::spawn_blocking(move || f(&registry))
            .await
            .map_err(|e| Error::Internal {
                reason: format!("registry task failed: {}", e),
            })?
    }
}
