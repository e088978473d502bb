//! Bridge: a namespaced resource registry.
//!
//! Resources (name, ARN, optional value, type) live inside namespaces and
//! are managed through [`Registry`] in-process or over the HTTP JSON API
//! served by [`server::serve`].
//!
//! ```ignore
//! use bridge_registry::{CreateResourceRequest, Registry};
//!
//! let registry = Registry::ephemeral()?;
//! registry.create_namespace("prod")?;
//! registry.create_resource("prod", CreateResourceRequest::new("db1", "arn:1", "database"))?;
//! ```

mod types;

pub use types::*;

pub use bridge_executor::{Command, Executor, Output, Registry, Result};

/// HTTP server: configuration, router and startup.
pub mod server {
    pub use bridge_server::{
        api_router, serve, ApiError, AppContext, ConfigError, ServerConfig, ServerError,
    };
}
