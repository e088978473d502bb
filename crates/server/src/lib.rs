//! HTTP JSON API for the Bridge resource registry.
//!
//! The server is an axum [`Router`](axum::Router) over an [`AppContext`]
//! that is built once at startup. Route handlers parse the request, run one
//! registry operation on the blocking pool and serialize the result; every
//! failure is mapped to a status code in exactly one place ([`ApiError`]).
//!
//! # Example
//!
//! ```ignore
//! use bridge_server::{api_router, AppContext, ServerConfig};
//! use bridge_executor::Registry;
//!
//! let ctx = AppContext::new(Registry::ephemeral()?, ServerConfig::default());
//! let app = api_router(ctx);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod context;
pub mod error;
pub mod router;
mod routes;
pub mod security;
pub mod server;

pub use config::{ConfigError, ServerConfig};
pub use context::AppContext;
pub use error::{ApiError, ServerError};
pub use router::api_router;
pub use server::serve;
