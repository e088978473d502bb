//! Command execution layer for the Bridge resource registry.
//!
//! Every registry operation is a [`Command`]. The [`Executor`] validates the
//! command's typed request, dispatches to a handler that performs exactly one
//! store operation, and returns an [`Output`] or an [`Error`].
//!
//! [`Registry`] wraps the executor with one typed method per operation and is
//! what the HTTP layer calls.
//!
//! # Example
//!
//! ```ignore
//! use bridge_executor::{CreateResourceRequest, Registry};
//!
//! let registry = Registry::ephemeral()?;
//! registry.create_namespace("prod")?;
//! let db1 = registry.create_resource(
//!     "prod",
//!     CreateResourceRequest::new("db1", "arn:db1", "database"),
//! )?;
//! assert_eq!(registry.get_resource("prod", "db1")?, db1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod api;
mod bridge;
mod command;
mod convert;
mod error;
mod executor;
mod handlers;
mod output;
pub mod validation;

pub use api::Registry;
pub use command::Command;
pub use convert::convert_result;
pub use error::Error;
pub use executor::Executor;
pub use output::Output;
pub use validation::{
    CreateNamespaceRequest, CreateResourceRequest, FieldErrors, UpdateResourceRequest,
};

pub use bridge_core::{Page, PageRequest, Resource, ResourceFilter};

/// Result type for executor operations.
pub type Result<T> = std::result::Result<T, Error>;
