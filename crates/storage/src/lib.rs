//! Storage layer for the Bridge registry.
//!
//! A single SQLite connection guarded by a mutex, plus two stateless facades:
//! - [`NamespaceStore`]: create and list namespaces
//! - [`ResourceStore`]: resource CRUD, pagination and substring search
//!
//! Every mutation runs in its own transaction. On error the transaction is
//! rolled back, so no partial write is ever visible.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod database;
pub mod namespace;
pub mod resource;
mod schema;

pub use database::{Database, DatabaseLocation};
pub use namespace::NamespaceStore;
pub use resource::ResourceStore;
