//! Typed registry API.
//!
//! [`Registry`] wraps an [`Executor`] with one method per command, unwrapping
//! the [`Output`](crate::Output) into the concrete type each operation
//! returns.

mod namespaces;
mod resources;

use std::path::Path;
use std::sync::Arc;

use bridge_storage::{Database, DatabaseLocation};

use crate::convert::convert_result;
use crate::{Error, Executor, Output, Result};

/// Entry point for registry operations.
pub struct Registry {
    executor: Executor,
}

impl Registry {
    /// Open a registry stored in the SQLite file at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let db = convert_result(Database::open(path))?;
        Ok(Self::from_database(Arc::new(db)))
    }

    /// Open a registry at `location`.
    pub fn open_location(location: DatabaseLocation) -> Result<Self> {
        let db = convert_result(Database::open_location(location))?;
        Ok(Self::from_database(Arc::new(db)))
    }

    /// Open a private in-memory registry.
    pub fn ephemeral() -> Result<Self> {
        Self::open_location(DatabaseLocation::Memory)
    }

    /// Wrap an already opened database.
    pub fn from_database(db: Arc<Database>) -> Self {
        Self {
            executor: Executor::new(db),
        }
    }

    /// The executor, for callers that work with raw commands.
    pub fn executor(&self) -> &Executor {
        &self.executor
    }
}

/// Error for an output variant the command never produces.
fn unexpected(op: &str, output: Output) -> Error {
    Error::Internal {
        reason: format!("Unexpected output {} for {}", output.kind(), op),
    }
}
