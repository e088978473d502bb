//! Executor error type.
//!
//! `Error` is `Clone + Serialize` so it can cross any boundary the executor
//! is exposed on. Driver error chains are flattened into `reason` strings.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::validation::FieldErrors;

/// Errors returned by [`Executor::execute`](crate::Executor::execute).
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum Error {
    /// Payload failed validation. `messages` maps field names to problems.
    #[error("invalid data: {messages}")]
    Validation {
        /// Per-field messages.
        messages: FieldErrors,
    },

    /// Namespace creation without a namespace name.
    #[error("namespace is required")]
    NamespaceRequired,

    /// Namespace name already taken.
    #[error("namespace already exists: {namespace}")]
    NamespaceExists {
        /// The namespace.
        namespace: String,
    },

    /// Namespace does not exist.
    #[error("namespace does not exist: {namespace}")]
    NamespaceNotFound {
        /// The namespace.
        namespace: String,
    },

    /// Resource name already taken within its namespace.
    #[error("resource already exists: {namespace}/{name}")]
    ResourceExists {
        /// Owning namespace.
        namespace: String,
        /// Resource name.
        name: String,
    },

    /// Resource does not exist.
    #[error("resource not found: {namespace}/{name}")]
    ResourceNotFound {
        /// Owning namespace.
        namespace: String,
        /// Resource name.
        name: String,
    },

    /// The store rejected a write on a constraint.
    #[error("integrity error: {reason}")]
    Integrity {
        /// Constraint failure.
        reason: String,
    },

    /// The database failed.
    #[error("I/O error: {reason}")]
    Io {
        /// What failed.
        reason: String,
    },

    /// Anything else.
    #[error("internal error: {reason}")]
    Internal {
        /// What failed.
        reason: String,
    },
}

impl From<FieldErrors> for Error {
    fn from(messages: FieldErrors) -> Self {
        Error::Validation { messages }
    }
}

impl Error {
    /// True for the not-found variants.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::NamespaceNotFound { .. } | Error::ResourceNotFound { .. }
        )
    }

    /// True for the already-exists variants.
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Error::NamespaceExists { .. } | Error::ResourceExists { .. }
        )
    }

    /// True for errors caused by the request payload.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Error::Validation { .. } | Error::NamespaceRequired)
    }
}
