//! Error types for the store layer.
//!
//! Every store operation returns [`BridgeResult`]. The executor converts
//! these into its own serializable error type; nothing below the executor
//! knows about HTTP status codes.

use std::fmt;
use thiserror::Error;

/// Result alias used by the store layer.
pub type BridgeResult<T> = Result<T, BridgeError>;

/// Reference to a stored entity, used in not-found and conflict errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntityRef {
    /// A namespace, by name.
    Namespace {
        /// Namespace name.
        name: String,
    },
    /// A resource, by namespace and name.
    Resource {
        /// Owning namespace.
        namespace: String,
        /// Resource name.
        name: String,
    },
}

impl EntityRef {
    /// Reference a namespace.
    pub fn namespace(name: impl Into<String>) -> Self {
        EntityRef::Namespace { name: name.into() }
    }

    /// Reference a resource inside a namespace.
    pub fn resource(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        EntityRef::Resource {
            namespace: namespace.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityRef::Namespace { name } => write!(f, "namespace://{}", name),
            EntityRef::Resource { namespace, name } => {
                write!(f, "resource://{}/{}", namespace, name)
            }
        }
    }
}

/// Errors raised by the store layer.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// The referenced entity does not exist.
    #[error("not found: {entity_ref}")]
    NotFound {
        /// What was looked up.
        entity_ref: EntityRef,
    },

    /// An entity with the same unique key already exists.
    #[error("already exists: {entity_ref}")]
    AlreadyExists {
        /// What collided.
        entity_ref: EntityRef,
    },

    /// A relational constraint other than uniqueness was violated.
    #[error("integrity error: {message}")]
    Integrity {
        /// Constraint failure reported by the store.
        message: String,
    },

    /// Input rejected before reaching the store.
    #[error("invalid input: {message}")]
    InvalidInput {
        /// Why the input was rejected.
        message: String,
    },

    /// The underlying database failed.
    #[error("storage error: {message}")]
    Storage {
        /// Description of the failed operation.
        message: String,
        /// Underlying driver error, if any.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Anything else.
    #[error("internal error: {message}")]
    Internal {
        /// Description of the failure.
        message: String,
    },
}

impl BridgeError {
    /// Build a `NotFound` error.
    pub fn not_found(entity_ref: EntityRef) -> Self {
        BridgeError::NotFound { entity_ref }
    }

    /// Build an `AlreadyExists` error.
    pub fn already_exists(entity_ref: EntityRef) -> Self {
        BridgeError::AlreadyExists { entity_ref }
    }

    /// Build an `Integrity` error.
    pub fn integrity(message: impl Into<String>) -> Self {
        BridgeError::Integrity {
            message: message.into(),
        }
    }

    /// Build an `InvalidInput` error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        BridgeError::InvalidInput {
            message: message.into(),
        }
    }

    /// Build a `Storage` error wrapping a driver error.
    pub fn storage<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        BridgeError::Storage {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Build an `Internal` error.
    pub fn internal(message: impl Into<String>) -> Self {
        BridgeError::Internal {
            message: message.into(),
        }
    }

    /// True for `NotFound`.
    pub fn is_not_found(&self) -> bool {
        matches!(self, BridgeError::NotFound { .. })
    }

    /// True for `AlreadyExists`.
    pub fn is_conflict(&self) -> bool {
        matches!(self, BridgeError::AlreadyExists { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_entity_ref_display() {
        assert_eq!(EntityRef::namespace("prod").to_string(), "namespace://prod");
        assert_eq!(
            EntityRef::resource("prod", "db1").to_string(),
            "resource://prod/db1"
        );
    }

    #[test]
    fn test_not_found_message() {
        let err = BridgeError::not_found(EntityRef::resource("prod", "db1"));
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "not found: resource://prod/db1");
    }

    #[test]
    fn test_storage_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = BridgeError::storage("open failed", io);
        assert_eq!(err.to_string(), "storage error: open failed");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_conflict_predicate() {
        let err = BridgeError::already_exists(EntityRef::namespace("prod"));
        assert!(err.is_conflict());
        assert!(!err.is_not_found());
    }
}
