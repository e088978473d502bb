//! Error conversion from store errors.
//!
//! This module provides the single conversion from [`BridgeError`] to the
//! executor's [`Error`] type.

use crate::validation::FieldErrors;
use crate::Error;
use bridge_core::{BridgeError, EntityRef};

/// Convert a BridgeError to an executor Error.
///
/// Not-found and conflict errors keep their entity; driver error chains
/// are flattened into the `reason` string.
impl From<BridgeError> for Error {
    fn from(err: BridgeError) -> Self {
        match err {
            BridgeError::NotFound { entity_ref } => match entity_ref {
                EntityRef::Namespace { name } => Error::NamespaceNotFound { namespace: name },
                EntityRef::Resource { namespace, name } => {
                    Error::ResourceNotFound { namespace, name }
                }
            },

            BridgeError::AlreadyExists { entity_ref } => match entity_ref {
                EntityRef::Namespace { name } => Error::NamespaceExists { namespace: name },
                EntityRef::Resource { namespace, name } => {
                    Error::ResourceExists { namespace, name }
                }
            },

            BridgeError::Integrity { message } => Error::Integrity { reason: message },

            BridgeError::InvalidInput { message } => Error::Validation {
                messages: FieldErrors::schema(message),
            },

            BridgeError::Storage { message, source } => {
                let reason = if let Some(ref src) = source {
                    format!("{}: {}", message, src)
                } else {
                    message
                };
                Error::Io { reason }
            }

            BridgeError::Internal { message } => Error::Internal { reason: message },
        }
    }
}

/// Convert a bridge_core::BridgeResult to an executor Result.
pub fn convert_result<T>(result: bridge_core::BridgeResult<T>) -> crate::Result<T> {
    result.map_err(Error::from)
}
