//! Public types for the Bridge registry.
//!
//! This module re-exports types from the internal crates with one flat
//! interface.

// ============================================================================
// Records
// ============================================================================

pub use bridge_core::{Namespace, NewResource, Resource, ResourcePatch, Timestamp};

// Pagination and search
pub use bridge_core::{Page, PageRequest, ResourceFilter, DEFAULT_PER_PAGE, MAX_PER_PAGE};

// Column limits
pub use bridge_core::{MAX_ARN_LEN, MAX_NAME_LEN, MAX_TYPE_LEN, MAX_VALUE_LEN};

// ============================================================================
// Requests and errors
// ============================================================================

pub use bridge_executor::{
    CreateNamespaceRequest, CreateResourceRequest, Error, FieldErrors, UpdateResourceRequest,
};

// Storage location, for callers that open a registry themselves
pub use bridge_storage::DatabaseLocation;
