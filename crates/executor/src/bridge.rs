//! Handles to the store facades, shared by every handler.

use std::sync::Arc;

use bridge_storage::{Database, NamespaceStore, ResourceStore};

/// Store facades over one database.
pub(crate) struct Primitives {
    pub namespaces: NamespaceStore,
    pub resources: ResourceStore,
}

impl Primitives {
    pub fn new(db: Arc<Database>) -> Self {
        Self {
            namespaces: NamespaceStore::new(db.clone()),
            resources: ResourceStore::new(db),
        }
    }
}
