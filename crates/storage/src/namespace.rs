//! Namespace store.
//!
//! Namespaces are first-class rows. They are created explicitly and never
//! renamed or deleted.

use std::sync::Arc;

use bridge_core::{BridgeError, BridgeResult, EntityRef, Namespace};
use rusqlite::{params, Connection, OptionalExtension};

use crate::database::{read_error, write_error, Database};

/// Stateless facade over [`Database`] for namespace rows.
///
/// Clone is cheap (just an `Arc` clone).
#[derive(Clone, Debug)]
pub struct NamespaceStore {
    db: Arc<Database>,
}

impl NamespaceStore {
    /// Create a new namespace facade.
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Create a namespace.
    ///
    /// Fails with `AlreadyExists` when the name is taken.
    pub fn create(&self, name: &str) -> BridgeResult<Namespace> {
        let namespace = self.db.write("namespace_create", |tx| {
            if lookup(tx, name)?.is_some() {
                return Err(BridgeError::already_exists(EntityRef::namespace(name)));
            }
            tx.execute("INSERT INTO namespaces (name) VALUES (?1)", params![name])
                .map_err(|e| write_error(e, EntityRef::namespace(name)))?;
            Ok(Namespace {
                id: tx.last_insert_rowid(),
                name: name.to_string(),
            })
        })?;
        tracing::info!(target: "bridge::store", namespace = %namespace.name, "namespace created");
        Ok(namespace)
    }

    /// Look up a namespace by name.
    pub fn get(&self, name: &str) -> BridgeResult<Option<Namespace>> {
        self.db.read(|conn| lookup(conn, name))
    }

    /// Check whether a namespace exists.
    pub fn exists(&self, name: &str) -> BridgeResult<bool> {
        Ok(self.get(name)?.is_some())
    }

    /// All namespaces in creation order.
    pub fn list(&self) -> BridgeResult<Vec<Namespace>> {
        self.db.read(|conn| {
            let mut stmt = conn
                .prepare("SELECT id, name FROM namespaces ORDER BY id")
                .map_err(|e| read_error("failed to list namespaces", e))?;
            let rows = stmt
                .query_map([], |row| {
                    Ok(Namespace {
                        id: row.get(0)?,
                        name: row.get(1)?,
                    })
                })
                .map_err(|e| read_error("failed to list namespaces", e))?;
            rows.collect::<Result<Vec<_>, _>>()
                .map_err(|e| read_error("failed to read namespace row", e))
        })
    }

    /// All namespace names in creation order.
    pub fn list_names(&self) -> BridgeResult<Vec<String>> {
        Ok(self.list()?.into_iter().map(|ns| ns.name).collect())
    }
}

/// Fetch a namespace row on any connection or transaction.
pub(crate) fn lookup(conn: &Connection, name: &str) -> BridgeResult<Option<Namespace>> {
    conn.query_row(
        "SELECT id, name FROM namespaces WHERE name = ?1",
        params![name],
        |row| {
            Ok(Namespace {
                id: row.get(0)?,
                name: row.get(1)?,
            })
        },
    )
    .optional()
    .map_err(|e| read_error("failed to look up namespace", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> NamespaceStore {
        NamespaceStore::new(Arc::new(Database::ephemeral().unwrap()))
    }

    #[test]
    fn test_create_and_get() {
        let store = setup();
        let ns = store.create("prod").unwrap();
        assert_eq!(ns.name, "prod");
        assert_eq!(store.get("prod").unwrap(), Some(ns));
        assert!(store.exists("prod").unwrap());
        assert!(!store.exists("staging").unwrap());
    }

    #[test]
    fn test_create_twice_conflicts() {
        let store = setup();
        store.create("prod").unwrap();
        let err = store.create("prod").unwrap_err();
        assert!(err.is_conflict());
        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[test]
    fn test_list_in_insertion_order() {
        let store = setup();
        for name in ["zeta", "alpha", "mid"] {
            store.create(name).unwrap();
        }
        assert_eq!(store.list_names().unwrap(), vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_persists_across_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bridge.db");
        {
            let store = NamespaceStore::new(Arc::new(Database::open(&path).unwrap()));
            store.create("prod").unwrap();
        }
        let store = NamespaceStore::new(Arc::new(Database::open(&path).unwrap()));
        assert_eq!(store.list_names().unwrap(), vec!["prod"]);
    }

    #[test]
    fn test_facades_share_state() {
        let db = Arc::new(Database::ephemeral().unwrap());
        let a = NamespaceStore::new(db.clone());
        let b = NamespaceStore::new(db);
        a.create("shared").unwrap();
        assert!(b.exists("shared").unwrap());
    }
}
