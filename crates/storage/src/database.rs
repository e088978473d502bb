//! Database handle.
//!
//! # Design
//!
//! `Database` owns one `rusqlite::Connection` behind a `parking_lot::Mutex`.
//! Reads borrow the connection directly; writes go through
//! [`Database::write`], which opens an IMMEDIATE transaction, commits when
//! the closure succeeds and rolls back when it fails.
//!
//! The store facades hold an `Arc<Database>` and keep no state of their own.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use bridge_core::{BridgeError, BridgeResult, EntityRef};
use parking_lot::Mutex;
use rusqlite::{ffi, Connection, ErrorCode, Transaction, TransactionBehavior};

use crate::schema::SCHEMA;

/// How long a statement waits on a locked database file before failing.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Where the database lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseLocation {
    /// Private in-memory database, gone when the handle drops.
    Memory,
    /// SQLite file on disk.
    File(PathBuf),
}

impl fmt::Display for DatabaseLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatabaseLocation::Memory => write!(f, ":memory:"),
            DatabaseLocation::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Shared SQLite handle.
pub struct Database {
    conn: Mutex<Connection>,
    location: DatabaseLocation,
}

impl fmt::Debug for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Database")
            .field("location", &self.location)
            .finish()
    }
}

impl Database {
    /// Open (or create) a database file.
    pub fn open(path: impl AsRef<Path>) -> BridgeResult<Self> {
        Self::open_location(DatabaseLocation::File(path.as_ref().to_path_buf()))
    }

    /// Open a private in-memory database. Used by tests and `sqlite://` URLs.
    pub fn ephemeral() -> BridgeResult<Self> {
        Self::open_location(DatabaseLocation::Memory)
    }

    /// Open a database at `location` and make sure the tables exist.
    pub fn open_location(location: DatabaseLocation) -> BridgeResult<Self> {
        let conn = match &location {
            DatabaseLocation::Memory => Connection::open_in_memory(),
            DatabaseLocation::File(path) => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    std::fs::create_dir_all(parent).map_err(|e| {
                        BridgeError::storage(
                            format!("failed to create directory {}", parent.display()),
                            e,
                        )
                    })?;
                }
                Connection::open(path)
            }
        }
        .map_err(|e| BridgeError::storage(format!("failed to open {}", location), e))?;

        conn.busy_timeout(BUSY_TIMEOUT)
            .map_err(|e| BridgeError::storage("failed to set busy timeout", e))?;
        conn.pragma_update(None, "foreign_keys", "ON")
            .map_err(|e| BridgeError::storage("failed to enable foreign keys", e))?;
        conn.execute_batch(SCHEMA)
            .map_err(|e| BridgeError::storage("failed to create schema", e))?;

        tracing::info!(target: "bridge::store", location = %location, "database opened");

        Ok(Self {
            conn: Mutex::new(conn),
            location,
        })
    }

    /// Where this database lives.
    pub fn location(&self) -> &DatabaseLocation {
        &self.location
    }

    /// Run a read-only closure against the connection.
    pub(crate) fn read<T>(
        &self,
        f: impl FnOnce(&Connection) -> BridgeResult<T>,
    ) -> BridgeResult<T> {
        let conn = self.conn.lock();
        f(&conn)
    }

    /// Run `f` inside a single transaction.
    ///
    /// Commits when `f` returns `Ok`, rolls back otherwise. `op` names the
    /// operation in log output.
    pub(crate) fn write<T>(
        &self,
        op: &'static str,
        f: impl FnOnce(&Transaction<'_>) -> BridgeResult<T>,
    ) -> BridgeResult<T> {
        let mut conn = self.conn.lock();
        let tx = conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .map_err(|e| BridgeError::storage("failed to begin transaction", e))?;

        match f(&tx) {
            Ok(value) => {
                tx.commit()
                    .map_err(|e| BridgeError::storage("failed to commit transaction", e))?;
                Ok(value)
            }
            Err(err) => {
                if let Err(rollback_err) = tx.rollback() {
                    tracing::error!(
                        target: "bridge::store",
                        op,
                        error = %rollback_err,
                        "rollback failed"
                    );
                }
                match &err {
                    BridgeError::NotFound { .. } | BridgeError::AlreadyExists { .. } => {
                        tracing::debug!(target: "bridge::store", op, error = %err, "transaction rolled back");
                    }
                    _ => {
                        tracing::error!(target: "bridge::store", op, error = %err, "transaction rolled back");
                    }
                }
                Err(err)
            }
        }
    }
}

/// Translate a failed write into a store error.
///
/// Unique-key violations become `AlreadyExists { entity_ref }`; any other
/// constraint failure becomes `Integrity`.
pub(crate) fn write_error(err: rusqlite::Error, entity_ref: EntityRef) -> BridgeError {
    if let rusqlite::Error::SqliteFailure(code, message) = &err {
        if code.code == ErrorCode::ConstraintViolation {
            return match code.extended_code {
                ffi::SQLITE_CONSTRAINT_UNIQUE | ffi::SQLITE_CONSTRAINT_PRIMARYKEY => {
                    BridgeError::already_exists(entity_ref)
                }
                _ => BridgeError::integrity(
                    message.clone().unwrap_or_else(|| code.to_string()),
                ),
            };
        }
    }
    BridgeError::storage(format!("write failed for {}", entity_ref), err)
}

/// Wrap a driver error raised while reading.
pub(crate) fn read_error(context: &str, err: rusqlite::Error) -> BridgeError {
    BridgeError::storage(context.to_string(), err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_ephemeral_opens() {
        let db = Database::ephemeral().unwrap();
        assert_eq!(db.location(), &DatabaseLocation::Memory);
    }

    #[test]
    fn test_open_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("bridge.db");
        let db = Database::open(&path).unwrap();
        assert!(path.exists());
        assert_eq!(db.location(), &DatabaseLocation::File(path));
    }

    #[test]
    fn test_write_rolls_back_on_error() {
        let db = Database::ephemeral().unwrap();
        let result: BridgeResult<()> = db.write("test", |tx| {
            tx.execute("INSERT INTO namespaces (name) VALUES ('tmp')", [])
                .map_err(|e| write_error(e, EntityRef::namespace("tmp")))?;
            Err(BridgeError::internal("boom"))
        });
        assert!(result.is_err());

        let count: i64 = db
            .read(|conn| {
                conn.query_row("SELECT COUNT(*) FROM namespaces", [], |r| r.get(0))
                    .map_err(|e| read_error("count", e))
            })
            .unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn test_unique_violation_maps_to_already_exists() {
        let db = Database::ephemeral().unwrap();
        let insert = |db: &Database| {
            db.write("insert", |tx| {
                tx.execute("INSERT INTO namespaces (name) VALUES ('dup')", [])
                    .map_err(|e| write_error(e, EntityRef::namespace("dup")))?;
                Ok(())
            })
        };
        insert(&db).unwrap();
        let err = insert(&db).unwrap_err();
        assert!(err.is_conflict());
    }

    #[test]
    fn test_foreign_key_violation_maps_to_integrity() {
        let db = Database::ephemeral().unwrap();
        let err = db
            .write("insert", |tx| {
                tx.execute(
                    "INSERT INTO resources (name, arn, resource_type, namespace, created_at, updated_at)
                     VALUES ('r', 'a', 't', 'missing', 0, 0)",
                    [],
                )
                .map_err(|e| write_error(e, EntityRef::resource("missing", "r")))?;
                Ok(())
            })
            .unwrap_err();
        assert!(matches!(err, BridgeError::Integrity { .. }), "{:?}", err);
    }
}
