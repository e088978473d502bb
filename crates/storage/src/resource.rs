//! Resource store.
//!
//! # Design
//!
//! Resources are addressed by `(namespace, name)`. Listing and search are
//! ordered by the surrogate `id`, which is `AUTOINCREMENT` and therefore
//! follows insertion order even after deletes.
//!
//! Search is a case-insensitive substring match (SQLite `LIKE`, which folds
//! ASCII only). `%`, `_` and `\` in filters are escaped and match literally.

use std::sync::Arc;

use bridge_core::{
    next_update_time, timestamp_now, BridgeError, BridgeResult, EntityRef, NewResource, Page,
    PageRequest, Resource, ResourceFilter, ResourcePatch, Timestamp,
};
use chrono::DateTime;
use rusqlite::types::Value as SqlValue;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};

use crate::database::{read_error, write_error, Database};
use crate::namespace::lookup as lookup_namespace;
use crate::schema::RESOURCE_COLUMNS;

/// Stateless facade over [`Database`] for resource rows.
///
/// Clone is cheap (just an `Arc` clone).
#[derive(Clone, Debug)]
pub struct ResourceStore {
    db: Arc<Database>,
}

impl ResourceStore {
    /// Create a new resource facade.
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Insert a resource into `namespace`.
    ///
    /// # Errors
    ///
    /// - `NotFound` (namespace) when the namespace does not exist
    /// - `AlreadyExists` when `(namespace, name)` is taken
    pub fn create(&self, namespace: &str, new: NewResource) -> BridgeResult<Resource> {
        let resource = self.db.write("resource_create", |tx| {
            if lookup_namespace(tx, namespace)?.is_none() {
                return Err(BridgeError::not_found(EntityRef::namespace(namespace)));
            }
            if lookup(tx, namespace, &new.name)?.is_some() {
                return Err(BridgeError::already_exists(EntityRef::resource(
                    namespace, &new.name,
                )));
            }

            let now = timestamp_now();
            tx.execute(
                "INSERT INTO resources (name, arn, value, resource_type, namespace, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?6)",
                params![
                    new.name,
                    new.arn,
                    new.value,
                    new.resource_type,
                    namespace,
                    now.timestamp_micros(),
                ],
            )
            .map_err(|e| write_error(e, EntityRef::resource(namespace, &new.name)))?;

            Ok(Resource {
                id: tx.last_insert_rowid(),
                name: new.name,
                arn: new.arn,
                value: new.value,
                resource_type: new.resource_type,
                namespace: namespace.to_string(),
                created_at: now,
                updated_at: now,
            })
        })?;
        tracing::info!(
            target: "bridge::store",
            namespace,
            name = %resource.name,
            id = resource.id,
            "resource created"
        );
        Ok(resource)
    }

    /// Fetch one resource.
    pub fn get(&self, namespace: &str, name: &str) -> BridgeResult<Option<Resource>> {
        self.db.read(|conn| lookup(conn, namespace, name))
    }

    /// Page through a namespace in insertion order.
    pub fn list(&self, namespace: &str, page: PageRequest) -> BridgeResult<Page<Resource>> {
        self.search(namespace, &ResourceFilter::default(), page)
    }

    /// Apply a partial update and advance `updated_at`.
    ///
    /// `updated_at` always moves strictly forward, even when the patch is
    /// empty or the clock has not ticked since the previous write.
    pub fn update(
        &self,
        namespace: &str,
        name: &str,
        patch: ResourcePatch,
    ) -> BridgeResult<Resource> {
        let resource = self.db.write("resource_update", |tx| {
            let mut resource = lookup(tx, namespace, name)?
                .ok_or_else(|| BridgeError::not_found(EntityRef::resource(namespace, name)))?;

            patch.apply_to(&mut resource);
            resource.updated_at = next_update_time(resource.updated_at, timestamp_now());

            tx.execute(
                "UPDATE resources SET arn = ?1, value = ?2, resource_type = ?3, updated_at = ?4
                 WHERE id = ?5",
                params![
                    resource.arn,
                    resource.value,
                    resource.resource_type,
                    resource.updated_at.timestamp_micros(),
                    resource.id,
                ],
            )
            .map_err(|e| write_error(e, EntityRef::resource(namespace, name)))?;
            Ok(resource)
        })?;
        tracing::info!(target: "bridge::store", namespace, name, "resource updated");
        Ok(resource)
    }

    /// Delete a resource, returning the removed row.
    pub fn delete(&self, namespace: &str, name: &str) -> BridgeResult<Resource> {
        let resource = self.db.write("resource_delete", |tx| {
            let resource = lookup(tx, namespace, name)?
                .ok_or_else(|| BridgeError::not_found(EntityRef::resource(namespace, name)))?;
            tx.execute("DELETE FROM resources WHERE id = ?1", params![resource.id])
                .map_err(|e| write_error(e, EntityRef::resource(namespace, name)))?;
            Ok(resource)
        })?;
        tracing::info!(target: "bridge::store", namespace, name, "resource deleted");
        Ok(resource)
    }

    /// Case-insensitive substring search inside a namespace.
    ///
    /// Every provided filter must match (AND). An empty filter lists the
    /// whole namespace.
    pub fn search(
        &self,
        namespace: &str,
        filter: &ResourceFilter,
        page: PageRequest,
    ) -> BridgeResult<Page<Resource>> {
        let mut clauses = vec!["namespace = ?"];
        let mut args = vec![SqlValue::Text(namespace.to_string())];
        let filters = [
            ("name LIKE ? ESCAPE '\\'", &filter.name),
            ("arn LIKE ? ESCAPE '\\'", &filter.arn),
            ("resource_type LIKE ? ESCAPE '\\'", &filter.resource_type),
        ];
        for (clause, needle) in filters {
            if let Some(needle) = needle.as_deref().filter(|n| !n.is_empty()) {
                clauses.push(clause);
                args.push(SqlValue::Text(like_pattern(needle)));
            }
        }
        let where_sql = clauses.join(" AND ");

        self.db.read(|conn| {
            let total: i64 = conn
                .query_row(
                    &format!("SELECT COUNT(*) FROM resources WHERE {}", where_sql),
                    params_from_iter(args.iter()),
                    |row| row.get(0),
                )
                .map_err(|e| read_error("failed to count resources", e))?;

            let mut page_args = args.clone();
            page_args.push(SqlValue::Integer(page.limit()));
            page_args.push(SqlValue::Integer(page.offset()));
            let sql = format!(
                "SELECT {} FROM resources WHERE {} ORDER BY id LIMIT ? OFFSET ?",
                RESOURCE_COLUMNS, where_sql
            );
            let resources = query_resources(conn, &sql, params_from_iter(page_args.iter()))?;

            Ok(Page::new(page, total.max(0) as u64, resources))
        })
    }

    /// Every resource in every namespace, in insertion order.
    pub fn list_all(&self) -> BridgeResult<Vec<Resource>> {
        self.db.read(|conn| {
            let sql = format!("SELECT {} FROM resources ORDER BY id", RESOURCE_COLUMNS);
            query_resources(conn, &sql, [])
        })
    }
}

/// Fetch one resource row on any connection or transaction.
fn lookup(conn: &Connection, namespace: &str, name: &str) -> BridgeResult<Option<Resource>> {
    conn.query_row(
        &format!(
            "SELECT {} FROM resources WHERE namespace = ?1 AND name = ?2",
            RESOURCE_COLUMNS
        ),
        params![namespace, name],
        row_to_resource,
    )
    .optional()
    .map_err(|e| read_error("failed to look up resource", e))
}

fn query_resources<P: rusqlite::Params>(
    conn: &Connection,
    sql: &str,
    params: P,
) -> BridgeResult<Vec<Resource>> {
    let mut stmt = conn
        .prepare(sql)
        .map_err(|e| read_error("failed to prepare resource query", e))?;
    let rows = stmt
        .query_map(params, row_to_resource)
        .map_err(|e| read_error("failed to query resources", e))?;
    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| read_error("failed to read resource row", e))
}

fn row_to_resource(row: &Row<'_>) -> rusqlite::Result<Resource> {
    Ok(Resource {
        id: row.get(0)?,
        name: row.get(1)?,
        arn: row.get(2)?,
        value: row.get(3)?,
        resource_type: row.get(4)?,
        namespace: row.get(5)?,
        created_at: micros_to_timestamp(row.get(6)?, 6)?,
        updated_at: micros_to_timestamp(row.get(7)?, 7)?,
    })
}

fn micros_to_timestamp(micros: i64, column: usize) -> rusqlite::Result<Timestamp> {
    DateTime::from_timestamp_micros(micros)
        .ok_or(rusqlite::Error::IntegralValueOutOfRange(column, micros))
}

/// `%needle%` with LIKE metacharacters escaped by `\`.
fn like_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for c in needle.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
