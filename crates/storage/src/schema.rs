//! Table definitions.
//!
//! Tables are created if missing on every open. There are no migrations.

/// Statements run when a database is opened.
pub(crate) const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS namespaces (
    id   INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT    NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS resources (
    id            INTEGER PRIMARY KEY AUTOINCREMENT,
    name          TEXT    NOT NULL,
    arn           TEXT    NOT NULL,
    value         TEXT,
    resource_type TEXT    NOT NULL,
    namespace     TEXT    NOT NULL REFERENCES namespaces(name),
    created_at    INTEGER NOT NULL,
    updated_at    INTEGER NOT NULL,
    UNIQUE (namespace, name),
    CHECK (updated_at >= created_at)
);

CREATE INDEX IF NOT EXISTS idx_resources_namespace ON resources (namespace, id);
";

/// Column list matching `resource::row_to_resource`.
pub(crate) const RESOURCE_COLUMNS: &str =
    "id, name, arn, value, resource_type, namespace, created_at, updated_at";
