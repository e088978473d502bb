//! Tier 4: on-disk registries survive reopen.

use bridge_registry::{PageRequest, Registry, UpdateResourceRequest};
use tempfile::TempDir;

use crate::test_utils::*;

#[test]
fn reopen_preserves_rows_and_timestamps() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("bridge.db");

    let updated = {
        let registry = Registry::open(&path).unwrap();
        registry.create_namespace("prod").unwrap();
        populate(&registry, "prod", 3);
        registry
            .update_resource("prod", "r1", UpdateResourceRequest::default().value("v"))
            .unwrap()
    };

    let registry = Registry::open(&path).unwrap();
    assert_eq!(registry.get_resource("prod", "r1").unwrap(), updated);
    let page = registry.list_resources("prod", PageRequest::default()).unwrap();
    assert_eq!(page.total, 3);
}

#[test]
fn ids_are_not_reused_after_delete() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bridge.db");

    let registry = Registry::open(&path).unwrap();
    registry.create_namespace("prod").unwrap();
    let first = registry.create_resource("prod", resource("a")).unwrap();
    registry.delete_resource("prod", "a").unwrap();
    drop(registry);

    let registry = Registry::open(&path).unwrap();
    let second = registry.create_resource("prod", resource("a")).unwrap();
    assert!(second.id > first.id);
}
