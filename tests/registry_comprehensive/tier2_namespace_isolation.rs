//! Tier 2: namespaces scope names and lookups.

use bridge_registry::{Error, UpdateResourceRequest};

use crate::test_utils::*;

#[test]
fn same_name_lives_in_each_namespace() {
    let registry = registry_with(&["prod", "staging"]);
    let a = registry.create_resource("prod", resource("db1")).unwrap();
    let b = registry.create_resource("staging", resource("db1")).unwrap();
    assert_ne!(a.id, b.id);

    registry
        .update_resource("staging", "db1", UpdateResourceRequest::default().value("s"))
        .unwrap();
    assert!(registry.get_resource("prod", "db1").unwrap().value.is_none());

    registry.delete_resource("prod", "db1").unwrap();
    assert!(registry.get_resource("staging", "db1").is_ok());
}

#[test]
fn lookups_do_not_cross_namespaces() {
    let registry = registry_with(&["prod", "staging"]);
    registry.create_resource("prod", resource("db1")).unwrap();
    assert_eq!(
        registry.get_resource("staging", "db1").unwrap_err(),
        Error::ResourceNotFound {
            namespace: "staging".into(),
            name: "db1".into()
        }
    );
}

#[test]
fn namespace_listing_keeps_creation_order() {
    let registry = registry_with(&["zeta", "alpha", "mid"]);
    assert_eq!(registry.list_namespaces().unwrap(), vec!["zeta", "alpha", "mid"]);
}

#[test]
fn list_all_spans_namespaces() {
    let registry = registry_with(&["prod", "staging"]);
    populate(&registry, "prod", 2);
    populate(&registry, "staging", 3);
    let all = registry.list_all_resources().unwrap();
    assert_eq!(all.len(), 5);
    assert_eq!(all.iter().filter(|r| r.namespace == "staging").count(), 3);
}
