//! Registry integration tests.
//!
//! These exercise every command through the typed [`Registry`] API and the
//! raw [`Executor`], against both in-memory and on-disk databases.

use bridge_executor::{
    Command, CreateNamespaceRequest, CreateResourceRequest, Error, Output, PageRequest,
    Registry, ResourceFilter, UpdateResourceRequest,
};
use tempfile::TempDir;

fn setup() -> Registry {
    let registry = Registry::ephemeral().unwrap();
    registry.create_namespace("prod").unwrap();
    registry
}

fn db_request(name: &str) -> CreateResourceRequest {
    CreateResourceRequest::new(name, format!("arn:{}", name), "database")
}

#[test]
fn test_namespace_twice_conflicts() {
    let registry = Registry::ephemeral().unwrap();
    assert_eq!(registry.create_namespace("prod").unwrap(), "Namespace created");
    let err = registry.create_namespace("prod").unwrap_err();
    assert_eq!(
        err,
        Error::NamespaceExists {
            namespace: "prod".into()
        }
    );
    assert_eq!(registry.list_namespaces().unwrap(), vec!["prod"]);
}

#[test]
fn test_namespace_required() {
    let registry = Registry::ephemeral().unwrap();
    let err = registry
        .create_namespace_with(CreateNamespaceRequest::default())
        .unwrap_err();
    assert_eq!(err, Error::NamespaceRequired);
}

#[test]
fn test_resource_in_missing_namespace() {
    let registry = setup();
    let err = registry
        .create_resource("staging", db_request("db1"))
        .unwrap_err();
    assert_eq!(
        err,
        Error::NamespaceNotFound {
            namespace: "staging".into()
        }
    );
}

#[test]
fn test_missing_namespace_reported_before_invalid_body() {
    let registry = setup();
    let err = registry
        .create_resource("staging", CreateResourceRequest::default())
        .unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_invalid_body_reports_fields() {
    let registry = setup();
    let err = registry
        .create_resource(
            "prod",
            CreateResourceRequest {
                name: Some("db1".into()),
                ..Default::default()
            },
        )
        .unwrap_err();
    match err {
        Error::Validation { messages } => {
            assert!(messages.contains("arn"));
            assert!(messages.contains("resource_type"));
            assert!(!messages.contains("name"));
        }
        other => panic!("expected Validation, got {:?}", other),
    }
}

#[test]
fn test_same_name_conflicts_within_namespace_only() {
    let registry = setup();
    registry.create_namespace("staging").unwrap();

    registry.create_resource("prod", db_request("db1")).unwrap();
    let err = registry
        .create_resource("prod", db_request("db1"))
        .unwrap_err();
    assert_eq!(
        err,
        Error::ResourceExists {
            namespace: "prod".into(),
            name: "db1".into()
        }
    );
    registry.create_resource("staging", db_request("db1")).unwrap();
}

#[test]
fn test_get_returns_supplied_fields() {
    let registry = setup();
    let created = registry
        .create_resource("prod", db_request("db1").value("postgres://db1"))
        .unwrap();
    assert!(created.id > 0);

    let fetched = registry.get_resource("prod", "db1").unwrap();
    assert_eq!(fetched.arn, "arn:db1");
    assert_eq!(fetched.value.as_deref(), Some("postgres://db1"));
    assert_eq!(fetched.resource_type, "database");
    assert_eq!(fetched.namespace, "prod");
    assert_eq!(fetched, created);
}

#[test]
fn test_update_changes_only_supplied_fields() {
    let registry = setup();
    let created = registry
        .create_resource("prod", db_request("db1").value("v1"))
        .unwrap();

    let updated = registry
        .update_resource(
            "prod",
            "db1",
            UpdateResourceRequest::default().resource_type("cache"),
        )
        .unwrap();
    assert_eq!(updated.resource_type, "cache");
    assert_eq!(updated.arn, created.arn);
    assert_eq!(updated.value, created.value);
    assert!(updated.updated_at > created.updated_at);
    assert_eq!(updated.created_at, created.created_at);
}

#[test]
fn test_update_missing_resource() {
    let registry = setup();
    let err = registry
        .update_resource("prod", "ghost", UpdateResourceRequest::default().arn("x"))
        .unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_update_validates_before_lookup() {
    let registry = setup();
    let err = registry
        .update_resource(
            "prod",
            "ghost",
            UpdateResourceRequest::default().arn("a".repeat(300)),
        )
        .unwrap_err();
    assert!(matches!(err, Error::Validation { .. }));
}

#[test]
fn test_delete_then_get() {
    let registry = setup();
    registry.create_resource("prod", db_request("db1")).unwrap();
    assert_eq!(
        registry.delete_resource("prod", "db1").unwrap(),
        "Resource with name db1 deleted"
    );
    let err = registry.get_resource("prod", "db1").unwrap_err();
    assert_eq!(
        err,
        Error::ResourceNotFound {
            namespace: "prod".into(),
            name: "db1".into()
        }
    );
    assert!(registry.delete_resource("prod", "db1").unwrap_err().is_not_found());
}

#[test]
fn test_list_pagination() {
    let registry = setup();
    for i in 0..5 {
        registry
            .create_resource("prod", db_request(&format!("r{}", i)))
            .unwrap();
    }
    let page = registry
        .list_resources("prod", PageRequest::new(Some(1), Some(2)))
        .unwrap();
    assert_eq!(page.total, 5);
    assert_eq!(page.page, 1);
    assert_eq!(page.per_page, 2);
    assert_eq!(page.resources.len(), 2);
}

#[test]
fn test_search_case_insensitive() {
    let registry = setup();
    registry.create_resource("prod", db_request("ABCdef")).unwrap();
    registry.create_resource("prod", db_request("other")).unwrap();

    let filter = ResourceFilter {
        name: Some("abc".into()),
        ..Default::default()
    };
    let page = registry
        .search_resources("prod", filter, PageRequest::default())
        .unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.resources[0].name, "ABCdef");
}

#[test]
fn test_search_empty_filters_list_everything() {
    let registry = setup();
    registry.create_resource("prod", db_request("a")).unwrap();
    registry.create_resource("prod", db_request("b")).unwrap();

    let filter = ResourceFilter {
        name: Some(String::new()),
        ..Default::default()
    };
    let page = registry
        .search_resources("prod", filter, PageRequest::default())
        .unwrap();
    assert_eq!(page.total, 2);
}

#[test]
fn test_list_all_resources() {
    let registry = setup();
    registry.create_namespace("staging").unwrap();
    registry.create_resource("prod", db_request("a")).unwrap();
    registry.create_resource("staging", db_request("b")).unwrap();
    assert_eq!(registry.list_all_resources().unwrap().len(), 2);
}

#[test]
fn test_executor_raw_commands() {
    let registry = setup();
    let executor = registry.executor();

    let output = executor
        .execute(Command::CreateResource {
            namespace: "prod".into(),
            request: db_request("db1"),
        })
        .unwrap();
    assert!(matches!(output, Output::Resource(ref r) if r.name == "db1"));

    let output = executor.execute(Command::ListNamespaces).unwrap();
    assert_eq!(output, Output::NamespaceNames(vec!["prod".into()]));
}

#[test]
fn test_on_disk_registry_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bridge.db");
    {
        let registry = Registry::open(&path).unwrap();
        registry.create_namespace("prod").unwrap();
        registry.create_resource("prod", db_request("db1")).unwrap();
    }
    let registry = Registry::open(&path).unwrap();
    assert_eq!(registry.list_namespaces().unwrap(), vec!["prod"]);
    assert_eq!(registry.get_resource("prod", "db1").unwrap().arn, "arn:db1");
}

#[test]
fn test_empty_resource_name_rejected() {
    let registry = setup();
    let err = registry
        .create_resource("prod", CreateResourceRequest::new("", "arn:x", "database"))
        .unwrap_err();
    match err {
        Error::Validation { messages } => {
            assert_eq!(
                messages.get("name").unwrap(),
                ["Shorter than minimum length 1.".to_string()]
            );
        }
        other => panic!("expected Validation, got {:?}", other),
    }
}
