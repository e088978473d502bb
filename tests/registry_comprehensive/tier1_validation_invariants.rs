//! Tier 1: payload validation.

use bridge_registry::{
    CreateResourceRequest, Error, UpdateResourceRequest, MAX_ARN_LEN, MAX_NAME_LEN,
};
use serde_json::json;

use crate::test_utils::*;

fn messages(err: Error) -> bridge_registry::FieldErrors {
    match err {
        Error::Validation { messages } => messages,
        other => panic!("expected Validation, got {:?}", other),
    }
}

#[test]
fn non_object_body_is_a_schema_error() {
    for body in [json!([1, 2]), json!("db1"), json!(null)] {
        let errors = CreateResourceRequest::from_json(&body).unwrap_err();
        assert_eq!(errors.get("_schema").unwrap(), ["Invalid input type."]);
    }
}

#[test]
fn name_limits_are_enforced() {
    let registry = registry_with(&["prod"]);

    let at_limit = "n".repeat(MAX_NAME_LEN);
    registry.create_resource("prod", resource(&at_limit)).unwrap();

    let over = "n".repeat(MAX_NAME_LEN + 1);
    let errors = messages(registry.create_resource("prod", resource(&over)).unwrap_err());
    assert_eq!(
        errors.get("name").unwrap(),
        [format!("Longer than maximum length {}.", MAX_NAME_LEN)]
    );

    let errors = messages(registry.create_resource("prod", resource("a/b")).unwrap_err());
    assert!(errors.contains("name"));
}

#[test]
fn value_is_optional_but_bounded() {
    let registry = registry_with(&["prod"]);
    let created = registry.create_resource("prod", resource("db1")).unwrap();
    assert!(created.value.is_none());

    let err = registry
        .create_resource("prod", resource("db2").value("v".repeat(256)))
        .unwrap_err();
    assert!(messages(err).contains("value"));
}

#[test]
fn rejected_update_leaves_record_untouched() {
    let registry = registry_with(&["prod"]);
    let before = registry.create_resource("prod", resource("db1")).unwrap();

    let err = registry
        .update_resource(
            "prod",
            "db1",
            UpdateResourceRequest::default()
                .resource_type("cache")
                .arn("a".repeat(MAX_ARN_LEN + 1)),
        )
        .unwrap_err();
    assert!(messages(err).contains("arn"));
    assert_eq!(registry.get_resource("prod", "db1").unwrap(), before);
}

#[test]
fn update_ignores_identity_fields_in_body() {
    let registry = registry_with(&["prod"]);
    registry.create_resource("prod", resource("db1")).unwrap();

    let request =
        UpdateResourceRequest::from_json(&json!({"name": "other", "namespace": "x", "value": "v"}))
            .unwrap();
    let updated = registry.update_resource("prod", "db1", request).unwrap();
    assert_eq!(updated.name, "db1");
    assert_eq!(updated.namespace, "prod");
    assert_eq!(updated.value.as_deref(), Some("v"));
}
