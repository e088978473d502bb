//! Tier 3: pagination clamping and search filters.

use bridge_registry::{PageRequest, ResourceFilter, MAX_PER_PAGE};

use crate::test_utils::*;

#[test]
fn pages_partition_the_namespace() {
    let registry = registry_with(&["prod"]);
    populate(&registry, "prod", 7);

    let mut names = Vec::new();
    for page in 1..=3 {
        let p = registry
            .list_resources("prod", PageRequest::new(Some(page), Some(3)))
            .unwrap();
        assert_eq!(p.total, 7);
        names.extend(p.resources.into_iter().map(|r| r.name));
    }
    let expected: Vec<String> = (0..7).map(|i| format!("r{}", i)).collect();
    assert_eq!(names, expected);
}

#[test]
fn out_of_range_page_is_empty() {
    let registry = registry_with(&["prod"]);
    populate(&registry, "prod", 2);
    let p = registry
        .list_resources("prod", PageRequest::new(Some(9), Some(10)))
        .unwrap();
    assert_eq!(p.total, 2);
    assert!(p.resources.is_empty());
}

#[test]
fn per_page_is_clamped() {
    let registry = registry_with(&["prod"]);
    let p = registry
        .list_resources("prod", PageRequest::new(Some(0), Some(10_000)))
        .unwrap();
    assert_eq!(p.page, 1);
    assert_eq!(p.per_page, MAX_PER_PAGE);
}

#[test]
fn filters_combine_with_and() {
    let registry = registry_with(&["prod"]);
    registry
        .create_resource(
            "prod",
            bridge_registry::CreateResourceRequest::new("cache-main", "arn:redis:1", "cache"),
        )
        .unwrap();
    registry.create_resource("prod", resource("main-db")).unwrap();

    let filter = ResourceFilter {
        name: Some("MAIN".into()),
        resource_type: Some("cache".into()),
        ..Default::default()
    };
    let p = registry
        .search_resources("prod", filter, PageRequest::default())
        .unwrap();
    assert_eq!(p.total, 1);
    assert_eq!(p.resources[0].name, "cache-main");
}

#[test]
fn wildcards_are_literal() {
    let registry = registry_with(&["prod"]);
    registry.create_resource("prod", resource("100%_db")).unwrap();
    registry.create_resource("prod", resource("100x")).unwrap();

    for needle in ["%", "_"] {
        let filter = ResourceFilter {
            name: Some(needle.into()),
            ..Default::default()
        };
        let p = registry
            .search_resources("prod", filter, PageRequest::default())
            .unwrap();
        assert_eq!(p.total, 1, "needle {}", needle);
    }
}
