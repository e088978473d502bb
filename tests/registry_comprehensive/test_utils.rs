//! Shared fixtures.

use bridge_registry::{CreateResourceRequest, Registry};

/// In-memory registry with the given namespaces created.
pub fn registry_with(namespaces: &[&str]) -> Registry {
    let registry = Registry::ephemeral().expect("open in-memory registry");
    for ns in namespaces {
        registry.create_namespace(ns).expect("create namespace");
    }
    registry
}

/// A valid create request for `name`.
pub fn resource(name: &str) -> CreateResourceRequest {
    CreateResourceRequest::new(name, format!("arn:aws:rds:{}", name), "database")
}

/// Create `count` resources named `r0..` in `namespace`.
pub fn populate(registry: &Registry, namespace: &str, count: usize) {
    for i in 0..count {
        registry
            .create_resource(namespace, resource(&format!("r{}", i)))
            .expect("create resource");
    }
}
