//! Registry commands.

use bridge_core::{PageRequest, ResourceFilter};
use serde::{Deserialize, Serialize};

use crate::validation::{CreateNamespaceRequest, CreateResourceRequest, UpdateResourceRequest};

/// One registry operation.
///
/// Request payloads are carried unvalidated; the executor validates them
/// before touching the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Create a namespace. Output: `Message`.
    CreateNamespace {
        /// Payload.
        request: CreateNamespaceRequest,
    },

    /// List namespace names. Output: `NamespaceNames`.
    ListNamespaces,

    /// Create a resource. Output: `Resource`.
    CreateResource {
        /// Target namespace.
        namespace: String,
        /// Payload.
        request: CreateResourceRequest,
    },

    /// Fetch a resource. Output: `Resource`.
    GetResource {
        /// Owning namespace.
        namespace: String,
        /// Resource name.
        name: String,
    },

    /// Page through a namespace. Output: `ResourcePage`.
    ListResources {
        /// Namespace to list.
        namespace: String,
        /// Page to return.
        page: PageRequest,
    },

    /// Partially update a resource. Output: `Resource`.
    UpdateResource {
        /// Owning namespace.
        namespace: String,
        /// Resource name.
        name: String,
        /// Payload.
        request: UpdateResourceRequest,
    },

    /// Delete a resource. Output: `Message`.
    DeleteResource {
        /// Owning namespace.
        namespace: String,
        /// Resource name.
        name: String,
    },

    /// Substring search inside a namespace. Output: `ResourcePage`.
    SearchResources {
        /// Namespace to search.
        namespace: String,
        /// Filters, combined with AND.
        filter: ResourceFilter,
        /// Page to return.
        page: PageRequest,
    },

    /// Every resource in every namespace. Output: `Resources`.
    ListAllResources,
}

impl Command {
    /// Short operation name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Command::CreateNamespace { .. } => "CreateNamespace",
            Command::ListNamespaces => "ListNamespaces",
            Command::CreateResource { .. } => "CreateResource",
            Command::GetResource { .. } => "GetResource",
            Command::ListResources { .. } => "ListResources",
            Command::UpdateResource { .. } => "UpdateResource",
            Command::DeleteResource { .. } => "DeleteResource",
            Command::SearchResources { .. } => "SearchResources",
            Command::ListAllResources => "ListAllResources",
        }
    }

    /// True for commands that write.
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Command::CreateNamespace { .. }
                | Command::CreateResource { .. }
                | Command::UpdateResource { .. }
                | Command::DeleteResource { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mutations_are_the_writes() {
        let writes = [
            Command::CreateNamespace {
                request: CreateNamespaceRequest::new("prod"),
            },
            Command::DeleteResource {
                namespace: "prod".into(),
                name: "db1".into(),
            },
            Command::UpdateResource {
                namespace: "prod".into(),
                name: "db1".into(),
                request: UpdateResourceRequest::default(),
            },
        ];
        for cmd in &writes {
            assert!(cmd.is_mutation(), "{}", cmd.name());
        }

        let reads = [
            Command::ListNamespaces,
            Command::ListAllResources,
            Command::SearchResources {
                namespace: "prod".into(),
                filter: ResourceFilter::default(),
                page: PageRequest::default(),
            },
        ];
        for cmd in &reads {
            assert!(!cmd.is_mutation(), "{}", cmd.name());
        }
    }
}
