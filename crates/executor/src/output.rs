//! Command outputs.

use bridge_core::{Page, Resource};
use serde::{Deserialize, Serialize};

/// Successful result of a [`Command`](crate::Command).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Output {
    /// Confirmation text.
    Message(String),
    /// Namespace names in creation order.
    NamespaceNames(Vec<String>),
    /// A single resource.
    Resource(Resource),
    /// A page of resources.
    ResourcePage(Page<Resource>),
    /// An unpaginated resource list.
    Resources(Vec<Resource>),
}

impl Output {
    /// Variant name, for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Output::Message(_) => "Message",
            Output::NamespaceNames(_) => "NamespaceNames",
            Output::Resource(_) => "Resource",
            Output::ResourcePage(_) => "ResourcePage",
            Output::Resources(_) => "Resources",
        }
    }
}
