//! Namespace operations.

use super::{unexpected, Registry};
use crate::validation::CreateNamespaceRequest;
use crate::{Command, Output, Result};

impl Registry {
    /// Create a namespace. Returns the confirmation message.
    pub fn create_namespace(&self, name: &str) -> Result<String> {
        self.create_namespace_with(CreateNamespaceRequest::new(name))
    }

    /// Create a namespace from a raw request payload.
    pub fn create_namespace_with(&self, request: CreateNamespaceRequest) -> Result<String> {
        match self
            .executor
            .execute(Command::CreateNamespace { request })?
        {
            Output::Message(message) => Ok(message),
            other => Err(unexpected("CreateNamespace", other)),
        }
    }

    /// All namespace names in creation order.
    pub fn list_namespaces(&self) -> Result<Vec<String>> {
        match self.executor.execute(Command::ListNamespaces)? {
            Output::NamespaceNames(names) => Ok(names),
            other => Err(unexpected("ListNamespaces", other)),
        }
    }
}
