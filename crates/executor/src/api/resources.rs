//! Resource operations.

use bridge_core::{Page, PageRequest, Resource, ResourceFilter};

use super::{unexpected, Registry};
use crate::validation::{CreateResourceRequest, UpdateResourceRequest};
use crate::{Command, Output, Result};

impl Registry {
    /// Create a resource in `namespace`.
    pub fn create_resource(
        &self,
        namespace: &str,
        request: CreateResourceRequest,
    ) -> Result<Resource> {
        match self.executor.execute(Command::CreateResource {
            namespace: namespace.to_string(),
            request,
        })? {
            Output::Resource(resource) => Ok(resource),
            other => Err(unexpected("CreateResource", other)),
        }
    }

    /// Fetch a resource.
    pub fn get_resource(&self, namespace: &str, name: &str) -> Result<Resource> {
        match self.executor.execute(Command::GetResource {
            namespace: namespace.to_string(),
            name: name.to_string(),
        })? {
            Output::Resource(resource) => Ok(resource),
            other => Err(unexpected("GetResource", other)),
        }
    }

    /// Page through a namespace in insertion order.
    pub fn list_resources(&self, namespace: &str, page: PageRequest) -> Result<Page<Resource>> {
        match self.executor.execute(Command::ListResources {
            namespace: namespace.to_string(),
            page,
        })? {
            Output::ResourcePage(page) => Ok(page),
            other => Err(unexpected("ListResources", other)),
        }
    }

    /// Apply a partial update.
    pub fn update_resource(
        &self,
        namespace: &str,
        name: &str,
        request: UpdateResourceRequest,
    ) -> Result<Resource> {
        match self.executor.execute(Command::UpdateResource {
            namespace: namespace.to_string(),
            name: name.to_string(),
            request,
        })? {
            Output::Resource(resource) => Ok(resource),
            other => Err(unexpected("UpdateResource", other)),
        }
    }

    /// Delete a resource. Returns the confirmation message.
    pub fn delete_resource(&self, namespace: &str, name: &str) -> Result<String> {
        match self.executor.execute(Command::DeleteResource {
            namespace: namespace.to_string(),
            name: name.to_string(),
        })? {
            Output::Message(message) => Ok(message),
            other => Err(unexpected("DeleteResource", other)),
        }
    }

    /// Case-insensitive substring search inside a namespace.
    pub fn search_resources(
        &self,
        namespace: &str,
        filter: ResourceFilter,
        page: PageRequest,
    ) -> Result<Page<Resource>> {
        match self.executor.execute(Command::SearchResources {
            namespace: namespace.to_string(),
            filter,
            page,
        })? {
            Output::ResourcePage(page) => Ok(page),
            other => Err(unexpected("SearchResources", other)),
        }
    }

    /// Every resource in every namespace.
    pub fn list_all_resources(&self) -> Result<Vec<Resource>> {
        match self.executor.execute(Command::ListAllResources)? {
            Output::Resources(resources) => Ok(resources),
            other => Err(unexpected("ListAllResources", other)),
        }
    }
}
