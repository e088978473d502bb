//! Resource command handlers.

use std::sync::Arc;

use bridge_core::{PageRequest, ResourceFilter};

use crate::bridge::Primitives;
use crate::convert::convert_result;
use crate::validation::{CreateResourceRequest, UpdateResourceRequest};
use crate::{Error, Output, Result};

/// Fail with `NamespaceNotFound` unless `namespace` exists.
///
/// Checked before payload validation so a bad namespace reports 404 even
/// when the body is also wrong.
fn require_namespace_exists(p: &Arc<Primitives>, namespace: &str) -> Result<()> {
    if !convert_result(p.namespaces.exists(namespace))? {
        return Err(Error::NamespaceNotFound {
            namespace: namespace.to_string(),
        });
    }
    Ok(())
}

/// Handle CreateResource command.
pub(crate) fn create(
    p: &Arc<Primitives>,
    namespace: String,
    request: CreateResourceRequest,
) -> Result<Output> {
    require_namespace_exists(p, &namespace)?;
    let new = request.validate()?;
    let resource = convert_result(p.resources.create(&namespace, new))?;
    Ok(Output::Resource(resource))
}

/// Handle GetResource command.
pub(crate) fn get(p: &Arc<Primitives>, namespace: String, name: String) -> Result<Output> {
    match convert_result(p.resources.get(&namespace, &name))? {
        Some(resource) => Ok(Output::Resource(resource)),
        None => Err(Error::ResourceNotFound { namespace, name }),
    }
}

/// Handle ListResources command.
pub(crate) fn list(p: &Arc<Primitives>, namespace: String, page: PageRequest) -> Result<Output> {
    let page = convert_result(p.resources.list(&namespace, page))?;
    Ok(Output::ResourcePage(page))
}

/// Handle UpdateResource command.
pub(crate) fn update(
    p: &Arc<Primitives>,
    namespace: String,
    name: String,
    request: UpdateResourceRequest,
) -> Result<Output> {
    let patch = request.validate()?;
    let resource = convert_result(p.resources.update(&namespace, &name, patch))?;
    Ok(Output::Resource(resource))
}

/// Handle DeleteResource command.
pub(crate) fn delete(p: &Arc<Primitives>, namespace: String, name: String) -> Result<Output> {
    convert_result(p.resources.delete(&namespace, &name))?;
    Ok(Output::Message(format!("Resource with name {} deleted", name)))
}

/// Handle SearchResources command.
pub(crate) fn search(
    p: &Arc<Primitives>,
    namespace: String,
    filter: ResourceFilter,
    page: PageRequest,
) -> Result<Output> {
    let filter = filter.normalized();
    let page = convert_result(p.resources.search(&namespace, &filter, page))?;
    Ok(Output::ResourcePage(page))
}

/// Handle ListAllResources command.
pub(crate) fn list_all(p: &Arc<Primitives>) -> Result<Output> {
    let resources = convert_result(p.resources.list_all())?;
    Ok(Output::Resources(resources))
}
