//! Namespace command handlers.

use std::sync::Arc;

use crate::bridge::Primitives;
use crate::convert::convert_result;
use crate::validation::CreateNamespaceRequest;
use crate::{Output, Result};

/// Handle CreateNamespace command.
pub(crate) fn create(p: &Arc<Primitives>, request: CreateNamespaceRequest) -> Result<Output> {
    let name = request.validate()?;
    convert_result(p.namespaces.create(&name))?;
    Ok(Output::Message("Namespace created".to_string()))
}

/// Handle ListNamespaces command.
pub(crate) fn list(p: &Arc<Primitives>) -> Result<Output> {
    let names = convert_result(p.namespaces.list_names())?;
    Ok(Output::NamespaceNames(names))
}
