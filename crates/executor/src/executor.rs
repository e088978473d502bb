//! Command dispatch.

use std::sync::Arc;

use bridge_storage::Database;

use crate::bridge::Primitives;
use crate::handlers;
use crate::{Command, Output, Result};

/// Executes [`Command`]s against one database.
///
/// `Executor` is `Send + Sync`; share it behind an `Arc`. Each call performs
/// at most one store operation and therefore at most one transaction.
pub struct Executor {
    primitives: Arc<Primitives>,
}

impl Executor {
    /// Create an executor over `db`.
    pub fn new(db: Arc<Database>) -> Self {
        Self {
            primitives: Arc::new(Primitives::new(db)),
        }
    }

    /// Execute one command.
    pub fn execute(&self, cmd: Command) -> Result<Output> {
        let op = cmd.name();
        let mutation = cmd.is_mutation();
        let p = &self.primitives;

        let result = match cmd {
            Command::CreateNamespace { request } => handlers::namespace::create(p, request),
            Command::ListNamespaces => handlers::namespace::list(p),
            Command::CreateResource { namespace, request } => {
                handlers::resource::create(p, namespace, request)
            }
            Command::GetResource { namespace, name } => handlers::resource::get(p, namespace, name),
            Command::ListResources { namespace, page } => {
                handlers::resource::list(p, namespace, page)
            }
            Command::UpdateResource {
                namespace,
                name,
                request,
            } => handlers::resource::update(p, namespace, name, request),
            Command::DeleteResource { namespace, name } => {
                handlers::resource::delete(p, namespace, name)
            }
            Command::SearchResources {
                namespace,
                filter,
                page,
            } => handlers::resource::search(p, namespace, filter, page),
            Command::ListAllResources => handlers::resource::list_all(p),
        };

        match result {
            Ok(_) if mutation => {
                tracing::info!(target: "bridge::executor", op, "command applied");
            }
            Ok(_) => {}
            Err(ref err) if err.is_invalid_input() || err.is_not_found() || err.is_conflict() => {
                tracing::debug!(target: "bridge::executor", op, error = %err, "command rejected");
            }
            Err(ref err) => {
                tracing::error!(target: "bridge::executor", op, error = %err, "command failed");
            }
        }
        result
    }
}
