//! Command handlers.
//!
//! One function per command. Handlers validate the typed request, call
//! exactly one store operation and wrap the result in an [`Output`](crate::Output).

pub(crate) mod namespace;
pub(crate) mod resource;
