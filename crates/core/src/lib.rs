//! Core types for the Bridge resource registry.
//!
//! This crate defines the data model shared by every layer:
//! - [`Namespace`] and [`Resource`]: the two persisted entities
//! - [`NewResource`], [`ResourcePatch`], [`ResourceFilter`]: store inputs
//! - [`PageRequest`] and [`Page`]: pagination
//! - [`BridgeError`]: the error type returned by the store layer

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod page;
pub mod types;

pub use error::{BridgeError, BridgeResult, EntityRef};
pub use page::{Page, PageRequest, DEFAULT_PER_PAGE, MAX_PER_PAGE};
pub use types::{
    next_update_time, timestamp_now, Namespace, NewResource, Resource, ResourceFilter,
    ResourcePatch, Timestamp, MAX_ARN_LEN, MAX_NAME_LEN, MAX_TYPE_LEN, MAX_VALUE_LEN,
};
