//! Namespace and resource records.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Timestamps are UTC with microsecond precision (the store keeps micros).
pub type Timestamp = DateTime<Utc>;

/// Maximum length of namespace names, resource names and resource types.
pub const MAX_NAME_LEN: usize = 80;
/// Maximum length of a resource type.
pub const MAX_TYPE_LEN: usize = 80;
/// Maximum length of an ARN.
pub const MAX_ARN_LEN: usize = 255;
/// Maximum length of a resource value.
pub const MAX_VALUE_LEN: usize = 255;

/// A named scope that partitions resources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Namespace {
    /// Surrogate key.
    pub id: i64,
    /// Unique name.
    pub name: String,
}

/// A stored resource record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    /// Surrogate key assigned by the store.
    pub id: i64,
    /// Name, unique within `namespace`.
    pub name: String,
    /// Identifier of the underlying thing.
    pub arn: String,
    /// Optional payload.
    pub value: Option<String>,
    /// Classification tag.
    pub resource_type: String,
    /// Owning namespace name.
    pub namespace: String,
    /// Set on insert.
    pub created_at: Timestamp,
    /// Set on insert and on every update.
    pub updated_at: Timestamp,
}

/// Fields for inserting a resource. The namespace comes from the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewResource {
    /// Resource name.
    pub name: String,
    /// ARN.
    pub arn: String,
    /// Optional payload.
    pub value: Option<String>,
    /// Classification tag.
    pub resource_type: String,
}

/// Partial update. `None` leaves the stored field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourcePatch {
    /// New ARN.
    pub arn: Option<String>,
    /// New value.
    pub value: Option<String>,
    /// New type.
    pub resource_type: Option<String>,
}

impl ResourcePatch {
    /// Apply the patch to a record in place.
    pub fn apply_to(&self, resource: &mut Resource) {
        if let Some(arn) = &self.arn {
            resource.arn = arn.clone();
        }
        if let Some(value) = &self.value {
            resource.value = Some(value.clone());
        }
        if let Some(resource_type) = &self.resource_type {
            resource.resource_type = resource_type.clone();
        }
    }
}

/// Substring filters for search. Provided filters are combined with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceFilter {
    /// Match within the resource name.
    pub name: Option<String>,
    /// Match within the ARN.
    pub arn: Option<String>,
    /// Match within the resource type.
    pub resource_type: Option<String>,
}

impl ResourceFilter {
    /// Drop filters that are empty strings; an empty filter matches everything.
    pub fn normalized(self) -> Self {
        fn keep(s: Option<String>) -> Option<String> {
            s.filter(|s| !s.is_empty())
        }
        Self {
            name: keep(self.name),
            arn: keep(self.arn),
            resource_type: keep(self.resource_type),
        }
    }

    /// True when no filter is set.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.arn.is_none() && self.resource_type.is_none()
    }
}

/// Current time truncated to the precision the store keeps.
pub fn timestamp_now() -> Timestamp {
    let now = Utc::now();
    DateTime::from_timestamp_micros(now.timestamp_micros()).unwrap_or(now)
}

/// Next `updated_at` value: `now`, or one microsecond past `previous` if the
/// clock has not moved forward.
pub fn next_update_time(previous: Timestamp, now: Timestamp) -> Timestamp {
    if now > previous {
        now
    } else {
        previous + Duration::microseconds(1)
    }
}
