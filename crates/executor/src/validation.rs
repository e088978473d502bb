//! Request payloads and their validation.
//!
//! Each endpoint has a typed request struct. Payloads arrive as JSON and go
//! through two steps:
//!
//! 1. `from_json` checks the shape: the body must be an object, every known
//!    field must be a string (not `null`), and unknown fields are rejected.
//! 2. `validate` checks content: required fields present, lengths within the
//!    column limits, names free of `/`.
//!
//! Both steps report problems as [`FieldErrors`], keyed by field name. Body
//! level problems use the `_schema` key.

use std::collections::BTreeMap;
use std::fmt;

use bridge_core::{
    NewResource, ResourcePatch, MAX_ARN_LEN, MAX_NAME_LEN, MAX_TYPE_LEN, MAX_VALUE_LEN,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::Error;

/// Key used for problems with the body as a whole.
pub const SCHEMA_KEY: &str = "_schema";

/// Required field absent.
pub const MSG_MISSING: &str = "Missing data for required field.";
/// Field is not a JSON string.
pub const MSG_NOT_STRING: &str = "Not a valid string.";
/// Field is JSON `null`.
pub const MSG_NULL: &str = "Field may not be null.";
/// Field not part of the payload.
pub const MSG_UNKNOWN: &str = "Unknown field.";
/// Name contains a path separator.
pub const MSG_SLASH: &str = "Must not contain '/'.";
/// Name is the empty string.
pub const MSG_EMPTY: &str = "Shorter than minimum length 1.";
/// Body is not a JSON object.
pub const MSG_INVALID_TYPE: &str = "Invalid input type.";

/// Validation problems keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    /// Empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// A single body-level problem.
    pub fn schema(message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(SCHEMA_KEY, message);
        errors
    }

    /// Record a problem with `field`.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    /// Problems recorded for `field`.
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// True when a problem was recorded for `field`.
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// True when nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `Ok(value)` when empty, otherwise `Err(self)`.
    pub fn into_result<T>(self, value: T) -> Result<T, FieldErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            for message in messages {
                if !first {
                    write!(f, "; ")?;
                }
                write!(f, "{}: {}", field, message)?;
                first = false;
            }
        }
        Ok(())
    }
}

// =============================================================================
// Shape checks
// =============================================================================

/// Walks a JSON object, pulling out string fields and recording problems.
struct Extractor<'a> {
    object: Option<&'a Map<String, Value>>,
    seen: Vec<&'static str>,
    errors: FieldErrors,
}

impl<'a> Extractor<'a> {
    fn new(body: &'a Value) -> Self {
        let object = body.as_object();
        let mut errors = FieldErrors::new();
        if object.is_none() {
            errors.add(SCHEMA_KEY, MSG_INVALID_TYPE);
        }
        Self {
            object,
            seen: Vec::new(),
            errors,
        }
    }

    fn string(&mut self, field: &'static str) -> Option<String> {
        self.seen.push(field);
        match self.object?.get(field)? {
            Value::String(s) => Some(s.clone()),
            Value::Null => {
                self.errors.add(field, MSG_NULL);
                None
            }
            _ => {
                self.errors.add(field, MSG_NOT_STRING);
                None
            }
        }
    }

    fn finish(mut self) -> FieldErrors {
        if let Some(object) = self.object {
            for key in object.keys() {
                if !self.seen.iter().any(|s| *s == key.as_str()) {
                    self.errors.add(key.clone(), MSG_UNKNOWN);
                }
            }
        }
        self.errors
    }
}

// =============================================================================
// Content checks
// =============================================================================

fn check_length(errors: &mut FieldErrors, field: &str, value: &str, max: usize) {
    if value.chars().count() > max {
        errors.add(field, format!("Longer than maximum length {}.", max));
    }
}

/// Names are used as URL path segments.
fn check_name(errors: &mut FieldErrors, field: &str, value: &str) {
    if value.is_empty() {
        errors.add(field, MSG_EMPTY);
    }
    check_length(errors, field, value, MAX_NAME_LEN);
    if value.contains('/') {
        errors.add(field, MSG_SLASH);
    }
}

fn require(errors: &mut FieldErrors, field: &str, value: Option<String>) -> String {
    match value {
        Some(v) => v,
        None => {
            if !errors.contains(field) {
                errors.add(field, MSG_MISSING);
            }
            String::new()
        }
    }
}

// =============================================================================
// Namespace
// =============================================================================

/// Body of `POST /api/namespace`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateNamespaceRequest {
    /// Name of the namespace to create.
    pub namespace: Option<String>,
}

impl CreateNamespaceRequest {
    /// Request for `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            namespace: Some(name.into()),
        }
    }

    /// Read the request from a JSON body.
    ///
    /// Lenient: anything other than a string `namespace` field reads as
    /// absent and is reported by [`validate`](Self::validate) as
    /// [`Error::NamespaceRequired`]. Other fields are ignored.
    pub fn from_json(body: &Value) -> Self {
        Self {
            namespace: body
                .get("namespace")
                .and_then(Value::as_str)
                .map(str::to_string),
        }
    }

    /// Return the namespace name, or why it is unusable.
    pub fn validate(self) -> Result<String, Error> {
        let name = match self.namespace {
            Some(name) if !name.is_empty() => name,
            _ => return Err(Error::NamespaceRequired),
        };
        let mut errors = FieldErrors::new();
        check_name(&mut errors, "namespace", &name);
        errors.into_result(name).map_err(Error::from)
    }
}

// =============================================================================
// Resource create
// =============================================================================

/// Body of `POST /api/resource/{namespace}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateResourceRequest {
    /// Resource name (required).
    pub name: Option<String>,
    /// ARN (required).
    pub arn: Option<String>,
    /// Optional payload.
    pub value: Option<String>,
    /// Classification tag (required).
    pub resource_type: Option<String>,
}

impl CreateResourceRequest {
    /// Request with every required field set.
    pub fn new(
        name: impl Into<String>,
        arn: impl Into<String>,
        resource_type: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            arn: Some(arn.into()),
            value: None,
            resource_type: Some(resource_type.into()),
        }
    }

    /// Set the optional value.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Read the request from a JSON body.
    ///
    /// A `namespace` key is tolerated (the path decides the namespace) but
    /// must still be a string.
    pub fn from_json(body: &Value) -> Result<Self, FieldErrors> {
        let mut ex = Extractor::new(body);
        let request = Self {
            name: ex.string("name"),
            arn: ex.string("arn"),
            value: ex.string("value"),
            resource_type: ex.string("resource_type"),
        };
        let _ = ex.string("namespace");
        ex.finish().into_result(request)
    }

    /// Check required fields and limits.
    pub fn validate(self) -> Result<NewResource, FieldErrors> {
        let mut errors = FieldErrors::new();
        let name = require(&mut errors, "name", self.name);
        if errors.get("name").is_none() {
            check_name(&mut errors, "name", &name);
        }
        let arn = require(&mut errors, "arn", self.arn);
        check_length(&mut errors, "arn", &arn, MAX_ARN_LEN);
        let resource_type = require(&mut errors, "resource_type", self.resource_type);
        check_length(&mut errors, "resource_type", &resource_type, MAX_TYPE_LEN);
        if let Some(value) = &self.value {
            check_length(&mut errors, "value", value, MAX_VALUE_LEN);
        }

        errors.into_result(NewResource {
            name,
            arn,
            value: self.value,
            resource_type,
        })
    }
}

// =============================================================================
// Resource update
// =============================================================================

/// Body of `PUT /api/resource/{namespace}/{name}`. Every field is optional;
/// absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateResourceRequest {
    /// New ARN.
    pub arn: Option<String>,
    /// New value.
    pub value: Option<String>,
    /// New type.
    pub resource_type: Option<String>,
}

impl UpdateResourceRequest {
    /// Set the ARN.
    pub fn arn(mut self, arn: impl Into<String>) -> Self {
        self.arn = Some(arn.into());
        self
    }

    /// Set the value.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Set the type.
    pub fn resource_type(mut self, resource_type: impl Into<String>) -> Self {
        self.resource_type = Some(resource_type.into());
        self
    }

    /// Read the request from a JSON body.
    ///
    /// `name` and `namespace` are accepted and ignored; resources are never
    /// renamed or moved.
    pub fn from_json(body: &Value) -> Result<Self, FieldErrors> {
        let mut ex = Extractor::new(body);
        let request = Self {
            arn: ex.string("arn"),
            value: ex.string("value"),
            resource_type: ex.string("resource_type"),
        };
        let _ = ex.string("name");
        let _ = ex.string("namespace");
        ex.finish().into_result(request)
    }

    /// Check limits on the supplied fields.
    pub fn validate(self) -> Result<ResourcePatch, FieldErrors> {
        let mut errors = FieldErrors::new();
        if let Some(arn) = &self.arn {
            check_length(&mut errors, "arn", arn, MAX_ARN_LEN);
        }
        if let Some(value) = &self.value {
            check_length(&mut errors, "value", value, MAX_VALUE_LEN);
        }
        if let Some(resource_type) = &self.resource_type {
            check_length(&mut errors, "resource_type", resource_type, MAX_TYPE_LEN);
        }
        errors.into_result(ResourcePatch {
            arn: self.arn,
            value: self.value,
            resource_type: self.resource_type,
        })
    }
}
