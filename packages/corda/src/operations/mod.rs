//! Declarative operation table
//!
//! Every (resource, operation) pair is described once here: HTTP method, path template,
//! the parameters it reads (with kind, location and default) and how the body is shaped.
//! The builder interprets these entries; nothing else in the crate knows a gateway path.

mod attachments;
mod flows;
mod network;
mod tokens;
mod vault;

use crate::error::{CordaError, CordaResult};
use crate::request::{HttpMethod, ResponseFormat};
use crate::types::Resource;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ParamKind {
    String,
    Number,
    /// JSON text parsed before use
    Json,
    /// Local file path, read by the transport
    FilePath,
    /// Name the uploaded file is sent under
    FileName,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ParamLocation {
    /// Substituted into `{name}` in the path, percent-encoded
    Path,
    Query,
    Body,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ParamDefault {
    Text(&'static str),
    Number(i64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyShape {
    Empty,
    /// Body parameters collected into a JSON object, in declaration order
    Object,
    /// Like `Object`, but serialized to JSON text before it reaches the transport
    SerializedObject,
    /// The single body parameter is the whole body
    Parameter,
    /// Body parameters sent as multipart form fields
    Multipart,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    pub name: &'static str,
    /// Key used on the wire, when it differs from `name`
    pub field: Option<&'static str>,
    pub display_name: &'static str,
    pub description: &'static str,
    pub kind: ParamKind,
    pub location: ParamLocation,
    /// `None` means required
    pub default: Option<ParamDefault>,
}

impl ParamSpec {
    pub fn wire_name(&self) -> &'static str {
        self.field.unwrap_or(self.name)
    }

    pub fn required(&self) -> bool {
        self.default.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationSpec {
    pub resource: Resource,
    pub name: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
    pub action: &'static str,
    pub method: HttpMethod,
    pub path: &'static str,
    pub params: &'static [ParamSpec],
    pub body: BodyShape,
    pub response: ResponseFormat,
}

impl OperationSpec {
    pub fn params_at(&self, location: ParamLocation) -> impl Iterator<Item = &'static ParamSpec> {
        self.params.iter().filter(move |p| p.location == location)
    }
}

pub(crate) const fn string(
    name: &'static str,
    display_name: &'static str,
    description: &'static str,
    location: ParamLocation,
) -> ParamSpec {
    ParamSpec {
        name,
        field: None,
        display_name,
        description,
        kind: ParamKind::String,
        location,
        default: None,
    }
}

pub(crate) const fn json(
    name: &'static str,
    display_name: &'static str,
    description: &'static str,
    location: ParamLocation,
    default: &'static str,
) -> ParamSpec {
    ParamSpec {
        name,
        field: None,
        display_name,
        description,
        kind: ParamKind::Json,
        location,
        default: Some(ParamDefault::Text(default)),
    }
}

pub(crate) const fn number(
    name: &'static str,
    display_name: &'static str,
    description: &'static str,
    location: ParamLocation,
    default: Option<i64>,
) -> ParamSpec {
    ParamSpec {
        name,
        field: None,
        display_name,
        description,
        kind: ParamKind::Number,
        location,
        default: match default {
            Some(n) => Some(ParamDefault::Number(n)),
            None => None,
        },
    }
}

/// Operations of one resource, in display order
pub fn operations(resource: Resource) -> &'static [OperationSpec] {
    match resource {
        Resource::VaultQueries => vault::OPERATIONS,
        Resource::FlowExecution => flows::OPERATIONS,
        Resource::TokenManagement => tokens::OPERATIONS,
        Resource::NetworkMap => network::OPERATIONS,
        Resource::Attachments => attachments::OPERATIONS,
    }
}

pub fn all() -> impl Iterator<Item = &'static OperationSpec> {
    Resource::ALL.into_iter().flat_map(operations)
}

pub fn find(resource: Resource, operation: &str) -> CordaResult<&'static OperationSpec> {
    operations(resource)
        .iter()
        .find(|op| op.name == operation)
        .ok_or_else(|| CordaError::UnsupportedOperation {
            resource: resource.as_str().to_string(),
            operation: operation.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn table_has_thirty_unique_operations() {
        let names: HashSet<_> = all().map(|op| op.name).collect();
        assert_eq!(all().count(), 30);
        assert_eq!(names.len(), 30);
        for resource in Resource::ALL {
            assert_eq!(operations(resource).len(), 6, "{}", resource);
            assert!(operations(resource).iter().all(|op| op.resource == resource));
            assert!(find(resource, resource.default_operation()).is_ok());
        }
    }

    #[test]
    fn operations_are_scoped_to_their_resource() {
        assert!(find(Resource::FlowExecution, "startFlow").is_ok());
        let err = find(Resource::VaultQueries, "startFlow").unwrap_err();
        assert!(matches!(
            err,
            CordaError::UnsupportedOperation { ref resource, ref operation }
                if resource == "vaultQueries" && operation == "startFlow"
        ));
    }

    #[test]
    fn path_placeholders_match_path_params() {
        for op in all() {
            for param in op.params_at(ParamLocation::Path) {
                let placeholder = format!("{{{}}}", param.name);
                assert!(op.path.contains(&placeholder), "{} {}", op.name, param.name);
                assert!(param.required(), "{} {}", op.name, param.name);
            }
            let placeholders = op.path.matches('{').count();
            assert_eq!(placeholders, op.params_at(ParamLocation::Path).count(), "{}", op.name);
        }
    }

    #[test]
    fn body_shapes_are_consistent() {
        for op in all() {
            let body_params = op.params_at(ParamLocation::Body).count();
            match op.body {
                BodyShape::Empty => assert_eq!(body_params, 0, "{}", op.name),
                BodyShape::Parameter => assert_eq!(body_params, 1, "{}", op.name),
                _ => assert!(body_params > 0, "{}", op.name),
            }
            if op.method == HttpMethod::Get {
                assert_eq!(op.body, BodyShape::Empty, "{}", op.name);
            }
        }
    }
}
