//! Host-facing catalogue of resources, operations and parameters
//!
//! Built from the operation table, so what the host shows is always what the executor
//! sends.

use crate::credentials::{CREDENTIAL_NAME, DEFAULT_BASE_URL};
use crate::operations::{self, OperationSpec, ParamDefault, ParamKind, ParamSpec};
use crate::request::HttpMethod;
use crate::types::Resource;
use serde::Serialize;
use serde_json::Value;

pub const NODE_NAME: &str = "r3corda";
pub const NODE_DISPLAY_NAME: &str = "R3 Corda";
pub const NODE_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NodeDescription {
    pub display_name: &'static str,
    pub name: &'static str,
    pub version: u32,
    pub description: &'static str,
    pub credentials: Vec<CredentialDescription>,
    pub resources: Vec<ResourceDescription>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CredentialDescription {
    pub name: &'static str,
    pub required: bool,
    pub properties: Vec<CredentialProperty>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CredentialProperty {
    pub name: &'static str,
    pub display_name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<&'static str>,
    pub masked: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResourceDescription {
    pub value: &'static str,
    pub name: &'static str,
    pub default_operation: &'static str,
    pub operations: Vec<OperationDescription>,
    pub parameters: Vec<ParameterDescription>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OperationDescription {
    pub value: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub action: &'static str,
    pub method: HttpMethod,
    pub path: &'static str,
}

/// One input field, shown for the listed operations
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ParameterDescription {
    pub name: &'static str,
    pub display_name: &'static str,
    #[serde(rename = "type")]
    pub kind: ParamKind,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    pub description: &'static str,
    pub operations: Vec<&'static str>,
}

impl ParameterDescription {
    fn from_spec(param: &ParamSpec, operation: &'static str) -> Self {
        Self {
            name: param.name,
            display_name: param.display_name,
            kind: param.kind,
            required: param.required(),
            default: param.default.map(|d| match d {
                ParamDefault::Text(text) => Value::from(text),
                ParamDefault::Number(n) => Value::from(n),
            }),
            description: param.description,
            operations: vec![operation],
        }
    }

    fn same_field(&self, other: &Self) -> bool {
        self.name == other.name
            && self.kind == other.kind
            && self.default == other.default
            && self.description == other.description
    }
}

pub fn node_description() -> NodeDescription {
    NodeDescription {
        display_name: NODE_DISPLAY_NAME,
        name: NODE_NAME,
        version: NODE_VERSION,
        description: "Interact with R3 Corda nodes through the REST gateway",
        credentials: vec![credential_description()],
        resources: Resource::ALL.into_iter().map(resource_description).collect(),
    }
}

fn credential_description() -> CredentialDescription {
    CredentialDescription {
        name: CREDENTIAL_NAME,
        required: true,
        properties: vec![
            CredentialProperty {
                name: "baseUrl",
                display_name: "Base URL",
                default: Some(DEFAULT_BASE_URL),
                masked: false,
            },
            CredentialProperty {
                name: "username",
                display_name: "Username",
                default: None,
                masked: false,
            },
            CredentialProperty {
                name: "password",
                display_name: "Password",
                default: None,
                masked: true,
            },
        ],
    }
}

fn resource_description(resource: Resource) -> ResourceDescription {
    let specs = operations::operations(resource);
    ResourceDescription {
        value: resource.as_str(),
        name: resource.display_name(),
        default_operation: resource.default_operation(),
        operations: specs.iter().map(operation_description).collect(),
        parameters: parameter_descriptions(specs),
    }
}

fn operation_description(op: &OperationSpec) -> OperationDescription {
    OperationDescription {
        value: op.name,
        name: op.display_name,
        description: op.description,
        action: op.action,
        method: op.method,
        path: op.path,
    }
}

/// Identical fields shared by several operations collapse into one entry
fn parameter_descriptions(specs: &'static [OperationSpec]) -> Vec<ParameterDescription> {
    let mut fields: Vec<ParameterDescription> = Vec::new();
    for op in specs {
        for param in op.params {
            let field = ParameterDescription::from_spec(param, op.name);
            match fields.iter_mut().find(|f| f.same_field(&field)) {
                Some(existing) => existing.operations.push(op.name),
                None => fields.push(field),
            }
        }
    }
    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn resource(description: &NodeDescription, value: &str) -> ResourceDescription {
        description
            .resources
            .iter()
            .find(|r| r.value == value)
            .cloned()
            .unwrap()
    }

    #[test]
    fn lists_every_operation() {
        let description = node_description();
        assert_eq!(description.resources.len(), 5);
        let total: usize = description.resources.iter().map(|r| r.operations.len()).sum();
        assert_eq!(total, 30);
    }

    #[test]
    fn shared_fields_collapse() {
        let vault = resource(&node_description(), "vaultQueries");
        let paging = vault.parameters.iter().find(|p| p.name == "paging").unwrap();
        assert_eq!(
            paging.operations,
            vec![
                "queryVaultStates",
                "queryVaultStatesByCriteria",
                "queryConsumableStates",
                "queryVaultTransactions",
            ]
        );
        assert_eq!(
            paging.default,
            Some(json!(r#"{"pageNumber": 1, "pageSize": 100}"#))
        );
        assert!(!paging.required);
    }

    #[test]
    fn numeric_defaults_stay_numbers() {
        let flows = resource(&node_description(), "flowExecution");
        let limit = flows.parameters.iter().find(|p| p.name == "limit").unwrap();
        assert_eq!(limit.default, Some(json!(100)));
        assert_eq!(limit.operations, vec!["getCompletedFlows"]);
    }

    #[test]
    fn serializes_in_host_shape() {
        let value = serde_json::to_value(node_description()).unwrap();
        assert_eq!(value["displayName"], "R3 Corda");
        assert_eq!(value["name"], "r3corda");
        assert_eq!(value["credentials"][0]["name"], "r3CordaApi");
        assert_eq!(value["credentials"][0]["properties"][2]["masked"], true);

        let upload = &value["resources"][4]["parameters"][0];
        assert_eq!(upload["name"], "filePath");
        assert_eq!(upload["type"], "filePath");
        assert_eq!(upload["required"], true);
        assert!(upload.get("default").is_none());
    }
}
