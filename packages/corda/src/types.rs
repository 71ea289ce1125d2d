//! Resource identifiers and output records

use crate::error::CordaError;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Top-level category of gateway operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Resource {
    VaultQueries,
    FlowExecution,
    TokenManagement,
    NetworkMap,
    Attachments,
}

impl Resource {
    pub const ALL: [Resource; 5] = [
        Resource::VaultQueries,
        Resource::FlowExecution,
        Resource::TokenManagement,
        Resource::NetworkMap,
        Resource::Attachments,
    ];

    /// Identifier used by the host for this resource
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VaultQueries => "vaultQueries",
            Self::FlowExecution => "flowExecution",
            Self::TokenManagement => "tokenManagement",
            Self::NetworkMap => "networkMap",
            Self::Attachments => "attachments",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::VaultQueries => "VaultQueries",
            Self::FlowExecution => "FlowExecution",
            Self::TokenManagement => "TokenManagement",
            Self::NetworkMap => "NetworkMap",
            Self::Attachments => "Attachments",
        }
    }

    /// Operation selected when the host does not supply one
    pub fn default_operation(&self) -> &'static str {
        match self {
            Self::VaultQueries => "queryVaultStates",
            Self::FlowExecution => "startFlow",
            Self::TokenManagement => "issueTokens",
            Self::NetworkMap => "getNetworkNodes",
            Self::Attachments => "uploadAttachment",
        }
    }
}

impl Default for Resource {
    fn default() -> Self {
        Resource::VaultQueries
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Resource {
    type Err = CordaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Resource::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| CordaError::UnsupportedResource(s.to_string()))
    }
}

/// Back-reference from an output record to its input record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairedItem {
    pub item: usize,
}

/// Raw payload for operations that return bytes instead of JSON
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BinaryData {
    /// Base64 encoded content
    pub data: String,
    pub mime_type: String,
    pub file_size: usize,
}

/// One entry of the batch result, always at the same position as its input record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputRecord {
    pub json: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub binary: Option<BinaryData>,
    pub paired_item: PairedItem,
    /// Set only by [`OutputRecord::failure`]; not part of the wire shape
    #[serde(skip)]
    failed: bool,
}

impl OutputRecord {
    pub fn success(item: usize, json: Value) -> Self {
        Self {
            json,
            binary: None,
            paired_item: PairedItem { item },
            failed: false,
        }
    }

    pub fn binary(item: usize, json: Value, binary: BinaryData) -> Self {
        Self {
            json,
            binary: Some(binary),
            paired_item: PairedItem { item },
            failed: false,
        }
    }

    pub fn failure(item: usize, error: &CordaError) -> Self {
        Self {
            json: json!({ "error": error.to_string() }),
            binary: None,
            paired_item: PairedItem { item },
            failed: true,
        }
    }

    /// Whether this record captures a failure rather than a gateway response
    pub fn is_error(&self) -> bool {
        self.failed
    }
}
