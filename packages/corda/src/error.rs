//! Error taxonomy for the adapter

use serde_json::Value;

/// Result type for adapter operations
pub type CordaResult<T> = Result<T, CordaError>;

/// Coarse classification of a [`CordaError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad or missing parameter, including malformed JSON text
    Parameter,
    /// Network failure or non-success HTTP status
    Transport,
    /// Resource or operation not known to the adapter
    Unsupported,
    /// Credentials could not be resolved
    Credentials,
}

#[derive(Debug, thiserror::Error)]
pub enum CordaError {
    #[error("The resource \"{0}\" is not supported")]
    UnsupportedResource(String),

    #[error("The operation \"{operation}\" is not supported for resource \"{resource}\"")]
    UnsupportedOperation { resource: String, operation: String },

    #[error("Failed to resolve credentials: {0}")]
    Credentials(String),

    #[error("Missing required parameter \"{name}\"")]
    MissingParameter { name: String },

    #[error("Invalid value for parameter \"{name}\": {reason}")]
    InvalidParameter { name: String, reason: String },

    #[error("Invalid JSON in parameter \"{name}\": {message}")]
    InvalidParameterJson { name: String, message: String },

    /// The gateway answered with a non-success status
    #[error("{message}")]
    RemoteApi {
        status: u16,
        body: Option<Value>,
        message: String,
    },

    /// No structured response was received (connection refused, DNS, unreadable file...)
    #[error("{0}")]
    TransportFailure(String),

    /// A per-record error that aborted the batch
    #[error("Item {item}: {source}")]
    Item {
        item: usize,
        #[source]
        source: Box<CordaError>,
    },
}

impl CordaError {
    pub fn missing_parameter(name: impl Into<String>) -> Self {
        CordaError::MissingParameter { name: name.into() }
    }

    pub fn invalid_parameter(name: impl Into<String>, reason: impl Into<String>) -> Self {
        CordaError::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_json(name: impl Into<String>, source: &serde_json::Error) -> Self {
        CordaError::InvalidParameterJson {
            name: name.into(),
            message: source.to_string(),
        }
    }

    /// Build a remote API error, preferring the gateway's own `message` field
    pub fn remote_api(status: u16, body: Option<Value>) -> Self {
        let message = body
            .as_ref()
            .and_then(|b| b.get("message"))
            .and_then(|m| m.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| format!("Request failed with status code {}", status));

        CordaError::RemoteApi {
            status,
            body,
            message,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            CordaError::UnsupportedResource(_) | CordaError::UnsupportedOperation { .. } => {
                ErrorKind::Unsupported
            }
            CordaError::Credentials(_) => ErrorKind::Credentials,
            CordaError::MissingParameter { .. }
            | CordaError::InvalidParameter { .. }
            | CordaError::InvalidParameterJson { .. } => ErrorKind::Parameter,
            CordaError::RemoteApi { .. } | CordaError::TransportFailure(_) => ErrorKind::Transport,
            CordaError::Item { source, .. } => source.kind(),
        }
    }

    /// Whether this error may be captured into a single record's output
    pub fn is_record_error(&self) -> bool {
        matches!(self.kind(), ErrorKind::Parameter | ErrorKind::Transport)
    }

    /// HTTP status code, when the gateway answered
    pub fn status(&self) -> Option<u16> {
        match self {
            CordaError::RemoteApi { status, .. } => Some(*status),
            CordaError::Item { source, .. } => source.status(),
            _ => None,
        }
    }

    /// Response body, when the gateway answered with one
    pub fn body(&self) -> Option<&Value> {
        match self {
            CordaError::RemoteApi { body, .. } => body.as_ref(),
            CordaError::Item { source, .. } => source.body(),
            _ => None,
        }
    }

    /// Index of the record that aborted the batch
    pub fn item(&self) -> Option<usize> {
        match self {
            CordaError::Item { item, .. } => Some(*item),
            _ => None,
        }
    }

    pub(crate) fn at_item(self, item: usize) -> Self {
        CordaError::Item {
            item,
            source: Box::new(self),
        }
    }
}
