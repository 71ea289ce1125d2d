//! Transport seam and the reqwest-backed implementation

use crate::config::AdapterConfig;
use crate::error::CordaError;
use crate::request::{FormField, HttpMethod, RequestBody, RequestDescriptor, ResponseFormat};
use async_trait::async_trait;
use bytes::Bytes;
use serde_json::{Value, json};

/// Decoded response of a successful call
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Json(Value),
    Bytes {
        data: Bytes,
        content_type: Option<String>,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The gateway answered with a non-success status
    #[error("Request failed with status code {status}")]
    Status { status: u16, body: Option<Value> },

    /// No response was received
    #[error("{0}")]
    Failure(String),
}

impl From<TransportError> for CordaError {
    fn from(e: TransportError) -> Self {
        match e {
            TransportError::Status { status, body } => CordaError::remote_api(status, body),
            TransportError::Failure(message) => CordaError::TransportFailure(message),
        }
    }
}

/// Executes one request descriptor. Implementations must not retry.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &RequestDescriptor) -> Result<ResponseBody, TransportError>;
}

/// Transport backed by a shared `reqwest::Client`
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    pub fn from_config(config: &AdapterConfig) -> Result<Self, CordaError> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| {
            CordaError::TransportFailure(format!("Failed to build HTTP client: {}", e))
        })?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: &RequestDescriptor) -> Result<ResponseBody, TransportError> {
        let method = match request.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.client.request(method, request.target());
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        builder = match &request.body {
            None => builder,
            Some(RequestBody::Json(value)) => {
                let bytes = serde_json::to_vec(value)
                    .map_err(|e| TransportError::Failure(format!("Failed to encode body: {}", e)))?;
                builder.body(bytes)
            }
            Some(RequestBody::JsonText(text)) => builder.body(text.clone()),
            Some(RequestBody::Multipart(fields)) => {
                builder.multipart(multipart_form(fields).await?)
            }
        };

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError::Failure(e.to_string()))?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let data = response
            .bytes()
            .await
            .map_err(|e| TransportError::Failure(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            let body = if data.is_empty() {
                None
            } else {
                Some(decode_json(&data))
            };
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(match request.response {
            ResponseFormat::Json if data.is_empty() => ResponseBody::Json(json!({})),
            ResponseFormat::Json => ResponseBody::Json(decode_json(&data)),
            ResponseFormat::Bytes => ResponseBody::Bytes { data, content_type },
        })
    }
}

/// JSON when the payload parses, otherwise the raw text
fn decode_json(data: &[u8]) -> Value {
    serde_json::from_slice(data)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(data).into_owned()))
}

async fn multipart_form(fields: &[FormField]) -> Result<reqwest::multipart::Form, TransportError> {
    let mut form = reqwest::multipart::Form::new();
    for field in fields {
        form = match field {
            FormField::Text { name, value } => form.text(name.clone(), value.clone()),
            FormField::File {
                name,
                path,
                file_name,
            } => {
                let data = tokio::fs::read(path).await.map_err(|e| {
                    TransportError::Failure(format!("Failed to read file {}: {}", path, e))
                })?;
                let part = reqwest::multipart::Part::bytes(data).file_name(file_name.clone());
                form.part(name.clone(), part)
            }
        };
    }
    Ok(form)
}
