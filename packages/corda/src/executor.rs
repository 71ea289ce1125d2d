//! The batch loop shared by every resource

use crate::builder::{ResolvedParameters, render, resolve_parameters};
use crate::credentials::{CredentialResolver, Credentials};
use crate::error::CordaResult;
use crate::operations::{self, OperationSpec};
use crate::parameters::{ParameterSource, read_string};
use crate::transport::{ResponseBody, Transport};
use crate::types::{BinaryData, OutputRecord, Resource};
use base64::Engine;
use serde_json::{Value, json};

const OCTET_STREAM: &str = "application/octet-stream";

/// Everything the host hands over for one batch
pub struct ExecutionContext<'a> {
    pub items: &'a [Value],
    pub parameters: &'a dyn ParameterSource,
    pub credentials: &'a dyn CredentialResolver,
    pub transport: &'a dyn Transport,
    pub continue_on_fail: bool,
}

impl<'a> ExecutionContext<'a> {
    pub fn new(
        items: &'a [Value],
        parameters: &'a dyn ParameterSource,
        credentials: &'a dyn CredentialResolver,
        transport: &'a dyn Transport,
    ) -> Self {
        Self {
            items,
            parameters,
            credentials,
            transport,
            continue_on_fail: false,
        }
    }

    pub fn continue_on_fail(mut self, enabled: bool) -> Self {
        self.continue_on_fail = enabled;
        self
    }
}

/// Runs a batch against the operations of one resource
#[derive(Debug, Clone, Copy)]
pub struct ResourceExecutor {
    resource: Resource,
}

impl ResourceExecutor {
    pub fn new(resource: Resource) -> Self {
        Self { resource }
    }

    pub fn resource(&self) -> Resource {
        self.resource
    }

    /// Read `operation` once, resolve credentials once, then process records in order.
    ///
    /// Output `i` always belongs to input `i`. Without `continue_on_fail` the first
    /// record error aborts the batch as [`CordaError::Item`](crate::CordaError::Item).
    pub async fn execute(&self, ctx: &ExecutionContext<'_>) -> CordaResult<Vec<OutputRecord>> {
        let name = read_string(
            ctx.parameters,
            "operation",
            0,
            Some(self.resource.default_operation()),
        )?;
        let operation = operations::find(self.resource, &name)?;
        let credentials = ctx.credentials.resolve().await?;

        tracing::info!(
            resource = %self.resource,
            operation = operation.name,
            items = ctx.items.len(),
            "Executing Corda operation"
        );

        let mut outputs = Vec::with_capacity(ctx.items.len());
        let mut failed = 0usize;
        for item in 0..ctx.items.len() {
            match self.execute_item(operation, &credentials, ctx, item).await {
                Ok(record) => outputs.push(record),
                Err(error) if ctx.continue_on_fail => {
                    tracing::warn!(
                        resource = %self.resource,
                        operation = operation.name,
                        item,
                        "Record failed, continuing: {}",
                        error
                    );
                    failed += 1;
                    outputs.push(OutputRecord::failure(item, &error));
                }
                Err(error) => {
                    tracing::error!(
                        resource = %self.resource,
                        operation = operation.name,
                        item,
                        "Batch aborted: {}",
                        error
                    );
                    return Err(error.at_item(item));
                }
            }
        }

        tracing::info!(
            resource = %self.resource,
            operation = operation.name,
            records = outputs.len(),
            failed,
            "Corda operation finished"
        );
        Ok(outputs)
    }

    async fn execute_item(
        &self,
        operation: &'static OperationSpec,
        credentials: &Credentials,
        ctx: &ExecutionContext<'_>,
        item: usize,
    ) -> CordaResult<OutputRecord> {
        let values = resolve_parameters(operation, ctx.parameters, item)?;
        let request = render(operation, credentials, &values);

        tracing::debug!(
            resource = %self.resource,
            operation = operation.name,
            item,
            method = %request.method,
            url = %request.url,
            "Sending request"
        );

        let response = ctx.transport.send(&request).await?;
        Ok(match response {
            ResponseBody::Json(json) => OutputRecord::success(item, json),
            ResponseBody::Bytes { data, content_type } => {
                let mime_type = content_type.unwrap_or_else(|| OCTET_STREAM.to_string());
                let summary = json!({
                    "attachmentId": parameter_text(&values, "attachmentId"),
                    "mimeType": mime_type,
                    "fileSize": data.len(),
                });
                let binary = BinaryData {
                    data: base64::engine::general_purpose::STANDARD.encode(&data),
                    mime_type,
                    file_size: data.len(),
                };
                OutputRecord::binary(item, summary, binary)
            }
        })
    }
}

fn parameter_text(values: &ResolvedParameters, name: &str) -> Value {
    values
        .iter()
        .find(|(param, _)| param.name == name)
        .map(|(_, value)| value.clone())
        .unwrap_or(Value::Null)
}
