//! Entry point the host calls with a whole batch

use crate::description::{NodeDescription, node_description};
use crate::error::CordaResult;
use crate::executor::{ExecutionContext, ResourceExecutor};
use crate::parameters::read_string;
use crate::types::{OutputRecord, Resource};

/// Routes a batch to the executor of the selected resource
#[derive(Debug, Clone, Copy, Default)]
pub struct CordaNode;

impl CordaNode {
    pub fn new() -> Self {
        Self
    }

    pub fn description(&self) -> NodeDescription {
        node_description()
    }

    /// `resource` is read once, at record 0, and selects the executor for every record
    pub async fn run(&self, ctx: &ExecutionContext<'_>) -> CordaResult<Vec<OutputRecord>> {
        let resource: Resource = read_string(
            ctx.parameters,
            "resource",
            0,
            Some(Resource::default().as_str()),
        )?
        .parse()?;

        tracing::debug!(resource = %resource, "Routing batch");
        ResourceExecutor::new(resource).execute(ctx).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::Credentials;
    use crate::error::CordaError;
    use crate::parameters::StaticParameters;
    use crate::request::HttpMethod;
    use crate::transport::testing::RecordingTransport;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    fn creds() -> Credentials {
        Credentials::new("https://corda.example.com/api/rest/v1", "u", "p")
    }

    #[tokio::test]
    async fn routes_to_the_selected_resource() {
        let transport = RecordingTransport::new();
        let params = StaticParameters::new()
            .with("resource", "tokenManagement")
            .with("operation", "getTokenBalances")
            .with("tokenType", "USD")
            .with("holder", "O=PartyA,L=London,C=GB");
        let input = vec![json!({})];
        let credentials = creds();
        let ctx = ExecutionContext::new(&input, &params, &credentials, &transport);

        let out = CordaNode::new().run(&ctx).await.unwrap();

        assert_eq!(out.len(), 1);
        let sent = transport.requests();
        assert_eq!(sent[0].method, HttpMethod::Get);
        assert_eq!(
            sent[0].target(),
            "https://corda.example.com/api/rest/v1/tokens/balances?tokenType=USD&holder=O%3DPartyA%2CL%3DLondon%2CC%3DGB"
        );
    }

    #[tokio::test]
    async fn missing_resource_defaults_to_vault_queries() {
        let transport = RecordingTransport::new();
        let params = StaticParameters::new().with("stateType", "com.example.IOUState");
        let input = vec![json!({})];
        let credentials = creds();
        let ctx = ExecutionContext::new(&input, &params, &credentials, &transport);

        CordaNode::new().run(&ctx).await.unwrap();

        assert_eq!(
            transport.requests()[0].url,
            "https://corda.example.com/api/rest/v1/vault/query"
        );
    }

    #[tokio::test]
    async fn unknown_resource_is_fatal() {
        let transport = RecordingTransport::new();
        let params = StaticParameters::new().with("resource", "ledgerMagic");
        let input: Vec<Value> = vec![json!({}), json!({})];
        let credentials = creds();
        let ctx = ExecutionContext::new(&input, &params, &credentials, &transport)
            .continue_on_fail(true);

        let err = CordaNode::new().run(&ctx).await.unwrap_err();

        assert!(matches!(err, CordaError::UnsupportedResource(ref r) if r == "ledgerMagic"));
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn operation_from_another_resource_is_rejected() {
        let transport = RecordingTransport::new();
        let params = StaticParameters::new()
            .with("resource", "networkMap")
            .with("operation", "queryVaultStates");
        let input = vec![json!({})];
        let credentials = creds();
        let ctx = ExecutionContext::new(&input, &params, &credentials, &transport);

        let err = CordaNode::new().run(&ctx).await.unwrap_err();

        assert_eq!(
            err.to_string(),
            "The operation \"queryVaultStates\" is not supported for resource \"networkMap\""
        );
        assert_eq!(transport.calls(), 0);
    }
}
