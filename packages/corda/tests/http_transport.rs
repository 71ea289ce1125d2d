use corda_rest::builder::build_request;
use corda_rest::operations;
use corda_rest::{
    CordaError, CordaNode, Credentials, ErrorKind, ExecutionContext, HttpTransport, ResponseBody,
    Resource, StaticParameters, Transport,
};
use mockito::{Matcher, Server};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

const API: &str = "/api/rest/v1";

fn credentials(server: &Server) -> Credentials {
    Credentials::new(format!("{}{}/", server.url(), API), "u", "p")
}

async fn run(
    credentials: &Credentials,
    params: &StaticParameters,
    continue_on_fail: bool,
) -> Result<Vec<corda_rest::OutputRecord>, CordaError> {
    let transport = HttpTransport::new();
    let input = vec![json!({})];
    let ctx = ExecutionContext::new(&input, params, credentials, &transport)
        .continue_on_fail(continue_on_fail);
    CordaNode::new().run(&ctx).await
}

#[tokio::test]
async fn vault_query_sends_default_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/rest/v1/vault/query")
        .match_header("authorization", "Basic dTpw")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Exact(
            r#"{"stateType":"com.example.IOUState","criteria":{},"sorting":{},"paging":{"pageNumber":1,"pageSize":100}}"#
                .to_string(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"states":[],"totalStatesAvailable":0}"#)
        .create_async()
        .await;

    let params = StaticParameters::new()
        .with("resource", "vaultQueries")
        .with("operation", "queryVaultStates")
        .with("stateType", "com.example.IOUState");
    let out = run(&credentials(&server), &params, false).await.unwrap();

    assert_eq!(out[0].json, json!({ "states": [], "totalStatesAvailable": 0 }));
    assert_eq!(out[0].paired_item.item, 0);
    mock.assert_async().await;
}

#[tokio::test]
async fn query_parameters_are_form_encoded() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/rest/v1/tokens/balances")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("tokenType".into(), "USD".into()),
            Matcher::UrlEncoded("holder".into(), "O=PartyA,L=London,C=GB".into()),
        ]))
        .match_header("content-type", Matcher::Missing)
        .with_status(200)
        .with_body(r#"{"balance":1000}"#)
        .create_async()
        .await;

    let params = StaticParameters::new()
        .with("resource", "tokenManagement")
        .with("operation", "getTokenBalances")
        .with("tokenType", "USD")
        .with("holder", "O=PartyA,L=London,C=GB");
    let out = run(&credentials(&server), &params, false).await.unwrap();

    assert_eq!(out[0].json, json!({ "balance": 1000 }));
    mock.assert_async().await;
}

#[tokio::test]
async fn empty_body_becomes_empty_object() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("DELETE", "/api/rest/v1/flows/run-1")
        .with_status(204)
        .create_async()
        .await;

    let params = StaticParameters::new()
        .with("resource", "flowExecution")
        .with("operation", "killFlow")
        .with("runId", "run-1");
    let out = run(&credentials(&server), &params, false).await.unwrap();

    assert_eq!(out[0].json, json!({}));
    mock.assert_async().await;
}

#[tokio::test]
async fn plain_text_body_becomes_string() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/rest/v1/network/parties/me")
        .with_status(200)
        .with_header("content-type", "text/plain")
        .with_body("O=PartyA, L=London, C=GB")
        .create_async()
        .await;

    let params = StaticParameters::new()
        .with("resource", "networkMap")
        .with("operation", "getNodeInfo");
    let out = run(&credentials(&server), &params, false).await.unwrap();

    assert_eq!(out[0].json, json!("O=PartyA, L=London, C=GB"));
}

#[tokio::test]
async fn error_status_aborts_with_status_and_body() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/api/rest/v1/tokens/move")
        .with_status(409)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message":"Insufficient balance"}"#)
        .create_async()
        .await;

    let params = StaticParameters::new()
        .with("resource", "tokenManagement")
        .with("operation", "moveTokens")
        .with("tokenType", "USD")
        .with("amount", 10)
        .with("holder", "O=PartyA,L=London,C=GB")
        .with("newHolder", "O=PartyB,L=New York,C=US");
    let err = run(&credentials(&server), &params, false).await.unwrap_err();

    assert_eq!(err.item(), Some(0));
    assert_eq!(err.status(), Some(409));
    assert_eq!(err.body(), Some(&json!({ "message": "Insufficient balance" })));
    assert_eq!(err.to_string(), "Item 0: Insufficient balance");
}

#[tokio::test]
async fn error_status_is_captured_when_continuing() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/rest/v1/network/notaries")
        .with_status(503)
        .create_async()
        .await;

    let params = StaticParameters::new()
        .with("resource", "networkMap")
        .with("operation", "getNotaries");
    let out = run(&credentials(&server), &params, true).await.unwrap();

    assert_eq!(
        out[0].json,
        json!({ "error": "Request failed with status code 503" })
    );
}

#[tokio::test]
async fn attachment_download_keeps_raw_bytes() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/rest/v1/attachments/ATT-1")
        .with_status(200)
        .with_header("content-type", "application/pdf")
        .with_body(b"%PDF-1.7")
        .create_async()
        .await;

    let params = StaticParameters::new()
        .with("resource", "attachments")
        .with("operation", "getAttachment")
        .with("attachmentId", "ATT-1");
    let out = run(&credentials(&server), &params, false).await.unwrap();

    assert_eq!(
        out[0].json,
        json!({ "attachmentId": "ATT-1", "mimeType": "application/pdf", "fileSize": 8 })
    );
    let binary = out[0].binary.as_ref().unwrap();
    assert_eq!(binary.data, "JVBERi0xLjc=");
    assert_eq!(binary.file_size, 8);
}

#[tokio::test]
async fn upload_sends_multipart_form() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("contract.pdf");
    std::fs::write(&path, b"signed contract").unwrap();

    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/rest/v1/attachments")
        .match_header("authorization", "Basic dTpw")
        .match_header(
            "content-type",
            Matcher::Regex("^multipart/form-data; boundary=".into()),
        )
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#"name="file"; filename="agreement.pdf""#.into()),
            Matcher::Regex("signed contract".into()),
            Matcher::Regex(r#"name="filename""#.into()),
        ]))
        .with_status(200)
        .with_body(r#"{"attachmentId":"ATT-9"}"#)
        .create_async()
        .await;

    let params = StaticParameters::new()
        .with("resource", "attachments")
        .with("operation", "uploadAttachment")
        .with("filePath", path.to_string_lossy().to_string())
        .with("filename", "agreement.pdf");
    let out = run(&credentials(&server), &params, false).await.unwrap();

    assert_eq!(out[0].json, json!({ "attachmentId": "ATT-9" }));
    mock.assert_async().await;
}

#[tokio::test]
async fn unreadable_upload_is_a_record_error() {
    let server = Server::new_async().await;
    let params = StaticParameters::new()
        .with("resource", "attachments")
        .with("operation", "uploadAttachment")
        .with("filePath", "/nonexistent/contract.pdf")
        .with("filename", "contract.pdf");
    let out = run(&credentials(&server), &params, true).await.unwrap();

    assert!(out[0].is_error());
}

#[tokio::test]
async fn verify_sends_pre_serialized_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/rest/v1/attachments/verify")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Exact(r#"{"attachmentId":"ATT-1"}"#.to_string()))
        .with_status(200)
        .with_body(r#"{"valid":true}"#)
        .create_async()
        .await;

    let params = StaticParameters::new()
        .with("resource", "attachments")
        .with("operation", "verifyAttachment")
        .with("attachmentId", "ATT-1");
    let out = run(&credentials(&server), &params, false).await.unwrap();

    assert_eq!(out[0].json, json!({ "valid": true }));
    mock.assert_async().await;
}

#[tokio::test]
async fn transport_can_be_driven_directly() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/rest/v1/flows/completed")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("limit".into(), "100".into()),
            Matcher::UrlEncoded("offset".into(), "0".into()),
        ]))
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let operation = operations::find(Resource::FlowExecution, "getCompletedFlows").unwrap();
    let request = build_request(
        operation,
        &credentials(&server),
        &StaticParameters::new(),
        0,
    )
    .unwrap();
    let response = HttpTransport::new().send(&request).await.unwrap();

    assert_eq!(response, ResponseBody::Json(Value::Array(vec![])));
    mock.assert_async().await;
}

#[tokio::test]
async fn unreachable_gateway_is_a_transport_error() {
    let credentials = Credentials::new("http://127.0.0.1:1/api/rest/v1", "u", "p");
    let params = StaticParameters::new()
        .with("resource", "networkMap")
        .with("operation", "getNetworkNodes");
    let err = run(&credentials, &params, false).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Transport);
    assert_eq!(err.status(), None);
}
