use super::{BodyShape, OperationSpec, ParamLocation::*, ParamSpec, json, number, string};
use crate::request::{HttpMethod, ResponseFormat};
use crate::types::Resource;

const TOKEN_TYPE: ParamSpec = string(
    "tokenType",
    "Token Type",
    "The type of token to operate on",
    Body,
);
const AMOUNT: ParamSpec = number(
    "amount",
    "Amount",
    "The amount of tokens to operate on",
    Body,
    None,
);
const HOLDER: ParamSpec = string(
    "holder",
    "Holder",
    "The party that holds the tokens",
    Body,
);

pub(super) const OPERATIONS: &[OperationSpec] = &[
    OperationSpec {
        resource: Resource::TokenManagement,
        name: "issueTokens",
        display_name: "Issue Tokens",
        description: "Issue new tokens",
        action: "Issue new tokens",
        method: HttpMethod::Post,
        path: "/tokens/issue",
        params: &[
            TOKEN_TYPE,
            AMOUNT,
            HOLDER,
            string(
                "notary",
                "Notary",
                "The notary node for the transaction",
                Body,
            ),
        ],
        body: BodyShape::Object,
        response: ResponseFormat::Json,
    },
    OperationSpec {
        resource: Resource::TokenManagement,
        name: "moveTokens",
        display_name: "Move Tokens",
        description: "Transfer tokens between parties",
        action: "Transfer tokens between parties",
        method: HttpMethod::Post,
        path: "/tokens/move",
        params: &[
            TOKEN_TYPE,
            AMOUNT,
            HOLDER,
            string(
                "newHolder",
                "New Holder",
                "The party to receive the tokens",
                Body,
            ),
        ],
        body: BodyShape::Object,
        response: ResponseFormat::Json,
    },
    OperationSpec {
        resource: Resource::TokenManagement,
        name: "redeemTokens",
        display_name: "Redeem Tokens",
        description: "Redeem/burn existing tokens",
        action: "Redeem/burn existing tokens",
        method: HttpMethod::Post,
        path: "/tokens/redeem",
        params: &[
            TOKEN_TYPE,
            AMOUNT,
            string("issuer", "Issuer", "The token issuer party", Body),
        ],
        body: BodyShape::Object,
        response: ResponseFormat::Json,
    },
    OperationSpec {
        resource: Resource::TokenManagement,
        name: "getTokenBalances",
        display_name: "Get Token Balances",
        description: "Query token balances",
        action: "Query token balances",
        method: HttpMethod::Get,
        path: "/tokens/balances",
        params: &[
            string(
                "tokenType",
                "Token Type",
                "The type of token to operate on",
                Query,
            ),
            string("holder", "Holder", "The party that holds the tokens", Query),
        ],
        body: BodyShape::Empty,
        response: ResponseFormat::Json,
    },
    OperationSpec {
        resource: Resource::TokenManagement,
        name: "queryTokenBalances",
        display_name: "Query Token Balances",
        description: "Advanced token balance queries",
        action: "Advanced token balance queries",
        method: HttpMethod::Post,
        path: "/tokens/balances/query",
        params: &[
            json(
                "criteria",
                "Criteria",
                "Advanced query criteria as JSON object",
                Body,
                "{}",
            ),
            TOKEN_TYPE,
        ],
        body: BodyShape::Object,
        response: ResponseFormat::Json,
    },
    OperationSpec {
        resource: Resource::TokenManagement,
        name: "getTokenTypes",
        display_name: "Get Token Types",
        description: "List available token types",
        action: "List available token types",
        method: HttpMethod::Get,
        path: "/tokens/types",
        params: &[
            number(
                "limit",
                "Limit",
                "Maximum number of token types to return",
                Query,
                Some(50),
            ),
            number(
                "offset",
                "Offset",
                "Number of token types to skip",
                Query,
                Some(0),
            ),
        ],
        body: BodyShape::Empty,
        response: ResponseFormat::Json,
    },
];
