use super::{BodyShape, OperationSpec, ParamLocation::*, ParamSpec, json, string};
use crate::request::{HttpMethod, ResponseFormat};
use crate::types::Resource;

const DEFAULT_PAGING: &str = r#"{"pageNumber": 1, "pageSize": 100}"#;

const STATE_TYPE: ParamSpec = string(
    "stateType",
    "State Type",
    "The contract state type to query",
    Body,
);
const CONTRACT_STATE_TYPE: ParamSpec = string(
    "contractStateType",
    "Contract State Type",
    "The fully qualified contract state class name",
    Body,
);
const CRITERIA: ParamSpec = json(
    "criteria",
    "Criteria",
    "Query criteria as JSON object",
    Body,
    "{}",
);
const SORTING: ParamSpec = json(
    "sorting",
    "Sorting",
    "Sorting specification as JSON object",
    Body,
    "{}",
);
const PAGING: ParamSpec = json(
    "paging",
    "Paging",
    "Paging specification as JSON object",
    Body,
    DEFAULT_PAGING,
);

pub(super) const OPERATIONS: &[OperationSpec] = &[
    OperationSpec {
        resource: Resource::VaultQueries,
        name: "queryVaultStates",
        display_name: "Query Vault States",
        description: "Query vault states with criteria",
        action: "Query vault states",
        method: HttpMethod::Post,
        path: "/vault/query",
        params: &[STATE_TYPE, CRITERIA, SORTING, PAGING],
        body: BodyShape::Object,
        response: ResponseFormat::Json,
    },
    OperationSpec {
        resource: Resource::VaultQueries,
        name: "queryVaultStatesByCriteria",
        display_name: "Query Vault States By Criteria",
        description: "Advanced vault state queries",
        action: "Query vault states by criteria",
        method: HttpMethod::Post,
        path: "/vault/query/by/criteria",
        params: &[CONTRACT_STATE_TYPE, CRITERIA, SORTING, PAGING],
        body: BodyShape::Object,
        response: ResponseFormat::Json,
    },
    OperationSpec {
        resource: Resource::VaultQueries,
        name: "getVaultState",
        display_name: "Get Vault State",
        description: "Retrieve specific vault state",
        action: "Get vault state",
        method: HttpMethod::Get,
        path: "/vault/states/{stateRef}",
        params: &[string(
            "stateRef",
            "State Reference",
            "The state reference identifier",
            Path,
        )],
        body: BodyShape::Empty,
        response: ResponseFormat::Json,
    },
    OperationSpec {
        resource: Resource::VaultQueries,
        name: "queryConsumableStates",
        display_name: "Query Consumable States",
        description: "Query unconsumed states",
        action: "Query consumable states",
        method: HttpMethod::Post,
        path: "/vault/query/consumable",
        params: &[STATE_TYPE, CRITERIA, SORTING, PAGING],
        body: BodyShape::Object,
        response: ResponseFormat::Json,
    },
    OperationSpec {
        resource: Resource::VaultQueries,
        name: "queryVaultTransactions",
        display_name: "Query Vault Transactions",
        description: "Query vault transactions",
        action: "Query vault transactions",
        method: HttpMethod::Post,
        path: "/vault/transactions",
        params: &[CRITERIA, SORTING, PAGING],
        body: BodyShape::Object,
        response: ResponseFormat::Json,
    },
    OperationSpec {
        resource: Resource::VaultQueries,
        name: "getVaultTransaction",
        display_name: "Get Vault Transaction",
        description: "Get specific transaction",
        action: "Get vault transaction",
        method: HttpMethod::Get,
        path: "/vault/transactions/{txnId}",
        params: &[string(
            "txnId",
            "Transaction ID",
            "The transaction identifier",
            Path,
        )],
        body: BodyShape::Empty,
        response: ResponseFormat::Json,
    },
];
