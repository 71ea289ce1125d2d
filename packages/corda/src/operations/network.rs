use super::{BodyShape, OperationSpec, ParamLocation::*, string};
use crate::request::{HttpMethod, ResponseFormat};
use crate::types::Resource;

pub(super) const OPERATIONS: &[OperationSpec] = &[
    OperationSpec {
        resource: Resource::NetworkMap,
        name: "getNetworkNodes",
        display_name: "Get Network Nodes",
        description: "List all network nodes",
        action: "Get network nodes",
        method: HttpMethod::Get,
        path: "/network/nodes",
        params: &[],
        body: BodyShape::Empty,
        response: ResponseFormat::Json,
    },
    OperationSpec {
        resource: Resource::NetworkMap,
        name: "getNetworkNode",
        display_name: "Get Network Node",
        description: "Get specific party information",
        action: "Get network node",
        method: HttpMethod::Get,
        path: "/network/nodes/{party}",
        params: &[string(
            "party",
            "Party Name",
            "The party identifier to get information for",
            Path,
        )],
        body: BodyShape::Empty,
        response: ResponseFormat::Json,
    },
    OperationSpec {
        resource: Resource::NetworkMap,
        name: "getNetworkParties",
        display_name: "Get Network Parties",
        description: "List all known parties",
        action: "Get network parties",
        method: HttpMethod::Get,
        path: "/network/parties",
        params: &[],
        body: BodyShape::Empty,
        response: ResponseFormat::Json,
    },
    OperationSpec {
        resource: Resource::NetworkMap,
        name: "getNodeInfo",
        display_name: "Get Node Info",
        description: "Get current node information",
        action: "Get node info",
        method: HttpMethod::Get,
        path: "/network/parties/me",
        params: &[],
        body: BodyShape::Empty,
        response: ResponseFormat::Json,
    },
    OperationSpec {
        resource: Resource::NetworkMap,
        name: "getNotaries",
        display_name: "Get Notaries",
        description: "List available notary services",
        action: "Get notaries",
        method: HttpMethod::Get,
        path: "/network/notaries",
        params: &[],
        body: BodyShape::Empty,
        response: ResponseFormat::Json,
    },
    OperationSpec {
        resource: Resource::NetworkMap,
        name: "lookupPartyByName",
        display_name: "Lookup Party By Name",
        description: "Find party by X.500 name",
        action: "Lookup party by name",
        method: HttpMethod::Post,
        path: "/network/parties/lookup",
        params: &[string(
            "name",
            "X.500 Name",
            "The X.500 distinguished name to search for",
            Body,
        )],
        body: BodyShape::Object,
        response: ResponseFormat::Json,
    },
];
