use super::{BodyShape, OperationSpec, ParamLocation::*, ParamSpec, json, number, string};
use crate::request::{HttpMethod, ResponseFormat};
use crate::types::Resource;

const FLOW_CLASS_NAME: ParamSpec = string(
    "flowClassName",
    "Flow Class Name",
    "The fully qualified class name of the flow to start",
    Path,
);
const FLOW_ARGS: ParamSpec = json(
    "flowArgs",
    "Flow Arguments",
    "Arguments to pass to the flow constructor",
    Body,
    "{}",
);
const RUN_ID: ParamSpec = string("runId", "Run ID", "The flow run identifier", Path);

pub(super) const OPERATIONS: &[OperationSpec] = &[
    OperationSpec {
        resource: Resource::FlowExecution,
        name: "startFlow",
        display_name: "Start Flow",
        description: "Start a new flow execution",
        action: "Start flow",
        method: HttpMethod::Post,
        path: "/flows/{flowClassName}",
        params: &[FLOW_CLASS_NAME, FLOW_ARGS],
        body: BodyShape::Parameter,
        response: ResponseFormat::Json,
    },
    OperationSpec {
        resource: Resource::FlowExecution,
        name: "getCompletedFlows",
        display_name: "Get Completed Flows",
        description: "List completed flow executions",
        action: "Get completed flows",
        method: HttpMethod::Get,
        path: "/flows/completed",
        params: &[
            number(
                "limit",
                "Limit",
                "Maximum number of completed flows to return",
                Query,
                Some(100),
            ),
            number(
                "offset",
                "Offset",
                "Number of completed flows to skip",
                Query,
                Some(0),
            ),
        ],
        body: BodyShape::Empty,
        response: ResponseFormat::Json,
    },
    OperationSpec {
        resource: Resource::FlowExecution,
        name: "getFlowStatus",
        display_name: "Get Flow Status",
        description: "Get status of running flow",
        action: "Get flow status",
        method: HttpMethod::Get,
        path: "/flows/{runId}",
        params: &[RUN_ID],
        body: BodyShape::Empty,
        response: ResponseFormat::Json,
    },
    OperationSpec {
        resource: Resource::FlowExecution,
        name: "getFlowProgress",
        display_name: "Get Flow Progress",
        description: "Get flow execution progress",
        action: "Get flow progress",
        method: HttpMethod::Get,
        path: "/flows/{runId}/progress",
        params: &[RUN_ID],
        body: BodyShape::Empty,
        response: ResponseFormat::Json,
    },
    OperationSpec {
        resource: Resource::FlowExecution,
        name: "killFlow",
        display_name: "Kill Flow",
        description: "Terminate a running flow",
        action: "Kill flow",
        method: HttpMethod::Delete,
        path: "/flows/{runId}",
        params: &[RUN_ID],
        body: BodyShape::Empty,
        response: ResponseFormat::Json,
    },
    OperationSpec {
        resource: Resource::FlowExecution,
        name: "startTrackedFlow",
        display_name: "Start Tracked Flow",
        description: "Start flow with progress tracking",
        action: "Start tracked flow",
        method: HttpMethod::Post,
        path: "/flows/tracked/{flowClassName}",
        params: &[FLOW_CLASS_NAME, FLOW_ARGS],
        body: BodyShape::Parameter,
        response: ResponseFormat::Json,
    },
];
