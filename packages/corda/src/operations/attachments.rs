use super::{BodyShape, OperationSpec, ParamKind, ParamLocation::*, ParamSpec, string};
use crate::request::{HttpMethod, ResponseFormat};
use crate::types::Resource;

const ATTACHMENT_ID: ParamSpec = string(
    "attachmentId",
    "Attachment ID",
    "The unique identifier of the attachment",
    Path,
);

pub(super) const OPERATIONS: &[OperationSpec] = &[
    OperationSpec {
        resource: Resource::Attachments,
        name: "uploadAttachment",
        display_name: "Upload Attachment",
        description: "Upload a new attachment file",
        action: "Upload attachment",
        method: HttpMethod::Post,
        path: "/attachments",
        params: &[
            ParamSpec {
                name: "filePath",
                field: Some("file"),
                display_name: "File Path",
                description: "Path to the file to upload as an attachment",
                kind: ParamKind::FilePath,
                location: Body,
                default: None,
            },
            ParamSpec {
                name: "filename",
                field: None,
                display_name: "Filename",
                description: "Name for the uploaded file",
                kind: ParamKind::FileName,
                location: Body,
                default: None,
            },
        ],
        body: BodyShape::Multipart,
        response: ResponseFormat::Json,
    },
    OperationSpec {
        resource: Resource::Attachments,
        name: "getAttachment",
        display_name: "Get Attachment",
        description: "Download an attachment by ID",
        action: "Get attachment",
        method: HttpMethod::Get,
        path: "/attachments/{attachmentId}",
        params: &[ATTACHMENT_ID],
        body: BodyShape::Empty,
        response: ResponseFormat::Bytes,
    },
    OperationSpec {
        resource: Resource::Attachments,
        name: "listAttachments",
        display_name: "List Attachments",
        description: "List all available attachments",
        action: "List attachments",
        method: HttpMethod::Get,
        path: "/attachments",
        params: &[],
        body: BodyShape::Empty,
        response: ResponseFormat::Json,
    },
    OperationSpec {
        resource: Resource::Attachments,
        name: "deleteAttachment",
        display_name: "Delete Attachment",
        description: "Remove an attachment by ID",
        action: "Delete attachment",
        method: HttpMethod::Delete,
        path: "/attachments/{attachmentId}",
        params: &[ATTACHMENT_ID],
        body: BodyShape::Empty,
        response: ResponseFormat::Json,
    },
    OperationSpec {
        resource: Resource::Attachments,
        name: "getAttachmentMetadata",
        display_name: "Get Attachment Metadata",
        description: "Get metadata information for an attachment",
        action: "Get attachment metadata",
        method: HttpMethod::Get,
        path: "/attachments/{attachmentId}/metadata",
        params: &[ATTACHMENT_ID],
        body: BodyShape::Empty,
        response: ResponseFormat::Json,
    },
    OperationSpec {
        resource: Resource::Attachments,
        name: "verifyAttachment",
        display_name: "Verify Attachment",
        description: "Verify the integrity of an attachment",
        action: "Verify attachment",
        method: HttpMethod::Post,
        path: "/attachments/verify",
        params: &[string(
            "attachmentId",
            "Attachment ID",
            "The unique identifier of the attachment to verify",
            Body,
        )],
        // The gateway receives this body as pre-serialized JSON text
        body: BodyShape::SerializedObject,
        response: ResponseFormat::Json,
    },
];
