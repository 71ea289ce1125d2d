//! Request construction
//!
//! Interprets an [`OperationSpec`] against one record's parameters. Pure: the same
//! operation, parameters and credentials always yield an identical descriptor.

use crate::credentials::Credentials;
use crate::error::CordaResult;
use crate::operations::{
    BodyShape, OperationSpec, ParamDefault, ParamKind, ParamLocation, ParamSpec,
};
use crate::parameters::{ParameterSource, read_json, read_number, read_string};
use crate::request::{
    CONTENT_TYPE_JSON, FormField, RequestBody, RequestDescriptor, encode_path_segment,
};
use serde_json::{Map, Value};

/// Parameter values for one record, in declaration order
pub type ResolvedParameters = Vec<(&'static ParamSpec, Value)>;

/// Read every parameter the operation declares, applying defaults and parsing JSON text
pub fn resolve_parameters(
    operation: &OperationSpec,
    source: &dyn ParameterSource,
    item: usize,
) -> CordaResult<ResolvedParameters> {
    operation
        .params
        .iter()
        .map(|param| {
            let value = match param.kind {
                ParamKind::String | ParamKind::FilePath | ParamKind::FileName => {
                    Value::String(read_string(source, param.name, item, text_default(param))?)
                }
                ParamKind::Number => read_number(source, param.name, item, number_default(param))?,
                ParamKind::Json => read_json(source, param.name, item, text_default(param))?,
            };
            Ok((param, value))
        })
        .collect()
}

pub fn build_request(
    operation: &OperationSpec,
    credentials: &Credentials,
    source: &dyn ParameterSource,
    item: usize,
) -> CordaResult<RequestDescriptor> {
    let values = resolve_parameters(operation, source, item)?;
    Ok(render(operation, credentials, &values))
}

/// Turn resolved values into a descriptor
pub fn render(
    operation: &OperationSpec,
    credentials: &Credentials,
    values: &ResolvedParameters,
) -> RequestDescriptor {
    let mut path = operation.path.to_string();
    let mut query = Vec::new();
    let mut body_values = Vec::new();

    for (param, value) in values {
        match param.location {
            ParamLocation::Path => {
                let placeholder = format!("{{{}}}", param.name);
                path = path.replace(&placeholder, &encode_path_segment(&as_text(value)));
            }
            ParamLocation::Query => query.push((param.wire_name().to_string(), as_text(value))),
            ParamLocation::Body => body_values.push((*param, value)),
        }
    }

    let body = match operation.body {
        BodyShape::Empty => None,
        BodyShape::Object => Some(RequestBody::Json(Value::Object(object(&body_values)))),
        BodyShape::SerializedObject => Some(RequestBody::JsonText(
            Value::Object(object(&body_values)).to_string(),
        )),
        BodyShape::Parameter => body_values
            .first()
            .map(|(_, value)| RequestBody::Json((*value).clone())),
        BodyShape::Multipart => Some(RequestBody::Multipart(form_fields(&body_values))),
    };

    let mut headers = vec![("Authorization".to_string(), credentials.auth_header())];
    if matches!(body, Some(RequestBody::Json(_)) | Some(RequestBody::JsonText(_))) {
        headers.push(("Content-Type".to_string(), CONTENT_TYPE_JSON.to_string()));
    }

    RequestDescriptor {
        method: operation.method,
        url: credentials.api_url(&path),
        headers,
        query,
        body,
        response: operation.response,
    }
}

fn object(values: &[(&'static ParamSpec, &Value)]) -> Map<String, Value> {
    values
        .iter()
        .map(|(param, value)| (param.wire_name().to_string(), (*value).clone()))
        .collect()
}

fn form_fields(values: &[(&'static ParamSpec, &Value)]) -> Vec<FormField> {
    let upload_name = values
        .iter()
        .find(|(param, _)| param.kind == ParamKind::FileName)
        .map(|(_, value)| as_text(value))
        .filter(|name| !name.is_empty());

    values
        .iter()
        .map(|(param, value)| match param.kind {
            ParamKind::FilePath => {
                let path = as_text(value);
                let file_name = upload_name.clone().unwrap_or_else(|| file_name_of(&path));
                FormField::File {
                    name: param.wire_name().to_string(),
                    path,
                    file_name,
                }
            }
            _ => FormField::Text {
                name: param.wire_name().to_string(),
                value: as_text(value),
            },
        })
        .collect()
}

fn file_name_of(path: &str) -> String {
    std::path::Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string())
}

fn as_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn text_default(param: &ParamSpec) -> Option<&'static str> {
    match param.default {
        Some(ParamDefault::Text(text)) => Some(text),
        _ => None,
    }
}

fn number_default(param: &ParamSpec) -> Option<i64> {
    match param.default {
        Some(ParamDefault::Number(n)) => Some(n),
        _ => None,
    }
}
