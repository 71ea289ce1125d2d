//! Parameter lookup for the batch loop
//!
//! The host owns parameter storage and expression evaluation; the adapter only asks for
//! a value by name for a given record index.

use crate::error::{CordaError, CordaResult};
use serde_json::{Map, Number, Value};
use std::collections::HashMap;

/// Supplies parameter values by name for record index `item`
pub trait ParameterSource: Send + Sync {
    fn parameter(&self, name: &str, item: usize) -> Option<Value>;
}

/// The same values for every record
#[derive(Debug, Clone, Default)]
pub struct StaticParameters {
    values: HashMap<String, Value>,
}

impl StaticParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(name.into(), value.into());
    }
}

impl ParameterSource for StaticParameters {
    fn parameter(&self, name: &str, _item: usize) -> Option<Value> {
        self.values.get(name).cloned()
    }
}

/// Per-record values with batch-wide fallbacks
#[derive(Debug, Clone, Default)]
pub struct ItemParameters {
    shared: StaticParameters,
    items: Option<Vec<Map<String, Value>>>,
}

impl ItemParameters {
    /// One record per entry of `items`. An empty list describes an empty batch.
    pub fn new(shared: StaticParameters, items: Vec<Map<String, Value>>) -> Self {
        Self {
            shared,
            items: Some(items),
        }
    }

    /// A single record that only sees the shared values
    pub fn from_shared(shared: StaticParameters) -> Self {
        Self {
            shared,
            items: None,
        }
    }

    pub fn item_count(&self) -> usize {
        self.items.as_ref().map_or(1, Vec::len)
    }
}

impl ParameterSource for ItemParameters {
    fn parameter(&self, name: &str, item: usize) -> Option<Value> {
        self.items
            .as_ref()
            .and_then(|items| items.get(item))
            .and_then(|values| values.get(name).cloned())
            .or_else(|| self.shared.parameter(name, item))
    }
}

/// Read a text parameter. Numbers and booleans are rendered as text.
pub(crate) fn read_string(
    source: &dyn ParameterSource,
    name: &str,
    item: usize,
    default: Option<&str>,
) -> CordaResult<String> {
    match source.parameter(name, item) {
        Some(Value::String(s)) => Ok(s),
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(Value::Bool(b)) => Ok(b.to_string()),
        Some(Value::Null) | None => default
            .map(str::to_string)
            .ok_or_else(|| CordaError::missing_parameter(name)),
        Some(other) => Err(CordaError::invalid_parameter(
            name,
            format!("expected text, got {}", type_name(&other)),
        )),
    }
}

/// Read a number parameter, accepting numeric strings
pub(crate) fn read_number(
    source: &dyn ParameterSource,
    name: &str,
    item: usize,
    default: Option<i64>,
) -> CordaResult<Value> {
    match source.parameter(name, item) {
        Some(Value::Number(n)) => Ok(integral(n)),
        Some(Value::String(s)) if !s.trim().is_empty() => {
            parse_number(s.trim()).ok_or_else(|| {
                CordaError::invalid_parameter(name, format!("\"{}\" is not a number", s))
            })
        }
        Some(Value::Null) | None => default
            .map(Value::from)
            .ok_or_else(|| CordaError::missing_parameter(name)),
        Some(Value::String(_)) => default
            .map(Value::from)
            .ok_or_else(|| CordaError::missing_parameter(name)),
        Some(other) => Err(CordaError::invalid_parameter(
            name,
            format!("expected a number, got {}", type_name(&other)),
        )),
    }
}

/// Read a JSON parameter. Text is parsed; structured values are taken as-is.
pub(crate) fn read_json(
    source: &dyn ParameterSource,
    name: &str,
    item: usize,
    default: Option<&str>,
) -> CordaResult<Value> {
    let text = match source.parameter(name, item) {
        Some(Value::String(s)) => s,
        Some(Value::Null) | None => default
            .map(str::to_string)
            .ok_or_else(|| CordaError::missing_parameter(name))?,
        Some(structured) => return Ok(structured),
    };

    serde_json::from_str(&text).map_err(|e| CordaError::invalid_json(name, &e))
}

fn parse_number(text: &str) -> Option<Value> {
    if let Ok(i) = text.parse::<i64>() {
        return Some(Value::from(i));
    }
    text.parse::<f64>()
        .ok()
        .and_then(serde_json::Number::from_f64)
        .map(integral)
}

/// Whole floats become integers so they render as `100`, not `100.0`
fn integral(n: Number) -> Value {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
            Value::from(f as i64)
        }
        _ => Value::Number(n),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
