//! Parameter contracts.
//!
//! Every tool declares the parameters it accepts as a [`ParamContract`].
//! The contract is the single source for both the JSON Schema advertised
//! through `tools/list` and the validation applied to raw arguments before
//! a handler runs.

use std::sync::Arc;

use rmcp::model::JsonObject;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use super::error::ToolError;

/// Semantic type of a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    String,
    Integer,
    /// A string restricted to a fixed set of literals.
    OneOf(&'static [&'static str]),
}

impl ParamKind {
    fn check(&self, value: &Value, required: bool) -> Result<(), String> {
        match self {
            Self::String => match value.as_str() {
                Some("") if required => Err("must not be empty".to_string()),
                Some(_) => Ok(()),
                None => Err("expected a string".to_string()),
            },
            Self::Integer => match as_integer(value) {
                Some(_) => Ok(()),
                None => Err("expected an integer".to_string()),
            },
            Self::OneOf(allowed) => match value.as_str() {
                Some(s) if allowed.contains(&s) => Ok(()),
                _ => Err(format!("expected one of {}", allowed.join(", "))),
            },
        }
    }

    fn schema(&self) -> JsonObject {
        let mut schema = JsonObject::new();
        match self {
            Self::String => {
                schema.insert("type".into(), json!("string"));
            }
            Self::Integer => {
                schema.insert("type".into(), json!("integer"));
            }
            Self::OneOf(allowed) => {
                schema.insert("type".into(), json!("string"));
                schema.insert("enum".into(), json!(allowed));
            }
        }
        schema
    }
}

/// Integer value of a JSON number, accepting integral floats such as `2023.0`.
fn as_integer(value: &Value) -> Option<i64> {
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
            .map(|f| f as i64)
    })
}

/// Descriptor of a single named parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    pub name: &'static str,
    pub kind: ParamKind,
    pub required: bool,
    pub description: &'static str,
}

impl ParamSpec {
    pub const fn required(name: &'static str, kind: ParamKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            required: true,
            description,
        }
    }

    pub const fn optional(name: &'static str, kind: ParamKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            required: false,
            description,
        }
    }
}

/// Ordered set of parameters accepted by a tool.
#[derive(Debug, Clone, Copy)]
pub struct ParamContract {
    params: &'static [ParamSpec],
}

impl ParamContract {
    pub const fn new(params: &'static [ParamSpec]) -> Self {
        Self { params }
    }

    /// A contract with no parameters.
    pub const fn empty() -> Self {
        Self { params: &[] }
    }

    pub fn params(&self) -> &'static [ParamSpec] {
        self.params
    }

    pub fn get(&self, name: &str) -> Option<&'static ParamSpec> {
        self.params.iter().find(|p| p.name == name)
    }

    /// Render the contract as a JSON Schema object.
    pub fn input_schema(&self) -> Arc<JsonObject> {
        let mut properties = JsonObject::new();
        for param in self.params {
            let mut schema = param.kind.schema();
            schema.insert("description".into(), json!(param.description));
            properties.insert(param.name.into(), Value::Object(schema));
        }

        let mut schema = JsonObject::new();
        schema.insert("type".into(), json!("object"));
        schema.insert("properties".into(), Value::Object(properties));

        let required: Vec<&str> = self
            .params
            .iter()
            .filter(|p| p.required)
            .map(|p| p.name)
            .collect();
        if !required.is_empty() {
            schema.insert("required".into(), json!(required));
        }

        Arc::new(schema)
    }

    /// Check raw arguments against the contract.
    ///
    /// Every offending field is reported, not only the first one. A JSON
    /// `null` counts as absent. Keys not declared by the contract are ignored.
    pub fn validate(&self, arguments: &JsonObject) -> Result<(), ToolError> {
        let problems: Vec<(&str, String)> = self
            .params
            .iter()
            .filter_map(|param| match arguments.get(param.name) {
                None | Some(Value::Null) if param.required => {
                    Some((param.name, "is required".to_string()))
                }
                None | Some(Value::Null) => None,
                Some(value) => param
                    .kind
                    .check(value, param.required)
                    .err()
                    .map(|reason| (param.name, reason)),
            })
            .collect();

        if problems.is_empty() {
            Ok(())
        } else {
            Err(ToolError::invalid_fields(problems))
        }
    }

    /// Validate, then deserialize into the tool's typed parameters.
    pub fn parse<P: DeserializeOwned>(&self, arguments: JsonObject) -> Result<P, ToolError> {
        self.validate(&arguments)?;
        self.deserialize(arguments)
    }

    /// Deserialize arguments that already passed [`validate`](Self::validate).
    ///
    /// Integral floats given for integer parameters are normalized first.
    pub fn deserialize<P: DeserializeOwned>(
        &self,
        mut arguments: JsonObject,
    ) -> Result<P, ToolError> {
        for param in self.params.iter().filter(|p| p.kind == ParamKind::Integer) {
            if let Some(value) = arguments.get_mut(param.name) {
                if let Some(n) = as_integer(value) {
                    *value = Value::from(n);
                }
            }
        }
        serde_json::from_value(Value::Object(arguments))
            .map_err(|e| ToolError::invalid_arguments(e.to_string()))
    }
}
