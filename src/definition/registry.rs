//! The host's node-info document and its normalization into [`NodeDefinition`]s.

use super::{InputSpec, IntoDefinition, NodeDefinition, OutputSpec, TypeSpec, split_category};
use crate::error::GenerateError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Input parameter tables of one raw node type.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawInputTypes {
    #[serde(default)]
    pub required: IndexMap<String, Value>,
    #[serde(default)]
    pub optional: IndexMap<String, Value>,
    /// Host-injected parameters. Never exposed on builders.
    #[serde(default)]
    pub hidden: IndexMap<String, Value>,
}

/// One entry of the host registry, as served by `GET /object_info`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawNodeType {
    #[serde(default, alias = "INPUT_TYPES")]
    pub input: RawInputTypes,
    #[serde(default, alias = "RETURN_TYPES")]
    pub output: Vec<Value>,
    #[serde(default, alias = "RETURN_NAMES")]
    pub output_name: Option<Vec<String>>,
    #[serde(default, alias = "CATEGORY")]
    pub category: String,
    /// Implementation name. Falls back to the registry key when absent.
    #[serde(default)]
    pub name: Option<String>,
}

/// Registry key to raw node type, in document order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HostRegistry(pub IndexMap<String, RawNodeType>);

impl HostRegistry {
    pub fn from_json(json: &str) -> Result<Self, GenerateError> {
        serde_json::from_str(json).map_err(|e| GenerateError::RegistryParse(e.to_string()))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, GenerateError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| GenerateError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&json)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl IntoDefinition for HostRegistry {
    fn into_definitions(self) -> Result<Vec<NodeDefinition>, GenerateError> {
        self.0
            .into_iter()
            .map(|(name, raw)| raw.into_definition(name))
            .collect()
    }
}

impl RawNodeType {
    pub fn into_definition(self, name: String) -> Result<NodeDefinition, GenerateError> {
        let malformed = |reason: String| GenerateError::MalformedDefinition {
            definition: name.clone(),
            reason,
        };

        let mut inputs = Vec::new();
        for (param, value) in &self.input.required {
            inputs.push(parse_param(param, value, true).map_err(&malformed)?);
        }
        for (param, value) in &self.input.optional {
            inputs.push(parse_param(param, value, false).map_err(&malformed)?);
        }

        if let Some(names) = &self.output_name {
            if names.len() != self.output.len() {
                return Err(malformed(format!(
                    "{} output names declared for {} output types",
                    names.len(),
                    self.output.len()
                )));
            }
        }

        let mut outputs = Vec::with_capacity(self.output.len());
        for (i, ty) in self.output.iter().enumerate() {
            let ty = parse_type(ty)
                .ok_or_else(|| malformed(format!("output {} has an unsupported type {}", i, ty)))?;
            let name = self
                .output_name
                .as_ref()
                .and_then(|names| names.get(i))
                .cloned();
            outputs.push(OutputSpec { name, ty });
        }

        Ok(NodeDefinition {
            class_name: self.name.unwrap_or_else(|| name.clone()),
            name,
            inputs,
            outputs,
            category: split_category(&self.category),
        })
    }
}

fn parse_type(value: &Value) -> Option<TypeSpec> {
    match value {
        Value::String(name) => Some(TypeSpec::Named(name.clone())),
        Value::Array(choices) => Some(TypeSpec::Choice(choices.clone())),
        _ => None,
    }
}

/// Parses `[type]` or `[type, descriptor]`.
fn parse_param(name: &str, value: &Value, required: bool) -> Result<InputSpec, String> {
    let parts = value
        .as_array()
        .filter(|parts| matches!(parts.len(), 1 | 2))
        .ok_or_else(|| format!("input '{}' must be [type] or [type, descriptor]", name))?;

    let descriptor: IndexMap<String, Value> = match parts.get(1) {
        None => IndexMap::new(),
        Some(Value::Object(map)) => map.clone().into_iter().collect(),
        Some(other) => {
            return Err(format!(
                "input '{}' has a non-object descriptor {}",
                name, other
            ));
        }
    };

    let mut ty = parse_type(&parts[0])
        .ok_or_else(|| format!("input '{}' has an unsupported type {}", name, parts[0]))?;

    // Newer hosts spell choice lists as ["COMBO", {"options": [...]}].
    if ty == TypeSpec::named("COMBO") {
        if let Some(Value::Array(options)) = descriptor.get("options") {
            ty = TypeSpec::Choice(options.clone());
        }
    }

    Ok(InputSpec {
        name: name.to_string(),
        ty,
        required,
        descriptor,
    })
}
