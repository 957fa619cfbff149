//! Normalized description of host node types.
//!
//! A [`NodeDefinition`] is built once from the host registry and never mutated afterwards. The
//! generator consumes a batch of them; see [`registry`] for the host document shape and
//! [`IntoDefinition`] for plugging in other sources.

use crate::error::GenerateError;
use crate::generator::ident;
use crate::types::ValueType;
use ahash::AHashSet;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub mod conversion;
pub mod registry;

pub use conversion::*;
pub use registry::*;

/// Declared type of one slot as the host reports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TypeSpec {
    /// A scalar or nominal type name. `"*"` is the wildcard.
    Named(String),
    /// A closed set of literal choices.
    Choice(Vec<Value>),
}

impl TypeSpec {
    pub fn named(name: impl Into<String>) -> Self {
        TypeSpec::Named(name.into())
    }

    /// Runtime type of this spec. An empty choice list is the open wildcard.
    pub fn value_type(&self) -> ValueType {
        match self {
            TypeSpec::Named(name) => ValueType::from_name(name),
            TypeSpec::Choice(choices) if choices.is_empty() => ValueType::Any,
            TypeSpec::Choice(choices) => ValueType::Choice(choices.clone()),
        }
    }

    /// The nominal type name, if this spec names a type outside the built-ins.
    pub fn nominal_name(&self) -> Option<&str> {
        match self {
            TypeSpec::Named(name) if !ValueType::is_builtin_name(name) => Some(name),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeSpec,
    pub required: bool,
    /// Optional attributes such as `default`, `min` or `max`.
    #[serde(default)]
    pub descriptor: IndexMap<String, Value>,
}

impl InputSpec {
    pub fn required(name: impl Into<String>, ty: TypeSpec) -> Self {
        Self {
            name: name.into(),
            ty,
            required: true,
            descriptor: IndexMap::new(),
        }
    }

    pub fn optional(name: impl Into<String>, ty: TypeSpec) -> Self {
        Self {
            required: false,
            ..Self::required(name, ty)
        }
    }

    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.descriptor.insert("default".to_string(), value.into());
        self
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.descriptor.get("default")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputSpec {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub ty: TypeSpec,
}

impl OutputSpec {
    pub fn new(name: Option<&str>, ty: TypeSpec) -> Self {
        Self {
            name: name.map(str::to_string),
            ty,
        }
    }
}

/// One host node type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeDefinition {
    /// Registry name, sent to the host as the node's class type.
    pub name: String,
    /// Underlying implementation name. May repeat across aliased definitions.
    pub class_name: String,
    pub inputs: Vec<InputSpec>,
    pub outputs: Vec<OutputSpec>,
    #[serde(default)]
    pub category: Vec<String>,
}

impl NodeDefinition {
    pub fn new(name: impl Into<String>, class_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            class_name: class_name.into(),
            inputs: Vec::new(),
            outputs: Vec::new(),
            category: Vec::new(),
        }
    }

    pub fn with_input(mut self, input: InputSpec) -> Self {
        self.inputs.push(input);
        self
    }

    pub fn with_output(mut self, output: OutputSpec) -> Self {
        self.outputs.push(output);
        self
    }

    pub fn with_category(mut self, path: &str) -> Self {
        self.category = split_category(path);
        self
    }

    /// Inputs in constructor order: the required block, then the optional block.
    /// Declaration order is kept within each block.
    pub fn ordered_inputs(&self) -> impl Iterator<Item = &InputSpec> {
        self.inputs
            .iter()
            .filter(|input| input.required)
            .chain(self.inputs.iter().filter(|input| !input.required))
    }

    pub fn validate(&self) -> Result<(), GenerateError> {
        let malformed = |reason: String| GenerateError::MalformedDefinition {
            definition: self.name.clone(),
            reason,
        };

        if self.name.is_empty() {
            return Err(malformed("definition name is empty".to_string()));
        }
        if self.class_name.is_empty() {
            return Err(malformed("class name is empty".to_string()));
        }

        let mut seen = AHashSet::new();
        for input in &self.inputs {
            let key = ident::sanitize(&input.name);
            if !seen.insert(key.clone()) {
                return Err(malformed(format!(
                    "input '{}' collides with another input as '{}'",
                    input.name, key
                )));
            }
        }
        Ok(())
    }
}

/// Splits a `/`-delimited category path. An empty path has no segments.
pub fn split_category(path: &str) -> Vec<String> {
    if path.is_empty() {
        return Vec::new();
    }
    path.split('/').map(str::to_string).collect()
}
