use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptMeta {
    pub title: String,
}

/// One node of the serialized execution document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptNode {
    pub class_type: String,
    #[serde(rename = "_meta")]
    pub meta: PromptMeta,
    /// Literal values, or `["<source id>", <output index>]` pairs for linked inputs.
    pub inputs: IndexMap<String, Value>,
}

/// Serialized graph keyed by the decimal node id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Prompt(pub IndexMap<String, PromptNode>);

impl Prompt {
    pub fn node(&self, id: usize) -> Option<&PromptNode> {
        self.0.get(&id.to_string())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Body of `POST {base}/prompt`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionRequest {
    pub prompt: Prompt,
}
