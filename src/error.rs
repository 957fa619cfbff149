use crate::types::ValueType;
use itertools::Itertools;
use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Errors that abort a generation run. No partial document is produced.
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Definition '{definition}' is malformed: {reason}")]
    MalformedDefinition { definition: String, reason: String },

    #[error(
        "Namespace collision at '{path}': '{name}' is claimed by both '{existing}' and '{incoming}'"
    )]
    NamespaceCollision {
        path: String,
        name: String,
        existing: String,
        incoming: String,
    },

    #[error("Stub template does not contain the anchor '{0}'")]
    TemplateAnchorMissing(String),

    #[error("Failed to parse host registry: {0}")]
    RegistryParse(String),

    #[error("I/O error on '{path}': {message}")]
    Io { path: String, message: String },

    #[error("Invalid template pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Failed to render generated source: {0}")]
    Render(#[from] fmt::Error),
}

/// One required input found without a link or literal value during `Workflow::check`.
#[derive(Debug, Clone, PartialEq)]
pub struct UnlinkedInput {
    pub node: String,
    pub index: usize,
    pub name: String,
    pub value_type: ValueType,
}

impl fmt::Display for UnlinkedInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{} ({}) is not linked",
            self.node, self.index, self.name, self.value_type
        )
    }
}

fn format_unlinked(entries: &[UnlinkedInput]) -> String {
    entries.iter().map(|entry| format!("\n  {}", entry)).join("")
}

/// Errors raised by graph construction calls. The workflow stays usable after any of them.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error(
        "Type mismatch: output {source_node}:{source_index} ({source_type}) cannot feed input {dest_node}:{dest_index}:{dest_name} ({dest_type})"
    )]
    TypeMismatch {
        source_node: String,
        source_index: usize,
        source_type: ValueType,
        dest_node: String,
        dest_index: usize,
        dest_name: String,
        dest_type: ValueType,
    },

    #[error("Node '{0}' is not part of this workflow")]
    NodeNotFound(String),

    #[error("No link found for {node}:{index}:{slot}")]
    LinkNotFound {
        node: String,
        index: usize,
        slot: String,
    },

    #[error("Workflow check failed:{}", format_unlinked(.0))]
    UnlinkedRequiredInput(Vec<UnlinkedInput>),

    #[error("Node '{node}' has no {kind} for key '{key}'")]
    SlotNotFound {
        node: String,
        kind: &'static str,
        key: String,
    },

    #[error("Input {node}:{index}:{name} is already linked")]
    AlreadyLinked {
        node: String,
        index: usize,
        name: String,
    },
}

/// Errors raised while submitting a workflow to the host and waiting for it.
#[derive(Error, Debug)]
pub enum SubmitError {
    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Host rejected request to '{url}' with status {status}: {body}")]
    Rejected {
        url: String,
        status: u16,
        body: String,
    },

    #[error("Host response did not contain a prompt id: {0}")]
    MissingPromptId(String),

    #[error("Failed to decode host response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Prompt '{prompt_id}' did not complete within {timeout:?} (waited {elapsed:?})")]
    Timeout {
        prompt_id: String,
        elapsed: Duration,
        timeout: Duration,
    },
}
