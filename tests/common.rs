//! Common test utilities for building definitions, nodes and workflows.
use nodebind::prelude::*;
use serde_json::json;

/// The host registry fixture: a minimal text-to-image pipeline.
#[allow(dead_code)]
pub const REGISTRY_JSON: &str = include_str!("fixtures/registry.json");

/// Definitions normalized from [`REGISTRY_JSON`].
#[allow(dead_code)]
pub fn comfy_definitions() -> Vec<NodeDefinition> {
    HostRegistry::from_json(REGISTRY_JSON)
        .expect("Failed to parse registry fixture")
        .into_definitions()
        .expect("Failed to normalize registry fixture")
}

/// A node with one `INT` output named `value`.
#[allow(dead_code)]
pub fn int_source() -> Node {
    let node = Node::new("IntSource");
    node.register_output(Some("value"), ValueType::Int);
    node
}

/// A node with one `STRING` output and no name.
#[allow(dead_code)]
pub fn string_source() -> Node {
    let node = Node::new("StringSource");
    node.register_output(None, ValueType::String);
    node
}

/// Inputs: `x: INT` (required), `label: STRING` (required, literal "plain"),
/// `scale: FLOAT` (optional, omitted). Output: `RESULT`.
#[allow(dead_code)]
pub fn sink() -> Node {
    let node = Node::new("Sink");
    node.register_input("x", ValueType::Int, InputValue::PendingLink);
    node.register_input("label", ValueType::String, InputValue::literal("plain"));
    node.register_input("scale", ValueType::Float, InputValue::Omitted);
    node.register_output(Some("result"), ValueType::Named("RESULT".to_string()));
    node
}

/// `IntSource --(value)--> Sink.x`, fully linked.
#[allow(dead_code)]
pub fn linked_pair() -> (Workflow, Node, Node) {
    let mut workflow = Workflow::new();
    let source = int_source();
    let sink = sink();
    workflow.add(&source);
    workflow.add(&sink);
    workflow
        .link(&source.output(0usize).unwrap(), &sink.input("x").unwrap())
        .expect("Failed to link pair");
    (workflow, source, sink)
}

/// A definition with one required input per built-in type and a nominal output.
#[allow(dead_code)]
pub fn scalar_definition(name: &str) -> NodeDefinition {
    NodeDefinition::new(name, name)
        .with_input(InputSpec::required("count", TypeSpec::named("INT")).with_default(json!(1)))
        .with_input(InputSpec::required("ratio", TypeSpec::named("FLOAT")))
        .with_input(InputSpec::optional("note", TypeSpec::named("STRING")))
        .with_output(OutputSpec::new(None, TypeSpec::named("LATENT")))
        .with_category("testing")
}
