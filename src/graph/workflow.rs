use super::document::{ExecutionRequest, Prompt, PromptMeta, PromptNode};
use super::node::{AsInput, AsOutput, InputValue, Node};
use super::scope::Scope;
use crate::error::{GraphError, UnlinkedInput};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cell::Cell;

/// Sequential id assigned when a node is first added to a workflow.
pub type NodeId = usize;

/// A directed edge from an output slot to an input slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub src: NodeId,
    pub src_index: usize,
    pub dst: NodeId,
    pub dst_index: usize,
}

/// What `link` does when the destination input already has a link.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RelinkPolicy {
    /// Drop the previous link record and keep the new one.
    #[default]
    Replace,
    /// Keep every record. Serialization resolves to the oldest one.
    Append,
    /// Fail with `GraphError::AlreadyLinked`.
    Reject,
}

#[derive(Debug)]
struct RegisteredNode {
    id: NodeId,
    node: Node,
}

/// The graph under construction: a node sequence plus a link sequence.
///
/// A workflow is open for mutation at all times. A successful [`check`](Self::check) marks it
/// validated until the next `add` or `link`.
#[derive(Debug, Default)]
pub struct Workflow {
    nodes: Vec<RegisteredNode>,
    links: Vec<Link>,
    next_id: NodeId,
    policy: RelinkPolicy,
    validated: Cell<bool>,
}

impl Workflow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_relink_policy(mut self, policy: RelinkPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().map(|entry| (entry.id, &entry.node))
    }

    pub fn is_validated(&self) -> bool {
        self.validated.get()
    }

    fn lookup(&self, node: &Node) -> Option<NodeId> {
        self.nodes
            .iter()
            .find(|entry| entry.node.same_node(node))
            .map(|entry| entry.id)
    }

    /// Adds a node, or returns its existing id if this instance is already present.
    ///
    /// Link state travels with the node, but link records do not: an input linked in another
    /// workflow has no link here, and `check` reports it.
    pub fn add(&mut self, node: &impl AsRef<Node>) -> NodeId {
        let node = node.as_ref();
        if let Some(id) = self.lookup(node) {
            return id;
        }

        let id = self.next_id;
        self.next_id += 1;
        self.nodes.push(RegisteredNode {
            id,
            node: node.clone(),
        });
        self.validated.set(false);
        log::debug!("Added node {} as #{}", node.type_name(), id);
        id
    }

    pub fn node_id(&self, node: &Node) -> Result<NodeId, GraphError> {
        self.lookup(node)
            .ok_or_else(|| GraphError::NodeNotFound(node.type_name()))
    }

    pub fn node(&self, id: NodeId) -> Result<&Node, GraphError> {
        self.nodes
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| &entry.node)
            .ok_or_else(|| GraphError::NodeNotFound(format!("#{}", id)))
    }

    /// Links an output to an input of exactly the same type.
    ///
    /// Both endpoint nodes are added if needed. On any error the workflow is left unchanged.
    pub fn link(
        &mut self,
        from: &impl AsOutput,
        to: &impl AsInput,
    ) -> Result<Link, GraphError> {
        let source = from.to_output()?;
        let dest = to.to_input()?;

        if source.value_type != dest.value_type {
            return Err(GraphError::TypeMismatch {
                source_node: source.node.type_name(),
                source_index: source.index,
                source_type: source.value_type,
                dest_node: dest.node.type_name(),
                dest_index: dest.index,
                dest_name: dest.name,
                dest_type: dest.value_type,
            });
        }

        let existing = self.lookup(&dest.node).filter(|dst| {
            self.links
                .iter()
                .any(|link| link.dst == *dst && link.dst_index == dest.index)
        });
        if let Some(dst) = existing {
            match self.policy {
                RelinkPolicy::Reject => {
                    return Err(GraphError::AlreadyLinked {
                        node: dest.node.type_name(),
                        index: dest.index,
                        name: dest.name,
                    });
                }
                RelinkPolicy::Replace => self
                    .links
                    .retain(|link| !(link.dst == dst && link.dst_index == dest.index)),
                RelinkPolicy::Append => {}
            }
        }

        dest.node.set_value(dest.index, InputValue::Linked)?;
        let link = Link {
            src: self.add(&source.node),
            src_index: source.index,
            dst: self.add(&dest.node),
            dst_index: dest.index,
        };
        self.links.push(link);
        self.validated.set(false);
        log::debug!(
            "Linked #{}:{} -> #{}:{} ({})",
            link.src,
            link.src_index,
            link.dst,
            link.dst_index,
            dest.value_type
        );
        Ok(link)
    }

    /// First link feeding input `index` of node `dst`.
    pub fn find_link_with_dst(&self, dst: NodeId, index: usize) -> Result<&Link, GraphError> {
        self.links
            .iter()
            .find(|link| link.dst == dst && link.dst_index == index)
            .ok_or_else(|| {
                let node = self.node(dst).ok();
                let slot = node
                    .and_then(|node| node.input(index).ok())
                    .map(|input| format!("{} ({})", input.name, input.value_type))
                    .unwrap_or_else(|| "?".to_string());
                GraphError::LinkNotFound {
                    node: node.map_or_else(|| format!("#{}", dst), Node::type_name),
                    index,
                    slot,
                }
            })
    }

    /// First link leaving output `index` of node `src`.
    pub fn find_link_with_src(&self, src: NodeId, index: usize) -> Result<&Link, GraphError> {
        self.links
            .iter()
            .find(|link| link.src == src && link.src_index == index)
            .ok_or_else(|| {
                let node = self.node(src).ok();
                let slot = node
                    .and_then(|node| node.output(index).ok())
                    .map(|output| format!("({})", output.value_type))
                    .unwrap_or_else(|| "?".to_string());
                GraphError::LinkNotFound {
                    node: node.map_or_else(|| format!("#{}", src), Node::type_name),
                    index,
                    slot,
                }
            })
    }

    /// Reports every required input still waiting for a link, in node-id then input order.
    ///
    /// An input marked linked counts as waiting unless this workflow holds its link record.
    pub fn check(&self) -> Result<(), GraphError> {
        let unlinked: Vec<UnlinkedInput> = self
            .nodes
            .iter()
            .flat_map(|entry| {
                let type_name = entry.node.type_name();
                let id = entry.id;
                entry
                    .node
                    .inputs()
                    .into_iter()
                    .filter(move |input| match input.value {
                        InputValue::PendingLink => true,
                        InputValue::Linked => !self
                            .links
                            .iter()
                            .any(|link| link.dst == id && link.dst_index == input.index),
                        _ => false,
                    })
                    .map(move |input| UnlinkedInput {
                        node: type_name.clone(),
                        index: input.index,
                        name: input.name,
                        value_type: input.value_type,
                    })
            })
            .collect();

        if !unlinked.is_empty() {
            self.validated.set(false);
            return Err(GraphError::UnlinkedRequiredInput(unlinked));
        }
        self.validated.set(true);
        Ok(())
    }

    /// Builds the execution document.
    ///
    /// Does not validate: a pending input is left out of the document with a warning.
    pub fn serialize(&self) -> Result<Prompt, GraphError> {
        let mut prompt = IndexMap::with_capacity(self.nodes.len());
        for entry in &self.nodes {
            let type_name = entry.node.type_name();
            let mut inputs = IndexMap::new();
            for input in entry.node.inputs() {
                match input.value {
                    InputValue::Literal(value) => {
                        inputs.insert(input.name, value);
                    }
                    InputValue::Linked => {
                        let link = self.find_link_with_dst(entry.id, input.index)?;
                        inputs.insert(
                            input.name,
                            Value::Array(vec![
                                Value::String(link.src.to_string()),
                                Value::from(link.src_index),
                            ]),
                        );
                    }
                    InputValue::Omitted => {}
                    InputValue::PendingLink => {
                        log::warn!(
                            "Serializing {}:{}:{} without a link",
                            type_name,
                            input.index,
                            input.name
                        );
                    }
                }
            }

            prompt.insert(
                entry.id.to_string(),
                PromptNode {
                    class_type: type_name.clone(),
                    meta: PromptMeta { title: type_name },
                    inputs,
                },
            );
        }
        Ok(Prompt(prompt))
    }

    /// Validates, then serializes into the host's submission envelope.
    pub fn prepare_request(&self) -> Result<ExecutionRequest, GraphError> {
        self.check()?;
        Ok(ExecutionRequest {
            prompt: self.serialize()?,
        })
    }

    /// Runs `build` with a construction scope over this workflow, then validates.
    ///
    /// Nodes created with a builder's `new_in` are registered as they are built. An error from
    /// `build` is returned as-is, otherwise the result of `check` decides.
    pub fn scope<R>(
        &mut self,
        build: impl FnOnce(&mut Scope<'_>) -> Result<R, GraphError>,
    ) -> Result<R, GraphError> {
        let result = build(&mut Scope::new(self))?;
        self.check()?;
        Ok(result)
    }
}
