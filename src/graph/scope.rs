use super::node::{AsInput, AsOutput, Input, Node, Output};
use super::workflow::{Link, NodeId, Workflow};
use crate::error::GraphError;
use crate::types::SlotType;

/// Construction context handed out by [`Workflow::scope`].
///
/// Holds the only mutable borrow of its workflow, so scopes can neither nest nor overlap.
pub struct Scope<'w> {
    workflow: &'w mut Workflow,
}

impl<'w> Scope<'w> {
    pub(crate) fn new(workflow: &'w mut Workflow) -> Self {
        Self { workflow }
    }

    pub fn add(&mut self, node: &impl AsRef<Node>) -> NodeId {
        self.workflow.add(node)
    }

    /// Adds both nodes if needed and links `from` into `to`.
    pub fn connect<T: SlotType>(
        &mut self,
        from: &Output<T>,
        to: &Input<T>,
    ) -> Result<Link, GraphError> {
        self.workflow.link(from, to)
    }

    /// Untyped variant of [`connect`](Self::connect), type-checked at run time.
    pub fn link(&mut self, from: &impl AsOutput, to: &impl AsInput) -> Result<Link, GraphError> {
        self.workflow.link(from, to)
    }

    pub fn workflow(&self) -> &Workflow {
        self.workflow
    }
}
