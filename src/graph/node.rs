use crate::error::GraphError;
use crate::types::ValueType;
use serde_json::Value;
use std::cell::RefCell;
use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;

/// Fulfillment state of one input.
#[derive(Debug, Clone, PartialEq)]
pub enum InputValue {
    /// A concrete value sent to the host as-is.
    Literal(Value),
    /// Required input waiting for a link. Fails `Workflow::check`.
    PendingLink,
    /// Optional input with no value. Left out of the serialized document.
    Omitted,
    /// Resolved through a link record of the owning workflow.
    Linked,
}

impl InputValue {
    pub fn literal(value: impl Into<Value>) -> Self {
        InputValue::Literal(value.into())
    }

    /// `Some` becomes a literal, `None` is omitted.
    pub fn optional<T: Into<Value>>(value: Option<T>) -> Self {
        value.map_or(InputValue::Omitted, |v| InputValue::Literal(v.into()))
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, InputValue::PendingLink)
    }
}

/// Lookup key for a slot: its position or its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotKey {
    Index(usize),
    Name(String),
}

impl From<usize> for SlotKey {
    fn from(index: usize) -> Self {
        SlotKey::Index(index)
    }
}

impl From<&str> for SlotKey {
    fn from(name: &str) -> Self {
        SlotKey::Name(name.to_string())
    }
}

impl From<String> for SlotKey {
    fn from(name: String) -> Self {
        SlotKey::Name(name)
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotKey::Index(index) => write!(f, "{}", index),
            SlotKey::Name(name) => f.write_str(name),
        }
    }
}

#[derive(Debug, Clone)]
struct InputSlot {
    name: String,
    value_type: ValueType,
    value: InputValue,
}

#[derive(Debug, Clone)]
struct OutputSlot {
    name: Option<String>,
    value_type: ValueType,
}

#[derive(Debug)]
struct NodeState {
    type_name: String,
    inputs: Vec<InputSlot>,
    outputs: Vec<OutputSlot>,
}

/// A graph node instance.
///
/// Cloning yields another handle to the same node; identity is by instance, never by value.
#[derive(Clone)]
pub struct Node(Rc<RefCell<NodeState>>);

impl Node {
    pub fn new(type_name: impl Into<String>) -> Self {
        Node(Rc::new(RefCell::new(NodeState {
            type_name: type_name.into(),
            inputs: Vec::new(),
            outputs: Vec::new(),
        })))
    }

    pub fn type_name(&self) -> String {
        self.0.borrow().type_name.clone()
    }

    pub fn same_node(&self, other: &Node) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Appends an input slot and returns its index.
    pub fn register_input(
        &self,
        name: impl Into<String>,
        value_type: ValueType,
        value: InputValue,
    ) -> usize {
        let mut state = self.0.borrow_mut();
        state.inputs.push(InputSlot {
            name: name.into(),
            value_type,
            value,
        });
        state.inputs.len() - 1
    }

    /// Appends an output slot and returns its index.
    pub fn register_output(&self, name: Option<&str>, value_type: ValueType) -> usize {
        let mut state = self.0.borrow_mut();
        state.outputs.push(OutputSlot {
            name: name.map(str::to_string),
            value_type,
        });
        state.outputs.len() - 1
    }

    pub fn input_len(&self) -> usize {
        self.0.borrow().inputs.len()
    }

    pub fn output_len(&self) -> usize {
        self.0.borrow().outputs.len()
    }

    /// Resolves an input by index or name.
    pub fn input(&self, key: impl Into<SlotKey>) -> Result<InputHandle, GraphError> {
        let key = key.into();
        let state = self.0.borrow();
        let index = match &key {
            SlotKey::Index(index) => Some(*index).filter(|i| *i < state.inputs.len()),
            SlotKey::Name(name) => state.inputs.iter().position(|slot| &slot.name == name),
        };
        index
            .map(|index| {
                let slot = &state.inputs[index];
                InputHandle {
                    node: self.clone(),
                    index,
                    name: slot.name.clone(),
                    value_type: slot.value_type.clone(),
                    value: slot.value.clone(),
                }
            })
            .ok_or_else(|| GraphError::SlotNotFound {
                node: state.type_name.clone(),
                kind: "input",
                key: key.to_string(),
            })
    }

    /// Resolves an output by index, then by name, then by declared type name.
    pub fn output(&self, key: impl Into<SlotKey>) -> Result<OutputHandle, GraphError> {
        let key = key.into();
        let state = self.0.borrow();
        let index = match &key {
            SlotKey::Index(index) => Some(*index).filter(|i| *i < state.outputs.len()),
            SlotKey::Name(name) => state
                .outputs
                .iter()
                .position(|slot| slot.name.as_deref() == Some(name.as_str()))
                .or_else(|| {
                    state
                        .outputs
                        .iter()
                        .position(|slot| slot.value_type.type_name() == name)
                }),
        };
        index
            .map(|index| {
                let slot = &state.outputs[index];
                OutputHandle {
                    node: self.clone(),
                    index,
                    name: slot.name.clone(),
                    value_type: slot.value_type.clone(),
                }
            })
            .ok_or_else(|| GraphError::SlotNotFound {
                node: state.type_name.clone(),
                kind: "output",
                key: key.to_string(),
            })
    }

    /// Snapshot of every input, in index order.
    pub fn inputs(&self) -> Vec<InputHandle> {
        (0..self.input_len())
            .filter_map(|index| self.input(index).ok())
            .collect()
    }

    pub fn set_value(&self, index: usize, value: InputValue) -> Result<(), GraphError> {
        let mut state = self.0.borrow_mut();
        let type_name = state.type_name.clone();
        let slot = state
            .inputs
            .get_mut(index)
            .ok_or_else(|| GraphError::SlotNotFound {
                node: type_name,
                kind: "input",
                key: index.to_string(),
            })?;
        slot.value = value;
        Ok(())
    }

    /// Setter used by generated builders, whose indices are fixed at generation time.
    pub fn bind_value(&self, index: usize, value: InputValue) {
        if let Err(e) = self.set_value(index, value) {
            log::warn!("Ignoring value for missing slot: {}", e);
        }
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.0.borrow();
        f.debug_struct("Node")
            .field("type_name", &state.type_name)
            .field("inputs", &state.inputs.len())
            .field("outputs", &state.outputs.len())
            .finish()
    }
}

impl AsRef<Node> for Node {
    fn as_ref(&self) -> &Node {
        self
    }
}

/// Snapshot of one input slot.
#[derive(Debug, Clone)]
pub struct InputHandle {
    pub node: Node,
    pub index: usize,
    pub name: String,
    pub value_type: ValueType,
    pub value: InputValue,
}

/// Snapshot of one output slot.
#[derive(Debug, Clone)]
pub struct OutputHandle {
    pub node: Node,
    pub index: usize,
    pub name: Option<String>,
    pub value_type: ValueType,
}

/// Statically typed reference to an input slot.
pub struct Input<T> {
    node: Node,
    index: usize,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Input<T> {
    pub fn new(node: &Node, index: usize) -> Self {
        Self {
            node: node.clone(),
            index,
            _marker: PhantomData,
        }
    }

    pub fn node(&self) -> &Node {
        &self.node
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn handle(&self) -> Result<InputHandle, GraphError> {
        self.node.input(self.index)
    }
}

impl<T> Clone for Input<T> {
    fn clone(&self) -> Self {
        Self::new(&self.node, self.index)
    }
}

impl<T> fmt::Debug for Input<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Input")
            .field("node", &self.node)
            .field("index", &self.index)
            .finish()
    }
}

/// Statically typed reference to an output slot.
pub struct Output<T> {
    node: Node,
    index: usize,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Output<T> {
    pub fn new(node: &Node, index: usize) -> Self {
        Self {
            node: node.clone(),
            index,
            _marker: PhantomData,
        }
    }

    pub fn node(&self) -> &Node {
        &self.node
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn handle(&self) -> Result<OutputHandle, GraphError> {
        self.node.output(self.index)
    }
}

impl<T> Clone for Output<T> {
    fn clone(&self) -> Self {
        Self::new(&self.node, self.index)
    }
}

impl<T> fmt::Debug for Output<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Output")
            .field("node", &self.node)
            .field("index", &self.index)
            .finish()
    }
}

/// Anything that designates an input slot.
pub trait AsInput {
    fn to_input(&self) -> Result<InputHandle, GraphError>;
}

/// Anything that designates an output slot.
pub trait AsOutput {
    fn to_output(&self) -> Result<OutputHandle, GraphError>;
}

impl AsInput for InputHandle {
    fn to_input(&self) -> Result<InputHandle, GraphError> {
        self.node.input(self.index)
    }
}

impl<T> AsInput for Input<T> {
    fn to_input(&self) -> Result<InputHandle, GraphError> {
        self.handle()
    }
}

impl AsOutput for OutputHandle {
    fn to_output(&self) -> Result<OutputHandle, GraphError> {
        self.node.output(self.index)
    }
}

impl<T> AsOutput for Output<T> {
    fn to_output(&self) -> Result<OutputHandle, GraphError> {
        self.handle()
    }
}
