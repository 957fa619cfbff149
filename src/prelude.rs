//! Prelude module for convenient imports
//!
//! Re-exports what hand-written graph code and generated bindings use most.

// Graph construction
pub use crate::graph::{
    AsInput, AsOutput, ExecutionRequest, Input, InputHandle, InputValue, Link, Node, NodeId,
    Output, OutputHandle, Prompt, RelinkPolicy, Scope, SlotKey, Workflow,
};

// Types
pub use crate::types::{Any, BOOLEAN, FLOAT, INT, STRING, SlotType, ValueType};

// Definitions and generation
pub use crate::definition::{
    HostRegistry, InputSpec, IntoDefinition, NodeDefinition, OutputSpec, TypeSpec,
};
pub use crate::generator::Generator;

// Host access
pub use crate::client::{BlockingHostClient, HostClient, HostConfig};

// Error types
pub use crate::error::{GenerateError, GraphError, SubmitError, UnlinkedInput};

// Result type alias for convenience
pub type Result<T, E = Box<dyn std::error::Error>> = std::result::Result<T, E>;
