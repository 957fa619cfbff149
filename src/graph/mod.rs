//! Runtime graph model: nodes, typed slot handles, links and the workflow that owns them.

pub mod document;
pub mod node;
pub mod scope;
pub mod workflow;

pub use crate::error::GraphError;
pub use document::*;
pub use node::*;
pub use scope::Scope;
pub use workflow::*;
