use super::NodeDefinition;
use crate::error::GenerateError;

/// A source of node definitions.
///
/// The host registry document implements this through [`HostRegistry`](super::HostRegistry).
/// Implement it on your own introspection output to feed the generator from elsewhere.
///
/// # Example
///
/// ```rust
/// use nodebind::definition::{IntoDefinition, NodeDefinition, OutputSpec, TypeSpec};
/// use nodebind::error::GenerateError;
///
/// struct Manifest {
///     names: Vec<String>,
/// }
///
/// impl IntoDefinition for Manifest {
///     fn into_definitions(self) -> Result<Vec<NodeDefinition>, GenerateError> {
///         Ok(self
///             .names
///             .into_iter()
///             .map(|name| {
///                 NodeDefinition::new(name.clone(), name)
///                     .with_output(OutputSpec::new(None, TypeSpec::named("IMAGE")))
///             })
///             .collect())
///     }
/// }
///
/// let defs = Manifest { names: vec!["LoadImage".to_string()] }.into_definitions().unwrap();
/// assert_eq!(defs[0].outputs.len(), 1);
/// ```
pub trait IntoDefinition {
    fn into_definitions(self) -> Result<Vec<NodeDefinition>, GenerateError>;
}

impl IntoDefinition for Vec<NodeDefinition> {
    fn into_definitions(self) -> Result<Vec<NodeDefinition>, GenerateError> {
        Ok(self)
    }
}
