//! Typed-binding generator.
//!
//! Turns a batch of [`NodeDefinition`]s into one Rust source document:
//!
//! 1. the stub prelude, with a `types` module holding one marker type per nominal host type
//!    and one enum per distinct choice set,
//! 2. one builder struct per definition, named `{ClassName}_{id:04}` where `id` is the
//!    definition's position in the batch,
//! 3. a `nodes` module aliasing every builder under its sanitized category path.
//!
//! Any error aborts the whole batch.

use crate::definition::NodeDefinition;
use crate::error::GenerateError;
use std::time::Instant;

mod class;
pub mod ident;
mod literal;
mod namespace;
mod template;
mod universe;

use namespace::Namespace;
pub use template::{CRATE_PATH_PLACEHOLDER, DEFAULT_TEMPLATE, TYPES_ANCHOR};
use template::StubTemplate;
use universe::TypeUniverse;

/// One definition paired with its generation id.
#[derive(Debug)]
pub(crate) struct Entry<'a> {
    pub(crate) definition: &'a NodeDefinition,
    pub(crate) builder: String,
}

impl<'a> Entry<'a> {
    fn new(id: usize, definition: &'a NodeDefinition) -> Self {
        Self {
            builder: format!("{}_{:04}", ident::sanitize(&definition.class_name), id),
            definition,
        }
    }
}

pub struct GeneratorBuilder {
    definitions: Vec<NodeDefinition>,
    template: String,
    crate_path: String,
}

impl GeneratorBuilder {
    pub fn new(definitions: Vec<NodeDefinition>) -> Self {
        Self {
            definitions,
            template: DEFAULT_TEMPLATE.to_string(),
            crate_path: "nodebind".to_string(),
        }
    }

    /// Replaces the stub prelude. It must contain the [`TYPES_ANCHOR`] line.
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = template.into();
        self
    }

    /// Path under which generated code reaches this crate, `nodebind` by default.
    pub fn with_crate_path(mut self, crate_path: impl Into<String>) -> Self {
        self.crate_path = crate_path.into();
        self
    }

    pub fn build(self) -> Generator {
        Generator {
            definitions: self.definitions,
            template: self.template,
            crate_path: self.crate_path,
        }
    }
}

pub struct Generator {
    definitions: Vec<NodeDefinition>,
    template: String,
    crate_path: String,
}

impl Generator {
    pub fn builder(definitions: Vec<NodeDefinition>) -> GeneratorBuilder {
        GeneratorBuilder::new(definitions)
    }

    pub fn definitions(&self) -> &[NodeDefinition] {
        &self.definitions
    }

    /// Produces the binding document. Deterministic for a given batch.
    pub fn generate(&self) -> Result<String, GenerateError> {
        let start = Instant::now();
        for definition in &self.definitions {
            definition.validate()?;
        }

        let entries: Vec<Entry<'_>> = self
            .definitions
            .iter()
            .enumerate()
            .map(|(id, definition)| Entry::new(id, definition))
            .collect();

        let namespace = Namespace::build(&entries)?;
        let universe = TypeUniverse::build(&entries);

        let types = universe.render(&self.crate_path)?;
        let stub = StubTemplate::new(&self.template, &self.crate_path).splice(&types)?;

        let mut document = stub.trim_end().to_string();
        for entry in &entries {
            let block = class::render(entry, &universe, &self.crate_path)?;
            document.push_str("\n\n");
            document.push_str(block.trim_end());
        }
        document.push_str("\n\n");
        document.push_str(&namespace.render()?);
        document.push('\n');

        log::info!(
            "Generated bindings for {} definitions ({} bytes) in {:?}",
            entries.len(),
            document.len(),
            start.elapsed()
        );
        Ok(document)
    }
}
