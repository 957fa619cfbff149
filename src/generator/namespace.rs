//! Category tree aliasing builders under sanitized host category paths.

use super::Entry;
use super::ident::{ident, sanitize};
use crate::error::GenerateError;
use indexmap::IndexMap;
use indexmap::map::Entry as MapEntry;
use std::fmt::{self, Write};

#[derive(Debug)]
enum Item {
    Module(Module),
    Leaf { builder: String, definition: String },
}

#[derive(Debug, Default)]
struct Module {
    items: IndexMap<String, Item>,
}

#[derive(Debug, Default)]
pub(crate) struct Namespace {
    root: Module,
}

impl Namespace {
    /// Places every definition at its category path, keyed by its sanitized name.
    ///
    /// Fails on the first `(path, name)` pair claimed twice, or on a name that is
    /// already a module at the same level.
    pub(crate) fn build(entries: &[Entry<'_>]) -> Result<Self, GenerateError> {
        let mut namespace = Self::default();
        for entry in entries {
            let def = entry.definition;
            let mut path: Vec<String> = Vec::new();
            let mut module = &mut namespace.root;

            for raw in &def.category {
                let segment = sanitize(raw);
                if segment.is_empty() {
                    log::warn!(
                        "Definition '{}' has an empty category segment in {:?}; placing it under '{}'",
                        def.name,
                        def.category,
                        path.join("/")
                    );
                    continue;
                }
                let segment = ident(&segment);
                let item = module
                    .items
                    .entry(segment.clone())
                    .or_insert_with(|| Item::Module(Module::default()));
                module = match item {
                    Item::Module(child) => child,
                    Item::Leaf { definition, .. } => {
                        return Err(GenerateError::NamespaceCollision {
                            path: path.join("/"),
                            name: segment,
                            existing: definition.clone(),
                            incoming: def.name.clone(),
                        });
                    }
                };
                path.push(segment);
            }

            let name = ident(&def.name);
            match module.items.entry(name) {
                MapEntry::Occupied(occupied) => {
                    let existing = match occupied.get() {
                        Item::Leaf { definition, .. } => definition.clone(),
                        Item::Module(_) => format!("module {}", occupied.key()),
                    };
                    return Err(GenerateError::NamespaceCollision {
                        path: path.join("/"),
                        name: occupied.key().clone(),
                        existing,
                        incoming: def.name.clone(),
                    });
                }
                MapEntry::Vacant(vacant) => {
                    vacant.insert(Item::Leaf {
                        builder: entry.builder.clone(),
                        definition: def.name.clone(),
                    });
                }
            }
        }
        Ok(namespace)
    }

    pub(crate) fn render(&self) -> Result<String, fmt::Error> {
        let mut out = String::new();
        writeln!(out, "/// Builders grouped by host category.")?;
        writeln!(out, "pub mod nodes {{")?;
        render_module(&mut out, &self.root, 1)?;
        write!(out, "}}")?;
        Ok(out)
    }
}

fn render_module(out: &mut String, module: &Module, depth: usize) -> fmt::Result {
    let indent = "    ".repeat(depth);
    for (name, item) in &module.items {
        match item {
            Item::Module(child) => {
                writeln!(out, "{}pub mod {} {{", indent, name)?;
                render_module(out, child, depth + 1)?;
                writeln!(out, "{}}}", indent)?;
            }
            Item::Leaf { builder, .. } => {
                writeln!(
                    out,
                    "{}pub use {}{} as {};",
                    indent,
                    "super::".repeat(depth),
                    builder,
                    name
                )?;
            }
        }
    }
    Ok(())
}
