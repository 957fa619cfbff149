//! The type-universe pass: one declaration per host type the built-ins do not cover.

use super::Entry;
use super::ident::{ident, sanitize};
use super::literal;
use crate::definition::TypeSpec;
use crate::types::ValueType;
use ahash::AHashSet;
use indexmap::IndexMap;
use serde_json::Value;
use std::fmt::Write;

const RESERVED: &[&str] = &["INT", "FLOAT", "STRING", "BOOLEAN", "Any"];

/// Associated functions `choice_type!` defines on every enum.
const CHOICE_METHODS: &[&str] = &["as_value", "choices"];

#[derive(Debug)]
struct ChoiceDecl {
    ident: String,
    value_type: ValueType,
    literals: Vec<Value>,
    variants: Vec<String>,
}

/// Registry from host type to the generated marker type that names it.
#[derive(Debug)]
pub(crate) struct TypeUniverse {
    taken: AHashSet<String>,
    nominals: IndexMap<String, String>,
    choices: Vec<ChoiceDecl>,
}

/// Claims `raw` as an identifier in `taken`, suffixing `_2`, `_3`, ... on collision.
fn claim(taken: &mut AHashSet<String>, raw: &str) -> String {
    let first = ident(raw);
    if taken.insert(first.clone()) {
        return first;
    }
    let base = match sanitize(raw) {
        base if base.is_empty() => "_blank".to_string(),
        base => base,
    };
    let mut n = 2;
    loop {
        let candidate = format!("{}_{}", base, n);
        if taken.insert(candidate.clone()) {
            return candidate;
        }
        n += 1;
    }
}

impl TypeUniverse {
    /// Scans every input and output type in definition order, then field order.
    pub(crate) fn build(entries: &[Entry<'_>]) -> Self {
        let mut universe = Self {
            taken: RESERVED.iter().map(|name| name.to_string()).collect(),
            nominals: IndexMap::new(),
            choices: Vec::new(),
        };

        for entry in entries {
            let def = entry.definition;
            for input in &def.inputs {
                universe.observe(&input.ty, &def.class_name, &input.name);
            }
            for (i, output) in def.outputs.iter().enumerate() {
                let slot = output.name.clone().unwrap_or_else(|| format!("out{}", i));
                universe.observe(&output.ty, &def.class_name, &slot);
            }
        }

        log::debug!(
            "Type universe: {} nominal types, {} choice sets",
            universe.nominals.len(),
            universe.choices.len()
        );
        universe
    }

    fn observe(&mut self, spec: &TypeSpec, class_name: &str, slot: &str) {
        match spec {
            TypeSpec::Named(name) => {
                if ValueType::is_builtin_name(name) || self.nominals.contains_key(name) {
                    return;
                }
                let ident = claim(&mut self.taken, name);
                log::debug!("Declaring nominal type {} as {}", name, ident);
                self.nominals.insert(name.clone(), ident);
            }
            TypeSpec::Choice(literals) if literals.is_empty() => {}
            TypeSpec::Choice(literals) => {
                let value_type = spec.value_type();
                if self.choices.iter().any(|decl| decl.value_type == value_type) {
                    return;
                }
                let ident = claim(
                    &mut self.taken,
                    &format!("{}_{}", sanitize(class_name), sanitize(slot)),
                );
                let mut taken_variants: AHashSet<String> =
                    CHOICE_METHODS.iter().map(|name| name.to_string()).collect();
                let variants = literals
                    .iter()
                    .map(|literal| {
                        let raw = match literal {
                            Value::String(s) => s.clone(),
                            other => other.to_string(),
                        };
                        claim(&mut taken_variants, &raw)
                    })
                    .collect();
                self.choices.push(ChoiceDecl {
                    ident,
                    value_type,
                    literals: literals.clone(),
                    variants,
                });
            }
        }
    }

    /// Path of the marker type for `spec`, relative to the generated module root.
    pub(crate) fn rust_type(&self, spec: &TypeSpec) -> String {
        let ident = match spec {
            TypeSpec::Named(name) => match name.as_str() {
                "INT" | "FLOAT" | "STRING" | "BOOLEAN" => name.as_str(),
                "*" => "Any",
                other => self.nominals.get(other).map_or("Any", String::as_str),
            },
            TypeSpec::Choice(literals) if literals.is_empty() => "Any",
            TypeSpec::Choice(_) => {
                let value_type = spec.value_type();
                self.choices
                    .iter()
                    .find(|decl| decl.value_type == value_type)
                    .map_or("Any", |decl| decl.ident.as_str())
            }
        };
        format!("types::{}", ident)
    }

    /// The declarations spliced into the template's `types` module.
    pub(crate) fn render(&self, crate_path: &str) -> Result<String, std::fmt::Error> {
        let mut out = String::new();
        for (name, ident) in &self.nominals {
            writeln!(out, "{}::nominal_type!(pub {}, {:?});", crate_path, ident, name)?;
        }
        for decl in &self.choices {
            writeln!(out, "{}::choice_type!(pub {} {{", crate_path, decl.ident)?;
            for (variant, value) in decl.variants.iter().zip(&decl.literals) {
                writeln!(out, "    {} => {},", variant, literal::render(value, crate_path))?;
            }
            writeln!(out, "}});")?;
        }
        Ok(out)
    }
}
