use super::Entry;
use super::ident::sanitize;
use super::literal;
use super::universe::TypeUniverse;
use crate::definition::{InputSpec, TypeSpec};
use ahash::AHashSet;
use std::fmt::{self, Write};

/// Renders the builder struct and its impl blocks for one definition.
pub(crate) fn render(
    entry: &Entry<'_>,
    universe: &TypeUniverse,
    crate_path: &str,
) -> Result<String, fmt::Error> {
    let def = entry.definition;
    let builder = &entry.builder;
    let inputs: Vec<&InputSpec> = def.ordered_inputs().collect();
    let mut out = String::new();

    writeln!(out, "/// Builder for `{}`.", def.name)?;
    writeln!(out, "pub struct {} {{", builder)?;
    writeln!(out, "    node: Node,")?;
    writeln!(out, "}}")?;
    writeln!(out)?;
    writeln!(out, "impl {} {{", builder)?;
    writeln!(out, "    pub const TYPE_NAME: &'static str = {:?};", def.name)?;
    writeln!(out, "    pub const INPUT_LENGTH: usize = {};", inputs.len())?;
    writeln!(out, "    pub const OUTPUT_LENGTH: usize = {};", def.outputs.len())?;
    writeln!(out)?;

    // Constructor: inputs in required-then-optional order, then outputs.
    writeln!(out, "    pub fn new() -> Self {{")?;
    writeln!(out, "        let node = Node::new(Self::TYPE_NAME);")?;
    for input in &inputs {
        let initial = match input.default_value() {
            Some(value) => format!("InputValue::literal({})", literal::render(value, crate_path)),
            None if input.required => "InputValue::PendingLink".to_string(),
            None => "InputValue::Omitted".to_string(),
        };
        writeln!(
            out,
            "        node.register_input({:?}, <{} as SlotType>::value_type(), {});",
            input.name,
            universe.rust_type(&input.ty),
            initial
        )?;
    }
    for output in &def.outputs {
        let name = match &output.name {
            Some(name) => format!("Some({:?})", name),
            None => "None".to_string(),
        };
        writeln!(
            out,
            "        node.register_output({}, <{} as SlotType>::value_type());",
            name,
            universe.rust_type(&output.ty)
        )?;
    }
    writeln!(out, "        Self {{ node }}")?;
    writeln!(out, "    }}")?;
    writeln!(out)?;

    writeln!(out, "    /// Creates the node and registers it with `scope`.")?;
    writeln!(out, "    pub fn new_in(scope: &mut Scope<'_>) -> Self {{")?;
    writeln!(out, "        let this = Self::new();")?;
    writeln!(out, "        scope.add(&this);")?;
    writeln!(out, "        this")?;
    writeln!(out, "    }}")?;
    writeln!(out)?;
    writeln!(out, "    pub fn node(&self) -> &Node {{")?;
    writeln!(out, "        &self.node")?;
    writeln!(out, "    }}")?;

    // Literal setters.
    for (i, input) in inputs.iter().enumerate() {
        let ty = universe.rust_type(&input.ty);
        let field = sanitize(&input.name);
        writeln!(out)?;
        if input.required {
            writeln!(
                out,
                "    pub fn with_{}(self, value: impl Into<<{} as SlotType>::Literal>) -> Self {{",
                field, ty
            )?;
            writeln!(out, "        let value: <{} as SlotType>::Literal = value.into();", ty)?;
            writeln!(out, "        self.node.bind_value({}, InputValue::literal(value));", i)?;
        } else {
            writeln!(
                out,
                "    pub fn with_{}(self, value: impl Into<Option<<{} as SlotType>::Literal>>) -> Self {{",
                field, ty
            )?;
            writeln!(
                out,
                "        let value: Option<<{} as SlotType>::Literal> = value.into();",
                ty
            )?;
            writeln!(out, "        self.node.bind_value({}, InputValue::optional(value));", i)?;
        }
        writeln!(out, "        self")?;
        writeln!(out, "    }}")?;
    }

    // Input accessors, by index and by name.
    for (i, input) in inputs.iter().enumerate() {
        let ty = universe.rust_type(&input.ty);
        for accessor in [i.to_string(), sanitize(&input.name)] {
            writeln!(out)?;
            writeln!(out, "    pub fn in_{}(&self) -> Input<{}> {{", accessor, ty)?;
            writeln!(out, "        Input::new(&self.node, {})", i)?;
            writeln!(out, "    }}")?;
        }
    }
    writeln!(out)?;
    writeln!(
        out,
        "    pub fn input(&self, key: impl Into<SlotKey>) -> Result<InputHandle, GraphError> {{"
    )?;
    writeln!(out, "        self.node.input(key)")?;
    writeln!(out, "    }}")?;

    // Output accessors: index and name first, then type name for the first output of each
    // type. Matches the lookup order of `Node::output`.
    let mut accessors = Vec::new();
    for (i, output) in def.outputs.iter().enumerate() {
        accessors.push((i.to_string(), i));
        if let Some(name) = &output.name {
            accessors.push((sanitize(name), i));
        }
    }
    for (i, output) in def.outputs.iter().enumerate() {
        if let TypeSpec::Named(type_name) = &output.ty {
            if type_name != "*" {
                accessors.push((sanitize(type_name), i));
            }
        }
    }
    let mut used = AHashSet::new();
    for (accessor, i) in accessors {
        if !used.insert(accessor.clone()) {
            continue;
        }
        writeln!(out)?;
        writeln!(
            out,
            "    pub fn out_{}(&self) -> Output<{}> {{",
            accessor,
            universe.rust_type(&def.outputs[i].ty)
        )?;
        writeln!(out, "        Output::new(&self.node, {})", i)?;
        writeln!(out, "    }}")?;
    }
    writeln!(out)?;
    writeln!(
        out,
        "    pub fn output(&self, key: impl Into<SlotKey>) -> Result<OutputHandle, GraphError> {{"
    )?;
    writeln!(out, "        self.node.output(key)")?;
    writeln!(out, "    }}")?;
    writeln!(out, "}}")?;
    writeln!(out)?;

    writeln!(out, "impl Default for {} {{", builder)?;
    writeln!(out, "    fn default() -> Self {{")?;
    writeln!(out, "        Self::new()")?;
    writeln!(out, "    }}")?;
    writeln!(out, "}}")?;
    writeln!(out)?;
    writeln!(out, "impl AsRef<Node> for {} {{", builder)?;
    writeln!(out, "    fn as_ref(&self) -> &Node {{")?;
    writeln!(out, "        &self.node")?;
    writeln!(out, "    }}")?;
    writeln!(out, "}}")?;

    Ok(out)
}
