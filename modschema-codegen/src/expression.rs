//! Type-definition builder expressions.
//!
//! A [`TypeDefExpression`] is the source form of a type definition: a call
//! chain starting at the schema-builder root, e.g.
//!
//! ```text
//! io.dagger.client.Dagger.dag().typeDef().withListOf(io.dagger.client.Dagger.dag().typeDef().withObject("Container"))
//! ```

use crate::options::RenderOptions;
use modschema_core::{TypeDef, TypeDefNode};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Composable expression building one type definition.
///
/// Equality is structural over the type definition, descriptions included,
/// and matches equality of the serialized form. The default rendering omits
/// descriptions, so unequal expressions may render the same text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeDefExpression {
    type_def: TypeDef,
}

impl TypeDefExpression {
    /// Wraps a type definition.
    #[must_use]
    pub fn new(type_def: TypeDef) -> Self {
        Self { type_def }
    }

    /// Returns the underlying type definition.
    #[must_use]
    pub fn type_def(&self) -> &TypeDef {
        &self.type_def
    }

    /// Consumes the expression, returning the type definition.
    #[must_use]
    pub fn into_type_def(self) -> TypeDef {
        self.type_def
    }

    /// Renders the canonical textual form with default options.
    #[must_use]
    pub fn render(&self) -> String {
        self.render_with(&RenderOptions::default())
    }

    /// Renders the textual form with the given options.
    #[must_use]
    pub fn render_with(&self, options: &RenderOptions) -> String {
        let mut output = String::new();
        write_type_def(&mut output, &self.type_def, options);
        output
    }
}

impl From<TypeDef> for TypeDefExpression {
    fn from(type_def: TypeDef) -> Self {
        Self::new(type_def)
    }
}

impl fmt::Display for TypeDefExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

fn write_type_def(output: &mut String, type_def: &TypeDef, options: &RenderOptions) {
    output.push_str(&options.root);
    output.push_str(".typeDef()");

    match &type_def.node {
        TypeDefNode::Kind { kind } => {
            output.push_str(&format!(".withKind({}.{})", options.kind_enum, kind.name()));
        }
        TypeDefNode::ListOf { element } => {
            output.push_str(".withListOf(");
            write_type_def(output, element, options);
            output.push(')');
        }
        TypeDefNode::Object { name, description } => {
            write_named(output, "Object", name, description.as_deref(), options);
        }
        TypeDefNode::Enum { name, description } => {
            write_named(output, "Enum", name, description.as_deref(), options);
        }
        TypeDefNode::Scalar { name, description } => {
            write_named(output, "Scalar", name, description.as_deref(), options);
        }
    }

    if type_def.optional {
        output.push_str(".withOptional(true)");
    }
}

/// Writes `.withObject("Name")`, `.withEnum(...)` or `.withScalar(...)`.
fn write_named(
    output: &mut String,
    step: &str,
    name: &str,
    description: Option<&str>,
    options: &RenderOptions,
) {
    output.push_str(&format!(".with{}({}", step, string_literal(name)));

    if let Some(text) = description.filter(|_| options.include_descriptions) {
        output.push_str(&format!(
            ", new {}.With{}Arguments().withDescription({})",
            options.type_def_class,
            step,
            string_literal(text)
        ));
    }

    output.push(')');
}

/// Quotes and escapes a string as a source literal.
fn string_literal(value: &str) -> String {
    let mut literal = String::with_capacity(value.len() + 2);
    literal.push('"');
    for c in value.chars() {
        match c {
            '"' => literal.push_str("\\\""),
            '\\' => literal.push_str("\\\\"),
            '\n' => literal.push_str("\\n"),
            '\r' => literal.push_str("\\r"),
            '\t' => literal.push_str("\\t"),
            c if c.is_control() => literal.push_str(&format!("\\u{:04x}", c as u32)),
            c => literal.push(c),
        }
    }
    literal.push('"');
    literal
}
