//! Type-definition IR.
//!
//! This is the schema-service facing representation of a type: one node
//! (a builtin kind, a list, or a named enum/scalar/object reference) plus an
//! optionality flag.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a type definition, as named by the schema API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TypeDefKind {
    /// UTF-8 string.
    StringKind,
    /// Integer of any width.
    IntegerKind,
    /// Floating point number.
    FloatKind,
    /// Boolean.
    BooleanKind,
    /// Absence of a value.
    VoidKind,
    /// Reference to an object type.
    ObjectKind,
    /// Reference to an enum type.
    EnumKind,
    /// Reference to a custom scalar.
    ScalarKind,
    /// List of another type definition.
    ListKind,
}

impl TypeDefKind {
    /// Returns the schema API constant name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::StringKind => "STRING_KIND",
            Self::IntegerKind => "INTEGER_KIND",
            Self::FloatKind => "FLOAT_KIND",
            Self::BooleanKind => "BOOLEAN_KIND",
            Self::VoidKind => "VOID_KIND",
            Self::ObjectKind => "OBJECT_KIND",
            Self::EnumKind => "ENUM_KIND",
            Self::ScalarKind => "SCALAR_KIND",
            Self::ListKind => "LIST_KIND",
        }
    }

    /// Parses a kind from its schema API constant name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "STRING_KIND" => Some(Self::StringKind),
            "INTEGER_KIND" => Some(Self::IntegerKind),
            "FLOAT_KIND" => Some(Self::FloatKind),
            "BOOLEAN_KIND" => Some(Self::BooleanKind),
            "VOID_KIND" => Some(Self::VoidKind),
            "OBJECT_KIND" => Some(Self::ObjectKind),
            "ENUM_KIND" => Some(Self::EnumKind),
            "SCALAR_KIND" => Some(Self::ScalarKind),
            "LIST_KIND" => Some(Self::ListKind),
            _ => None,
        }
    }

    /// Returns true for kinds that are emitted directly through `withKind`.
    #[must_use]
    pub const fn is_builtin(&self) -> bool {
        matches!(
            self,
            Self::StringKind
                | Self::IntegerKind
                | Self::FloatKind
                | Self::BooleanKind
                | Self::VoidKind
        )
    }
}

impl fmt::Display for TypeDefKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The single builder step applied after `typeDef()`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum TypeDefNode {
    /// `withKind(kind)`.
    Kind {
        /// Builtin kind.
        kind: TypeDefKind,
    },
    /// `withListOf(element)`.
    ListOf {
        /// Element type definition.
        element: Box<TypeDef>,
    },
    /// `withObject(name)`.
    Object {
        /// Simple name of the object type.
        name: String,
        /// Documentation attached to the type.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    },
    /// `withEnum(name)`.
    Enum {
        /// Simple name of the enum type.
        name: String,
        /// Documentation attached to the type.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    },
    /// `withScalar(name)`.
    Scalar {
        /// Simple name of the scalar type.
        name: String,
        /// Documentation attached to the type.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    },
}

/// A complete type definition node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeDef {
    /// Builder step describing the type.
    #[serde(flatten)]
    pub node: TypeDefNode,
    /// Whether a value may be absent.
    #[serde(default)]
    pub optional: bool,
}

impl TypeDef {
    fn from_node(node: TypeDefNode) -> Self {
        Self {
            node,
            optional: false,
        }
    }

    /// Creates a builtin kind definition.
    #[must_use]
    pub fn with_kind(kind: TypeDefKind) -> Self {
        Self::from_node(TypeDefNode::Kind { kind })
    }

    /// Creates a list definition.
    #[must_use]
    pub fn with_list_of(element: TypeDef) -> Self {
        Self::from_node(TypeDefNode::ListOf {
            element: Box::new(element),
        })
    }

    /// Creates an object reference.
    #[must_use]
    pub fn with_object(name: impl Into<String>) -> Self {
        Self::from_node(TypeDefNode::Object {
            name: name.into(),
            description: None,
        })
    }

    /// Creates an enum reference.
    #[must_use]
    pub fn with_enum(name: impl Into<String>) -> Self {
        Self::from_node(TypeDefNode::Enum {
            name: name.into(),
            description: None,
        })
    }

    /// Creates a scalar reference.
    #[must_use]
    pub fn with_scalar(name: impl Into<String>) -> Self {
        Self::from_node(TypeDefNode::Scalar {
            name: name.into(),
            description: None,
        })
    }

    /// Sets the optional flag. `false` never clears an optional `void`.
    #[must_use]
    pub fn with_optional(mut self, optional: bool) -> Self {
        self.optional |= optional;
        self
    }

    /// Attaches a description to a named reference. Ignored for other nodes.
    #[must_use]
    pub fn with_description(mut self, text: Option<String>) -> Self {
        if let TypeDefNode::Object { description, .. }
        | TypeDefNode::Enum { description, .. }
        | TypeDefNode::Scalar { description, .. } = &mut self.node
        {
            *description = text;
        }
        self
    }

    /// Returns the kind of this definition.
    #[must_use]
    pub fn kind(&self) -> TypeDefKind {
        match &self.node {
            TypeDefNode::Kind { kind } => *kind,
            TypeDefNode::ListOf { .. } => TypeDefKind::ListKind,
            TypeDefNode::Object { .. } => TypeDefKind::ObjectKind,
            TypeDefNode::Enum { .. } => TypeDefKind::EnumKind,
            TypeDefNode::Scalar { .. } => TypeDefKind::ScalarKind,
        }
    }

    /// Returns the referenced type name for object/enum/scalar nodes.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match &self.node {
            TypeDefNode::Object { name, .. }
            | TypeDefNode::Enum { name, .. }
            | TypeDefNode::Scalar { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Returns the list element, if this is a list.
    #[must_use]
    pub fn element(&self) -> Option<&TypeDef> {
        match &self.node {
            TypeDefNode::ListOf { element } => Some(element),
            _ => None,
        }
    }
}
