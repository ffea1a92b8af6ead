//! Type descriptors supplied by the source scanner.
//!
//! A descriptor identifies a host-language type at one usage site: a method
//! parameter, a return type or a field.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Syntactic category of a type reference.
///
/// This is the coarse tag reported by the host compiler, independent of the
/// semantic classification the resolver performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KindTag {
    /// `boolean`.
    Boolean,
    /// `byte`.
    Byte,
    /// `short`.
    Short,
    /// `int`.
    Int,
    /// `long`.
    Long,
    /// `char`.
    Char,
    /// `float`.
    Float,
    /// `double`.
    Double,
    /// `void`.
    Void,
    /// A declared class, interface, enum or record.
    Declared,
    /// An array type.
    Array,
}

impl KindTag {
    /// Parses a kind tag from the host compiler's kind name (`"INT"`, `"DECLARED"`...).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_uppercase().as_str() {
            "BOOLEAN" => Some(Self::Boolean),
            "BYTE" => Some(Self::Byte),
            "SHORT" => Some(Self::Short),
            "INT" => Some(Self::Int),
            "LONG" => Some(Self::Long),
            "CHAR" => Some(Self::Char),
            "FLOAT" => Some(Self::Float),
            "DOUBLE" => Some(Self::Double),
            "VOID" => Some(Self::Void),
            "DECLARED" => Some(Self::Declared),
            "ARRAY" => Some(Self::Array),
            _ => None,
        }
    }

    /// Returns the host compiler's kind name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Boolean => "BOOLEAN",
            Self::Byte => "BYTE",
            Self::Short => "SHORT",
            Self::Int => "INT",
            Self::Long => "LONG",
            Self::Char => "CHAR",
            Self::Float => "FLOAT",
            Self::Double => "DOUBLE",
            Self::Void => "VOID",
            Self::Declared => "DECLARED",
            Self::Array => "ARRAY",
        }
    }

    /// Returns the tag of a primitive keyword (`int`, `boolean`, `void`...).
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "boolean" => Some(Self::Boolean),
            "byte" => Some(Self::Byte),
            "short" => Some(Self::Short),
            "int" => Some(Self::Int),
            "long" => Some(Self::Long),
            "char" => Some(Self::Char),
            "float" => Some(Self::Float),
            "double" => Some(Self::Double),
            "void" => Some(Self::Void),
            _ => None,
        }
    }

    /// Returns true for the integer-family primitives.
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Self::Byte | Self::Short | Self::Int | Self::Long)
    }

    /// Returns true for the floating point primitives.
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Self::Float | Self::Double)
    }
}

impl fmt::Display for KindTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Normalized reference to a host-language type at one usage site.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeDescriptor {
    /// Fully qualified name, primitive keyword, `Outer<Inner>` or `Element[]`.
    pub qualified_name: String,
    /// Syntactic category of the reference.
    pub kind_tag: KindTag,
    /// Whether the usage site is annotated as nullable.
    #[serde(default)]
    pub optional: bool,
}

impl TypeDescriptor {
    /// Creates a new descriptor.
    #[must_use]
    pub fn new(qualified_name: impl Into<String>, kind_tag: KindTag) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            kind_tag,
            optional: false,
        }
    }

    /// Creates a descriptor for a declared type.
    #[must_use]
    pub fn declared(qualified_name: impl Into<String>) -> Self {
        Self::new(qualified_name, KindTag::Declared)
    }

    /// Creates a descriptor for an array type, e.g. `java.lang.String[]`.
    #[must_use]
    pub fn array(qualified_name: impl Into<String>) -> Self {
        Self::new(qualified_name, KindTag::Array)
    }

    /// Creates a descriptor from a primitive keyword or falls back to `Declared`.
    #[must_use]
    pub fn infer(qualified_name: impl Into<String>) -> Self {
        let qualified_name = qualified_name.into();
        let kind_tag = if qualified_name.ends_with("[]") {
            KindTag::Array
        } else {
            KindTag::from_keyword(&qualified_name).unwrap_or(KindTag::Declared)
        };
        Self::new(qualified_name, kind_tag)
    }

    /// Marks the usage site as nullable.
    #[must_use]
    pub fn nullable(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Returns the element descriptor of an array descriptor.
    ///
    /// One `[]` suffix is stripped; the element's tag is derived from what
    /// remains. Returns `None` if the name carries no array suffix.
    #[must_use]
    pub fn array_element(&self) -> Option<Self> {
        let element = self.qualified_name.trim_end().strip_suffix("[]")?;
        Some(Self::infer(element.trim_end()))
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.qualified_name, self.kind_tag)
    }
}
