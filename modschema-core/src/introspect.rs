//! Type introspection capability.
//!
//! The resolver never inspects host types itself. It asks a collaborator
//! implementing [`TypeIntrospector`] how a declared type is classified.

use crate::error::Result;
use crate::typedef::TypeDefKind;
use serde::{Deserialize, Serialize};

/// Semantic classification of a declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeClass {
    /// Boxed primitive or string with a builtin kind.
    Primitive(TypeDefKind),
    /// Enumeration.
    Enum,
    /// Opaque value type with custom wire encoding.
    Scalar,
    /// Object-schema type.
    Object,
    /// List-like container taking one type argument.
    Container,
    /// Wrapper marking its single type argument as optional.
    Optional,
    /// Loadable but not recognized; treated as an object reference.
    Unknown,
}

impl TypeClass {
    /// Returns the lowercase name used in registry manifests.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Primitive(_) => "primitive",
            Self::Enum => "enum",
            Self::Scalar => "scalar",
            Self::Object => "object",
            Self::Container => "container",
            Self::Optional => "optional",
            Self::Unknown => "unknown",
        }
    }

    /// Returns true if values of this class are referenced by simple name.
    #[must_use]
    pub const fn is_named(&self) -> bool {
        matches!(self, Self::Enum | Self::Scalar | Self::Object)
    }
}

/// Read-only lookup of host type metadata.
///
/// Implementations must be safe to share between threads; the resolver may be
/// driven concurrently for independent type sites.
pub trait TypeIntrospector: Send + Sync {
    /// Classifies a type by its qualified name (without type arguments).
    ///
    /// # Errors
    /// Returns `TypeResolutionError::NotFound` if the type cannot be loaded.
    fn classify(&self, qualified_name: &str) -> Result<TypeClass>;

    /// Returns the unqualified name the schema identifies the type by.
    fn simple_name(&self, qualified_name: &str) -> String {
        simple_name(qualified_name).to_string()
    }

    /// Returns documentation attached to the type, if any.
    fn description(&self, _qualified_name: &str) -> Option<String> {
        None
    }
}

impl<T: TypeIntrospector + ?Sized> TypeIntrospector for &T {
    fn classify(&self, qualified_name: &str) -> Result<TypeClass> {
        (**self).classify(qualified_name)
    }

    fn simple_name(&self, qualified_name: &str) -> String {
        (**self).simple_name(qualified_name)
    }

    fn description(&self, qualified_name: &str) -> Option<String> {
        (**self).description(qualified_name)
    }
}

/// Strips the package and enclosing types from a qualified name.
///
/// Both `.` and the binary nested-class separator `$` are treated as
/// namespace separators.
#[must_use]
pub fn simple_name(qualified_name: &str) -> &str {
    let name = qualified_name.trim();
    name.rsplit(['.', '$']).next().unwrap_or(name)
}
