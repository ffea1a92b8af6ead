//! Error types for type resolution.

use thiserror::Error;

/// Error raised when a type reference cannot be turned into a type definition.
///
/// Every variant carries the qualified name of the offending type so the
/// caller can report a diagnostic at the usage site.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeResolutionError {
    /// The type could not be located by the introspection collaborator.
    #[error("type '{qualified_name}' could not be found")]
    NotFound {
        /// Qualified name of the type.
        qualified_name: String,
    },

    /// The textual generic form is not well formed.
    #[error("malformed generic type '{qualified_name}': {reason}")]
    MalformedGeneric {
        /// Qualified name of the type.
        qualified_name: String,
        /// What is wrong with it.
        reason: String,
    },

    /// The type is well formed but has no type-definition equivalent.
    #[error("unsupported type shape '{qualified_name}': {reason}")]
    UnsupportedShape {
        /// Qualified name of the type.
        qualified_name: String,
        /// Why the shape is unsupported.
        reason: String,
    },

    /// Array or generic nesting exceeded the configured limit.
    #[error("type '{qualified_name}' nests deeper than {max_depth} levels")]
    DepthExceeded {
        /// Qualified name of the type.
        qualified_name: String,
        /// Configured maximum depth.
        max_depth: usize,
    },
}

impl TypeResolutionError {
    /// Creates a not-found error.
    pub fn not_found(qualified_name: impl Into<String>) -> Self {
        Self::NotFound {
            qualified_name: qualified_name.into(),
        }
    }

    /// Creates a malformed generic error.
    pub fn malformed(qualified_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedGeneric {
            qualified_name: qualified_name.into(),
            reason: reason.into(),
        }
    }

    /// Creates an unsupported shape error.
    pub fn unsupported(qualified_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::UnsupportedShape {
            qualified_name: qualified_name.into(),
            reason: reason.into(),
        }
    }

    /// Returns the qualified name of the type that failed to resolve.
    #[must_use]
    pub fn qualified_name(&self) -> &str {
        match self {
            Self::NotFound { qualified_name }
            | Self::MalformedGeneric { qualified_name, .. }
            | Self::UnsupportedShape { qualified_name, .. }
            | Self::DepthExceeded { qualified_name, .. } => qualified_name,
        }
    }
}

/// Result type alias for type resolution.
pub type Result<T> = std::result::Result<T, TypeResolutionError>;
