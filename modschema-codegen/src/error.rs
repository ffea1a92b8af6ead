//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Registry manifest parsing error.
    #[error("manifest parse error: {0}")]
    Parse(#[from] modschema_registry::ParseError),

    /// Registry validation error.
    #[error("registry error: {0}")]
    Registry(#[from] modschema_registry::RegistryError),

    /// Type resolution error.
    #[error("resolution error: {0}")]
    Resolution(#[from] modschema_core::TypeResolutionError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
