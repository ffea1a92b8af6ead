//! # modschema Codegen
//!
//! Type-definition expressions for generated module registration code.
//!
//! This crate provides:
//! - Resolution of type descriptors into type-definition expressions
//! - Canonical rendering of expressions as builder call chains
//! - Resolver and rendering configuration
//! - Convenience entry points driven by a registry manifest

pub mod error;
pub mod expression;
pub mod options;
pub mod resolver;

pub use error::CodegenError;
pub use expression::TypeDefExpression;
pub use options::{RenderOptions, ResolverConfig};
pub use resolver::TypeDescriptorResolver;

use modschema_core::TypeDescriptor;

/// Resolves a descriptor against a registry manifest and renders the result.
///
/// # Arguments
/// * `xml` - Type registry manifest content
/// * `descriptor` - Type reference to resolve
///
/// # Returns
/// The rendered type-definition expression.
///
/// # Errors
/// Returns `CodegenError` if the manifest is invalid or resolution fails.
pub fn resolve_from_manifest(
    xml: &str,
    descriptor: &TypeDescriptor,
) -> Result<String, CodegenError> {
    let registry = modschema_registry::parse_manifest(xml)?;
    modschema_registry::validate_registry(&registry)?;
    let resolver = TypeDescriptorResolver::new(&registry);
    Ok(resolver.resolve(descriptor)?.render())
}

/// Resolves a descriptor against a registry manifest file and renders the
/// result.
///
/// # Arguments
/// * `path` - Path to the type registry manifest
/// * `descriptor` - Type reference to resolve
///
/// # Returns
/// The rendered type-definition expression.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, or resolution fails.
pub fn resolve_from_file(
    path: &std::path::Path,
    descriptor: &TypeDescriptor,
) -> Result<String, CodegenError> {
    let xml = std::fs::read_to_string(path)?;
    resolve_from_manifest(&xml, descriptor)
}
