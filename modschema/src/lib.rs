//! # modschema
//!
//! Resolve host-language type references into the type definitions a module
//! schema API understands.
//!
//! Each type occurrence found while scanning a module (a parameter, a return
//! type, a field) is described by a [`TypeDescriptor`]. The resolver turns it
//! into a [`TypeDefExpression`], a builder call chain that can be embedded in
//! generated registration code.
//!
//! ## Quick Start
//!
//! ```ignore
//! use modschema::prelude::*;
//!
//! let registry = TypeRegistry::with_builtins().with_object("com.example.Container");
//! let resolver = TypeDescriptorResolver::new(&registry);
//!
//! let expr = resolver.resolve(&TypeDescriptor::declared("java.util.List<com.example.Container>"))?;
//! assert_eq!(
//!     expr.render(),
//!     "io.dagger.client.Dagger.dag().typeDef().withListOf(io.dagger.client.Dagger.dag().typeDef().withObject(\"Container\"))",
//! );
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`] - Descriptors, type-definition IR, introspection trait, errors
//! - [`registry`] - Type registry and XML manifest parsing
//! - [`codegen`] - Resolver and expression rendering

pub mod prelude;

/// Descriptors, type-definition IR and resolution errors.
pub mod core {
    pub use modschema_core::*;
}

/// Type registry and manifest parsing.
pub mod registry {
    pub use modschema_registry::*;
}

/// Type-descriptor resolution and rendering.
pub mod codegen {
    pub use modschema_codegen::*;
}

// Re-export commonly used items at the crate root
pub use modschema_codegen::{
    CodegenError, RenderOptions, ResolverConfig, TypeDefExpression, TypeDescriptorResolver,
    resolve_from_file, resolve_from_manifest,
};
pub use modschema_core::{
    KindTag, TypeClass, TypeDef, TypeDefKind, TypeDescriptor, TypeIntrospector,
    TypeResolutionError,
};
pub use modschema_registry::{TypeRegistry, parse_manifest, validate_registry};
