//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and traits.
//!
//! ```ignore
//! use modschema::prelude::*;
//! ```

// Core types
pub use modschema_core::error::{Result as ResolutionResult, TypeResolutionError};
pub use modschema_core::{KindTag, TypeClass, TypeDef, TypeDefKind, TypeDescriptor};
pub use modschema_core::{TypeIntrospector, simple_name};

// Registry types
pub use modschema_registry::{
    ParseError, RegisteredType, RegistryError, TypeRegistry, parse_manifest, validate_registry,
};

// Codegen types
pub use modschema_codegen::{
    CodegenError, RenderOptions, ResolverConfig, TypeDefExpression, TypeDescriptorResolver,
};
