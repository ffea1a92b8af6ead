//! # modschema Registry
//!
//! Static type metadata for the resolver.
//!
//! This crate provides:
//! - An in-memory type registry implementing `TypeIntrospector`
//! - Builtin registrations for boxed primitives, containers and optionals
//! - XML manifest parsing for module type registries
//! - Registry validation

pub mod error;
pub mod parser;
pub mod types;
pub mod validation;

pub use error::{ParseError, RegistryError};
pub use parser::{parse_manifest, parse_manifest_file};
pub use types::{RegisteredType, TypeRegistry};
pub use validation::validate_registry;
