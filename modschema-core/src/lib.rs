//! # modschema Core
//!
//! Core types for translating host-language type references into the
//! type-definition IR understood by the module schema API.
//!
//! This crate provides:
//! - Type descriptors (qualified name + kind tag) as supplied by the scanner
//! - The type-definition IR (`TypeDef`, `TypeDefKind`)
//! - The `TypeIntrospector` capability used to classify declared types
//! - Parsing of textual generic type names
//! - Error types for resolution failures

pub mod builtins;
pub mod descriptor;
pub mod error;
pub mod generics;
pub mod introspect;
pub mod typedef;

pub use descriptor::{KindTag, TypeDescriptor};
pub use error::{Result, TypeResolutionError};
pub use generics::{TypeName, parse_type_name};
pub use introspect::{TypeClass, TypeIntrospector, simple_name};
pub use typedef::{TypeDef, TypeDefKind, TypeDefNode};
