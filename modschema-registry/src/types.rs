//! Registry type definitions.
//!
//! The registry holds the static metadata of the host types a module exposes:
//! which declared types are enums, scalars, objects, containers or optional
//! wrappers.

use modschema_core::builtins::{BOXED_TYPES, LIST_CONTAINERS, OPTIONAL_WRAPPERS};
use modschema_core::{TypeClass, TypeIntrospector, TypeResolutionError};
use std::collections::HashMap;

/// A type known to the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredType {
    /// Fully qualified name.
    pub qualified_name: String,
    /// Classification of the type.
    pub class: TypeClass,
    /// Description.
    pub description: Option<String>,
}

impl RegisteredType {
    /// Creates a new registered type.
    #[must_use]
    pub fn new(qualified_name: impl Into<String>, class: TypeClass) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            class,
            description: None,
        }
    }

    /// Attaches a description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns the unqualified name.
    #[must_use]
    pub fn simple_name(&self) -> &str {
        modschema_core::simple_name(&self.qualified_name)
    }
}

/// In-memory type registry.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    /// Registered types, in registration order.
    pub types: Vec<RegisteredType>,
    /// Type lookup map.
    type_map: HashMap<String, usize>,
}

impl TypeRegistry {
    /// Creates a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the builtin boxed types, containers and
    /// optional wrappers.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.add_builtins();
        registry
    }

    /// Registers the builtin types that are not registered yet.
    pub fn add_builtins(&mut self) {
        let builtins = BOXED_TYPES
            .iter()
            .map(|&(name, kind)| RegisteredType::new(name, TypeClass::Primitive(kind)))
            .chain(
                LIST_CONTAINERS
                    .iter()
                    .map(|&name| RegisteredType::new(name, TypeClass::Container)),
            )
            .chain(
                OPTIONAL_WRAPPERS
                    .iter()
                    .map(|&name| RegisteredType::new(name, TypeClass::Optional)),
            );

        for registered in builtins {
            if !self.has_type(&registered.qualified_name) {
                self.add_type(registered);
            }
        }
    }

    /// Adds a type, replacing and returning any previous registration.
    pub fn add_type(&mut self, registered: RegisteredType) -> Option<RegisteredType> {
        match self.type_map.get(&registered.qualified_name) {
            Some(&idx) => Some(std::mem::replace(&mut self.types[idx], registered)),
            None => {
                let index = self.types.len();
                self.type_map
                    .insert(registered.qualified_name.clone(), index);
                self.types.push(registered);
                None
            }
        }
    }

    /// Adds a type and returns the registry.
    #[must_use]
    pub fn with_type(mut self, qualified_name: impl Into<String>, class: TypeClass) -> Self {
        self.add_type(RegisteredType::new(qualified_name, class));
        self
    }

    /// Adds an enum type and returns the registry.
    #[must_use]
    pub fn with_enum(self, qualified_name: impl Into<String>) -> Self {
        self.with_type(qualified_name, TypeClass::Enum)
    }

    /// Adds a scalar type and returns the registry.
    #[must_use]
    pub fn with_scalar(self, qualified_name: impl Into<String>) -> Self {
        self.with_type(qualified_name, TypeClass::Scalar)
    }

    /// Adds an object type and returns the registry.
    #[must_use]
    pub fn with_object(self, qualified_name: impl Into<String>) -> Self {
        self.with_type(qualified_name, TypeClass::Object)
    }

    /// Looks up a type by qualified name.
    #[must_use]
    pub fn get_type(&self, qualified_name: &str) -> Option<&RegisteredType> {
        self.type_map
            .get(qualified_name.trim())
            .map(|&idx| &self.types[idx])
    }

    /// Returns true if a type with the given name is registered.
    #[must_use]
    pub fn has_type(&self, qualified_name: &str) -> bool {
        self.type_map.contains_key(qualified_name.trim())
    }

    /// Returns the number of registered types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Iterates over registered types in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &RegisteredType> {
        self.types.iter()
    }
}

impl TypeIntrospector for TypeRegistry {
    fn classify(&self, qualified_name: &str) -> modschema_core::Result<TypeClass> {
        let registered = self
            .get_type(qualified_name)
            .ok_or_else(|| TypeResolutionError::not_found(qualified_name))?;
        tracing::trace!(
            "classified {} as {}",
            registered.qualified_name,
            registered.class.name()
        );
        Ok(registered.class)
    }

    fn description(&self, qualified_name: &str) -> Option<String> {
        self.get_type(qualified_name)
            .and_then(|registered| registered.description.clone())
    }
}
