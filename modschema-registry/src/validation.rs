//! Registry validation utilities.
//!
//! The schema API identifies enum, scalar and object types by simple name
//! within a module, so two such types must never share one.

use crate::error::RegistryError;
use crate::types::{RegisteredType, TypeRegistry};
use std::collections::HashMap;

/// Validates a registry for consistency.
///
/// # Arguments
/// * `registry` - The registry to validate
///
/// # Errors
/// Returns `RegistryError` if a registered name is not a plain qualified name
/// or two named types collide on their simple name.
pub fn validate_registry(registry: &TypeRegistry) -> Result<(), RegistryError> {
    for registered in registry.iter() {
        validate_name(registered)?;
    }
    validate_simple_names(registry)?;
    Ok(())
}

/// Validates that a registered name is a dotted identifier path.
fn validate_name(registered: &RegisteredType) -> Result<(), RegistryError> {
    let name = &registered.qualified_name;
    let invalid = |reason: &str| RegistryError::InvalidName {
        name: name.clone(),
        reason: reason.to_string(),
    };

    if name.contains(['<', '>', ',']) {
        return Err(invalid("type arguments are not allowed"));
    }
    if name.ends_with("[]") {
        return Err(invalid("array types are not allowed"));
    }
    for segment in name.split('.') {
        if segment.is_empty() {
            return Err(invalid("empty name segment"));
        }
        if !segment
            .chars()
            .all(|c| c.is_alphanumeric() || c == '_' || c == '$')
        {
            return Err(invalid("segments must be identifiers"));
        }
    }

    Ok(())
}

/// Validates that enum, scalar and object types have distinct simple names.
fn validate_simple_names(registry: &TypeRegistry) -> Result<(), RegistryError> {
    let mut seen: HashMap<&str, &str> = HashMap::new();

    for registered in registry.iter().filter(|t| t.class.is_named()) {
        let simple = registered.simple_name();
        if let Some(first) = seen.insert(simple, &registered.qualified_name) {
            return Err(RegistryError::SimpleNameCollision {
                simple_name: simple.to_string(),
                first: first.to_string(),
                second: registered.qualified_name.clone(),
            });
        }
    }

    Ok(())
}
