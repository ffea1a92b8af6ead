//! Shared fixtures for the resolution benchmarks.

use modschema_core::{KindTag, TypeDescriptor};
use modschema_registry::TypeRegistry;

/// Builds a registry with `count` object types plus a few enums and scalars.
#[must_use]
pub fn sample_registry(count: usize) -> TypeRegistry {
    (0..count).fold(
        TypeRegistry::with_builtins()
            .with_enum("com.example.Color")
            .with_scalar("com.example.Platform"),
        |registry, i| registry.with_object(format!("com.example.gen.Object{i}")),
    )
}

/// Returns a mix of type sites as found on a typical module surface.
#[must_use]
pub fn sample_descriptors() -> Vec<TypeDescriptor> {
    vec![
        TypeDescriptor::new("void", KindTag::Void),
        TypeDescriptor::new("int", KindTag::Int),
        TypeDescriptor::declared("java.lang.String"),
        TypeDescriptor::array("java.lang.String[]"),
        TypeDescriptor::declared("java.util.List<com.example.gen.Object0>"),
        TypeDescriptor::declared("com.example.Color"),
        TypeDescriptor::declared("com.example.Platform"),
        TypeDescriptor::declared("com.example.gen.Object1").nullable(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use modschema_codegen::TypeDescriptorResolver;

    #[test]
    fn test_samples_resolve() {
        let registry = sample_registry(4);
        let resolver = TypeDescriptorResolver::new(&registry);
        for descriptor in sample_descriptors() {
            assert!(resolver.resolve(&descriptor).is_ok(), "{descriptor}");
        }
    }
}
