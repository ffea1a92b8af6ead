//! Type-descriptor resolution.
//!
//! Translates a [`TypeDescriptor`] into the [`TypeDefExpression`] that builds
//! its type definition. Classification runs top to bottom, first match wins:
//!
//! 1. `void` (always optional)
//! 2. integer and floating point primitives, and their boxed wrappers
//! 3. `boolean` and its boxed wrapper
//! 4. the string type
//! 5. arrays, as lists of their element type
//! 6. single-argument generic containers (lists) and optional wrappers
//! 7. enums, 8. scalars, 9. objects, as classified by the introspector
//!
//! Syntactic checks come first; the introspector is only consulted when they
//! are inconclusive.

use crate::expression::TypeDefExpression;
use crate::options::ResolverConfig;
use modschema_core::builtins::{boxed_kind, primitive_kind};
use modschema_core::{
    KindTag, TypeClass, TypeDef, TypeDefKind, TypeDescriptor, TypeIntrospector, TypeName,
    TypeResolutionError, parse_type_name,
};

type Result<T> = std::result::Result<T, TypeResolutionError>;

/// Resolver from type descriptors to type-definition expressions.
///
/// Holds no mutable state; a single resolver may be shared between threads.
#[derive(Debug)]
pub struct TypeDescriptorResolver<'a, I: ?Sized> {
    introspector: &'a I,
    config: ResolverConfig,
}

impl<'a, I: TypeIntrospector + ?Sized> TypeDescriptorResolver<'a, I> {
    /// Creates a resolver backed by the given introspector.
    #[must_use]
    pub fn new(introspector: &'a I) -> Self {
        Self {
            introspector,
            config: ResolverConfig::default(),
        }
    }

    /// Sets the resolver configuration.
    #[must_use]
    pub fn with_config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the resolver configuration.
    #[must_use]
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolves a descriptor into a type-definition expression.
    ///
    /// # Errors
    /// Returns `TypeResolutionError` if a referenced type cannot be found, the
    /// generic form is malformed or unsupported, or nesting is too deep. A
    /// failed lookup is never turned into an object reference.
    pub fn resolve(&self, descriptor: &TypeDescriptor) -> Result<TypeDefExpression> {
        let type_def = self.resolve_at(descriptor, 0, &descriptor.qualified_name)?;
        tracing::debug!("resolved {} as {}", descriptor, type_def.kind());
        Ok(TypeDefExpression::new(type_def))
    }

    /// Resolves each descriptor independently.
    ///
    /// A failure for one type site does not stop the others.
    pub fn resolve_all<'d>(
        &self,
        descriptors: impl IntoIterator<Item = &'d TypeDescriptor>,
    ) -> Vec<Result<TypeDefExpression>> {
        descriptors
            .into_iter()
            .map(|descriptor| {
                self.resolve(descriptor).inspect_err(|e| {
                    tracing::warn!("failed to resolve {}: {}", descriptor, e);
                })
            })
            .collect()
    }

    fn resolve_at(&self, descriptor: &TypeDescriptor, depth: usize, root: &str) -> Result<TypeDef> {
        if depth > self.config.max_depth {
            return Err(TypeResolutionError::DepthExceeded {
                qualified_name: root.to_string(),
                max_depth: self.config.max_depth,
            });
        }

        let type_def = match descriptor.kind_tag {
            KindTag::Void => {
                return Ok(TypeDef::with_kind(TypeDefKind::VoidKind).with_optional(true));
            }
            KindTag::Declared => self.resolve_declared(&descriptor.qualified_name, depth, root)?,
            KindTag::Array => self.resolve_array(descriptor, depth, root)?,
            tag => {
                // primitives cannot be absent, so the nullable flag is ignored
                return primitive_kind(tag).map(TypeDef::with_kind).ok_or_else(|| {
                    TypeResolutionError::unsupported(
                        &descriptor.qualified_name,
                        format!("primitive kind {tag} has no type definition"),
                    )
                });
            }
        };

        Ok(type_def.with_optional(descriptor.optional))
    }

    fn resolve_array(&self, descriptor: &TypeDescriptor, depth: usize, root: &str) -> Result<TypeDef> {
        let element = descriptor.array_element().ok_or_else(|| {
            TypeResolutionError::unsupported(&descriptor.qualified_name, "expected an array type")
        })?;
        tracing::trace!("resolving array element {}", element);
        Ok(TypeDef::with_list_of(self.resolve_at(&element, depth + 1, root)?))
    }

    fn resolve_declared(&self, qualified_name: &str, depth: usize, root: &str) -> Result<TypeDef> {
        if let Some(kind) = boxed_kind(qualified_name.trim()) {
            return Ok(TypeDef::with_kind(kind));
        }

        match parse_type_name(qualified_name)? {
            TypeName::Plain(name) => self.resolve_named(name),
            TypeName::Generic { outer, args } => {
                self.resolve_generic(qualified_name, outer, &args, depth, root)
            }
        }
    }

    /// Resolves `Outer<Inner>` where `Outer` is a list-like container or an
    /// optional wrapper.
    fn resolve_generic(
        &self,
        qualified_name: &str,
        outer: &str,
        args: &[&str],
        depth: usize,
        root: &str,
    ) -> Result<TypeDef> {
        let [arg] = args else {
            return Err(TypeResolutionError::unsupported(
                qualified_name,
                format!("expected 1 type argument, got {}", args.len()),
            ));
        };

        let wrap: fn(TypeDef) -> TypeDef = match self.introspector.classify(outer)? {
            TypeClass::Container => TypeDef::with_list_of,
            TypeClass::Optional => |element: TypeDef| element.with_optional(true),
            other => {
                return Err(TypeResolutionError::unsupported(
                    qualified_name,
                    format!("'{}' is a {} type, not a container", outer, other.name()),
                ));
            }
        };

        let element = TypeDescriptor::infer(type_argument(qualified_name, arg)?);
        tracing::trace!("resolving type argument {} of {}", element, outer);
        Ok(wrap(self.resolve_at(&element, depth + 1, root)?))
    }

    /// Resolves a plain declared type through the introspector.
    fn resolve_named(&self, name: &str) -> Result<TypeDef> {
        let class = self.introspector.classify(name)?;
        let simple_name = || self.introspector.simple_name(name);
        let description = || self.introspector.description(name);

        let type_def = match class {
            TypeClass::Primitive(kind) if kind.is_builtin() => {
                TypeDef::with_kind(kind).with_optional(kind == TypeDefKind::VoidKind)
            }
            TypeClass::Primitive(kind) => {
                return Err(TypeResolutionError::unsupported(
                    name,
                    format!("{kind} is not a builtin kind"),
                ));
            }
            TypeClass::Enum => TypeDef::with_enum(simple_name()).with_description(description()),
            TypeClass::Scalar => {
                TypeDef::with_scalar(simple_name()).with_description(description())
            }
            TypeClass::Object => {
                TypeDef::with_object(simple_name()).with_description(description())
            }
            TypeClass::Unknown => {
                tracing::warn!("type {} is not classified, referencing it as an object", name);
                TypeDef::with_object(simple_name()).with_description(description())
            }
            TypeClass::Container | TypeClass::Optional => {
                return Err(TypeResolutionError::unsupported(
                    name,
                    format!("{} type used without a type argument", class.name()),
                ));
            }
        };

        Ok(type_def)
    }
}

/// Normalizes a type argument, unwrapping `? extends X` to `X`.
fn type_argument<'n>(qualified_name: &str, arg: &'n str) -> Result<&'n str> {
    let Some(bound) = arg.strip_prefix('?') else {
        return Ok(arg);
    };

    match bound.trim_start().strip_prefix("extends ") {
        Some(upper) if !upper.trim().is_empty() => Ok(upper.trim()),
        _ => Err(TypeResolutionError::unsupported(
            qualified_name,
            format!("wildcard argument '{arg}' has no upper bound"),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use modschema_registry::{RegisteredType, TypeRegistry};

    const ROOT: &str = "io.dagger.client.Dagger.dag().typeDef()";
    const KIND: &str = "io.dagger.client.TypeDefKind";

    fn registry() -> TypeRegistry {
        TypeRegistry::with_builtins()
            .with_enum("io.dagger.client.ImageMediaTypes")
            .with_enum("com.example.Color")
            .with_scalar("io.dagger.client.Platform")
            .with_scalar("com.example.Platform")
            .with_object("io.dagger.client.Container")
            .with_object("com.example.ObjectType")
            .with_type("com.example.Mystery", TypeClass::Unknown)
    }

    fn render(registry: &TypeRegistry, descriptor: TypeDescriptor) -> String {
        TypeDescriptorResolver::new(registry)
            .resolve(&descriptor)
            .expect("Failed to resolve")
            .render()
    }

    fn kind(name: &str) -> String {
        format!("{ROOT}.withKind({KIND}.{name})")
    }

    #[test]
    fn test_resolve_string() {
        let registry = registry();
        assert_eq!(
            render(&registry, TypeDescriptor::declared("java.lang.String")),
            kind("STRING_KIND")
        );
    }

    #[test]
    fn test_resolve_integer() {
        let registry = registry();
        assert_eq!(
            render(&registry, TypeDescriptor::declared("java.lang.Integer")),
            kind("INTEGER_KIND")
        );
        assert_eq!(
            render(&registry, TypeDescriptor::declared("java.lang.Long")),
            kind("INTEGER_KIND")
        );
        assert_eq!(
            render(&registry, TypeDescriptor::new("int", KindTag::Int)),
            kind("INTEGER_KIND")
        );
        assert_eq!(
            render(&registry, TypeDescriptor::new("long", KindTag::Long)),
            kind("INTEGER_KIND")
        );
    }

    #[test]
    fn test_resolve_float() {
        let registry = registry();
        assert_eq!(
            render(&registry, TypeDescriptor::new("float", KindTag::Float)),
            kind("FLOAT_KIND")
        );
        assert_eq!(
            render(&registry, TypeDescriptor::declared("java.lang.Double")),
            kind("FLOAT_KIND")
        );
    }

    #[test]
    fn test_resolve_bool() {
        let registry = registry();
        assert_eq!(
            render(&registry, TypeDescriptor::new("boolean", KindTag::Boolean)),
            kind("BOOLEAN_KIND")
        );
        assert_eq!(
            render(&registry, TypeDescriptor::declared("java.lang.Boolean")),
            kind("BOOLEAN_KIND")
        );
    }

    #[test]
    fn test_resolve_void() {
        let registry = registry();
        assert_eq!(
            render(&registry, TypeDescriptor::new("void", KindTag::Void)),
            format!("{}.withOptional(true)", kind("VOID_KIND"))
        );
    }

    #[test]
    fn test_resolve_list_string() {
        let registry = registry();
        assert_eq!(
            render(
                &registry,
                TypeDescriptor::declared("java.util.List<java.lang.String>")
            ),
            format!("{ROOT}.withListOf({})", kind("STRING_KIND"))
        );
    }

    #[test]
    fn test_resolve_list_container() {
        let registry = registry();
        assert_eq!(
            render(
                &registry,
                TypeDescriptor::declared("java.util.List<io.dagger.client.Container>")
            ),
            format!("{ROOT}.withListOf({ROOT}.withObject(\"Container\"))")
        );
        assert_eq!(
            render(
                &registry,
                TypeDescriptor::declared("java.util.List<com.example.ObjectType>")
            ),
            format!("{ROOT}.withListOf({ROOT}.withObject(\"ObjectType\"))")
        );
    }

    #[test]
    fn test_resolve_enum() {
        let registry = registry();
        assert_eq!(
            render(
                &registry,
                TypeDescriptor::declared("io.dagger.client.ImageMediaTypes")
            ),
            format!("{ROOT}.withEnum(\"ImageMediaTypes\")")
        );
        assert_eq!(
            render(&registry, TypeDescriptor::declared("com.example.Color")),
            format!("{ROOT}.withEnum(\"Color\")")
        );
    }

    #[test]
    fn test_resolve_scalar() {
        let registry = registry();
        assert_eq!(
            render(&registry, TypeDescriptor::declared("io.dagger.client.Platform")),
            format!("{ROOT}.withScalar(\"Platform\")")
        );
        assert_eq!(
            render(&registry, TypeDescriptor::declared("com.example.Platform")),
            format!("{ROOT}.withScalar(\"Platform\")")
        );
    }

    #[test]
    fn test_resolve_array() {
        let registry = registry();
        let from_array = render(&registry, TypeDescriptor::array("java.lang.String[]"));
        let from_list = render(
            &registry,
            TypeDescriptor::declared("java.util.List<java.lang.String>"),
        );
        assert_eq!(from_array, format!("{ROOT}.withListOf({})", kind("STRING_KIND")));
        assert_eq!(from_array, from_list);
    }

    #[test]
    fn test_resolve_primitive_and_nested_arrays() {
        let registry = registry();
        assert_eq!(
            render(&registry, TypeDescriptor::array("int[]")),
            format!("{ROOT}.withListOf({})", kind("INTEGER_KIND"))
        );
        assert_eq!(
            render(&registry, TypeDescriptor::array("io.dagger.client.Container[][]")),
            format!("{ROOT}.withListOf({ROOT}.withListOf({ROOT}.withObject(\"Container\")))")
        );
    }

    #[test]
    fn test_resolve_object_fallback() {
        let registry = registry();
        assert_eq!(
            render(&registry, TypeDescriptor::declared("com.example.Mystery")),
            format!("{ROOT}.withObject(\"Mystery\")")
        );
    }

    #[test]
    fn test_resolve_optional_wrapper() {
        let registry = registry();
        assert_eq!(
            render(
                &registry,
                TypeDescriptor::declared("java.util.Optional<java.lang.String>")
            ),
            format!("{}.withOptional(true)", kind("STRING_KIND"))
        );
    }

    #[test]
    fn test_resolve_nullable_site() {
        let registry = registry();
        assert_eq!(
            render(
                &registry,
                TypeDescriptor::declared("io.dagger.client.Container").nullable()
            ),
            format!("{ROOT}.withObject(\"Container\").withOptional(true)")
        );
        assert_eq!(
            render(
                &registry,
                TypeDescriptor::declared("java.util.List<java.lang.String>").nullable()
            ),
            format!("{ROOT}.withListOf({}).withOptional(true)", kind("STRING_KIND"))
        );
        // primitives cannot be null
        assert_eq!(
            render(&registry, TypeDescriptor::new("int", KindTag::Int).nullable()),
            kind("INTEGER_KIND")
        );
    }

    #[test]
    fn test_resolve_wildcard_argument() {
        let registry = registry();
        assert_eq!(
            render(
                &registry,
                TypeDescriptor::declared("java.util.List<? extends io.dagger.client.Container>")
            ),
            format!("{ROOT}.withListOf({ROOT}.withObject(\"Container\"))")
        );

        let resolver = TypeDescriptorResolver::new(&registry);
        for name in ["java.util.List<?>", "java.util.List<? super java.lang.String>"] {
            let err = resolver
                .resolve(&TypeDescriptor::declared(name))
                .expect_err(name);
            assert!(matches!(err, TypeResolutionError::UnsupportedShape { .. }), "{name}");
        }
    }

    #[test]
    fn test_resolve_descriptions_attached() {
        let mut registry = registry();
        registry.add_type(
            RegisteredType::new("com.example.Color", TypeClass::Enum).with_description("Colors"),
        );
        let expr = TypeDescriptorResolver::new(&registry)
            .resolve(&TypeDescriptor::declared("com.example.Color"))
            .expect("Failed to resolve");
        assert_eq!(
            expr.type_def(),
            &TypeDef::with_enum("Color").with_description(Some("Colors".to_string()))
        );
        // descriptions are not rendered by default
        assert_eq!(expr.render(), format!("{ROOT}.withEnum(\"Color\")"));
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let registry = registry();
        let resolver = TypeDescriptorResolver::new(&registry);
        let descriptor = TypeDescriptor::declared("java.util.List<com.example.Color>");
        let first = resolver.resolve(&descriptor).expect("Failed to resolve");
        let second = resolver.resolve(&descriptor.clone()).expect("Failed to resolve");
        assert_eq!(first, second);
        assert_eq!(first.render(), second.render());
    }

    #[test]
    fn test_unknown_type_fails() {
        let registry = registry();
        let resolver = TypeDescriptorResolver::new(&registry);

        let err = resolver
            .resolve(&TypeDescriptor::declared("com.example.Typo"))
            .expect_err("unknown type should fail");
        assert_eq!(err, TypeResolutionError::not_found("com.example.Typo"));

        let err = resolver
            .resolve(&TypeDescriptor::declared("java.util.List<com.example.Typo>"))
            .expect_err("unknown element should fail");
        assert_eq!(err.qualified_name(), "com.example.Typo");

        let err = resolver
            .resolve(&TypeDescriptor::array("com.example.Typo[]"))
            .expect_err("unknown array element should fail");
        assert_eq!(err.qualified_name(), "com.example.Typo");
    }

    #[test]
    fn test_multi_argument_generic_fails() {
        let registry = registry();
        let err = TypeDescriptorResolver::new(&registry)
            .resolve(&TypeDescriptor::declared(
                "java.util.Map<java.lang.String, java.lang.String>",
            ))
            .expect_err("map should fail");
        assert!(matches!(err, TypeResolutionError::UnsupportedShape { .. }));
        assert_eq!(
            err.qualified_name(),
            "java.util.Map<java.lang.String, java.lang.String>"
        );
    }

    #[test]
    fn test_malformed_generic_fails() {
        let registry = registry();
        let err = TypeDescriptorResolver::new(&registry)
            .resolve(&TypeDescriptor::declared("java.util.List<java.lang.String"))
            .expect_err("malformed generic should fail");
        assert!(matches!(err, TypeResolutionError::MalformedGeneric { .. }));
    }

    #[test]
    fn test_non_container_generic_fails() {
        let registry = registry().with_object("com.example.Box");
        let err = TypeDescriptorResolver::new(&registry)
            .resolve(&TypeDescriptor::declared("com.example.Box<java.lang.String>"))
            .expect_err("non-container generic should fail");
        assert!(matches!(err, TypeResolutionError::UnsupportedShape { .. }));
    }

    #[test]
    fn test_raw_container_fails() {
        let registry = registry();
        let err = TypeDescriptorResolver::new(&registry)
            .resolve(&TypeDescriptor::declared("java.util.List"))
            .expect_err("raw container should fail");
        assert!(matches!(err, TypeResolutionError::UnsupportedShape { .. }));
    }

    #[test]
    fn test_char_fails() {
        let registry = registry();
        let err = TypeDescriptorResolver::new(&registry)
            .resolve(&TypeDescriptor::new("char", KindTag::Char))
            .expect_err("char should fail");
        assert_eq!(err.qualified_name(), "char");
    }

    #[test]
    fn test_depth_guard() {
        let registry = registry();
        let resolver =
            TypeDescriptorResolver::new(&registry).with_config(ResolverConfig::new().max_depth(1));
        assert_eq!(resolver.config().max_depth, 1);

        assert!(resolver.resolve(&TypeDescriptor::array("int[]")).is_ok());
        let err = resolver
            .resolve(&TypeDescriptor::array("int[][]"))
            .expect_err("too deep");
        assert_eq!(
            err,
            TypeResolutionError::DepthExceeded {
                qualified_name: "int[][]".to_string(),
                max_depth: 1,
            }
        );
    }

    #[test]
    fn test_custom_primitive_registration() {
        let registry = registry().with_type(
            "java.math.BigInteger",
            TypeClass::Primitive(TypeDefKind::IntegerKind),
        );
        assert_eq!(
            render(&registry, TypeDescriptor::declared("java.math.BigInteger")),
            kind("INTEGER_KIND")
        );

        let registry = registry.with_type(
            "com.example.Weird",
            TypeClass::Primitive(TypeDefKind::ListKind),
        );
        assert!(
            TypeDescriptorResolver::new(&registry)
                .resolve(&TypeDescriptor::declared("com.example.Weird"))
                .is_err()
        );
    }

    #[test]
    fn test_registered_void_is_optional() {
        let registry = modschema_registry::parse_manifest(
            r#"<typeRegistry><primitive name="java.lang.Void" kind="VOID_KIND"/></typeRegistry>"#,
        )
        .expect("Failed to parse");

        let expr = TypeDescriptorResolver::new(&registry)
            .resolve(&TypeDescriptor::declared("java.lang.Void"))
            .expect("Failed to resolve");
        assert!(expr.type_def().optional);
        assert_eq!(
            expr.render(),
            format!("{}.withOptional(true)", kind("VOID_KIND"))
        );
    }

    #[test]
    fn test_resolve_custom_container() {
        let registry = registry().with_type("com.example.Bag", TypeClass::Container);
        assert_eq!(
            render(
                &registry,
                TypeDescriptor::declared("com.example.Bag<com.example.Color>")
            ),
            format!("{ROOT}.withListOf({ROOT}.withEnum(\"Color\"))")
        );
    }

    #[test]
    fn test_resolve_custom_optional_wrapper() {
        let registry = registry().with_type("com.example.Maybe", TypeClass::Optional);
        assert_eq!(
            render(
                &registry,
                TypeDescriptor::declared("com.example.Maybe<io.dagger.client.Container>")
            ),
            format!("{ROOT}.withObject(\"Container\").withOptional(true)")
        );
        assert_eq!(
            render(
                &registry,
                TypeDescriptor::declared("com.example.Maybe<java.util.List<java.lang.String>>")
            ),
            format!(
                "{ROOT}.withListOf({}).withOptional(true)",
                kind("STRING_KIND")
            )
        );
    }

    #[test]
    fn test_resolve_all_continues_after_failure() {
        let registry = registry();
        let descriptors = vec![
            TypeDescriptor::declared("java.lang.String"),
            TypeDescriptor::declared("com.example.Typo"),
            TypeDescriptor::declared("com.example.Color"),
        ];
        let results = TypeDescriptorResolver::new(&registry).resolve_all(&descriptors);
        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert!(results[1].is_err());
        assert!(results[2].is_ok());
    }

    #[test]
    fn test_concurrent_resolution() {
        let registry = registry();
        let resolver = TypeDescriptorResolver::new(&registry);
        let descriptor = TypeDescriptor::declared("java.util.List<io.dagger.client.Container>");
        let expected = resolver.resolve(&descriptor).expect("Failed to resolve");

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| resolver.resolve(&descriptor)))
                .collect();
            for handle in handles {
                let result = handle.join().expect("thread panicked");
                assert_eq!(result.expect("Failed to resolve"), expected);
            }
        });
    }

    #[test]
    fn test_type_argument() {
        assert_eq!(type_argument("x", "a.B"), Ok("a.B"));
        assert_eq!(type_argument("x", "? extends a.B"), Ok("a.B"));
        assert!(type_argument("x", "?").is_err());
        assert!(type_argument("x", "? extends ").is_err());
    }
}
