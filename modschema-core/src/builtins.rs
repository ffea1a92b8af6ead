//! Builtin host types with a direct type-definition kind.
//!
//! These are matched by qualified name before any introspection lookup.

use crate::descriptor::KindTag;
use crate::typedef::TypeDefKind;

/// Canonical string type.
pub const STRING: &str = "java.lang.String";

/// Boxed wrappers and the string type, with the kind each maps to.
pub const BOXED_TYPES: &[(&str, TypeDefKind)] = &[
    ("java.lang.Byte", TypeDefKind::IntegerKind),
    ("java.lang.Short", TypeDefKind::IntegerKind),
    ("java.lang.Integer", TypeDefKind::IntegerKind),
    ("java.lang.Long", TypeDefKind::IntegerKind),
    ("java.lang.Float", TypeDefKind::FloatKind),
    ("java.lang.Double", TypeDefKind::FloatKind),
    ("java.lang.Boolean", TypeDefKind::BooleanKind),
    (STRING, TypeDefKind::StringKind),
];

/// List-like containers recognized out of the box.
pub const LIST_CONTAINERS: &[&str] = &[
    "java.util.List",
    "java.util.ArrayList",
    "java.util.LinkedList",
    "java.util.Collection",
    "java.util.Set",
    "java.util.HashSet",
    "java.lang.Iterable",
];

/// Optional wrappers recognized out of the box.
pub const OPTIONAL_WRAPPERS: &[&str] = &["java.util.Optional"];

/// Returns the kind of a boxed wrapper or the string type.
#[must_use]
pub fn boxed_kind(qualified_name: &str) -> Option<TypeDefKind> {
    BOXED_TYPES
        .iter()
        .find(|(name, _)| *name == qualified_name)
        .map(|&(_, kind)| kind)
}

/// Returns the kind of a primitive tag, `None` for tags without one.
///
/// `char` has no type-definition equivalent.
#[must_use]
pub const fn primitive_kind(tag: KindTag) -> Option<TypeDefKind> {
    if tag.is_integer() {
        return Some(TypeDefKind::IntegerKind);
    }
    if tag.is_float() {
        return Some(TypeDefKind::FloatKind);
    }
    match tag {
        KindTag::Boolean => Some(TypeDefKind::BooleanKind),
        KindTag::Void => Some(TypeDefKind::VoidKind),
        _ => None,
    }
}
