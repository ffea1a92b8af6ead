//! Parsing of textual generic type names.
//!
//! The scanner hands over parameterized types in their textual form, e.g.
//! `java.util.List<java.lang.String>`. This module splits such a name into its
//! outer type and top-level type arguments, validating bracket balance.
//! Nested arguments are returned verbatim and parsed again when resolved.

use crate::error::{Result, TypeResolutionError};

/// A type name split into its generic structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeName<'a> {
    /// A name without type arguments.
    Plain(&'a str),
    /// A parameterized name.
    Generic {
        /// Outer (container) type name.
        outer: &'a str,
        /// Top-level type arguments, trimmed.
        args: Vec<&'a str>,
    },
}

impl<'a> TypeName<'a> {
    /// Returns the name without type arguments.
    #[must_use]
    pub fn base(&self) -> &'a str {
        match self {
            Self::Plain(name) => name,
            Self::Generic { outer, .. } => outer,
        }
    }
}

/// Parses a qualified name into its generic structure.
///
/// # Errors
/// Returns `TypeResolutionError::MalformedGeneric` on unbalanced brackets,
/// empty type arguments, or trailing text after the closing bracket.
pub fn parse_type_name(qualified_name: &str) -> Result<TypeName<'_>> {
    let name = qualified_name.trim();
    if name.is_empty() {
        return Err(TypeResolutionError::malformed(qualified_name, "empty type name"));
    }

    let Some(open) = name.find('<') else {
        if name.contains('>') {
            return Err(TypeResolutionError::malformed(qualified_name, "unbalanced '>'"));
        }
        return Ok(TypeName::Plain(name));
    };

    let outer = name[..open].trim();
    if outer.is_empty() {
        return Err(TypeResolutionError::malformed(
            qualified_name,
            "missing container name",
        ));
    }

    let Some(body) = name[open + 1..].strip_suffix('>') else {
        return Err(TypeResolutionError::malformed(
            qualified_name,
            "expected closing '>' at end of name",
        ));
    };

    let args = split_arguments(qualified_name, body)?;
    Ok(TypeName::Generic { outer, args })
}

/// Splits a type-argument list on its top-level commas.
fn split_arguments<'a>(qualified_name: &str, body: &'a str) -> Result<Vec<&'a str>> {
    let mut args = Vec::new();
    let mut depth: usize = 0;
    let mut start = 0;

    for (i, c) in body.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| TypeResolutionError::malformed(qualified_name, "unbalanced '>'"))?;
            }
            ',' if depth == 0 => {
                args.push(non_empty_argument(qualified_name, &body[start..i])?);
                start = i + 1;
            }
            _ => {}
        }
    }

    if depth != 0 {
        return Err(TypeResolutionError::malformed(qualified_name, "unbalanced '<'"));
    }
    args.push(non_empty_argument(qualified_name, &body[start..])?);

    Ok(args)
}

fn non_empty_argument<'a>(qualified_name: &str, arg: &'a str) -> Result<&'a str> {
    let arg = arg.trim();
    if arg.is_empty() {
        return Err(TypeResolutionError::malformed(
            qualified_name,
            "empty type argument",
        ));
    }
    Ok(arg)
}
