//! Type registry XML manifest parser.
//!
//! A manifest lists the declared types a module exposes and how each one is
//! classified:
//!
//! ```xml
//! <typeRegistry builtins="true">
//!     <enum name="io.dagger.client.ImageMediaTypes"/>
//!     <scalar name="io.dagger.client.Platform" description="Target platform"/>
//!     <object name="io.dagger.client.Container">A container</object>
//!     <container name="com.example.Bag"/>
//!     <optional name="com.example.Maybe"/>
//!     <primitive name="java.math.BigInteger" kind="INTEGER_KIND"/>
//! </typeRegistry>
//! ```

use crate::error::ParseError;
use crate::types::{RegisteredType, TypeRegistry};
use modschema_core::{TypeClass, TypeDefKind};
use quick_xml::Reader;
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::{BytesStart, Event};
use std::collections::HashSet;

const ROOT: &str = "typeRegistry";

/// Parses a type registry manifest from a string.
///
/// Builtin types are registered first unless the root element carries
/// `builtins="false"`; manifest entries may override them.
///
/// # Errors
/// Returns `ParseError` if the XML is malformed, an element is unknown, or a
/// type is declared twice.
pub fn parse_manifest(xml: &str) -> Result<TypeRegistry, ParseError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut registry: Option<TypeRegistry> = None;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                let name = std::str::from_utf8(&name_bytes)?;
                if name != ROOT {
                    return Err(ParseError::unknown_element(name, "document"));
                }
                if registry.is_some() {
                    return Err(multiple_roots());
                }
                let mut parsed = parse_registry_root(e)?;
                parse_entries(&mut reader, &mut parsed)?;
                registry = Some(parsed);
            }
            Ok(Event::Empty(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                let name = std::str::from_utf8(&name_bytes)?;
                if name != ROOT {
                    return Err(ParseError::unknown_element(name, "document"));
                }
                if registry.is_some() {
                    return Err(multiple_roots());
                }
                registry = Some(parse_registry_root(e)?);
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    let registry = registry.ok_or_else(|| ParseError::InvalidStructure {
        message: "No typeRegistry element found".to_string(),
    })?;
    tracing::debug!("parsed type registry with {} types", registry.len());
    Ok(registry)
}

/// Parses a type registry manifest from a file.
///
/// # Errors
/// Returns `ParseError` if the file cannot be read or parsed.
pub fn parse_manifest_file(path: &std::path::Path) -> Result<TypeRegistry, ParseError> {
    let xml = std::fs::read_to_string(path)?;
    parse_manifest(&xml)
}

fn multiple_roots() -> ParseError {
    ParseError::InvalidStructure {
        message: "multiple typeRegistry elements".to_string(),
    }
}

/// Parses the root element attributes.
fn parse_registry_root(e: &BytesStart<'_>) -> Result<TypeRegistry, ParseError> {
    let mut builtins = true;

    for attr in e.attributes().flatten() {
        let key = std::str::from_utf8(attr.key.as_ref())?;
        let value = std::str::from_utf8(&attr.value)?;

        if key == "builtins" {
            builtins = match value {
                "true" => true,
                "false" => false,
                _ => return Err(ParseError::invalid_attr(ROOT, "builtins", value)),
            };
        }
    }

    Ok(if builtins {
        TypeRegistry::with_builtins()
    } else {
        TypeRegistry::new()
    })
}

/// Parses the type entries up to the closing root tag.
fn parse_entries(
    reader: &mut Reader<&[u8]>,
    registry: &mut TypeRegistry,
) -> Result<(), ParseError> {
    let mut buf = Vec::new();
    let mut declared = HashSet::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let mut entry = parse_entry(e)?;
                if let Some(text) = read_entry_text(reader, &entry.qualified_name)? {
                    entry.description.get_or_insert(text);
                }
                register(registry, &mut declared, entry)?;
            }
            Ok(Event::Empty(ref e)) => {
                let entry = parse_entry(e)?;
                register(registry, &mut declared, entry)?;
            }
            Ok(Event::End(_)) => break,
            Ok(Event::Eof) => {
                return Err(ParseError::InvalidStructure {
                    message: "unterminated typeRegistry element".to_string(),
                });
            }
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(())
}

fn register(
    registry: &mut TypeRegistry,
    declared: &mut HashSet<String>,
    entry: RegisteredType,
) -> Result<(), ParseError> {
    if !declared.insert(entry.qualified_name.clone()) {
        return Err(ParseError::DuplicateType {
            name: entry.qualified_name,
        });
    }

    let name = entry.qualified_name.clone();
    if let Some(previous) = registry.add_type(entry) {
        tracing::debug!(
            "manifest entry {} overrides builtin {} registration",
            name,
            previous.class.name()
        );
    }
    Ok(())
}

/// Parses a single type entry element.
fn parse_entry(e: &BytesStart<'_>) -> Result<RegisteredType, ParseError> {
    let tag_bytes = e.name().as_ref().to_vec();
    let tag = std::str::from_utf8(&tag_bytes)?;

    let mut name: Option<String> = None;
    let mut description = None;
    let mut kind: Option<TypeDefKind> = None;

    for attr in e.attributes().flatten() {
        let key = std::str::from_utf8(attr.key.as_ref())?;
        let unescaped = attr.unescape_value()?;
        let value: &str = &unescaped;

        match key {
            "name" => name = Some(value.trim().to_string()),
            "description" => description = Some(value.to_string()),
            "kind" => {
                kind = Some(
                    TypeDefKind::from_name(value)
                        .filter(TypeDefKind::is_builtin)
                        .ok_or_else(|| ParseError::invalid_attr(tag, "kind", value))?,
                )
            }
            _ => {}
        }
    }

    let class = match tag {
        "enum" => TypeClass::Enum,
        "scalar" => TypeClass::Scalar,
        "object" => TypeClass::Object,
        "container" => TypeClass::Container,
        "optional" => TypeClass::Optional,
        "primitive" => {
            TypeClass::Primitive(kind.ok_or_else(|| ParseError::missing_attr(tag, "kind"))?)
        }
        _ => return Err(ParseError::unknown_element(tag, ROOT)),
    };

    let name = name
        .filter(|n| !n.is_empty())
        .ok_or_else(|| ParseError::missing_attr(tag, "name"))?;

    let mut entry = RegisteredType::new(name, class);
    entry.description = description;
    Ok(entry)
}

/// Reads the text content of an entry element up to its end tag.
///
/// Entity references arrive as separate events, so text is read untrimmed and
/// the assembled content is trimmed once at the end.
fn read_entry_text(
    reader: &mut Reader<&[u8]>,
    qualified_name: &str,
) -> Result<Option<String>, ParseError> {
    reader.config_mut().trim_text(false);
    let text = collect_entry_text(reader, qualified_name);
    reader.config_mut().trim_text(true);

    let text = text?;
    let content = text.trim();
    Ok((!content.is_empty()).then(|| content.to_string()))
}

fn collect_entry_text(
    reader: &mut Reader<&[u8]>,
    qualified_name: &str,
) -> Result<String, ParseError> {
    let mut buf = Vec::new();
    let mut text = String::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Text(ref t)) => text.push_str(std::str::from_utf8(t)?),
            Ok(Event::CData(ref t)) => text.push_str(std::str::from_utf8(t)?),
            Ok(Event::GeneralRef(ref r)) => {
                if let Some(ch) = r.resolve_char_ref()? {
                    text.push(ch);
                } else {
                    let entity = std::str::from_utf8(r)?;
                    let resolved = resolve_predefined_entity(entity).ok_or_else(|| {
                        ParseError::InvalidStructure {
                            message: format!(
                                "unknown entity '&{entity};' in entry for '{qualified_name}'"
                            ),
                        }
                    })?;
                    text.push_str(resolved);
                }
            }
            Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                let name = std::str::from_utf8(&name_bytes)?;
                return Err(ParseError::unknown_element(name, qualified_name));
            }
            Ok(Event::End(_)) => break,
            Ok(Event::Eof) => {
                return Err(ParseError::InvalidStructure {
                    message: format!("unterminated entry for '{qualified_name}'"),
                });
            }
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(text)
}
