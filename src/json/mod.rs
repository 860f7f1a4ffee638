//! A JSON view of a tree, for tools that speak JSON but not NBT.
//!
//! Every tag becomes a document object:
//!
//! ```json
//! { "type": 3, "name": "int", "value": -981735 }
//! ```
//!
//! `name` is present for the root and for compound members, and absent for
//! list elements. `value` depends on the type: a number for numeric types, a
//! string for strings, an array of numbers for the array types, an array of
//! documents for lists, and for compounds an object mapping each member name
//! to that member's document.
//!
//! Unlike SNBT, this view can be read back. Floats go through `f64`, which
//! holds every `f32` exactly, so a tree survives the trip unchanged. JSON has
//! no NaN or infinity though, and trees holding them can't be converted.
//!
//! ```
//! # use blocknbt::{compound, json, Tag, TypeRegistry};
//! let registry = TypeRegistry::new();
//! let root = Tag::new("root", compound! { "s" => "hi" });
//!
//! let doc = json::to_json(&root, &registry).unwrap();
//! assert_eq!(doc["value"]["s"]["value"], "hi");
//!
//! let back = json::from_json(&doc, &registry).unwrap();
//! assert_eq!(back, root);
//! ```
//!
//! A list document carries no element type of its own, so an empty list
//! comes back untyped, the same as [`List::new`][crate::List::new], whatever
//! type it was made with. Written to bytes it then declares element type 0.
//! Non-empty lists take their type from their elements.
//!
//! [`from_json_str`] accepts any document a tree of up to
//! [`MAX_DEPTH`][crate::MAX_DEPTH] levels converts to. Text nested much
//! deeper than that is refused before it is parsed.
use serde::Deserialize;
use serde_json::Value as JsonValue;

use crate::error::{Error, Result};
use crate::stack::ensure_json_stack;
use crate::{Tag, TagType, TypeRegistry, MAX_DEPTH};

/// Each tree level is two JSON levels, a member document and its value.
/// The rest is room for the root document and custom payloads.
const MAX_JSON_NESTING: usize = 2 * MAX_DEPTH + 64;

mod de;
mod ser;

use de::{Decoder, Document};
use ser::Encoder;

/// Convert a tree to its JSON document. The tag must hold a compound.
pub fn to_json(tag: &Tag, registry: &TypeRegistry) -> Result<JsonValue> {
    if tag.compound().is_none() {
        return Err(Error::invalid_root(tag.id()));
    }
    let doc = Encoder::new(registry).document(tag.name(), tag.value(), 0)?;
    tracing::debug!(name = tag.name().unwrap_or(""), "converted nbt root to json");
    Ok(doc)
}

/// Read a tree back from its JSON document. The root document must be of
/// type 10, a compound.
pub fn from_json(json: &JsonValue, registry: &TypeRegistry) -> Result<Tag> {
    let doc = Document::parse(json)?;
    if doc.id != TagType::Compound.id() {
        return Err(Error::invalid_root(doc.id));
    }

    let value = Decoder::new(registry).value(&doc, 0)?;
    let tag = match doc.name {
        Some(name) => Tag::new(name, value),
        None => Tag::unnamed(value),
    };
    tracing::debug!(name = tag.name().unwrap_or(""), "read nbt root from json");
    Ok(tag)
}

/// [`to_json`], rendered as a string. Pretty printed when `pretty` is set.
pub fn to_json_string(tag: &Tag, registry: &TypeRegistry, pretty: bool) -> Result<String> {
    let doc = to_json(tag, registry)?;
    ensure_json_stack(nesting(&doc), move || -> Result<String> {
        Ok(if pretty {
            serde_json::to_string_pretty(&doc)?
        } else {
            serde_json::to_string(&doc)?
        })
    })
}

/// Parse `s` as JSON and read a tree from it with [`from_json`].
pub fn from_json_str(s: &str, registry: &TypeRegistry) -> Result<Tag> {
    let nesting = check_nesting(s)?;

    ensure_json_stack(nesting, || -> Result<Tag> {
        let mut de = serde_json::Deserializer::from_str(s);
        de.disable_recursion_limit();
        let doc = JsonValue::deserialize(&mut de)?;
        de.end()?;
        from_json(&doc, registry)
    })
}

/// How deep the brackets in `s` nest, failing past [`MAX_JSON_NESTING`].
/// Brackets inside strings don't count.
fn check_nesting(s: &str) -> Result<usize> {
    let mut depth = 0usize;
    let mut max = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for b in s.bytes() {
        if in_string {
            match b {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match b {
            b'"' => in_string = true,
            b'{' | b'[' => {
                depth += 1;
                if depth > MAX_JSON_NESTING {
                    return Err(Error::json_too_deep(MAX_JSON_NESTING));
                }
                max = max.max(depth);
            }
            b'}' | b']' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    Ok(max)
}

/// How deep the arrays and objects of `doc` nest.
fn nesting(doc: &JsonValue) -> usize {
    let mut max = 0;
    let mut pending = vec![(doc, 1)];
    while let Some((value, depth)) = pending.pop() {
        match value {
            JsonValue::Array(items) => {
                max = max.max(depth);
                pending.extend(items.iter().map(|v| (v, depth + 1)));
            }
            JsonValue::Object(members) => {
                max = max.max(depth);
                pending.extend(members.values().map(|v| (v, depth + 1)));
            }
            _ => {}
        }
    }
    max
}
