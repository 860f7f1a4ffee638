use std::convert::TryFrom;

use serde_json::{Map, Value as JsonValue};

use crate::error::{Error, Result};
use crate::{ByteArray, Compound, IntArray, List, LongArray, TypeRegistry, Value};
use crate::stack::ensure_sufficient_stack;
use crate::MAX_DEPTH;

pub(crate) struct Decoder<'r> {
    registry: &'r TypeRegistry,
}

/// The parts of a tag document, before the value is decoded.
pub(crate) struct Document<'j> {
    pub(crate) id: u8,
    pub(crate) name: Option<&'j str>,
    pub(crate) value: &'j JsonValue,
}

impl<'j> Document<'j> {
    pub(crate) fn parse(doc: &'j JsonValue) -> Result<Self> {
        let doc = doc
            .as_object()
            .ok_or_else(|| Error::malformed(format!("tag document must be an object, got {}", kind(doc))))?;

        let id = field(doc, "type")?
            .as_u64()
            .and_then(|id| u8::try_from(id).ok())
            .ok_or_else(|| Error::malformed("tag document type must be an integer 0-255"))?;

        let name = match doc.get("name") {
            None | Some(JsonValue::Null) => None,
            Some(JsonValue::String(name)) => Some(name.as_str()),
            Some(other) => {
                return Err(Error::malformed(format!(
                    "tag document name must be a string, got {}",
                    kind(other)
                )))
            }
        };

        Ok(Self {
            id,
            name,
            value: field(doc, "value")?,
        })
    }
}

impl<'r> Decoder<'r> {
    pub(crate) fn new(registry: &'r TypeRegistry) -> Self {
        Self { registry }
    }

    /// Decode a whole tag document into a fresh value of its type.
    pub(crate) fn value(&self, doc: &Document<'_>, depth: usize) -> Result<Value> {
        let mut value = self.registry.require(doc.id)?;
        self.payload(&mut value, doc.value, depth)?;
        Ok(value)
    }

    pub(crate) fn payload(&self, value: &mut Value, json: &JsonValue, depth: usize) -> Result<()> {
        match value {
            Value::Byte(v) => *v = integer(json)?,
            Value::Short(v) => *v = integer(json)?,
            Value::Int(v) => *v = integer(json)?,
            Value::Long(v) => *v = integer(json)?,
            Value::Float(v) => {
                let f = number(json)?;
                if f.abs() > f32::MAX as f64 {
                    return Err(Error::malformed(format!("{} out of range for a float", f)));
                }
                *v = f as f32;
            }
            Value::Double(v) => *v = number(json)?,
            Value::String(v) => {
                *v = json
                    .as_str()
                    .ok_or_else(|| expected("a string", json))?
                    .to_owned()
            }
            Value::ByteArray(v) => *v = ByteArray::new(integers(json)?),
            Value::IntArray(v) => *v = IntArray::new(integers(json)?),
            Value::LongArray(v) => *v = LongArray::new(integers(json)?),
            Value::List(v) => *v = ensure_sufficient_stack(|| self.list(json, depth))?,
            Value::Compound(v) => *v = ensure_sufficient_stack(|| self.compound(json, depth))?,
            Value::Custom(v) => v.from_json(json)?,
        }
        Ok(())
    }

    fn compound(&self, json: &JsonValue, depth: usize) -> Result<Compound> {
        if depth > MAX_DEPTH {
            return Err(Error::too_complex(depth));
        }

        let members = json.as_object().ok_or_else(|| expected("an object", json))?;
        let mut compound = Compound::with_capacity(members.len());
        for (name, doc) in members {
            // The key names the member; a name inside the document is ignored.
            let doc = Document::parse(doc)?;
            let value = self.value(&doc, depth + 1)?;
            compound.insert(name.as_str(), value);
        }
        Ok(compound)
    }

    fn list(&self, json: &JsonValue, depth: usize) -> Result<List> {
        if depth > MAX_DEPTH {
            return Err(Error::too_complex(depth));
        }

        let elements = json.as_array().ok_or_else(|| expected("an array", json))?;
        let mut list = List::new();
        for doc in elements {
            let doc = Document::parse(doc)?;
            list.push(self.value(&doc, depth + 1)?)?;
        }
        Ok(list)
    }
}

fn field<'j>(doc: &'j Map<String, JsonValue>, name: &str) -> Result<&'j JsonValue> {
    doc.get(name)
        .ok_or_else(|| Error::malformed(format!("tag document is missing the {} field", name)))
}

fn integer<T: TryFrom<i64>>(json: &JsonValue) -> Result<T> {
    let v = json.as_i64().ok_or_else(|| expected("an integer", json))?;
    T::try_from(v).map_err(|_| {
        Error::malformed(format!(
            "{} out of range for {}",
            v,
            std::any::type_name::<T>()
        ))
    })
}

fn integers<T: TryFrom<i64>>(json: &JsonValue) -> Result<Vec<T>> {
    json.as_array()
        .ok_or_else(|| expected("an array of integers", json))?
        .iter()
        .map(integer)
        .collect()
}

fn number(json: &JsonValue) -> Result<f64> {
    json.as_f64().ok_or_else(|| expected("a number", json))
}

fn expected(what: &str, got: &JsonValue) -> Error {
    Error::malformed(format!("expected {}, got {}", what, kind(got)))
}

fn kind(json: &JsonValue) -> &'static str {
    match json {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a bool",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}
