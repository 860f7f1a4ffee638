use serde_json::{Map, Number, Value as JsonValue};

use crate::error::{Error, Result};
use crate::{Compound, List, TypeRegistry, Value};
use crate::stack::ensure_sufficient_stack;
use crate::MAX_DEPTH;

pub(crate) struct Encoder<'r> {
    registry: &'r TypeRegistry,
}

impl<'r> Encoder<'r> {
    pub(crate) fn new(registry: &'r TypeRegistry) -> Self {
        Self { registry }
    }

    /// The document for one tag: `{"type", "name"?, "value"}`.
    pub(crate) fn document(
        &self,
        name: Option<&str>,
        value: &Value,
        depth: usize,
    ) -> Result<JsonValue> {
        let mut doc = Map::with_capacity(3);
        doc.insert("type".to_owned(), JsonValue::from(value.id()));
        if let Some(name) = name {
            doc.insert("name".to_owned(), JsonValue::from(name));
        }
        doc.insert("value".to_owned(), self.payload(value, depth)?);
        Ok(JsonValue::Object(doc))
    }

    fn payload(&self, value: &Value, depth: usize) -> Result<JsonValue> {
        Ok(match value {
            Value::Byte(v) => JsonValue::from(*v),
            Value::Short(v) => JsonValue::from(*v),
            Value::Int(v) => JsonValue::from(*v),
            Value::Long(v) => JsonValue::from(*v),
            Value::Float(v) => float(*v as f64)?,
            Value::Double(v) => float(*v)?,
            Value::String(v) => JsonValue::from(v.as_str()),
            Value::ByteArray(v) => v.iter().copied().map(JsonValue::from).collect::<JsonValue>(),
            Value::IntArray(v) => v.iter().copied().map(JsonValue::from).collect::<JsonValue>(),
            Value::LongArray(v) => v.iter().copied().map(JsonValue::from).collect::<JsonValue>(),
            Value::List(v) => ensure_sufficient_stack(|| self.list(v, depth))?,
            Value::Compound(v) => ensure_sufficient_stack(|| self.compound(v, depth))?,
            Value::Custom(v) => {
                self.registry.ensure_known(v.id())?;
                v.to_json()?
            }
        })
    }

    fn compound(&self, compound: &Compound, depth: usize) -> Result<JsonValue> {
        if depth > MAX_DEPTH {
            return Err(Error::too_complex(depth));
        }

        let mut members = Map::with_capacity(compound.len());
        for (name, value) in compound {
            let doc = self.document(Some(name), value, depth + 1)?;
            members.insert(name.clone(), doc);
        }
        Ok(JsonValue::Object(members))
    }

    fn list(&self, list: &List, depth: usize) -> Result<JsonValue> {
        if depth > MAX_DEPTH {
            return Err(Error::too_complex(depth));
        }

        list.iter()
            .map(|value| self.document(None, value, depth + 1))
            .collect::<Result<Vec<_>>>()
            .map(JsonValue::Array)
    }
}

fn float(v: f64) -> Result<JsonValue> {
    Number::from_f64(v)
        .map(JsonValue::Number)
        .ok_or_else(|| Error::malformed(format!("{} cannot be represented in json", v)))
}
