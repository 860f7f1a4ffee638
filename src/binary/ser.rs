use std::io::Write;

use byteorder::{BigEndian, WriteBytesExt};

use crate::error::{Error, Result};
use crate::{Compound, List, Tag, TagType, TypeRegistry, Value};
use crate::stack::ensure_sufficient_stack;
use crate::MAX_DEPTH;

use super::write_nbt::WriteNbt;

/// Writes a whole tree to a writer. Does not do compression.
///
/// Custom values are checked against the registry before they are written,
/// so a tree holding a type the registry doesn't know fails instead of
/// producing bytes no reader with that registry could parse.
pub struct Writer<'r, W: Write> {
    output: W,
    registry: &'r TypeRegistry,
}

impl<'r, W: Write> Writer<'r, W> {
    pub fn new(output: W, registry: &'r TypeRegistry) -> Self {
        Self { output, registry }
    }

    /// Write `tag` as a root. An unnamed root is written with the empty name.
    pub fn write_root(&mut self, tag: &Tag) -> Result<()> {
        let compound = tag
            .compound()
            .ok_or_else(|| Error::invalid_root(tag.id()))?;

        self.output.write_tag_id(TagType::Compound.id())?;
        self.output.write_size_prefixed_str(tag.name().unwrap_or(""))?;
        self.write_compound(compound, 0)
    }

    pub fn into_inner(self) -> W {
        self.output
    }

    fn write_compound(&mut self, compound: &Compound, depth: usize) -> Result<()> {
        if depth > MAX_DEPTH {
            return Err(Error::too_complex(depth));
        }

        for (name, value) in compound {
            self.output.write_tag_id(value.id())?;
            self.output.write_size_prefixed_str(name)?;
            self.write_payload(value, depth + 1)?;
        }
        self.output.write_tag_id(TagType::End.id())
    }

    fn write_list(&mut self, list: &List, depth: usize) -> Result<()> {
        if depth > MAX_DEPTH {
            return Err(Error::too_complex(depth));
        }

        let element_type = list.element_type().unwrap_or(TagType::End.id());
        if element_type != TagType::End.id() {
            self.registry.ensure_known(element_type)?;
        }

        self.output.write_tag_id(element_type)?;
        self.output.write_len(list.len())?;
        for value in list {
            self.write_payload(value, depth + 1)?;
        }
        Ok(())
    }

    fn write_payload(&mut self, value: &Value, depth: usize) -> Result<()> {
        match value {
            Value::Byte(v) => self.output.write_i8(*v)?,
            Value::Short(v) => self.output.write_i16::<BigEndian>(*v)?,
            Value::Int(v) => self.output.write_i32::<BigEndian>(*v)?,
            Value::Long(v) => self.output.write_i64::<BigEndian>(*v)?,
            Value::Float(v) => self.output.write_f32::<BigEndian>(*v)?,
            Value::Double(v) => self.output.write_f64::<BigEndian>(*v)?,
            Value::String(v) => self.output.write_size_prefixed_str(v)?,
            Value::ByteArray(v) => {
                self.output.write_len(v.len())?;
                let bytes: Vec<u8> = v.iter().map(|b| *b as u8).collect();
                self.output.write_all(&bytes)?;
            }
            Value::IntArray(v) => {
                self.output.write_len(v.len())?;
                for i in v.iter() {
                    self.output.write_i32::<BigEndian>(*i)?;
                }
            }
            Value::LongArray(v) => {
                self.output.write_len(v.len())?;
                for l in v.iter() {
                    self.output.write_i64::<BigEndian>(*l)?;
                }
            }
            Value::List(v) => ensure_sufficient_stack(|| self.write_list(v, depth))?,
            Value::Compound(v) => ensure_sufficient_stack(|| self.write_compound(v, depth))?,
            Value::Custom(v) => {
                self.registry.ensure_known(v.id())?;
                v.write_payload(&mut self.output)?;
            }
        }
        Ok(())
    }
}
