use std::io::Read;

use byteorder::{BigEndian, ReadBytesExt};

use crate::error::{Error, Result};
use crate::{ByteArray, Compound, IntArray, List, LongArray, Tag, TagType, TypeRegistry, Value};
use crate::stack::ensure_sufficient_stack;
use crate::MAX_DEPTH;

use super::input::ReadNbt;

/// Reads a whole tree from a reader. Does not do decompression.
///
/// Every type ID met on the way is resolved through the registry; an ID it
/// doesn't know fails the read. Nothing partial is returned on failure.
pub struct Reader<'r, R: Read> {
    input: R,
    registry: &'r TypeRegistry,
}

impl<'r, R: Read> Reader<'r, R> {
    pub fn new(input: R, registry: &'r TypeRegistry) -> Self {
        Self { input, registry }
    }

    /// Read the root compound and its name.
    pub fn read_root(&mut self) -> Result<Tag> {
        let id = self.input.read_tag_id()?;
        if id != TagType::Compound.id() {
            return Err(Error::invalid_root(id));
        }

        let name = self.input.read_size_prefixed_string()?;
        let mut root = Compound::new();
        self.read_compound(&mut root, 0)?;

        Ok(Tag::new(name, root))
    }

    /// Consumes this reader, returning the underlying input.
    pub fn into_inner(self) -> R {
        self.input
    }

    fn read_compound(&mut self, compound: &mut Compound, depth: usize) -> Result<()> {
        if depth > MAX_DEPTH {
            return Err(Error::too_complex(depth));
        }

        compound.clear();
        loop {
            let id = self.input.read_tag_id()?;
            if id == TagType::End.id() {
                return Ok(());
            }

            let name = self.input.read_size_prefixed_string()?;
            let mut value = self.registry.require(id)?;
            self.read_payload(&mut value, depth + 1)?;
            compound.insert(name, value);
        }
    }

    fn read_list(&mut self, list: &mut List, depth: usize) -> Result<()> {
        if depth > MAX_DEPTH {
            return Err(Error::too_complex(depth));
        }

        let element_type = self.input.read_tag_id()?;
        let len = self.input.read_len()?;

        if element_type == TagType::End.id() {
            if len > 0 {
                return Err(Error::malformed(format!(
                    "list of End tags with {} elements",
                    len
                )));
            }
            *list = List::new();
            return Ok(());
        }

        // Resolve up front so an unknown element type fails even when empty.
        self.registry.ensure_known(element_type)?;
        *list = List::of(element_type);

        for _ in 0..len {
            let mut value = self.registry.require(element_type)?;
            self.read_payload(&mut value, depth + 1)?;
            list.push(value)?;
        }

        Ok(())
    }

    fn read_payload(&mut self, value: &mut Value, depth: usize) -> Result<()> {
        match value {
            Value::Byte(v) => *v = self.input.read_i8()?,
            Value::Short(v) => *v = self.input.read_i16::<BigEndian>()?,
            Value::Int(v) => *v = self.input.read_i32::<BigEndian>()?,
            Value::Long(v) => *v = self.input.read_i64::<BigEndian>()?,
            Value::Float(v) => *v = self.input.read_f32::<BigEndian>()?,
            Value::Double(v) => *v = self.input.read_f64::<BigEndian>()?,
            Value::String(v) => *v = self.input.read_size_prefixed_string()?,
            Value::ByteArray(v) => {
                let len = self.input.read_len()?;
                *v = ByteArray::new(self.input.read_byte_array(len)?);
            }
            Value::IntArray(v) => {
                let len = self.input.read_len()?;
                *v = IntArray::new(self.input.read_int_array(len)?);
            }
            Value::LongArray(v) => {
                let len = self.input.read_len()?;
                *v = LongArray::new(self.input.read_long_array(len)?);
            }
            Value::List(v) => ensure_sufficient_stack(|| self.read_list(v, depth))?,
            Value::Compound(v) => ensure_sufficient_stack(|| self.read_compound(v, depth))?,
            Value::Custom(v) => v.read_payload(&mut self.input)?,
        }
        Ok(())
    }
}
