use std::convert::TryInto;
use std::io::Write;

use byteorder::{BigEndian, WriteBytesExt};

use crate::error::{Error, Result};

pub(crate) trait WriteNbt: Write {
    fn write_tag_id(&mut self, id: u8) -> Result<()> {
        self.write_u8(id)?;
        Ok(())
    }

    fn write_size_prefixed_str(&mut self, key: &str) -> Result<()> {
        let key = cesu8::to_java_cesu8(key);
        let len_bytes: u16 = key.len().try_into().map_err(|_| {
            Error::malformed(format!("string of {} bytes too long for nbt", key.len()))
        })?;
        self.write_u16::<BigEndian>(len_bytes)?;
        self.write_all(&key)?;
        Ok(())
    }

    fn write_len(&mut self, len: usize) -> Result<()> {
        self.write_i32::<BigEndian>(
            len.try_into()
                .map_err(|_| Error::malformed(format!("len {} too large", len)))?,
        )?;

        Ok(())
    }
}

impl<T> WriteNbt for T where T: Write + ?Sized {}
