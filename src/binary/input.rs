use std::convert::TryInto;
use std::io::Read;

use byteorder::{BigEndian, ReadBytesExt};

use crate::error::{Error, Result};

// Arrays are read in chunks of at most this many elements, so a corrupt
// length can't make us allocate more than the input actually holds.
const CHUNK: usize = 4096;

pub(crate) trait ReadNbt: Read {
    fn read_tag_id(&mut self) -> Result<u8> {
        Ok(self.read_u8()?)
    }

    fn read_size_prefixed_string(&mut self) -> Result<String> {
        let len = self.read_u16::<BigEndian>()? as usize;

        let mut buf = vec![0; len];
        self.read_exact(&mut buf[..])?;

        Ok(cesu8::from_java_cesu8(&buf[..])
            .map_err(|_| Error::nonunicode(&buf[..]))?
            .into_owned())
    }

    fn read_len(&mut self) -> Result<usize> {
        let len = self.read_i32::<BigEndian>()?;
        len.try_into()
            .map_err(|_| Error::malformed(format!("negative length: {}", len)))
    }

    fn read_byte_array(&mut self, len: usize) -> Result<Vec<i8>> {
        let mut buf = Vec::with_capacity(len.min(CHUNK));
        let read = Read::take(&mut *self, len as u64).read_to_end(&mut buf)?;
        if read != len {
            return Err(std::io::Error::from(std::io::ErrorKind::UnexpectedEof).into());
        }
        Ok(buf.into_iter().map(|b| b as i8).collect())
    }

    fn read_int_array(&mut self, len: usize) -> Result<Vec<i32>> {
        let mut buf = Vec::with_capacity(len.min(CHUNK));
        for _ in 0..len {
            buf.push(self.read_i32::<BigEndian>()?);
        }
        Ok(buf)
    }

    fn read_long_array(&mut self, len: usize) -> Result<Vec<i64>> {
        let mut buf = Vec::with_capacity(len.min(CHUNK));
        for _ in 0..len {
            buf.push(self.read_i64::<BigEndian>()?);
        }
        Ok(buf)
    }
}

impl<T> ReadNbt for T where T: Read + ?Sized {}
