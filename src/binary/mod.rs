//! The binary form of a tree: big endian numbers, Java modified UTF-8 strings
//! and a root compound.
//!
//! These functions neither compress nor decompress. Files on disk are
//! usually gzip compressed; see [`Nbt`][`crate::Nbt`] for a wrapper that
//! handles that.
//!
//! ```
//! # use blocknbt::{binary, compound, Tag, TypeRegistry};
//! let registry = TypeRegistry::new();
//! let root = Tag::unnamed(compound! { "b" => 5i8 });
//!
//! let bytes = binary::to_bytes(&root, &registry).unwrap();
//! assert_eq!(bytes, [10, 0, 0, 1, 0, 1, b'b', 5, 0]);
//!
//! // Read roots are always named, the name being empty here.
//! let back = binary::from_bytes(&bytes, &registry).unwrap();
//! assert_eq!(back.name(), Some(""));
//! assert_eq!(back.value(), root.value());
//! ```
use std::io::{Read, Write};

use crate::error::Result;
use crate::{Tag, TypeRegistry};

mod de;
mod input;
mod ser;
mod write_nbt;

pub use de::Reader;
pub use ser::Writer;

/// Read a whole tree from `reader`. The first tag must be a compound.
pub fn from_reader<R: Read>(reader: R, registry: &TypeRegistry) -> Result<Tag> {
    let tag = Reader::new(reader, registry).read_root()?;
    tracing::debug!(name = tag.name().unwrap_or(""), "read nbt root");
    Ok(tag)
}

/// Read a whole tree from uncompressed bytes. Trailing bytes after the root
/// compound are ignored.
pub fn from_bytes(bytes: &[u8], registry: &TypeRegistry) -> Result<Tag> {
    let mut input = bytes;
    let tag = Reader::new(&mut input, registry).read_root()?;
    tracing::debug!(
        name = tag.name().unwrap_or(""),
        len = bytes.len() - input.len(),
        "read nbt root from bytes"
    );
    Ok(tag)
}

/// Write `tag` to `writer`. The tag must hold a compound.
pub fn to_writer<W: Write>(writer: W, tag: &Tag, registry: &TypeRegistry) -> Result<()> {
    Writer::new(writer, registry).write_root(tag)?;
    tracing::debug!(name = tag.name().unwrap_or(""), "wrote nbt root");
    Ok(())
}

/// Write `tag` to a new byte vector. The tag must hold a compound.
pub fn to_bytes(tag: &Tag, registry: &TypeRegistry) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    Writer::new(&mut out, registry).write_root(tag)?;
    tracing::debug!(
        name = tag.name().unwrap_or(""),
        len = out.len(),
        "wrote nbt root to bytes"
    );
    Ok(out)
}
