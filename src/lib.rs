//! blocknbt reads and writes NBT trees, the named binary tag format used by
//! *Minecraft: Java Edition* to store world data, player inventories and the
//! like. A tree can be viewed three ways:
//!
//! * as bytes, see [`binary`],
//! * as stringified NBT (SNBT) text, see [`snbt`],
//! * as a JSON document, see [`json`].
//!
//! Every view goes through a [`TypeRegistry`], which maps a one byte type ID to
//! a constructor for that type. The registry starts with the 12 standard types
//! and can be extended with custom ones, see [`CustomPayload`].
//!
//! The [`Nbt`] type bundles a registry with a text format and a compression
//! choice for callers that just want to read and write files.
//!
//! # Quick example
//!
//! ```
//! use blocknbt::{binary, compound, Tag, TypeRegistry};
//!
//! # fn main() -> blocknbt::error::Result<()> {
//! let registry = TypeRegistry::new();
//! let root = Tag::new("root", compound! {
//!     "int" => -981735,
//!     "s" => "hi",
//! });
//!
//! let bytes = binary::to_bytes(&root, &registry)?;
//! let back = binary::from_bytes(&bytes, &registry)?;
//!
//! assert_eq!(back, root);
//! assert_eq!(back.compound().and_then(|c| c.get_int("int")), Some(-981735));
//! # Ok(())
//! # }
//! ```
//!
//! # Depth
//!
//! Compounds and lists may nest at most [`MAX_DEPTH`] levels below the root.
//! Deeper trees fail to read and to write with
//! [`ErrorKind::StructureTooComplex`][`error::ErrorKind::StructureTooComplex`].
//!
//! # Threading
//!
//! Trees and registries are plain values. Nothing here locks; mutating a
//! registry while another thread reads through it is prevented by the borrow
//! checker, and sharing a tree across threads is up to the caller.

pub mod binary;
pub mod compression;
pub mod error;
pub mod json;
pub mod snbt;

mod arrays;
mod macros;
mod nbt;
mod registry;
mod stack;
mod tag;
mod value;

pub use arrays::*;
pub use compression::Compression;
pub use nbt::Nbt;
pub use registry::*;
pub use snbt::SnbtConfig;
pub use tag::Tag;
pub use value::*;

#[cfg(test)]
mod test;

use std::convert::TryFrom;

/// How many levels of compounds and lists may sit below the root compound.
pub const MAX_DEPTH: usize = 512;

/// The standard NBT type IDs. This does not carry the value or the name of
/// the data. IDs 13 and above are free for custom types.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[repr(u8)]
pub enum TagType {
    /// Represents the end of a Compound object.
    End = 0,
    /// Equivalent to i8.
    Byte = 1,
    /// Equivalent to i16.
    Short = 2,
    /// Equivalent to i32.
    Int = 3,
    /// Equivalent to i64
    Long = 4,
    /// Equivalent to f32.
    Float = 5,
    /// Equivalent to f64.
    Double = 6,
    /// Represents as array of Byte (i8).
    ByteArray = 7,
    /// Represents a Unicode string.
    String = 8,
    /// Represents a list of other values, all of the same type.
    List = 9,
    /// Represents a struct-like structure.
    Compound = 10,
    /// Represents as array of Int (i32).
    IntArray = 11,
    /// Represents as array of Long (i64).
    LongArray = 12,
}

impl TagType {
    /// Highest ID reserved for the standard types.
    pub const MAX_STANDARD_ID: u8 = 12;

    pub fn id(self) -> u8 {
        self.into()
    }

    pub fn name(self) -> &'static str {
        match self {
            TagType::End => "End",
            TagType::Byte => "Byte",
            TagType::Short => "Short",
            TagType::Int => "Int",
            TagType::Long => "Long",
            TagType::Float => "Float",
            TagType::Double => "Double",
            TagType::ByteArray => "ByteArray",
            TagType::String => "String",
            TagType::List => "List",
            TagType::Compound => "Compound",
            TagType::IntArray => "IntArray",
            TagType::LongArray => "LongArray",
        }
    }
}

// Crates exist to generate this code for us, but the IDs are fixed by the
// format and writing them out keeps compile times down.
impl TryFrom<u8> for TagType {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, ()> {
        use TagType::*;
        Ok(match value {
            0 => End,
            1 => Byte,
            2 => Short,
            3 => Int,
            4 => Long,
            5 => Float,
            6 => Double,
            7 => ByteArray,
            8 => String,
            9 => List,
            10 => Compound,
            11 => IntArray,
            12 => LongArray,
            13..=u8::MAX => return Err(()),
        })
    }
}

impl From<TagType> for u8 {
    fn from(tag: TagType) -> Self {
        tag as u8
    }
}
