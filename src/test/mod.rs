use std::convert::TryFrom;
use std::io::{Read, Write};

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};

use crate::error::Result;
use crate::{CustomPayload, TagType};


#[allow(clippy::float_cmp)]
mod json;

pub mod builder;
mod nbt;

/// Run `f` on a thread with the usual 2 MiB stack, whatever stack size the
/// test harness was started with.
pub fn on_small_stack(f: impl FnOnce() + Send + 'static) {
    std::thread::Builder::new()
        .stack_size(2 * 1024 * 1024)
        .spawn(f)
        .unwrap()
        .join()
        .unwrap();
}

macro_rules! check_tags {
    {$($tag:ident = $val:literal),* $(,)?} => {
        $(
            assert_eq!(u8::from(TagType::$tag), $val);
            assert_eq!(TagType::try_from($val as u8), Ok(TagType::$tag));
        )*
    };
}

#[test]
fn exhaustive_tag_check() {
    check_tags! {
        End = 0,
        Byte = 1,
        Short = 2,
        Int = 3,
        Long = 4,
        Float = 5,
        Double = 6,
        ByteArray = 7,
        String = 8,
        List = 9,
        Compound = 10,
        IntArray = 11,
        LongArray = 12,
    }

    for value in 13..=u8::MAX {
        assert!(TagType::try_from(value).is_err())
    }
}

/// A custom payload used across the tests: a block position stored as three
/// ints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

pub const BLOCK_POS_ID: u8 = 200;

impl CustomPayload for BlockPos {
    fn read(&mut self, input: &mut dyn Read) -> Result<()> {
        self.x = input.read_i32::<BigEndian>()?;
        self.y = input.read_i32::<BigEndian>()?;
        self.z = input.read_i32::<BigEndian>()?;
        Ok(())
    }

    fn write(&self, output: &mut dyn Write) -> Result<()> {
        output.write_i32::<BigEndian>(self.x)?;
        output.write_i32::<BigEndian>(self.y)?;
        output.write_i32::<BigEndian>(self.z)?;
        Ok(())
    }

    fn write_snbt(&self, out: &mut String) {
        out.push_str(&format!("pos({},{},{})", self.x, self.y, self.z));
    }

    fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::json!([self.x, self.y, self.z]))
    }

    fn from_json(&mut self, value: &serde_json::Value) -> Result<()> {
        let [x, y, z]: [i32; 3] = serde_json::from_value(value.clone())?;
        *self = BlockPos { x, y, z };
        Ok(())
    }
}

pub fn registry_with_block_pos() -> crate::TypeRegistry {
    let mut registry = crate::TypeRegistry::new();
    registry
        .register_custom::<BlockPos>(BLOCK_POS_ID, "BlockPos")
        .unwrap();
    registry
}
